//! Native value balances
//!
//! The registrar forwards attached value to newly registered owners and
//! refunds the remainder. [`NativeBalances`] is the seam it transfers
//! through; [`MemoryBalances`] is a plain account book used by tests and
//! local harnesses.

use std::collections::{HashMap, HashSet};

use lib_types::{Address, Amount};
use thiserror::Error;

/// Errors for value transfers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("insufficient balance in {account}: required {required}, available {available}")]
    InsufficientBalance {
        account: Address,
        required: Amount,
        available: Amount,
    },

    #[error("recipient {0} rejected the transfer")]
    Rejected(Address),

    #[error("balance overflow crediting {0}")]
    Overflow(Address),
}

/// Native value ledger
pub trait NativeBalances {
    fn balance_of(&self, account: &Address) -> Amount;

    /// Move `amount` from `from` to `to`. Zero-value transfers still reach
    /// the recipient and may be rejected by it.
    fn transfer(&mut self, from: &Address, to: &Address, amount: Amount) -> Result<(), TransferError>;
}

/// In-memory account book
#[derive(Debug, Clone, Default)]
pub struct MemoryBalances {
    balances: HashMap<Address, Amount>,
    /// Accounts that refuse incoming value, like a contract without a payable fallback
    rejecting: HashSet<Address>,
}

impl MemoryBalances {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint `amount` into `account` (genesis funding)
    pub fn credit(&mut self, account: Address, amount: Amount) -> Result<(), TransferError> {
        let balance = self.balance_of(&account);
        let updated = balance
            .checked_add(amount)
            .ok_or(TransferError::Overflow(account))?;
        self.balances.insert(account, updated);
        Ok(())
    }

    /// Make every future transfer to `account` fail
    pub fn reject_transfers_to(&mut self, account: Address) {
        self.rejecting.insert(account);
    }

    /// Sum of all balances
    pub fn total_supply(&self) -> Amount {
        self.balances.values().sum()
    }
}

impl NativeBalances for MemoryBalances {
    fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    fn transfer(&mut self, from: &Address, to: &Address, amount: Amount) -> Result<(), TransferError> {
        if self.rejecting.contains(to) {
            return Err(TransferError::Rejected(*to));
        }

        let source_balance = self.balance_of(from);
        if source_balance < amount {
            return Err(TransferError::InsufficientBalance {
                account: *from,
                required: amount,
                available: source_balance,
            });
        }

        if from == to {
            return Ok(());
        }

        let to_balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(TransferError::Overflow(*to))?;

        self.balances.insert(*from, source_balance - amount);
        self.balances.insert(*to, to_balance);
        Ok(())
    }
}
