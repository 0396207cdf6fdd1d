//! Registrar error types
//!
//! Every failure aborts the whole call; the registrar restores its
//! pre-call state before returning any of these.

use lib_crypto::SignatureError;
use lib_types::{Address, Amount, Label};
use thiserror::Error;

use crate::contracts::balances::TransferError;
use crate::contracts::ens::EnsError;

/// Failure category of a [`RegistrarError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller is not a claimant
    Authorization,
    /// Malformed input
    Validation,
    /// Label already owned by someone else
    Conflict,
    /// Attached value does not cover the payouts
    InsufficientFunds,
    /// Release deadline has passed
    ExpiredSignature,
    /// Release signature is unusable or not from the owner
    InvalidSignature,
    /// A registry, resolver or value transfer failed
    External,
}

/// Registrar operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrarError {
    #[error("must be from claimant")]
    NotClaimant { caller: Address },

    #[error("must pass the same number of labels and owners")]
    LengthMismatch {
        labels: usize,
        owners: usize,
        values: usize,
    },

    #[error("the label owner may not be the zero address")]
    ZeroOwner { label: Label },

    #[error("the label owner may not be changed")]
    OwnerConflict {
        label: Label,
        current: Address,
        requested: Address,
    },

    #[error("insufficient value attached: required {required}, attached {attached}")]
    InsufficientValue { required: Amount, attached: Amount },

    #[error("total payout overflows the value type")]
    PayoutOverflow,

    #[error("the signature has expired")]
    SignatureExpired { expiry: u64, now: u64 },

    #[error("signature is not from current owner")]
    SignerMismatch { signer: Address, owner: Address },

    #[error("malformed signature: {0}")]
    MalformedSignature(#[from] SignatureError),

    #[error("name registry call failed: {0}")]
    Registry(#[from] EnsError),

    #[error("value transfer failed: {0}")]
    Transfer(#[from] TransferError),
}

impl RegistrarError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistrarError::NotClaimant { .. } => ErrorKind::Authorization,
            RegistrarError::LengthMismatch { .. } | RegistrarError::ZeroOwner { .. } => {
                ErrorKind::Validation
            }
            RegistrarError::OwnerConflict { .. } => ErrorKind::Conflict,
            RegistrarError::InsufficientValue { .. } | RegistrarError::PayoutOverflow => {
                ErrorKind::InsufficientFunds
            }
            RegistrarError::SignatureExpired { .. } => ErrorKind::ExpiredSignature,
            RegistrarError::SignerMismatch { .. } | RegistrarError::MalformedSignature(_) => {
                ErrorKind::InvalidSignature
            }
            RegistrarError::Registry(_) | RegistrarError::Transfer(_) => ErrorKind::External,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_strings() {
        let caller = Address::zero();
        assert_eq!(RegistrarError::NotClaimant { caller }.to_string(), "must be from claimant");
        assert_eq!(
            RegistrarError::LengthMismatch { labels: 1, owners: 2, values: 1 }.to_string(),
            "must pass the same number of labels and owners"
        );
        assert_eq!(
            RegistrarError::OwnerConflict {
                label: Label::default(),
                current: caller,
                requested: caller
            }
            .to_string(),
            "the label owner may not be changed"
        );
        assert_eq!(
            RegistrarError::SignatureExpired { expiry: 1, now: 2 }.to_string(),
            "the signature has expired"
        );
        assert_eq!(
            RegistrarError::SignerMismatch { signer: caller, owner: caller }.to_string(),
            "signature is not from current owner"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            RegistrarError::InsufficientValue { required: 2, attached: 1 }.kind(),
            ErrorKind::InsufficientFunds
        );
        assert_eq!(
            RegistrarError::ZeroOwner { label: Label::default() }.kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            RegistrarError::from(SignatureError::NonCanonical).kind(),
            ErrorKind::InvalidSignature
        );
        assert_eq!(
            RegistrarError::from(TransferError::Rejected(Address::zero())).kind(),
            ErrorKind::External
        );
    }
}
