//! Signature-authorized release
//!
//! A label's owner signs `release_sign_data(label, expiry)` off-chain as a
//! personal message. Anyone may then submit that signature; the registrar
//! checks the deadline and that the signature recovers to the ledger owner.
//!
//! # Sign data layout
//!
//! ```text
//! registrar address (20) || label (32) || expiry as uint256 big-endian (32)
//! ```
//!
//! Binding the registrar address stops replay against another registrar;
//! binding the label and expiry stops replay against another label or after
//! the signer's deadline.

use lib_crypto::{recover_signer, subnode};
use lib_types::{Address, Label, Timestamp};
use tracing::{debug, info};

use super::core::SubdomainRegistrar;
use super::errors::RegistrarError;
use super::events::RegistrarEvent;
use crate::contracts::balances::NativeBalances;
use crate::contracts::ens::{AddressResolver, NameRegistry};
use crate::contracts::executor::ExecutionContext;

/// Length of the packed release payload
pub const RELEASE_SIGN_DATA_LENGTH: usize = 20 + 32 + 32;

/// Outcome of a committed `release` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The label was owned and is now unclaimed
    Released { previous_owner: Address },
    /// The label had no owner; nothing changed
    NotOwned,
}

/// Packed release payload for a registrar at `registrar`
pub fn release_sign_data_for(registrar: &Address, label: &Label, expiry: Timestamp) -> Vec<u8> {
    let mut data = Vec::with_capacity(RELEASE_SIGN_DATA_LENGTH);
    data.extend_from_slice(registrar.as_bytes());
    data.extend_from_slice(label.as_bytes());
    data.extend_from_slice(&[0u8; 24]);
    data.extend_from_slice(&expiry.to_be_bytes());
    data
}

impl<R, A, B> SubdomainRegistrar<R, A, B>
where
    R: NameRegistry + Clone,
    A: AddressResolver + Clone,
    B: NativeBalances + Clone,
{
    /// Bytes the current owner must sign to release `label` until `expiry`
    pub fn release_sign_data(&self, label: &Label, expiry: Timestamp) -> Vec<u8> {
        release_sign_data_for(&self.address, label, expiry)
    }

    /// Release `label` on the strength of its owner's signature
    ///
    /// Callable by anyone. Releasing an unowned label succeeds without
    /// looking at the signature. The resolver record is left as is and goes
    /// stale until the label is registered again.
    ///
    /// # Errors
    /// - `SignatureExpired` if the block time is past `expiry`
    /// - `MalformedSignature` if no signer can be recovered
    /// - `SignerMismatch` if the signer is not the label's ledger owner
    pub fn release(
        &mut self,
        ctx: &ExecutionContext,
        label: &Label,
        expiry: Timestamp,
        signature: &[u8],
    ) -> Result<ReleaseOutcome, RegistrarError> {
        self.transact("release", |this| this.release_inner(ctx, label, expiry, signature))
    }

    fn release_inner(
        &mut self,
        ctx: &ExecutionContext,
        label: &Label,
        expiry: Timestamp,
        signature: &[u8],
    ) -> Result<ReleaseOutcome, RegistrarError> {
        // === CHECKS ===
        let owner = match self.ledger.owner_of(label) {
            Some(owner) => owner,
            None => {
                debug!("Label {} is not owned, release is a no-op", label);
                return Ok(ReleaseOutcome::NotOwned);
            }
        };

        if ctx.timestamp > expiry {
            return Err(RegistrarError::SignatureExpired {
                expiry,
                now: ctx.timestamp,
            });
        }

        let signer = recover_signer(&self.release_sign_data(label, expiry), signature)?;
        if signer != owner {
            return Err(RegistrarError::SignerMismatch { signer, owner });
        }

        // === EFFECTS ===
        self.ledger.clear(label);

        // === INTERACTIONS ===
        let (address, root) = (self.address, self.root_node);
        self.registry
            .set_subnode_owner(&address, &root, label, Address::zero())?;

        info!("Label {} released by {} (submitted by {})", label, owner, ctx.caller);
        self.logs.push(RegistrarEvent::LabelReleased {
            label: *label,
            node: subnode(&root, label),
            previous_owner: owner,
            submitter: ctx.caller,
            block_number: ctx.block_number,
        });

        Ok(ReleaseOutcome::Released { previous_owner: owner })
    }
}
