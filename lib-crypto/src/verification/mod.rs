//! Signature verification module
//!
//! Recovers the signing address from a 65-byte recoverable signature.

pub mod signature_verify;

// Re-export main functions
pub use signature_verify::{
    address_from_verifying_key, recover_signer, recover_signer_from_prehash, SignatureError,
    SIGNATURE_LENGTH,
};
