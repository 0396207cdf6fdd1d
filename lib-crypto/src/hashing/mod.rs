//! Hashing module for the registrar cryptography
//!
//! Provides Keccak-256, the hash function used by the name registry for
//! node derivation and by wallets for personal-message signing.
//!
//! Note: this is the original Keccak padding, not the finalized NIST SHA3-256.
//! The two produce different digests for the same input.

pub mod ens;

use sha3::{Digest, Keccak256};

/// Prefix applied to personal messages before hashing (EIP-191, version 0x45)
pub const ETH_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// Keccak-256 hash of a single buffer
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// Hash multiple data segments as if they were concatenated
pub fn keccak256_multiple(data_segments: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for segment in data_segments {
        hasher.update(segment);
    }
    hasher.finalize().into()
}

/// Digest a wallet signs for a personal message
///
/// `keccak256("\x19Ethereum Signed Message:\n" || len(message) || message)` where the
/// length is written in decimal ASCII.
pub fn eth_signed_message_hash(message: &[u8]) -> [u8; 32] {
    let length = message.len().to_string();
    keccak256_multiple(&[ETH_SIGNED_MESSAGE_PREFIX, length.as_bytes(), message])
}
