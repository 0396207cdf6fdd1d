//! KeyPair generation - secp256k1 keys for off-chain release signing
//!
//! Signatures are emitted in the 65-byte `r || s || v` wallet encoding with
//! `v` in {27, 28}, and are always low-`s`.

use std::fmt;

use anyhow::{anyhow, Result};
use k256::ecdsa::{RecoveryId, SigningKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use lib_types::Address;
use rand::rngs::OsRng;

use crate::hashing::eth_signed_message_hash;
use crate::verification::{address_from_verifying_key, recover_signer_from_prehash, SIGNATURE_LENGTH};

/// secp256k1 key pair with its derived account address
#[derive(Clone)]
pub struct KeyPair {
    signing_key: SigningKey,
    address: Address,
}

impl KeyPair {
    /// Generate a new key pair from the operating system's entropy source
    pub fn generate() -> Result<Self> {
        let signing_key = SigningKey::random(&mut OsRng);
        let keypair = Self::from_signing_key(signing_key);
        keypair.validate()?;
        Ok(keypair)
    }

    /// Load a key pair from a 32-byte big-endian secret scalar
    pub fn from_secret_bytes(secret: &[u8]) -> Result<Self> {
        let signing_key = SigningKey::from_slice(secret)
            .map_err(|e| anyhow!("Invalid secp256k1 secret key: {}", e))?;
        Ok(Self::from_signing_key(signing_key))
    }

    /// Load a key pair from a hex secret, with or without `0x`
    pub fn from_secret_hex(secret: &str) -> Result<Self> {
        let trimmed = secret.trim().trim_start_matches("0x");
        let bytes = hex::decode(trimmed).map_err(|e| anyhow!("Invalid secret key hex: {}", e))?;
        Self::from_secret_bytes(&bytes)
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let address = address_from_verifying_key(signing_key.verifying_key());
        Self { signing_key, address }
    }

    /// Account address controlled by this key
    pub fn address(&self) -> Address {
        self.address
    }

    /// Uncompressed SEC1 public key (65 bytes, 0x04 tag first)
    pub fn public_key_bytes(&self) -> Vec<u8> {
        k256::PublicKey::from(self.signing_key.verifying_key())
            .to_encoded_point(false)
            .as_bytes()
            .to_vec()
    }

    /// Sign a 32-byte digest as-is
    pub fn sign_prehash(&self, prehash: &[u8; 32]) -> Result<[u8; SIGNATURE_LENGTH]> {
        let (mut signature, mut recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(prehash)
            .map_err(|e| anyhow!("Signing failed: {}", e))?;

        if let Some(normalized) = signature.normalize_s() {
            signature = normalized;
            recovery_id = RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced());
        }

        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..64].copy_from_slice(&signature.to_bytes());
        out[64] = recovery_id.to_byte() + 27;
        Ok(out)
    }

    /// Sign a personal message (EIP-191 prefixed, what wallets do for `eth_sign`)
    pub fn sign_message(&self, message: &[u8]) -> Result<[u8; SIGNATURE_LENGTH]> {
        self.sign_prehash(&eth_signed_message_hash(message))
    }

    /// Check that a test signature recovers to this key's address
    pub fn validate(&self) -> Result<()> {
        let test_digest = eth_signed_message_hash(b"registrar-keypair-validation");
        let signature = self.sign_prehash(&test_digest)?;
        let recovered = recover_signer_from_prehash(&test_digest, &signature)
            .map_err(|e| anyhow!("Keypair validation failed: {}", e))?;

        if recovered != self.address {
            return Err(anyhow!("Keypair validation failed: recovered {} != {}", recovered, self.address));
        }

        Ok(())
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_secret_derives_known_address() {
        let mut secret = [0u8; 32];
        secret[31] = 1;
        let keypair = KeyPair::from_secret_bytes(&secret).unwrap();
        assert_eq!(
            keypair.address().to_string(),
            "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf"
        );
    }

    #[test]
    fn test_hex_and_bytes_agree() {
        let keypair = KeyPair::from_secret_hex(
            "0x0000000000000000000000000000000000000000000000000000000000000001",
        )
        .unwrap();
        assert_eq!(
            keypair.address().to_string(),
            "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf"
        );
        assert_eq!(keypair.public_key_bytes().len(), 65);
    }

    #[test]
    fn test_zero_secret_rejected() {
        assert!(KeyPair::from_secret_bytes(&[0u8; 32]).is_err());
    }

    #[test]
    fn test_generated_keys_are_distinct_and_valid() {
        let a = KeyPair::generate().unwrap();
        let b = KeyPair::generate().unwrap();
        assert_ne!(a.address(), b.address());
        a.validate().unwrap();
    }

    #[test]
    fn test_signature_uses_legacy_v() {
        let keypair = KeyPair::generate().unwrap();
        let signature = keypair.sign_message(b"hello").unwrap();
        assert!(signature[64] == 27 || signature[64] == 28);
    }

    #[test]
    fn test_debug_hides_secret() {
        let keypair = KeyPair::generate().unwrap();
        let rendered = format!("{:?}", keypair);
        assert!(rendered.contains("address"));
        assert!(!rendered.contains("signing_key"));
    }
}
