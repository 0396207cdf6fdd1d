//! Recoverable signature verification
//!
//! Signatures are the 65-byte `r || s || v` encoding produced by wallets.
//! `v` may be the raw recovery id (0/1) or the legacy 27/28 form.
//! Only low-`s` signatures are accepted so that a valid signature cannot be
//! turned into a second valid encoding by negating `s`.

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use lib_types::Address;
use thiserror::Error;

use crate::hashing::{eth_signed_message_hash, keccak256};

/// Length of an `r || s || v` signature
pub const SIGNATURE_LENGTH: usize = 65;

/// Reasons a signature cannot yield a signer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("signature must be {expected} bytes (got {actual})")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid recovery byte {0}")]
    InvalidRecoveryId(u8),

    #[error("signature s value is not in the lower half order")]
    NonCanonical,

    #[error("malformed signature scalars")]
    Malformed,

    #[error("public key recovery failed")]
    RecoveryFailed,
}

/// Account address of a secp256k1 public key
///
/// Last 20 bytes of keccak256 over the uncompressed point without its 0x04 tag.
pub fn address_from_verifying_key(key: &VerifyingKey) -> Address {
    let point = k256::PublicKey::from(key).to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);
    let mut raw = [0u8; 20];
    raw.copy_from_slice(&hash[12..]);
    Address::new(raw)
}

/// Recover the signer of a personal message (EIP-191 prefixed)
pub fn recover_signer(message: &[u8], signature: &[u8]) -> Result<Address, SignatureError> {
    recover_signer_from_prehash(&eth_signed_message_hash(message), signature)
}

/// Recover the signer of an already-hashed 32-byte digest
pub fn recover_signer_from_prehash(
    prehash: &[u8; 32],
    signature: &[u8],
) -> Result<Address, SignatureError> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(SignatureError::InvalidLength {
            expected: SIGNATURE_LENGTH,
            actual: signature.len(),
        });
    }

    let v = signature[64];
    let recovery_byte = match v {
        0 | 1 => v,
        27 | 28 => v - 27,
        other => return Err(SignatureError::InvalidRecoveryId(other)),
    };
    let recovery_id =
        RecoveryId::from_byte(recovery_byte).ok_or(SignatureError::InvalidRecoveryId(v))?;

    let sig = Signature::from_slice(&signature[..64]).map_err(|_| SignatureError::Malformed)?;
    if sig.normalize_s().is_some() {
        return Err(SignatureError::NonCanonical);
    }

    let key = VerifyingKey::recover_from_prehash(prehash, &sig, recovery_id)
        .map_err(|_| SignatureError::RecoveryFailed)?;

    Ok(address_from_verifying_key(&key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypair::KeyPair;
    use k256::elliptic_curve::PrimeField;

    #[test]
    fn test_recovers_signer_of_personal_message() {
        let keypair = KeyPair::generate().unwrap();
        let signature = keypair.sign_message(b"release me").unwrap();

        let signer = recover_signer(b"release me", &signature).unwrap();
        assert_eq!(signer, keypair.address());
    }

    #[test]
    fn test_different_message_recovers_different_address() {
        let keypair = KeyPair::generate().unwrap();
        let signature = keypair.sign_message(b"release me").unwrap();

        let signer = recover_signer(b"release someone else", &signature).unwrap();
        assert_ne!(signer, keypair.address());
    }

    #[test]
    fn test_accepts_raw_recovery_id() {
        let keypair = KeyPair::generate().unwrap();
        let mut signature = keypair.sign_message(b"payload").unwrap();
        signature[64] -= 27;

        assert_eq!(recover_signer(b"payload", &signature).unwrap(), keypair.address());
    }

    #[test]
    fn test_rejects_wrong_length() {
        let err = recover_signer(b"payload", &[0u8; 64]).unwrap_err();
        assert_eq!(err, SignatureError::InvalidLength { expected: 65, actual: 64 });
    }

    #[test]
    fn test_rejects_unknown_recovery_byte() {
        let keypair = KeyPair::generate().unwrap();
        let mut signature = keypair.sign_message(b"payload").unwrap();
        signature[64] = 29;

        assert_eq!(
            recover_signer(b"payload", &signature).unwrap_err(),
            SignatureError::InvalidRecoveryId(29)
        );
    }

    #[test]
    fn test_rejects_zero_scalars() {
        let mut signature = [0u8; 65];
        signature[64] = 27;
        assert_eq!(
            recover_signer(b"payload", &signature).unwrap_err(),
            SignatureError::Malformed
        );
    }

    #[test]
    fn test_rejects_high_s() {
        let keypair = KeyPair::generate().unwrap();
        let signature = keypair.sign_message(b"payload").unwrap();

        let low = Signature::from_slice(&signature[..64]).unwrap();
        let (r, s) = low.split_scalars();
        let high_s = -*s;

        let mut malleated = [0u8; 65];
        malleated[..32].copy_from_slice(&r.to_repr());
        malleated[32..64].copy_from_slice(&high_s.to_repr());
        malleated[64] = 55 - signature[64]; // 27 <-> 28

        assert_eq!(
            recover_signer(b"payload", &malleated).unwrap_err(),
            SignatureError::NonCanonical
        );
    }
}
