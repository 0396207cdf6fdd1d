//! Release authorization logic
//!
//! Builds the packed payload an owner signs to give up a label, signs it
//! with a local key, and recovers the signer from a submitted signature.
//! All pure: keys and bytes in, bytes and addresses out.

use lib_crypto::{labelhash, recover_signer, KeyPair, SIGNATURE_LENGTH};
use lib_registrar::release_sign_data_for;
use lib_types::{Address, Label, Timestamp};

use super::names::validate_fragment;
use crate::error::{CliError, CliResult};

/// Everything that is bound into a release signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRequest {
    pub contract: Address,
    pub fragment: String,
    pub label: Label,
    pub expiry: Timestamp,
}

impl ReleaseRequest {
    pub fn new(contract: Address, fragment: &str, expiry: Timestamp) -> CliResult<Self> {
        validate_fragment(fragment)?;
        Ok(Self {
            contract,
            fragment: fragment.to_string(),
            label: labelhash(fragment),
            expiry,
        })
    }

    /// Packed 84-byte payload the owner signs
    pub fn sign_data(&self) -> Vec<u8> {
        release_sign_data_for(&self.contract, &self.label, self.expiry)
    }
}

/// Decode hex with or without a `0x` prefix
pub fn parse_hex_bytes(field: &str, raw: &str) -> CliResult<Vec<u8>> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits).map_err(|e| CliError::InvalidHex {
        field: field.to_string(),
        reason: e.to_string(),
    })
}

/// Sign a release request with a hex-encoded secret key
pub fn sign_release(secret_hex: &str, request: &ReleaseRequest) -> CliResult<(Address, [u8; SIGNATURE_LENGTH])> {
    let keypair = KeyPair::from_secret_hex(secret_hex).map_err(|e| CliError::InvalidKey(e.to_string()))?;
    let signature = keypair
        .sign_message(&request.sign_data())
        .map_err(|e| CliError::SigningFailed(e.to_string()))?;
    Ok((keypair.address(), signature))
}

/// Address whose key produced `signature` over the request
pub fn recover_release_signer(request: &ReleaseRequest, signature: &[u8]) -> CliResult<Address> {
    Ok(recover_signer(&request.sign_data(), signature)?)
}
