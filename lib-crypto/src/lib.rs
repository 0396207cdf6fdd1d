//! Registrar Cryptography Foundation Module
//!
//! Keccak-256 hashing, ENS name hashing, secp256k1 key pairs and
//! recoverable-signature verification.

pub mod hashing;
pub mod keypair;
pub mod verification;

// Re-export hashing functionality
pub use hashing::{keccak256, keccak256_multiple, eth_signed_message_hash};
pub use hashing::ens::{labelhash, namehash, subnode};

// Re-export keypair functionality
pub use keypair::generation::KeyPair;

// Re-export verification
pub use verification::{recover_signer, recover_signer_from_prehash, SignatureError, SIGNATURE_LENGTH};
