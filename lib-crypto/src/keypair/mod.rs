//! KeyPair management module
//!
//! secp256k1 key pairs whose addresses and signatures are what the
//! registrar's release flow recovers and compares against.

pub mod generation;

// Re-export main KeyPair type
pub use generation::KeyPair;
