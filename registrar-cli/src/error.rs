//! Structured error types for the registrar CLI

use lib_crypto::SignatureError;
use lib_registrar::ConfigError;
use thiserror::Error;

/// Registrar CLI error types
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid hex for {field}: {reason}")]
    InvalidHex { field: String, reason: String },

    #[error("Invalid signing key: {0}")]
    InvalidKey(String),

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Signature verification failed: {0}")]
    Signature(#[from] SignatureError),

    #[error("No contract address: pass --contract or point --config at a registrar config")]
    MissingContract,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<String> for CliError {
    fn from(s: String) -> Self {
        CliError::Other(s)
    }
}

impl From<&str> for CliError {
    fn from(s: &str) -> Self {
        CliError::Other(s.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
