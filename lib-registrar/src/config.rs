//! Registrar configuration loader.
//!
//! Construction parameters are fixed for the registrar's lifetime: its own
//! address, the name registry and public resolver it drives, and the root
//! name it administers.
//!
//! ```toml
//! contract_address = "0x..."
//! registry_address = "0x314159265dd8dbb310642f98f50c066173c1259b"
//! public_resolver_address = "0x..."
//! root_name = "ethvault.xyz"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use lib_crypto::namehash;
use lib_types::{Address, Node};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid registrar config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid registrar config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrarConfig {
    /// Account of the registrar contract itself
    pub contract_address: Address,
    /// Name registry the registrar drives
    pub registry_address: Address,
    /// Resolver assigned to every registered node
    pub public_resolver_address: Address,
    /// Root name, e.g. `ethvault.xyz`
    pub root_name: String,
}

impl RegistrarConfig {
    /// Namehash of the root name
    pub fn root_node(&self) -> Node {
        namehash(&self.root_name)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: RegistrarConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root_name.trim().is_empty() {
            return Err(ConfigError::Invalid("root_name cannot be empty".to_string()));
        }
        if self.root_name != self.root_name.to_lowercase() {
            return Err(ConfigError::Invalid(format!(
                "root_name '{}' must be normalized to lowercase",
                self.root_name
            )));
        }

        let addresses = [
            ("contract_address", &self.contract_address),
            ("registry_address", &self.registry_address),
            ("public_resolver_address", &self.public_resolver_address),
        ];
        for (field, address) in addresses {
            if address.is_zero() {
                return Err(ConfigError::Invalid(format!("{} cannot be zero", field)));
            }
        }

        Ok(())
    }
}

/// Load and validate a registrar config file
pub fn load_config(path: &Path) -> Result<RegistrarConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path)?;
    RegistrarConfig::from_toml_str(&raw)
}
