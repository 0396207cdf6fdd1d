//! Loading registrar configuration from disk

use std::io::Write;

use anyhow::Result;
use lib_crypto::namehash;
use lib_registrar::{load_config, ConfigError};
use tempfile::{tempdir, NamedTempFile};

#[test]
fn test_load_config_from_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"contract_address = "0x00000000000000000000000000000000000000c0"
registry_address = "0x314159265dd8dbb310642f98f50c066173c1259b"
public_resolver_address = "0x00000000000000000000000000000000000000e5"
root_name = "ethvault.xyz""#
    )?;

    let config = load_config(file.path())?;
    assert_eq!(config.root_name, "ethvault.xyz");
    assert_eq!(config.root_node(), namehash("ethvault.xyz"));
    Ok(())
}

#[test]
fn test_missing_config_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("registrar.toml");

    match load_config(&path) {
        Err(ConfigError::NotFound(missing)) => assert_eq!(missing, path),
        other => panic!("expected NotFound, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_malformed_config_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "root_name = ")?;

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("Invalid registrar config"));
    Ok(())
}
