//! A release signed with the CLI is accepted by the registrar it targets.

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use lib_crypto::{labelhash, namehash, KeyPair};
use lib_registrar::{
    load_config, ExecutionContext, MemoryBalances, MemoryNameRegistry, MemoryPublicResolver,
    NameRegistry, ReleaseOutcome, SubdomainRegistrar,
};
use lib_types::Node;
use registrar_cli::commands::{release, resolve_contract};
use registrar_cli::{RegistrarCli, RegistrarCommand};

const OWNER_SECRET: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

fn write_config() -> Result<tempfile::NamedTempFile> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"contract_address = "0x00000000000000000000000000000000000000c0"
registry_address = "0x314159265dd8dbb310642f98f50c066173c1259b"
public_resolver_address = "0x00000000000000000000000000000000000000e5"
root_name = "ethvault.xyz"
"#
    )?;
    Ok(file)
}

#[test]
fn test_cli_signature_releases_label() -> Result<()> {
    let config_file = write_config()?;
    let config = load_config(config_file.path())?;
    let owner = KeyPair::from_secret_hex(OWNER_SECRET)?;
    let deployer = KeyPair::generate()?.address();

    let mut registry = MemoryNameRegistry::new(deployer);
    registry.set_subnode_owner(&deployer, &Node::zero(), &labelhash("xyz"), deployer)?;
    registry.set_subnode_owner(&deployer, &namehash("xyz"), &labelhash("ethvault"), config.contract_address)?;
    let mut registrar = SubdomainRegistrar::new(
        &config,
        deployer,
        registry,
        MemoryPublicResolver::new(),
        MemoryBalances::new(),
    );
    registrar.register(&ExecutionContext::new(deployer, 1, 100), &[labelhash("moody")], &[owner.address()], &[0])?;

    let path = config_file.path().to_string_lossy().to_string();
    let cli = RegistrarCli::try_parse_from([
        "registrar", "--config", &path, "sign-release", "--label", "moody", "--expiry", "500", "--key", OWNER_SECRET,
    ])?;
    let (args, key) = match &cli.command {
        RegistrarCommand::SignRelease { release, key } => (release.clone(), key.clone()),
        other => panic!("unexpected command {:?}", other),
    };

    let contract = resolve_contract(args.contract, cli.config.as_deref())?;
    assert_eq!(contract, config.contract_address);

    let report = release::sign_release_report(contract, &args, &key)?;
    assert_eq!(report["signer"], owner.address().to_string());

    let signature_hex = report["signature"].as_str().unwrap_or_default();
    let signature = hex::decode(signature_hex.trim_start_matches("0x"))?;

    let outcome = registrar.release(&ExecutionContext::new(deployer, 2, 400), &labelhash("moody"), 500, &signature)?;
    assert_eq!(outcome, ReleaseOutcome::Released { previous_owner: owner.address() });
    Ok(())
}

#[test]
fn test_sign_data_matches_registrar() -> Result<()> {
    let config_file = write_config()?;
    let config = load_config(config_file.path())?;
    let registrar = SubdomainRegistrar::new(
        &config,
        KeyPair::generate()?.address(),
        MemoryNameRegistry::new(config.contract_address),
        MemoryPublicResolver::new(),
        MemoryBalances::new(),
    );

    let path = config_file.path().to_string_lossy().to_string();
    let cli = RegistrarCli::try_parse_from(["registrar", "-c", &path, "sign-data", "-l", "moody", "-e", "42"])?;
    let args = match &cli.command {
        RegistrarCommand::SignData(args) => args.clone(),
        other => panic!("unexpected command {:?}", other),
    };

    let contract = resolve_contract(args.contract, cli.config.as_deref())?;
    let report = release::sign_data_report(contract, &args)?;
    let expected = format!("0x{}", hex::encode(registrar.release_sign_data(&labelhash("moody"), 42)));
    assert_eq!(report["sign_data"], expected);
    Ok(())
}
