//! Command handlers (imperative shell)
//!
//! Each handler resolves its inputs, calls into `logic`, and prints a
//! report through an [`Output`].

pub mod hash;
pub mod release;

use std::path::Path;

use lib_registrar::load_config;
use lib_types::Address;
use serde_json::Value;
use tracing::debug;

use crate::argument_parsing::{format_output, RegistrarCli, RegistrarCommand};
use crate::error::{CliError, CliResult};
use crate::output::Output;

/// Dispatch a parsed command line, reporting any failure through `output`
pub fn run_command(cli: &RegistrarCli, output: &dyn Output) -> CliResult<()> {
    if let Err(e) = handle_command(cli, output) {
        output.error(&e.to_string())?;
        return Err(e);
    }
    Ok(())
}

/// Dispatch a parsed command line
pub fn handle_command(cli: &RegistrarCli, output: &dyn Output) -> CliResult<()> {
    let report = match &cli.command {
        RegistrarCommand::Namehash { name } => hash::namehash_report(name)?,
        RegistrarCommand::Labelhash { fragment } => hash::labelhash_report(fragment)?,
        RegistrarCommand::SignData(args) => {
            let contract = resolve_contract(args.contract, cli.config.as_deref())?;
            release::sign_data_report(contract, args)?
        }
        RegistrarCommand::SignRelease { release: args, key } => {
            let contract = resolve_contract(args.contract, cli.config.as_deref())?;
            release::sign_release_report(contract, args, key)?
        }
        RegistrarCommand::Recover { release: args, signature } => {
            let contract = resolve_contract(args.contract, cli.config.as_deref())?;
            release::recover_report(contract, args, signature)?
        }
    };

    print_report(output, &report, &cli.format)
}

/// Registrar address from the command line, falling back to the config file
pub fn resolve_contract(explicit: Option<Address>, config_path: Option<&Path>) -> CliResult<Address> {
    if let Some(contract) = explicit {
        return Ok(contract);
    }

    let path = config_path.ok_or(CliError::MissingContract)?;
    let config = load_config(path)?;
    debug!("Using contract {} from {}", config.contract_address, path.display());
    Ok(config.contract_address)
}

pub fn print_report(output: &dyn Output, report: &Value, format: &str) -> CliResult<()> {
    output.print(&format_output(report, format)?)
}
