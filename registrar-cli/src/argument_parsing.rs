//! Registrar CLI
//!
//! Command-line interface for registrar operators and label owners.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use lib_types::{Address, Timestamp};
use serde_json::Value;

use crate::commands;
use crate::error::{CliError, CliResult};
use crate::output::ConsoleOutput;

/// Subdomain registrar tooling
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(name = "registrar")]
pub struct RegistrarCli {
    /// Enable verbose output
    #[arg(short, long, env = "REGISTRAR_VERBOSE")]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_parser = ["text", "json"], env = "REGISTRAR_FORMAT")]
    pub format: String,

    /// Registrar configuration file (supplies the contract address)
    #[arg(short, long, env = "REGISTRAR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: RegistrarCommand,
}

/// Registrar commands
#[derive(Subcommand, Debug, Clone)]
pub enum RegistrarCommand {
    /// Compute the namehash of a dotted name
    Namehash {
        /// Name such as `moody.ethvault.xyz`
        name: String,
    },

    /// Compute the labelhash of a single label
    Labelhash {
        /// Label such as `moody`
        fragment: String,
    },

    /// Print the bytes an owner must sign to release a label
    SignData(ReleaseArgs),

    /// Sign a release with a local secret key
    SignRelease {
        #[command(flatten)]
        release: ReleaseArgs,
        /// Hex-encoded secp256k1 secret key of the label owner
        #[arg(short, long, env = "REGISTRAR_OWNER_KEY", hide_env_values = true)]
        key: String,
    },

    /// Recover the address that signed a release
    Recover {
        #[command(flatten)]
        release: ReleaseArgs,
        /// 65-byte hex signature (r || s || v)
        #[arg(short, long)]
        signature: String,
    },
}

/// Fields bound into a release signature
#[derive(Args, Debug, Clone)]
pub struct ReleaseArgs {
    /// Label to release, e.g. `moody`
    #[arg(short, long)]
    pub label: String,

    /// Unix timestamp after which the signature is void
    #[arg(short, long)]
    pub expiry: Timestamp,

    /// Registrar contract address (defaults to the config file's)
    #[arg(long)]
    pub contract: Option<Address>,
}

/// Main CLI runner
pub fn run_cli() -> Result<()> {
    let cli = RegistrarCli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    // Failures are already printed by the console output.
    if commands::run_command(&cli, &ConsoleOutput).is_err() {
        std::process::exit(1);
    }
    Ok(())
}

/// Format output data as `text` or `json`
pub fn format_output(data: &Value, format: &str) -> CliResult<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(data)?),
        "text" => {
            if let Some(obj) = data.as_object() {
                let mut result = String::new();
                for (key, value) in obj {
                    let rendered = match value {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    result.push_str(&format!("{:<12} {}\n", key, rendered));
                }
                Ok(result.trim_end().to_string())
            } else {
                Ok(data.to_string())
            }
        }
        other => Err(CliError::UnsupportedFormat(other.to_string())),
    }
}
