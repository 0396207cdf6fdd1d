//! Registrar CLI Library
//!
//! Off-chain tooling for registrar operators and label owners: name
//! hashing, release sign data, release signing and signer recovery.
//!
//! ## Architecture
//!
//! - **Functional Core** (`logic/` module): pure functions, no I/O
//! - **Imperative Shell** (`commands/` module): config lookup, printing
//! - **Error Handling** (`error` module): structured CLI errors
//! - **Output Abstraction** (`output` module): testable printing interface

pub mod argument_parsing;
pub mod commands;
pub mod error;
pub mod logic;
pub mod output;

pub use argument_parsing::{format_output, run_cli, RegistrarCli, RegistrarCommand};
pub use error::{CliError, CliResult};
pub use output::Output;

/// Registrar CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
