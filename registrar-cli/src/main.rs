//! Registrar Command-Line Interface
//!
//! Entry point for the `registrar` binary. Parses command-line arguments
//! and delegates to the appropriate command handler.

use registrar_cli::run_cli;

fn main() -> anyhow::Result<()> {
    run_cli()
}
