use clap::Parser as _;

use crate::{
    commands::{run_command, Cli},
    logging::init_tracing,
};

/// Run the Reelbase CLI application.
///
/// This is the main entry point for the CLI. It parses command-line arguments,
/// initializes tracing, and executes the requested command.
///
/// # Returns
/// Returns `Ok(())` on successful execution, or a `ReelbaseError` on failure.
pub async fn run() -> reelbase::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.json, cli.verbose);

    run_command(cli).await
}
