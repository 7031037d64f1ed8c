//! API Star CLI - validate API schema documents and build documentation
//!
//! This is the main entry point for the `apistar` binary, providing the
//! `validate` and `docs` subcommands.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;
mod render;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::LoggingConfig;
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Initialize logging
    if let Err(e) = logging::init_logging(LoggingConfig::from_env()) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Run the application
    match run(cli) {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli), fields(command = ?cli.command))]
fn run(cli: Cli) -> Result<()> {
    // Load configuration
    tracing::info!("Loading configuration");
    let config = Config::load_with_file(cli.config.as_deref())?;

    // Create output writer; config can force color off, flags win
    let use_color = cli.use_color() && config.output.color;
    let mut output = OutputWriter::new(use_color);

    tracing::info!(command = ?cli.command, "Executing command");

    // Handle the subcommand
    match cli.command {
        Commands::Validate(args) => handlers::handle_validate(args, &config, &mut output),
        Commands::Docs(args) => handlers::handle_docs(args, &config, &mut output),
    }
}
