pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;

use crate::cli::types::{Cli, Commands, OutputFormat};

/// Run the command-line interface
pub fn run() {
    let cli = Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    match &cli.command {
        Some(Commands::Generate { .. }) => {
            commands::handle_generate_command(
                cli.command.as_ref().unwrap(),
                cli.input.as_deref(),
                cli.output.as_deref(),
                cli.config.as_deref(),
            );
        }
        Some(Commands::Headings { .. }) => {
            commands::handle_headings_command(
                cli.command.as_ref().unwrap(),
                cli.input.as_deref(),
                cli.output.as_deref(),
                cli.config.as_deref(),
            );
        }
        None => {
            // Default to HTML generation if no subcommand provided
            let default = Commands::Generate {
                format: OutputFormat::Html,
                min_level: None,
                max_level: None,
                id_prefix: None,
                ordered: false,
                verbose: false,
                quiet: false,
            };
            commands::handle_generate_command(
                &default,
                cli.input.as_deref(),
                cli.output.as_deref(),
                cli.config.as_deref(),
            );
        }
    }
}
