use log::{info, error, LevelFilter};
use std::path::Path;

use crate::cli::types::{Commands, OutputFormat};
use crate::cli::logging::set_log_level;
use crate::config;
use crate::headings;
use crate::outline;
use crate::render;
use crate::utils;

/// Handle the generate command
pub fn handle_generate_command(
    command: &Commands,
    input: Option<&Path>,
    output: Option<&Path>,
    config_file: Option<&Path>,
) {
    if let Commands::Generate {
        format,
        min_level,
        max_level,
        id_prefix,
        ordered,
        verbose,
        quiet,
    } = command
    {
        // Set log level based on command line options
        if *verbose {
            set_log_level(LevelFilter::Debug);
        } else if *quiet {
            set_log_level(LevelFilter::Error);
        }

        // Create configuration
        let mut config = match config::load_config(config_file) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Failed to load config: {}", e);
                return;
            }
        };

        // Override config with command line arguments if provided
        if let Some(min) = min_level {
            config.min_level = *min;
        }
        if let Some(max) = max_level {
            config.max_level = *max;
        }
        if id_prefix.is_some() {
            config.id_prefix = id_prefix.clone();
        }
        if *ordered {
            config.ordered_list = true;
        }

        // Flag overrides bypass the loader, re-check the merged result
        if let Err(e) = config::validate_config(&config) {
            error!("Invalid configuration: {}", e);
            return;
        }

        let html = match utils::fs::read_input(input) {
            Ok(contents) => contents,
            Err(e) => {
                error!("Failed to read input: {}", e);
                return;
            }
        };

        let records = headings::extract_headings(&html, &config);
        info!("Extracted {} headings", records.len());

        let tree = outline::build_outline(&records);

        let rendered = match format {
            OutputFormat::Html => render::render_html(&tree, &config),
            OutputFormat::Markdown => render::render_markdown(&tree),
            OutputFormat::Json => match serde_json::to_string_pretty(&tree) {
                Ok(json) => json,
                Err(e) => {
                    error!("Failed to serialize outline: {}", e);
                    return;
                }
            },
        };

        match utils::fs::write_output(output, &rendered) {
            Ok(_) => {
                if let Some(path) = output {
                    info!("Table of contents written to {}", path.display());
                }
            }
            Err(e) => error!("Failed to write output: {}", e),
        }
    }
}
