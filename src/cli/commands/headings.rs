use log::error;
use std::path::Path;

use crate::cli::types::Commands;
use crate::config;
use crate::headings;
use crate::utils;

/// Handle the headings command: dump the flat extracted sequence
pub fn handle_headings_command(
    command: &Commands,
    input: Option<&Path>,
    output: Option<&Path>,
    config_file: Option<&Path>,
) {
    if let Commands::Headings { json, id_prefix } = command {
        let mut config = match config::load_config(config_file) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Failed to load config: {}", e);
                return;
            }
        };

        if id_prefix.is_some() {
            config.id_prefix = id_prefix.clone();
        }

        let html = match utils::fs::read_input(input) {
            Ok(contents) => contents,
            Err(e) => {
                error!("Failed to read input: {}", e);
                return;
            }
        };

        let records = headings::extract_headings(&html, &config);

        let listing = if *json {
            match serde_json::to_string_pretty(&records) {
                Ok(json) => json,
                Err(e) => {
                    error!("Failed to serialize headings: {}", e);
                    return;
                }
            }
        } else {
            records
                .iter()
                .map(|r| format!("{} #{} {}\n", r.level, r.id, r.title))
                .collect()
        };

        if let Err(e) = utils::fs::write_output(output, &listing) {
            error!("Failed to write output: {}", e);
        }
    }
}
