use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::types::TocConfig;
use crate::config::validation;
use crate::utils::error::{BoxResult, TocifyError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 3] = ["tocify.yml", "tocify.yaml", "tocify.toml"];

/// Load TOC configuration from a config file.
///
/// When no explicit path is given, the default file names are probed in
/// the working directory; if none exists the defaults are used.
pub fn load_config(config_file: Option<&Path>) -> BoxResult<TocConfig> {
    let config_path = match config_file {
        Some(path) => {
            if !path.exists() {
                return Err(TocifyError::Config(format!(
                    "Configuration file not found: {}", path.display()
                )).into());
            }
            Some(path.to_path_buf())
        }
        None => find_default_config_file(),
    };

    let config = match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            parse_config_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            TocConfig::default()
        }
    };

    // Validate the config
    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the first default configuration file that exists
fn find_default_config_file() -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

/// Parse a configuration file based on its extension
fn parse_config_file(path: &Path) -> BoxResult<TocConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| TocifyError::Config(format!(
            "Failed to read configuration file {}: {}", path.display(), e
        )))?;

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yml" | "yaml" => serde_yaml::from_str(&content).map_err(|e| {
            TocifyError::Config(format!("Invalid YAML in {}: {}", path.display(), e)).into()
        }),
        "toml" => toml::from_str(&content).map_err(|e| {
            TocifyError::Config(format!("Invalid TOML in {}: {}", path.display(), e)).into()
        }),
        "json" => serde_json::from_str(&content).map_err(|e| {
            TocifyError::Config(format!("Invalid JSON in {}: {}", path.display(), e)).into()
        }),
        _ => Err(TocifyError::Config(format!(
            "Unsupported configuration format: {}", path.display()
        )).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_config_parses_with_defaults() {
        let yaml = "min_level: 2\nid_prefix: toc_\n";
        let config: TocConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.min_level, 2);
        assert_eq!(config.max_level, 6);
        assert_eq!(config.id_prefix.as_deref(), Some("toc_"));
        assert_eq!(config.list_class, "toc");
    }

    #[test]
    fn test_toml_config_parses() {
        let toml_src = "max_level = 3\nordered_list = true\nlist_class = \"contents\"\n";
        let config: TocConfig = toml::from_str(toml_src).unwrap();

        assert_eq!(config.min_level, 1);
        assert_eq!(config.max_level, 3);
        assert!(config.ordered_list);
        assert_eq!(config.list_class, "contents");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = load_config(Some(Path::new("does-not-exist.yml")));
        assert!(result.is_err());
    }
}
