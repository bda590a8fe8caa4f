use crate::config::types::TocConfig;
use crate::utils::error::{BoxResult, TocifyError};

/// Validate a TOC configuration before any document is parsed
pub fn validate_config(config: &TocConfig) -> BoxResult<()> {
    if config.min_level < 1 || config.min_level > 6 {
        return Err(TocifyError::Config(format!(
            "min_level must be between 1 and 6, got {}", config.min_level
        )).into());
    }

    if config.max_level < 1 || config.max_level > 6 {
        return Err(TocifyError::Config(format!(
            "max_level must be between 1 and 6, got {}", config.max_level
        )).into());
    }

    if config.min_level > config.max_level {
        return Err(TocifyError::Config(format!(
            "min_level ({}) cannot exceed max_level ({})",
            config.min_level, config.max_level
        )).into());
    }

    if let Some(prefix) = &config.id_prefix {
        if prefix.is_empty() {
            return Err(TocifyError::Config(
                "id_prefix cannot be empty; omit it to include all headings".to_string()
            ).into());
        }
    }

    Ok(())
}
