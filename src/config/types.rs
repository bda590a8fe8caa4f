use serde::{Serialize, Deserialize};

use crate::config::defaults;

/// Table of contents configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocConfig {
    /// Minimum heading level to include (h1 = 1)
    #[serde(default = "defaults::default_min_level")]
    pub min_level: usize,

    /// Maximum heading level to include
    #[serde(default = "defaults::default_max_level")]
    pub max_level: usize,

    /// Only include headings whose id starts with this prefix
    #[serde(default)]
    pub id_prefix: Option<String>,

    /// Render an ordered list instead of an unordered one
    #[serde(default)]
    pub ordered_list: bool,

    /// CSS class for the outer list
    #[serde(default = "defaults::default_list_class")]
    pub list_class: String,

    /// CSS class for nested sublists
    #[serde(default = "defaults::default_sublist_class")]
    pub sublist_class: String,

    /// CSS class for list items
    #[serde(default = "defaults::default_item_class")]
    pub item_class: String,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            min_level: defaults::default_min_level(),
            max_level: defaults::default_max_level(),
            id_prefix: None,
            ordered_list: false,
            list_class: defaults::default_list_class(),
            sublist_class: defaults::default_sublist_class(),
            item_class: defaults::default_item_class(),
        }
    }
}
