//! Default values for TOC configuration fields

pub fn default_min_level() -> usize {
    1
}

pub fn default_max_level() -> usize {
    6
}

pub fn default_list_class() -> String {
    "toc".to_string()
}

pub fn default_sublist_class() -> String {
    "toc__sublist".to_string()
}

pub fn default_item_class() -> String {
    "toc__item".to_string()
}
