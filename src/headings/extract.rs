use regex::Regex;
use lazy_static::lazy_static;

use crate::config::TocConfig;
use crate::headings::HeadingTag;
use crate::outline::HeadingRecord;

lazy_static! {
    static ref HEADING_REGEX: Regex = Regex::new(
        r"(?is)<h([1-6])([^>]*)>(.*?)</h[1-6]\s*>"
    ).unwrap();

    static ref ID_REGEX: Regex = Regex::new(r#"(?i)(?:^|\s)id\s*=\s*["']([^"']+)["']"#).unwrap();

    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Extract headings from HTML content in document order.
///
/// Each matched heading element becomes a `HeadingRecord` whose `level`
/// is the tag's zero-based rank. Headings outside the configured level
/// range are skipped, as are headings whose id does not carry the
/// configured prefix. A heading without an id gets one slugified from
/// its text.
pub fn extract_headings(html: &str, config: &TocConfig) -> Vec<HeadingRecord> {
    let mut records = Vec::new();

    for cap in HEADING_REGEX.captures_iter(html) {
        let tag = match cap[1].parse::<usize>().ok().and_then(HeadingTag::from_level) {
            Some(tag) => tag,
            None => continue,
        };

        if tag.level() < config.min_level || tag.level() > config.max_level {
            continue;
        }

        let text = strip_html_tags(&cap[3]);

        let id = match ID_REGEX.captures(&cap[2]) {
            Some(id_cap) => id_cap[1].to_string(),
            None => slug::slugify(&text),
        };

        // Pages can mark TOC-worthy headings with an id convention
        if let Some(prefix) = &config.id_prefix {
            if !id.starts_with(prefix.as_str()) {
                continue;
            }
        }

        records.push(HeadingRecord::new(text, id, tag.rank()));
    }

    records
}

/// Strip HTML tags from text
fn strip_html_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_headings_in_order() {
        let html = r#"
            <h1 id="intro">Introduction</h1>
            <p>Some text</p>
            <h2 id="chapter-1">Chapter 1</h2>
            <h3 id="section-1-1">Section 1.1</h3>
            <h2 id="chapter-2">Chapter 2</h2>
        "#;

        let records = extract_headings(html, &TocConfig::default());
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].id, "intro");
        assert_eq!(records[0].title, "Introduction");
        assert_eq!(records[0].level, 0);
        assert_eq!(records[1].level, 1);
        assert_eq!(records[2].level, 2);
        assert_eq!(records[3].id, "chapter-2");
    }

    #[test]
    fn test_missing_id_gets_slug() {
        let html = "<h2>Getting Started Fast</h2>";
        let records = extract_headings(html, &TocConfig::default());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "getting-started-fast");
    }

    #[test]
    fn test_inline_markup_is_stripped() {
        let html = r#"<h2 id="bold">A <strong>Bold</strong> Section</h2>"#;
        let records = extract_headings(html, &TocConfig::default());

        assert_eq!(records[0].title, "A Bold Section");
    }

    #[test]
    fn test_id_prefix_filter() {
        let html = r#"
            <h1 id="toc_intro">Introduction</h1>
            <h2 id="sidebar">Sidebar</h2>
            <h2 id="toc_usage">Usage</h2>
        "#;

        let config = TocConfig {
            id_prefix: Some("toc_".to_string()),
            ..TocConfig::default()
        };
        let records = extract_headings(html, &config);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "toc_intro");
        assert_eq!(records[1].id, "toc_usage");
    }

    #[test]
    fn test_level_range_filter() {
        let html = concat!(
            "<h1 id=\"a\">A</h1>",
            "<h2 id=\"b\">B</h2>",
            "<h3 id=\"c\">C</h3>",
            "<h4 id=\"d\">D</h4>"
        );

        let config = TocConfig {
            min_level: 2,
            max_level: 3,
            ..TocConfig::default()
        };
        let records = extract_headings(html, &config);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "b");
        assert_eq!(records[1].id, "c");
    }
}
