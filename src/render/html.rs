use crate::config::TocConfig;
use crate::outline::OutlineNode;

/// Render an outline as a nested HTML list.
///
/// Leaves become anchor links; a group becomes a sub-list placed right
/// after the heading it followed in the document, mirroring the outline
/// structure one list per nesting level.
pub fn render_html(nodes: &[OutlineNode], config: &TocConfig) -> String {
    render_list(nodes, config, true)
}

fn render_list(nodes: &[OutlineNode], config: &TocConfig, outer: bool) -> String {
    let tag = if config.ordered_list { "ol" } else { "ul" };
    let class = if outer { &config.list_class } else { &config.sublist_class };

    let mut items = Vec::new();
    for node in nodes {
        match node {
            OutlineNode::Leaf(record) => {
                items.push(format!(
                    "<li class=\"{}\"><a href=\"#{}\">{}</a></li>",
                    config.item_class,
                    record.id,
                    html_escape::encode_text(&record.title)
                ));
            }
            OutlineNode::Group(children) => {
                items.push(render_list(children, config, false));
            }
        }
    }

    format!("<{} class=\"{}\">{}</{}>", tag, class, items.join(""), tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::{HeadingRecord, build_outline};

    fn record(title: &str, id: &str, level: usize) -> HeadingRecord {
        HeadingRecord::new(title.to_string(), id.to_string(), level)
    }

    #[test]
    fn test_flat_list() {
        let tree = build_outline(&[record("One", "one", 0), record("Two", "two", 0)]);
        let html = render_html(&tree, &TocConfig::default());

        assert_eq!(
            html,
            "<ul class=\"toc\">\
             <li class=\"toc__item\"><a href=\"#one\">One</a></li>\
             <li class=\"toc__item\"><a href=\"#two\">Two</a></li>\
             </ul>"
        );
    }

    #[test]
    fn test_nested_sublist_follows_its_heading() {
        let tree = build_outline(&[
            record("Intro", "intro", 0),
            record("Detail", "detail", 1),
            record("Usage", "usage", 0),
        ]);
        let html = render_html(&tree, &TocConfig::default());

        assert!(html.contains(
            "<li class=\"toc__item\"><a href=\"#intro\">Intro</a></li>\
             <ul class=\"toc__sublist\">\
             <li class=\"toc__item\"><a href=\"#detail\">Detail</a></li>\
             </ul>\
             <li class=\"toc__item\"><a href=\"#usage\">Usage</a></li>"
        ));
    }

    #[test]
    fn test_titles_are_escaped() {
        let tree = build_outline(&[record("Tips & <Tricks>", "tips", 0)]);
        let html = render_html(&tree, &TocConfig::default());

        assert!(html.contains("Tips &amp; &lt;Tricks&gt;"));
    }

    #[test]
    fn test_ordered_list_option() {
        let config = TocConfig { ordered_list: true, ..TocConfig::default() };
        let tree = build_outline(&[record("One", "one", 0), record("Deep", "deep", 2)]);
        let html = render_html(&tree, &config);

        assert!(html.starts_with("<ol class=\"toc\">"));
        assert!(html.contains("<ol class=\"toc__sublist\">"));
        assert!(html.ends_with("</ol>"));
    }
}
