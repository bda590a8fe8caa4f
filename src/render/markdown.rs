use crate::outline::OutlineNode;

/// Render an outline as an indented Markdown bullet list
pub fn render_markdown(nodes: &[OutlineNode]) -> String {
    let mut md = String::new();
    append_nodes(&mut md, nodes, 0);
    md
}

fn append_nodes(md: &mut String, nodes: &[OutlineNode], indent: usize) {
    for node in nodes {
        match node {
            OutlineNode::Leaf(record) => {
                let spaces = "  ".repeat(indent);
                md.push_str(&format!("{}* [{}](#{})\n", spaces, record.title, record.id));
            }
            OutlineNode::Group(children) => {
                append_nodes(md, children, indent + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::{HeadingRecord, build_outline};

    fn record(title: &str, id: &str, level: usize) -> HeadingRecord {
        HeadingRecord::new(title.to_string(), id.to_string(), level)
    }

    #[test]
    fn test_indentation_follows_nesting() {
        let tree = build_outline(&[
            record("Intro", "intro", 0),
            record("Detail", "detail", 1),
            record("Deeper", "deeper", 3),
            record("Usage", "usage", 0),
        ]);

        let md = render_markdown(&tree);
        assert_eq!(
            md,
            "* [Intro](#intro)\n\
             \x20\x20* [Detail](#detail)\n\
             \x20\x20\x20\x20* [Deeper](#deeper)\n\
             * [Usage](#usage)\n"
        );
    }

    #[test]
    fn test_empty_outline_renders_nothing() {
        assert_eq!(render_markdown(&[]), "");
    }
}
