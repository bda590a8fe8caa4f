use std::cmp::Ordering;

use serde::{Serialize, Deserialize};

/// A single heading pulled out of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingRecord {
    /// Heading text with inline markup stripped
    pub title: String,
    /// Anchor id the heading links to
    pub id: String,
    /// Zero-based rank: 0 for the most significant heading tag, 5 for the least
    pub level: usize,
}

impl HeadingRecord {
    pub fn new(title: String, id: String, level: usize) -> Self {
        Self { title, id, level }
    }
}

/// One node of the nested outline: either a heading itself, or a group
/// of deeper headings that followed one.
///
/// Serialized untagged, so a leaf becomes a plain object and a group
/// becomes an array of nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutlineNode {
    Leaf(HeadingRecord),
    Group(Vec<OutlineNode>),
}

/// Build a nested outline from a flat, document-ordered heading sequence.
///
/// Grouping is relative to the first element's rank: a heading of deeper
/// rank opens a nested group under its predecessor, a return to a
/// shallower-or-equal rank closes the current group. Rank jumps of any
/// size in either direction are allowed; a jump from rank 0 straight to
/// rank 3 nests one level deep, not three.
///
/// A pre-order traversal of the leaves of the result reproduces the
/// input sequence exactly. Empty input yields an empty outline.
pub fn build_outline(headings: &[HeadingRecord]) -> Vec<OutlineNode> {
    let mut tree = Vec::new();
    let mut rest = headings;

    // Re-anchor whenever a heading shallower than the current top-level
    // rank surfaces, so nothing is ever dropped
    while let Some(first) = rest.first() {
        let (mut group, remainder) = nest_group(rest, first.level);
        tree.append(&mut group);
        rest = remainder;
    }

    tree
}

/// Collect siblings at `rank` until the input runs out or a shallower
/// heading appears, returning the group and the unconsumed remainder.
fn nest_group(items: &[HeadingRecord], rank: usize) -> (Vec<OutlineNode>, &[HeadingRecord]) {
    let mut group = Vec::new();
    let mut rest = items;

    while let Some((head, tail)) = rest.split_first() {
        match head.level.cmp(&rank) {
            // Sibling at the current rank
            Ordering::Equal => {
                group.push(OutlineNode::Leaf(head.clone()));
                rest = tail;
            }
            // Deeper heading: open a nested group anchored at its rank
            Ordering::Greater => {
                let (child, remainder) = nest_group(rest, head.level);
                group.push(OutlineNode::Group(child));
                rest = remainder;
            }
            // Shallower heading: this group is complete, hand the rest back
            Ordering::Less => break,
        }
    }

    (group, rest)
}

/// Flatten an outline back to document order via pre-order leaf traversal
pub fn flatten_outline(nodes: &[OutlineNode]) -> Vec<HeadingRecord> {
    let mut flat = Vec::new();
    collect_leaves(nodes, &mut flat);
    flat
}

fn collect_leaves(nodes: &[OutlineNode], out: &mut Vec<HeadingRecord>) {
    for node in nodes {
        match node {
            OutlineNode::Leaf(record) => out.push(record.clone()),
            OutlineNode::Group(children) => collect_leaves(children, out),
        }
    }
}
