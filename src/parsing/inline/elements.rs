use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::types::InlineNode;

/// Which element family a pass targets: `[label](dest)` links or
/// `![alt](dest)` images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementKind {
    Link,
    Image,
}

/// Matches both element forms: an optional `!`, a `]`-free label in
/// brackets, a `)`-free destination in parentheses. Scanning is
/// leftmost-first and non-overlapping, so a link pass never fires inside
/// an image occurrence: the image's `!` is part of the same match.
fn element_regex() -> &'static Regex {
    static ELEMENT_REGEX: OnceLock<Regex> = OnceLock::new();
    ELEMENT_REGEX
        .get_or_init(|| Regex::new(r"(!?)\[([^\]]*)\]\(([^)]*)\)").expect("invalid element regex"))
}

fn is_kind(caps: &Captures<'_>, kind: ElementKind) -> bool {
    let has_bang = !caps[1].is_empty();
    match kind {
        ElementKind::Image => has_bang,
        ElementKind::Link => !has_bang,
    }
}

/// Returns the `(label, destination)` pair of every link in `text`,
/// in order, skipping image occurrences.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    extract(text, ElementKind::Link)
}

/// Returns the `(alt, destination)` pair of every image in `text`,
/// in order, skipping link occurrences.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    extract(text, ElementKind::Image)
}

fn extract(text: &str, kind: ElementKind) -> Vec<(String, String)> {
    element_regex()
        .captures_iter(text)
        .filter(|caps| is_kind(caps, kind))
        .map(|caps| (caps[2].to_string(), caps[3].to_string()))
        .collect()
}

/// Splits every [`InlineNode::Text`] node around its link occurrences.
///
/// Image occurrences are left inside the surrounding text untouched.
/// Nodes of any other kind pass through unchanged.
pub fn split_links(nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    split(nodes, ElementKind::Link)
}

/// Splits every [`InlineNode::Text`] node around its image occurrences.
///
/// Link occurrences are left inside the surrounding text untouched.
/// Nodes of any other kind pass through unchanged.
pub fn split_images(nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    split(nodes, ElementKind::Image)
}

fn split(nodes: Vec<InlineNode>, kind: ElementKind) -> Vec<InlineNode> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        let InlineNode::Text(text) = node else {
            out.push(node);
            continue;
        };
        split_text(&text, kind, &mut out);
    }
    out
}

fn split_text(text: &str, kind: ElementKind, out: &mut Vec<InlineNode>) {
    let mut offset = 0;
    let mut matched = false;

    for caps in element_regex().captures_iter(text) {
        if !is_kind(&caps, kind) {
            continue;
        }
        let whole = caps.get(0).expect("capture group 0 always exists");
        if whole.start() > offset {
            out.push(InlineNode::Text(text[offset..whole.start()].to_string()));
        }
        let label = caps[2].to_string();
        let destination = caps[3].to_string();
        out.push(match kind {
            ElementKind::Link => InlineNode::Link { label, destination },
            ElementKind::Image => InlineNode::Image {
                alt: label,
                destination,
            },
        });
        offset = whole.end();
        matched = true;
    }

    // Zero matches preserve the input node verbatim, even when empty;
    // otherwise only a non-empty tail becomes a trailing text node.
    if !matched || offset < text.len() {
        out.push(InlineNode::Text(text[offset..].to_string()));
    }
}
