/// A parsed inline node: one run of text and its semantic role.
///
/// This is a closed sum type; only links and images carry a destination,
/// so "plain text with a URL" is unrepresentable. Equality is structural
/// over the variant, its text, and its destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(String),
    /// Bold text (split out of a `**` delimiter pass).
    Bold(String),
    /// Italic text (split out of a `*` delimiter pass).
    Italic(String),
    /// An inline code span (split out of a `` ` `` delimiter pass).
    Code(String),
    /// A link `[label](destination)`.
    Link { label: String, destination: String },
    /// An image `![alt](destination)`.
    Image { alt: String, destination: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_structural() {
        assert_eq!(
            InlineNode::Bold("This is a text node".to_string()),
            InlineNode::Bold("This is a text node".to_string())
        );
        assert_ne!(
            InlineNode::Bold("This is a text node".to_string()),
            InlineNode::Bold("This is another text node".to_string())
        );
        assert_ne!(
            InlineNode::Bold("This is a text node".to_string()),
            InlineNode::Italic("This is a text node".to_string())
        );
    }

    #[test]
    fn destination_participates_in_equality() {
        let a = InlineNode::Link {
            label: "boot dev".to_string(),
            destination: "http://www.boot.dev/".to_string(),
        };
        let b = InlineNode::Link {
            label: "boot dev".to_string(),
            destination: "http://www.boot.dev/".to_string(),
        };
        let c = InlineNode::Link {
            label: "boot dev".to_string(),
            destination: "http://example.com/".to_string(),
        };
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
