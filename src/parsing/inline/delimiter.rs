use thiserror::Error;

use super::types::InlineNode;

/// The emphasis family a delimiter pass assigns to odd fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterKind {
    Bold,
    Italic,
    Code,
}

impl DelimiterKind {
    /// The conventional Markdown marker for this kind.
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Italic => "*",
            Self::Code => "`",
        }
    }

    fn node(self, text: String) -> InlineNode {
        match self {
            Self::Bold => InlineNode::Bold(text),
            Self::Italic => InlineNode::Italic(text),
            Self::Code => InlineNode::Code(text),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InlineError {
    /// A text node held an odd number of delimiter occurrences, so the
    /// Markdown is malformed. No partial result is produced.
    #[error("unbalanced `{delimiter}` delimiter in {text:?}")]
    UnbalancedDelimiter { delimiter: String, text: String },
}

/// Splits every [`InlineNode::Text`] node on paired `delimiter`
/// occurrences into alternating plain/`kind` fragments, starting plain.
///
/// Empty fragments between adjacent delimiters are kept as empty-text
/// nodes rather than dropped. Nodes of any other kind pass through
/// unchanged, which is why running bold, then italic, then code in
/// sequence works: each pass ignores already-typed nodes.
pub fn split_delimiter(
    nodes: Vec<InlineNode>,
    delimiter: &str,
    kind: DelimiterKind,
) -> Result<Vec<InlineNode>, InlineError> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        let InlineNode::Text(text) = node else {
            out.push(node);
            continue;
        };
        if text.matches(delimiter).count() % 2 != 0 {
            return Err(InlineError::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                text,
            });
        }
        for (i, fragment) in text.split(delimiter).enumerate() {
            if i % 2 == 0 {
                out.push(InlineNode::Text(fragment.to_string()));
            } else {
                out.push(kind.node(fragment.to_string()));
            }
        }
    }
    Ok(out)
}
