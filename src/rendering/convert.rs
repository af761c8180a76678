use crate::parsing::inline::InlineNode;

use super::html::HtmlNode;

/// Maps a terminal inline node to its renderable HTML form.
///
/// Plain text becomes a tagless leaf; emphasis kinds get their
/// conventional tags; links carry `href`; images render with empty text
/// and `src`/`alt` attributes, in that order. [`InlineNode`] is a closed
/// sum type, so the match is exhaustive and the conversion infallible:
/// a new inline kind fails compilation here rather than being dropped.
pub fn inline_to_html(node: &InlineNode) -> HtmlNode {
    match node {
        InlineNode::Text(text) => HtmlNode::leaf(None, text),
        InlineNode::Bold(text) => HtmlNode::leaf(Some("b"), text),
        InlineNode::Italic(text) => HtmlNode::leaf(Some("i"), text),
        InlineNode::Code(text) => HtmlNode::leaf(Some("code"), text),
        InlineNode::Link { label, destination } => {
            HtmlNode::leaf_with_attrs("a", label, &[("href", destination.as_str())])
        }
        InlineNode::Image { alt, destination } => {
            HtmlNode::leaf_with_attrs("img", "", &[("src", destination.as_str()), ("alt", alt.as_str())])
        }
    }
}
