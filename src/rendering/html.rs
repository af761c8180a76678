use thiserror::Error;

/// Errors raised when serializing an [`HtmlNode`] tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A parent node has children but no wrapping tag to emit them in.
    #[error("parent node has no tag")]
    MissingTag,
}

/// A renderable HTML tree node.
///
/// Leaves carry text content; parents carry an ordered child sequence.
/// A leaf without a tag renders its value verbatim, with no wrapping
/// element. Attributes render in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A terminal node: text content, optionally wrapped in a tag.
    Leaf {
        tag: Option<String>,
        value: String,
        attrs: Vec<(String, String)>,
    },
    /// An interior node: children rendered inside a wrapping tag.
    ///
    /// The tag stays optional so a tagless parent is representable; it
    /// is rejected at render time, not construction time.
    Parent {
        tag: Option<String>,
        children: Vec<HtmlNode>,
        attrs: Vec<(String, String)>,
    },
}

impl HtmlNode {
    /// A leaf node without attributes.
    pub fn leaf(tag: Option<&str>, value: &str) -> Self {
        Self::Leaf {
            tag: tag.map(str::to_string),
            value: value.to_string(),
            attrs: vec![],
        }
    }

    /// A leaf node with attributes, kept in the given order.
    pub fn leaf_with_attrs(tag: &str, value: &str, attrs: &[(&str, &str)]) -> Self {
        Self::Leaf {
            tag: Some(tag.to_string()),
            value: value.to_string(),
            attrs: own_attrs(attrs),
        }
    }

    /// A parent node wrapping an ordered sequence of children.
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self::Parent {
            tag: Some(tag.to_string()),
            children,
            attrs: vec![],
        }
    }

    /// Serializes the node and its descendants to an HTML string.
    ///
    /// Fails with [`RenderError::MissingTag`] for a parent without a
    /// tag. Text is emitted verbatim; escaping is the caller's concern.
    pub fn to_html(&self) -> Result<String, RenderError> {
        match self {
            Self::Leaf { tag: None, value, .. } => Ok(value.clone()),
            Self::Leaf {
                tag: Some(tag),
                value,
                attrs,
            } => Ok(format!("<{tag}{}>{value}</{tag}>", attrs_to_html(attrs))),
            Self::Parent { tag: None, .. } => Err(RenderError::MissingTag),
            Self::Parent {
                tag: Some(tag),
                children,
                attrs,
            } => {
                let inner = children
                    .iter()
                    .map(|child| child.to_html())
                    .collect::<Result<String, _>>()?;
                Ok(format!("<{tag}{}>{inner}</{tag}>", attrs_to_html(attrs)))
            }
        }
    }
}

fn own_attrs(attrs: &[(&str, &str)]) -> Vec<(String, String)> {
    attrs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Renders attributes as ` name="value"` pairs in insertion order.
fn attrs_to_html(attrs: &[(String, String)]) -> String {
    attrs
        .iter()
        .map(|(name, value)| format!(" {name}=\"{value}\""))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn leafs() -> Vec<HtmlNode> {
        vec![
            HtmlNode::leaf(Some("b"), "Bold text"),
            HtmlNode::leaf(None, "Normal text"),
            HtmlNode::leaf(Some("i"), "Italic text"),
            HtmlNode::leaf(None, "More normal text"),
        ]
    }

    const HTML_LEAFS: &str = "<b>Bold text</b>Normal text<i>Italic text</i>More normal text";

    #[test]
    fn tagless_leaf_renders_value_verbatim() {
        let node = HtmlNode::leaf(None, "just text");
        assert_eq!(node.to_html(), Ok("just text".to_string()));
    }

    #[test]
    fn tagged_leaf_wraps_value() {
        let node = HtmlNode::leaf(Some("p"), "This is a paragraph of text.");
        assert_eq!(
            node.to_html(),
            Ok("<p>This is a paragraph of text.</p>".to_string())
        );
    }

    #[test]
    fn attrs_render_in_insertion_order() {
        let node = HtmlNode::leaf_with_attrs(
            "a",
            "Google",
            &[("href", "https://www.google.com"), ("target", "_blank")],
        );
        assert_eq!(
            node.to_html(),
            Ok(r#"<a href="https://www.google.com" target="_blank">Google</a>"#.to_string())
        );
    }

    #[test]
    fn parent_concatenates_children() {
        let node = HtmlNode::parent("p", leafs());
        assert_eq!(node.to_html(), Ok(format!("<p>{HTML_LEAFS}</p>")));
    }

    #[test]
    fn parent_with_no_children_renders_empty_element() {
        let node = HtmlNode::parent("p", vec![]);
        assert_eq!(node.to_html(), Ok("<p></p>".to_string()));
    }

    #[test]
    fn nested_parents_render_depth_first() {
        let node = HtmlNode::parent(
            "div",
            vec![
                HtmlNode::parent("p", leafs()),
                HtmlNode::parent("p", leafs()),
                HtmlNode::parent("p", leafs()),
                HtmlNode::parent("p", leafs()),
            ],
        );
        assert_eq!(
            node.to_html(),
            Ok(format!("<div>{}</div>", format!("<p>{HTML_LEAFS}</p>").repeat(4)))
        );
    }

    #[test]
    fn grandchildren_render_recursively() {
        let grandchild = HtmlNode::leaf(Some("b"), "grandchild");
        let child = HtmlNode::parent("span", vec![grandchild]);
        let parent = HtmlNode::parent("div", vec![child]);
        assert_eq!(
            parent.to_html(),
            Ok("<div><span><b>grandchild</b></span></div>".to_string())
        );
    }

    #[test]
    fn tagless_parent_fails_to_render() {
        let node = HtmlNode::Parent {
            tag: None,
            children: leafs(),
            attrs: vec![],
        };
        assert_eq!(node.to_html(), Err(RenderError::MissingTag));
    }

    #[test]
    fn failing_child_propagates() {
        let bad_child = HtmlNode::Parent {
            tag: None,
            children: vec![],
            attrs: vec![],
        };
        let node = HtmlNode::parent("div", vec![bad_child]);
        assert_eq!(node.to_html(), Err(RenderError::MissingTag));
    }
}
