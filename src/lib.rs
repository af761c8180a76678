//! # markdown-arbor
//!
//! Converts a Markdown document into a tree of HTML-renderable nodes.
//!
//! Parsing happens in two independent layers:
//!
//! 1. **Block layer** (`parsing::blocks`): segments the raw document on
//!    blank lines and classifies each block (paragraph, heading, code,
//!    quote, list) by structural pattern matching.
//! 2. **Inline layer** (`parsing::inline`): walks a block's text and
//!    extracts emphasis, code spans, links, and images into a flat
//!    sequence of [`InlineNode`]s.
//!
//! The `rendering` module maps inline nodes onto [`HtmlNode`]s ready for
//! HTML serialization.

pub mod parsing;
pub mod rendering;

// Re-export commonly used types
pub use parsing::blocks::{BlockKind, classify, split_blocks};
pub use parsing::inline::{
    DelimiterKind, InlineError, InlineNode, extract_images, extract_links, parse_inline,
    split_delimiter, split_images, split_links,
};
pub use parsing::{ParsedBlock, parse_document};
pub use rendering::{HtmlNode, RenderError, inline_to_html};
