//! # Rendering
//!
//! Maps parsed inline nodes onto [`HtmlNode`]s and serializes node
//! trees to HTML strings.
//!
//! - **`html`**: the [`HtmlNode`] tree type and its `to_html` serializer
//! - **`convert`**: `inline_to_html`, the inline-node-to-leaf mapping

pub mod convert;
pub mod html;

pub use convert::inline_to_html;
pub use html::{HtmlNode, RenderError};
