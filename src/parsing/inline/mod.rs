//! # Inline Parsing
//!
//! Splits a block's text into a flat sequence of [`InlineNode`]s.
//!
//! ## Architecture
//!
//! Inline parsing is a series of splitting passes over a node sequence.
//! Every pass re-splits only `Text` nodes and passes already-typed nodes
//! through unchanged, so passes compose by running in order:
//!
//! 1. delimiter passes, one marker family at a time (`**`, `*`, `` ` ``)
//! 2. the image pass (`![alt](destination)`)
//! 3. the link pass (`[label](destination)`)
//!
//! Image and link patterns are disjoint (the link pass rejects
//! `!`-prefixed occurrences), so their relative order doesn't matter.
//!
//! ## Modules
//!
//! - **`types`**: the [`InlineNode`] sum type
//! - **`delimiter`**: `split_delimiter` for paired-marker emphasis
//! - **`elements`**: `split_links` / `split_images` plus the
//!   extraction-only `extract_links` / `extract_images`

pub mod delimiter;
pub mod elements;
pub mod types;

pub use delimiter::{DelimiterKind, InlineError, split_delimiter};
pub use elements::{extract_images, extract_links, split_images, split_links};
pub use types::InlineNode;

/// Runs the full inline pipeline over one block's text.
///
/// Fails with [`InlineError::UnbalancedDelimiter`] on malformed input;
/// no partial result is produced.
pub fn parse_inline(text: &str) -> Result<Vec<InlineNode>, InlineError> {
    let mut nodes = vec![InlineNode::Text(text.to_string())];
    // Bold before italic so paired `**` markers aren't eaten as `*`.
    for kind in [DelimiterKind::Bold, DelimiterKind::Italic, DelimiterKind::Code] {
        nodes = split_delimiter(nodes, kind.marker(), kind)?;
    }
    Ok(split_links(split_images(nodes)))
}
