pub mod blocks;
pub mod inline;

use blocks::{BlockKind, classify, split_blocks};

/// A segmented block together with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBlock {
    /// The block's text: trimmed source lines joined with `\n`.
    pub text: String,
    /// The structural classification of the block.
    pub kind: BlockKind,
}

/// Segments a document into blocks and classifies each one.
///
/// Classification is a pure function of each block's text, so the result
/// is exactly `split_blocks` zipped with `classify`.
pub fn parse_document(document: &str) -> Vec<ParsedBlock> {
    split_blocks(document)
        .into_iter()
        .map(|text| {
            let kind = classify(&text);
            ParsedBlock { text, kind }
        })
        .collect()
}
