//! # Block Parsing
//!
//! Two-phase block parsing over a raw document string.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is split into block
//!    strings on blank lines, with each source line trimmed of
//!    surrounding whitespace
//!
//! 2. **Classification** (`classify`): each block string maps to exactly
//!    one [`BlockKind`] by trying structural rules in precedence order
//!
//! ## Modules
//!
//! - **`segment`**: `split_blocks` produces the ordered block strings
//! - **`classify`**: `classify` is a total pure function to `BlockKind`
//! - **`kinds`**: block-specific pattern knowledge with owned delimiters
//!   (Heading, CodeFence, BlockQuote, UnorderedList, OrderedList)
//!
//! ## Key Invariants
//!
//! - Segmentation never emits empty blocks; an all-blank document yields
//!   an empty sequence
//! - Classification never fails; `Paragraph` is the fallback when no
//!   structural rule matches
//! - Continuity rules (same list marker, consecutive ordinals) apply to
//!   the block as a whole: one bad line demotes the block to `Paragraph`

pub mod classify;
pub mod kinds;
pub mod segment;

pub use classify::{BlockKind, classify};
pub use segment::split_blocks;
