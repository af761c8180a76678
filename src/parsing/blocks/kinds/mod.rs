//! Block-specific pattern knowledge.
//!
//! Each block kind owns its delimiter constants and match rules here,
//! not scattered in classifier code. Whole-block rules (`Heading`,
//! `CodeFence`) inspect the full block text; line rules (`BlockQuote`,
//! `UnorderedList`, `OrderedList`) are applied per line by the
//! classifier's continuity checks.

mod block_quote;
mod code_fence;
mod heading;
mod lists;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use lists::{OrderedList, UnorderedList};
