use super::kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList};

/// The structural classification of a whole block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Fallback when no structural rule matches.
    Paragraph,
    /// 1–6 `#` characters followed by a space.
    Heading,
    /// A block opening and closing with a three-backtick fence.
    Code,
    /// Every line prefixed with `> `.
    Quote,
    /// Every line prefixed with the same `- ` or `* ` marker.
    UnorderedList,
    /// Every line prefixed with `<n>. `, counting up from 1.
    OrderedList,
}

/// Classifies a block by trying structural rules in precedence order.
///
/// Whole-block rules (heading, code fence) are tried first, then the
/// per-line continuity rules (quote, unordered list, ordered list).
/// Total: every input maps to exactly one kind, with [`BlockKind::Paragraph`]
/// as the fallback, including for the empty string.
pub fn classify(block: &str) -> BlockKind {
    if Heading::matches(block) {
        return BlockKind::Heading;
    }
    if CodeFence::matches(block) {
        return BlockKind::Code;
    }
    if is_quote(block) {
        return BlockKind::Quote;
    }
    if is_unordered_list(block) {
        return BlockKind::UnorderedList;
    }
    if is_ordered_list(block) {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}

// The continuity checks below split on '\n' rather than `lines()` so the
// empty block yields one empty line (which matches nothing) instead of
// no lines (which would vacuously match everything).

fn is_quote(block: &str) -> bool {
    block.split('\n').all(BlockQuote::line_matches)
}

fn is_unordered_list(block: &str) -> bool {
    let mut lines = block.split('\n');
    let Some(marker) = lines.next().and_then(UnorderedList::line_marker) else {
        return false;
    };
    lines.all(|line| UnorderedList::line_marker(line) == Some(marker))
}

fn is_ordered_list(block: &str) -> bool {
    let mut expected = OrderedList::FIRST;
    for line in block.split('\n') {
        match OrderedList::line_number(line) {
            Some(n) if n == expected => expected += 1,
            _ => return false,
        }
    }
    true
}
