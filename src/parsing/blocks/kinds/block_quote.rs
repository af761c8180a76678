/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote line prefix: `>` followed by a single space.
    pub const PREFIX: &'static str = "> ";

    /// Line rule: `> ` followed by any (possibly empty) text.
    ///
    /// A line that is just `>` with no trailing space does not match,
    /// and neither does an indented `>`; lines are not re-trimmed.
    pub fn line_matches(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }
}
