/// Unordered list block type with owned marker knowledge.
pub struct UnorderedList;

impl UnorderedList {
    /// The accepted bullet markers.
    pub const MARKERS: [char; 2] = ['-', '*'];

    /// Line rule: returns the bullet marker when the line is `- ` or
    /// `* ` followed by any (possibly empty) text.
    ///
    /// The caller holds the continuity rule: every line of a block must
    /// return the same marker as the first.
    pub fn line_marker(line: &str) -> Option<char> {
        let mut chars = line.chars();
        let marker = chars.next()?;
        if Self::MARKERS.contains(&marker) && chars.next() == Some(' ') {
            Some(marker)
        } else {
            None
        }
    }
}

/// Ordered list block type with owned prefix knowledge.
pub struct OrderedList;

impl OrderedList {
    /// The ordinal every list must start from.
    pub const FIRST: u64 = 1;

    /// Line rule: returns the numeric prefix when the line is
    /// `<digits>. ` followed by any (possibly empty) text.
    ///
    /// The caller holds the continuity rule: ordinals must count up from
    /// [`Self::FIRST`] with no gaps or repeats.
    pub fn line_number(line: &str) -> Option<u64> {
        let digits_end = line.find(|c: char| !c.is_ascii_digit())?;
        if digits_end == 0 || !line[digits_end..].starts_with(". ") {
            return None;
        }
        line[..digits_end].parse().ok()
    }
}
