/// ATX heading block type with owned delimiter constants.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: u8 = b'#';

    /// Deepest heading level recognized; a seventh `#` demotes the block.
    pub const MAX_LEVEL: usize = 6;

    /// Whole-block rule: 1 to 6 `#` characters followed by a space.
    pub fn matches(block: &str) -> bool {
        let bytes = block.as_bytes();
        let hashes = bytes.iter().take_while(|&&b| b == Self::MARKER).count();
        (1..=Self::MAX_LEVEL).contains(&hashes) && bytes.get(hashes) == Some(&b' ')
    }
}
