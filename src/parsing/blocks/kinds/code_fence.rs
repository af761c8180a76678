/// Fenced code block type with owned delimiter constant.
pub struct CodeFence;

impl CodeFence {
    /// The opening and closing fence.
    pub const FENCE: &'static str = "```";

    /// Whole-block rule: the block opens and closes with a backtick
    /// fence, the fenced region spanning everything in between
    /// (including newlines). Exactly six backticks is an empty fenced
    /// region and qualifies.
    pub fn matches(block: &str) -> bool {
        block.len() >= 2 * Self::FENCE.len()
            && block.starts_with(Self::FENCE)
            && block.ends_with(Self::FENCE)
    }
}
