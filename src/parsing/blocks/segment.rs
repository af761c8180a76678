/// Splits a raw document into block strings.
///
/// Consecutive non-blank lines form one block, each line trimmed of
/// leading and trailing whitespace and joined with `\n`. A blank line
/// (empty after trimming) closes the pending block; runs of blank lines
/// and blank lines at either end of the document produce nothing.
///
/// Returns an empty vector for an empty or all-blank document.
pub fn split_blocks(document: &str) -> Vec<String> {
    let mut blocks = vec![];
    let mut pending: Vec<&str> = vec![];

    for line in document.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !pending.is_empty() {
                blocks.push(pending.join("\n"));
                pending.clear();
            }
        } else {
            pending.push(line);
        }
    }
    if !pending.is_empty() {
        blocks.push(pending.join("\n"));
    }
    blocks
}
