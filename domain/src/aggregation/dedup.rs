//! Dedup keys for merging near-duplicate answers.

/// Normalise answer text into a key: case-folded, whitespace collapsed, and
/// trailing punctuation stripped.
pub fn dedup_key(text: &str) -> String {
    let collapsed = text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    collapsed
        .trim_end_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace() || c == '…')
        .to_string()
}
