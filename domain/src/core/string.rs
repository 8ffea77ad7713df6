//! String utilities for the domain layer.

/// Shorten text to at most `max_chars` characters, ending in `…` when cut.
///
/// Counts characters, not bytes, so multi-byte text is never split
/// mid-character.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(1);
    let mut out: String = s.chars().take(keep).collect();
    out.truncate(out.trim_end().len());
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate_chars("Paris", 10), "Paris");
    }

    #[test]
    fn test_long_text_gets_ellipsis() {
        assert_eq!(truncate_chars("Isaac Newton was born", 9), "Isaac Ne…");
    }

    #[test]
    fn test_trailing_space_trimmed_before_ellipsis() {
        assert_eq!(truncate_chars("Isaac Newton", 7), "Isaac…");
    }

    #[test]
    fn test_multibyte_counts_characters() {
        assert_eq!(truncate_chars("日本語テスト", 4), "日本語…");
    }
}
