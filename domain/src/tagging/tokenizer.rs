//! Whitespace-and-punctuation tokenizer.

/// Split text into word and punctuation tokens.
///
/// Punctuation attached to the start or end of a word becomes its own token,
/// a possessive `'s` is split off, and characters inside a word (as in
/// `1,642`, `3.14` or `well-known`) are left alone.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for chunk in text.split_whitespace() {
        let chars: Vec<char> = chunk.chars().collect();

        let mut start = 0;
        while start < chars.len() && !chars[start].is_alphanumeric() {
            tokens.push(chars[start].to_string());
            start += 1;
        }

        let mut end = chars.len();
        let mut trailing = Vec::new();
        while end > start && !chars[end - 1].is_alphanumeric() {
            trailing.push(chars[end - 1].to_string());
            end -= 1;
        }

        if start < end {
            let core: String = chars[start..end].iter().collect();
            match split_possessive(&core) {
                Some((stem, suffix)) => {
                    tokens.push(stem.to_string());
                    tokens.push(suffix.to_string());
                }
                None => tokens.push(core),
            }
        }

        tokens.extend(trailing.into_iter().rev());
    }

    tokens
}

fn split_possessive(word: &str) -> Option<(&str, &str)> {
    for suffix in ["'s", "’s", "'S", "’S"] {
        if let Some(stem) = word.strip_suffix(suffix)
            && !stem.is_empty()
        {
            return Some((stem, &word[stem.len()..]));
        }
    }
    None
}
