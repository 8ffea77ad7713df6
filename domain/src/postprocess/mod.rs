//! Answer text cleanup.
//!
//! Sources decorate answers with parenthetical annotations such as
//! `(born 25 December 1642)` or `(listen)`. [`clean`] strips every
//! single-level `(...)` span and tidies the whitespace left behind. The rule
//! is blunt: an answer whose real content is parenthetical is damaged too.
//! [`CleanOptions::keep_numeric_parentheticals`] opts out for spans that are
//! purely a number with an optional unit, e.g. `(3.0 × 10^8 m/s)` or `(42%)`.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use regex::Regex;

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^()]*)\)").expect("parenthetical pattern is valid"));

static SPACE_BEFORE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([.,;:!?])").expect("punctuation pattern is valid"));

static NUMERIC_WITH_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\d\s.,+\-−×x*/^%°±~≈]+(?:[A-Za-zµ°%²³/]{1,5})?$")
        .expect("numeric pattern is valid")
});

/// Post-processing switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanOptions {
    /// Keep parentheticals that hold only a number and unit
    pub keep_numeric_parentheticals: bool,
}

fn is_numeric_parenthetical(content: &str) -> bool {
    content.chars().any(|c| c.is_ascii_digit()) && NUMERIC_WITH_UNIT.is_match(content.trim())
}

/// Strip parenthetical annotations with default options.
pub fn clean(text: &str) -> String {
    clean_with(text, CleanOptions::default())
}

/// Strip parenthetical annotations, then collapse the whitespace left behind.
///
/// Text without parentheses is returned unchanged.
pub fn clean_with(text: &str, options: CleanOptions) -> String {
    if !text.contains('(') {
        return text.to_string();
    }

    let stripped = PARENTHETICAL.replace_all(text, |caps: &regex::Captures| {
        if options.keep_numeric_parentheticals && is_numeric_parenthetical(&caps[1]) {
            caps[0].to_string()
        } else {
            String::new()
        }
    });

    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    SPACE_BEFORE_PUNCTUATION
        .replace_all(&collapsed, "$1")
        .into_owned()
}
