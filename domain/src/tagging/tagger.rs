//! Rule-based part-of-speech tagger.
//!
//! Order of precedence: closed-class lexicon, numbers, punctuation,
//! capitalisation, suffix heuristics, and finally a common-noun default.

use super::vocabulary::PosTag;

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any", "no",
    "all",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "from", "to", "into", "about", "as", "near",
    "after", "before", "during", "since", "until", "between", "under", "over", "through", "than",
    "per", "if",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor"];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "his", "its",
    "their", "my", "your", "our",
];

const WH_WORDS: &[&str] = &[
    "who", "what", "when", "where", "why", "which", "how", "whom", "whose",
];

const MODALS: &[&str] = &[
    "can", "could", "will", "would", "shall", "should", "may", "might", "must",
];

const PRESENT_THIRD: &[&str] = &["is", "does", "has"];

const BASE_VERBS: &[&str] = &["be", "do", "have", "are", "am", "been", "being"];

/// Irregular or suffix-less past forms common in factual questions
const PAST_VERBS: &[&str] = &[
    "was", "were", "did", "had", "born", "died", "made", "wrote", "won", "became", "began",
    "built", "founded", "invented", "discovered", "found", "said", "went", "came", "took", "gave",
    "got", "ran", "led", "written", "known", "sold",
];

const ADVERBS: &[&str] = &[
    "not", "very", "also", "often", "still", "ever", "never", "now", "then", "there", "here",
    "so", "too", "first", "last", "most", "much", "many",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "twenty", "hundred", "thousand", "million", "billion",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "est"];

/// Look up a word in the closed-class lexicon
fn lexicon_tag(lower: &str) -> Option<PosTag> {
    let table: [(&[&str], PosTag); 11] = [
        (WH_WORDS, PosTag::Wh),
        (DETERMINERS, PosTag::Dt),
        (PREPOSITIONS, PosTag::In),
        (CONJUNCTIONS, PosTag::Cc),
        (PRONOUNS, PosTag::Prp),
        (MODALS, PosTag::Md),
        (PRESENT_THIRD, PosTag::Vbz),
        (BASE_VERBS, PosTag::Vb),
        (PAST_VERBS, PosTag::Vbd),
        (ADVERBS, PosTag::Rb),
        (NUMBER_WORDS, PosTag::Cd),
    ];
    table
        .iter()
        .find(|(words, _)| words.contains(&lower))
        .map(|(_, tag)| *tag)
}

fn is_number(token: &str) -> bool {
    token.starts_with(|c: char| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '/'))
}

fn punctuation_tag(token: &str) -> Option<PosTag> {
    if token.chars().any(char::is_alphanumeric) {
        return None;
    }
    let symbolic = token
        .chars()
        .all(|c| matches!(c, '$' | '%' | '&' | '+' | '=' | '<' | '>' | '#' | '@' | '*' | '^' | '~'));
    Some(if symbolic { PosTag::Sym } else { PosTag::Punct })
}

fn suffix_tag(lower: &str) -> PosTag {
    let len = lower.chars().count();
    if len > 3 && lower.ends_with("ly") {
        PosTag::Rb
    } else if len > 4 && lower.ends_with("ing") {
        PosTag::Vbg
    } else if len > 3 && lower.ends_with("ed") {
        PosTag::Vbd
    } else if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        PosTag::Jj
    } else if len > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
        PosTag::Nns
    } else {
        PosTag::Nn
    }
}

fn is_capitalized(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_uppercase)
}

fn is_acronym(token: &str) -> bool {
    token.chars().count() >= 2 && token.chars().all(|c| c.is_ascii_uppercase())
}

/// Tag a single token in context.
fn tag_token(tokens: &[String], index: usize) -> PosTag {
    let token = tokens[index].as_str();
    let lower = token.to_lowercase();

    if lower == "'s" || lower == "’s" {
        return PosTag::Pos;
    }
    if let Some(tag) = punctuation_tag(token) {
        return tag;
    }
    if is_number(token) {
        return PosTag::Cd;
    }

    // "May" capitalised mid-sentence is the month
    if lower == "may" && index > 0 && is_capitalized(token) {
        return PosTag::Nnp;
    }
    if is_acronym(token) {
        return PosTag::Nnp;
    }

    if let Some(tag) = lexicon_tag(&lower) {
        return tag;
    }
    if is_capitalized(token) {
        return PosTag::Nnp;
    }
    suffix_tag(&lower)
}

/// Assign one tag per token.
pub fn tag_tokens(tokens: &[String]) -> Vec<PosTag> {
    (0..tokens.len()).map(|i| tag_token(tokens, i)).collect()
}
