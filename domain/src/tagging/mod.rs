//! Question tokenizer and tagger.
//!
//! [`tag`] turns raw question text into a [`Question`]: tokens, one
//! part-of-speech tag per token (see [`vocabulary::PosTag`]) and named-entity
//! spans (see [`vocabulary::EntityType`]). Tagging is rule-based, performs no
//! I/O, and is deterministic for a given [`TAGGER_VERSION`].

pub mod ner;
pub mod tagger;
pub mod tokenizer;
pub mod vocabulary;

use crate::core::error::DomainError;
use crate::core::question::{Question, TaggedToken};

/// Identifies the rule set; bump when tagging output changes.
pub const TAGGER_VERSION: &str = "rules-1";

/// Lower-case, trim and collapse internal whitespace.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Tokenize, tag and entity-chunk a question.
///
/// Fails with [`DomainError::InvalidInput`] when the text is empty, blank, or
/// contains no word characters at all.
pub fn tag(text: &str) -> Result<Question, DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::InvalidInput(
            "question text is empty".to_string(),
        ));
    }

    let tokens = tokenizer::tokenize(text);
    if !tokens.iter().any(|t| t.chars().any(char::is_alphanumeric)) {
        return Err(DomainError::InvalidInput(
            "question contains no words".to_string(),
        ));
    }

    let tags = tagger::tag_tokens(&tokens);
    let tagged: Vec<TaggedToken> = tokens
        .into_iter()
        .zip(tags)
        .map(|(text, tag)| TaggedToken::new(text, tag))
        .collect();
    let entities = ner::recognize(&tagged);

    Ok(Question::from_parts(
        text.to_string(),
        normalize(text),
        tagged,
        entities,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagging::vocabulary::EntityType;

    #[test]
    fn test_empty_is_invalid() {
        assert!(matches!(tag(""), Err(DomainError::InvalidInput(_))));
        assert!(matches!(tag("   \t\n"), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_punctuation_only_is_invalid() {
        assert!(matches!(tag("?!?"), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_tag_newton_question() {
        let q = tag("When was Newton born?").unwrap();
        assert_eq!(q.normalized(), "when was newton born?");
        assert_eq!(
            q.tokens().collect::<Vec<_>>(),
            vec!["When", "was", "Newton", "born", "?"]
        );
        assert_eq!(q.entities().len(), 1);
        assert_eq!(q.entities()[0].entity_type, EntityType::Person);
    }

    #[test]
    fn test_tag_is_deterministic() {
        let a = tag("Who founded Microsoft Corporation in 1975?").unwrap();
        let b = tag("Who founded Microsoft Corporation in 1975?").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  Hello \n  World "), "hello world");
    }
}
