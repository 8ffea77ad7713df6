//! Question value object

use crate::tagging::vocabulary::{EntityType, PosTag};
use serde::{Deserialize, Serialize};

/// A token paired with its part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub text: String,
    pub tag: PosTag,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, tag: PosTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }
}

/// A named-entity span recognised in the question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    /// Surface text of the span, tokens joined by single spaces
    pub text: String,
    pub entity_type: EntityType,
    /// Index of the first token of the span
    pub start: usize,
    /// One past the last token of the span
    pub end: usize,
}

/// A tagged question (Value Object)
///
/// Built once per request by [`crate::tagging::tag`] and read-only afterwards.
/// Tokens and tags are stored pairwise, so the tag sequence always has the
/// same length as the token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    raw: String,
    normalized: String,
    tagged: Vec<TaggedToken>,
    entities: Vec<NamedEntity>,
}

impl Question {
    pub(crate) fn from_parts(
        raw: String,
        normalized: String,
        tagged: Vec<TaggedToken>,
        entities: Vec<NamedEntity>,
    ) -> Self {
        Self {
            raw,
            normalized,
            tagged,
            entities,
        }
    }

    /// The text exactly as the caller supplied it
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Lower-cased, trimmed text with internal whitespace collapsed
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn tagged_tokens(&self) -> &[TaggedToken] {
        &self.tagged
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tagged.iter().map(|t| t.text.as_str())
    }

    pub fn tags(&self) -> impl Iterator<Item = PosTag> + '_ {
        self.tagged.iter().map(|t| t.tag)
    }

    pub fn len(&self) -> usize {
        self.tagged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tagged.is_empty()
    }

    pub fn entities(&self) -> &[NamedEntity] {
        &self.entities
    }

    pub fn has_entity_type(&self, entity_type: EntityType) -> bool {
        self.entities.iter().any(|e| e.entity_type == entity_type)
    }

    /// Whether the question names something an encyclopedia would cover
    pub fn has_encyclopedic_entity(&self) -> bool {
        self.entities.iter().any(|e| e.entity_type.is_encyclopedic())
    }

    /// Content words (nouns, verbs, adjectives, numbers), useful as a search query
    pub fn keywords(&self) -> Vec<&str> {
        self.tagged
            .iter()
            .filter(|t| {
                t.tag.is_noun()
                    || matches!(t.tag, PosTag::Jj | PosTag::Cd | PosTag::Vbd | PosTag::Vbg)
            })
            .map(|t| t.text.as_str())
            .collect()
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
