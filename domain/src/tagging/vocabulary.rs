//! Fixed tag vocabulary used by the tagger.
//!
//! Part-of-speech tags are a Penn Treebank subset; the named-entity types are the
//! five coarse classes downstream routing cares about.

use serde::{Deserialize, Serialize};

/// Part-of-speech tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    /// Proper noun
    Nnp,
    /// Common noun, singular
    Nn,
    /// Common noun, plural
    Nns,
    /// Verb, base form
    Vb,
    /// Verb, past tense
    Vbd,
    /// Verb, gerund or present participle
    Vbg,
    /// Verb, third person singular present
    Vbz,
    /// Modal
    Md,
    /// Adjective
    Jj,
    /// Adverb
    Rb,
    /// Determiner
    Dt,
    /// Preposition or subordinating conjunction
    In,
    /// Coordinating conjunction
    Cc,
    /// Cardinal number
    Cd,
    /// Personal pronoun
    Prp,
    /// Possessive ending
    Pos,
    /// Wh-word (who, what, when, ...)
    Wh,
    /// Punctuation
    Punct,
    /// Other symbol
    Sym,
}

impl PosTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Nnp => "NNP",
            PosTag::Nn => "NN",
            PosTag::Nns => "NNS",
            PosTag::Vb => "VB",
            PosTag::Vbd => "VBD",
            PosTag::Vbg => "VBG",
            PosTag::Vbz => "VBZ",
            PosTag::Md => "MD",
            PosTag::Jj => "JJ",
            PosTag::Rb => "RB",
            PosTag::Dt => "DT",
            PosTag::In => "IN",
            PosTag::Cc => "CC",
            PosTag::Cd => "CD",
            PosTag::Prp => "PRP",
            PosTag::Pos => "POS",
            PosTag::Wh => "WH",
            PosTag::Punct => "PUNCT",
            PosTag::Sym => "SYM",
        }
    }

    /// Nouns of any kind, proper or common
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Nnp | PosTag::Nn | PosTag::Nns)
    }

    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            PosTag::Vb | PosTag::Vbd | PosTag::Vbg | PosTag::Vbz | PosTag::Md
        )
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Named-entity class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityType {
    Person,
    Location,
    Organization,
    Date,
    Other,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Person => "PERSON",
            EntityType::Location => "LOCATION",
            EntityType::Organization => "ORGANIZATION",
            EntityType::Date => "DATE",
            EntityType::Other => "OTHER",
        }
    }

    /// Entity classes an encyclopedia is likely to have an article for
    pub fn is_encyclopedic(&self) -> bool {
        matches!(
            self,
            EntityType::Person | EntityType::Location | EntityType::Organization
        )
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_tag_serializes_uppercase() {
        let json = serde_json::to_string(&PosTag::Nnp).unwrap();
        assert_eq!(json, "\"NNP\"");
    }

    #[test]
    fn test_entity_type_display() {
        assert_eq!(EntityType::Organization.to_string(), "ORGANIZATION");
    }

    #[test]
    fn test_encyclopedic_entities() {
        assert!(EntityType::Person.is_encyclopedic());
        assert!(!EntityType::Date.is_encyclopedic());
        assert!(!EntityType::Other.is_encyclopedic());
    }
}
