//! Source priority hints derived from the tagged question.

use crate::answer::candidate::SourceKind;
use crate::core::question::Question;

/// Default multiplier applied to encyclopedia weight for entity-bearing questions
pub const DEFAULT_ENTITY_BOOST: f64 = 1.25;

/// Per-question adjustments to static source weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingHints {
    encyclopedia_multiplier: f64,
}

impl RoutingHints {
    /// Questions naming a person, place or organisation favour the encyclopedia.
    pub fn for_question(question: &Question, entity_boost: f64) -> Self {
        let encyclopedia_multiplier = if question.has_encyclopedic_entity() {
            entity_boost.max(0.0)
        } else {
            1.0
        };
        Self {
            encyclopedia_multiplier,
        }
    }

    /// Weight a source of `kind` should carry for this question.
    pub fn effective_weight(&self, kind: SourceKind, base_weight: f64) -> f64 {
        match kind {
            SourceKind::Encyclopedia => base_weight * self.encyclopedia_multiplier,
            _ => base_weight,
        }
    }
}

impl Default for RoutingHints {
    fn default() -> Self {
        Self {
            encyclopedia_multiplier: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagging::tag;

    #[test]
    fn test_entity_question_boosts_encyclopedia() {
        let q = tag("When was Newton born?").unwrap();
        let hints = RoutingHints::for_question(&q, 1.5);
        assert_eq!(hints.effective_weight(SourceKind::Encyclopedia, 1.0), 1.5);
        assert_eq!(hints.effective_weight(SourceKind::Computational, 1.0), 1.0);
    }

    #[test]
    fn test_plain_question_is_unchanged() {
        let q = tag("what is the speed of light").unwrap();
        let hints = RoutingHints::for_question(&q, 1.5);
        assert_eq!(hints.effective_weight(SourceKind::Encyclopedia, 0.8), 0.8);
    }
}
