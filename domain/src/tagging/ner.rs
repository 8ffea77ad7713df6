//! Named-entity chunking over tagged tokens.

use super::vocabulary::{EntityType, PosTag};
use crate::core::question::{NamedEntity, TaggedToken};

const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];

const WEEKDAYS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

const ORGANIZATION_WORDS: &[&str] = &[
    "inc", "corp", "corporation", "company", "co", "ltd", "llc", "university", "college",
    "institute", "agency", "bank", "association", "foundation", "party", "group", "council",
    "society", "museum", "ministry", "department", "committee", "organization", "organisation",
    "club", "team", "airlines", "records", "studios",
];

const LOCATION_WORDS: &[&str] = &[
    "tower", "river", "mountain", "mountains", "mount", "mt", "lake", "ocean", "sea", "island",
    "islands", "bridge", "street", "city", "park", "valley", "desert", "canyon", "falls", "bay",
    "county", "province", "state", "kingdom", "republic",
];

const GAZETTEER: &[&str] = &[
    "africa", "america", "antarctica", "asia", "australia", "austria", "beijing", "berlin",
    "brazil", "california", "canada", "china", "egypt", "england", "europe", "everest", "france",
    "germany", "greece", "india", "ireland", "italy", "japan", "london", "madrid", "mexico",
    "moscow", "new york", "paris", "rome", "russia", "scotland", "spain", "sydney", "texas",
    "tokyo", "wales", "washington",
];

const HONORIFICS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "sir", "lady", "lord", "king", "queen", "president", "prince",
    "princess", "saint", "st", "pope", "general", "captain", "professor", "emperor",
];

const LOCATION_CUES: &[&str] = &["in", "at", "from", "near"];

/// Verbs that imply the subject of the question is a person
const LIFE_EVENT_VERBS: &[&str] = &[
    "born", "died", "married", "wrote", "invented", "discovered", "painted", "composed", "ruled",
];

fn lower_words<'a>(tokens: &'a [TaggedToken]) -> impl Iterator<Item = String> + 'a {
    tokens
        .iter()
        .map(|t| t.text.trim_end_matches('.').to_lowercase())
}

fn is_calendar_word(text: &str) -> bool {
    let lower = text.to_lowercase();
    MONTHS.contains(&lower.as_str()) || WEEKDAYS.contains(&lower.as_str())
}

fn is_acronym(text: &str) -> bool {
    text.len() >= 2 && text.chars().all(|c| c.is_ascii_uppercase())
}

fn is_year(token: &TaggedToken) -> bool {
    token.tag == PosTag::Cd
        && token.text.len() == 4
        && token
            .text
            .parse::<u16>()
            .is_ok_and(|y| (1000..=2999).contains(&y))
}

/// Join tokens with spaces, without a space before punctuation.
fn join_span(tokens: &[TaggedToken]) -> String {
    let mut out = String::new();
    for token in tokens {
        if !out.is_empty() && token.tag != PosTag::Punct && token.tag != PosTag::Pos {
            out.push(' ');
        }
        out.push_str(&token.text);
    }
    out
}

/// Find the end of a proper-noun run starting at `start`, letting "of" bridge
/// two runs ("Bank of England").
fn proper_noun_run(tokens: &[TaggedToken], start: usize) -> usize {
    let mut end = start;
    while end < tokens.len() {
        if tokens[end].tag == PosTag::Nnp {
            end += 1;
        } else if tokens[end].text == "of"
            && end > start
            && tokens.get(end + 1).is_some_and(|t| t.tag == PosTag::Nnp)
        {
            end += 1;
        } else {
            break;
        }
    }
    end
}

/// Extend a date span over adjacent numbers: "25 December", "December 25, 1642".
fn extend_date(tokens: &[TaggedToken], mut start: usize, mut end: usize) -> (usize, usize) {
    if start > 0 && tokens[start - 1].tag == PosTag::Cd {
        start -= 1;
    }
    while end < tokens.len() {
        if tokens[end].tag == PosTag::Cd {
            end += 1;
        } else if tokens[end].text == ","
            && tokens.get(end + 1).is_some_and(|t| t.tag == PosTag::Cd)
        {
            end += 2;
        } else {
            break;
        }
    }
    (start, end)
}

fn classify(
    tokens: &[TaggedToken],
    start: usize,
    end: usize,
    person_context: bool,
) -> EntityType {
    let span = &tokens[start..end];
    let words: Vec<String> = lower_words(span).collect();
    let joined = words.join(" ");

    if span.iter().any(|t| is_calendar_word(&t.text)) {
        return EntityType::Date;
    }
    if words.iter().any(|w| ORGANIZATION_WORDS.contains(&w.as_str()))
        || (span.len() == 1 && is_acronym(&span[0].text))
    {
        return EntityType::Organization;
    }
    let cue_before =
        start > 0 && LOCATION_CUES.contains(&tokens[start - 1].text.to_lowercase().as_str());
    if GAZETTEER.contains(&joined.as_str())
        || words.iter().any(|w| GAZETTEER.contains(&w.as_str()))
        || words.iter().any(|w| LOCATION_WORDS.contains(&w.as_str()))
        || cue_before
    {
        return EntityType::Location;
    }
    if words
        .first()
        .is_some_and(|w| HONORIFICS.contains(&w.as_str()))
    {
        return EntityType::Person;
    }
    if span.len() >= 2 || person_context {
        return EntityType::Person;
    }
    EntityType::Other
}

/// Recognise named-entity spans in a tagged token sequence.
pub fn recognize(tokens: &[TaggedToken]) -> Vec<NamedEntity> {
    let person_context = lower_words(tokens)
        .any(|w| LIFE_EVENT_VERBS.contains(&w.as_str()) || w == "who" || w == "whom");

    let mut entities = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].tag == PosTag::Nnp {
            let run_end = proper_noun_run(tokens, i);
            let entity_type = classify(tokens, i, run_end, person_context);
            let (start, end) = if entity_type == EntityType::Date {
                extend_date(tokens, i, run_end)
            } else {
                (i, run_end)
            };
            // A date span may reach back over a number already passed
            if entities.last().is_some_and(|e: &NamedEntity| e.end > start) {
                entities.pop();
            }
            entities.push(NamedEntity {
                text: join_span(&tokens[start..end]),
                entity_type,
                start,
                end,
            });
            i = end;
        } else if is_year(&tokens[i]) {
            entities.push(NamedEntity {
                text: tokens[i].text.clone(),
                entity_type: EntityType::Date,
                start: i,
                end: i + 1,
            });
            i += 1;
        } else {
            i += 1;
        }
    }
    entities
}
