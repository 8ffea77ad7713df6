//! Deterministic ranking of candidate answers.

use super::dedup::dedup_key;
use crate::answer::aggregated::AggregatedAnswer;
use crate::answer::candidate::CandidateAnswer;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Total order used everywhere a "better" candidate must be picked.
///
/// Higher composite score first; ties go to the higher-priority source kind,
/// then the shorter text. Source name and text break any remaining tie so the
/// result never depends on arrival order.
pub fn rank_order(a: &CandidateAnswer, b: &CandidateAnswer) -> Ordering {
    b.composite_score()
        .total_cmp(&a.composite_score())
        .then_with(|| a.kind.cmp(&b.kind))
        .then_with(|| a.text.chars().count().cmp(&b.text.chars().count()))
        .then_with(|| a.source.cmp(&b.source))
        .then_with(|| a.text.cmp(&b.text))
        .then_with(|| b.confidence().total_cmp(&a.confidence()))
}

/// Merge candidates into a single ranked choice.
///
/// Candidates sharing a [`dedup_key`] form one group represented by its best
/// member. Groups are ranked by their representative; the top group's
/// representative is chosen and every member of that group is recorded as
/// contributing evidence. An empty input yields the "no answer" sentinel.
pub fn aggregate(candidates: Vec<CandidateAnswer>) -> AggregatedAnswer {
    if candidates.is_empty() {
        return AggregatedAnswer::no_answer();
    }

    let mut groups: BTreeMap<String, Vec<CandidateAnswer>> = BTreeMap::new();
    for candidate in candidates {
        groups
            .entry(dedup_key(&candidate.text))
            .or_default()
            .push(candidate);
    }

    let mut ranked: Vec<Vec<CandidateAnswer>> = groups
        .into_values()
        .map(|mut members| {
            members.sort_by(rank_order);
            members
        })
        .collect();
    ranked.sort_by(|a, b| rank_order(&a[0], &b[0]));

    let mut ranked = ranked.into_iter();
    let Some(winning_group) = ranked.next() else {
        return AggregatedAnswer::no_answer();
    };
    let runners_up: Vec<CandidateAnswer> = ranked
        .filter_map(|group| group.into_iter().next())
        .collect();

    let chosen = winning_group[0].clone();
    AggregatedAnswer::chosen(chosen, winning_group, runners_up)
}
