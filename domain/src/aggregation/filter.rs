//! Candidate validation against the question.

use super::dedup::dedup_key;
use crate::answer::candidate::CandidateAnswer;
use crate::core::question::Question;

/// Whether a candidate merely repeats the question or one of its entities.
pub fn is_echo(question: &Question, candidate: &CandidateAnswer) -> bool {
    let key = dedup_key(&candidate.text);
    if key.is_empty() || key == dedup_key(question.normalized()) {
        return true;
    }
    question
        .entities()
        .iter()
        .any(|entity| dedup_key(&entity.text) == key)
}

/// Drop echo candidates, returning the kept candidates and the number dropped.
pub fn discard_echoes(
    question: &Question,
    candidates: Vec<CandidateAnswer>,
) -> (Vec<CandidateAnswer>, usize) {
    let before = candidates.len();
    let kept: Vec<CandidateAnswer> = candidates
        .into_iter()
        .filter(|c| !is_echo(question, c))
        .collect();
    let dropped = before - kept.len();
    (kept, dropped)
}
