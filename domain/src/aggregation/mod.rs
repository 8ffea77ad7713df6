//! Aggregation and ranking of candidate answers.
//!
//! 1. [`dedup::dedup_key`] normalises text so near-duplicates group together
//! 2. [`ranker::aggregate`] keeps each group's best member by composite score
//!    (`priority_weight * confidence`) and ranks the groups deterministically
//! 3. [`filter::discard_echoes`] removes candidates that only repeat the question

pub mod dedup;
pub mod filter;
pub mod ranker;

pub use dedup::dedup_key;
pub use filter::{discard_echoes, is_echo};
pub use ranker::{aggregate, rank_order};
