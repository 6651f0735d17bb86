//! Deterministic ranking.
//!
//! Produces a new sequence; the input slice is never reordered. Equal
//! multisets always rank to the same sequence.

pub mod comparator;

use mercy_core::models::NormalizedDecision;

pub use comparator::{compare_decisions, compare_recency};

/// Rank a borrowed set into a new vector.
pub fn rank(rows: &[NormalizedDecision]) -> Vec<NormalizedDecision> {
    rank_owned(rows.to_vec())
}

/// Rank an owned set, reusing its allocation.
pub fn rank_owned(mut rows: Vec<NormalizedDecision>) -> Vec<NormalizedDecision> {
    rows.sort_by(compare_decisions);
    rows
}

/// Whether `rows` is already in ranked order.
pub fn is_ranked(rows: &[NormalizedDecision]) -> bool {
    rows.windows(2)
        .all(|w| compare_decisions(&w[0], &w[1]).is_le())
}
