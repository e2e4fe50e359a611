// Score table — mean past interview count for every tag combination.
//
// For each past candidate, every non-empty subset of its tags receives that
// candidate's interview count. Once all candidates have been seen, each
// subset's score is the mean of the counts it received. Subsets no past
// candidate carried have no entry and score 0.

use std::collections::BTreeMap;

use tracing::debug;

use super::combination::{all_combinations, TagCombination};
use crate::candidates::models::CandidateRecord;

/// Read-only mapping from tag combination to mean interview count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    scores: BTreeMap<TagCombination, f64>,
}

impl ScoreTable {
    /// Score for a combination, or 0.0 if no past candidate carried it.
    pub fn get(&self, combination: &TagCombination) -> f64 {
        self.scores.get(combination).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, combination: &TagCombination) -> bool {
        self.scores.contains_key(combination)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Entries in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (&TagCombination, f64)> {
        self.scores.iter().map(|(combo, score)| (combo, *score))
    }
}

/// Running total for one combination while the table is being built.
#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    // Wide enough that summing u64 counts cannot overflow.
    sum: u128,
    count: u64,
}

/// Build the score table from past candidates.
///
/// The result depends only on the multiset of (tags, interview count) pairs,
/// not on the order of `candidates`.
pub fn build_score_table(candidates: &[CandidateRecord]) -> ScoreTable {
    let mut totals: BTreeMap<TagCombination, Accumulator> = BTreeMap::new();

    for candidate in candidates {
        for combination in all_combinations(&candidate.tags) {
            let acc = totals.entry(combination).or_default();
            acc.sum += u128::from(candidate.interview_count);
            acc.count += 1;
        }
    }

    let scores: BTreeMap<TagCombination, f64> = totals
        .into_iter()
        .map(|(combination, acc)| (combination, acc.sum as f64 / acc.count as f64))
        .collect();

    debug!(
        candidates = candidates.len(),
        entries = scores.len(),
        "Built tag combination score table"
    );

    ScoreTable { scores }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(tags: &[&str], count: u64) -> CandidateRecord {
        CandidateRecord::new(
            "Test Candidate",
            tags.iter().map(|t| t.to_string()).collect(),
            count,
        )
    }

    #[test]
    fn test_means_per_combination() {
        let table = build_score_table(&[candidate(&["X"], 2), candidate(&["X", "Y"], 4)]);
        assert_eq!(table.len(), 3);
        assert!((table.get(&TagCombination::new(["X"])) - 3.0).abs() < f64::EPSILON);
        assert!((table.get(&TagCombination::new(["Y"])) - 4.0).abs() < f64::EPSILON);
        assert!((table.get(&TagCombination::new(["X", "Y"])) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_combination_scores_zero() {
        let table = build_score_table(&[candidate(&["X"], 2)]);
        assert!(!table.contains(&TagCombination::new(["Z"])));
        assert_eq!(table.get(&TagCombination::new(["Z"])), 0.0);
    }

    #[test]
    fn test_untagged_candidate_adds_nothing() {
        let table = build_score_table(&[candidate(&[], 9)]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_mean_uses_float_division() {
        let table = build_score_table(&[candidate(&["X"], 1), candidate(&["X"], 2)]);
        assert!((table.get(&TagCombination::new(["X"])) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tag_order_does_not_split_keys() {
        let table = build_score_table(&[candidate(&["X", "Y"], 2), candidate(&["Y", "X"], 6)]);
        assert!((table.get(&TagCombination::new(["X", "Y"])) - 4.0).abs() < f64::EPSILON);
        assert_eq!(table.len(), 3);
    }
}
