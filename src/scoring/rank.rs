// Candidate scoring and ranking against a ScoreTable.
//
// A candidate's score is the sum of the table scores of every non-empty
// subset of its tags. Candidates with more tags sum more subsets and so
// tend to score higher; the ranking keeps that property as is.

use std::cmp::Ordering;

use super::combination::all_combinations;
use super::table::ScoreTable;
use crate::candidates::models::{CandidateRecord, ScoredCandidate};

/// Score a single candidate. Pure: the same tags and table always give the
/// same score.
pub fn score_candidate(candidate: &CandidateRecord, table: &ScoreTable) -> f64 {
    all_combinations(&candidate.tags)
        .map(|combination| table.get(&combination))
        .sum()
}

/// Score every candidate and sort best first.
///
/// Ordering is by score, then interview count, both descending. Candidates
/// equal on both keep their input order.
pub fn score_and_rank(candidates: Vec<CandidateRecord>, table: &ScoreTable) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|candidate| {
            let score = score_candidate(&candidate, table);
            ScoredCandidate { candidate, score }
        })
        .collect();

    scored.sort_by(compare_ranked);
    scored
}

/// Descending order on (score, interview count).
pub fn compare_ranked(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.interview_count().cmp(&a.interview_count()))
}

/// The best-ranked candidate of an already ranked list.
pub fn top_candidate(ranked: &[ScoredCandidate]) -> Option<&ScoredCandidate> {
    ranked.first()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::table::build_score_table;

    fn candidate(name: &str, tags: &[&str], count: u64) -> CandidateRecord {
        CandidateRecord::new(name, tags.iter().map(|t| t.to_string()).collect(), count)
    }

    fn example_table() -> ScoreTable {
        build_score_table(&[candidate("p1", &["X"], 2), candidate("p2", &["X", "Y"], 4)])
    }

    #[test]
    fn test_score_sums_subset_means() {
        let table = example_table();
        let both = score_candidate(&candidate("n", &["X", "Y"], 0), &table);
        let single = score_candidate(&candidate("n", &["X"], 0), &table);
        assert!((both - 11.0).abs() < 1e-10, "Expected 11.0, got {both}");
        assert!((single - 3.0).abs() < 1e-10, "Expected 3.0, got {single}");
    }

    #[test]
    fn test_rank_puts_higher_score_first() {
        let ranked = score_and_rank(
            vec![candidate("one", &["X"], 0), candidate("two", &["X", "Y"], 0)],
            &example_table(),
        );
        assert_eq!(ranked[0].name(), "two");
        assert_eq!(ranked[1].name(), "one");
    }

    #[test]
    fn test_interview_count_breaks_ties() {
        let ranked = score_and_rank(
            vec![candidate("low", &["X"], 1), candidate("high", &["X"], 5)],
            &example_table(),
        );
        assert_eq!(ranked[0].name(), "high");
    }

    #[test]
    fn test_untagged_candidate_scores_zero() {
        assert_eq!(score_candidate(&candidate("n", &[], 0), &example_table()), 0.0);
    }

    #[test]
    fn test_top_candidate_of_empty_list() {
        assert!(top_candidate(&[]).is_none());
    }
}
