// Candidate models — the values that flow from the loader through scoring
// into the report.
//
// A record is never mutated once loaded. Scoring produces a separate
// ScoredCandidate so re-scoring always starts from zero.

/// A candidate as read from a past or new candidates file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    /// Display name: first and last name joined by a space
    pub name: String,
    /// Tags in the order they appear in the source record, without duplicates
    pub tags: Vec<String>,
    /// Known interview count (0 for new candidates and missing values)
    pub interview_count: u64,
}

impl CandidateRecord {
    pub fn new(name: impl Into<String>, tags: Vec<String>, interview_count: u64) -> Self {
        Self {
            name: name.into(),
            tags,
            interview_count,
        }
    }
}

/// A candidate paired with the score computed for it against a ScoreTable.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub candidate: CandidateRecord,
    pub score: f64,
}

impl ScoredCandidate {
    pub fn name(&self) -> &str {
        &self.candidate.name
    }

    pub fn interview_count(&self) -> u64 {
        self.candidate.interview_count
    }

    pub fn tags(&self) -> &[String] {
        &self.candidate.tags
    }
}
