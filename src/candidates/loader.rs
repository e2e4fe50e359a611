// Candidate record loader — reads JSON candidate files into CandidateRecords.
//
// Each file holds a JSON array of objects shaped like:
//
//   { "User": { "first_name": "...", "last_name": "...", "interview_count": 3 },
//     "Tag": ["...", "..."] }
//
// Past and new candidate files share this shape; new candidates simply omit
// interview_count. Any failure aborts the whole load, there is no partial
// result.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use serde::Deserialize;
use tracing::{debug, warn};

use super::models::CandidateRecord;

/// Most distinct tags a single candidate may carry. Scoring enumerates every
/// non-empty subset of a candidate's tags (2^k - 1 of them), so wider records
/// are rejected rather than enumerated.
pub const MAX_TAGS_PER_CANDIDATE: usize = 16;

/// Errors raised while loading candidate files. Every variant names the file.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a JSON array of candidates", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: candidate #{index} is malformed", .path.display())]
    Record {
        path: PathBuf,
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "{}: candidate #{index} has interview_count {value}, expected a non-negative integer",
        .path.display()
    )]
    InterviewCount {
        path: PathBuf,
        index: usize,
        value: String,
    },

    #[error(
        "{}: candidate #{index} has {count} distinct tags (at most {max} are supported)",
        .path.display()
    )]
    TooManyTags {
        path: PathBuf,
        index: usize,
        count: usize,
        max: usize,
    },
}

#[derive(Debug, Deserialize)]
struct RawCandidate {
    #[serde(rename = "User")]
    user: RawUser,
    #[serde(rename = "Tag")]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    first_name: String,
    last_name: String,
    #[serde(default)]
    interview_count: Option<RawCount>,
}

/// interview_count as it appears in the wild: a number or a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCount {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl RawCount {
    fn to_count(&self) -> Option<u64> {
        match self {
            RawCount::Integer(n) => Some(*n),
            RawCount::Float(f) => {
                if f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64 {
                    Some(*f as u64)
                } else {
                    None
                }
            }
            RawCount::Text(s) => s.trim().parse::<u64>().ok(),
        }
    }
}

impl fmt::Display for RawCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawCount::Integer(n) => write!(f, "{n}"),
            RawCount::Float(x) => write!(f, "{x}"),
            RawCount::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// Load and concatenate candidates from several files, in the order given.
pub fn load_candidates<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<CandidateRecord>, DataError> {
    let mut candidates = Vec::new();
    for path in paths {
        candidates.extend(load_candidates_from_file(path.as_ref())?);
    }
    Ok(candidates)
}

/// Load the candidates from a single file.
///
/// The file is read in full and closed before parsing begins.
pub fn load_candidates_from_file(path: &Path) -> Result<Vec<CandidateRecord>, DataError> {
    let json = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let candidates = parse_candidates(path, &json)?;
    debug!(path = %path.display(), count = candidates.len(), "Loaded candidates");
    Ok(candidates)
}

/// Parse a JSON array of candidates. `path` is only used to label errors.
pub fn parse_candidates(path: &Path, json: &str) -> Result<Vec<CandidateRecord>, DataError> {
    let elements: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| parse_candidate(path, index, element))
        .collect()
}

fn parse_candidate(
    path: &Path,
    index: usize,
    element: serde_json::Value,
) -> Result<CandidateRecord, DataError> {
    let raw: RawCandidate =
        serde_json::from_value(element).map_err(|source| DataError::Record {
            path: path.to_path_buf(),
            index,
            source,
        })?;

    let interview_count = match &raw.user.interview_count {
        None => 0,
        Some(count) => count.to_count().ok_or_else(|| DataError::InterviewCount {
            path: path.to_path_buf(),
            index,
            value: count.to_string(),
        })?,
    };

    let name = format!("{} {}", raw.user.first_name, raw.user.last_name);
    let tags = dedup_tags(raw.tags);
    if tags.duplicates > 0 {
        warn!(
            path = %path.display(),
            candidate = %name,
            duplicates = tags.duplicates,
            "Dropped duplicate tags"
        );
    }

    if tags.unique.len() > MAX_TAGS_PER_CANDIDATE {
        return Err(DataError::TooManyTags {
            path: path.to_path_buf(),
            index,
            count: tags.unique.len(),
            max: MAX_TAGS_PER_CANDIDATE,
        });
    }

    Ok(CandidateRecord::new(name, tags.unique, interview_count))
}

struct DedupedTags {
    unique: Vec<String>,
    duplicates: usize,
}

/// Remove repeated tags, keeping the first occurrence of each.
fn dedup_tags(tags: Vec<String>) -> DedupedTags {
    let total = tags.len();
    let unique: Vec<String> = tags.into_iter().unique().collect();
    DedupedTags {
        duplicates: total - unique.len(),
        unique,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Vec<CandidateRecord>, DataError> {
        parse_candidates(Path::new("test.json"), json)
    }

    #[test]
    fn test_parses_name_tags_and_count() {
        let candidates = parse(
            r#"[{"User": {"first_name": "Ada", "last_name": "Lovelace", "interview_count": 4},
                 "Tag": ["math", "engines"]}]"#,
        )
        .unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Ada Lovelace");
        assert_eq!(candidates[0].tags, vec!["math", "engines"]);
        assert_eq!(candidates[0].interview_count, 4);
    }

    #[test]
    fn test_string_count_is_coerced() {
        let candidates = parse(
            r#"[{"User": {"first_name": "A", "last_name": "B", "interview_count": " 7 "},
                 "Tag": []}]"#,
        )
        .unwrap();
        assert_eq!(candidates[0].interview_count, 7);
    }

    #[test]
    fn test_missing_count_defaults_to_zero() {
        let candidates =
            parse(r#"[{"User": {"first_name": "A", "last_name": "B"}, "Tag": ["x"]}]"#).unwrap();
        assert_eq!(candidates[0].interview_count, 0);
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let err = parse(
            r#"[{"User": {"first_name": "A", "last_name": "B", "interview_count": -2},
                 "Tag": []}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, DataError::InterviewCount { index: 0, .. }));
    }

    #[test]
    fn test_duplicate_tags_keep_first_occurrence() {
        let candidates = parse(
            r#"[{"User": {"first_name": "A", "last_name": "B"}, "Tag": ["y", "x", "y"]}]"#,
        )
        .unwrap();
        assert_eq!(candidates[0].tags, vec!["y", "x"]);
    }

    #[test]
    fn test_error_names_the_record_index() {
        let err = parse(
            r#"[{"User": {"first_name": "A", "last_name": "B"}, "Tag": []},
                {"User": {"first_name": "C"}, "Tag": []}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, DataError::Record { index: 1, .. }));
        assert!(err.to_string().contains("test.json"));
    }
}
