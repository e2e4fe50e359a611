// Candidate ranker: predict which new candidate will get the most interviews.
//
// Past candidates (name, tags, interview count) are turned into a score for
// every combination of tags; new candidates are ranked by summing the scores
// of their own tag combinations.

pub mod candidates;
pub mod config;
pub mod logging;
pub mod output;
pub mod scoring;
