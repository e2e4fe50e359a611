// Candidate records — loading raw JSON into normalized in-memory values.

pub mod loader;
pub mod models;
