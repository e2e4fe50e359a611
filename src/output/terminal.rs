// Plain-text candidate report.
//
// Everything here writes to a `Write` so the report can be rendered into a
// buffer in tests. Column layout:
//
//   Name (20, left)  Interviews (10, right)  Score (5.2, right)  Tags

use std::io::{self, Write};

use crate::candidates::models::ScoredCandidate;

/// Width of the rule printed under the header.
pub const RULE_WIDTH: usize = 79;

/// Header row for a candidate table.
pub fn format_header() -> String {
    format!("{:20} {:10}    {:5}    {}", "Name", "Interviews", "Score", "Tags")
}

/// One table row for a scored candidate.
pub fn format_row(candidate: &ScoredCandidate) -> String {
    format!(
        "{:20} {:10}    {:5.2}    {}",
        candidate.name(),
        candidate.interview_count(),
        candidate.score,
        candidate.tags().join(", ")
    )
}

/// Write a ranked candidate table followed by a blank line.
pub fn write_candidate_table<W: Write>(out: &mut W, ranked: &[ScoredCandidate]) -> io::Result<()> {
    writeln!(out, "{}", format_header())?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for candidate in ranked {
        writeln!(out, "{}", format_row(candidate))?;
    }
    writeln!(out)
}

/// Write the final verdict line followed by a blank line.
pub fn write_winner<W: Write>(out: &mut W, winner: &ScoredCandidate) -> io::Result<()> {
    writeln!(
        out,
        "The candidate with the most interviews should be... {}\n",
        winner.name()
    )
}
