// Output formatting — the ranked candidate report.

pub mod terminal;
