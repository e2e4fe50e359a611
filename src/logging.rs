// Logging setup — structured tracing to stderr.
//
// Stdout carries only the report, so diagnostics never go there.

use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is not set.
pub const DEFAULT_FILTER: &str = "candidate_ranker=warn";

/// Install the global tracing subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
