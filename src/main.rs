use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::info;

use candidate_ranker::candidates::loader::load_candidates;
use candidate_ranker::config::Config;
use candidate_ranker::output::terminal::{write_candidate_table, write_winner};
use candidate_ranker::scoring::rank::{score_and_rank, top_candidate};
use candidate_ranker::scoring::table::build_score_table;

/// Predict which new candidate will get the most interviews.
///
/// Learns a score for every combination of tags from past candidates'
/// interview counts, then ranks the new candidates by the summed scores of
/// their own tag combinations.
#[derive(Parser)]
#[command(name = "candidate-ranker", version, about)]
struct Cli {
    /// Also print past and new candidates ranked by score
    #[arg(short, long)]
    verbose: bool,

    /// Directory holding the candidate files (default: RANKER_DATA_DIR or .)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Past candidate file; repeat to merge several, in order
    #[arg(long = "past", value_name = "FILE")]
    past: Vec<PathBuf>,

    /// New candidate file to rank
    #[arg(long = "new", value_name = "FILE")]
    new: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    candidate_ranker::logging::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?.with_overrides(cli.data_dir, cli.past, cli.new);

    // Load everything up front: a bad file must fail the run before any
    // report line is printed.
    let past_candidates =
        load_candidates(&config.past_paths()).context("failed to load past candidates")?;
    let new_candidates =
        load_candidates(&[config.new_path()]).context("failed to load new candidates")?;
    info!(
        past = past_candidates.len(),
        new = new_candidates.len(),
        "Loaded candidates"
    );

    let table = build_score_table(&past_candidates);
    info!(entries = table.len(), "Built score table");

    let ranked_new = score_and_rank(new_candidates, &table);
    let winner = top_candidate(&ranked_new).with_context(|| {
        format!(
            "{} contains no candidates to rank",
            config.new_path().display()
        )
    })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.verbose {
        let ranked_past = score_and_rank(past_candidates, &table);
        write_candidate_table(&mut out, &ranked_past)?;
        write_candidate_table(&mut out, &ranked_new)?;
    }

    write_winner(&mut out, winner)?;
    out.flush()?;

    Ok(())
}
