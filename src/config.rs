use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Past candidate files merged, in this order, when nothing else is configured.
pub const DEFAULT_PAST_FILES: [&str; 3] = [
    "past_candidates1.json",
    "past_candidates2.json",
    "past_candidates3.json",
];

/// New candidate file used when nothing else is configured.
pub const DEFAULT_NEW_FILE: &str = "new_candidates.json";

/// Where the candidate files live.
///
/// Values come from environment variables (a .env file is loaded at
/// startup via dotenvy) and can be overridden from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory that relative file names are resolved against (RANKER_DATA_DIR)
    pub data_dir: PathBuf,
    /// Past candidate files, merged in order (RANKER_PAST_FILES, comma separated)
    pub past_files: Vec<PathBuf>,
    /// New candidate file (RANKER_NEW_FILE)
    pub new_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            past_files: DEFAULT_PAST_FILES.iter().map(PathBuf::from).collect(),
            new_file: PathBuf::from(DEFAULT_NEW_FILE),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let data_dir = env::var("RANKER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let past_files = match env::var("RANKER_PAST_FILES") {
            Ok(list) => parse_file_list(&list)?,
            Err(_) => defaults.past_files,
        };

        let new_file = env::var("RANKER_NEW_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.new_file);

        Ok(Self {
            data_dir,
            past_files,
            new_file,
        })
    }

    /// Apply command-line overrides. Empty / missing values leave the
    /// loaded configuration untouched.
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        past_files: Vec<PathBuf>,
        new_file: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if !past_files.is_empty() {
            self.past_files = past_files;
        }
        if let Some(file) = new_file {
            self.new_file = file;
        }
        self
    }

    /// Past candidate paths resolved against the data directory.
    pub fn past_paths(&self) -> Vec<PathBuf> {
        self.past_files
            .iter()
            .map(|file| resolve(&self.data_dir, file))
            .collect()
    }

    /// New candidate path resolved against the data directory.
    pub fn new_path(&self) -> PathBuf {
        resolve(&self.data_dir, &self.new_file)
    }
}

fn resolve(dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        dir.join(file)
    }
}

/// Split a comma separated list of file names, ignoring blanks.
fn parse_file_list(list: &str) -> Result<Vec<PathBuf>> {
    let files: Vec<PathBuf> = list
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(PathBuf::from)
        .collect();
    if files.is_empty() {
        anyhow::bail!("RANKER_PAST_FILES is set but names no files");
    }
    Ok(files)
}
