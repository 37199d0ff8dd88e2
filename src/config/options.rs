// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use chrono::Datelike;

use super::consts::*;
use crate::error::{Error, Result};

/// Settings for the HTTP client shared by every command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

/// `urls` command: which listing to walk and where to write the URL list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectOptions {
    pub base_url: String,
    pub year: i32,
    pub output: PathBuf,
    pub http: HttpOptions,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            year: current_year(),
            output: PathBuf::from(DEFAULT_URL_LIST),
            http: HttpOptions::default(),
        }
    }
}

/// `games` command: batching and output of the fetch-and-annotate pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineOptions {
    pub batch_size: usize,
    pub output: PathBuf,
    pub http: HttpOptions,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            batch_size: BATCH_SIZE,
            output: PathBuf::from(DEFAULT_GAMES_FILE),
            http: HttpOptions::default(),
        }
    }
}

impl PipelineOptions {
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::Config(s!("batch size must be at least 1")));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

/// `analyse` command: thresholds, country-code lookup and table output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyseOptions {
    pub out_dir: PathBuf,
    /// `name,code` file mapping country names to ISO alpha-3 codes.
    pub country_codes: Option<PathBuf>,
    pub min_games: usize,
    pub min_country_entries: usize,
    pub format: ExportFormat,
}

impl Default for AnalyseOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_ANALYSIS_DIR),
            country_codes: None,
            min_games: ENGINE_MIN_GAMES,
            min_country_entries: COUNTRY_MIN_ENTRIES,
            format: ExportFormat::Csv,
        }
    }
}

impl AnalyseOptions {
    /// Output path for one table: `<out_dir>/<name>.<ext>`.
    pub fn table_path(&self, name: &str) -> PathBuf {
        self.out_dir.join(join!(name, ".", self.format.ext()))
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
