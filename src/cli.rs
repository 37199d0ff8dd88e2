// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use color_eyre::eyre::WrapErr;

use crate::config::consts::*;
use crate::config::options::{
    current_year, AnalyseOptions, CollectOptions, ExportFormat, HttpOptions, PipelineOptions,
};
use crate::core::net::HttpClient;
use crate::progress::LogProgress;
use crate::{log, runner};

/// Scrape Global Game Jam submissions and summarize which engines they use.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// More log output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Append log lines to this file instead of stderr.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk the yearly games listing and write one submission URL per line.
    Urls {
        #[arg(short, long, default_value = DEFAULT_URL_LIST)]
        output: PathBuf,
        /// Jam year (defaults to the current year).
        #[arg(short, long)]
        year: Option<i32>,
        #[arg(long, default_value = BASE_URL)]
        base_url: String,
        #[command(flatten)]
        http: HttpArgs,
    },

    /// Fetch every submission page in a URL list and write the records as JSON.
    Games {
        /// URL list, one per line.
        input: PathBuf,
        #[arg(short, long, default_value = DEFAULT_GAMES_FILE)]
        output: PathBuf,
        /// Pages fetched concurrently per batch.
        #[arg(short, long, default_value_t = BATCH_SIZE)]
        batch_size: usize,
        #[command(flatten)]
        http: HttpArgs,
    },

    /// Turn a games JSON file into engine / tag / country tables.
    Analyse {
        /// JSON array written by `games`.
        input: PathBuf,
        /// Output directory.
        #[arg(short, long, default_value = DEFAULT_ANALYSIS_DIR)]
        output: PathBuf,
        /// `name,code` file mapping country names to ISO alpha-3 codes.
        #[arg(long)]
        country_codes: Option<PathBuf>,
        /// Engines used by fewer games are grouped as "Others".
        #[arg(long, default_value_t = ENGINE_MIN_GAMES)]
        min_games: usize,
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },
}

#[derive(Args, Debug)]
pub struct HttpArgs {
    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl HttpArgs {
    fn options(&self) -> HttpOptions {
        HttpOptions { timeout: Duration::from_secs(self.timeout), ..Default::default() }
    }
}

pub async fn run() -> color_eyre::Result<()> {
    let cli = Cli::parse();
    log::init(cli.verbose, cli.log_file.as_deref())?;
    let mut progress = LogProgress::default();

    match cli.command {
        Command::Urls { output, year, base_url, http } => {
            let opts = CollectOptions {
                base_url,
                year: year.unwrap_or_else(current_year),
                output,
                http: http.options(),
            };
            let client = HttpClient::new(&opts.http)?;
            let summary = runner::collect(&client, &opts, &mut progress)
                .await
                .wrap_err_with(|| format!("collecting {} submissions", opts.year))?;
            print_written(&summary.files_written);
        }
        Command::Games { input, output, batch_size, http } => {
            let opts = PipelineOptions { batch_size, output, http: http.options() };
            let client = HttpClient::new(&opts.http)?;
            let summary = runner::annotate(&client, &input, &opts, &mut progress)
                .await
                .wrap_err_with(|| format!("annotating {}", input.display()))?;
            if let Some(s) = &summary.pipeline {
                eprintln!(
                    "{} records from {} urls ({} dropped); {} of {} jam sites resolved",
                    s.records,
                    s.urls,
                    s.dropped,
                    s.sites_resolved,
                    s.site_fetches,
                );
            }
            print_written(&summary.files_written);
        }
        Command::Analyse { input, output, country_codes, min_games, format } => {
            let opts = AnalyseOptions {
                out_dir: output,
                country_codes,
                min_games,
                format,
                ..Default::default()
            };
            let summary = runner::analyse(&input, &opts)
                .wrap_err_with(|| format!("analysing {}", input.display()))?;
            print_written(&summary.files_written);
        }
    }
    Ok(())
}

fn print_written(paths: &[PathBuf]) {
    for p in paths {
        println!("{}", p.display());
    }
}
