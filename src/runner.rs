// src/runner.rs
//
// One function per command: read inputs, run the stage, write outputs.
// Frontends build the options and a fetcher; nothing here parses arguments.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::{
    analysis::{self, CountryCodes},
    config::options::{AnalyseOptions, CollectOptions, PipelineOptions},
    core::net::Fetch,
    error::Result,
    file,
    progress::Progress,
    scrape::{self, pipeline, JamSiteCache, PipelineSummary},
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    /// Set by `annotate`.
    pub pipeline: Option<PipelineSummary>,
}

/// `urls`: walk the listing and write one URL per line.
pub async fn collect<F: Fetch + ?Sized>(
    fetcher: &F,
    opts: &CollectOptions,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    let urls = scrape::collect_urls(fetcher, opts, progress).await?;
    file::write_url_list(&opts.output, &urls)?;
    info!(path = %opts.output.display(), urls = urls.len(), "url list written");
    Ok(RunSummary { files_written: vec![opts.output.clone()], pipeline: None })
}

/// `games`: fetch, parse and annotate every URL in `input`, write the JSON array.
pub async fn annotate<F: Fetch + ?Sized>(
    fetcher: &F,
    input: &Path,
    opts: &PipelineOptions,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    opts.validate()?;
    let urls = file::read_url_list(input)?;
    info!(path = %input.display(), urls = urls.len(), batch_size = opts.batch_size, "annotating");

    let cache = JamSiteCache::new();
    let run = pipeline::run(fetcher, &urls, opts, &cache, progress).await?;
    file::write_records(&opts.output, &run.records)?;
    info!(path = %opts.output.display(), records = run.records.len(), "records written");

    Ok(RunSummary { files_written: vec![opts.output.clone()], pipeline: Some(run.summary) })
}

/// `analyse`: read records, write one table per file.
pub fn analyse(input: &Path, opts: &AnalyseOptions) -> Result<RunSummary> {
    let records = file::read_records(input)?;
    let codes = opts.country_codes.as_deref().map(CountryCodes::load).transpose()?;
    if let Some(codes) = &codes {
        if codes.is_empty() {
            warn!("country code file has no entries; every country will be skipped");
        } else {
            info!(codes = codes.len(), "country codes loaded");
        }
    }

    let result = analysis::analyse(&records, codes.as_ref(), opts);
    file::ensure_directory(&opts.out_dir)?;

    let mut written = Vec::with_capacity(result.tables.len());
    for (name, table) in &result.tables {
        let path = opts.table_path(name);
        file::write_table(&path, table, opts.format.delim())?;
        written.push(path);
    }
    info!(dir = %opts.out_dir.display(), tables = written.len(), "analysis written");

    Ok(RunSummary { files_written: written, pipeline: None })
}
