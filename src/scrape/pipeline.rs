// src/scrape/pipeline.rs
//
// Batched fetch-and-annotate.
//
//   phase 1: URLs in chunks of `batch_size`; each chunk is fetched + parsed
//            concurrently and fully awaited before the next one starts.
//   phase 2: records in chunks again; one task per record with a jam site,
//            each site fetched at most once through `JamSiteCache`.
//   merge:   `jam_site_country` appended to every record whose site resolved.
//
// Detail pages that fail to fetch are dropped; a detail page that fetched
// but does not parse stops the run. Jam sites that fail are left unresolved.

use futures::future::join_all;
use tracing::{debug, error, info, warn};
use url::Url;

use super::sites::{JamSiteCache, SiteState};
use crate::config::options::PipelineOptions;
use crate::core::net::{Fetch, FetchError};
use crate::data::{fields, GameRecord};
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::specs::{game::parse_game, jam_site::parse_country};

/// Counts for one pipeline run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    pub urls: usize,
    pub batches: usize,
    pub records: usize,
    pub dropped: usize,
    pub site_batches: usize,
    pub site_fetches: usize,
    pub sites_resolved: usize,
    pub sites_failed: usize,
}

#[derive(Debug)]
pub struct PipelineRun {
    pub records: Vec<GameRecord>,
    pub summary: PipelineSummary,
}

enum PageOutcome {
    Parsed(GameRecord),
    Dropped(FetchError),
}

enum SiteOutcome<'a> {
    /// Someone else already claimed the URL (or it was seeded).
    Cached,
    Resolved(&'a str),
    Failed(&'a str, String),
}

async fn fetch_page<F: Fetch + ?Sized>(fetcher: &F, url: &str) -> Result<PageOutcome> {
    let body = match fetcher.get(url).await {
        Ok(body) => body,
        Err(e) => return Ok(PageOutcome::Dropped(e)),
    };
    let page = Url::parse(url)?;
    parse_game(&body, &page)
        .map(PageOutcome::Parsed)
        .map_err(|source| Error::Parse { url: s!(url), source })
}

/// Phase 1. Records come back in URL order; failed fetches leave no record.
pub async fn fetch_records<F: Fetch + ?Sized>(
    fetcher: &F,
    urls: &[String],
    batch_size: usize,
    progress: &mut dyn Progress,
    summary: &mut PipelineSummary,
) -> Result<Vec<GameRecord>> {
    progress.begin("pages", urls.len());
    let mut records = Vec::with_capacity(urls.len());

    for (i, batch) in urls.chunks(batch_size.max(1)).enumerate() {
        progress.batch(i, batch.len());
        let outcomes = join_all(batch.iter().map(|url| fetch_page(fetcher, url))).await;
        summary.batches += 1;

        for (url, outcome) in batch.iter().zip(outcomes) {
            match outcome {
                Ok(PageOutcome::Parsed(record)) => {
                    progress.item_done(url);
                    records.push(record);
                }
                Ok(PageOutcome::Dropped(e)) => {
                    warn!(url = %url, error = %e, "dropping page");
                    progress.item_failed(url, &e.to_string());
                    summary.dropped += 1;
                }
                Err(e) => {
                    progress.finish();
                    return Err(e);
                }
            }
        }
    }

    progress.finish();
    summary.records = records.len();
    Ok(records)
}

async fn resolve_site<'a, F: Fetch + ?Sized>(
    fetcher: &F,
    cache: &JamSiteCache,
    url: &'a str,
) -> SiteOutcome<'a> {
    if !cache.claim(url) {
        return SiteOutcome::Cached;
    }

    let country = match fetcher.get(url).await {
        Ok(body) => parse_country(&body).map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    match country {
        Ok(country) => {
            debug!(url, country = %country, "jam site resolved");
            cache.complete(url, Some(country));
            SiteOutcome::Resolved(url)
        }
        Err(reason) => {
            warn!(url, reason = %reason, "jam site unresolved");
            cache.complete(url, None);
            SiteOutcome::Failed(url, reason)
        }
    }
}

/// Phase 2. Fills `cache`; records are not touched.
pub async fn resolve_countries<F: Fetch + ?Sized>(
    fetcher: &F,
    records: &[GameRecord],
    cache: &JamSiteCache,
    batch_size: usize,
    progress: &mut dyn Progress,
    summary: &mut PipelineSummary,
) {
    progress.begin("sites", records.len());

    for (i, batch) in records.chunks(batch_size.max(1)).enumerate() {
        progress.batch(i, batch.len());
        let tasks = batch.iter().filter_map(|rec| {
            let url = rec.jam_site_url();
            if url.is_none() {
                debug!(site = ?rec.text(fields::JAM_SITE), "record has no jam site url");
            }
            url.map(|url| resolve_site(fetcher, cache, url))
        });
        let outcomes = join_all(tasks).await;
        summary.site_batches += 1;

        for outcome in outcomes {
            match outcome {
                SiteOutcome::Cached => {}
                SiteOutcome::Resolved(url) => {
                    summary.site_fetches += 1;
                    summary.sites_resolved += 1;
                    progress.item_done(url);
                }
                SiteOutcome::Failed(url, reason) => {
                    summary.site_fetches += 1;
                    summary.sites_failed += 1;
                    progress.item_failed(url, &reason);
                }
            }
        }
    }

    progress.finish();
}

/// Append `jam_site_country` to every record whose site resolved.
pub fn merge_countries(records: &mut [GameRecord], cache: &JamSiteCache) {
    for rec in records.iter_mut() {
        let Some(url) = rec.jam_site_url().map(String::from) else { continue };
        match cache.state(&url) {
            Some(SiteState::Resolved(country)) => rec.insert(fields::JAM_SITE_COUNTRY, country),
            Some(SiteState::InProgress) => error!(url = %url, "jam site still in progress at merge"),
            Some(SiteState::Failed) | None => {}
        }
    }
}

/// Both phases plus the merge.
pub async fn run<F: Fetch + ?Sized>(
    fetcher: &F,
    urls: &[String],
    opts: &PipelineOptions,
    cache: &JamSiteCache,
    progress: &mut dyn Progress,
) -> Result<PipelineRun> {
    opts.validate()?;
    let mut summary = PipelineSummary { urls: urls.len(), ..Default::default() };

    let mut records = fetch_records(fetcher, urls, opts.batch_size, progress, &mut summary).await?;
    resolve_countries(fetcher, &records, cache, opts.batch_size, progress, &mut summary).await;
    merge_countries(&mut records, cache);

    info!(
        urls = summary.urls,
        records = summary.records,
        dropped = summary.dropped,
        sites_resolved = summary.sites_resolved,
        sites_failed = summary.sites_failed,
        "pipeline finished"
    );
    Ok(PipelineRun { records, summary })
}
