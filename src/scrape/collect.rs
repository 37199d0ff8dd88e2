// src/scrape/collect.rs
use tracing::{debug, info, warn};
use url::Url;

use crate::config::options::CollectOptions;
use crate::core::net::Fetch;
use crate::error::Result;
use crate::progress::Progress;
use crate::specs::listing::{listing_url, parse_listing, resolve_href};

/// Walk listing pages 0, 1, 2, … until one has no item list.
/// Returns absolute submission URLs in page order, duplicates kept.
/// Any failed listing request aborts the walk; an unusable href is skipped.
pub async fn collect_urls<F: Fetch + ?Sized>(
    fetcher: &F,
    opts: &CollectOptions,
    progress: &mut dyn Progress,
) -> Result<Vec<String>> {
    let base = Url::parse(&opts.base_url)?;
    let mut urls = Vec::new();
    progress.begin("listing", 0);

    let mut page = 0u32;
    loop {
        let url = listing_url(&base, opts.year, page)?;
        let body = match fetcher.get(url.as_str()).await {
            Ok(body) => body,
            Err(e) => {
                progress.item_failed(url.as_str(), &e.to_string());
                progress.finish();
                return Err(e.into());
            }
        };

        let Some(hrefs) = parse_listing(&body) else {
            debug!(page, "no item list; end of listing");
            break;
        };

        debug!(page, found = hrefs.len(), "listing page");
        for href in &hrefs {
            match resolve_href(&base, href) {
                Ok(url) => urls.push(s!(url.as_str())),
                Err(e) => warn!(page, href = %href, error = %e, "skipping unusable link"),
            }
        }
        progress.item_done(url.as_str());
        page += 1;
    }

    progress.finish();
    info!(year = opts.year, pages = page, urls = urls.len(), "collected submission urls");
    Ok(urls)
}
