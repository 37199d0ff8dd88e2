// src/specs/listing.rs
//! Games listing: `/{year}/games?…&page=N`.
//!
//! Each page carries its submissions as anchors inside
//! `div.l-content--inner div.item-list`. Past the last page the item list
//! is simply missing, which is how pagination ends.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::config::consts::LISTING_QUERY;
use crate::core::html::selector;

static ITEM_LIST: LazyLock<Selector> =
    LazyLock::new(|| selector("div.l-content--inner div.item-list"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));

/// `base` with a trailing slash, so relative joins keep any path prefix.
fn site_root(base: &Url) -> Url {
    let mut root = base.clone();
    if !root.path().ends_with('/') {
        let path = join!(root.path(), "/");
        root.set_path(&path);
    }
    root
}

/// Absolute URL of listing page `page` (0-based) for `year`.
pub fn listing_url(base: &Url, year: i32, page: u32) -> Result<Url, url::ParseError> {
    site_root(base).join(&format!("{year}/games?{LISTING_QUERY}&page={page}"))
}

/// Submission link from a listing page as an absolute URL.
/// Site-absolute paths (`/2020/games/x`) land under `base`, path prefix included.
pub fn resolve_href(base: &Url, href: &str) -> Result<Url, url::ParseError> {
    let root = site_root(base);
    match href.strip_prefix('/') {
        Some(path) if !path.starts_with('/') => root.join(&join!("./", path)),
        _ => root.join(href),
    }
}

/// Submission links on one listing page, in document order.
/// `None` when the page has no item list (past the last page).
pub fn parse_listing(doc: &str) -> Option<Vec<String>> {
    let html = Html::parse_document(doc);
    let list = html.select(&ITEM_LIST).next()?;
    let hrefs = list
        .select(&ANCHOR)
        .filter_map(|a| a.value().attr("href"))
        .map(|href| s!(href.trim()))
        .collect();
    Some(hrefs)
}
