// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use ggj_scrape::core::net::{Fetch, FetchError};

pub const BASE: &str = "https://globalgamejam.org";

/// In-memory site. Unknown URLs answer 404. Counts every request and the
/// highest number of requests in flight at once.
#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, Result<String, u16>>,
    hits: Mutex<HashMap<String, usize>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeSite {
    pub fn new() -> Self { Self::default() }

    pub fn page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), Ok(body.into()));
        self
    }

    pub fn status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.pages.insert(url.into(), Err(status));
        self
    }

    pub fn hits(&self, url: &str) -> usize {
        self.hits.lock().unwrap().get(url).copied().unwrap_or(0)
    }

    pub fn total_hits(&self) -> usize {
        self.hits.lock().unwrap().values().sum()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetch for FakeSite {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        *self.hits.lock().unwrap().entry(url.to_string()).or_default() += 1;
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        tokio::task::yield_now().await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        match self.pages.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(FetchError::Status { url: url.to_string(), status: *status }),
            None => Err(FetchError::Status { url: url.to_string(), status: 404 }),
        }
    }
}

pub fn game_url(i: usize) -> String {
    format!("{BASE}/2020/games/game-{i}")
}

pub fn site_url(slug: &str) -> String {
    format!("{BASE}/2020/jam-sites/{slug}")
}

fn field(label: &str, item: &str) -> String {
    format!(
        r#"<div class="field"><div class="field__label">{label}</div><div class="field__items"><div class="field__item">{item}</div></div></div>"#
    )
}

/// Submission page linking to `/2020/jam-sites/{site}` (relative link).
pub fn game_page(title: &str, site: &str, tools: &str, tags: &str) -> String {
    let blocks = [
        format!(r#"<div class="field"><div class="field__items"><div class="field__item"><p>{title}</p></div></div></div>"#),
        field("Jam Site:", &format!(r#"<a href="/2020/jam-sites/{site}">{site}</a>"#)),
        field("Jam Year:", "2020"),
        field("Tools and Technologies:", tools),
        field("Game Tags:", tags),
    ];
    format!("<html><body><article>{}</article></body></html>", blocks.concat())
}

pub fn site_page(country: &str) -> String {
    format!(
        r#"<html><body><div class="jam-site-address"><div class="country">{country}<span>City</span></div></div></body></html>"#
    )
}

pub fn listing_page(hrefs: &[&str]) -> String {
    let items: String = hrefs.iter().map(|h| format!(r#"<li><a href="{h}">x</a></li>"#)).collect();
    format!(r#"<html><body><div class="l-content--inner"><div class="item-list"><ul>{items}</ul></div></div></body></html>"#)
}

pub fn empty_listing() -> String {
    r#"<html><body><div class="l-content--inner"><p>No results</p></div></body></html>"#.to_string()
}
