// src/scrape/sites.rs
//
// Jam-site URL → country, shared by every resolution task of a run.
// A URL is claimed once: the first task to see it inserts `InProgress` and
// does the fetch, every later task sees an entry and walks away.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SiteState {
    InProgress,
    Resolved(String),
    Failed,
}

#[derive(Debug, Default)]
pub struct JamSiteCache {
    sites: Mutex<HashMap<String, SiteState>>,
}

impl JamSiteCache {
    pub fn new() -> Self { Self::default() }

    /// Cache seeded with already-known countries.
    pub fn with_resolved<I, K, V>(known: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let sites = known
            .into_iter()
            .map(|(url, country)| (url.into(), SiteState::Resolved(country.into())))
            .collect();
        Self { sites: Mutex::new(sites) }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, SiteState>> {
        self.sites.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Claim `url` for fetching. `true` only for the first caller.
    pub fn claim(&self, url: &str) -> bool {
        let mut sites = self.lock();
        if sites.contains_key(url) {
            return false;
        }
        sites.insert(s!(url), SiteState::InProgress);
        true
    }

    /// Record the outcome of a claimed fetch. `None` marks the site failed.
    pub fn complete(&self, url: &str, country: Option<String>) {
        let state = match country {
            Some(c) => SiteState::Resolved(c),
            None => SiteState::Failed,
        };
        self.lock().insert(s!(url), state);
    }

    pub fn state(&self, url: &str) -> Option<SiteState> {
        self.lock().get(url).cloned()
    }

    pub fn country(&self, url: &str) -> Option<String> {
        match self.state(url) {
            Some(SiteState::Resolved(c)) => Some(c),
            _ => None,
        }
    }

    pub fn len(&self) -> usize { self.lock().len() }
    pub fn is_empty(&self) -> bool { self.lock().is_empty() }
}
