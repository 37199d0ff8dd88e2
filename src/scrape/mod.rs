// src/scrape/mod.rs
mod collect;
pub mod pipeline;
pub mod sites;

pub use collect::collect_urls;
pub use pipeline::{PipelineRun, PipelineSummary};
pub use sites::{JamSiteCache, SiteState};
