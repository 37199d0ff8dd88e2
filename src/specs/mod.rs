// src/specs/mod.rs
//! # Page readers
//!
//! One module per page type on globalgamejam.org. Each reader encodes *where
//! the data lives in the HTML* and *how to shape it*, and nothing else.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-fetched bodies (`&str` in, values out).
//! - **Selector choice** (`div.l-content--inner div.item-list`, `article div.field`,
//!   `div.jam-site-address div`).
//! - **Field rules** for submission pages: label → record fields.
//!
//! ## What does **not** live here
//! - **Networking.** Bodies come from `core::net::Fetch` in the scrape layer.
//! - **Batching, caching, merging.** `scrape::pipeline` decides when pages are
//!   fetched and how jam-site countries flow back into records.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::collect_urls  → specs::listing::parse_listing
//!        → scrape::pipeline::run → specs::game::parse_game
//!                                → specs::jam_site::parse_country
//! ```
//!
//! ## Conventions
//! - Readers return `ParseError` for structural surprises; callers decide
//!   whether that is fatal.
//! - Readers are testable offline against inline fixtures.
pub mod game;
pub mod jam_site;
pub mod listing;
