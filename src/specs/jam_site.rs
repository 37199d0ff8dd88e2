// src/specs/jam_site.rs
//! Jam site page. The country is the first line of the postal address:
//! `div.jam-site-address > div` → first text node.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::core::html::{first_child_text, selector};
use crate::error::ParseError;

static ADDRESS_LINE: LazyLock<Selector> = LazyLock::new(|| selector("div.jam-site-address div"));

pub fn parse_country(doc: &str) -> Result<String, ParseError> {
    let html = Html::parse_document(doc);
    html.select(&ADDRESS_LINE)
        .next()
        .and_then(first_child_text)
        .map(|t| s!(t.trim()))
        .filter(|t| !t.is_empty())
        .ok_or(ParseError::MissingAddress)
}
