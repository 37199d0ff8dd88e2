// src/specs/game.rs
//! Submission page: `/{year}/games/{slug}`.
//!
//! Fields live in `article div.field` blocks:
//! ```text
//! <div class="field">
//!   <div class="field__label">Jam Site:</div>      (absent for the description)
//!   <div class="field__items">
//!     <div class="field__item">…</div>             (one per value)
//!   </div>
//! </div>
//! ```
//! The label picks a [`Rule`]; the rule turns the block's items into zero or
//! more record fields. Administrative blocks (downloads, stills, embeds…)
//! are dropped; labels we have never seen are logged and dropped.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::warn;
use url::Url;

use crate::core::html::{first_child_element, first_child_text, has_content, inner_markup, selector, text_of};
use crate::core::sanitize::{normalize_label, split_list};
use crate::data::{fields, GameRecord};
use crate::error::ParseError;

static ARTICLE: LazyLock<Selector> = LazyLock::new(|| selector("article"));
static FIELD: LazyLock<Selector> = LazyLock::new(|| selector("div.field"));
static FIELD_LABEL: LazyLock<Selector> = LazyLock::new(|| selector("div.field__label"));
static FIELD_ITEMS: LazyLock<Selector> = LazyLock::new(|| selector("div.field__items"));
static FIELD_ITEM: LazyLock<Selector> = LazyLock::new(|| selector("div.field__item"));

/// How one labeled block becomes record fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// First item's inner markup.
    Markup,
    /// First item's link: text → `jam_site`, href → `jam_site_url`.
    JamSite,
    /// First item's text as an integer.
    Integer,
    /// Every item's text, in order.
    ItemTexts,
    /// First item's text, split on commas outside parentheses.
    SplitText,
    /// First item's inner markup, split on commas outside parentheses.
    SplitMarkup,
    /// Known block that carries nothing we keep.
    Ignore,
}

const RULES: &[(&str, Rule)] = &[
    (fields::DESCRIPTION, Rule::Markup),
    (fields::JAM_SITE, Rule::JamSite),
    (fields::JAM_YEAR, Rule::Integer),
    (fields::DIVERSIFIERS, Rule::ItemTexts),
    (fields::PLATFORMS, Rule::SplitText),
    (fields::TOOLS, Rule::SplitText),
    (fields::CREDITS, Rule::Markup),
    (fields::GAME_TAGS, Rule::SplitMarkup),
    ("executable", Rule::Ignore),
    ("source_files", Rule::Ignore),
    ("installation_instructions", Rule::Ignore),
    ("game_stills", Rule::Ignore),
    ("repository_link", Rule::Ignore),
    ("game_website", Rule::Ignore),
    ("technology_notes", Rule::Ignore),
    ("video_link", Rule::Ignore),
    ("download_link", Rule::Ignore),
    ("play_now!", Rule::Ignore),
    ("embed_code", Rule::Ignore),
];

impl Rule {
    /// `None` for labels with no rule at all.
    pub fn for_label(label: &str) -> Option<Rule> {
        RULES.iter().find(|(l, _)| *l == label).map(|(_, r)| *r)
    }

    fn apply(
        self,
        label: &str,
        items: &[ElementRef<'_>],
        page: &Url,
        record: &mut GameRecord,
    ) -> Result<(), ParseError> {
        let first = || items.first().copied().ok_or_else(|| ParseError::EmptyField(s!(label)));

        match self {
            Rule::Markup => record.insert(label, inner_markup(first()?)),
            Rule::JamSite => {
                let link = first_child_element(first()?).ok_or_else(|| bad(label, "no site link"))?;
                let href = link.value().attr("href").ok_or_else(|| bad(label, "site link has no href"))?;
                let url = page.join(href.trim()).map_err(|e| bad(label, &e.to_string()))?;
                record.insert(fields::JAM_SITE, text_of(link));
                record.insert(fields::JAM_SITE_URL, s!(url.as_str()));
            }
            Rule::Integer => {
                let raw = text_of(first()?);
                let n: i64 = raw.parse().map_err(|_| bad(label, &format!("not an integer: {raw:?}")))?;
                record.insert(label, n);
            }
            Rule::ItemTexts => record.insert(label, items.iter().map(|i| text_of(*i)).collect::<Vec<_>>()),
            Rule::SplitText => record.insert(label, split_list(&text_of(first()?))),
            Rule::SplitMarkup => record.insert(label, split_list(&inner_markup(first()?))),
            Rule::Ignore => {}
        }
        Ok(())
    }
}

fn bad(label: &str, reason: &str) -> ParseError {
    ParseError::BadValue { label: s!(label), reason: s!(reason) }
}

/// Block label, normalized. Unlabeled blocks are the description.
fn block_label(block: ElementRef<'_>) -> String {
    match block.select(&FIELD_LABEL).next() {
        Some(label) => normalize_label(&first_child_text(label).unwrap_or_default()),
        None => s!(fields::DESCRIPTION),
    }
}

/// Items of a block that have any content, in document order.
fn block_items(block: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    match block.select(&FIELD_ITEMS).next() {
        Some(items) => items.select(&FIELD_ITEM).filter(|i| has_content(*i)).collect(),
        None => Vec::new(),
    }
}

/// Read one submission page into a record.
/// `page` is the page's own URL; relative jam-site links resolve against it.
pub fn parse_game(doc: &str, page: &Url) -> Result<GameRecord, ParseError> {
    let html = Html::parse_document(doc);
    let article = html.select(&ARTICLE).next().ok_or(ParseError::MissingArticle)?;

    let mut record = GameRecord::new();
    for block in article.select(&FIELD) {
        let label = block_label(block);
        match Rule::for_label(&label) {
            Some(Rule::Ignore) => {}
            Some(rule) => rule.apply(&label, &block_items(block), page, &mut record)?,
            None => warn!(label = %label, url = %page, "unrecognized field label"),
        }
    }
    Ok(record)
}
