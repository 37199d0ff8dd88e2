// src/analysis/mod.rs
//
// Aggregate tables over annotated records.
//
// Every record becomes a `GameFacts` first (id = position in the input,
// known engines and tags deduplicated); the tables are plain counts over
// those facts, one `DataSet` each.

pub mod countries;
pub mod engines;

use indexmap::IndexSet;
use tracing::info;

use crate::config::consts::ENGINES;
use crate::config::options::AnalyseOptions;
use crate::data::{fields, DataSet, GameRecord};

pub use countries::CountryCodes;

/// What the analysis needs from one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameFacts {
    pub id: usize,
    /// Known engines only, first occurrence kept.
    pub engines: Vec<String>,
    pub tags: Vec<String>,
    pub country: Option<String>,
}

/// First occurrence wins.
fn dedup(items: impl IntoIterator<Item = String>) -> Vec<String> {
    items.into_iter().collect::<IndexSet<String>>().into_iter().collect()
}

pub fn game_facts(records: &[GameRecord]) -> Vec<GameFacts> {
    records
        .iter()
        .enumerate()
        .map(|(id, rec)| GameFacts {
            id,
            engines: dedup(
                rec.list(fields::TOOLS)
                    .iter()
                    .filter(|t| ENGINES.contains(&t.as_str()))
                    .cloned(),
            ),
            tags: dedup(rec.list(fields::GAME_TAGS).iter().cloned()),
            country: rec.jam_site_country().map(String::from),
        })
        .collect()
}

/// `n / total` with four decimals.
pub(crate) fn ratio(n: usize, total: usize) -> String {
    if total == 0 {
        return s!("0");
    }
    format!("{:.4}", n as f64 / total as f64)
}

/// Named tables, in output order.
#[derive(Debug, Default)]
pub struct Analysis {
    pub tables: Vec<(&'static str, DataSet)>,
}

pub fn analyse(records: &[GameRecord], codes: Option<&CountryCodes>, opts: &AnalyseOptions) -> Analysis {
    let facts = game_facts(records);
    let counts = engines::engine_counts(&facts, opts.min_games);

    let tables = vec![
        ("engines", engines::engines_table(&counts)),
        ("engine_dimensions", engines::engine_dimensions(&facts, &counts)),
        ("engine_tags", engines::engine_tags(&facts, &counts)),
        ("country_engines", countries::country_engines(&facts, codes, opts.min_country_entries)),
    ];

    info!(games = facts.len(), tables = tables.len(), "analysis done");
    Analysis { tables }
}
