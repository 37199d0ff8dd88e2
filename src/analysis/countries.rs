// src/analysis/countries.rs
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use tracing::warn;

use super::{ratio, GameFacts};
use crate::config::consts::TERRITORY_REMAP;
use crate::csv::parse_rows;
use crate::data::DataSet;
use crate::error::{Error, Result};

/// Country name → ISO alpha-3 code, read from a `name,code` file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountryCodes {
    by_name: HashMap<String, String>,
}

impl CountryCodes {
    /// Rows with fewer than two cells are skipped, as is a `name,code` header.
    pub fn parse(text: &str) -> Self {
        let by_name = parse_rows(text, ',')
            .into_iter()
            .filter(|row| row.len() >= 2)
            .filter(|row| !(row[0].eq_ignore_ascii_case("name") && row[1].eq_ignore_ascii_case("code")))
            .map(|row| (s!(row[0].trim()), s!(row[1].trim())))
            .collect();
        Self { by_name }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::parse(&text))
    }

    pub fn code(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize { self.by_name.len() }
    pub fn is_empty(&self) -> bool { self.by_name.is_empty() }
}

/// Small territories are drawn as part of a neighbour.
pub fn remap_territory(code: &str) -> &str {
    TERRITORY_REMAP
        .iter()
        .find(|(from, _)| *from == code)
        .map_or(code, |&(_, to)| to)
}

/// `Country, <engines…>`: share of each engine among a country's
/// (game, engine) pairs. Countries need more than `min_entries` pairs.
/// Without a code table the country name is its own key.
pub fn country_engines(facts: &[GameFacts], codes: Option<&CountryCodes>, min_entries: usize) -> DataSet {
    let mut by_country: BTreeMap<String, BTreeMap<&str, usize>> = BTreeMap::new();
    let mut unmapped: BTreeSet<&str> = BTreeSet::new();

    for game in facts {
        let Some(country) = game.country.as_deref() else { continue };
        if game.engines.is_empty() {
            continue;
        }
        let code = match codes {
            Some(codes) => match codes.code(country) {
                Some(code) => s!(remap_territory(code)),
                None => {
                    unmapped.insert(country);
                    continue;
                }
            },
            None => s!(country),
        };
        let engines = by_country.entry(code).or_default();
        for engine in &game.engines {
            *engines.entry(engine.as_str()).or_default() += 1;
        }
    }

    for country in &unmapped {
        warn!(country, "no country code; skipped");
    }

    by_country.retain(|_, engines| engines.values().sum::<usize>() > min_entries);

    let all_engines: BTreeSet<&str> = by_country.values().flat_map(|e| e.keys().copied()).collect();
    let mut headers = vec![s!("Country")];
    headers.extend(all_engines.iter().map(|e| s!(*e)));
    let mut table = DataSet::new(headers);

    for (country, engines) in &by_country {
        let total: usize = engines.values().sum();
        let mut row = vec![country.clone()];
        row.extend(all_engines.iter().map(|e| ratio(engines.get(e).copied().unwrap_or(0), total)));
        table.rows.push(row);
    }
    table
}
