// src/analysis/engines.rs
use std::collections::{BTreeMap, BTreeSet};

use super::{ratio, GameFacts};
use crate::config::consts::{DIMENSIONS, OTHERS};
use crate::data::DataSet;

/// Games per engine group. Engines under the threshold are summed into `Others`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineCounts {
    groups: BTreeMap<String, usize>,
}

impl EngineCounts {
    /// Group an engine reports under: itself if it has its own row, else `Others`.
    pub fn group_of<'a>(&self, engine: &'a str) -> &'a str {
        if engine != OTHERS && self.groups.contains_key(engine) { engine } else { OTHERS }
    }

    pub fn get(&self, group: &str) -> Option<usize> {
        self.groups.get(group).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.groups.iter().map(|(g, n)| (g.as_str(), *n))
    }
}

pub fn engine_counts(facts: &[GameFacts], min_games: usize) -> EngineCounts {
    let mut per_engine: BTreeMap<&str, usize> = BTreeMap::new();
    for game in facts {
        for engine in &game.engines {
            *per_engine.entry(engine.as_str()).or_default() += 1;
        }
    }

    let mut groups: BTreeMap<String, usize> = BTreeMap::new();
    for (engine, n) in per_engine {
        let group = if n < min_games { OTHERS } else { engine };
        *groups.entry(s!(group)).or_default() += n;
    }
    EngineCounts { groups }
}

/// `Game engine, Number of games`
pub fn engines_table(counts: &EngineCounts) -> DataSet {
    let mut table = DataSet::new(vec![s!("Game engine"), s!("Number of games")]);
    table.rows = counts.iter().map(|(g, n)| vec![s!(g), n.to_string()]).collect();
    table
}

/// `Game engine, 2D, 2.5D, 3D`: share of each dimension tag among the
/// group's (game, dimension) pairs.
pub fn engine_dimensions(facts: &[GameFacts], counts: &EngineCounts) -> DataSet {
    let mut by_group: BTreeMap<&str, [usize; 3]> = BTreeMap::new();
    for game in facts {
        for engine in &game.engines {
            let group = counts.group_of(engine);
            for tag in &game.tags {
                if let Some(i) = DIMENSIONS.iter().position(|d| *d == tag.as_str()) {
                    by_group.entry(group).or_default()[i] += 1;
                }
            }
        }
    }

    let mut headers = vec![s!("Game engine")];
    headers.extend(DIMENSIONS.iter().map(|d| s!(*d)));
    let mut table = DataSet::new(headers);

    for (group, dims) in by_group {
        let total: usize = dims.iter().sum();
        let mut row = vec![s!(group)];
        row.extend(dims.iter().map(|n| ratio(*n, total)));
        table.rows.push(row);
    }
    table
}

/// `Game engine, <tags…>`: games per non-dimension tag, per group.
pub fn engine_tags(facts: &[GameFacts], counts: &EngineCounts) -> DataSet {
    let mut by_group: BTreeMap<&str, BTreeMap<&str, usize>> = BTreeMap::new();
    let mut all_tags: BTreeSet<&str> = BTreeSet::new();

    for game in facts {
        for engine in &game.engines {
            let group = counts.group_of(engine);
            for tag in game.tags.iter().filter(|t| !DIMENSIONS.contains(&t.as_str())) {
                *by_group.entry(group).or_default().entry(tag.as_str()).or_default() += 1;
                all_tags.insert(tag.as_str());
            }
        }
    }

    let mut headers = vec![s!("Game engine")];
    headers.extend(all_tags.iter().map(|t| s!(*t)));
    let mut table = DataSet::new(headers);

    for (group, tags) in by_group {
        let mut row = vec![s!(group)];
        row.extend(all_tags.iter().map(|t| tags.get(t).copied().unwrap_or(0).to_string()));
        table.rows.push(row);
    }
    table
}
