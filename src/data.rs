// src/data.rs
//
// Record types shared by the scrape and analysis layers.
//
// - GameRecord: one parsed submission page. Field order is the order the
//               page yielded them; `jam_site_country` is appended last,
//               once the jam site has been resolved.
// - DataSet:    headers + string rows; the shape of every analysis table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field names a record may carry.
pub mod fields {
    pub const DESCRIPTION: &str = "description";
    pub const JAM_SITE: &str = "jam_site";
    pub const JAM_SITE_URL: &str = "jam_site_url";
    pub const JAM_SITE_COUNTRY: &str = "jam_site_country";
    pub const JAM_YEAR: &str = "jam_year";
    pub const DIVERSIFIERS: &str = "diversifiers";
    pub const PLATFORMS: &str = "platforms";
    pub const TOOLS: &str = "tools_and_technologies";
    pub const CREDITS: &str = "credits";
    pub const GAME_TAGS: &str = "game_tags";
}

/// A single field value: text, integer or ordered list of strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(v) => Some(v),
            _ => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self { FieldValue::Text(s) }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self { FieldValue::Text(s!(s)) }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self { FieldValue::Int(n) }
}

impl From<Vec<String>> for FieldValue {
    fn from(v: Vec<String>) -> Self { FieldValue::List(v) }
}

/// One submission page worth of fields. Serializes as a flat JSON object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameRecord {
    fields: IndexMap<String, FieldValue>,
}

impl GameRecord {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> { self.fields.get(name) }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    /// List field, or an empty slice when absent.
    pub fn list(&self, name: &str) -> &[String] {
        self.get(name).and_then(FieldValue::as_list).unwrap_or(&[])
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    pub fn jam_site_url(&self) -> Option<&str> { self.text(fields::JAM_SITE_URL) }
    pub fn jam_site_country(&self) -> Option<&str> { self.text(fields::JAM_SITE_COUNTRY) }
}

/// Tabular output: headers plus rows of cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>) -> Self { Self { headers, rows: Vec::new() } }

    /// Cell lookup by row label (first column) and header name.
    pub fn cell(&self, row_label: &str, header: &str) -> Option<&str> {
        let col = self.headers.iter().position(|h| h == header)?;
        self.rows
            .iter()
            .find(|r| r.first().map(String::as_str) == Some(row_label))
            .and_then(|r| r.get(col))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_flat_in_insertion_order() {
        let mut rec = GameRecord::new();
        rec.insert(fields::JAM_YEAR, 2020_i64);
        rec.insert(fields::DESCRIPTION, "A game");
        rec.insert(fields::GAME_TAGS, vec![s!("2D"), s!("Puzzle")]);

        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, r#"{"jam_year":2020,"description":"A game","game_tags":["2D","Puzzle"]}"#);
    }

    #[test]
    fn record_reads_back_typed_values() {
        let json = r#"{"jam_year":2019,"jam_site_url":"https://x/site","platforms":["Web"]}"#;
        let rec: GameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.get(fields::JAM_YEAR).and_then(FieldValue::as_int), Some(2019));
        assert_eq!(rec.jam_site_url(), Some("https://x/site"));
        assert_eq!(rec.list(fields::PLATFORMS), ["Web"]);
        assert!(rec.list(fields::GAME_TAGS).is_empty());
        assert_eq!(rec.jam_site_country(), None);
    }

    #[test]
    fn dataset_cell_lookup() {
        let ds = DataSet {
            headers: vec![s!("Game engine"), s!("Number of games")],
            rows: vec![vec![s!("Godot Engine"), s!("12")]],
        };
        assert_eq!(ds.cell("Godot Engine", "Number of games"), Some("12"));
        assert_eq!(ds.cell("Unity", "Number of games"), None);
    }
}
