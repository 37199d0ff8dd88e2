// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

/// Runs of non-comma/non-paren characters, or whole `( … )` groups.
static LIST_PIECE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[^,(]|\([^)]*\))+").expect("list splitter regex"));

/// Collapse every whitespace run to one space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// "Tools and Technologies:" → "tools_and_technologies"
pub fn normalize_label(raw: &str) -> String {
    raw.trim()
        .trim_end_matches(':')
        .trim()
        .to_lowercase()
        .replace(' ', "_")
}

/// Split a comma list while keeping parenthesized groups whole.
/// "A, B (C, D), E" → ["A", "B (C, D)", "E"]. Empty pieces are dropped.
pub fn split_list(s: &str) -> Vec<String> {
    LIST_PIECE
        .find_iter(s)
        .map(|m| m.as_str().trim())
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_parenthesized_groups() {
        assert_eq!(split_list("A, B (C, D), E"), vec!["A", "B (C, D)", "E"]);
    }

    #[test]
    fn split_handles_engine_names_and_noise() {
        assert_eq!(
            split_list("Unity (any product), Game Salad (Mac desktop, iPhone, iPad),Blender"),
            vec!["Unity (any product)", "Game Salad (Mac desktop, iPhone, iPad)", "Blender"]
        );
        assert_eq!(split_list(" Web ,, PC , "), vec!["Web", "PC"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn label_normalization() {
        assert_eq!(normalize_label("  Tools and Technologies: "), "tools_and_technologies");
        assert_eq!(normalize_label("Jam Site:"), "jam_site");
        assert_eq!(normalize_label("Play Now!"), "play_now!");
        assert_eq!(normalize_label("Diversifiers"), "diversifiers");
    }

    #[test]
    fn whitespace_collapses() {
        assert_eq!(normalize_ws("  Paris\n\t  France "), "Paris France");
    }
}
