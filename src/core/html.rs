// src/core/html.rs
//
// Small helpers over `scraper` element references. The page specs only
// ever need "first child", "all text" and "raw inner markup".

use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;

/// Parse a selector that is a compile-time constant.
pub fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid static selector {css:?}: {e}"))
}

/// Visible text of an element, whitespace-normalized.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Raw inner markup, trimmed.
pub fn inner_markup(el: ElementRef<'_>) -> String {
    el.inner_html().trim().to_string()
}

/// First child element, skipping text and comment nodes.
pub fn first_child_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.children().find_map(ElementRef::wrap)
}

/// Text of the first child node: a text node as-is, an element by its text.
pub fn first_child_text(el: ElementRef<'_>) -> Option<String> {
    let first = el.children().next()?;
    if let Some(text) = first.value().as_text() {
        return Some(String::from(&**text));
    }
    ElementRef::wrap(first).map(text_of)
}

/// True if the element has any child node at all (text included).
pub fn has_content(el: ElementRef<'_>) -> bool {
    el.children().next().is_some()
}
