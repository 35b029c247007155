//! Text cleanup helpers for scraped markup

use scraper::{ElementRef, Node};

/// Trims and collapses internal whitespace runs to single spaces
pub fn clean_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cleaned text of an element and all its descendants
pub fn element_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<String>())
}

/// Cleaned text of the element's own text nodes, skipping nested elements
///
/// `<p>Arrow <span>Main</span></p>` yields `"Arrow"`.
pub fn direct_text(element: ElementRef<'_>) -> String {
    let raw: String = element
        .children()
        .filter_map(|child| match child.value() {
            Node::Text(text) => Some(&**text),
            _ => None,
        })
        .collect();
    clean_text(&raw)
}

/// Cleaned text of `element` with everything under `excluded` left out
pub fn text_excluding(element: ElementRef<'_>, excluded: ElementRef<'_>) -> String {
    let excluded_id = excluded.id();
    let raw: String = element
        .descendants()
        .filter(|node| node.id() != excluded_id && !node.ancestors().any(|a| a.id() == excluded_id))
        .filter_map(|node| node.value().as_text().map(|text| &**text))
        .collect();
    clean_text(&raw)
}

/// Splits a life skill level into its rank name and numeric value
///
/// A space is inserted before the first `marker` unless whitespace already
/// precedes it, then the text is split on the first whitespace. The marker
/// is stripped from the value. A missing second token yields an empty value.
///
/// # Example
///
/// ```
/// use bdo_profile::extract::split_level;
///
/// assert_eq!(split_level("Lv.Nv.12", "Nv."), ("Lv.".to_string(), "12".to_string()));
/// assert_eq!(split_level("Aprendiz", "Nv."), ("Aprendiz".to_string(), String::new()));
/// ```
pub fn split_level(raw: &str, marker: &str) -> (String, String) {
    let raw = raw.trim();

    let normalized = match raw.find(marker) {
        Some(idx) if idx > 0 && !raw[..idx].ends_with(char::is_whitespace) => {
            format!("{} {}", &raw[..idx], &raw[idx..])
        }
        _ => raw.to_string(),
    };

    // Marker at the very start: there is no rank name
    if normalized.starts_with(marker) {
        return (String::new(), strip_marker(&normalized, marker));
    }

    let mut tokens = normalized.splitn(2, char::is_whitespace);
    let level_name = tokens.next().unwrap_or_default().to_string();
    let level_value = tokens
        .next()
        .map(|rest| strip_marker(rest, marker))
        .unwrap_or_default();

    (level_name, level_value)
}

fn strip_marker(token: &str, marker: &str) -> String {
    let token = token.trim();
    token.strip_prefix(marker).unwrap_or(token).trim().to_string()
}
