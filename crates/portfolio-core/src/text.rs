//! Text helpers for card and modal content.

use crate::config::DEFAULT_DESCRIPTION_BUDGET;

/// Marker appended to a cut description.
pub const ELLIPSIS: &str = "...";

/// Shorten a description for a card.
///
/// Text of at most `budget` characters is returned unchanged. Longer text
/// is cut after `budget` characters (mid-word if need be), trailing
/// whitespace is trimmed and [`ELLIPSIS`] appended.
pub fn truncate(text: &str, budget: usize) -> String {
    match text.char_indices().nth(budget) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}{}", text[..cut].trim_end(), ELLIPSIS),
    }
}

/// [`truncate`] with the standard card budget.
pub fn truncate_description(text: &str) -> String {
    truncate(text, DEFAULT_DESCRIPTION_BUDGET)
}

/// Escape text so it reads literally inside HTML text or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
