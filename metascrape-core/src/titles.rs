//! Title sanitization and metadata-id helpers.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_BARE_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9']").expect("bare-title pattern is valid")
});

static NON_SEARCH_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9&']").expect("search-chars pattern is valid")
});

/// Split a `prefix:suffix` metadata id into its two parts.
///
/// Ids containing anything other than exactly one colon are returned whole as
/// a single element.
pub fn split_metadata_id(id: &str) -> Vec<&str> {
    match id.split_once(':') {
        Some((prefix, suffix)) if !suffix.contains(':') => vec![prefix, suffix],
        _ => vec![id],
    }
}

/// Replace every character outside `[A-Za-z0-9']` with a space, preserving
/// the string's length. No run collapsing.
pub fn bare_title(name: &str) -> String {
    NON_BARE_CHARS.replace_all(name, " ").into_owned()
}

/// Keep only characters useful for searching (`[A-Za-z0-9&']`), replacing the
/// rest with spaces and collapsing whitespace runs to a single space.
pub fn remove_non_search_characters(s: &str) -> String {
    NON_SEARCH_CHARS
        .replace_all(s, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
