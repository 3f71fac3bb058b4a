//! Fuzzy title scoring against search strings.
//!
//! Scores are normalized edit-distance similarity in `[0, 1]`, computed
//! case-insensitively. The multi-pass variants retry the comparison after
//! progressively aggressive sanitization of the candidate title so that
//! punctuation and spacing differences never sink an otherwise good match.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::titles::remove_non_search_characters;

static NON_ALPHA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z]+").expect("non-alpha pattern is valid")
});

fn similarity(a: &str, b: &str) -> f32 {
    strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase()) as f32
}

/// Best score for `match_title` against `search_title` over two passes: the
/// candidate as-is, and the candidate with non-search characters removed.
pub fn calculate_score(search_title: &str, match_title: &str) -> f32 {
    let score1 = similarity(search_title, match_title);
    let score2 = similarity(search_title, &remove_non_search_characters(match_title));
    score1.max(score2)
}

/// Best score over three passes: the two-pass score plus a comparison with
/// every non-letter character stripped from both sides.
///
/// The compressed pass is what lets a recording name like `csimiami` match
/// "CSI: Miami".
pub fn calculate_compressed_score(search_title: &str, match_title: &str) -> f32 {
    let score1 = calculate_score(search_title, match_title);

    let score2 = similarity(
        &NON_ALPHA.replace_all(search_title, ""),
        &NON_ALPHA.replace_all(match_title, ""),
    );
    score1.max(score2)
}
