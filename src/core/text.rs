//! Text feature extractor: turns raw posting and preference strings into
//! comparable lexical units.

use std::collections::BTreeSet;

use crate::core::keywords::STOP_WORDS;

/// Lowercase a field before any comparison. Applied uniformly to title,
/// team, location, snippet and preference text.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
}

/// Extract the set of key terms from free text.
///
/// Splits on whitespace and punctuation, then discards tokens of length <= 2
/// and stop words. Set semantics: repeated mention of a term has no extra
/// effect, and iteration order is deterministic.
pub fn extract_key_terms(text: &str) -> BTreeSet<String> {
    let normalized = normalize_text(text);
    normalized
        .split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .map(str::trim)
        .filter(|token| token.len() > 2 && !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Extract all contiguous 2-word and 3-word windows over the whitespace-split
/// tokens of the normalized text.
///
/// Tokens are not stop-word filtered: phrases are matched later by literal
/// substring search, so they must occur verbatim in the source text. The
/// returned list may contain duplicates; callers must not count an identical
/// phrase twice.
pub fn extract_phrases(text: &str) -> Vec<String> {
    let normalized = normalize_text(text);
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    let mut phrases = Vec::new();
    for size in 2..=3 {
        for window in tokens.windows(size) {
            phrases.push(window.join(" "));
        }
    }
    phrases
}
