//! Scoring engine: produces a match decision and normalized relevance score
//! for one (posting, preferences) pair.
//!
//! Pure and deterministic: no I/O, no shared mutable state, fixed keyword
//! tables, ordered iteration. Safe to call concurrently across postings.

use std::collections::HashSet;

use crate::core::keywords::{
    DOMAIN_CATEGORIES, LOCATION_BONUS, MODERATE_NEGATIVE_CATEGORIES, ROLE_TYPES, SENIORITY_HIGH,
    SENIORITY_LOW, SENIORITY_MEDIUM, STRONG_NEGATIVES,
};
use crate::core::text::{extract_key_terms, extract_phrases, normalize_text};
use crate::models::{JobPosting, MatchResult, PreferenceSpec, ScoringPolicy};

#[inline]
fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Score one posting against the user's preferences.
///
/// Phases run in order: user positive preference, user negative preference
/// (negative phrase match disqualifies immediately), seniority, technical
/// domain, role-type validation, strong negative filter (disqualifies
/// immediately), moderate negative filter, location bonus, normalization
/// and the final three-way decision.
pub fn score_posting(
    posting: &JobPosting,
    preferences: &PreferenceSpec,
    policy: &ScoringPolicy,
) -> MatchResult {
    let title_text = normalize_text(&posting.title);
    let team_text = normalize_text(&posting.team);
    let other_text = format!(
        "{} {} {}",
        team_text,
        normalize_text(&posting.location),
        normalize_text(&posting.snippet)
    );
    let full_text = format!("{} {}", title_text, other_text);

    let mut score = 0.0;

    // User positive preference. A phrase scores at most once, preferring the
    // title-weighted branch; terms already covered by a matched phrase are
    // skipped, and the total term contribution is capped.
    if !preferences.looking_for.trim().is_empty() {
        let phrases = extract_phrases(&preferences.looking_for);
        let terms = extract_key_terms(&preferences.looking_for);

        let mut seen_phrases = HashSet::new();
        let mut matched_phrases: Vec<String> = Vec::new();
        for phrase in phrases {
            if !seen_phrases.insert(phrase.clone()) {
                continue;
            }
            if title_text.contains(&phrase) {
                score += policy.phrase_title;
                matched_phrases.push(phrase);
            } else if other_text.contains(&phrase) {
                score += policy.phrase_other;
                matched_phrases.push(phrase);
            }
        }

        let mut term_score = 0.0;
        for term in &terms {
            if matched_phrases.iter().any(|phrase| phrase.contains(term.as_str())) {
                continue;
            }
            if title_text.contains(term.as_str()) {
                term_score += policy.term_title;
            } else if other_text.contains(term.as_str()) {
                term_score += policy.term_other;
            }
        }
        score += term_score.min(policy.term_cap);
    }

    // User negative preference. Any negative phrase found anywhere in the
    // posting text disqualifies immediately; surviving negative terms each
    // subtract, uncapped (clamped during normalization).
    if !preferences.not_looking_for.trim().is_empty() {
        let phrases = extract_phrases(&preferences.not_looking_for);
        let terms = extract_key_terms(&preferences.not_looking_for);

        let mut seen_phrases = HashSet::new();
        for phrase in phrases {
            if !seen_phrases.insert(phrase.clone()) {
                continue;
            }
            if full_text.contains(&phrase) {
                return MatchResult::disqualified();
            }
        }

        for term in &terms {
            if full_text.contains(term.as_str()) {
                score -= policy.negative_term;
            }
        }
    }

    // Seniority signal, title only. Only the highest matching tier counts.
    if contains_any(&title_text, SENIORITY_HIGH) {
        score += policy.seniority_high;
    } else if contains_any(&title_text, SENIORITY_MEDIUM) {
        score += policy.seniority_medium;
    } else if contains_any(&title_text, SENIORITY_LOW) {
        score += policy.seniority_low;
    }

    // Technical domain signal, full text. Each category counts at most once.
    let mut domain_score = 0.0;
    for category in DOMAIN_CATEGORIES {
        if contains_any(&full_text, category.keywords) {
            domain_score += policy.domain_category;
        }
    }
    score += domain_score.min(policy.domain_cap);

    // Role-type validation, title only. The flag gates the final decision.
    let has_role_type = contains_any(&title_text, ROLE_TYPES);
    if has_role_type {
        score += policy.role_type;
    }

    // Strong negative filter, title or team.
    if contains_any(&title_text, STRONG_NEGATIVES) || contains_any(&team_text, STRONG_NEGATIVES) {
        return MatchResult::disqualified();
    }

    // Moderate negative filter, full text, once per category.
    for category in MODERATE_NEGATIVE_CATEGORIES {
        if contains_any(&full_text, category.keywords) {
            score -= policy.moderate_category;
        }
    }

    // Location bonus, location field only, at most once.
    if contains_any(&normalize_text(&posting.location), LOCATION_BONUS) {
        score += policy.location_bonus;
    }

    let normalized = (score / policy.score_divisor).clamp(0.0, 1.0);
    let matched = normalized >= policy.match_threshold && has_role_type && score > 0.0;

    MatchResult {
        matched,
        match_score: normalized,
    }
}
