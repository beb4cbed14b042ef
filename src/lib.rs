//! Job Radar - job aggregation and preference-matching service
//!
//! This library aggregates job postings from employer career sites and ranks
//! them against the user's free-text preferences. The core is a pure,
//! deterministic scoring engine over lexical features; ingestion and
//! persistence are thin adapters around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    extract_key_terms, extract_phrases, normalize_text, score_posting, MatchError, Matcher,
};
pub use crate::models::{
    JobPosting, JobSnapshot, MatchResult, PreferenceSpec, ScoredPosting, ScoringPolicy,
};
