use std::collections::HashSet;

use thiserror::Error;
use validator::Validate;

use crate::core::scoring::score_posting;
use crate::models::{JobPosting, MatchResult, PreferenceSpec, ScoredPosting, ScoringPolicy};

/// Errors produced at the scoring boundary.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid posting: {0}")]
    InvalidPosting(String),
}

/// Result of one matching pass over a batch of postings.
#[derive(Debug)]
pub struct MatchOutcome {
    /// Matched postings, sorted by score descending.
    pub jobs: Vec<ScoredPosting>,
    /// Postings handed in, before validation and deduplication.
    pub total_scraped: usize,
    pub total_matched: usize,
}

/// Matching orchestrator.
///
/// Holds the scoring policy and applies the boundary invariants around the
/// pure scoring function: malformed postings are dropped (never scored),
/// duplicates by id are collapsed, and results are ranked by score.
#[derive(Debug, Clone)]
pub struct Matcher {
    policy: ScoringPolicy,
}

impl Matcher {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn with_default_policy() -> Self {
        Self {
            policy: ScoringPolicy::default(),
        }
    }

    /// Score a single posting against the preferences.
    ///
    /// Fails fast with `MatchError::InvalidPosting` when handed a posting
    /// that should have been dropped at the boundary, rather than silently
    /// scoring garbage.
    pub fn score(
        &self,
        posting: &JobPosting,
        preferences: &PreferenceSpec,
    ) -> Result<MatchResult, MatchError> {
        posting
            .validate()
            .map_err(|e| MatchError::InvalidPosting(e.to_string()))?;
        Ok(score_posting(posting, preferences, &self.policy))
    }

    /// Score a batch of postings and keep the matched ones, sorted by score
    /// descending (ties broken by title for a stable presentation order).
    ///
    /// Every scoring call is independent and order-independent; malformed
    /// and duplicate postings are dropped before scoring.
    pub fn match_postings(
        &self,
        preferences: &PreferenceSpec,
        postings: Vec<JobPosting>,
    ) -> MatchOutcome {
        let total_scraped = postings.len();

        let mut seen_ids = HashSet::new();
        let mut jobs: Vec<ScoredPosting> = postings
            .into_iter()
            .filter(|posting| {
                if let Err(e) = posting.validate() {
                    tracing::debug!("Dropping malformed posting {:?}: {}", posting.id, e);
                    return false;
                }
                true
            })
            .filter(|posting| seen_ids.insert(posting.id.clone()))
            .filter_map(|posting| {
                let result = score_posting(&posting, preferences, &self.policy);
                if result.matched {
                    Some(ScoredPosting {
                        posting,
                        matched: result.matched,
                        match_score: result.match_score,
                    })
                } else {
                    None
                }
            })
            .collect();

        jobs.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.posting.title.cmp(&b.posting.title))
        });

        let total_matched = jobs.len();

        MatchOutcome {
            jobs,
            total_scraped,
            total_matched,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_policy()
    }
}
