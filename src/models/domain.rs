use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One job listing record from any source.
///
/// Postings failing validation (missing id/title/url, malformed URL, title
/// shorter than 3 characters) are dropped at the ingestion boundary and
/// never scored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JobPosting {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub company: String,
    #[validate(length(min = 3))]
    pub title: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub snippet: String,
    #[validate(url)]
    pub url: String,
    #[serde(default = "default_posted")]
    pub posted: DateTime<Utc>,
}

fn default_posted() -> DateTime<Utc> {
    Utc::now()
}

/// The user's free-text description of desired/undesired job attributes.
///
/// Both fields are unstructured text, possibly multi-line bullet lists;
/// the feature extractor derives terms and phrases itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PreferenceSpec {
    #[validate(length(max = 20000))]
    #[serde(rename = "lookingFor", alias = "looking_for", default)]
    pub looking_for: String,
    #[validate(length(max = 20000))]
    #[serde(rename = "notLookingFor", alias = "not_looking_for", default)]
    pub not_looking_for: String,
}

/// Result of scoring one (posting, preferences) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: bool,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
}

impl MatchResult {
    /// A forced `matched=false, score=0` outcome, irrespective of other phases.
    pub fn disqualified() -> Self {
        Self {
            matched: false,
            match_score: 0.0,
        }
    }
}

/// A posting together with its match decision and normalized score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPosting {
    #[serde(flatten)]
    pub posting: JobPosting,
    pub matched: bool,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
}

/// Scoring policy: every phase weight, cap and threshold as a named field.
///
/// The normalization divisor is a fixed design constant, not the true sum of
/// possible positive contributions; normalized scores rarely approach 1.0.
#[derive(Debug, Clone, Copy)]
pub struct ScoringPolicy {
    /// Positive phrase found in the title.
    pub phrase_title: f64,
    /// Positive phrase found in team/location/snippet.
    pub phrase_other: f64,
    /// Positive term found in the title.
    pub term_title: f64,
    /// Positive term found in team/location/snippet.
    pub term_other: f64,
    /// Cap on the total term contribution (phrases are not capped).
    pub term_cap: f64,
    pub seniority_high: f64,
    pub seniority_medium: f64,
    pub seniority_low: f64,
    /// Per-category domain contribution, counted once per category.
    pub domain_category: f64,
    pub domain_cap: f64,
    pub role_type: f64,
    /// Per-term penalty for negative preference terms (uncapped).
    pub negative_term: f64,
    /// Per-category penalty for moderate negative categories.
    pub moderate_category: f64,
    pub location_bonus: f64,
    pub match_threshold: f64,
    pub score_divisor: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            phrase_title: 0.5,
            phrase_other: 0.25,
            term_title: 0.2,
            term_other: 0.1,
            term_cap: 0.5,
            seniority_high: 0.4,
            seniority_medium: 0.25,
            seniority_low: 0.1,
            domain_category: 0.08,
            domain_cap: 0.35,
            role_type: 0.15,
            negative_term: 0.3,
            moderate_category: 0.25,
            location_bonus: 0.05,
            match_threshold: 0.20,
            score_divisor: 2.0,
        }
    }
}

/// Counters for one refresh cycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RefreshStats {
    #[serde(rename = "totalScraped")]
    pub total_scraped: usize,
    #[serde(rename = "totalMatched")]
    pub total_matched: usize,
    #[serde(rename = "scrapingTimeMs")]
    pub scraping_time_ms: u64,
}

/// Persisted result of one refresh cycle: matched postings sorted by score
/// descending, plus cycle metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSnapshot {
    pub jobs: Vec<ScoredPosting>,
    #[serde(rename = "lastUpdated")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(rename = "cycleId", default)]
    pub cycle_id: Option<uuid::Uuid>,
    #[serde(default)]
    pub stats: Option<RefreshStats>,
}

impl JobSnapshot {
    /// The snapshot served before any refresh cycle has run.
    pub fn empty() -> Self {
        Self {
            jobs: vec![],
            last_updated: None,
            cycle_id: None,
            stats: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_posting() -> JobPosting {
        JobPosting {
            id: "acme-1".to_string(),
            company: "Acme".to_string(),
            title: "Software Engineer".to_string(),
            team: String::new(),
            location: String::new(),
            snippet: String::new(),
            url: "https://jobs.acme.test/1".to_string(),
            posted: Utc::now(),
        }
    }

    #[test]
    fn test_valid_posting_passes_validation() {
        assert!(valid_posting().validate().is_ok());
    }

    #[test]
    fn test_short_title_rejected() {
        let mut posting = valid_posting();
        posting.title = "QA".to_string();
        assert!(posting.validate().is_err());
    }

    #[test]
    fn test_malformed_url_rejected() {
        let mut posting = valid_posting();
        posting.url = "not a url".to_string();
        assert!(posting.validate().is_err());
    }

    #[test]
    fn test_missing_id_rejected() {
        let mut posting = valid_posting();
        posting.id = String::new();
        assert!(posting.validate().is_err());
    }

    #[test]
    fn test_default_policy_constants() {
        let policy = ScoringPolicy::default();
        assert_eq!(policy.phrase_title, 0.5);
        assert_eq!(policy.term_cap, 0.5);
        assert_eq!(policy.domain_cap, 0.35);
        assert_eq!(policy.match_threshold, 0.20);
        assert_eq!(policy.score_divisor, 2.0);
    }

    #[test]
    fn test_posting_deserializes_with_defaults() {
        let json = r#"{
            "id": "acme-2",
            "company": "Acme",
            "title": "Backend Engineer",
            "url": "https://jobs.acme.test/2"
        }"#;
        let posting: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(posting.team, "");
        assert_eq!(posting.location, "");
        assert_eq!(posting.snippet, "");
    }
}
