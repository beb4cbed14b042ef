use chrono::{DateTime, Utc};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use validator::Validate;

use crate::models::JobPosting;

/// Errors that can occur when fetching a job board.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("board returned error: {0}")]
    ApiError(String),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// One configured career-site board.
#[derive(Debug, Clone)]
pub struct BoardSource {
    pub company: String,
    pub board: String,
}

/// Greenhouse job boards client.
///
/// Fetches postings from the public boards API, normalizes them into
/// `JobPosting` records and drops malformed entries at the boundary.
pub struct GreenhouseClient {
    base_url: String,
    client: Client,
    per_source_limit: usize,
}

impl GreenhouseClient {
    pub fn new(base_url: String, per_source_limit: usize) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            client,
            per_source_limit,
        }
    }

    /// Fetch one board and map its postings.
    pub async fn fetch_board(&self, source: &BoardSource) -> Result<Vec<JobPosting>, IngestError> {
        let url = format!(
            "{}/v1/boards/{}/jobs",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&source.board)
        );

        tracing::debug!("Fetching board from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(IngestError::ApiError(format!(
                "board {} returned {}",
                source.board,
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let jobs = json
            .get("jobs")
            .and_then(|j| j.as_array())
            .ok_or_else(|| IngestError::InvalidResponse("missing jobs array".into()))?;

        let postings: Vec<JobPosting> = jobs
            .iter()
            .take(self.per_source_limit)
            .filter_map(|job| map_board_job(source, job))
            .collect();

        tracing::debug!(
            "Board {} yielded {} postings (raw: {})",
            source.board,
            postings.len(),
            jobs.len()
        );

        Ok(postings)
    }

    /// Fetch every configured board, tolerating per-source failure: a board
    /// that errors is logged and skipped, the rest still contribute.
    pub async fn fetch_all(&self, sources: &[BoardSource]) -> Vec<JobPosting> {
        let mut all = Vec::new();
        for source in sources {
            match self.fetch_board(source).await {
                Ok(postings) => {
                    tracing::info!("Fetched {} postings from {}", postings.len(), source.company);
                    all.extend(postings);
                }
                Err(e) => {
                    tracing::error!("Failed to fetch {}: {}", source.company, e);
                }
            }
        }
        all
    }
}

/// Map one Greenhouse board entry to a `JobPosting`, or drop it when the
/// record fails shape validation.
fn map_board_job(source: &BoardSource, job: &Value) -> Option<JobPosting> {
    let id = match job.get("id")? {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => return None,
    };
    let title = job.get("title")?.as_str()?.to_string();
    let url = job.get("absolute_url")?.as_str()?.to_string();

    let team = job
        .pointer("/departments/0/name")
        .and_then(|n| n.as_str())
        .unwrap_or_default()
        .to_string();
    let location = job
        .pointer("/location/name")
        .and_then(|n| n.as_str())
        .unwrap_or_default()
        .to_string();

    // Posting time defaults to extraction time when the board omits it.
    let posted = job
        .get("updated_at")
        .and_then(|u| u.as_str())
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);

    let posting = JobPosting {
        id: format!("{}-{}", source.board, id),
        company: source.company.clone(),
        title,
        team,
        location,
        snippet: String::new(),
        url,
        posted,
    };

    if let Err(e) = posting.validate() {
        tracing::debug!("Dropping malformed board entry {}: {}", posting.id, e);
        return None;
    }

    Some(posting)
}
