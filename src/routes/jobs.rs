use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use std::time::Instant;
use validator::Validate;

use crate::core::Matcher;
use crate::models::{
    ErrorResponse, HealthResponse, JobSnapshot, RefreshStats, UpdateJobsRequest,
};
use crate::services::{BoardSource, GreenhouseClient, JobStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub ingest: Arc<GreenhouseClient>,
    pub store: Arc<JobStore>,
    pub matcher: Matcher,
    pub sources: Arc<Vec<BoardSource>>,
}

/// Configure all job-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/jobs", web::get().to(get_jobs))
        .route("/jobs/update", web::post().to(update_jobs));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.load().await.is_ok();
    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Serve the last persisted snapshot
///
/// GET /api/jobs
///
/// Returns `{jobs: [], lastUpdated: null}` when no refresh cycle has run.
async fn get_jobs(state: web::Data<AppState>) -> impl Responder {
    match state.store.load().await {
        Ok(Some(snapshot)) => HttpResponse::Ok().json(snapshot),
        Ok(None) => HttpResponse::Ok().json(JobSnapshot::empty()),
        Err(e) => {
            tracing::error!("Error reading jobs snapshot: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to read jobs".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Run a refresh cycle
///
/// POST /api/jobs/update
///
/// Request body:
/// ```json
/// {
///   "preferences": {
///     "lookingFor": "distributed systems\nstaff engineer",
///     "notLookingFor": "frontend"
///   }
/// }
/// ```
///
/// Fetches every configured board, scores the postings against the supplied
/// preferences, persists the matched set and returns it with refresh stats.
async fn update_jobs(
    state: web::Data<AppState>,
    req: web::Json<UpdateJobsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for update_jobs request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let started = Instant::now();

    tracing::info!("Refreshing jobs from {} sources", state.sources.len());
    let postings = state.ingest.fetch_all(&state.sources).await;

    let outcome = state.matcher.match_postings(&req.preferences, postings);

    let snapshot = JobSnapshot {
        jobs: outcome.jobs,
        last_updated: Some(chrono::Utc::now()),
        cycle_id: Some(uuid::Uuid::new_v4()),
        stats: Some(RefreshStats {
            total_scraped: outcome.total_scraped,
            total_matched: outcome.total_matched,
            scraping_time_ms: started.elapsed().as_millis() as u64,
        }),
    };

    if let Err(e) = state.store.save(&snapshot).await {
        tracing::error!("Error persisting snapshot: {}", e);
        return HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Failed to update jobs".to_string(),
            message: e.to_string(),
            status_code: 500,
        });
    }

    tracing::info!(
        "Refresh cycle complete: {} matched of {} scraped in {}ms",
        outcome.total_matched,
        outcome.total_scraped,
        started.elapsed().as_millis()
    );

    HttpResponse::Ok().json(snapshot)
}
