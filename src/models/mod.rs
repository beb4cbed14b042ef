// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    JobPosting, JobSnapshot, MatchResult, PreferenceSpec, RefreshStats, ScoredPosting,
    ScoringPolicy,
};
pub use requests::UpdateJobsRequest;
pub use responses::{ErrorResponse, HealthResponse};
