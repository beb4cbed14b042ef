use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::PreferenceSpec;

/// Request to run a refresh cycle: fetch sources, score against the supplied
/// preferences, persist and return the snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateJobsRequest {
    #[validate(nested)]
    #[serde(default)]
    pub preferences: PreferenceSpec,
}
