use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::models::JobSnapshot;

/// Errors that can occur with snapshot persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

const SNAPSHOT_KEY: &str = "snapshot";

/// File-backed snapshot store with an in-memory cache tier.
///
/// Each refresh cycle overwrites the previous snapshot; reads between
/// refreshes are served from memory. Writes go to a temp file first and are
/// renamed into place so a crash mid-write never leaves a torn snapshot.
pub struct JobStore {
    data_file: PathBuf,
    cache: moka::future::Cache<&'static str, Arc<JobSnapshot>>,
}

impl JobStore {
    pub fn new(data_dir: impl Into<PathBuf>, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(1)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            data_file: data_dir.into().join("jobs.json"),
            cache,
        }
    }

    /// Load the last persisted snapshot, or `None` when no refresh cycle has
    /// run yet.
    pub async fn load(&self) -> Result<Option<JobSnapshot>, StoreError> {
        if let Some(snapshot) = self.cache.get(SNAPSHOT_KEY).await {
            tracing::trace!("Snapshot cache hit");
            return Ok(Some((*snapshot).clone()));
        }

        match tokio::fs::read(&self.data_file).await {
            Ok(bytes) => {
                let snapshot: JobSnapshot = serde_json::from_slice(&bytes)?;
                self.cache
                    .insert(SNAPSHOT_KEY, Arc::new(snapshot.clone()))
                    .await;
                Ok(Some(snapshot))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist a snapshot, replacing the previous cycle's result.
    pub async fn save(&self, snapshot: &JobSnapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.data_file.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_vec_pretty(snapshot)?;
        let tmp_file = self.data_file.with_extension("json.tmp");
        tokio::fs::write(&tmp_file, &json).await?;
        tokio::fs::rename(&tmp_file, &self.data_file).await?;

        self.cache
            .insert(SNAPSHOT_KEY, Arc::new(snapshot.clone()))
            .await;

        tracing::debug!("Persisted snapshot to {}", self.data_file.display());
        Ok(())
    }
}
