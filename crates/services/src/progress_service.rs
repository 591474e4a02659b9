use std::sync::Arc;

use masterclass_core::model::{CompletedSet, TopicId, toggle};
use storage::repository::KeyValueRepository;
use tokio::sync::Mutex;

use crate::error::ProgressError;

/// Storage key holding the serialized completed set.
pub const PROGRESS_KEY: &str = "c-masterclass-progress";

/// Loads, toggles and persists the learner's completed topics.
///
/// Storage is advisory: read failures load as an empty set and write failures
/// are logged, so the in-memory state always wins.
#[derive(Clone)]
pub struct ProgressService {
    store: Arc<dyn KeyValueRepository>,
    write_lock: Arc<Mutex<()>>,
}

impl ProgressService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueRepository>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load the completed set, treating absent or unreadable data as empty.
    pub async fn load(&self) -> CompletedSet {
        match self.try_load().await {
            Ok(set) => set,
            Err(error) => {
                tracing::warn!(%error, key = PROGRESS_KEY, "ignoring stored progress");
                CompletedSet::new()
            }
        }
    }

    /// Load the completed set, surfacing storage and parse failures.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the store cannot be read and
    /// `ProgressError::Malformed` if the stored value is not a JSON array of ids.
    pub async fn try_load(&self) -> Result<CompletedSet, ProgressError> {
        let Some(raw) = self.store.get(PROGRESS_KEY).await? else {
            return Ok(CompletedSet::new());
        };
        serde_json::from_str(&raw).map_err(ProgressError::Malformed)
    }

    /// Pure toggle; nothing is written.
    #[must_use]
    pub fn toggle(&self, id: &TopicId, set: &CompletedSet) -> CompletedSet {
        toggle(id, set)
    }

    /// Write the full set under `PROGRESS_KEY`. Failures are logged, not returned.
    pub async fn persist(&self, set: &CompletedSet) {
        if let Err(error) = self.try_persist(set).await {
            tracing::warn!(%error, key = PROGRESS_KEY, "failed to save progress");
        }
    }

    /// Write the full set under `PROGRESS_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Encode` if the set cannot be serialized and
    /// `ProgressError::Storage` if the write fails.
    pub async fn try_persist(&self, set: &CompletedSet) -> Result<(), ProgressError> {
        let encoded = serde_json::to_string(set).map_err(ProgressError::Encode)?;
        let _guard = self.write_lock.lock().await;
        self.store.set(PROGRESS_KEY, &encoded).await?;
        tracing::debug!(completed = set.len(), "saved progress");
        Ok(())
    }

    /// Toggle `id` and persist the result. The new set is returned even when
    /// the write fails.
    pub async fn toggle_and_persist(&self, id: &TopicId, set: &CompletedSet) -> CompletedSet {
        let next = self.toggle(id, set);
        self.persist(&next).await;
        next
    }
}
