use std::sync::Arc;

use masterclass_core::model::{AiSettings, Catalog};
use storage::repository::Storage;

use crate::ai::TutorService;
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;

/// Assembles app-facing services around one catalog and one storage backend.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<Catalog>,
    progress: Arc<ProgressService>,
    tutor: Arc<TutorService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the built-in curriculum.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, ai: &AiSettings) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_parts(
            Catalog::builtin(),
            &storage,
            TutorService::from_settings(ai),
        ))
    }

    /// Build services over in-memory storage. Progress is lost on exit.
    #[must_use]
    pub fn in_memory(ai: &AiSettings) -> Self {
        Self::from_parts(
            Catalog::builtin(),
            &Storage::in_memory(),
            TutorService::from_settings(ai),
        )
    }

    #[must_use]
    pub fn from_parts(catalog: Catalog, storage: &Storage, tutor: TutorService) -> Self {
        Self {
            catalog: Arc::new(catalog),
            progress: Arc::new(ProgressService::new(Arc::clone(&storage.kv))),
            tutor: Arc::new(tutor),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn tutor(&self) -> Arc<TutorService> {
        Arc::clone(&self.tutor)
    }
}
