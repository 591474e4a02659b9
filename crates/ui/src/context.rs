use std::sync::Arc;

use masterclass_core::model::{Catalog, CompletedSet, TopicId};
use services::{ProgressService, TutorService};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn progress(&self) -> Arc<ProgressService>;
    fn tutor(&self) -> Arc<TutorService>;

    /// Completed set loaded at startup.
    fn initial_completed(&self) -> CompletedSet;

    /// Lesson to open first; `None` or an unknown id opens the first lesson.
    fn initial_topic(&self) -> Option<TopicId> {
        None
    }
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    progress: Arc<ProgressService>,
    tutor: Arc<TutorService>,
    initial_completed: CompletedSet,
    initial_topic: Option<TopicId>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            progress: app.progress(),
            tutor: app.tutor(),
            initial_completed: app.initial_completed(),
            initial_topic: app.initial_topic(),
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

    #[must_use]
    pub fn initial_completed(&self) -> CompletedSet {
        self.initial_completed.clone()
    }

    #[must_use]
    pub fn initial_topic(&self) -> Option<&TopicId> {
        self.initial_topic.as_ref()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
