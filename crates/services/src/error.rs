//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors from the text-completion backend.
///
/// These never leave `TutorService`; they are logged and replaced by the
/// fallback text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AiError {
    #[error("no API key configured")]
    MissingCredential,
    #[error("completion endpoint returned an empty response")]
    EmptyResponse,
    #[error("completion request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("completion request timed out after {secs}s")]
    Timeout { secs: u64 },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `ProgressService` when callers ask for them explicitly.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("stored progress is malformed: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("progress could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
