#![forbid(unsafe_code)]

pub mod ai;
pub mod app_services;
pub mod assistant;
pub mod error;
pub mod progress_service;

pub use ai::{
    ChatCompletionsClient, CompletionRequest, TextCompletion, TutorService, ai_settings_from_env,
};
pub use app_services::AppServices;
pub use assistant::{AssistantRequest, AssistantSession, AssistantState};
pub use error::{AiError, AppServicesError, ProgressError};
pub use progress_service::{PROGRESS_KEY, ProgressService};
