pub mod completion;
pub mod tutor;

pub use completion::{
    ChatCompletionsClient, CompletionRequest, TextCompletion, ai_settings_from_env,
};
pub use tutor::{EXPLAIN_FALLBACK, REVIEW_FALLBACK, TutorService};
