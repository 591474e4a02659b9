use std::sync::Arc;
use std::time::Duration;

use masterclass_core::model::AiSettings;

use crate::ai::completion::{ChatCompletionsClient, CompletionRequest, TextCompletion};
use crate::error::AiError;

pub const TUTOR_PERSONA: &str = "You are an expert C programming tutor who simplifies complex concepts for absolute beginners. Use clear language and brief code snippets if helpful.";
pub const DEBUGGER_PERSONA: &str = "You are a code debugger. Provide clear, step-by-step explanations of bugs and provide the corrected code snippet.";

pub const EXPLAIN_TEMPERATURE: f32 = 0.7;
pub const REVIEW_TEMPERATURE: f32 = 0.3;

pub const EXPLAIN_FALLBACK: &str =
    "I'm having trouble connecting to my brain right now. Please try again in a moment!";
pub const REVIEW_FALLBACK: &str = "Unable to analyze code at this time.";

/// Prompt construction and failure fallback around the completion endpoint.
///
/// Callers only ever get text back. Every failure, including a timeout, is
/// logged and replaced by a fixed fallback string. An empty explanation
/// yields an empty string so the caller can word its own apology; an empty
/// review yields the review fallback.
#[derive(Clone)]
pub struct TutorService {
    backend: Arc<dyn TextCompletion>,
    model: String,
    timeout: Duration,
}

impl TutorService {
    #[must_use]
    pub fn new(backend: Arc<dyn TextCompletion>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            backend,
            model: model.into(),
            timeout,
        }
    }

    /// Build a tutor backed by the chat-completions client.
    #[must_use]
    pub fn from_settings(settings: &AiSettings) -> Self {
        if !settings.has_credential() {
            tracing::info!("no AI credential configured; tutor answers will use fallback text");
        }
        Self::new(
            Arc::new(ChatCompletionsClient::new(settings)),
            settings.model(),
            Duration::from_secs(settings.timeout_secs()),
        )
    }

    /// Explain a topic, optionally answering a specific question about it.
    pub async fn explain(&self, topic_title: &str, question: Option<&str>) -> String {
        let prompt = explain_prompt(topic_title, question);
        let reply = Replies {
            fallback: EXPLAIN_FALLBACK,
            empty: "",
        };
        self.generate_or(prompt, TUTOR_PERSONA, EXPLAIN_TEMPERATURE, reply)
            .await
    }

    /// Review a C snippet and suggest a fix.
    pub async fn review_code(&self, code: &str) -> String {
        let prompt = review_prompt(code);
        let reply = Replies {
            fallback: REVIEW_FALLBACK,
            empty: REVIEW_FALLBACK,
        };
        self.generate_or(prompt, DEBUGGER_PERSONA, REVIEW_TEMPERATURE, reply)
            .await
    }

    async fn generate_or(
        &self,
        prompt: String,
        system_instruction: &str,
        temperature: f32,
        reply: Replies,
    ) -> String {
        let request = CompletionRequest {
            model: self.model.clone(),
            prompt,
            system_instruction: system_instruction.to_string(),
            temperature,
        };
        match self.generate(&request).await {
            Ok(text) => text,
            Err(AiError::EmptyResponse) => {
                tracing::warn!(model = %self.model, "completion endpoint returned no text");
                reply.empty.to_string()
            }
            Err(error) => {
                tracing::warn!(%error, model = %self.model, "completion request failed");
                reply.fallback.to_string()
            }
        }
    }

    async fn generate(&self, request: &CompletionRequest) -> Result<String, AiError> {
        tokio::time::timeout(self.timeout, self.backend.complete(request))
            .await
            .map_err(|_| AiError::Timeout {
                secs: self.timeout.as_secs(),
            })?
    }
}

/// Text substituted for a failed call and for an empty reply.
#[derive(Clone, Copy)]
struct Replies {
    fallback: &'static str,
    empty: &'static str,
}

/// A blank question is treated as no question.
#[must_use]
pub fn explain_prompt(topic_title: &str, question: Option<&str>) -> String {
    match question.map(str::trim).filter(|q| !q.is_empty()) {
        Some(question) => format!(
            "Explain the following C programming concept to a beginner: \"{topic_title}\". Specifically, answer this question: \"{question}\""
        ),
        None => format!(
            "Explain the C programming concept \"{topic_title}\" in very simple, easy-to-understand terms. Use metaphors if possible. Keep it concise but helpful."
        ),
    }
}

#[must_use]
pub fn review_prompt(code: &str) -> String {
    format!(
        "Review this C code for errors and explain what is wrong and how to fix it:\n\n```c\n{code}\n```"
    )
}
