use std::env;

use async_trait::async_trait;
use masterclass_core::model::{AiSettings, AiSettingsDraft, AiSettingsError};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::AiError;

/// One prompt for the text-completion endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub system_instruction: String,
    pub temperature: f32,
}

/// External text-completion endpoint.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Generate text for the request.
    ///
    /// # Errors
    ///
    /// Returns `AiError` for transport failures, non-success statuses,
    /// malformed or empty responses, and a missing credential.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, AiError>;
}

/// Read tutor settings from `MASTERCLASS_AI_*` environment variables.
///
/// # Errors
///
/// Returns `AiSettingsError` if the base URL or timeout is invalid.
pub fn ai_settings_from_env() -> Result<AiSettings, AiSettingsError> {
    AiSettingsDraft {
        api_key: env::var("MASTERCLASS_AI_API_KEY").ok(),
        model: env::var("MASTERCLASS_AI_MODEL").ok(),
        base_url: env::var("MASTERCLASS_AI_BASE_URL").ok(),
        timeout_secs: env::var("MASTERCLASS_AI_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok()),
    }
    .validate()
}

/// OpenAI-compatible `/chat/completions` backend.
#[derive(Clone)]
pub struct ChatCompletionsClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ChatCompletionsClient {
    #[must_use]
    pub fn new(settings: &AiSettings) -> Self {
        Self {
            client: Client::new(),
            base_url: settings.base_url().to_string(),
            api_key: settings.api_key().map(str::to_string),
        }
    }
}

#[async_trait]
impl TextCompletion for ChatCompletionsClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, AiError> {
        let api_key = self.api_key.as_ref().ok_or(AiError::MissingCredential)?;

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: request.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system_instruction.clone(),
                },
                ChatMessage {
                    role: "user",
                    content: request.prompt.clone(),
                },
            ],
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AiError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(AiError::EmptyResponse)?;

        Ok(content)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: "m".into(),
            prompt: "p".into(),
            system_instruction: "s".into(),
            temperature: 0.7,
        }
    }

    #[tokio::test]
    async fn missing_credential_fails_without_network() {
        let client = ChatCompletionsClient::new(&AiSettings::default());
        let err = client.complete(&request()).await.unwrap_err();
        assert!(matches!(err, AiError::MissingCredential));
    }

    #[test]
    fn request_payload_carries_system_and_user_messages() {
        let payload = ChatRequest {
            model: "gpt-4o-mini".into(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "tutor".into(),
                },
                ChatMessage {
                    role: "user",
                    content: "explain".into(),
                },
            ],
            temperature: 0.3,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "explain");
        assert_eq!(json["model"], "gpt-4o-mini");
    }

    #[test]
    fn response_without_content_parses() {
        let body: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert!(body.choices[0].message.content.is_none());
    }
}
