use thiserror::Error;
use url::Url;

pub const DEFAULT_AI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_AI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the tutor's text-completion endpoint.
///
/// A missing API key is a valid state: every request then resolves to the
/// fallback text instead of failing the app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AiSettings {
    api_key: Option<String>,
    model: String,
    base_url: String,
    timeout_secs: u64,
}

#[derive(Clone, Debug, Default)]
pub struct AiSettingsDraft {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AiSettingsError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("timeout must be at least one second")]
    ZeroTimeout,
}

impl AiSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft, filling defaults for unset fields.
    ///
    /// # Errors
    ///
    /// Returns `AiSettingsError` if the base URL is present but invalid, or the
    /// timeout is zero.
    pub fn validate(self) -> Result<AiSettings, AiSettingsError> {
        let api_key = normalize_optional(self.api_key);
        let model = normalize_optional(self.model).unwrap_or_else(|| DEFAULT_AI_MODEL.into());
        let base_url =
            normalize_optional(self.base_url).unwrap_or_else(|| DEFAULT_AI_BASE_URL.into());
        let timeout_secs = self.timeout_secs.unwrap_or(DEFAULT_AI_TIMEOUT_SECS);

        if Url::parse(&base_url).is_err() {
            return Err(AiSettingsError::InvalidBaseUrl(base_url));
        }
        if timeout_secs == 0 {
            return Err(AiSettingsError::ZeroTimeout);
        }

        Ok(AiSettings {
            api_key,
            model,
            base_url,
            timeout_secs,
        })
    }
}

impl AiSettings {
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_AI_MODEL.into(),
            base_url: DEFAULT_AI_BASE_URL.into(),
            timeout_secs: DEFAULT_AI_TIMEOUT_SECS,
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_uses_defaults() {
        let settings = AiSettingsDraft::new().validate().unwrap();
        assert_eq!(settings, AiSettings::default());
        assert!(!settings.has_credential());
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let settings = AiSettingsDraft {
            api_key: Some("   ".into()),
            ..AiSettingsDraft::default()
        }
        .validate()
        .unwrap();
        assert_eq!(settings.api_key(), None);
    }

    #[test]
    fn rejects_invalid_base_url() {
        let err = AiSettingsDraft {
            base_url: Some("not a url".into()),
            ..AiSettingsDraft::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, AiSettingsError::InvalidBaseUrl("not a url".into()));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = AiSettingsDraft {
            timeout_secs: Some(0),
            ..AiSettingsDraft::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, AiSettingsError::ZeroTimeout);
    }
}
