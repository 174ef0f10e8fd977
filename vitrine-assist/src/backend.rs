// Vitrine Assistant Bridge - Backend Trait
// STORY-005: Generation backend framework
//
// Defines the GenerationBackend trait the chat session talks to. The wire
// is deliberately opaque: one prompt string in, one reply string out. No
// streaming, no token accounting.

use async_trait::async_trait;

use super::error::AssistResult;

/// Trait for external text-generation backends.
///
/// The real implementation calls the generative-language HTTP API; tests
/// use `MockBackend`. Backends fail gracefully: every error is surfaced as
/// an `AssistError` and ends up as a transcript entry, never a crash.
///
/// # Example
///
/// ```ignore
/// use crate::{BackendConfig, GeminiBackend, GenerationBackend};
///
/// let backend = GeminiBackend::new(BackendConfig::default())?;
/// let reply = backend.generate("Summarize the portfolio.").await?;
/// ```
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Send one prompt to the generation API and return the reply text.
    ///
    /// # Arguments
    ///
    /// * `prompt` - The full prompt (corpus + framing + question)
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The generated text
    /// * `Err(AssistError)` - Transport, status, or decoding failure
    async fn generate(&self, prompt: &str) -> AssistResult<String>;

    /// Get the name of this backend for logging and error messages.
    fn name(&self) -> &str;
}

/// Configuration for backend behavior
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Model identifier sent with every request
    pub model: String,

    /// Base endpoint of the generation API
    pub endpoint: String,

    /// Environment variable holding the API key
    pub api_key_env: String,

    /// Timeout for one generation call in seconds
    pub request_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key_env: "API_KEY".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl BackendConfig {
    /// Override the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_config_defaults() {
        let config = BackendConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.api_key_env, "API_KEY");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.endpoint.starts_with("https://"));
    }

    #[test]
    fn test_backend_config_with_model() {
        let config = BackendConfig::default().with_model("gemini-2.5-pro");
        assert_eq!(config.model, "gemini-2.5-pro");
    }
}
