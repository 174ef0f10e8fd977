// Vitrine Assistant Bridge - Gemini Backend
// STORY-006: Generative Language API backend
//
// One-shot text generation over HTTP: POST the model id and prompt, read
// back the first candidate's text. JSON on both sides; unknown response
// fields are ignored for forward compatibility with API revisions.

use async_trait::async_trait;
use isahc::config::Configurable;
use isahc::{AsyncReadResponseExt, Request, RequestExt};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use super::backend::{BackendConfig, GenerationBackend};
use super::error::{AssistError, AssistResult};

/// Request body for a generateContent call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Response body for a generateContent call; only the candidate text is
/// consumed, everything else passes through untouched
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

/// Backend for the generative-language HTTP API.
///
/// # Error Handling
///
/// - Missing/empty key env var fails construction with `MissingApiKey`
///   (the session then pins itself to the fixed fallback reply)
/// - Transport errors, bad statuses, and undecodable replies map onto
///   `AssistError`; the session turns each into one apology entry
/// - No retry, no backoff; every question is one request
pub struct GeminiBackend {
    config: BackendConfig,
    api_key: String,
}

impl GeminiBackend {
    /// Create a backend, reading the API key from the configured
    /// environment variable.
    pub fn new(config: BackendConfig) -> AssistResult<Self> {
        let api_key = env::var(&config.api_key_env).unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(AssistError::MissingApiKey(config.api_key_env.clone()));
        }
        Ok(Self { config, api_key })
    }

    /// Full request URL for the configured model
    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.endpoint, self.config.model, self.api_key
        )
    }

    /// Wrap one prompt in the wire shape
    pub fn encode_prompt(prompt: &str) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }

    /// Pull the reply text out of a response body.
    ///
    /// The first candidate wins; its parts are concatenated. An empty or
    /// candidate-less reply is an error the caller turns into an apology.
    pub fn decode_reply(body: &str) -> AssistResult<String> {
        let response: GenerateResponse = serde_json::from_str(body)?;
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or(AssistError::EmptyReply)?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();

        if text.trim().is_empty() {
            return Err(AssistError::EmptyReply);
        }
        Ok(text)
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn generate(&self, prompt: &str) -> AssistResult<String> {
        let body = serde_json::to_string(&Self::encode_prompt(prompt))?;

        let request = Request::post(self.request_url())
            .header("content-type", "application/json")
            .timeout(Duration::from_secs(self.config.request_timeout_secs))
            .body(body)?;

        let mut response = request.send_async().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(AssistError::BadStatus {
                code: status.as_u16(),
                body: text,
            });
        }

        Self::decode_reply(&text)
    }

    fn name(&self) -> &str {
        "Gemini"
    }
}
