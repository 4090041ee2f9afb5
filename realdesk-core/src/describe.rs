//! Listing description drafts from a text-generation service.
//!
//! The [`DescriptionGenerator`] trait is the boundary the property form talks
//! to. [`GeminiGenerator`] calls Google's `generateContent` REST endpoint;
//! [`Unavailable`] stands in when no API key is configured.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::DescribeConfig;

/// Hints for one description draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionRequest {
    pub title: String,
    /// Key features, e.g. "3 bed, 2 bath, garden, renovated kitchen".
    pub features: String,
    pub tone: Option<String>,
}

impl DescriptionRequest {
    /// Prompt text sent to the model. A missing or blank tone uses `default_tone`.
    pub fn prompt(&self, default_tone: &str) -> String {
        let tone = self
            .tone
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(default_tone);
        format!(
            "Write a compelling real estate listing description for a property titled \
             \"{}\". Key features: {}. Tone: {}. Keep it under 150 words, in plain prose \
             without headings or bullet points.",
            self.title.trim(),
            self.features.trim(),
            tone
        )
    }
}

#[derive(Debug, Error)]
pub enum DescribeError {
    #[error("description generation is not configured (set {env_var})")]
    NotConfigured { env_var: String },

    #[error("generation request failed: {0}")]
    Transport(String),

    #[error("generation service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("generation service returned no text")]
    EmptyResponse,
}

/// Something that can draft a listing description.
pub trait DescriptionGenerator: Send {
    /// Human-readable name of the backing service.
    fn name(&self) -> &str;

    fn generate(&self, request: &DescriptionRequest) -> Result<String, DescribeError>;
}

/// Generator used when no service is configured. Always fails.
#[derive(Debug, Clone)]
pub struct Unavailable {
    env_var: String,
}

impl Unavailable {
    pub fn new(env_var: impl Into<String>) -> Self {
        Self {
            env_var: env_var.into(),
        }
    }
}

impl DescriptionGenerator for Unavailable {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn generate(&self, _request: &DescriptionRequest) -> Result<String, DescribeError> {
        Err(DescribeError::NotConfigured {
            env_var: self.env_var.clone(),
        })
    }
}

#[derive(Debug, Serialize)]
struct GenerateBody {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Blocking client for the Gemini `generateContent` endpoint.
pub struct GeminiGenerator {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key: String,
    default_tone: String,
}

impl GeminiGenerator {
    pub fn new(config: &DescribeConfig, api_key: String) -> Result<Self, DescribeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DescribeError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            default_tone: config.default_tone.clone(),
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    /// Concatenated text of the first candidate.
    fn parse_response(body: &str) -> Result<String, DescribeError> {
        let resp: GenerateResponse = serde_json::from_str(body)
            .map_err(|e| DescribeError::Transport(format!("unexpected response shape: {e}")))?;
        let text: String = resp
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();
        let text = text.trim();
        if text.is_empty() {
            return Err(DescribeError::EmptyResponse);
        }
        Ok(text.to_string())
    }

    fn error_message(body: &str) -> String {
        serde_json::from_str::<ErrorEnvelope>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.chars().take(200).collect())
    }
}

impl DescriptionGenerator for GeminiGenerator {
    fn name(&self) -> &str {
        &self.model
    }

    fn generate(&self, request: &DescriptionRequest) -> Result<String, DescribeError> {
        let body = GenerateBody {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(request.prompt(&self.default_tone)),
                }],
            }],
        };
        tracing::info!(model = %self.model, title = %request.title, "requesting description");

        let resp = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| DescribeError::Transport(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| DescribeError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(DescribeError::Status {
                status: status.as_u16(),
                message: Self::error_message(&text),
            });
        }
        Self::parse_response(&text)
    }
}

/// Pick the generator for `config`: Gemini when the key variable is set,
/// otherwise [`Unavailable`].
pub fn from_config(config: &DescribeConfig) -> Box<dyn DescriptionGenerator> {
    match std::env::var(&config.api_key_env) {
        Ok(key) if !key.trim().is_empty() => match GeminiGenerator::new(config, key) {
            Ok(generator) => Box::new(generator),
            Err(e) => {
                tracing::warn!(error = %e, "could not build description client");
                Box::new(Unavailable::new(&config.api_key_env))
            }
        },
        _ => Box::new(Unavailable::new(&config.api_key_env)),
    }
}
