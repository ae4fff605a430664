//! Gemini suggestion backend.
//!
//! Concrete [`SelectorSuggester`] over the Gemini `generateContent` REST
//! API. A fixed ordered list of models is attempted, newest first; the
//! first model returning a well-formed selector mapping wins. Every
//! per-model failure is captured and reported through the logging sink -
//! suggestion is never fatal to extraction.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{fallback, parse_selector_mapping, SelectorSuggester, SuggestError};
use crate::selectors::SelectorMap;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Models to try, newest/most-capable first. One attempt each, no retries.
const MODEL_FALLBACK: [&str; 4] = [
    "gemini-2.5-flash",
    "gemini-2.0-flash",
    "gemini-1.5-flash",
    "gemini-1.5-pro",
];

/// Only this many characters of markup are forwarded to the model.
const PROMPT_HTML_LIMIT: usize = 6000;

/// Per-attempt request timeout. A timed-out model is treated like any other
/// failed model: the loop advances.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Selector suggestion backed by the Gemini API.
pub struct GeminiSuggester {
    agent: ureq::Agent,
    api_key: Option<String>,
    base_url: String,
    models: Vec<String>,
}

impl GeminiSuggester {
    /// Create a suggester with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            agent: build_agent(),
            api_key: Some(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            models: MODEL_FALLBACK.iter().map(ToString::to_string).collect(),
        }
    }

    /// Create from the `GEMINI_API_KEY` environment variable.
    ///
    /// An absent or empty variable produces a disabled suggester - calls to
    /// [`SelectorSuggester::suggest`] return an empty map without any
    /// network traffic.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var("GEMINI_API_KEY") {
            Ok(key) if !key.trim().is_empty() => Self::new(key),
            _ => Self::disabled(),
        }
    }

    /// Create a suggester with no credential. Always a no-op.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            agent: build_agent(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            models: MODEL_FALLBACK.iter().map(ToString::to_string).collect(),
        }
    }

    /// Override the API base URL (proxies, test servers).
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the model fallback list.
    #[must_use]
    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.models = models;
        self
    }

    /// One attempt against one model.
    fn request_mapping(
        &self,
        model: &str,
        api_key: &str,
        prompt: &str,
    ) -> Result<SelectorMap, SuggestError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.1,
                response_mime_type: "application/json",
            },
        };

        let mut response = self
            .agent
            .post(&url)
            .header("x-goog-api-key", api_key)
            .send_json(&request)
            .map_err(|err| match err {
                ureq::Error::StatusCode(code) => SuggestError::Api(format!("HTTP {code}")),
                other => SuggestError::Network(other.to_string()),
            })?;

        let body: GenerateResponse = response
            .body_mut()
            .read_json()
            .map_err(|err| SuggestError::Parse(err.to_string()))?;

        let text = body.first_text();
        let text = text.trim();
        if text.is_empty() {
            return Err(SuggestError::EmptyResponse);
        }
        parse_selector_mapping(text)
    }
}

impl SelectorSuggester for GeminiSuggester {
    fn suggest(&self, html: &str) -> SelectorMap {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("selector suggestion disabled: no API key configured");
            return SelectorMap::default();
        };

        let prompt = build_prompt(html);
        let models: Vec<&str> = self.models.iter().map(String::as_str).collect();
        let (mapping, failures) = fallback::first_success(&models, |model| {
            self.request_mapping(model, api_key, &prompt).map(|map| {
                debug!(model, "selector suggestion succeeded");
                map
            })
        });

        match mapping {
            Some(map) => map,
            None => {
                if !failures.is_empty() {
                    let summary = failures
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("; ");
                    warn!("all suggestion models failed: {summary}");
                }
                SelectorMap::default()
            }
        }
    }
}

fn build_agent() -> ureq::Agent {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(REQUEST_TIMEOUT))
        .build();
    ureq::Agent::new_with_config(config)
}

/// Fixed instruction prompt with a truncated markup prefix.
fn build_prompt(html: &str) -> String {
    let html = truncate_chars(html, PROMPT_HTML_LIMIT);
    format!(
        "You are an expert HTML analyst. Given the following HTML, identify the correct \
         CSS selectors for three elements: product title, product price, and availability. \
         Respond ONLY as a JSON object with keys: title, price, availability.\n\n\
         Example output: {{\"title\": \"h1.product-title\", \"price\": \"span.price\", \
         \"availability\": \"#stock\"}}\n\nHTML:\n{html}"
    )
}

/// Prefix of `text` at most `max` characters long, never splitting a
/// multi-byte character.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

// === Gemini wire types ===

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate.
    fn first_text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.iter().map(|p| p.text.as_str()).collect())
            .unwrap_or_default()
    }
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}
