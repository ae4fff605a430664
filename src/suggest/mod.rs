//! Selector suggestion.
//!
//! Integration with an external text-generation service that proposes CSS
//! selectors for the three product fields from raw markup. The core depends
//! only on the [`SelectorSuggester`] capability trait; concrete backends are
//! injected at the edge. Suggestion is strictly best-effort: a suggester
//! never fails the extraction call, it returns an empty map instead.

pub mod fallback;
pub mod gemini;

pub use fallback::{first_success, AttemptFailure};
pub use gemini::GeminiSuggester;

use crate::selectors::SelectorMap;

/// Field keys a suggestion response must speak in.
pub(crate) const EXPECTED_KEYS: [&str; 3] = ["title", "price", "availability"];

/// Capability interface for selector suggestion backends.
pub trait SelectorSuggester {
    /// Propose a selector mapping for the given markup.
    ///
    /// Returns an empty map when the backend is disabled or every attempt
    /// failed; failures are reported to the logging sink, never to the
    /// caller.
    fn suggest(&self, html: &str) -> SelectorMap;
}

/// Per-attempt failure of a suggestion backend.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("API error: {0}")]
    Api(String),

    /// The model produced no text at all.
    #[error("empty response from model")]
    EmptyResponse,

    /// The response text was not parseable as JSON.
    #[error("response is not valid JSON: {0}")]
    Parse(String),

    /// The response parsed, but is not a mapping with any expected key.
    #[error("response JSON has none of the expected keys")]
    WrongShape,
}

/// Parse a model response into a selector mapping.
///
/// Strips an optional surrounding code fence (language-tagged or plain),
/// then requires a JSON object carrying at least one of the expected field
/// keys. Unknown keys are ignored.
pub(crate) fn parse_selector_mapping(text: &str) -> Result<SelectorMap, SuggestError> {
    let body = strip_code_fence(text);
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|err| SuggestError::Parse(err.to_string()))?;

    let Some(object) = value.as_object() else {
        return Err(SuggestError::WrongShape);
    };
    if !EXPECTED_KEYS.iter().any(|key| object.contains_key(*key)) {
        return Err(SuggestError::WrongShape);
    }

    serde_json::from_value(value).map_err(|err| SuggestError::Parse(err.to_string()))
}

/// Remove a markdown code fence wrapper, if present.
///
/// Handles both ```` ```json ```` and bare ```` ``` ```` fences; an
/// unterminated fence keeps everything after the opener.
pub(crate) fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    if let Some((_, rest)) = text.split_once("```json") {
        return rest
            .split_once("```")
            .map_or(rest, |(inner, _)| inner)
            .trim();
    }
    if let Some((_, rest)) = text.split_once("```") {
        return rest
            .split_once("```")
            .map_or(rest, |(inner, _)| inner)
            .trim();
    }
    text
}
