//! Result types for extraction output.
//!
//! This module defines the structured output from field extraction: the
//! transient per-field raw values and the final normalized record.

use serde::{Deserialize, Serialize};

/// Raw per-field text as produced by selector application and heuristics,
/// before normalization. Lives only inside one extraction call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    /// Product title text, if any strategy produced one.
    pub title: Option<String>,

    /// Raw price text including the currency symbol.
    pub price: Option<String>,

    /// Availability text window.
    pub availability: Option<String>,
}

/// Normalized price decomposition.
///
/// `amount` is non-null only when a numeric substring was found inside
/// `raw`. `currency` reflects the matched symbol independent of whether the
/// numeric part parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceField {
    /// The raw matched price text, e.g. `"₹1,049.50"`.
    pub raw: Option<String>,

    /// Parsed decimal amount with thousands separators stripped.
    pub amount: Option<f64>,

    /// The matched currency symbol, e.g. `"₹"`.
    pub currency: Option<String>,
}

/// Final output of one extraction call.
///
/// Serializes to the stable record shape consumed by display and export
/// front ends. Immutable once constructed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    /// Product title, or `null` when nothing matched.
    pub title: Option<String>,

    /// Decomposed price.
    pub price: PriceField,

    /// Availability text window, or `null` when nothing matched.
    pub availability: Option<String>,

    /// UTC time of extraction in ISO-8601 form.
    pub extraction_timestamp: String,

    /// Caller-supplied provenance (originating URL or filename). Not
    /// produced by extraction itself.
    #[serde(rename = "_source", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}
