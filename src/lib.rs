//! # product-extract
//!
//! Product page field extraction library.
//!
//! Extracts three structured fields - title, price and availability - from
//! arbitrary product-page markup, using explicit CSS selectors, built-in
//! heuristics, or externally-suggested selectors, and normalizes the result
//! into a stable record shape.
//!
//! ## Quick Start
//!
//! ```rust
//! use product_extract::extract;
//!
//! let html = r#"<html><head><title>Widget X</title></head>
//! <body><span class="price">₹1049</span><p>Currently in stock.</p></body></html>"#;
//!
//! let record = extract(html)?;
//! assert_eq!(record.title.as_deref(), Some("Widget X"));
//! assert_eq!(record.price.currency.as_deref(), Some("₹"));
//! assert_eq!(record.price.amount, Some(1049.0));
//! # Ok::<(), product_extract::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! 1. Caller-supplied selectors are applied first; a selector that is
//!    malformed or matches nothing simply leaves its field unfilled.
//! 2. When a [`SelectorSuggester`] is given, its proposals fill selector
//!    slots the caller left blank - caller selectors always win.
//! 3. Fields still unfilled fall back to fixed per-field heuristics.
//! 4. Raw values are normalized: price decomposed into currency symbol and
//!    decimal amount, UTC extraction timestamp attached.
//!
//! Every failure short of untokenizable input degrades to a `null` field;
//! extraction always returns a complete record.

mod error;
mod extract;
mod normalize;
mod options;
mod record;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding for byte inputs.
pub mod encoding;

/// Page fetching collaborator (thin blocking HTTP).
pub mod fetch;

/// Heuristic field inference (title, price, availability).
pub mod heuristics;

/// Compiled regex patterns and fixed keyword tables.
pub mod patterns;

/// Selector map and selector application.
pub mod selectors;

/// Snapshot store collaborator (write-only append log).
pub mod snapshot;

/// Selector suggestion backends and the multi-model fallback loop.
pub mod suggest;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use record::{ExtractedRecord, PriceField, RawFields};
pub use selectors::SelectorMap;
pub use suggest::{GeminiSuggester, SelectorSuggester};

/// Extract product fields from an HTML document using default options.
///
/// Selectors are all unset, so every field is inferred heuristically.
///
/// # Example
///
/// ```rust
/// use product_extract::extract;
///
/// let record = extract("<html><body><h1>Widget</h1></body></html>")?;
/// assert_eq!(record.title.as_deref(), Some("Widget"));
/// # Ok::<(), product_extract::Error>(())
/// ```
pub fn extract(html: &str) -> Result<ExtractedRecord> {
    extract_with_options(html, &Options::default())
}

/// Extract product fields with custom options.
///
/// # Example
///
/// ```rust
/// use product_extract::{extract_with_options, Options, SelectorMap};
///
/// let html = r#"<html><body><span id="p">€5</span></body></html>"#;
/// let options = Options {
///     selectors: SelectorMap {
///         price: Some("#p".to_string()),
///         ..SelectorMap::default()
///     },
///     source: Some("https://shop.example/widget".to_string()),
/// };
/// let record = extract_with_options(html, &options)?;
/// assert_eq!(record.price.raw.as_deref(), Some("€5"));
/// assert_eq!(record.source.as_deref(), Some("https://shop.example/widget"));
/// # Ok::<(), product_extract::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractedRecord> {
    extract::extract_fields(html, options, None)
}

/// Extract product fields, consulting a selector suggester for fields the
/// caller's selector map leaves blank.
///
/// Caller-supplied selectors always take precedence over suggestions. A
/// suggester that fails or is disabled costs nothing: extraction proceeds
/// with selectors and heuristics alone.
pub fn extract_with_suggester(
    html: &str,
    options: &Options,
    suggester: &dyn SelectorSuggester,
) -> Result<ExtractedRecord> {
    extract::extract_fields(html, options, Some(suggester))
}

/// Extract product fields from HTML bytes with automatic encoding
/// detection.
///
/// Detects the charset declared in the markup head, transcodes to UTF-8
/// (invalid characters become the replacement character), then extracts.
pub fn extract_bytes(html: &[u8]) -> Result<ExtractedRecord> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extract product fields from HTML bytes with custom options.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractedRecord> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}
