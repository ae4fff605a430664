//! DOM Operations Adapter
//!
//! Thin adapter over the `dom_query` crate. Centralizes the handful of
//! operations the extraction pipeline needs: parsing, attribute access and
//! whitespace-normalized text retrieval.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

use crate::patterns::WHITESPACE_NORMALIZE;

/// Parse HTML string into a document.
///
/// Parsing is lenient: malformed fragments still produce a tree. Callers
/// that need to reject untokenizable input do so before calling this.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Visible text of a selection with runs of whitespace collapsed to single
/// spaces and the ends trimmed.
#[must_use]
pub fn clean_text(sel: &Selection) -> String {
    normalize_whitespace(&sel.text())
}

/// Visible text of the whole document, whitespace-normalized.
#[must_use]
pub fn full_text(doc: &Document) -> String {
    normalize_whitespace(&doc.select("html").text())
}

/// Collapse runs of whitespace to single spaces and trim the ends.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}
