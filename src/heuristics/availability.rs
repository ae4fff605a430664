//! Availability inference.
//!
//! Scans the lowercased document text for a fixed ordered set of stock
//! phrases. The phrase list is the outer loop: an earlier-listed phrase
//! found anywhere in the text beats a later-listed phrase that appears
//! earlier in the document. A hit returns a context window around the
//! match.

use crate::dom::{self, Document};
use crate::patterns::AVAILABILITY_PHRASES;

/// Characters of context kept before the match start.
const WINDOW_BEFORE: usize = 30;
/// Characters of context kept after the match start.
const WINDOW_AFTER: usize = 50;

/// Infer an availability text window from the document.
#[must_use]
pub fn infer_availability(doc: &Document) -> Option<String> {
    let text = dom::full_text(doc).to_lowercase();
    for phrase in AVAILABILITY_PHRASES {
        if let Some(idx) = text.find(phrase) {
            return Some(window_around(&text, idx));
        }
    }
    None
}

/// Context window spanning `WINDOW_BEFORE` characters before `idx` to
/// `WINDOW_AFTER` after it, trimmed. Offsets count characters, not bytes,
/// so multi-byte text cannot split the slice mid-character.
fn window_around(text: &str, idx: usize) -> String {
    let start = text[..idx]
        .char_indices()
        .rev()
        .nth(WINDOW_BEFORE - 1)
        .map_or(0, |(i, _)| i);
    let end = text[idx..]
        .char_indices()
        .nth(WINDOW_AFTER)
        .map_or(text.len(), |(i, _)| idx + i);
    text[start..end].trim().to_string()
}
