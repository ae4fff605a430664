//! Price inference.
//!
//! Strategy order: elements whose `class` contains a price keyword, then
//! elements whose `id` does, then the first currency match anywhere in the
//! document text.

use crate::dom::{self, Document, Selection};
use crate::patterns::{CURRENCY, PRICE_KEYWORDS};

/// Infer a raw price string (currency symbol included) from the document.
#[must_use]
pub fn infer_price(doc: &Document) -> Option<String> {
    scan_attribute(doc, "class")
        .or_else(|| scan_attribute(doc, "id"))
        .or_else(|| scan_document(doc))
}

/// First currency match inside an element whose `attr` value contains a
/// price keyword. Elements are visited in document order.
fn scan_attribute(doc: &Document, attr: &str) -> Option<String> {
    let carrier = format!("[{attr}]");
    for node in doc.select(&carrier).nodes() {
        let sel = Selection::from(*node);
        let Some(value) = dom::get_attribute(&sel, attr) else {
            continue;
        };
        if !has_price_keyword(&value) {
            continue;
        }
        let text = dom::clean_text(&sel);
        if let Some(found) = CURRENCY.find(&text) {
            return Some(found.as_str().to_string());
        }
    }
    None
}

/// Fallback: first currency match anywhere in the visible text.
fn scan_document(doc: &Document) -> Option<String> {
    let text = dom::full_text(doc);
    CURRENCY.find(&text).map(|m| m.as_str().to_string())
}

/// Case-insensitive substring match against the fixed keyword set.
fn has_price_keyword(value: &str) -> bool {
    let value = value.to_lowercase();
    PRICE_KEYWORDS.iter().any(|k| value.contains(k))
}
