//! Selector map and selector application.
//!
//! A [`SelectorMap`] carries an optional CSS selector per extracted field.
//! Application never fails: a malformed selector or a selector with no
//! match yields `None` for that field while the other fields proceed
//! independently.

use serde::{Deserialize, Serialize};

use crate::dom::{self, Document, Selection};
use crate::record::RawFields;

/// Mapping from field name to an optional CSS selector.
///
/// Supplied by the caller; any entry may be empty. The map is never mutated
/// in place - merging suggested selectors produces a derived copy. The same
/// shape doubles as the result of selector suggestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorMap {
    /// Selector for the product title.
    #[serde(default)]
    pub title: Option<String>,

    /// Selector for the price.
    #[serde(default)]
    pub price: Option<String>,

    /// Selector for availability.
    #[serde(default)]
    pub availability: Option<String>,
}

impl SelectorMap {
    /// True when no field carries a usable selector.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        non_empty(self.title.as_deref()).is_none()
            && non_empty(self.price.as_deref()).is_none()
            && non_empty(self.availability.as_deref()).is_none()
    }

    /// Derive a new map where every field this map leaves blank is filled
    /// from `suggested`. Non-empty entries of `self` always win.
    #[must_use]
    pub fn merged(&self, suggested: &SelectorMap) -> SelectorMap {
        SelectorMap {
            title: pick(self.title.as_deref(), suggested.title.as_deref()),
            price: pick(self.price.as_deref(), suggested.price.as_deref()),
            availability: pick(
                self.availability.as_deref(),
                suggested.availability.as_deref(),
            ),
        }
    }
}

/// Treat blank and whitespace-only selectors as absent.
fn non_empty(selector: Option<&str>) -> Option<&str> {
    selector.map(str::trim).filter(|s| !s.is_empty())
}

fn pick(own: Option<&str>, suggested: Option<&str>) -> Option<String> {
    non_empty(own)
        .or_else(|| non_empty(suggested))
        .map(ToString::to_string)
}

/// Evaluate the selector map against a parsed document.
///
/// Each field with a non-empty selector yields the whitespace-collapsed
/// visible text of the first matching element, or `None` when the selector
/// is malformed or matches nothing. Fields without a selector are left
/// `None` without evaluation.
#[must_use]
pub fn apply(doc: &Document, map: &SelectorMap) -> RawFields {
    RawFields {
        title: select_text(doc, map.title.as_deref()),
        price: select_text(doc, map.price.as_deref()),
        availability: select_text(doc, map.availability.as_deref()),
    }
}

/// Text of the first element matched by `selector`, if any.
///
/// Uses the non-panicking query path so invalid selector syntax degrades to
/// "field not found" rather than an error.
fn select_text(doc: &Document, selector: Option<&str>) -> Option<String> {
    let selector = non_empty(selector)?;
    let matched = doc.try_select(selector)?;
    let node = matched.nodes().first()?;
    let text = dom::clean_text(&Selection::from(*node));
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTML: &str = r#"
        <html><body>
          <h1 class="product-title">  Widget   X </h1>
          <div id="pricing"><span class="price">$19.99</span></div>
          <div id="availability">In stock</div>
        </body></html>
    "#;

    #[test]
    fn applies_each_selector_independently() {
        let doc = dom::parse(HTML);
        let map = SelectorMap {
            title: Some("h1.product-title".to_string()),
            price: Some("span.price".to_string()),
            availability: Some("#availability".to_string()),
        };
        let raw = apply(&doc, &map);
        assert_eq!(raw.title.as_deref(), Some("Widget X"));
        assert_eq!(raw.price.as_deref(), Some("$19.99"));
        assert_eq!(raw.availability.as_deref(), Some("In stock"));
    }

    #[test]
    fn empty_selector_yields_none_without_evaluation() {
        let doc = dom::parse(HTML);
        let map = SelectorMap {
            title: Some(String::new()),
            ..SelectorMap::default()
        };
        let raw = apply(&doc, &map);
        assert_eq!(raw.title, None);
    }

    #[test]
    fn malformed_selector_degrades_to_none() {
        let doc = dom::parse(HTML);
        let map = SelectorMap {
            title: Some("h1[".to_string()),
            price: Some("span.price".to_string()),
            availability: None,
        };
        let raw = apply(&doc, &map);
        assert_eq!(raw.title, None);
        // other fields continue independently
        assert_eq!(raw.price.as_deref(), Some("$19.99"));
    }

    #[test]
    fn no_match_yields_none() {
        let doc = dom::parse(HTML);
        let map = SelectorMap {
            title: Some(".does-not-exist".to_string()),
            ..SelectorMap::default()
        };
        assert_eq!(apply(&doc, &map).title, None);
    }

    #[test]
    fn merged_prefers_own_non_empty_entries() {
        let own = SelectorMap {
            title: Some("h1".to_string()),
            price: Some("  ".to_string()),
            availability: None,
        };
        let suggested = SelectorMap {
            title: Some(".suggested-title".to_string()),
            price: Some(".suggested-price".to_string()),
            availability: Some("#stock".to_string()),
        };
        let merged = own.merged(&suggested);
        assert_eq!(merged.title.as_deref(), Some("h1"));
        assert_eq!(merged.price.as_deref(), Some(".suggested-price"));
        assert_eq!(merged.availability.as_deref(), Some("#stock"));
    }

    #[test]
    fn deserializes_from_partial_json() {
        let map: SelectorMap = match serde_json::from_str(r#"{"price": ".price"}"#) {
            Ok(map) => map,
            Err(err) => panic!("expected partial map to deserialize, got {err}"),
        };
        assert_eq!(map.price.as_deref(), Some(".price"));
        assert_eq!(map.title, None);
    }
}
