//! Configuration options for field extraction.

use crate::selectors::SelectorMap;

/// Per-call extraction options.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use product_extract::{Options, SelectorMap};
///
/// let options = Options {
///     selectors: SelectorMap {
///         price: Some("span.price".to_string()),
///         ..SelectorMap::default()
///     },
///     source: Some("https://shop.example/widget".to_string()),
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Caller-supplied selectors. Fields left empty fall back to suggested
    /// selectors (when a suggester is given) and then to heuristics.
    pub selectors: SelectorMap,

    /// Opaque provenance attached to the output record as `_source`
    /// (originating URL, filename). Not interpreted by extraction.
    pub source: Option<String>,
}
