//! Extraction orchestration.
//!
//! Composes the pipeline: optional selector suggestion, selector
//! application, heuristic gap-filling, normalization, provenance.

use tracing::debug;

use crate::dom;
use crate::error::{Error, Result};
use crate::heuristics;
use crate::normalize;
use crate::options::Options;
use crate::record::ExtractedRecord;
use crate::selectors;
use crate::suggest::SelectorSuggester;

/// Run the extraction pipeline over one document.
///
/// The only hard failure is markup that cannot be tokenized at all; every
/// downstream miss degrades to a `None` field and the call still returns a
/// record.
pub(crate) fn extract_fields(
    html: &str,
    options: &Options,
    suggester: Option<&dyn SelectorSuggester>,
) -> Result<ExtractedRecord> {
    if html.trim().is_empty() {
        return Err(Error::Parse("document is empty".to_string()));
    }

    let doc = dom::parse(html);

    // Suggested selectors only fill fields the caller left blank.
    let effective = match suggester {
        Some(suggester) => {
            let suggested = suggester.suggest(html);
            options.selectors.merged(&suggested)
        }
        None => options.selectors.clone(),
    };

    let mut raw = selectors::apply(&doc, &effective);
    debug!(
        title = raw.title.is_some(),
        price = raw.price.is_some(),
        availability = raw.availability.is_some(),
        "selector application done"
    );

    // Heuristics run only for fields still unfilled.
    if raw.title.is_none() {
        raw.title = heuristics::infer_title(&doc);
    }
    if raw.price.is_none() {
        raw.price = heuristics::infer_price(&doc);
    }
    if raw.availability.is_none() {
        raw.availability = heuristics::infer_availability(&doc);
    }

    let mut record = normalize::normalize(raw);
    record.source = options.source.clone();
    Ok(record)
}
