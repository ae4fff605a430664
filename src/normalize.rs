//! Field normalization.
//!
//! Converts raw per-field text into the canonical record shape: price
//! decomposed into currency symbol and numeric amount, extraction timestamp
//! attached. This step never fails; malformed numeric text degrades to a
//! `None` amount.

use chrono::{SecondsFormat, Utc};

use crate::patterns::{CURRENCY, NUMBER};
use crate::record::{ExtractedRecord, PriceField, RawFields};

/// Normalize raw fields into the final record.
#[must_use]
pub fn normalize(raw: RawFields) -> ExtractedRecord {
    ExtractedRecord {
        title: raw.title,
        price: decompose_price(raw.price),
        availability: raw.availability,
        extraction_timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        source: None,
    }
}

/// Split raw price text into symbol and parsed amount.
///
/// The currency symbol and the numeric substring are searched for
/// independently, so a recognizable symbol survives even when the number
/// fails to parse.
fn decompose_price(raw: Option<String>) -> PriceField {
    let Some(raw) = raw else {
        return PriceField::default();
    };

    let currency = CURRENCY
        .captures(&raw)
        .and_then(|caps| caps.get(1))
        .map(|sym| sym.as_str().to_string());

    let amount = NUMBER
        .find(&raw)
        .and_then(|num| num.as_str().replace(',', "").parse::<f64>().ok());

    PriceField {
        raw: Some(raw),
        amount,
        currency,
    }
}
