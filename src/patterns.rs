//! Compiled regex patterns and fixed keyword tables for field extraction.
//!
//! All patterns are compiled once at first use via `LazyLock` and shared
//! across extraction calls.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Price Patterns
// =============================================================================

/// Matches a currency amount: one known currency symbol, optional single
/// whitespace, then a digit group with optional thousands separators and an
/// optional decimal fraction. Group 1 captures the symbol alone.
pub static CURRENCY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([$€£₹])\s?\d[\d,]*(?:\.\d+)?").expect("CURRENCY regex")
});

/// Matches the numeric part of a price, thousands separators included.
pub static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d[\d,]*(?:\.\d+)?").expect("NUMBER regex")
});

/// Class/id substrings that mark an element as price-bearing.
/// Matched case-insensitively against the raw attribute value.
pub const PRICE_KEYWORDS: [&str; 5] = ["price", "amount", "cost", "sale", "our-price"];

// =============================================================================
// Availability Patterns
// =============================================================================

/// Stock phrases checked against the lowercased document text.
///
/// Order is match priority: the scan iterates this list in order and takes
/// the first phrase present anywhere in the text, so `in stock` beats a
/// `pre-order` that appears earlier in the document.
pub const AVAILABILITY_PHRASES: [&str; 5] =
    ["in stock", "out of stock", "available", "pre-order", "preorder"];

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of whitespace for collapsing to single spaces.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});
