//! Character encoding detection and transcoding.
//!
//! Uploaded snapshots and stored pages arrive as raw bytes in whatever
//! encoding the site served. This module sniffs the charset declaration
//! from the markup head and converts to UTF-8 before extraction.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes of the document head examined for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("valid regex")
});

/// Detect the character encoding declared by an HTML document.
///
/// Checks `<meta charset>` first, then the `http-equiv` form, and defaults
/// to UTF-8 when neither declares a label `encoding_rs` recognizes. Only
/// the first kilobyte is examined.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);

    [&META_CHARSET, &HTTP_EQUIV_CHARSET]
        .iter()
        .find_map(|pattern| {
            let label = pattern.captures(&head)?.get(1)?.as_str();
            Encoding::for_label(label.as_bytes())
        })
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with the Unicode replacement character
/// rather than failing; a snapshot with a broken byte never aborts
/// extraction.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_utf8_without_declaration() {
        assert_eq!(detect_encoding(b"<html><body>Test</body></html>"), UTF_8);
    }

    #[test]
    fn meta_charset_declaration_wins() {
        let html = br#"<html><head><meta charset="windows-1252"></head></html>"#;
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn http_equiv_declaration_is_honored() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#;
        // encoding_rs maps ISO-8859-1 to windows-1252 per the WHATWG registry
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        let html = br#"<meta charset="not-a-real-charset">"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn transcodes_legacy_bytes() {
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9 \xA35</body></html>";
        let text = transcode_to_utf8(html);
        assert!(text.contains("Café"));
        assert!(text.contains("£5"));
    }

    #[test]
    fn invalid_utf8_degrades_to_replacement_chars() {
        let html = b"<html><body>Test \xFF\xFE Invalid</body></html>";
        let text = transcode_to_utf8(html);
        assert!(text.contains("Test"));
        assert!(text.contains("Invalid"));
    }
}
