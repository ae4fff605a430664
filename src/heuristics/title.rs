//! Title inference.
//!
//! Strategy order: social-preview meta tags, then the head-level `<title>`
//! element, then the first heading among levels 1-3.

use crate::dom::{self, Document, Selection};

/// Social-preview title providers in fixed priority order.
const META_TITLE_SELECTORS: [&str; 2] = [
    r#"meta[property="og:title"]"#,
    r#"meta[name="twitter:title"]"#,
];

/// Infer a product title from the document.
#[must_use]
pub fn infer_title(doc: &Document) -> Option<String> {
    meta_title(doc)
        .or_else(|| title_element(doc))
        .or_else(|| first_heading(doc))
}

/// Content of the first social-preview title tag that carries one.
fn meta_title(doc: &Document) -> Option<String> {
    for selector in META_TITLE_SELECTORS {
        if let Some(node) = doc.select(selector).nodes().first() {
            let content = dom::get_attribute(&Selection::from(*node), "content");
            if let Some(content) = content {
                let content = content.trim();
                if !content.is_empty() {
                    return Some(content.to_string());
                }
            }
        }
    }
    None
}

/// Text of the head-level `<title>` element.
fn title_element(doc: &Document) -> Option<String> {
    let title = doc.select("title");
    if title.is_empty() {
        return None;
    }
    let text = dom::clean_text(&title);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Text of the first heading element, trying h1 then h2 then h3.
fn first_heading(doc: &Document) -> Option<String> {
    for tag in ["h1", "h2", "h3"] {
        if let Some(node) = doc.select(tag).nodes().first() {
            let text = dom::clean_text(&Selection::from(*node));
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn og_title_beats_everything() {
        let doc = dom::parse(
            r#"<html><head>
                <meta property="og:title" content="Widget X"/>
                <meta name="twitter:title" content="Tweet Title"/>
                <title>Head Title</title>
               </head><body><h1>Other</h1></body></html>"#,
        );
        assert_eq!(infer_title(&doc).as_deref(), Some("Widget X"));
    }

    #[test]
    fn twitter_title_when_og_missing() {
        let doc = dom::parse(
            r#"<html><head>
                <meta name="twitter:title" content="Tweet Title"/>
                <title>Head Title</title>
               </head><body></body></html>"#,
        );
        assert_eq!(infer_title(&doc).as_deref(), Some("Tweet Title"));
    }

    #[test]
    fn empty_og_content_falls_through() {
        let doc = dom::parse(
            r#"<html><head>
                <meta property="og:title" content=""/>
                <title>Head Title</title>
               </head></html>"#,
        );
        assert_eq!(infer_title(&doc).as_deref(), Some("Head Title"));
    }

    #[test]
    fn title_element_when_no_meta() {
        let doc = dom::parse("<html><head><title> Plain  Title </title></head></html>");
        assert_eq!(infer_title(&doc).as_deref(), Some("Plain Title"));
    }

    #[test]
    fn heading_fallback_ranks_h1_before_h2() {
        let doc = dom::parse("<html><body><h2>Second</h2><h1>First</h1></body></html>");
        assert_eq!(infer_title(&doc).as_deref(), Some("First"));
    }

    #[test]
    fn empty_h1_falls_to_h2() {
        let doc = dom::parse("<html><body><h1>  </h1><h2>Second</h2></body></html>");
        assert_eq!(infer_title(&doc).as_deref(), Some("Second"));
    }

    #[test]
    fn none_when_nothing_matches() {
        let doc = dom::parse("<html><body><p>no headings here</p></body></html>");
        assert_eq!(infer_title(&doc), None);
    }
}
