//! Declared icon link extraction
//!
//! Scans the bounded head markup for `<link>` tags whose `rel` marks an icon
//! and emits one candidate per accepted tag. html5ever's permissive parsing
//! means malformed or unbalanced tags never abort the scan.

use crate::candidates::{parse_pixel_size, IconCandidate};
use scraper::{Html, Selector};
use url::Url;

/// Extracts declared icon candidates from the bounded head markup.
///
/// Accepted `rel` values: anything starting with `"apple-touch-icon"`, or
/// exactly `"shortcut icon"` or `"icon"`. For each accepted tag the `href`
/// is resolved against the page URL into an absolute https URL, and `sizes`
/// (e.g. `"144x144"`) is parsed as the leading integer before `'x'`,
/// defaulting to 0. The candidate's classification keeps the raw `rel` value.
pub fn scan_icon_links(head_html: &str, page_url: &Url) -> Vec<IconCandidate> {
    let fragment = Html::parse_document(head_html);
    let mut candidates = Vec::new();

    if let Ok(selector) = Selector::parse("link[rel][href]") {
        for element in fragment.select(&selector) {
            let rel = element.value().attr("rel").unwrap_or("");
            if !is_icon_rel(rel) {
                continue;
            }

            let href = element.value().attr("href").unwrap_or("");
            let resolved = match resolve_icon_href(href, page_url) {
                Some(resolved) => resolved,
                None => continue,
            };

            let size = element
                .value()
                .attr("sizes")
                .map(parse_pixel_size)
                .unwrap_or(0);

            candidates.push(IconCandidate::new(resolved, rel.to_string(), size));
        }
    }

    candidates
}

/// Checks whether a `rel` value declares an icon link
fn is_icon_rel(rel: &str) -> bool {
    rel.starts_with("apple-touch-icon") || rel == "shortcut icon" || rel == "icon"
}

/// Resolves an icon href against the page URL and forces https.
///
/// Returns None for empty hrefs, unresolvable references, and resolutions
/// whose scheme cannot be made https (e.g. `data:` URIs).
fn resolve_icon_href(href: &str, page_url: &Url) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    let mut resolved = page_url.join(href).ok()?;
    match resolved.scheme() {
        "https" => {}
        "http" => resolved.set_scheme("https").ok()?,
        _ => return None,
    }

    Some(resolved.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://x.com/").unwrap()
    }

    #[test]
    fn test_apple_touch_icon_with_sizes() {
        let html = r#"<head><link rel="apple-touch-icon" sizes="144x144" href="/a.png"></head>"#;
        let candidates = scan_icon_links(html, &page_url());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].href, "https://x.com/a.png");
        assert_eq!(candidates[0].size, 144);
        assert!(candidates[0].classification.contains("apple-touch-icon"));
    }

    #[test]
    fn test_no_link_tags_yields_nothing() {
        let html = r#"<head><title>t</title><meta charset="utf-8"></head>"#;
        assert!(scan_icon_links(html, &page_url()).is_empty());
    }

    #[test]
    fn test_rel_filtering() {
        let html = r#"<head>
            <link rel="icon" href="/icon.png">
            <link rel="shortcut icon" href="/shortcut.ico">
            <link rel="apple-touch-icon-precomposed" href="/apple.png">
            <link rel="stylesheet" href="/style.css">
            <link rel="canonical" href="/canonical">
            <link rel="iconography" href="/not-an-icon.png">
        </head>"#;
        let candidates = scan_icon_links(html, &page_url());
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0].classification, "icon");
        assert_eq!(candidates[1].classification, "shortcut icon");
        assert_eq!(candidates[2].classification, "apple-touch-icon-precomposed");
    }

    #[test]
    fn test_relative_href_resolved_against_page() {
        let base = Url::parse("https://x.com/blog/post").unwrap();
        let html = r#"<head><link rel="icon" href="../favicon.png"></head>"#;
        let candidates = scan_icon_links(html, &base);
        assert_eq!(candidates[0].href, "https://x.com/favicon.png");
    }

    #[test]
    fn test_http_href_forced_to_https() {
        let html = r#"<head><link rel="icon" href="http://cdn.x.com/i.png"></head>"#;
        let candidates = scan_icon_links(html, &page_url());
        assert_eq!(candidates[0].href, "https://cdn.x.com/i.png");
    }

    #[test]
    fn test_data_uri_dropped() {
        let html = r#"<head><link rel="icon" href="data:image/png;base64,AAAA"></head>"#;
        assert!(scan_icon_links(html, &page_url()).is_empty());
    }

    #[test]
    fn test_missing_sizes_defaults_to_zero() {
        let html = r#"<head><link rel="icon" href="/i.png"></head>"#;
        assert_eq!(scan_icon_links(html, &page_url())[0].size, 0);
    }

    #[test]
    fn test_unparsable_sizes_defaults_to_zero() {
        let html = r#"<head><link rel="icon" sizes="any" href="/i.svg"></head>"#;
        assert_eq!(scan_icon_links(html, &page_url())[0].size, 0);
    }

    #[test]
    fn test_malformed_markup_does_not_abort() {
        let html = r#"<head><link rel="icon" href="/a.png"><link rel="icon href=broken
            <link rel="apple-touch-icon" href="/b.png"></head"#;
        let candidates = scan_icon_links(html, &page_url());
        assert!(candidates.iter().any(|c| c.href == "https://x.com/a.png"));
    }

    #[test]
    fn test_one_candidate_per_accepted_tag() {
        let html = r#"<head>
            <link rel="apple-touch-icon" sizes="120x120" href="/a-120.png">
            <link rel="apple-touch-icon" sizes="180x180" href="/a-180.png">
        </head>"#;
        let candidates = scan_icon_links(html, &page_url());
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].size, 120);
        assert_eq!(candidates[1].size, 180);
    }
}
