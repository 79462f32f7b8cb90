//! Head element bounding
//!
//! Before the markup scanner runs, the fetched document is truncated to its
//! head element. This caps parser work on large pages and is the scanner's
//! early exit: nothing past `</head>` is ever inspected.

/// Bounds a document to its head element.
///
/// Scans for the literal `"<head"`; an occurrence only qualifies if the next
/// character is `'>'` or whitespace, which keeps `<header>` from matching.
/// On a qualifying occurrence, returns the slice from it through the first
/// subsequent `"</head>"` inclusive (or the rest of the document when the
/// closing tag never appears). Without a qualifying occurrence the full
/// document passes through unchanged.
pub fn bound_head(document: &str) -> &str {
    const OPEN: &str = "<head";
    const CLOSE: &str = "</head>";

    let mut search_from = 0;
    while let Some(found) = document[search_from..].find(OPEN) {
        let start = search_from + found;
        let after = start + OPEN.len();

        let qualifies = matches!(
            document[after..].chars().next(),
            Some(c) if c == '>' || c.is_whitespace()
        );
        if !qualifies {
            search_from = after;
            continue;
        }

        return match document[after..].find(CLOSE) {
            Some(close) => &document[start..after + close + CLOSE.len()],
            None => &document[start..],
        };
    }

    document
}
