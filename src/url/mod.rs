//! Input URL normalization
//!
//! Validates and repairs the URL a resolution call starts from: a missing
//! scheme is defaulted, http is upgraded to https, anything else is rejected.

use crate::{UrlError, UrlResult};
use url::{ParseError, Url};

/// Normalizes a raw input URL into the target of a resolution session.
///
/// # Rules
///
/// 1. A bare hostname such as `example.com` (no scheme) is repaired by
///    prefixing `https://`.
/// 2. An `http` scheme is rewritten to `https`, preserving host, path, and
///    query.
/// 3. Any other scheme fails with [`UrlError::InvalidScheme`].
/// 4. The URL must carry a resolvable host, else [`UrlError::MissingHost`].
///
/// Callers may percent-encode the input beforehand; this function performs no
/// character-encoding conversion of its own.
///
/// # Returns
///
/// The normalized URL together with its owned host string.
///
/// # Examples
///
/// ```
/// use icon_scout::url::normalize_target;
///
/// let (url, host) = normalize_target("http://example.com/about?tab=1").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/about?tab=1");
/// assert_eq!(host, "example.com");
/// ```
pub fn normalize_target(raw: &str) -> UrlResult<(Url, String)> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Parse("empty URL".to_string()));
    }

    let mut url = match Url::parse(trimmed) {
        Ok(url) => url,
        Err(ParseError::RelativeUrlWithoutBase) => {
            // No scheme at all; default to https.
            Url::parse(&format!("https://{}", trimmed))
                .map_err(|e| UrlError::Parse(e.to_string()))?
        }
        Err(e) => return Err(UrlError::Parse(e.to_string())),
    };

    match url.scheme() {
        "https" => {}
        "http" => {
            url.set_scheme("https")
                .map_err(|_| UrlError::InvalidScheme("http".to_string()))?;
        }
        other => return Err(UrlError::InvalidScheme(other.to_string())),
    }

    let host = url.host_str().ok_or(UrlError::MissingHost)?.to_string();

    Ok((url, host))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_rewritten_to_https() {
        let (url, host) = normalize_target("http://example.com/a/b?q=1").unwrap();
        assert_eq!(url.as_str(), "https://example.com/a/b?q=1");
        assert_eq!(host, "example.com");
    }

    #[test]
    fn test_https_passes_through() {
        let (url, _) = normalize_target("https://example.com/page").unwrap();
        assert_eq!(url.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_bare_hostname_gets_https() {
        let (url, host) = normalize_target("example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
        assert_eq!(host, "example.com");
    }

    #[test]
    fn test_ftp_scheme_rejected() {
        let result = normalize_target("ftp://example.com/icon.png");
        assert!(matches!(result, Err(UrlError::InvalidScheme(_))));
    }

    #[test]
    fn test_mailto_scheme_rejected() {
        let result = normalize_target("mailto:admin@example.com");
        assert!(matches!(result, Err(UrlError::InvalidScheme(_))));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(normalize_target("   ").is_err());
    }

    #[test]
    fn test_garbage_input_rejected() {
        // Repaired to "https://not a url", which still fails to parse.
        assert!(normalize_target("not a url").is_err());
    }

    #[test]
    fn test_path_and_query_preserved() {
        let (url, _) = normalize_target("http://x.com/deep/path?a=1&b=2").unwrap();
        assert_eq!(url.path(), "/deep/path");
        assert_eq!(url.query(), Some("a=1&b=2"));
    }
}
