//! Icon candidate model and the conventional-path catalog
//!
//! Candidates come from two sources: links scanned out of the page head, and
//! a fixed catalog of conventional root-relative icon filenames synthesized
//! from the host alone.

/// A URL considered as a possible icon source.
///
/// `classification` keeps the raw origin string (a link tag's `rel` value, or
/// the catalog filename) so that anything naming "apple-touch-icon" takes
/// part in the same preference rule regardless of where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconCandidate {
    /// Absolute URL, https-enforced by whichever component created it
    pub href: String,

    /// Raw origin string used for apple-touch-icon preference matching
    pub classification: String,

    /// Declared pixel dimension, 0 when unknown
    pub size: u32,

    /// Raw response bytes, attached once on fetch success
    pub payload: Option<Vec<u8>>,
}

impl IconCandidate {
    /// Creates a candidate with no payload attached
    pub fn new(href: String, classification: String, size: u32) -> Self {
        Self {
            href,
            classification,
            size,
            payload: None,
        }
    }

    /// Whether this candidate participates in the apple-touch-icon preference
    pub fn is_apple_touch(&self) -> bool {
        self.classification.contains("apple-touch-icon")
    }

    /// Attaches the fetched payload. Called exactly once, by the fetch
    /// coordinator on success; the payload is never mutated afterwards.
    pub fn with_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Conventional root-relative icon filenames, in dispatch order.
const CATALOG: &[&str] = &[
    "apple-touch-icon-180x180.png",
    "apple-touch-icon-180x180-precomposed.png",
    "apple-touch-icon-152x152.png",
    "apple-touch-icon-152x152-precomposed.png",
    "apple-touch-icon-144x144.png",
    "apple-touch-icon-144x144-precomposed.png",
    "apple-touch-icon-120x120.png",
    "apple-touch-icon-120x120-precomposed.png",
    "apple-touch-icon-114x114.png",
    "apple-touch-icon-114x114-precomposed.png",
    "apple-touch-icon-76x76.png",
    "apple-touch-icon-76x76-precomposed.png",
    "apple-touch-icon-72x72.png",
    "apple-touch-icon-72x72-precomposed.png",
    "apple-touch-icon-60x60.png",
    "apple-touch-icon-60x60-precomposed.png",
    "apple-touch-icon-57x57.png",
    "apple-touch-icon-57x57-precomposed.png",
    "apple-touch-icon.png",
    "apple-touch-icon-precomposed.png",
    "touch-icon-192x192.png",
    "touch-icon.png",
    "favicon-256x256.png",
    "favicon-256x256.ico",
    "favicon-96x96.png",
    "favicon-96x96.ico",
    "favicon-48x48.png",
    "favicon-48x48.ico",
    "favicon-32x32.png",
    "favicon-32x32.ico",
    "favicon-16x16.png",
    "favicon-16x16.ico",
    "favicon.png",
    "favicon.ico",
    "msapplication-square558x558logo.png",
    "msapplication-square310x310logo.png",
    "msapplication-square270x270logo.png",
    "msapplication-square150x150logo.png",
    "msapplication-square128x128logo.png",
    "msapplication-square70x70logo.png",
    "mstile-310.png",
    "mstile-270.png",
    "mstile-144.png",
    "mstile-70.png",
];

/// Synthesizes the conventional-path candidates for a host.
///
/// Pure function of the host: no network access. Each entry is classified by
/// its own filename and sized by the leading numeric token before `'x'` in
/// that filename.
///
/// # Examples
///
/// ```
/// use icon_scout::candidates::synthesized_candidates;
///
/// let candidates = synthesized_candidates("example.com");
/// assert!(candidates
///     .iter()
///     .any(|c| c.href == "https://example.com/favicon.ico" && c.size == 0));
/// ```
pub fn synthesized_candidates(host: &str) -> Vec<IconCandidate> {
    CATALOG
        .iter()
        .map(|name| {
            IconCandidate::new(
                format!("https://{}/{}", host, name),
                (*name).to_string(),
                parse_pixel_size(name),
            )
        })
        .collect()
}

/// Parses the leading numeric token before `'x'` out of a sizes attribute or
/// filename, e.g. `"144x144"` → 144, `"favicon-96x96.png"` → 96.
///
/// Returns 0 when no digit run immediately followed by `'x'` exists.
pub fn parse_pixel_size(text: &str) -> u32 {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i < bytes.len() && bytes[i] == b'x' {
                return text[start..i].parse().unwrap_or(0);
            }
        } else {
            i += 1;
        }
    }
    0
}
