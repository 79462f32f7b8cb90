//! Icon-Scout: best-available site icon resolution
//!
//! Given a site's URL, this crate discovers the best available icon by
//! scanning the page's head markup for declared icon links, probing a catalog
//! of conventional icon paths, fetching every candidate concurrently, and
//! selecting the highest-quality response under a deterministic preference
//! rule.

pub mod candidates;
pub mod config;
pub mod resolver;
pub mod scan;
pub mod url;

use thiserror::Error;

/// Main error type for Icon-Scout operations
#[derive(Debug, Error)]
pub enum IconError {
    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Errors rejecting the input URL.
///
/// These are the only errors a resolution call ever surfaces; every later
/// failure degrades to a "no icon" result instead.
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Errors raised while retrieving the page's head document.
///
/// Always recovered from: the session falls back to probing the conventional
/// icon paths alone.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Empty response body for {url}")]
    EmptyBody { url: String },
}

/// Result type alias for Icon-Scout operations
pub type Result<T> = std::result::Result<T, IconError>;

/// Result type alias for URL normalization
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use candidates::{synthesized_candidates, IconCandidate};
pub use config::ResolverConfig;
pub use resolver::{IconResolver, Resolution, ResolvedIcon, Selector, Session};
pub use url::normalize_target;
