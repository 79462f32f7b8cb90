//! Resolution orchestration
//!
//! This module sequences a resolution call end to end:
//! - Normalize the input URL
//! - Fetch the page head and scan it for declared icon links (non-fatal)
//! - Append the synthesized conventional-path candidates
//! - Fetch all candidates concurrently and select the best response
//! - Decode the selected payload as an image
//!
//! A call always completes with either an icon or an explicit absence; only
//! an invalid input URL surfaces as an error.

mod coordinator;
mod selector;

pub use coordinator::Session;
pub use selector::Selector;

use crate::candidates::{synthesized_candidates, IconCandidate};
use crate::config::ResolverConfig;
use crate::scan::{bound_head, fetch_head_document, scan_icon_links};
use crate::url::normalize_target;
use crate::Result;
use image::DynamicImage;
use reqwest::Client;
use std::sync::Mutex;
use tokio::sync::watch;
use url::Url;

/// The decoded outcome of a successful resolution
#[derive(Debug)]
pub struct ResolvedIcon {
    /// Decoded image, ready for presentation
    pub image: DynamicImage,

    /// URL the winning payload was fetched from
    pub source: String,
}

/// Result of one resolution call: the selected icon, if any, plus the raw
/// head document retained for reuse by other collaborators.
#[derive(Debug)]
pub struct Resolution {
    /// The best available icon, or `None` when no candidate succeeded or the
    /// selected payload did not decode
    pub icon: Option<ResolvedIcon>,

    /// Raw HTML of the target page, when the head fetch succeeded
    pub page_html: Option<String>,
}

/// Resolves the best available icon for a site.
///
/// Owns one HTTP client and the cancellation handle of the currently active
/// session. Starting a new resolution abandons all in-flight fetches of the
/// previous one, so no stale completion is ever observed by a newer call.
pub struct IconResolver {
    client: Client,
    active: Mutex<Option<watch::Sender<bool>>>,
}

impl IconResolver {
    /// Creates a resolver with its own HTTP client
    pub fn new(config: &ResolverConfig) -> Result<Self> {
        Ok(Self {
            client: build_http_client(config)?,
            active: Mutex::new(None),
        })
    }

    /// The resolver's HTTP client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Creates a fresh session for the given target, cancelling the previous
    /// session's in-flight fetches coarsely (abandon-all).
    pub fn begin_session(&self, url: Url, host: String) -> Session {
        let (cancel_tx, cancel_rx) = watch::channel(false);

        let mut active = self.active.lock().unwrap();
        if let Some(previous) = active.replace(cancel_tx) {
            let _ = previous.send(true);
        }
        drop(active);

        Session::new(url, host, cancel_rx)
    }

    /// Resolves the best available icon for `raw_url`.
    ///
    /// Fails fast only on an invalid input URL. Everything after
    /// normalization degrades instead of erroring: a failed head fetch means
    /// probing the conventional paths alone, and zero successful candidates
    /// or an undecodable payload mean a resolution with `icon: None`.
    pub async fn resolve(&self, raw_url: &str) -> Result<Resolution> {
        let (url, host) = normalize_target(raw_url)?;
        tracing::info!("Resolving icon for {}", host);

        let mut session = self.begin_session(url.clone(), host.clone());

        let mut page_html = None;
        match fetch_head_document(&self.client, &url).await {
            Ok(document) => {
                let scanned = scan_icon_links(bound_head(&document), &url);
                tracing::debug!("Scanned {} declared icon links from {}", scanned.len(), url);
                session.push_candidates(scanned);
                page_html = Some(document);
            }
            Err(e) => {
                tracing::debug!(
                    "Head fetch failed for {}: {}; probing conventional paths only",
                    url,
                    e
                );
            }
        }
        session.push_candidates(synthesized_candidates(&host));

        let best = session.fetch_and_select(&self.client).await;
        let icon = best.and_then(decode_icon);
        if icon.is_none() {
            tracing::info!("No icon found for {}", host);
        }

        Ok(Resolution { icon, page_html })
    }
}

/// Builds the HTTP client shared by the head fetch and all candidate fetches.
///
/// The per-request timeout makes a hung connection a terminal outcome, so a
/// session can never wait on a fetch forever.
pub fn build_http_client(config: &ResolverConfig) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(config.request_timeout())
        .connect_timeout(config.connect_timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Decodes the selected payload, treating undecodable bytes as "no icon"
fn decode_icon(candidate: IconCandidate) -> Option<ResolvedIcon> {
    let payload = candidate.payload?;
    match image::load_from_memory(&payload) {
        Ok(image) => {
            tracing::debug!("Selected icon {} ({} bytes)", candidate.href, payload.len());
            Some(ResolvedIcon {
                image,
                source: candidate.href,
            })
        }
        Err(e) => {
            tracing::debug!(
                "Payload from {} is not a decodable image: {}",
                candidate.href,
                e
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes() -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(image::RgbaImage::new(1, 1));
        let mut buf = std::io::Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png)
            .expect("encode png");
        buf.into_inner()
    }

    #[test]
    fn test_decode_icon_accepts_png_payload() {
        let candidate =
            IconCandidate::new("https://x.com/i.png".to_string(), "icon".to_string(), 0)
                .with_payload(png_bytes());
        let resolved = decode_icon(candidate).expect("png should decode");
        assert_eq!(resolved.source, "https://x.com/i.png");
    }

    #[test]
    fn test_decode_icon_rejects_non_image_payload() {
        let candidate =
            IconCandidate::new("https://x.com/i.png".to_string(), "icon".to_string(), 0)
                .with_payload(b"<html>404 not found</html>".to_vec());
        assert!(decode_icon(candidate).is_none());
    }

    #[test]
    fn test_decode_icon_without_payload_is_none() {
        let candidate =
            IconCandidate::new("https://x.com/i.png".to_string(), "icon".to_string(), 0);
        assert!(decode_icon(candidate).is_none());
    }

    #[tokio::test]
    async fn test_resolve_rejects_invalid_scheme() {
        let resolver = IconResolver::new(&ResolverConfig::default()).unwrap();
        assert!(resolver.resolve("ftp://example.com").await.is_err());
    }
}
