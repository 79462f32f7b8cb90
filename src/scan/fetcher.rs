//! Head document retrieval

use crate::config::HEAD_USER_AGENT;
use crate::ScanError;
use reqwest::{header, Client};
use url::Url;

/// Fetches the raw HTML of the target page.
///
/// Issues one GET with the mobile Safari user agent from
/// [`crate::config::HEAD_USER_AGENT`]; candidate fetches elsewhere use the
/// client's default headers. The body is decoded with the response's declared
/// charset, falling back to UTF-8.
///
/// Any status that yields a body is scanned — an error page's markup can
/// still declare icon links. Transport errors and empty bodies are reported
/// as [`ScanError`], which the orchestrator recovers from by proceeding with
/// zero scanned candidates.
pub async fn fetch_head_document(client: &Client, url: &Url) -> Result<String, ScanError> {
    let response = client
        .get(url.clone())
        .header(header::USER_AGENT, HEAD_USER_AGENT)
        .send()
        .await
        .map_err(|e| ScanError::Http {
            url: url.to_string(),
            source: e,
        })?;

    let body = response.text().await.map_err(|e| ScanError::Http {
        url: url.to_string(),
        source: e,
    })?;

    if body.is_empty() {
        return Err(ScanError::EmptyBody {
            url: url.to_string(),
        });
    }

    Ok(body)
}
