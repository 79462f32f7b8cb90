//! Resolver configuration
//!
//! Icon-Scout keeps no config files, environment variables, or persisted
//! state; configuration is an in-process struct with sensible defaults.
//! The serde derive lets embedding applications deserialize it from their
//! own settings format.

use serde::Deserialize;
use std::time::Duration;

/// User agent sent with the head document request.
///
/// A mobile Safari string: many sites only declare their apple-touch-icon
/// links when they believe an iOS browser is asking.
pub const HEAD_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 12_1 like Mac OS X) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/12.0 Mobile/15E148 Safari/604.1";

/// Tunable settings for an [`crate::IconResolver`]
///
/// The per-request timeout applies to every fetch a session dispatches, so a
/// hung connection counts as a terminal outcome instead of stalling the whole
/// resolution.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Per-request timeout in seconds for the head fetch and every candidate fetch
    pub request_timeout_secs: u64,

    /// Connection establishment timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 10,
            connect_timeout_secs: 10,
        }
    }
}

impl ResolverConfig {
    /// Per-request timeout as a [`Duration`]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Connect timeout as a [`Duration`]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
