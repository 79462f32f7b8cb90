//! Per-call session state and the concurrent fetch fan-out
//!
//! Every dispatched fetch reports exactly one terminal outcome over a channel
//! to a single receiving loop, so the completion counter and the running best
//! are only ever touched from one task. Fan-out is unbounded: a session
//! commonly dispatches several dozen fetches at once.

use crate::candidates::IconCandidate;
use crate::resolver::Selector;
use reqwest::{Client, StatusCode};
use tokio::sync::{mpsc, watch};
use url::Url;

/// Complete per-call resolution state: target URL and host, the combined
/// candidate list, and the cancellation signal shared with any superseding
/// call. The completion counter and running best live inside
/// [`Session::fetch_and_select`].
pub struct Session {
    url: Url,
    host: String,
    candidates: Vec<IconCandidate>,
    cancelled: watch::Receiver<bool>,
}

impl Session {
    pub(crate) fn new(url: Url, host: String, cancelled: watch::Receiver<bool>) -> Self {
        Self {
            url,
            host,
            candidates: Vec::new(),
            cancelled,
        }
    }

    /// The normalized URL this session resolves
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The target host
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Appends candidates to the session's fetch list. The orchestrator
    /// pushes scanned candidates first, synthesized ones after.
    pub fn push_candidates(&mut self, more: Vec<IconCandidate>) {
        self.candidates.extend(more);
    }

    /// Fetches every candidate concurrently and reduces the successful
    /// responses to the preferred one.
    ///
    /// Candidates whose href does not parse are dropped from the dispatch set
    /// and the completion denominator; nothing ever waits on them. Each
    /// dispatched fetch counts toward completion on its terminal outcome —
    /// success, non-200 status, transport error, or timeout — and only an
    /// exact 200 with a non-empty body reaches the selector. The session
    /// completes when every dispatched fetch has terminated, or immediately
    /// with no selection when a newer session cancels it.
    pub async fn fetch_and_select(mut self, client: &Client) -> Option<IconCandidate> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut dispatched = 0usize;

        for candidate in std::mem::take(&mut self.candidates) {
            let target = match Url::parse(&candidate.href) {
                Ok(target) => target,
                Err(e) => {
                    tracing::debug!("Dropping unparsable candidate {}: {}", candidate.href, e);
                    continue;
                }
            };

            dispatched += 1;
            let client = client.clone();
            let tx = tx.clone();
            let mut cancelled = self.cancelled.clone();
            tokio::spawn(async move {
                tokio::select! {
                    _ = cancelled.changed() => {}
                    outcome = fetch_candidate(&client, target, candidate) => {
                        let _ = tx.send(outcome);
                    }
                }
            });
        }
        drop(tx);

        tracing::debug!("Dispatched {} candidate fetches for {}", dispatched, self.host);

        let mut selector = Selector::new();
        let mut completed = 0usize;
        while completed < dispatched {
            tokio::select! {
                _ = self.cancelled.changed() => {
                    tracing::debug!(
                        "Session for {} superseded with {} fetches outstanding",
                        self.host,
                        dispatched - completed
                    );
                    return None;
                }
                delivered = rx.recv() => match delivered {
                    Some(Some(success)) => {
                        completed += 1;
                        selector.offer(success);
                    }
                    Some(None) => completed += 1,
                    // The channel only closes before completion when
                    // cancellation made the remaining tasks drop their
                    // senders without reporting; a superseded session must
                    // not report the best accumulated so far.
                    None => return None,
                },
            }
        }

        selector.into_best()
    }
}

/// Runs one candidate fetch to its terminal outcome.
///
/// Only an exact `200 OK` with a non-empty body produces a populated
/// candidate; any other status, transport error, or timeout yields `None`.
async fn fetch_candidate(
    client: &Client,
    target: Url,
    candidate: IconCandidate,
) -> Option<IconCandidate> {
    match client.get(target).send().await {
        Ok(response) => {
            let status = response.status();
            if status != StatusCode::OK {
                tracing::trace!("Candidate {} answered {}", candidate.href, status);
                return None;
            }

            match response.bytes().await {
                Ok(body) if !body.is_empty() => Some(candidate.with_payload(body.to_vec())),
                Ok(_) => {
                    tracing::trace!("Candidate {} answered 200 with an empty body", candidate.href);
                    None
                }
                Err(e) => {
                    tracing::trace!("Candidate {} body read failed: {}", candidate.href, e);
                    None
                }
            }
        }
        Err(e) if e.is_timeout() => {
            tracing::trace!("Candidate {} timed out", candidate.href);
            None
        }
        Err(e) => {
            tracing::trace!("Candidate {} fetch failed: {}", candidate.href, e);
            None
        }
    }
}
