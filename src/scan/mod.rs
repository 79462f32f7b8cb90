//! Head retrieval and icon link scanning
//!
//! This module covers the scanned-candidate half of resolution:
//! - Fetching the raw HTML of the target page
//! - Bounding the document to its head element
//! - Extracting declared icon links from the bounded markup
//!
//! Every failure here is non-fatal: resolution proceeds with the synthesized
//! candidates alone.

mod extract;
mod fetcher;
mod links;

pub use extract::bound_head;
pub use fetcher::fetch_head_document;
pub use links::scan_icon_links;
