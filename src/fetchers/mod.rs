//! Content fetchers for article sources.
//!
//! Each fetcher turns a source reference (a URL, a file path) into the raw
//! document text. Turning HTML into article text is the job of
//! [`crate::html`], not of the fetchers.
//!
//! | Fetcher | Module | Source |
//! |---------|--------|--------|
//! | [`WebFetcher`] | [`web`] | `http(s)` URLs via reqwest |
//! | [`FileFetcher`] | [`file`] | Local files via tokio::fs |

pub mod file;
pub mod web;

pub use file::{FileFetcher, FileMetadata};
pub use web::{FetchedPage, WebFetcher};

use crate::error::AnalyzerError;

/// Something that can retrieve document text from a source reference.
pub trait Fetch {
    /// Fetch the full content behind `source`.
    async fn fetch(&self, source: &str) -> Result<String, AnalyzerError>;
}
