//! Source-aware article analyzers.
//!
//! An analyzer knows how a particular outlet structures its pages and what
//! to say about the outlet itself, and runs every extractor to produce an
//! [`AnalysisResult`].

pub mod bbc;

pub use bbc::BbcAnalyzer;

use crate::error::AnalyzerError;
use crate::models::AnalysisResult;

/// Common interface for per-source analyzers.
pub trait Analyzer {
    /// Analyze already-extracted article text.
    fn analyze_from_text(&self, text: &str, url: Option<&str>) -> AnalysisResult;

    /// Fetch the article at `url`, reduce it to text and analyze it.
    async fn analyze_from_url(&self, url: &str) -> Result<AnalysisResult, AnalyzerError>;

    /// Whether `url` belongs to a source this analyzer handles.
    fn validate_source(&self, _url: &str) -> bool {
        true
    }
}
