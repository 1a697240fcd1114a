//! # News Analyzer
//!
//! Pulls structured metadata out of news article text: publication date,
//! author, summary, key points, sentiment and linked sites.
//!
//! ## Usage
//!
//! ```
//! use news_analyzer::extract;
//!
//! let text = "Published 27 February 2025, 08:37 GMT\nBy Jane Doe\n\nShort.";
//! let info = extract(text, Some("https://www.bbc.co.uk/news/a"));
//! assert_eq!(info.date.as_deref(), Some("27 February 2025, 08:37 GMT"));
//! assert_eq!(info.author.as_deref(), Some("Jane Doe"));
//! ```
//!
//! ## Architecture
//!
//! 1. **Fetching**: [`fetchers`] read a page or file
//! 2. **Reduction**: [`html`] turns markup into paragraph text
//! 3. **Extraction**: [`extractors`] each recover one kind of field
//! 4. **Analysis**: [`analyzers`] combine everything into an [`AnalysisResult`]
//! 5. **Output**: [`outputs`] write JSON or a plain-text report

pub mod analyzers;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod html;
pub mod models;
pub mod outputs;
pub mod text;
pub mod utils;

pub use analyzers::{Analyzer, BbcAnalyzer};
pub use config::AnalyzerConfig;
pub use error::AnalyzerError;
pub use extractors::publication::{PatternSet, PublicationInfoExtractor, extract};
pub use models::{AnalysisResult, NewsArticle, PublicationInfo};
