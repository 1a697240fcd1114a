//! Data models for articles and their analysis.
//!
//! This module defines the core data structures used throughout the crate:
//! - [`NewsArticle`]: Raw article text together with where it came from
//! - [`PublicationInfo`]: Date, author and summary recovered from article text
//! - [`AnalysisResult`]: The full standardized record, split into a
//!   [`ResponseSection`] (about the source) and a [`PublicationSection`]
//!   (about the article itself)
//!
//! Field names follow the JSON layout consumers already expect, so the serde
//! representation is the public contract.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder stored in [`PublicationInfo::url`] when no URL is known.
pub const URL_NOT_PROVIDED: &str = "URL not provided";

/// A raw news article, already reduced to plain text.
///
/// # Fields
///
/// * `source` - The URL or file path the article was read from
/// * `content` - The plain-text article body
#[derive(Debug, Clone)]
pub struct NewsArticle {
    /// Where the article was read from.
    pub source: String,
    /// The plain-text content of the article.
    pub content: String,
}

/// Publication metadata recovered from article text.
///
/// Absent fields are omitted when serialized, so a text with nothing
/// recognizable serializes to `{"url": "..."}`.
///
/// `date` and `update` never coexist: when both are found the update is
/// folded into `date` as `"<date> (Updated <info>)"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PublicationInfo {
    /// Source URL, or [`URL_NOT_PROVIDED`].
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl PublicationInfo {
    /// A record carrying only the URL (or the placeholder).
    pub fn new(url: Option<&str>) -> Self {
        Self {
            url: url.unwrap_or(URL_NOT_PROVIDED).to_string(),
            date: None,
            update: None,
            author: None,
            summary: None,
        }
    }
}

/// Information about the outlet and the analysis run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResponseSection {
    /// When the analysis ran, formatted like `"February 27, 2025"`.
    pub query_datetime: String,
    pub source_name: String,
    pub source_evaluation: String,
    pub source_credibility: String,
    pub source_perspective: String,
    /// Unique base URLs (`scheme://host`) referenced by the article.
    pub extracted_urls: Vec<String>,
}

/// Information about the article itself.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PublicationSection {
    pub publication_url: String,
    pub publication_date: String,
    pub publication_summary: String,
    pub publication_keypoints: Vec<String>,
    pub publication_sentiment: Vec<String>,
    pub sentiment_analysis: Vec<String>,
}

/// The standardized analysis record for one article.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub response: ResponseSection,
    pub publication: PublicationSection,
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = if self.response.source_name.is_empty() {
            "unknown source"
        } else {
            &self.response.source_name
        };
        let date = if self.publication.publication_date.is_empty() {
            "unknown date"
        } else {
            &self.publication.publication_date
        };
        write!(f, "Analysis of {}, published on {}", source, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_article_creation() {
        let article = NewsArticle {
            source: "https://www.bbc.co.uk/news/articles/abc".to_string(),
            content: "Test content".to_string(),
        };
        assert_eq!(article.source, "https://www.bbc.co.uk/news/articles/abc");
        assert_eq!(article.content, "Test content");
    }

    #[test]
    fn test_publication_info_placeholder_url() {
        let info = PublicationInfo::new(None);
        assert_eq!(info.url, URL_NOT_PROVIDED);
        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(json, r#"{"url":"URL not provided"}"#);
    }

    #[test]
    fn test_publication_info_skips_absent_fields() {
        let info = PublicationInfo {
            url: "https://example.com/a".to_string(),
            date: Some("27 February 2025, 08:37 GMT".to_string()),
            update: None,
            author: Some("Jane Doe".to_string()),
            summary: None,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["date"], "27 February 2025, 08:37 GMT");
        assert_eq!(json["author"], "Jane Doe");
        assert!(json.get("update").is_none());
        assert!(json.get("summary").is_none());
    }

    #[test]
    fn test_analysis_result_deserialization_fills_defaults() {
        let json = r#"{
            "response": { "source_name": "BBC News" },
            "publication": { "publication_date": "27 February 2025" }
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.response.source_name, "BBC News");
        assert!(result.response.extracted_urls.is_empty());
        assert_eq!(result.publication.publication_date, "27 February 2025");
        assert!(result.publication.publication_keypoints.is_empty());
    }

    #[test]
    fn test_analysis_result_display() {
        let mut result = AnalysisResult::default();
        assert_eq!(
            result.to_string(),
            "Analysis of unknown source, published on unknown date"
        );

        result.response.source_name = "BBC News".to_string();
        result.publication.publication_date = "27 February 2025".to_string();
        assert_eq!(
            result.to_string(),
            "Analysis of BBC News, published on 27 February 2025"
        );
    }
}
