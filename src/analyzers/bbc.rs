//! BBC News analyzer.
//!
//! Understands BBC article pages (headline, `<article>` body, metadata strip)
//! and BBC dateline conventions such as `Published 27 February 2025, 08:37 GMT`.

use tracing::{info, instrument, warn};

use super::Analyzer;
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::extractors::key_points::KeyPointsExtractor;
use crate::extractors::publication::PublicationInfoExtractor;
use crate::extractors::sentiment::SentimentAnalyzer;
use crate::extractors::urls;
use crate::fetchers::WebFetcher;
use crate::html::extract_article_from_html;
use crate::models::{AnalysisResult, NewsArticle, PublicationSection, ResponseSection};
use crate::utils::{analysis_date, host_of};

const SOURCE_NAME: &str = "BBC News";
const SOURCE_EVALUATION: &str = "Established news organization with strong journalistic standards";
const SOURCE_CREDIBILITY: &str =
    "High - BBC is a reputable public service broadcaster with extensive fact-checking processes";
const SOURCE_PERSPECTIVE: &str = "Factual reporting with balanced perspectives";

const DATE_NOT_FOUND: &str = "Date not found";
const SUMMARY_NOT_AVAILABLE: &str = "Summary not available";

/// Analyzer for BBC News articles.
#[derive(Debug, Clone)]
pub struct BbcAnalyzer {
    publication: PublicationInfoExtractor,
    key_points: KeyPointsExtractor,
    sentiment: SentimentAnalyzer,
    fetcher: WebFetcher,
    analysis_date: String,
}

impl BbcAnalyzer {
    /// Build an analyzer dated today.
    pub fn new(config: &AnalyzerConfig) -> Result<Self, AnalyzerError> {
        Ok(Self {
            publication: PublicationInfoExtractor::new(),
            key_points: KeyPointsExtractor::new(config.key_points.clone()),
            sentiment: SentimentAnalyzer::new(&config.sentiment),
            fetcher: WebFetcher::new(&config.fetch)?,
            analysis_date: analysis_date(),
        })
    }

    /// Override the date stamped into `response.query_datetime`.
    pub fn with_analysis_date(mut self, date: impl Into<String>) -> Self {
        self.analysis_date = date.into();
        self
    }

    /// Download a BBC article page and reduce it to article text.
    ///
    /// # Arguments
    ///
    /// * `url` - Address of a page on `bbc.co.uk` or `bbc.com`
    ///
    /// # Returns
    ///
    /// A [`NewsArticle`] whose `source` is `url` and whose `content` is the
    /// headline, body paragraphs and metadata strip separated by blank lines.
    ///
    /// # Errors
    ///
    /// [`AnalyzerError::UnsupportedSource`] for other hosts, otherwise any
    /// error from the web fetcher.
    #[instrument(level = "info", skip_all, fields(%url))]
    pub async fn fetch_article(&self, url: &str) -> Result<NewsArticle, AnalyzerError> {
        if !self.validate_source(url) {
            return Err(AnalyzerError::UnsupportedSource {
                analyzer: SOURCE_NAME,
                url: url.to_string(),
            });
        }

        let page = self.fetcher.fetch_with_metadata(url).await?;
        Ok(NewsArticle {
            source: url.to_string(),
            content: extract_article_from_html(&page.content, Some("bbc")),
        })
    }
}

impl Analyzer for BbcAnalyzer {
    #[instrument(level = "info", skip_all, fields(url = url.unwrap_or("-")))]
    fn analyze_from_text(&self, text: &str, url: Option<&str>) -> AnalysisResult {
        if let Some(u) = url {
            if !self.validate_source(u) {
                warn!(url = %u, "URL is not from BBC News; analyzing anyway");
            }
        }

        let extracted_urls = urls::extract(text);
        let key_points = self.key_points.extract_default(text);
        let sentiment = self.sentiment.analyze(text);
        let info = self.publication.extract(text, url);

        info!(
            urls = extracted_urls.len(),
            key_points = key_points.len(),
            date_found = info.date.is_some(),
            "Analyzed article text"
        );

        AnalysisResult {
            response: ResponseSection {
                query_datetime: self.analysis_date.clone(),
                source_name: SOURCE_NAME.to_string(),
                source_evaluation: SOURCE_EVALUATION.to_string(),
                source_credibility: SOURCE_CREDIBILITY.to_string(),
                source_perspective: SOURCE_PERSPECTIVE.to_string(),
                extracted_urls,
            },
            publication: PublicationSection {
                publication_url: info.url,
                publication_date: info.date.unwrap_or_else(|| DATE_NOT_FOUND.to_string()),
                publication_summary: info
                    .summary
                    .unwrap_or_else(|| SUMMARY_NOT_AVAILABLE.to_string()),
                publication_keypoints: key_points,
                publication_sentiment: sentiment.labels,
                sentiment_analysis: sentiment.analysis,
            },
        }
    }

    async fn analyze_from_url(&self, url: &str) -> Result<AnalysisResult, AnalyzerError> {
        let article = self.fetch_article(url).await?;
        Ok(self.analyze_from_text(&article.content, Some(url)))
    }

    fn validate_source(&self, url: &str) -> bool {
        host_of(url).is_some_and(|host| host.contains("bbc.co.uk") || host.contains("bbc.com"))
    }
}
