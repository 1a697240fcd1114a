//! # News Analyzer
//!
//! Command-line front end: fetches BBC News articles (or reads saved ones),
//! extracts publication metadata, key points, sentiment and linked sites,
//! prints a short summary and optionally saves the full analysis.
//!
//! ## Usage
//!
//! ```sh
//! news_analyzer -u https://www.bbc.co.uk/news/articles/abc123 -o analysis.json
//! news_analyzer -f article.html --source-url https://www.bbc.co.uk/news/a --format text -o report.txt
//! ```
//!
//! ## Architecture
//!
//! 1. **Fetching**: Download each URL (one after another) or read the file
//! 2. **Reduction**: Turn HTML into paragraph text
//! 3. **Analysis**: Run every extractor through the BBC analyzer
//! 4. **Output**: Print a summary, write JSON or a text report

use clap::Parser;
use futures::stream::{self, StreamExt};
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;

use cli::{Cli, OutputFormat};
use news_analyzer::analyzers::{Analyzer, BbcAnalyzer};
use news_analyzer::config::AnalyzerConfig;
use news_analyzer::error::AnalyzerError;
use news_analyzer::fetchers::{Fetch, FileFetcher};
use news_analyzer::html::extract_article_from_html;
use news_analyzer::models::{AnalysisResult, NewsArticle};
use news_analyzer::outputs::json::JsonFormatter;
use news_analyzer::outputs::text::analysis_to_text;
use news_analyzer::text::calculate_text_complexity;
use news_analyzer::utils::{ensure_parent_dir, truncate_for_log};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_analyzer starting up");

    let args = Cli::parse();
    debug!(urls = args.urls.len(), file = ?args.file, "Parsed CLI arguments");

    let config = match &args.config {
        Some(path) => {
            let config = AnalyzerConfig::load(path)?;
            info!(config_path = %path, "Loaded configuration");
            config
        }
        None => AnalyzerConfig::default(),
    };
    let analyzer = BbcAnalyzer::new(&config)?;

    // ---- Fetch ----
    let articles = match &args.file {
        Some(path) => vec![read_article(&analyzer, path, args.source_url.as_deref()).await?],
        None => fetch_articles(&analyzer, &args.urls).await,
    };
    if articles.is_empty() {
        error!("No article could be fetched");
        return Err("no article could be fetched".into());
    }

    // ---- Analyze and report ----
    let total = articles.len();
    for (index, article) in articles.iter().enumerate() {
        let url = reference_url(article, args.source_url.as_deref());
        let result = analyzer.analyze_from_text(&article.content, url);
        info!(index, source = %article.source, "{}", result);

        print_summary(&result);
        if args.complexity {
            print_complexity(&article.content);
        }

        if let Some(output) = &args.output {
            let path = numbered_path(Path::new(output), index, total);
            match save(&result, &path, args.format).await {
                Ok(()) => println!("\nFull analysis saved to: {}", path.display()),
                Err(e) => {
                    error!(path = %path.display(), error = %e, "Failed to save analysis");
                    eprintln!("\nError: could not save analysis to {}: {}", path.display(), e);
                }
            }
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        articles = total,
        "Execution complete"
    );

    Ok(())
}

/// Fetch each URL in turn through the analyzer, reducing the page to
/// article text.
///
/// URLs outside BBC News and failed fetches are logged and skipped.
#[instrument(level = "info", skip_all, fields(count = urls.len()))]
async fn fetch_articles(analyzer: &BbcAnalyzer, urls: &[String]) -> Vec<NewsArticle> {
    let articles: Vec<NewsArticle> = stream::iter(urls)
        .then(|url| async move {
            match analyzer.fetch_article(url).await {
                Ok(article) => {
                    debug!(
                        %url,
                        preview = %truncate_for_log(&article.content, 120),
                        "Fetched article"
                    );
                    Some(article)
                }
                Err(e @ AnalyzerError::UnsupportedSource { .. }) => {
                    warn!(error = %e, %url, "Not a BBC News URL; skipping");
                    None
                }
                Err(e) => {
                    error!(error = %e, %url, "Fetch failed");
                    None
                }
            }
        })
        .filter_map(std::future::ready)
        .collect()
        .await;

    info!(count = articles.len(), "Fetched article contents");
    articles
}

/// Read a saved article, reducing it to text first if it is an HTML page.
#[instrument(level = "info", skip_all, fields(%path))]
async fn read_article(
    analyzer: &BbcAnalyzer,
    path: &str,
    source_url: Option<&str>,
) -> Result<NewsArticle, AnalyzerError> {
    let raw = FileFetcher::new().fetch(path).await?;
    let content = if looks_like_html(&raw) {
        let hint = source_url
            .filter(|u| analyzer.validate_source(u))
            .map(|_| "bbc");
        debug!(?hint, "File is HTML; extracting article text");
        extract_article_from_html(&raw, hint)
    } else {
        raw
    };
    Ok(NewsArticle {
        source: path.to_string(),
        content,
    })
}

fn looks_like_html(content: &str) -> bool {
    let head: String = content.trim_start().chars().take(64).collect();
    let head = head.to_ascii_lowercase();
    head.starts_with("<!doctype html") || head.starts_with("<html")
}

/// The URL recorded in the analysis: the fetched URL, or `--source-url`
/// for files.
fn reference_url<'a>(article: &'a NewsArticle, source_url: Option<&'a str>) -> Option<&'a str> {
    if article.source.starts_with("http://") || article.source.starts_with("https://") {
        Some(article.source.as_str())
    } else {
        source_url
    }
}

/// With several results, `report.json` becomes `report-1.json`, `report-2.json`, ...
fn numbered_path(path: &Path, index: usize, total: usize) -> PathBuf {
    if total <= 1 {
        return path.to_path_buf();
    }
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}-{}.{}", stem, index + 1, ext.to_string_lossy()),
        None => format!("{}-{}", stem, index + 1),
    };
    path.with_file_name(name)
}

async fn save(
    result: &AnalysisResult,
    path: &Path,
    format: OutputFormat,
) -> Result<(), AnalyzerError> {
    match format {
        OutputFormat::Json => JsonFormatter::default().save_to_file(result, path).await,
        OutputFormat::Text => {
            ensure_parent_dir(path).await?;
            tokio::fs::write(path, analysis_to_text(result))
                .await
                .map_err(|e| AnalyzerError::io(path.display().to_string(), e))?;
            info!(path = %path.display(), "Wrote text report");
            Ok(())
        }
    }
}

fn print_summary(result: &AnalysisResult) {
    let publication = &result.publication;
    println!("\nAnalysis Results:");
    println!("{}", "-".repeat(50));
    println!("Source: {}", result.response.source_name);
    println!("Date: {}", publication.publication_date);
    println!("Sentiment: {}", publication.publication_sentiment.join(", "));
    println!("\nKey Points:");
    for (i, point) in publication.publication_keypoints.iter().enumerate() {
        println!("{}. {}", i + 1, point);
    }
}

fn print_complexity(content: &str) {
    let complexity = calculate_text_complexity(content);
    println!("\nText Complexity:");
    println!("Sentences: {}", complexity.sentence_count);
    println!("Words: {}", complexity.word_count);
    println!("Average sentence length: {:.1} words", complexity.avg_sentence_length);
    println!("Flesch Reading Ease: {:.1}", complexity.flesch_reading_ease);
    println!("Readability: {}", complexity.readability_level);
}
