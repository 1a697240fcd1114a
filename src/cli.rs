//! Command-line interface definitions for News Analyzer.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Either one or more article URLs or a single local file must be given.

use clap::{ArgGroup, Parser, ValueEnum};

/// Format used when saving an analysis with `--output`.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// Command-line arguments for the News Analyzer application.
///
/// # Examples
///
/// ```sh
/// # Analyze a BBC article and print a summary
/// news_analyzer -u https://www.bbc.co.uk/news/articles/abc123
///
/// # Analyze a saved article and write a text report
/// news_analyzer -f article.txt --source-url https://www.bbc.co.uk/news/a -o report.txt --format text
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
#[command(group(ArgGroup::new("input").required(true).args(["urls", "file"])))]
pub struct Cli {
    /// Article URL to analyze (repeatable)
    #[arg(short, long = "url", value_name = "URL")]
    pub urls: Vec<String>,

    /// Local file containing article text or HTML
    #[arg(short, long)]
    pub file: Option<String>,

    /// Original URL of the article read with --file
    #[arg(long, requires = "file")]
    pub source_url: Option<String>,

    /// File to save the analysis to
    #[arg(short, long)]
    pub output: Option<String>,

    /// Format of the saved analysis
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Optional path to a config.yaml file
    #[arg(short, long, env = "NEWS_ANALYZER_CONFIG")]
    pub config: Option<String>,

    /// Also report text complexity metrics
    #[arg(long)]
    pub complexity: bool,
}
