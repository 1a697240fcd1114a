//! Rule-based sentiment analysis by term frequency.
//!
//! Counts occurrences of positive, negative and neutral reporting terms and
//! maps the counts onto a small set of tone labels plus one-line explanations.

use serde::Serialize;
use tracing::debug;

use crate::config::SentimentConfig;

/// Threshold a category count must exceed to earn its label.
const STRONG_SIGNAL: usize = 5;

/// Tone labels and the statements explaining them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SentimentReport {
    pub labels: Vec<String>,
    pub analysis: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TermCounts {
    positive: usize,
    negative: usize,
    neutral: usize,
}

/// Term-frequency sentiment analyzer.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    positive: Vec<String>,
    negative: Vec<String>,
    neutral: Vec<String>,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new(&SentimentConfig::default())
    }
}

fn lowercase_all(terms: &[String]) -> Vec<String> {
    terms.iter().map(|t| t.to_lowercase()).collect()
}

/// Total non-overlapping occurrences of every term in `haystack`.
fn count_terms(haystack: &str, terms: &[String]) -> usize {
    terms
        .iter()
        .filter(|t| !t.is_empty())
        .map(|t| haystack.matches(t.as_str()).count())
        .sum()
}

impl SentimentAnalyzer {
    /// Create an analyzer from the configured term lists. Terms are matched
    /// case-insensitively.
    pub fn new(config: &SentimentConfig) -> Self {
        Self {
            positive: lowercase_all(&config.positive_terms),
            negative: lowercase_all(&config.negative_terms),
            neutral: lowercase_all(&config.neutral_terms),
        }
    }

    /// Label the overall tone of `text` and explain it.
    pub fn analyze(&self, text: &str) -> SentimentReport {
        let lower = text.to_lowercase();
        let counts = TermCounts {
            positive: count_terms(&lower, &self.positive),
            negative: count_terms(&lower, &self.negative),
            neutral: count_terms(&lower, &self.neutral),
        };
        let memorial = lower.contains("obituary") || lower.contains("tribute");

        let mut labels = Vec::new();
        if counts.positive > STRONG_SIGNAL {
            labels.push(if memorial { "Commemorative" } else { "Positive" });
        }
        if counts.negative > STRONG_SIGNAL {
            let somber = lower.contains("died") || lower.contains("death");
            labels.push(if somber { "Somber" } else { "Negative" });
        }
        if counts.neutral > counts.positive && counts.neutral > counts.negative {
            labels.push("Factual");
        }
        if memorial {
            labels.push("Respectful");
        }
        if labels.is_empty() {
            labels = vec!["Neutral", "Factual"];
        }

        debug!(
            positive = counts.positive,
            negative = counts.negative,
            neutral = counts.neutral,
            ?labels,
            "Scored sentiment"
        );

        let analysis = analysis_statements(text, &lower, &labels, counts);
        SentimentReport {
            labels: labels.into_iter().map(String::from).collect(),
            analysis,
        }
    }
}

fn analysis_statements(
    text: &str,
    lower: &str,
    labels: &[&str],
    counts: TermCounts,
) -> Vec<String> {
    let mut statements: Vec<&str> = Vec::new();
    let has = |label: &str| labels.contains(&label);

    if has("Factual") {
        statements.push("The article maintains a neutral, factual tone focused on reporting events");
    }
    if has("Commemorative") {
        statements.push(
            "The tone becomes celebratory and respectful when discussing achievements and legacy",
        );
    }
    if has("Somber") {
        statements.push("The article adopts a somber tone when describing the circumstances");
    }
    if has("Positive") {
        statements
            .push("The article presents developments in a positive light with optimistic framing");
    }
    if has("Negative") {
        statements
            .push("The article highlights concerns and problems with a critical perspective");
    }

    if text.contains('"') {
        if counts.positive > counts.negative {
            statements
                .push("Quotes in the article generally express positive or supportive viewpoints");
        } else if counts.negative > counts.positive {
            statements
                .push("Quotes in the article generally express critical or concerned viewpoints");
        }
    }

    let polar = counts.positive + counts.negative;
    if counts.positive.abs_diff(counts.negative) < 3 && (counts.neutral as f64) > polar as f64 / 2.0
    {
        statements.push("The article presents a balanced perspective with multiple viewpoints");
    }

    if lower.contains("tribute") {
        statements.push(
            "Tributes included in the article express admiration for contributions and accomplishments",
        );
    }

    statements.into_iter().map(String::from).collect()
}
