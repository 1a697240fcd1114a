//! Tunable analyzer settings, loadable from a YAML file.
//!
//! Every section has defaults, so a config file only needs the keys it wants
//! to override:
//!
//! ```yaml
//! key_points:
//!   count: 3
//! fetch:
//!   timeout_secs: 20
//! ```

use crate::error::AnalyzerError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument};

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Top-level analyzer configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub key_points: KeyPointsConfig,
    pub sentiment: SentimentConfig,
    pub fetch: FetchConfig,
}

/// Key-point selection settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyPointsConfig {
    /// Words and phrases that mark a sentence as newsworthy.
    pub keywords: Vec<String>,
    /// Sentences must be longer than this many chars.
    pub min_sentence_length: usize,
    /// Sentences longer than this many chars are skipped.
    pub max_sentence_length: usize,
    /// How many key points to return.
    pub count: usize,
}

impl Default for KeyPointsConfig {
    fn default() -> Self {
        Self {
            keywords: strings(&[
                "announced", "discovered", "revealed", "confirmed", "found",
                "reported", "launched", "published", "released", "unveiled",
                "decision", "voted", "agreement", "investigation", "study",
                "research", "evidence", "according to", "statement", "explained",
                "warned", "critical", "significant", "major", "crucial",
                "important", "essential", "key", "central", "vital",
                // obituaries and profiles
                "born", "died", "award", "Oscar", "prize", "medal", "honored",
                "career", "achievement", "legacy", "contribution", "impact",
            ]),
            min_sentence_length: 30,
            max_sentence_length: 200,
            count: 5,
        }
    }
}

/// Term lists for the sentiment analyzer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SentimentConfig {
    pub positive_terms: Vec<String>,
    pub negative_terms: Vec<String>,
    pub neutral_terms: Vec<String>,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            positive_terms: strings(&[
                "celebrated", "acclaimed", "praised", "honored", "respected",
                "admired", "appreciated", "commended", "acclaimed", "successful",
                "achievement", "breakthrough", "triumph", "victory", "win",
                "positive", "beneficial", "favorable", "promising", "encouraging",
                "optimistic", "progress", "improvement", "growth", "recovery",
                "accomplishment", "excellence", "outstanding", "remarkable",
                "genius", "legendary", "icon", "influential", "inspiring",
                "innovator", "pioneer", "visionary", "revolutionary", "leader",
                "talented", "brilliant", "exceptional", "extraordinary",
            ]),
            negative_terms: strings(&[
                "tragic", "devastating", "critical", "negative", "concerning",
                "worrying", "disappointing", "unfortunate", "sad", "grim",
                "failure", "problem", "issue", "challenge", "crisis",
                "disaster", "catastrophe", "emergency", "accident", "incident",
                "controversy", "scandal", "conflict", "dispute", "debate",
                "criticism", "complaint", "objection", "protest", "opposition",
                "dead", "died", "killed", "deceased", "fatal", "death",
                "injured", "wounded", "hurt", "damaged", "destroyed", "lost",
                "criminal", "illegal", "accused", "alleged", "charged", "convicted",
            ]),
            neutral_terms: strings(&[
                "reported", "announced", "stated", "said", "told", "explained",
                "described", "informed", "confirmed", "indicated", "revealed",
                "noted", "mentioned", "added", "continued", "concluded",
                "according to", "based on", "as per", "cited", "referenced",
                "data", "statistics", "figures", "numbers", "percentage",
                "research", "study", "analysis", "survey", "report",
                "investigation", "examination", "assessment", "evaluation",
                "development", "change", "increase", "decrease", "rise", "fall",
                "update", "situation", "circumstance", "condition", "status",
            ]),
        }
    }
}

/// HTTP fetch settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
        }
    }
}

impl AnalyzerConfig {
    /// Parse a config from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, AnalyzerError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML config file.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AnalyzerError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| AnalyzerError::io(path.display().to_string(), e))?;
        let config = Self::from_yaml(&yaml)?;
        info!(
            keywords = config.key_points.keywords.len(),
            count = config.key_points.count,
            "Loaded analyzer configuration"
        );
        Ok(config)
    }
}
