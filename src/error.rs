//! Error types for the analyzer library.
//!
//! Extractors are total and never produce these; errors only arise at the
//! boundaries (decoding raw input, fetching, reading config, writing output).

use std::fmt;
use thiserror::Error;

/// Errors that can occur while fetching or analyzing an article.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Input could not be treated as article text (e.g. not valid UTF-8).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A URL was empty or lacked a scheme/host.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The URL belongs to a source this analyzer does not handle.
    #[error("unsupported source for {analyzer}: {url}")]
    UnsupportedSource { analyzer: &'static str, url: String },

    /// Network or HTTP failure while fetching a URL.
    #[error("error fetching {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Filesystem failure.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A config file could not be parsed.
    #[error("invalid config: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Output could not be serialized.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AnalyzerError {
    /// Creates an InvalidInput error with a custom message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AnalyzerError::InvalidInput(msg.into())
    }

    /// Creates a Fetch error from any displayable cause.
    pub fn fetch(url: impl Into<String>, reason: impl fmt::Display) -> Self {
        AnalyzerError::Fetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates an Io error tagged with the offending path.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        AnalyzerError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this is an InvalidInput error.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AnalyzerError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = AnalyzerError::invalid_input("text is not valid UTF-8");
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "invalid input: text is not valid UTF-8");
    }

    #[test]
    fn test_fetch_display() {
        let err = AnalyzerError::fetch("https://example.com", "404 Not Found");
        assert_eq!(
            err.to_string(),
            "error fetching https://example.com: 404 Not Found"
        );
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_unsupported_source_display() {
        let err = AnalyzerError::UnsupportedSource {
            analyzer: "BBC News",
            url: "https://cnn.com/x".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported source for BBC News: https://cnn.com/x"
        );
    }
}
