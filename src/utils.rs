//! Utility functions for dates, string slicing and output paths.
//!
//! This module provides helper functions used throughout the crate:
//! - Analysis-date formatting for the response section
//! - Char-boundary-safe truncation for logs
//! - Host extraction for source validation
//! - Output directory preparation for saved reports

use chrono::{Local, NaiveDate};
use std::path::Path;
use tokio::fs;
use tracing::{debug, instrument};
use url::Url;

use crate::error::AnalyzerError;

/// Format a date the way analysis records show it, e.g. `"February 27, 2025"`.
pub fn format_analysis_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Today's local date in analysis-record format.
pub fn analysis_date() -> String {
    format_analysis_date(Local::now().date_naive())
}

/// Largest char boundary in `s` that is `<= index`.
pub fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (backing off to a char
/// boundary) with an ellipsis and the number of dropped bytes appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let cut = floor_char_boundary(s, max);
        format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
    }
}

/// Lowercased host of `url`, or `None` if it does not parse or has no host.
pub fn host_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed.host_str().map(|h| h.to_lowercase())
}

/// Ensure the directory that will hold `path` exists.
///
/// # Errors
///
/// Returns [`AnalyzerError::Io`] if the directory cannot be created.
#[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub async fn ensure_parent_dir(path: impl AsRef<Path>) -> Result<(), AnalyzerError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| AnalyzerError::io(parent.display().to_string(), e))?;
        debug!(dir = %parent.display(), "Output directory ready");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_analysis_date() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 7).unwrap();
        assert_eq!(format_analysis_date(date), "February 07, 2025");
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        // "é" is two bytes; cutting at 1 must back off to 0.
        assert_eq!(truncate_for_log("éé", 1), "…(+4 bytes)");
    }

    #[test]
    fn test_char_boundaries() {
        let s = "aé b";
        assert_eq!(floor_char_boundary(s, 2), 1);
        assert_eq!(floor_char_boundary(s, 99), s.len());
        assert_eq!(floor_char_boundary(s, 0), 0);
    }

    #[test]
    fn test_host_of() {
        assert_eq!(
            host_of("https://WWW.BBC.co.uk/news/articles/abc"),
            Some("www.bbc.co.uk".to_string())
        );
        assert_eq!(host_of("not a url"), None);
    }

    #[tokio::test]
    async fn test_ensure_parent_dir_creates_nested_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("reports/2025/analysis.json");
        ensure_parent_dir(&target).await.unwrap();
        assert!(tmp.path().join("reports/2025").is_dir());
    }
}
