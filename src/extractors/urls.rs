//! URL discovery in article text.
//!
//! Links are reduced to their base (`scheme://host`) and deduplicated so an
//! article that cites the same outlet many times lists it once.

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use url::Url;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(?:[-\w.]|(?:%[\da-fA-F]{2}))+").expect("URL_PATTERN regex")
});

/// A URL occurrence with the text around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlContext {
    pub url: String,
    pub context: String,
}

/// `scheme://host` for a matched URL; falls back to the raw match.
fn base_url(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => format!("{}://{}", parsed.scheme(), host),
            None => raw.to_string(),
        },
        Err(_) => raw.to_string(),
    }
}

/// Unique base URLs in order of first appearance.
///
/// # Arguments
///
/// * `text` - Article text that may contain `http(s)://` links
///
/// # Returns
///
/// One `scheme://host` entry per linked site. Text without well-formed
/// links yields an empty vector.
pub fn extract(text: &str) -> Vec<String> {
    URL_PATTERN
        .find_iter(text)
        .map(|m| base_url(m.as_str()))
        .unique()
        .collect()
}

/// Every URL occurrence with up to `context_chars` chars on either side.
pub fn extract_with_context(text: &str, context_chars: usize) -> Vec<UrlContext> {
    URL_PATTERN
        .find_iter(text)
        .map(|m| {
            let before = text[..m.start()]
                .char_indices()
                .rev()
                .nth(context_chars.saturating_sub(1))
                .map(|(i, _)| i);
            let start = match (context_chars, before) {
                (0, _) => m.start(),
                (_, Some(i)) => i,
                (_, None) => 0,
            };
            let end = text[m.end()..]
                .char_indices()
                .nth(context_chars)
                .map(|(i, _)| m.end() + i)
                .unwrap_or(text.len());
            UrlContext {
                url: m.as_str().to_string(),
                context: text[start..end].to_string(),
            }
        })
        .collect()
}
