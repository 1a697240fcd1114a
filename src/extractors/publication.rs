//! Publication info extraction: date, update notice, byline and summary.
//!
//! Each field has its own ordered list of patterns. Patterns are tried in
//! order against the whole text and the first one that matches anywhere wins;
//! later patterns are never consulted after that, even if they would have
//! found something more relevant.
//!
//! The compiled patterns live in an immutable [`PatternSet`]. The built-in set
//! is compiled once per process and shared read-only, so extractors are cheap
//! to construct and safe to use from several threads.

use crate::error::AnalyzerError;
use crate::models::PublicationInfo;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::sync::Arc;
use tracing::{debug, instrument, trace};

const MONTHS: &str =
    "January|February|March|April|May|June|July|August|September|October|November|December";

/// Paragraph length bounds (in chars) for the preferred summary tier.
const SUBSTANTIAL_MIN: usize = 100;
const SUBSTANTIAL_MAX: usize = 500;
/// Minimum paragraph length (in chars) for the fallback summary tier.
const FALLBACK_MIN: usize = 50;

static BUILTIN_PATTERNS: Lazy<Arc<PatternSet>> =
    Lazy::new(|| Arc::new(PatternSet::builtin().expect("builtin publication patterns")));

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n[ \t]*\r?\n").expect("PARAGRAPH_BREAK regex"));

/// Built-in date patterns, highest priority first.
fn date_patterns() -> Vec<String> {
    vec![
        // BBC style: "Published 27 February 2025, 08:37 GMT"
        format!(r"Published\s+(\d{{1,2}}\s+(?:{MONTHS})\s+\d{{4}},\s+\d{{1,2}}:\d{{2}}\s+[A-Z]{{2,4}})"),
        format!(r"\b((?:{MONTHS})\s+\d{{1,2}},\s+\d{{4}})"),
        format!(r"\b(\d{{1,2}}\s+(?:{MONTHS})\s+\d{{4}})"),
        r"\b(\d{4}-\d{2}-\d{2})\b".to_string(),
    ]
}

/// Built-in update patterns. The free-form first pattern shadows the other
/// two; the order is kept as published.
fn update_patterns() -> Vec<String> {
    vec![
        r"Updated[ \t]+(\S[^\r\n]*)".to_string(),
        r"Updated\s+(\d+\s+(?:second|minute|hour|day|week|month|year)s?\s+ago)".to_string(),
        r"Updated\s+(at\s+\d{1,2}:\d{2})".to_string(),
    ]
}

/// Built-in byline patterns. Names are exactly two capitalized words, and a
/// byline name must be followed by a comma or the end of its line, so
/// hyphenated or three-word names do not match at all.
fn author_patterns() -> Vec<String> {
    let name = r"[A-Z][a-z]+[ \t]+[A-Z][a-z]+";
    let line_end = r"[ \t]*(?:\r?\n|$)";
    vec![
        format!(r"\bBy[ \t]+({name})(?:[ \t]*,[ \t]*([^,\r\n]+)|{line_end})"),
        format!(r"\bBy[ \t]+({name}[ \t]+and[ \t]+{name})(?:[ \t]*,|{line_end})"),
        format!(r"\b({name})[ \t]+reports\b"),
    ]
}

/// Ordered, compiled pattern lists for each publication field.
///
/// For every pattern the field value is capture group 1 when the pattern has
/// one, otherwise the whole match. Author patterns may carry a second group
/// holding a role/title, rendered as `"<Name>, <Role>"`.
#[derive(Debug, Clone)]
pub struct PatternSet {
    date: Vec<Regex>,
    update: Vec<Regex>,
    author: Vec<Regex>,
}

impl PatternSet {
    /// Compile a pattern set from ordered pattern sources.
    pub fn new<S: AsRef<str>>(
        date: &[S],
        update: &[S],
        author: &[S],
    ) -> Result<Self, regex::Error> {
        fn compile<S: AsRef<str>>(sources: &[S]) -> Result<Vec<Regex>, regex::Error> {
            sources.iter().map(|s| Regex::new(s.as_ref())).collect()
        }

        Ok(Self {
            date: compile(date)?,
            update: compile(update)?,
            author: compile(author)?,
        })
    }

    /// The built-in rules tuned for BBC-style article text.
    pub fn builtin() -> Result<Self, regex::Error> {
        Self::new(&date_patterns(), &update_patterns(), &author_patterns())
    }
}

/// Run `patterns` in order and render the first match.
fn first_match(
    patterns: &[Regex],
    text: &str,
    render: fn(&Captures) -> Option<String>,
) -> Option<String> {
    for (rank, re) in patterns.iter().enumerate() {
        if let Some(caps) = re.captures(text) {
            trace!(rank, pattern = re.as_str(), "pattern matched");
            return render(&caps);
        }
    }
    None
}

fn primary_group(caps: &Captures) -> Option<String> {
    let m = caps.get(1).or_else(|| caps.get(0))?;
    let value = m.as_str().trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn name_with_role(caps: &Captures) -> Option<String> {
    let name = primary_group(caps)?;
    match caps.get(2).map(|m| m.as_str().trim()) {
        Some(role) if !role.is_empty() => Some(format!("{}, {}", name, role)),
        _ => Some(name),
    }
}

/// Extracts [`PublicationInfo`] from plain article text.
#[derive(Debug, Clone)]
pub struct PublicationInfoExtractor {
    patterns: Arc<PatternSet>,
}

impl Default for PublicationInfoExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PublicationInfoExtractor {
    /// Extractor backed by the shared built-in patterns.
    pub fn new() -> Self {
        Self {
            patterns: Arc::clone(&BUILTIN_PATTERNS),
        }
    }

    /// Extractor backed by a caller-supplied pattern set.
    pub fn with_patterns(patterns: PatternSet) -> Self {
        Self {
            patterns: Arc::new(patterns),
        }
    }

    /// First date found by the date patterns, in priority order.
    pub fn extract_date(&self, text: &str) -> Option<String> {
        first_match(&self.patterns.date, text, primary_group)
    }

    /// Update notice text following the "Updated" keyword.
    pub fn extract_update(&self, text: &str) -> Option<String> {
        first_match(&self.patterns.update, text, primary_group)
    }

    /// Byline, as `"Name, Role"` when a role follows the name.
    pub fn extract_author(&self, text: &str) -> Option<String> {
        first_match(&self.patterns.author, text, name_with_role)
    }

    /// First paragraph of summary length, else the first reasonably long one.
    ///
    /// Paragraphs are separated by blank lines and trimmed. A paragraph
    /// strictly between 100 and 500 chars is preferred; otherwise the first
    /// paragraph over 50 chars is used.
    pub fn extract_summary(&self, text: &str) -> Option<String> {
        let paragraphs: Vec<&str> = PARAGRAPH_BREAK.split(text).map(str::trim).collect();

        let substantial = paragraphs.iter().find(|p| {
            let len = p.chars().count();
            len > SUBSTANTIAL_MIN && len < SUBSTANTIAL_MAX
        });

        substantial
            .or_else(|| paragraphs.iter().find(|p| p.chars().count() > FALLBACK_MIN))
            .map(|p| p.to_string())
    }

    /// Build the full record for `text`.
    ///
    /// A found update is folded into the date as `"<date> (Updated <info>)"`;
    /// it only gets its own field when no date was found.
    #[instrument(level = "debug", skip_all, fields(bytes = text.len(), has_url = url.is_some()))]
    pub fn extract(&self, text: &str, url: Option<&str>) -> PublicationInfo {
        let mut info = PublicationInfo::new(url);

        info.date = self.extract_date(text);

        if let Some(update) = self.extract_update(text) {
            match info.date.as_mut() {
                Some(date) => {
                    date.push_str(" (Updated ");
                    date.push_str(&update);
                    date.push(')');
                }
                None => info.update = Some(update),
            }
        }

        info.author = self.extract_author(text);
        info.summary = self.extract_summary(text);

        debug!(
            date = info.date.is_some(),
            update = info.update.is_some(),
            author = info.author.is_some(),
            summary = info.summary.is_some(),
            "Extracted publication info"
        );
        info
    }

    /// Like [`extract`](Self::extract), but for raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::InvalidInput`] if `bytes` is not UTF-8 text.
    pub fn extract_bytes(
        &self,
        bytes: &[u8],
        url: Option<&str>,
    ) -> Result<PublicationInfo, AnalyzerError> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            AnalyzerError::invalid_input(format!("article text is not valid UTF-8: {}", e))
        })?;
        Ok(self.extract(text, url))
    }
}

/// Extract with the built-in patterns.
pub fn extract(text: &str, url: Option<&str>) -> PublicationInfo {
    PublicationInfoExtractor::new().extract(text, url)
}
