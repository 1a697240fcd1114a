//! Key point selection by sentence scoring.
//!
//! Sentences earn points for newsworthy keywords, for sitting near the top of
//! the article, for quoting someone and for citing numbers. The best scoring
//! sentences become the key points.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::config::KeyPointsConfig;

static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("SENTENCE_END regex"));

/// Picks the most informative sentences of an article.
#[derive(Debug, Clone)]
pub struct KeyPointsExtractor {
    config: KeyPointsConfig,
    keywords: Vec<String>,
}

impl Default for KeyPointsExtractor {
    fn default() -> Self {
        Self::new(KeyPointsConfig::default())
    }
}

impl KeyPointsExtractor {
    /// Create an extractor from key-point settings.
    ///
    /// # Arguments
    ///
    /// * `config` - Keywords, sentence length bounds and the default count
    pub fn new(config: KeyPointsConfig) -> Self {
        let keywords = config.keywords.iter().map(|k| k.to_lowercase()).collect();
        Self { config, keywords }
    }

    /// Up to `count` key points, best first.
    ///
    /// # Arguments
    ///
    /// * `text` - Plain article text
    /// * `count` - Maximum number of sentences to return
    ///
    /// # Returns
    ///
    /// The highest-scoring sentences, each ending in `.`, `!` or `?`. Ties
    /// keep document order.
    pub fn extract(&self, text: &str, count: usize) -> Vec<String> {
        let sentences = self.split_into_sentences(text);
        let mut scored = self.score_sentences(&sentences);

        // stable: equal scores keep document order
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        let points: Vec<String> = scored
            .into_iter()
            .take(count)
            .map(|(sentence, _)| format_sentence(sentence))
            .collect();
        debug!(candidates = sentences.len(), selected = points.len(), "Selected key points");
        points
    }

    /// Up to the configured number of key points.
    pub fn extract_default(&self, text: &str) -> Vec<String> {
        self.extract(text, self.config.count)
    }

    /// Split after `.`, `!` or `?` followed by whitespace, keeping sentences
    /// longer than the configured minimum.
    fn split_into_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut last = 0;
        for m in SENTENCE_END.find_iter(text) {
            // the punctuation mark is one byte
            sentences.push(&text[last..m.start() + 1]);
            last = m.end();
        }
        sentences.push(&text[last..]);

        sentences
            .into_iter()
            .map(str::trim)
            .filter(|s| s.chars().count() > self.config.min_sentence_length)
            .collect()
    }

    fn score_sentences<'a>(&self, sentences: &[&'a str]) -> Vec<(&'a str, u32)> {
        let mut scored = Vec::new();

        for &sentence in sentences {
            let len = sentence.chars().count();
            if len < self.config.min_sentence_length || len > self.config.max_sentence_length {
                continue;
            }

            let lower = sentence.to_lowercase();
            let mut score = self
                .keywords
                .iter()
                .filter(|k| lower.contains(k.as_str()))
                .count() as u32;

            // Duplicates share the position of their first occurrence.
            let position = sentences.iter().position(|s| *s == sentence).unwrap_or(0);
            if position < 3 {
                score += 2;
            }
            if sentence.contains('"') || sentence.contains('\'') {
                score += 1;
            }
            if sentence.chars().any(|c| c.is_ascii_digit()) {
                score += 1;
            }

            scored.push((sentence, score));
        }

        scored
    }
}

/// Ensure the sentence ends with terminal punctuation.
fn format_sentence(sentence: &str) -> String {
    if sentence.ends_with(['.', '!', '?']) {
        sentence.to_string()
    } else {
        format!("{}.", sentence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ARTICLE: &str = "The committee announced a major decision on Tuesday morning. \
        Weather in the region was mild and pleasant for most of the week. \
        Officials said the plan would be reviewed again after the holidays. \
        Researchers found evidence of 40 new species in the study area! \
        Short one. \
        \"It is a crucial moment,\" the minister said in a statement to reporters";

    #[test]
    fn test_extract_orders_by_score() {
        let ex = KeyPointsExtractor::default();
        let points = ex.extract(ARTICLE, 3);
        assert_eq!(
            points,
            vec![
                // announced, major, decision + top-three bonus
                "The committee announced a major decision on Tuesday morning.",
                // found, evidence, study, research + digit
                "Researchers found evidence of 40 new species in the study area!",
                // crucial, statement + quote, missing period added
                "\"It is a crucial moment,\" the minister said in a statement to reporters.",
            ]
        );
    }

    #[test]
    fn test_short_sentences_are_dropped() {
        let ex = KeyPointsExtractor::default();
        let points = ex.extract(ARTICLE, 10);
        assert_eq!(points.len(), 5);
        assert!(points.iter().all(|p| p != "Short one."));
    }

    #[test]
    fn test_overlong_sentences_are_dropped() {
        let ex = KeyPointsExtractor::default();
        let long = format!("The study announced {} results.", "many ".repeat(60));
        assert!(ex.extract(&long, 5).is_empty());
    }

    #[test]
    fn test_extract_default_uses_configured_count() {
        let ex = KeyPointsExtractor::new(KeyPointsConfig {
            count: 2,
            ..KeyPointsConfig::default()
        });
        assert_eq!(ex.extract_default(ARTICLE).len(), 2);
    }

    #[test]
    fn test_empty_text() {
        let ex = KeyPointsExtractor::default();
        assert!(ex.extract("", 5).is_empty());
    }

    #[test]
    fn test_format_sentence() {
        assert_eq!(format_sentence("Done"), "Done.");
        assert_eq!(format_sentence("Done?"), "Done?");
    }
}
