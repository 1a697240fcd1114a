//! Plain-text helpers: whitespace normalization, sentence splitting and
//! readability metrics.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("WHITESPACE regex"));
static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+[A-Z]").expect("SENTENCE_BREAK regex"));
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("NON_WORD regex"));
static VOWEL_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]+").expect("VOWEL_GROUP regex"));

/// Abbreviations whose trailing period does not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "Mr.", "Mrs.", "Ms.", "Dr.", "Prof.", "Inc.", "Ltd.", "Co.", "Corp.", "vs.", "e.g.", "i.e.",
    "etc.", "Jan.", "Feb.", "Mar.", "Apr.", "Jun.", "Jul.", "Aug.", "Sep.", "Oct.", "Nov.", "Dec.",
];

/// Stands in for a protected period while splitting.
const PERIOD_PLACEHOLDER: char = '\u{E000}';

/// Collapse whitespace runs (including newlines) to single spaces and trim.
pub fn normalize_text(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Split text into sentences at `.`, `!` or `?` followed by whitespace and an
/// uppercase letter. Common abbreviations such as "Dr." do not split.
pub fn split_into_sentences(text: &str) -> Vec<String> {
    let mut text = normalize_text(text);
    for abbr in ABBREVIATIONS {
        text = text.replace(abbr, &abbr.replace('.', &PERIOD_PLACEHOLDER.to_string()));
    }

    let mut sentences = Vec::new();
    let mut last = 0;
    for m in SENTENCE_BREAK.find_iter(&text) {
        // the match ends with a one-byte uppercase letter that opens the next sentence
        sentences.push(&text[last..m.start() + 1]);
        last = m.end() - 1;
    }
    sentences.push(&text[last..]);

    sentences
        .into_iter()
        .map(|s| s.replace(PERIOD_PLACEHOLDER, "."))
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Sentences mentioning `keyword` (case-insensitive), each joined with up to
/// `context_sentences` neighbours on either side.
pub fn extract_sentences_with_keyword(
    text: &str,
    keyword: &str,
    context_sentences: usize,
) -> Vec<String> {
    let keyword = keyword.to_lowercase();
    let sentences = split_into_sentences(text);

    sentences
        .iter()
        .enumerate()
        .filter(|(_, s)| s.to_lowercase().contains(&keyword))
        .map(|(i, _)| {
            let start = i.saturating_sub(context_sentences);
            let end = (i + context_sentences + 1).min(sentences.len());
            sentences[start..end].join(" ")
        })
        .collect()
}

/// Readability metrics for a text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextComplexity {
    pub sentence_count: usize,
    pub word_count: usize,
    /// Words per sentence.
    pub avg_sentence_length: f64,
    /// Chars per word.
    pub avg_word_length: f64,
    pub avg_syllables_per_word: f64,
    pub flesch_reading_ease: f64,
    pub readability_level: &'static str,
}

/// Rough syllable estimate: vowel groups, minus a silent trailing "e".
fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut count = VOWEL_GROUP.find_iter(&word).count();
    let chars: Vec<char> = word.chars().collect();
    if let [.., before, 'e'] = chars.as_slice() {
        if chars.len() > 2 && !"aeiouy".contains(*before) {
            count = count.saturating_sub(1);
        }
    }
    count.max(1)
}

/// Sentence, word and syllable statistics plus the Flesch Reading Ease score.
pub fn calculate_text_complexity(text: &str) -> TextComplexity {
    let text = normalize_text(text);
    let sentence_count = split_into_sentences(&text).len();
    let words: Vec<&str> = NON_WORD.split(&text).filter(|w| !w.is_empty()).collect();
    let word_count = words.len();

    let ratio = |num: f64, den: usize| if den > 0 { num / den as f64 } else { 0.0 };

    let avg_sentence_length = ratio(word_count as f64, sentence_count);
    let avg_word_length = ratio(
        words.iter().map(|w| w.chars().count()).sum::<usize>() as f64,
        word_count,
    );
    let avg_syllables_per_word = ratio(
        words.iter().map(|w| count_syllables(w)).sum::<usize>() as f64,
        word_count,
    );

    let flesch_reading_ease = if sentence_count > 0 && word_count > 0 {
        206.835 - 1.015 * avg_sentence_length - 84.6 * avg_syllables_per_word
    } else {
        0.0
    };

    TextComplexity {
        sentence_count,
        word_count,
        avg_sentence_length,
        avg_word_length,
        avg_syllables_per_word,
        flesch_reading_ease,
        readability_level: readability_level(flesch_reading_ease),
    }
}

/// Describe a Flesch Reading Ease score as a reading level.
pub fn readability_level(flesch_score: f64) -> &'static str {
    match flesch_score {
        s if s >= 90.0 => "Very Easy - 5th-grade level",
        s if s >= 80.0 => "Easy - 6th-grade level",
        s if s >= 70.0 => "Fairly Easy - 7th-grade level",
        s if s >= 60.0 => "Standard - 8th & 9th-grade level",
        s if s >= 50.0 => "Fairly Difficult - 10th to 12th-grade level",
        s if s >= 30.0 => "Difficult - College level",
        _ => "Very Difficult - College graduate level",
    }
}
