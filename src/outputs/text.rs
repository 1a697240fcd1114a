//! Plain-text report for analysis results.

use crate::models::AnalysisResult;

const RULE_WIDTH: usize = 50;

fn heading(out: &mut String, title: &str, rule: char) {
    out.push_str(title);
    out.push('\n');
    out.extend(std::iter::repeat_n(rule, RULE_WIDTH));
    out.push('\n');
}

fn or_unspecified(value: &str) -> &str {
    if value.is_empty() { "Not specified" } else { value }
}

/// Render `result` as a human-readable report.
///
/// # Arguments
///
/// * `result` - The analysis to render
///
/// # Returns
///
/// A report with ARTICLE ANALYSIS, PUBLICATION DETAILS, SUMMARY, KEY POINTS,
/// SENTIMENT ANALYSIS and EXTRACTED URLS sections. Empty sections get an
/// explicit line such as "No key points identified".
pub fn analysis_to_text(result: &AnalysisResult) -> String {
    let response = &result.response;
    let publication = &result.publication;
    let mut out = String::new();

    heading(&mut out, "ARTICLE ANALYSIS", '=');
    out.push_str(&format!(
        "Analysis Date: {}\n",
        or_unspecified(&response.query_datetime)
    ));
    out.push_str(&format!("Source: {}\n", or_unspecified(&response.source_name)));
    out.push_str(&format!(
        "Source Credibility: {}\n\n",
        or_unspecified(&response.source_credibility)
    ));

    heading(&mut out, "PUBLICATION DETAILS", '-');
    out.push_str(&format!("URL: {}\n", or_unspecified(&publication.publication_url)));
    out.push_str(&format!(
        "Date: {}\n\n",
        or_unspecified(&publication.publication_date)
    ));

    heading(&mut out, "SUMMARY", '-');
    if publication.publication_summary.is_empty() {
        out.push_str("No summary available\n\n");
    } else {
        out.push_str(&publication.publication_summary);
        out.push_str("\n\n");
    }

    heading(&mut out, "KEY POINTS", '-');
    for (i, point) in publication.publication_keypoints.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, point));
    }
    if publication.publication_keypoints.is_empty() {
        out.push_str("No key points identified\n");
    }
    out.push('\n');

    heading(&mut out, "SENTIMENT ANALYSIS", '-');
    let overall = if publication.publication_sentiment.is_empty() {
        "Not analyzed".to_string()
    } else {
        publication.publication_sentiment.join(", ")
    };
    out.push_str(&format!("Overall: {}\n\n", overall));
    for statement in &publication.sentiment_analysis {
        out.push_str(&format!("- {}\n", statement));
    }
    if publication.sentiment_analysis.is_empty() {
        out.push_str("No detailed sentiment analysis available\n");
    }
    out.push('\n');

    heading(&mut out, "EXTRACTED URLS", '-');
    for url in &response.extracted_urls {
        out.push_str(&format!("- {}\n", url));
    }
    if response.extracted_urls.is_empty() {
        out.push_str("No URLs extracted\n");
    }

    // no trailing newline after the last section
    out.pop();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_report() {
        let mut result = AnalysisResult::default();
        result.response.query_datetime = "February 27, 2025".to_string();
        result.response.source_name = "BBC News".to_string();
        result.response.source_credibility = "High".to_string();
        result.response.extracted_urls = vec!["https://www.bbc.co.uk".to_string()];
        result.publication.publication_url = "https://www.bbc.co.uk/news/a".to_string();
        result.publication.publication_date = "27 February 2025".to_string();
        result.publication.publication_summary = "A comet is coming.".to_string();
        result.publication.publication_keypoints =
            vec!["First point.".to_string(), "Second point.".to_string()];
        result.publication.publication_sentiment =
            vec!["Neutral".to_string(), "Factual".to_string()];
        result.publication.sentiment_analysis = vec!["Balanced reporting".to_string()];

        let rule = "-".repeat(50);
        let expected = format!(
            "ARTICLE ANALYSIS\n{}\n\
             Analysis Date: February 27, 2025\n\
             Source: BBC News\n\
             Source Credibility: High\n\n\
             PUBLICATION DETAILS\n{rule}\n\
             URL: https://www.bbc.co.uk/news/a\n\
             Date: 27 February 2025\n\n\
             SUMMARY\n{rule}\n\
             A comet is coming.\n\n\
             KEY POINTS\n{rule}\n\
             1. First point.\n\
             2. Second point.\n\n\
             SENTIMENT ANALYSIS\n{rule}\n\
             Overall: Neutral, Factual\n\n\
             - Balanced reporting\n\n\
             EXTRACTED URLS\n{rule}\n\
             - https://www.bbc.co.uk",
            "=".repeat(50),
        );
        assert_eq!(analysis_to_text(&result), expected);
    }

    #[test]
    fn test_empty_sections_are_explicit() {
        let text = analysis_to_text(&AnalysisResult::default());
        assert!(text.contains("Source: Not specified\n"));
        assert!(text.contains("No summary available\n"));
        assert!(text.contains("No key points identified\n"));
        assert!(text.contains("Overall: Not analyzed\n"));
        assert!(text.contains("No detailed sentiment analysis available\n"));
        assert!(text.ends_with("No URLs extracted"));
    }
}
