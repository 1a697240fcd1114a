//! Article text and metadata extraction from HTML pages.
//!
//! The output of [`extract_article_from_html`] is plain text with paragraphs
//! separated by blank lines, ready for the extractors.

use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Elements whose text never belongs to the article.
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "iframe", "svg"];

/// Containers tried in order when looking for the article body.
const ARTICLE_CONTAINERS: &[&str] = &[
    "article", "#content", "#article", "#main", ".article", ".content", ".story", ".post",
];

/// BBC's byline/timestamp strip.
const BBC_METADATA_STRIP: &str = ".ssrcss-vtbxng-MetadataStripItem";

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Text under `el`, skipping script-like descendants, trimmed.
fn visible_text(el: ElementRef) -> String {
    let mut out = String::new();
    for node in el.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|e| SKIPPED_ELEMENTS.contains(&e.name()))
        });
        if !hidden {
            out.push_str(text);
        }
    }
    out.trim().to_string()
}

fn paragraphs_in(root: ElementRef) -> Vec<String> {
    root.select(&selector("p")).map(visible_text).collect()
}

/// Extract readable article text from an HTML page.
///
/// `source` selects site-specific rules; only `"bbc"` is recognized, anything
/// else uses the generic rules.
#[instrument(level = "debug", skip_all, fields(bytes = html.len(), ?source))]
pub fn extract_article_from_html(html: &str, source: Option<&str>) -> String {
    let doc = Html::parse_document(html);

    let text = match source {
        Some(s) if s.eq_ignore_ascii_case("bbc") => extract_bbc_article(&doc),
        _ => extract_generic_article(&doc),
    };
    debug!(chars = text.chars().count(), "Extracted article text");
    text
}

fn headline(doc: &Html) -> Option<String> {
    doc.select(&selector("h1")).next().map(visible_text)
}

fn extract_bbc_article(doc: &Html) -> String {
    let Some(article) = doc.select(&selector("article")).next() else {
        return extract_generic_article(doc);
    };

    let mut text = headline(doc).unwrap_or_default();
    text.push_str("\n\n");
    text.push_str(&paragraphs_in(article).join("\n\n"));

    if let Some(strip) = doc.select(&selector(BBC_METADATA_STRIP)).next() {
        text.push_str("\n\n");
        text.push_str(&visible_text(strip));
    }
    text
}

fn extract_generic_article(doc: &Html) -> String {
    let mut content: Vec<String> = headline(doc).into_iter().collect();

    let container = ARTICLE_CONTAINERS
        .iter()
        .find_map(|css| doc.select(&selector(css)).next());

    match container {
        Some(article) => content.extend(paragraphs_in(article)),
        None => content.extend(doc.select(&selector("p")).map(visible_text)),
    }

    content.join("\n\n")
}

/// Title, named meta tags, OpenGraph properties and canonical URL.
///
/// OpenGraph keys lose their `og:` prefix; a later tag with the same key
/// overwrites an earlier one.
pub fn extract_metadata_from_html(html: &str) -> BTreeMap<String, String> {
    let doc = Html::parse_document(html);
    let mut metadata = BTreeMap::new();

    if let Some(title) = doc.select(&selector("title")).next() {
        metadata.insert("title".to_string(), visible_text(title));
    }

    for meta in doc.select(&selector("meta")) {
        let el = meta.value();
        let Some(content) = el.attr("content").filter(|c| !c.is_empty()) else {
            continue;
        };
        if let Some(name) = el.attr("name").filter(|n| !n.is_empty()) {
            metadata.insert(name.to_string(), content.to_string());
        }
        if let Some(key) = el.attr("property").and_then(|p| p.strip_prefix("og:")) {
            metadata.insert(key.to_string(), content.to_string());
        }
    }

    if let Some(href) = doc
        .select(&selector("link[rel=canonical]"))
        .find_map(|link| link.value().attr("href").filter(|h| !h.is_empty()))
    {
        metadata.insert("canonical_url".to_string(), href.to_string());
    }

    metadata
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BBC_PAGE: &str = r#"
        <html>
        <head>
            <title>Storm warning - BBC News</title>
            <meta name="description" content="Heavy rain expected">
            <meta property="og:title" content="Storm warning">
            <meta property="article:section" content="UK">
            <link rel="canonical" href="https://www.bbc.co.uk/news/articles/abc">
            <script>var tracking = "ignore me";</script>
        </head>
        <body>
            <nav><p>Home</p></nav>
            <h1>Storm warning issued</h1>
            <article>
                <p>Forecasters have issued a warning.</p>
                <p>Rain is expected <script>noise()</script>overnight.</p>
            </article>
            <div class="ssrcss-vtbxng-MetadataStripItem">Published 27 February 2025, 08:37 GMT</div>
        </body>
        </html>
    "#;

    #[test]
    fn test_bbc_extraction() {
        let text = extract_article_from_html(BBC_PAGE, Some("BBC"));
        assert_eq!(
            text,
            "Storm warning issued\n\n\
             Forecasters have issued a warning.\n\n\
             Rain is expected overnight.\n\n\
             Published 27 February 2025, 08:37 GMT"
        );
    }

    #[test]
    fn test_generic_extraction_uses_first_container() {
        let text = extract_article_from_html(BBC_PAGE, None);
        assert_eq!(
            text,
            "Storm warning issued\n\n\
             Forecasters have issued a warning.\n\n\
             Rain is expected overnight."
        );
    }

    #[test]
    fn test_bbc_without_article_falls_back_to_generic() {
        let html = r#"<html><body><h1>Title</h1><div id="main"><p>One.</p><p>Two.</p></div></body></html>"#;
        assert_eq!(
            extract_article_from_html(html, Some("bbc")),
            "Title\n\nOne.\n\nTwo."
        );
    }

    #[test]
    fn test_generic_without_container_uses_all_paragraphs() {
        let html = "<html><body><p>Alpha</p><div><p>Beta</p></div></body></html>";
        assert_eq!(extract_article_from_html(html, None), "Alpha\n\nBeta");
    }

    #[test]
    fn test_extract_metadata() {
        let metadata = extract_metadata_from_html(BBC_PAGE);
        // og:title is read after <title> and replaces it
        assert_eq!(metadata.get("title").unwrap(), "Storm warning");
        assert_eq!(metadata.get("description").unwrap(), "Heavy rain expected");
        assert!(metadata.get("article:section").is_none());
        assert_eq!(
            metadata.get("canonical_url").unwrap(),
            "https://www.bbc.co.uk/news/articles/abc"
        );
    }
}
