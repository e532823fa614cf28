//! Options applied to realistic pages.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use dom_query::Document;
use rs_coreex::{extract_bytes_with_options, extract_document, extract_with_options, Options};

fn read_fixture(name: &str) -> String {
    let path = format!(
        "{}/tests/integration/fixtures/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    );
    std::fs::read_to_string(path).expect("Failed to read fixture")
}

#[test]
fn test_base_url_rewrites_kept_links() {
    let html = read_fixture("blog_nested_wrappers.html");
    let opts = Options {
        base_url: Some("https://gardennotes.example/posts/tomatoes".to_string()),
        ..Options::default()
    };

    let result = extract_with_options(&html, &opts).expect("Extraction failed");

    assert!(result
        .content_html
        .contains("href=\"https://gardennotes.example/guides/harvest\""));
    assert!(!result.content_html.contains("href=\"/guides/harvest\""));
}

#[test]
fn test_unreachable_threshold_picks_longest_paragraph() {
    let bytes = std::fs::read(format!(
        "{}/tests/integration/fixtures/news_windows1252.html",
        env!("CARGO_MANIFEST_DIR")
    ))
    .expect("Failed to read fixture");
    let opts = Options {
        threshold: 1.0,
        ..Options::default()
    };

    let result = extract_bytes_with_options(&bytes, &opts).expect("Extraction failed");

    // Without subsets only own text counts, and the quote paragraph is longest.
    assert_eq!(result.tag, "p");
    assert_eq!(result.text_count, 35);
    assert!(result.content_text.starts_with("“We have waited three years"));
}

#[test]
fn test_extract_document_prunes_caller_tree() {
    let html = read_fixture("blog_nested_wrappers.html");
    let doc = Document::from(html.as_str());

    let extraction = extract_document(&doc, &Options::default()).expect("Extraction failed");

    assert_eq!(extraction.page_text, 145);
    assert_eq!(
        extraction.node.attr("class").map(|v| v.to_string()),
        Some("main-column".to_string())
    );

    // Preprocessing touched the whole body, pruning only the selected node.
    assert!(!doc.select("span").exists());
    assert!(!doc.select("script").exists());
    assert!(!doc.select(".share-bar").exists());
    assert!(doc.select(".sidebar").exists());
    assert!(doc.select(".post .ad-slot").exists());
}

#[test]
fn test_depth_guard_accepts_realistic_pages() {
    let html = read_fixture("blog_nested_wrappers.html");
    let opts = Options {
        max_tree_depth: Some(16),
        ..Options::default()
    };

    let result = extract_with_options(&html, &opts).expect("Extraction failed");
    assert!(result.content_text.contains("twenty litres of soil"));
}
