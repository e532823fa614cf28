//! Extraction from realistic pages with default options.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use rs_coreex::{extract, extract_bytes};

/// Test fixture path helper
fn fixture_path(name: &str) -> String {
    format!(
        "{}/tests/integration/fixtures/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    )
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

#[test]
fn test_blog_post_inside_nested_wrappers() {
    let html = read_fixture("blog_nested_wrappers.html");

    match extract(&html) {
        Ok(result) => {
            assert_eq!(result.tag, "div");
            assert!(
                result.content_html.starts_with("<div class=\"main-column\">"),
                "Should select the column holding the post"
            );

            // Post body
            assert!(result.content_text.contains("Growing tomatoes on a balcony"));
            assert!(result.content_text.contains("twenty litres of soil"));
            assert!(result.content_text.contains("pinch out the side shoots"));
            assert!(result.content_text.contains("harvest page"));

            // Inline ads and embeds are stripped before counting
            assert!(!result.content_text.contains("Advertisement"));
            assert!(!result.content_text.contains("Sponsored"));
            assert!(!result.content_html.contains("<iframe"));
            assert!(!result.content_html.contains("<!--"));

            // Chrome around the post
            assert!(!result.content_text.contains("Vegetables"));
            assert!(!result.content_text.contains("Popular posts"));
            assert!(!result.content_text.contains("volunteers"));
            assert!(
                !result.content_html.contains("share-bar"),
                "Share bar is a link-only child and should be pruned"
            );
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_blog_post_counts() {
    let html = read_fixture("blog_nested_wrappers.html");
    let result = extract(&html).expect("Extraction failed");

    assert_eq!(result.page_text_count, 145);
    assert_eq!(result.text_count, 125);
    assert_eq!(result.link_count, 3);
    assert_eq!(result.kept_children, 1);
    assert_eq!(result.dropped_children, 1);

    let expected = 0.95 * (122.0 / 123.0) + 0.05 * (123.0 / 145.0);
    let score = result.score.expect("Selected node should be scored");
    assert!((score - expected).abs() < 1e-9, "score {score}, expected {expected}");
}

#[test]
fn test_news_page_in_windows_1252() {
    let bytes = std::fs::read(fixture_path("news_windows1252.html")).expect("Failed to read fixture");
    assert!(
        std::str::from_utf8(&bytes).is_err(),
        "Fixture should not be valid UTF-8"
    );

    match extract_bytes(&bytes) {
        Ok(result) => {
            assert_eq!(result.tag, "main");

            assert!(result.content_text.contains("Café owners welcome new market rules"));
            assert!(result.content_text.contains("By Hélène Dubois"));
            assert!(result.content_text.contains("François Martin"));
            assert!(result.content_text.contains("crêperie"));

            // Reader comments read like prose and stay with the article
            assert!(result.content_text.contains("Midnight is late"));

            // Breadcrumbs, navigation and footer do not
            assert!(!result.content_text.contains("Home / City"));
            assert!(!result.content_text.contains("Accueil"));
            assert!(!result.content_text.contains("Legal notice"));

            assert_eq!(result.page_text_count, 139);
            assert_eq!((result.text_count, result.link_count), (132, 2));
            assert_eq!((result.kept_children, result.dropped_children), (2, 1));
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_link_archive_falls_back_to_empty_body() {
    let html = read_fixture("link_archive.html");

    match extract(&html) {
        Ok(result) => {
            assert_eq!(result.tag, "body");
            assert_eq!(result.score, None, "Nothing on a link-only page is scored");
            assert_eq!(result.page_text_count, 10);
            assert_eq!((result.text_count, result.link_count), (10, 10));
            assert_eq!((result.kept_children, result.dropped_children), (0, 1));
            assert_eq!(result.content_text, "");
            assert!(!result.content_html.contains("<a "));
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}
