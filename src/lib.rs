//! # rs-coreex
//!
//! Main-content extraction for HTML documents, after "CoreEx: Content
//! Extraction from Online News Articles" (Prasad & Paepcke).
//!
//! Every element of the page body is annotated with its word count and the
//! share of those words that sit inside links. Children that read like prose
//! are folded into their parent's trusted subset; the element whose trusted
//! subset has the best text-to-link ratio (with a small bonus for size) is
//! selected, and its link-heavy children are pruned away.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_coreex::extract;
//!
//! let html = r#"<html><body>
//!   <nav><a href="/">Home</a> <a href="/news">News</a></nav>
//!   <article>
//!     <p>The council approved the new budget on Tuesday after a long debate.</p>
//!     <p>Officials said the plan funds road repairs and two new libraries.</p>
//!   </article>
//! </body></html>"#;
//!
//! let result = extract(html)?;
//! assert!(result.content_text.contains("council approved"));
//! assert!(!result.content_text.contains("Home"));
//! # Ok::<(), rs_coreex::Error>(())
//! ```
//!
//! ## Working on a parsed document
//!
//! [`extract_document`] runs the pipeline on a caller-owned
//! [`dom_query::Document`] and returns the selected element as a live
//! `Selection`, so the caller decides how to serialize it.

mod error;
mod extract;
mod options;
mod result;

/// Element tree utilities with text/tail model support.
pub mod etree;

/// Text normalization and word counting.
pub mod text;

/// Removal of non-content subtrees.
pub mod preprocess;

/// Word/link accounting and qualifying subsets.
pub mod annotate;

/// Node scoring.
pub mod scoring;

/// URL utilities for base-URL validation and link resolution.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::{extract_document, extract_node, Extraction};
pub use options::{Options, DEFAULT_FORBIDDEN_TAGS, DEFAULT_LINK_TAGS};
pub use result::ExtractResult;

/// Extracts main content from an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use rs_coreex::extract;
///
/// let html = "<html><body><div><p>Content worth reading here.</p></div></body></html>";
/// let result = extract(html)?;
/// assert_eq!(result.content_text, "Content worth reading here.");
/// # Ok::<(), rs_coreex::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts main content from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use rs_coreex::{extract_with_options, Options};
///
/// let html = "<html><body><div><p>Plain prose without any links at all.</p></div></body></html>";
/// let options = Options {
///     threshold: 0.8,
///     base_url: Some("https://example.com/news/".to_string()),
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options)?;
/// assert_eq!(result.content_text, "Plain prose without any links at all.");
/// # Ok::<(), rs_coreex::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    extract::extract_content(html, options)
}

/// Extracts main content from HTML bytes with automatic encoding detection.
///
/// The charset is taken from a byte-order mark or a `<meta>` declaration,
/// defaulting to UTF-8. Malformed sequences are replaced rather than
/// rejected.
///
/// # Example
///
/// ```rust
/// use rs_coreex::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><div><p>Un caf\xE9 noir</p></div></body></html>";
/// let result = extract_bytes(html)?;
/// assert!(result.content_text.contains("café"));
/// # Ok::<(), rs_coreex::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes(html: &[u8]) -> Result<ExtractResult> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts main content from HTML bytes with custom options and automatic
/// encoding detection.
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractResult> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}
