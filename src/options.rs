//! Configuration options for content extraction.
//!
//! The `Options` struct carries every tunable of the extraction pipeline.
//! It is passed by reference through preprocessing, annotation and scoring,
//! so two extractions with different settings never interfere.

use crate::{Error, Result};

/// Tags removed (with their subtrees) before annotation.
pub const DEFAULT_FORBIDDEN_TAGS: &[&str] = &[
    "img", "span", "video", "button", "select", "iframe", "script", "noscript", "style",
];

/// Tags counted as links with a fixed unit weight.
pub const DEFAULT_LINK_TAGS: &[&str] = &["a"];

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the published CoreEx settings.
///
/// # Example
///
/// ```rust
/// use rs_coreex::Options;
///
/// let options = Options {
///     threshold: 0.8,
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Minimum non-link word ratio for a child to join its parent's
    /// qualifying subset. The comparison is strict (`ratio > threshold`).
    ///
    /// Default: `0.9`
    pub threshold: f64,

    /// Weight of the subset text-to-link ratio in a node score.
    ///
    /// Default: `0.95`
    pub weight_ratio: f64,

    /// Weight of the subset share of all page words in a node score.
    ///
    /// Default: `0.05`
    pub weight_text: f64,

    /// Tag names treated as links (lowercase).
    ///
    /// Default: `["a"]`
    pub link_tags: Vec<String>,

    /// Tag names stripped during preprocessing (lowercase). Comment nodes
    /// are always stripped.
    ///
    /// Default: [`DEFAULT_FORBIDDEN_TAGS`]
    pub forbidden_tags: Vec<String>,

    /// Base URL of the document.
    ///
    /// When set, relative `href` and `src` attributes inside the extracted
    /// subtree are resolved against it.
    ///
    /// Default: `None`
    pub base_url: Option<String>,

    /// Maximum element nesting below `<body>`.
    ///
    /// Extraction fails with [`Error::TooDeep`] when the guard is exceeded.
    ///
    /// Default: `None` (unbounded)
    pub max_tree_depth: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            threshold: 0.9,
            weight_ratio: 0.95,
            weight_text: 0.05,
            link_tags: DEFAULT_LINK_TAGS.iter().map(|t| (*t).to_string()).collect(),
            forbidden_tags: DEFAULT_FORBIDDEN_TAGS
                .iter()
                .map(|t| (*t).to_string())
                .collect(),
            base_url: None,
            max_tree_depth: None,
        }
    }
}

impl Options {
    /// Check that thresholds and weights are usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] if `threshold` lies outside `[0, 1]`
    /// or either weight is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::InvalidOptions(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }

        for (name, weight) in [
            ("weight_ratio", self.weight_ratio),
            ("weight_text", self.weight_text),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::InvalidOptions(format!(
                    "{name} must be a finite non-negative number, got {weight}"
                )));
            }
        }

        Ok(())
    }

    /// Whether `tag` is counted as a link.
    #[must_use]
    pub fn is_link_tag(&self, tag: &str) -> bool {
        self.link_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Whether `tag` is stripped by the preprocessor.
    #[must_use]
    pub fn is_forbidden_tag(&self, tag: &str) -> bool {
        self.forbidden_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
