//! Result types for extraction output.

use serde::{Deserialize, Serialize};

/// Serialized outcome of an extraction.
///
/// The selected subtree is rendered both as markup and as whitespace-collapsed
/// text; the remaining fields describe why it was chosen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Selected subtree as HTML (outer markup), after pruning.
    pub content_html: String,

    /// Selected subtree as plain text with whitespace runs collapsed.
    pub content_text: String,

    /// Tag name of the selected element.
    pub tag: String,

    /// Score of the selected element, `None` if it was never scored.
    pub score: Option<f64>,

    /// Words in the selected subtree before pruning.
    pub text_count: usize,

    /// Link words in the selected subtree before pruning.
    pub link_count: usize,

    /// Words in the whole body after preprocessing.
    pub page_text_count: usize,

    /// Element children kept because they qualified.
    pub kept_children: usize,

    /// Element children removed during pruning.
    pub dropped_children: usize,
}
