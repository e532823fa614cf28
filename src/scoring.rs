//! Node scoring.
//!
//! Every container gets
//!
//! ```text
//! score = weight_ratio * (set_text - set_link) / set_text
//!       + weight_text  * set_text / page_text
//! ```
//!
//! where `page_text` is the word total of the annotation root. The first
//! term rewards subtrees made of prose rather than links, the second breaks
//! ties in favor of subtrees holding more of the page. Links and containers
//! without trusted words are left unscored.

use tracing::{debug, trace};

use crate::annotate::{Annotation, Annotations, Container};
use crate::Options;

/// Score a single container against the page word total.
///
/// Returns `None` when the container has no trusted words.
///
/// # Examples
///
/// ```
/// use rs_coreex::annotate::{Container, Counts};
/// use rs_coreex::scoring::score_container;
/// use rs_coreex::Options;
///
/// let container = Container {
///     counts: Counts { text: 12, link: 2 },
///     set_counts: Counts { text: 10, link: 0 },
///     subset: vec![1],
///     score: None,
/// };
/// let score = score_container(&container, 12, &Options::default()).unwrap_or_default();
/// assert!((score - (0.95 + 0.05 * 10.0 / 12.0)).abs() < 1e-9);
/// ```
#[must_use]
pub fn score_container(container: &Container, page_text: usize, options: &Options) -> Option<f64> {
    let set = container.set_counts;
    if set.text == 0 || page_text == 0 {
        return None;
    }

    let set_text = set.text as f64;
    let ratio = set.text.saturating_sub(set.link) as f64 / set_text;
    Some(options.weight_ratio * ratio + options.weight_text * set_text / page_text as f64)
}

/// Score every container in the arena.
///
/// The page total is taken once from the root and used for every node.
/// Returns that total.
pub fn set_scores(arena: &mut Annotations, options: &Options) -> usize {
    let page_text = if arena.is_empty() {
        0
    } else {
        arena.get(0).counts().map_or(0, |c| c.text)
    };

    let mut scored = 0_usize;
    for idx in 0..arena.len() {
        if let Annotation::Container(container) = arena.get_mut(idx) {
            let score = score_container(container, page_text, options);
            container.score = score;
            if let Some(score) = score {
                scored += 1;
                trace!(idx, score, "scored node");
            }
        }
    }

    debug!(page_text, scored, "scoring complete");
    page_text
}
