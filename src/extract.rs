//! Extraction pipeline.
//!
//! 1. Preprocess the body (strip forbidden elements and comments)
//! 2. Annotate the cleaned body with word/link counts and qualifying subsets
//! 3. Score every container against the body word total
//! 4. Select the best-scoring element (document order breaks ties)
//! 5. Drop its children that are not in its qualifying subset
//!
//! The tree is mutated in place; the selected element is returned as a
//! `Selection` into the caller's document.

use dom_query::{Document, NodeRef, Selection};
use tracing::debug;

use crate::annotate::{Annotation, Annotations, Counts, NodeIdx};
use crate::etree;
use crate::preprocess::preprocess;
use crate::scoring::set_scores;
use crate::text::collapse_whitespace;
use crate::url_utils::{make_links_absolute, parse_base_url};
use crate::{Error, ExtractResult, Options, Result};

/// Selected content element and the figures that led to it.
pub struct Extraction<'a> {
    /// The selected element, already pruned.
    pub node: Selection<'a>,
    /// Tag name of the selected element.
    pub tag: String,
    /// Score of the selected element.
    pub score: Option<f64>,
    /// Word totals of the selected subtree before pruning.
    pub counts: Counts,
    /// Word total of the body after preprocessing.
    pub page_text: usize,
    /// Element children kept.
    pub kept_children: usize,
    /// Element children removed.
    pub dropped_children: usize,
}

impl Extraction<'_> {
    /// Render the selected subtree into an owned [`ExtractResult`].
    #[must_use]
    pub fn to_result(&self) -> ExtractResult {
        ExtractResult {
            content_html: self.node.html().to_string(),
            content_text: collapse_whitespace(&self.node.text()),
            tag: self.tag.clone(),
            score: self.score,
            text_count: self.counts.text,
            link_count: self.counts.link,
            page_text_count: self.page_text,
            kept_children: self.kept_children,
            dropped_children: self.dropped_children,
        }
    }
}

/// Parse `html` and extract its main content.
pub(crate) fn extract_content(html: &str, options: &Options) -> Result<ExtractResult> {
    let doc = Document::from(html);
    let extraction = extract_document(&doc, options)?;
    Ok(extraction.to_result())
}

/// Extract the main content element of a parsed document.
///
/// The document body is modified in place: forbidden elements and comments
/// are removed, and non-qualifying children of the selected element are
/// detached. When `options.base_url` is set, relative links inside the
/// selected element are resolved against it.
///
/// # Errors
///
/// - [`Error::InvalidOptions`] / [`Error::InvalidUrl`] for bad configuration
/// - [`Error::NoContent`] when the document has no body or no element
///   survives preprocessing
/// - [`Error::TooDeep`] when `options.max_tree_depth` is exceeded
pub fn extract_document<'a>(doc: &'a Document, options: &Options) -> Result<Extraction<'a>> {
    options.validate()?;
    let base = options.base_url.as_deref().map(parse_base_url).transpose()?;

    let body = doc.select("body");
    let Some(body) = body.nodes().first().copied() else {
        return Err(Error::NoContent);
    };

    let extraction = extract_node(&body, options)?;

    if let Some(base) = base {
        let rewritten = make_links_absolute(&extraction.node, &base);
        debug!(rewritten, %base, "resolved relative links");
    }

    Ok(extraction)
}

/// Run the pipeline on an arbitrary root element (normally `<body>`).
///
/// # Errors
///
/// Same as [`extract_document`], except for base-URL handling which is not
/// performed here.
pub fn extract_node<'a>(root: &NodeRef<'a>, options: &Options) -> Result<Extraction<'a>> {
    options.validate()?;

    if let Some(limit) = options.max_tree_depth {
        let depth = etree::max_depth(root);
        if depth > limit {
            return Err(Error::TooDeep { depth, limit });
        }
    }

    preprocess(root, options);

    if etree::element_children(root).is_empty() {
        debug!("no element left after preprocessing");
        return Err(Error::NoContent);
    }

    let mut arena = Annotations::build(root, options);
    let page_text = set_scores(&mut arena, options);

    let Some(best) = select_best(&arena) else {
        return Err(Error::NoContent);
    };

    let annotation = arena.get(best);
    let score = annotation.score();
    let counts = annotation.counts().unwrap_or_default();
    let (kept_children, dropped_children) = prune(&arena, best);

    let node = arena.node(best);
    let tag = etree::tag(&node).unwrap_or_default();
    debug!(
        tag = %tag,
        score = ?score,
        kept_children,
        dropped_children,
        "selected content node"
    );

    Ok(Extraction {
        node: Selection::from(node),
        tag,
        score,
        counts,
        page_text,
        kept_children,
        dropped_children,
    })
}

/// Index of the highest-scoring element; the first one wins on ties.
///
/// Unscored elements count as zero, so a page where nothing scores falls
/// back to the root. `None` only for an empty arena.
fn select_best(arena: &Annotations) -> Option<NodeIdx> {
    let mut best: Option<(NodeIdx, f64)> = None;

    for idx in 0..arena.len() {
        let score = arena.get(idx).score().unwrap_or(0.0);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((idx, score));
        }
    }

    best.map(|(idx, _)| idx)
}

/// Detach the children of `idx` outside its qualifying subset.
///
/// Links and unannotated elements have no subset, so all their children go.
/// Returns `(kept, dropped)`.
fn prune(arena: &Annotations, idx: NodeIdx) -> (usize, usize) {
    let container = match arena.get(idx) {
        Annotation::Container(c) => Some(c),
        Annotation::Link(_) | Annotation::Unannotated => None,
    };

    let mut kept = 0;
    let mut dropped = 0;
    for &child in arena.children(idx) {
        if container.is_some_and(|c| c.contains(child)) {
            kept += 1;
        } else {
            etree::drop_tree(&arena.node(child));
            dropped += 1;
        }
    }

    (kept, dropped)
}
