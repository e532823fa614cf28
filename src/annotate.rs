//! Per-node word/link accounting and qualifying-subset construction.
//!
//! Annotations live in a side table rather than on the DOM: every element
//! below (and including) the root gets a dense [`NodeIdx`] in document
//! pre-order, and all counts are stored in an arena indexed by it.
//!
//! For each non-link element the annotator records:
//! - `counts`: all words of the subtree (own text, descendants, child tails)
//!   and the words attributable to links
//! - `set_counts`: the same, restricted to own text, child tails and the
//!   children in the qualifying subset
//! - `subset`: children whose non-link word ratio exceeds the threshold
//!
//! Links weigh exactly one word, whatever their text, and are not descended
//! into. Children are always complete before their parent. The pass walks
//! the arena in reverse pre-order instead of recursing, so deeply nested
//! markup cannot exhaust the stack.

use dom_query::NodeRef;
use tracing::debug;

use crate::etree;
use crate::text::count_words;
use crate::Options;

/// Position of an element in the annotation arena (document pre-order).
pub type NodeIdx = usize;

/// Fixed weight of a link element.
pub const LINK_UNIT: Counts = Counts { text: 1, link: 1 };

/// Word totals of a subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    /// All words.
    pub text: usize,
    /// Words attributable to links.
    pub link: usize,
}

impl Counts {
    /// Share of words not attributable to links, `None` when there are no words.
    #[must_use]
    pub fn non_link_ratio(&self) -> Option<f64> {
        if self.text == 0 {
            return None;
        }
        Some(self.text.saturating_sub(self.link) as f64 / self.text as f64)
    }

    fn add(&mut self, other: Counts) {
        self.text += other.text;
        self.link += other.link;
    }
}

/// Annotation of a content container (any element that is not a link).
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    /// Totals over the whole subtree.
    pub counts: Counts,
    /// Totals over own text, child tails and qualifying children only.
    pub set_counts: Counts,
    /// Qualifying children, ascending (document order).
    pub subset: Vec<NodeIdx>,
    /// Score, filled in once by the scorer. Stays `None` when the node has
    /// no trusted words.
    pub score: Option<f64>,
}

impl Container {
    /// Whether `child` belongs to the qualifying subset.
    #[must_use]
    pub fn contains(&self, child: NodeIdx) -> bool {
        self.subset.binary_search(&child).is_ok()
    }
}

/// State of one element in the arena.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Annotation {
    /// Never visited, e.g. elements nested inside a link.
    #[default]
    Unannotated,
    /// A link element; always carries [`LINK_UNIT`].
    Link(Counts),
    /// A content container with a qualifying subset.
    Container(Container),
}

impl Annotation {
    /// Subtree totals, if annotated.
    #[must_use]
    pub fn counts(&self) -> Option<Counts> {
        match self {
            Self::Unannotated => None,
            Self::Link(counts) => Some(*counts),
            Self::Container(c) => Some(c.counts),
        }
    }

    /// Container data, `None` for links and unannotated nodes.
    #[must_use]
    pub fn container(&self) -> Option<&Container> {
        match self {
            Self::Container(c) => Some(c),
            _ => None,
        }
    }

    /// Score, `None` for links, unannotated and unscorable nodes.
    #[must_use]
    pub fn score(&self) -> Option<f64> {
        self.container().and_then(|c| c.score)
    }
}

/// Arena of annotations for one extraction run.
pub struct Annotations<'a> {
    nodes: Vec<NodeRef<'a>>,
    children: Vec<Vec<NodeIdx>>,
    states: Vec<Annotation>,
}

impl<'a> Annotations<'a> {
    /// Index the elements under `root` and annotate them.
    #[must_use]
    pub fn build(root: &NodeRef<'a>, options: &Options) -> Self {
        let mut arena = Self::index(root);
        arena.annotate(options);
        arena
    }

    /// Assign pre-order indices to `root` and its element descendants.
    fn index(root: &NodeRef<'a>) -> Self {
        let mut nodes = Vec::new();
        let mut children: Vec<Vec<NodeIdx>> = Vec::new();
        let mut stack: Vec<(NodeRef<'a>, Option<NodeIdx>)> = vec![(*root, None)];

        while let Some((node, parent)) = stack.pop() {
            let idx = nodes.len();
            nodes.push(node);
            children.push(Vec::new());
            if let Some(p) = parent {
                children[p].push(idx);
            }
            for child in etree::element_children(&node).into_iter().rev() {
                stack.push((child, Some(idx)));
            }
        }

        let states = vec![Annotation::Unannotated; nodes.len()];
        Self {
            nodes,
            children,
            states,
        }
    }

    fn annotate(&mut self, options: &Options) {
        let is_link: Vec<bool> = self
            .nodes
            .iter()
            .map(|n| etree::tag(n).is_some_and(|t| options.is_link_tag(&t)))
            .collect();

        // Elements inside a link are left unannotated.
        let mut hidden = vec![false; self.nodes.len()];
        for idx in 0..self.nodes.len() {
            if hidden[idx] || is_link[idx] {
                for &child in &self.children[idx] {
                    hidden[child] = true;
                }
            }
        }

        for idx in (0..self.nodes.len()).rev() {
            if hidden[idx] {
                continue;
            }
            self.states[idx] = if is_link[idx] {
                Annotation::Link(LINK_UNIT)
            } else {
                Annotation::Container(self.container_for(idx, options))
            };
        }

        if let Some(root) = self.states.first().and_then(Annotation::counts) {
            debug!(
                elements = self.nodes.len(),
                text_cnt = root.text,
                link_cnt = root.link,
                "annotated tree"
            );
        }
    }

    /// Fold the (already annotated) children of `idx` into a container.
    fn container_for(&self, idx: NodeIdx, options: &Options) -> Container {
        let own = count_words(&etree::text(&self.nodes[idx]));
        let mut counts = Counts { text: own, link: 0 };
        let mut set_counts = counts;
        let mut subset = Vec::new();

        for &child in &self.children[idx] {
            let child_counts = self.states[child].counts().unwrap_or_default();
            counts.add(child_counts);

            let tail_words = count_words(&etree::tail(&self.nodes[child]));
            counts.text += tail_words;
            set_counts.text += tail_words;

            if child_counts
                .non_link_ratio()
                .is_some_and(|ratio| ratio > options.threshold)
            {
                subset.push(child);
                set_counts.add(child_counts);
            }
        }

        Container {
            counts,
            set_counts,
            subset,
            score: None,
        }
    }

    /// Number of indexed elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing was indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// DOM node at `idx`.
    #[must_use]
    pub fn node(&self, idx: NodeIdx) -> NodeRef<'a> {
        self.nodes[idx]
    }

    /// Element children of `idx` as indexed before any pruning.
    #[must_use]
    pub fn children(&self, idx: NodeIdx) -> &[NodeIdx] {
        &self.children[idx]
    }

    /// Annotation state of `idx`.
    #[must_use]
    pub fn get(&self, idx: NodeIdx) -> &Annotation {
        &self.states[idx]
    }

    pub(crate) fn get_mut(&mut self, idx: NodeIdx) -> &mut Annotation {
        &mut self.states[idx]
    }

    /// Arena index of a DOM node, if it was indexed.
    ///
    /// Linear scan over the arena. Meant for tests and debugging; the
    /// pipeline itself only walks indices.
    #[must_use]
    pub fn find(&self, node: &NodeRef) -> Option<NodeIdx> {
        self.nodes.iter().position(|n| n.id == node.id)
    }
}
