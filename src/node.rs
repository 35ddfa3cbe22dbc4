//! Arena-backed node storage for the compressed suffix trie.
//!
//! Nodes live in a flat `Vec` and reference each other by index, so both
//! child edges and suffix links are plain integers with no ownership cycles.
//! Each node carries the label of its *incoming* edge as a half-open range
//! into the text buffer; leaves keep an open end that resolves against the
//! live phase counter during construction and against the full buffer length
//! once construction finishes.

use smallvec::SmallVec;

use crate::text::Symbol;

/// Index of a node in the arena.
pub(crate) type NodeId = usize;

/// The root is always the first node in the arena.
pub(crate) const ROOT: NodeId = 0;

/// End bound of a node's incoming edge label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EdgeEnd {
    /// Internal nodes (and the root) have a fixed, exclusive end index.
    Fixed(usize),
    /// Leaf edges extend to the current end of the text.
    ///
    /// During construction this is the shared per-phase counter, so every
    /// leaf edge grows by one symbol per phase without being touched.
    Open,
}

/// A state in the compressed trie.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    /// Start index (inclusive) of the incoming edge label.
    pub(crate) start: usize,

    /// End bound of the incoming edge label.
    pub(crate) end: EdgeEnd,

    /// Outgoing edges: (first symbol of the child's label, child id).
    ///
    /// Kept sorted by symbol; at most one edge per first symbol. Four
    /// inline slots cover the common fan-out without a heap allocation.
    pub(crate) edges: SmallVec<[(Symbol, NodeId); 4]>,

    /// Suffix link to the node whose path drops the first symbol.
    ///
    /// Set for every internal node except the root; never set on leaves.
    pub(crate) suffix_link: Option<NodeId>,
}

/// Linear scan below this edge count, binary search at or above it.
const EDGE_SEARCH_THRESHOLD: usize = 16;

impl Node {
    /// The root node: empty incoming label, no suffix link.
    pub(crate) fn root() -> Self {
        Self {
            start: 0,
            end: EdgeEnd::Fixed(0),
            edges: SmallVec::new(),
            suffix_link: None,
        }
    }

    /// A leaf whose edge label starts at `start` and tracks the live end.
    pub(crate) fn leaf(start: usize) -> Self {
        Self {
            start,
            end: EdgeEnd::Open,
            edges: SmallVec::new(),
            suffix_link: None,
        }
    }

    /// An internal node with the fixed label `[start, end)`.
    ///
    /// The suffix link is preset to the root; the extension engine rewires
    /// it if another internal node is created later in the same phase.
    pub(crate) fn internal(start: usize, end: usize) -> Self {
        Self {
            start,
            end: EdgeEnd::Fixed(end),
            edges: SmallVec::new(),
            suffix_link: Some(ROOT),
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.end == EdgeEnd::Open
    }

    /// Exclusive end of the incoming edge label, resolving open ends
    /// against `open_end`.
    pub(crate) fn end_at(&self, open_end: usize) -> usize {
        match self.end {
            EdgeEnd::Fixed(end) => end,
            EdgeEnd::Open => open_end,
        }
    }

    /// Length of the incoming edge label.
    pub(crate) fn edge_len(&self, open_end: usize) -> usize {
        self.end_at(open_end) - self.start
    }

    /// Find the child reached by an edge whose label starts with `symbol`.
    pub(crate) fn find_edge(&self, symbol: Symbol) -> Option<NodeId> {
        if self.edges.len() < EDGE_SEARCH_THRESHOLD {
            self.edges
                .iter()
                .find(|(s, _)| *s == symbol)
                .map(|(_, id)| *id)
        } else {
            self.edges
                .binary_search_by_key(&symbol, |(s, _)| *s)
                .ok()
                .map(|idx| self.edges[idx].1)
        }
    }

    /// Add or replace the edge starting with `symbol`, keeping the edge
    /// list sorted.
    pub(crate) fn set_edge(&mut self, symbol: Symbol, target: NodeId) {
        match self.edges.binary_search_by_key(&symbol, |(s, _)| *s) {
            Ok(idx) => self.edges[idx].1 = target,
            Err(idx) => self.edges.insert(idx, (symbol, target)),
        }
    }
}
