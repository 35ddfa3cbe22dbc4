//! The public suffix tree type and its query engine.
//!
//! # Overview
//!
//! A [`SuffixTree`] is built once from a text and is immutable afterwards.
//! Every query is a read-only descent from the root, matching pattern
//! symbols against edge labels, so queries cost time proportional to the
//! pattern length plus (for occurrence listing) the size of the reported
//! subtree, never the text length.
//!
//! # Thread Safety
//!
//! The tree holds no interior mutability: once [`SuffixTree::build`]
//! returns, any number of threads may query one shared instance without
//! synchronization.
//!
//! # Example
//!
//! ```rust
//! use libsuffixtree::SuffixTree;
//!
//! let tree = SuffixTree::build("banana").unwrap();
//! assert!(tree.search("ana"));
//! assert_eq!(tree.occurrences("ana"), vec![1, 3]);
//! assert_eq!(tree.longest_repeated_substring(), "ana");
//! ```

use std::fmt;

use crate::builder::Builder;
use crate::error::Result;
use crate::node::{Node, NodeId, ROOT};
use crate::text::{Symbol, Text, TERMINATOR};

/// Where a successful descent landed.
///
/// `edge_pos` is the text index of the next unmatched symbol on `node`'s
/// incoming edge; when it equals the label's end the descent sits exactly
/// on `node`.
struct Descent {
    node: NodeId,
    edge_pos: usize,
    depth: usize,
}

/// A compressed trie over all suffixes of a text, built with Ukkonen's
/// algorithm in O(n) time and space.
///
/// See the [module docs](self) for usage and the thread-safety contract.
pub struct SuffixTree {
    text: Text,
    nodes: Vec<Node>,
    leaf_count: usize,
}

impl SuffixTree {
    /// Build the suffix tree of `text`.
    ///
    /// Fails with [`TreeError::EmptyText`](crate::TreeError::EmptyText) if
    /// `text` is empty; any non-empty text constructs successfully.
    ///
    /// ```rust
    /// use libsuffixtree::{SuffixTree, TreeError};
    ///
    /// assert!(SuffixTree::build("banana").is_ok());
    /// assert_eq!(SuffixTree::build("").unwrap_err(), TreeError::EmptyText);
    /// ```
    pub fn build(text: &str) -> Result<Self> {
        Self::from_bytes(text.as_bytes())
    }

    /// Build the suffix tree of a raw byte sequence.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let text = Text::from_bytes(bytes)?;
        let (nodes, leaf_count) = Builder::run(&text);
        Ok(Self {
            text,
            nodes,
            leaf_count,
        })
    }

    /// Whether `pattern` occurs in the text.
    ///
    /// The empty pattern always matches.
    pub fn search(&self, pattern: &str) -> bool {
        self.search_bytes(pattern.as_bytes())
    }

    /// Byte-slice form of [`search`](Self::search).
    pub fn search_bytes(&self, pattern: &[u8]) -> bool {
        self.descend(pattern_symbols(pattern)).is_some()
    }

    /// All starting positions of `pattern` in the text, ascending and
    /// duplicate-free. Overlapping occurrences are all reported.
    ///
    /// The empty pattern occurs at every position `0..=text_len()`.
    pub fn occurrences(&self, pattern: &str) -> Vec<usize> {
        let Some(descent) = self.descend(pattern_symbols(pattern.as_bytes()))
        else {
            return Vec::new();
        };
        // Complete the partially matched edge; every leaf below starts an
        // occurrence at (buffer length - leaf depth).
        let depth = descent.depth + (self.node_end(descent.node) - descent.edge_pos);
        let mut positions = Vec::new();
        self.collect_leaf_starts(descent.node, depth, &mut positions);
        positions.sort_unstable();
        positions
    }

    /// Number of occurrences of `pattern` in the text.
    ///
    /// Behaviorally `occurrences(pattern).len()`, but counts subtree leaves
    /// without materializing positions.
    pub fn occurrence_count(&self, pattern: &str) -> usize {
        match self.descend(pattern_symbols(pattern.as_bytes())) {
            Some(descent) => self.count_leaves(descent.node),
            None => 0,
        }
    }

    /// Whether `pattern` is a suffix of the text.
    ///
    /// The empty pattern is a suffix. A proper substring that merely starts
    /// a suffix returns false.
    pub fn is_suffix(&self, pattern: &str) -> bool {
        // A pattern followed by the terminator descends iff the match ends
        // at the end of the text: the terminator occurs nowhere else.
        let symbols = pattern_symbols(pattern.as_bytes())
            .chain(std::iter::once(TERMINATOR));
        self.descend(symbols).is_some()
    }

    /// The longest substring occurring at least twice, or the empty string
    /// if no symbol repeats.
    ///
    /// When several repeats share the maximal length the first one found in
    /// symbol-ordered depth-first traversal is returned; the choice is
    /// deterministic for a given text.
    pub fn longest_repeated_substring(&self) -> String {
        // The deepest internal node with two or more children; a repeat must
        // branch. The path to a node of depth d spells text[end - d .. end]
        // where end is the node's own label end.
        let mut best_depth = 0;
        let mut best_end = 0;
        let mut stack: Vec<(NodeId, usize)> = vec![(ROOT, 0)];
        while let Some((node, depth)) = stack.pop() {
            if depth > best_depth {
                best_depth = depth;
                best_end = self.node_end(node);
            }
            // Reverse order so the smallest symbol is processed first.
            for &(_, child) in self.nodes[node].edges.iter().rev() {
                if !self.nodes[child].is_leaf() {
                    stack.push((child, depth + self.edge_len(child)));
                }
            }
        }
        self.label_string(best_end - best_depth, best_end)
    }

    /// Iterate over every suffix of the terminated text, one per leaf.
    ///
    /// The terminator is rendered as `'$'`; the shortest suffix is
    /// therefore `"$"` and the count is `text_len() + 1`.
    pub fn suffixes(&self) -> Suffixes<'_> {
        Suffixes {
            tree: self,
            stack: vec![(ROOT, 0)],
        }
    }

    /// Total number of nodes (root, internal, and leaf). O(1).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaves; equals the terminated buffer length. O(1).
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Number of non-leaf nodes, the root included. O(1).
    pub fn internal_node_count(&self) -> usize {
        self.nodes.len() - self.leaf_count
    }

    /// Length of the original text, terminator excluded.
    pub fn text_len(&self) -> usize {
        self.text.len() - 1
    }

    /// The original input bytes, borrowed; no copy is made.
    pub fn text(&self) -> &[u8] {
        self.text.bytes()
    }

    /// Structural self-check.
    ///
    /// Verifies the node-count bound (`2m - 1` for buffer length `m`), the
    /// leaf count (`m`), distinct first symbols among sibling edges, label
    /// sanity, and that every non-root internal node carries a suffix link
    /// whose target is reachable from the root. Returns false only on a
    /// construction bug.
    pub fn is_valid(&self) -> bool {
        let m = self.text.len();
        if self.nodes.len() > 2 * m - 1 {
            return false;
        }

        let mut reachable = vec![false; self.nodes.len()];
        let mut leaves = 0;
        let mut stack = vec![ROOT];
        reachable[ROOT] = true;
        while let Some(node) = stack.pop() {
            if self.nodes[node].is_leaf() {
                leaves += 1;
            }
            let edges = &self.nodes[node].edges;
            for (idx, &(symbol, child)) in edges.iter().enumerate() {
                // Sorted and strictly ascending: siblings are distinct.
                if idx > 0 && edges[idx - 1].0 >= symbol {
                    return false;
                }
                // The edge key must agree with the child's label.
                if self.text[self.nodes[child].start] != symbol {
                    return false;
                }
                if self.node_end(child) <= self.nodes[child].start {
                    return false;
                }
                if reachable[child] {
                    return false; // a node may have only one parent
                }
                reachable[child] = true;
                stack.push(child);
            }
        }

        if leaves != m || self.leaf_count != m {
            return false;
        }

        self.nodes.iter().enumerate().all(|(id, node)| {
            if id == ROOT || node.is_leaf() {
                return true;
            }
            match node.suffix_link {
                Some(target) => reachable[target],
                None => false,
            }
        })
    }

    /// Indented human-readable dump of the tree, for debugging small texts.
    pub fn render(&self) -> String {
        let mut out = String::from("(root)\n");
        // Preorder via an explicit stack; children pushed in reverse so the
        // smallest symbol prints first.
        let mut stack: Vec<(NodeId, usize)> = self.nodes[ROOT]
            .edges
            .iter()
            .rev()
            .map(|&(_, child)| (child, 1))
            .collect();
        while let Some((node, indent)) = stack.pop() {
            let label = self.label_string(self.nodes[node].start, self.node_end(node));
            let kind = if self.nodes[node].is_leaf() {
                "leaf"
            } else {
                "inner"
            };
            out.push_str(&"  ".repeat(indent));
            out.push_str(&format!("{label:?} ({kind})\n"));
            for &(_, child) in self.nodes[node].edges.iter().rev() {
                stack.push((child, indent + 1));
            }
        }
        out
    }

    /// Match `pattern` against edge labels from the root.
    fn descend(&self, pattern: impl Iterator<Item = Symbol>) -> Option<Descent> {
        let mut node = ROOT;
        let mut edge_pos = 0;
        let mut end = 0;
        let mut depth = 0;
        for symbol in pattern {
            if edge_pos == end {
                node = self.nodes[node].find_edge(symbol)?;
                edge_pos = self.nodes[node].start;
                end = self.node_end(node);
            }
            if self.text[edge_pos] != symbol {
                return None;
            }
            edge_pos += 1;
            depth += 1;
        }
        Some(Descent {
            node,
            edge_pos,
            depth,
        })
    }

    /// Record the suffix start of every leaf under `node`, given the path
    /// depth (in symbols) from the root to `node`.
    ///
    /// Iterative: a degenerate text (one repeated symbol) produces a
    /// path-shaped tree of depth n, too deep for the call stack.
    fn collect_leaf_starts(&self, node: NodeId, depth: usize, out: &mut Vec<usize>) {
        let mut stack = vec![(node, depth)];
        while let Some((node, depth)) = stack.pop() {
            if self.nodes[node].is_leaf() {
                out.push(self.text.len() - depth);
                continue;
            }
            for &(_, child) in &self.nodes[node].edges {
                stack.push((child, depth + self.edge_len(child)));
            }
        }
    }

    fn count_leaves(&self, node: NodeId) -> usize {
        let mut count = 0;
        let mut stack = vec![node];
        while let Some(node) = stack.pop() {
            if self.nodes[node].is_leaf() {
                count += 1;
                continue;
            }
            stack.extend(self.nodes[node].edges.iter().map(|&(_, child)| child));
        }
        count
    }

    fn node_end(&self, node: NodeId) -> usize {
        self.nodes[node].end_at(self.text.len())
    }

    fn edge_len(&self, node: NodeId) -> usize {
        self.nodes[node].edge_len(self.text.len())
    }

    /// Render `text[start..end)`, the terminator as `'$'`.
    fn label_string(&self, start: usize, end: usize) -> String {
        (start..end)
            .map(|i| {
                let symbol = self.text[i];
                if symbol == TERMINATOR {
                    '$'
                } else {
                    char::from(symbol as u8)
                }
            })
            .collect()
    }
}

impl fmt::Debug for SuffixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuffixTree")
            .field("text_len", &self.text_len())
            .field("nodes", &self.node_count())
            .field("leaves", &self.leaf_count())
            .finish()
    }
}

/// Iterator over all suffixes of the terminated text.
///
/// Produced by [`SuffixTree::suffixes`]; yields one `String` per leaf in
/// symbol-ordered depth-first order.
pub struct Suffixes<'a> {
    tree: &'a SuffixTree,
    stack: Vec<(NodeId, usize)>,
}

impl Iterator for Suffixes<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((node, depth)) = self.stack.pop() {
            if self.tree.nodes[node].is_leaf() {
                let start = self.tree.text.len() - depth;
                return Some(self.tree.label_string(start, self.tree.text.len()));
            }
            for &(_, child) in self.tree.nodes[node].edges.iter().rev() {
                self.stack.push((child, depth + self.tree.edge_len(child)));
            }
        }
        None
    }
}

/// Widen a byte pattern into the internal symbol alphabet.
fn pattern_symbols(pattern: &[u8]) -> impl Iterator<Item = Symbol> + '_ {
    pattern.iter().map(|&b| Symbol::from(b))
}
