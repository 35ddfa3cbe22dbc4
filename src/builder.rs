//! Ukkonen's online construction.
//!
//! The builder processes the terminated text one symbol per *phase*. Within
//! a phase it performs the *extensions* still owed (tracked by `remainder`)
//! until the already-present rule fires or the debt is paid off. Three rules
//! cover every extension:
//!
//! - **Rule 1** (leaf growth) is never executed per leaf: all leaf edges
//!   share an open end that resolves against the phase counter, so advancing
//!   the counter extends every leaf at once.
//! - **Rule 2** creates a new leaf, splitting an edge first when the active
//!   point sits mid-label.
//! - **Rule 3** finds the next symbol already present and stops the phase;
//!   every remaining extension of the phase is then also already present.
//!
//! The active point `(active_node, active_edge, active_length)` carries the
//! insertion position across extensions and phases. After each rule 2 the
//! point moves to the next shorter suffix, from the root by shrinking the
//! edge window and elsewhere by following a suffix link; the skip/count walk
//! in [`Builder::walked_down`] then re-normalizes the point one whole edge
//! per step without comparing interior symbols, which is what keeps the
//! total construction work linear.

use crate::node::{Node, NodeId, ROOT};
use crate::text::Text;

/// Transient construction state; consumed by [`Builder::run`].
pub(crate) struct Builder<'t> {
    text: &'t Text,
    nodes: Vec<Node>,

    active_node: NodeId,
    /// Text index of the symbol selecting the active edge.
    active_edge: usize,
    /// Symbols already matched along the active edge.
    active_length: usize,

    /// Extensions owed from this and earlier phases.
    remainder: usize,
    /// Internal node created earlier in the current phase, awaiting its
    /// suffix link.
    pending_link: Option<NodeId>,
    /// Live exclusive end for all open leaf edges; `phase + 1`.
    position: usize,

    leaf_count: usize,
}

impl<'t> Builder<'t> {
    /// Build the node arena for `text`, returning it with the leaf count.
    pub(crate) fn run(text: &'t Text) -> (Vec<Node>, usize) {
        let mut builder = Builder {
            text,
            // Never more than 2m - 1 nodes for a buffer of length m.
            nodes: Vec::with_capacity(2 * text.len() - 1),
            active_node: ROOT,
            active_edge: 0,
            active_length: 0,
            remainder: 0,
            pending_link: None,
            position: 0,
            leaf_count: 0,
        };
        builder.nodes.push(Node::root());

        for phase in 0..text.len() {
            builder.extend(phase);
        }

        // The terminator is unique, so the final phase drains every owed
        // extension; anything left over is a construction bug.
        debug_assert_eq!(builder.remainder, 0);
        debug_assert_eq!(builder.leaf_count, text.len());

        (builder.nodes, builder.leaf_count)
    }

    /// One phase: account for the symbol at `phase` in every suffix.
    fn extend(&mut self, phase: usize) {
        // Rule 1 for every open leaf at once.
        self.position = phase + 1;
        self.remainder += 1;
        self.pending_link = None;

        let symbol = self.text[phase];

        while self.remainder > 0 {
            if self.active_length == 0 {
                self.active_edge = phase;
            }

            let edge_symbol = self.text[self.active_edge];
            match self.nodes[self.active_node].find_edge(edge_symbol) {
                None => {
                    // Rule 2: new leaf hanging directly off the active node.
                    let leaf = self.new_leaf(phase);
                    self.nodes[self.active_node].set_edge(edge_symbol, leaf);
                    self.resolve_pending_link(self.active_node);
                }
                Some(next) => {
                    if self.walked_down(next) {
                        continue;
                    }

                    let probe = self.nodes[next].start + self.active_length;
                    if self.text[probe] == symbol {
                        // Rule 3: already present. The remaining extensions
                        // of this phase are implicitly present too, so the
                        // phase stops here and the debt carries forward.
                        self.resolve_pending_link(self.active_node);
                        self.active_length += 1;
                        return;
                    }

                    // Rule 2: split the edge, attach a new leaf.
                    let split = self.split_edge(next, probe);
                    let leaf = self.new_leaf(phase);
                    self.nodes[split].set_edge(symbol, leaf);
                    self.resolve_pending_link(split);
                    self.pending_link = Some(split);
                }
            }

            self.remainder -= 1;

            if self.active_node == ROOT && self.active_length > 0 {
                // Next shorter suffix starts one symbol later.
                self.active_length -= 1;
                self.active_edge = phase + 1 - self.remainder;
            } else if self.active_node != ROOT {
                self.active_node =
                    self.nodes[self.active_node].suffix_link.unwrap_or(ROOT);
            }
        }
    }

    /// Skip/count canonization step: if the active point has outrun the
    /// label of the edge to `next`, hop onto `next` and report that the
    /// caller should re-select the edge.
    fn walked_down(&mut self, next: NodeId) -> bool {
        let edge_len = self.nodes[next].edge_len(self.position);
        if self.active_length < edge_len {
            return false;
        }
        self.active_node = next;
        self.active_edge += edge_len;
        self.active_length -= edge_len;
        true
    }

    /// Split the edge into `child` at text index `split_point`, returning
    /// the new internal node now sitting above `child`.
    fn split_edge(&mut self, child: NodeId, split_point: usize) -> NodeId {
        let start = self.nodes[child].start;
        let split = self.nodes.len();
        self.nodes.push(Node::internal(start, split_point));

        // The child keeps its end; its label now begins at the split point.
        self.nodes[child].start = split_point;
        self.nodes[split].set_edge(self.text[split_point], child);
        self.nodes[self.active_node].set_edge(self.text[start], split);

        split
    }

    fn new_leaf(&mut self, start: usize) -> NodeId {
        let leaf = self.nodes.len();
        self.nodes.push(Node::leaf(start));
        self.leaf_count += 1;
        leaf
    }

    /// Wire the internal node created by the previous rule 2 of this phase
    /// to `target`, per the suffix link discipline.
    fn resolve_pending_link(&mut self, target: NodeId) {
        if let Some(pending) = self.pending_link.take() {
            self.nodes[pending].suffix_link = Some(target);
        }
    }
}
