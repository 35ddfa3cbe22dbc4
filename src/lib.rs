//! # libsuffixtree
//!
//! Linear-time suffix tree construction and substring queries.
//!
//! The tree is built with Ukkonen's online algorithm, as described in:
//!
//! > Ukkonen, Esko. "On-line construction of suffix trees."
//! > Algorithmica 14.3 (1995): 249-260.
//!
//! Construction runs in O(n) time and space for a text of n symbols; after
//! that, substring existence, occurrence listing and counting, suffix
//! membership, and longest-repeated-substring queries all run in time
//! proportional to the pattern (plus reported output), never the text.
//!
//! ## Example
//!
//! ```rust
//! use libsuffixtree::prelude::*;
//!
//! let tree = SuffixTree::build("mississippi").unwrap();
//!
//! assert!(tree.search("issi"));
//! assert_eq!(tree.occurrences("issi"), vec![1, 4]);
//! assert_eq!(tree.occurrence_count("ss"), 2);
//! assert!(tree.is_suffix("ppi"));
//! assert_eq!(tree.longest_repeated_substring(), "issi");
//! ```
//!
//! ## Design
//!
//! Nodes live in a flat arena and reference each other by index, so suffix
//! links (which cut sideways across the tree) are plain integers rather than
//! shared pointers. Edge labels are index ranges into the text buffer; leaf
//! edges share one open end bound, which is how Ukkonen's "rule 1" extends
//! every leaf per phase in constant time. A built tree is immutable and may
//! be queried concurrently from any number of threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod builder;
mod node;
mod text;

pub mod error;
pub mod tree;

pub use crate::error::{Result, TreeError};
pub use crate::tree::{Suffixes, SuffixTree};

/// Common imports for convenient usage.
pub mod prelude {
    pub use crate::error::{Result, TreeError};
    pub use crate::tree::{Suffixes, SuffixTree};
}
