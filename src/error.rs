//! Error types for suffix tree construction.

use thiserror::Error;

/// Errors that can occur while building a suffix tree.
///
/// Queries on a built tree are total functions and never fail; the only
/// fallible operation in this crate is construction itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The input text was empty.
    ///
    /// A suffix tree indexes the suffixes of a non-empty text; there is
    /// nothing meaningful to build from zero symbols.
    #[error("cannot build a suffix tree from empty text")]
    EmptyText,
}

/// A specialized `Result` type for suffix tree construction.
pub type Result<T> = std::result::Result<T, TreeError>;
