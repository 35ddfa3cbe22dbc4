//! Immutable text buffer with a unique terminator symbol.
//!
//! Edge labels throughout the tree are index ranges into this buffer, never
//! copied substrings. Input bytes are widened to `u16` so the terminator can
//! occupy a value (`256`) that no byte of any input can collide with; this
//! makes terminator reservation unconditional and keeps query patterns
//! (which arrive as bytes) incapable of ever matching it.

use std::ops::Index;

use crate::error::{Result, TreeError};

/// Internal alphabet unit: a byte widened to `u16`, or [`TERMINATOR`].
pub(crate) type Symbol = u16;

/// The reserved end-of-text symbol, outside the byte range.
pub(crate) const TERMINATOR: Symbol = 256;

/// The input text plus terminator, frozen at construction.
///
/// The raw input bytes are kept alongside the widened symbols so callers
/// can borrow the original text without a narrowing copy.
#[derive(Clone)]
pub(crate) struct Text {
    bytes: Vec<u8>,
    symbols: Vec<Symbol>,
}

impl Text {
    /// Widen `bytes` and append the terminator.
    ///
    /// Fails with [`TreeError::EmptyText`] before allocating anything if the
    /// input is empty.
    pub(crate) fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(TreeError::EmptyText);
        }
        let mut symbols: Vec<Symbol> = Vec::with_capacity(bytes.len() + 1);
        symbols.extend(bytes.iter().map(|&b| Symbol::from(b)));
        symbols.push(TERMINATOR);
        Ok(Self {
            bytes: bytes.to_vec(),
            symbols,
        })
    }

    /// Buffer length including the terminator.
    pub(crate) fn len(&self) -> usize {
        self.symbols.len()
    }

    /// The original input bytes, without the terminator.
    pub(crate) fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Index<usize> for Text {
    type Output = Symbol;

    fn index(&self, index: usize) -> &Symbol {
        &self.symbols[index]
    }
}
