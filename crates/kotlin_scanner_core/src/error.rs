//! Errors raised when host-supplied raw values are converted into
//! scanner types.
//!
//! Scanning itself never fails with an error: "no token here" is a normal
//! outcome, returned as `None`. These errors only cover malformed input at
//! the host boundary.

use thiserror::Error;

/// A host-supplied symbol table that does not fit the external token list.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SymbolError {
    /// The valid-symbols table is shorter than the external token list.
    #[error("valid-symbols table has {len} entries, expected at least {expected}")]
    TableTooShort {
        /// Entries actually supplied.
        len: usize,
        /// Entries required (`TokenKind::COUNT`).
        expected: usize,
    },
}
