//! Scan entry point and scanner lifecycle.
//!
//! The host creates one scanner per parse, snapshots it at every
//! backtracking checkpoint with `serialize`, and restores it with
//! `deserialize`. [`ScannerState`] carries no data, so snapshots are
//! empty, but it still goes through the full lifecycle the host expects.

use tracing::trace;

use crate::asi::scan_automatic_semicolon;
use crate::comment::scan_multiline_comment;
use crate::trivia::is_space;
use crate::{Lexer, TokenKind, ValidSymbols};

/// Lifecycle and scan contract between a host parser and a scanner.
///
/// Creation is [`Default`]; destruction is [`Drop`].
pub trait ExternalScanner: Default {
    /// Return to the freshly created state.
    fn reset(&mut self);

    /// Write the state into `buffer` and return the number of bytes used.
    fn serialize(&self, buffer: &mut [u8]) -> usize;

    /// Restore the state from bytes previously produced by `serialize`.
    ///
    /// An empty slice restores the freshly created state.
    fn deserialize(&mut self, bytes: &[u8]);

    /// Try to produce one of the `valid` token kinds at the lexer position.
    ///
    /// Returns `None` when no acceptable token starts here; the host then
    /// tries its other alternatives. A returned kind is always in `valid`.
    fn scan<L: Lexer + ?Sized>(&mut self, lexer: &mut L, valid: ValidSymbols)
        -> Option<TokenKind>;
}

/// The Kotlin scanner's persistent state: nothing.
///
/// Every decision is made from the lookahead alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScannerState;

/// The state is zero-sized; snapshots cost nothing.
const _: () = assert!(std::mem::size_of::<ScannerState>() == 0);

impl ScannerState {
    /// Create a scanner for a new parse.
    pub const fn new() -> Self {
        ScannerState
    }
}

impl ExternalScanner for ScannerState {
    fn reset(&mut self) {}

    fn serialize(&self, _buffer: &mut [u8]) -> usize {
        0
    }

    fn deserialize(&mut self, _bytes: &[u8]) {}

    fn scan<L: Lexer + ?Sized>(
        &mut self,
        lexer: &mut L,
        valid: ValidSymbols,
    ) -> Option<TokenKind> {
        let kind = scan_token(lexer, valid);
        match kind {
            Some(kind) => trace!(token = kind.name(), "external token"),
            None => trace!(?valid, "no external token"),
        }
        kind
    }
}

fn scan_token<L: Lexer + ?Sized>(lexer: &mut L, valid: ValidSymbols) -> Option<TokenKind> {
    if valid.allows(TokenKind::AutomaticSemicolon) {
        let inserted = scan_automatic_semicolon(lexer);
        return inserted.then_some(TokenKind::AutomaticSemicolon);
    }

    // A comment may sit behind some whitespace.
    while is_space(lexer.lookahead()) {
        lexer.skip();
    }

    if valid.allows(TokenKind::MultilineComment) && scan_multiline_comment(lexer) {
        return Some(TokenKind::MultilineComment);
    }
    None
}

#[cfg(test)]
mod tests;
