//! In-memory [`Lexer`] over a [`SourceBuffer`].
//!
//! Mirrors the token bookkeeping tree-sitter performs on the host side,
//! so a scan driven through `StrLexer` reports the same token span the
//! real parser would see:
//!
//! - `skip` moves the token start to the position after the skipped
//!   code point;
//! - `mark_end` pins the token end at the current position;
//! - without `mark_end` the token ends wherever the cursor stopped;
//! - a token whose start was skipped past its marked end collapses to a
//!   zero-width token at the end (an inserted semicolon).

use std::ops::Range;

use crate::{Cursor, Lexer, SourceBuffer};

/// Lexer over an owned source copy, for tests and Rust-side hosts.
#[derive(Clone, Debug)]
pub struct StrLexer<'a> {
    cursor: Cursor<'a>,
    token_start: u32,
    token_end: Option<u32>,
    /// Sorted byte offsets where an included range begins.
    region_starts: Vec<u32>,
}

impl<'a> StrLexer<'a> {
    /// Create a lexer positioned at the start of `source`.
    pub fn new(source: &'a SourceBuffer) -> Self {
        Self {
            cursor: source.cursor(),
            token_start: 0,
            token_end: None,
            region_starts: Vec::new(),
        }
    }

    /// Report `starts` as the beginnings of included ranges.
    #[must_use]
    pub fn with_region_starts(mut self, starts: impl IntoIterator<Item = u32>) -> Self {
        self.region_starts = starts.into_iter().collect();
        self.region_starts.sort_unstable();
        self.region_starts.dedup();
        self
    }

    /// Rewind or fast-forward to byte offset `pos` and start a fresh token
    /// there, the way a host restarts the scanner after backtracking.
    pub fn seek(&mut self, pos: u32) {
        self.cursor.seek(pos);
        self.token_start = self.cursor.pos();
        self.token_end = None;
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Byte range of the token produced by the last scan.
    pub fn token_span(&self) -> Range<u32> {
        let end = self.token_end.unwrap_or_else(|| self.cursor.pos());
        self.token_start.min(end)..end
    }

    /// Source text of the token produced by the last scan.
    pub fn token_text(&self) -> &'a str {
        let span = self.token_span();
        self.cursor.slice(span.start, span.end)
    }
}

impl Lexer for StrLexer<'_> {
    #[inline]
    fn lookahead(&self) -> char {
        self.cursor.current_char()
    }

    #[inline]
    fn advance(&mut self) {
        self.cursor.advance_char();
    }

    #[inline]
    fn skip(&mut self) {
        self.cursor.advance_char();
        self.token_start = self.cursor.pos();
    }

    #[inline]
    fn mark_end(&mut self) {
        self.token_end = Some(self.cursor.pos());
    }

    fn is_at_included_range_start(&self) -> bool {
        self.region_starts.binary_search(&self.cursor.pos()).is_ok()
    }

    #[inline]
    fn eof(&self) -> bool {
        self.cursor.is_eof()
    }

    fn skip_to_line_end(&mut self) {
        self.cursor.eat_until_newline_or_eof();
        self.token_start = self.cursor.pos();
    }
}
