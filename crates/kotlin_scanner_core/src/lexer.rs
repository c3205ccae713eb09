//! The host-owned character stream the scanner reads through.

/// Lookahead cursor lent to the scanner for the duration of one call.
///
/// The host owns the position and the token bookkeeping. Every scanning
/// routine in this crate depends only on this trait, so the same code
/// runs against tree-sitter's `TSLexer` and against [`StrLexer`] in tests.
///
/// [`StrLexer`]: crate::StrLexer
pub trait Lexer {
    /// The code point at the current position.
    ///
    /// Returns `'\0'` at end of input.
    fn lookahead(&self) -> char;

    /// Consume the current code point as part of the token.
    fn advance(&mut self);

    /// Consume the current code point as filler (part of no token).
    fn skip(&mut self);

    /// Record the current position as the end of the token being produced.
    fn mark_end(&mut self);

    /// Returns `true` when the current position starts a separately
    /// tracked source region (an included range).
    fn is_at_included_range_start(&self) -> bool;

    /// Returns `true` once the input is exhausted.
    fn eof(&self) -> bool;

    /// Skip up to (not including) the next `\n`, or to end of input.
    ///
    /// Hosts that can search their buffer directly override this.
    fn skip_to_line_end(&mut self) {
        while !self.eof() && self.lookahead() != '\n' {
            self.skip();
        }
    }
}
