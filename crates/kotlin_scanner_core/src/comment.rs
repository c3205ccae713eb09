//! Block comment scanning.
//!
//! # Nesting
//!
//! The scanner counts `/*` openings inside the comment but does not wait
//! for the count to drop to zero: the first `*/` ends the comment. For
//! `/* /* */ */` the token is `/* /* */` and ` */` stays in the source for
//! the grammar to deal with. Hosts depend on this offset, so balanced
//! matching must not be introduced here without changing the grammar too.

use tracing::trace;

use crate::Lexer;

/// Scan a `/* ... */` comment starting at the lookahead.
///
/// On success the whole comment, delimiters included, is the token and the
/// token end is marked right after the closing `*/`. Returns `false`
/// without marking anything when the lookahead is not `/*` or the comment
/// is unterminated.
///
/// A lone `/` is consumed before the scanner can see that no `*` follows,
/// so `/x` fails one code point further on. The host rewinds a failed scan.
pub fn scan_multiline_comment<L: Lexer + ?Sized>(lexer: &mut L) -> bool {
    if lexer.lookahead() != '/' {
        return false;
    }
    lexer.advance();
    if lexer.lookahead() != '*' {
        return false;
    }
    lexer.advance();

    let mut after_star = false;
    let mut depth: u32 = 1;
    loop {
        if lexer.eof() {
            trace!(depth, "unterminated block comment");
            return false;
        }
        match lexer.lookahead() {
            '*' => {
                lexer.advance();
                after_star = true;
            }
            '/' if after_star => {
                lexer.advance();
                depth -= 1;
                lexer.mark_end();
                trace!(depth, "block comment closed");
                return true;
            }
            '/' => {
                lexer.advance();
                if lexer.lookahead() == '*' {
                    lexer.advance();
                    depth += 1;
                }
            }
            _ => {
                lexer.advance();
                after_star = false;
            }
        }
    }
}
