//! Whitespace and comment skipping.
//!
//! Everything consumed here is filler: it goes through [`Lexer::skip`] and
//! never becomes part of a token.

use crate::Lexer;

/// Skip whitespace, `//` line comments and `/* */` block comments.
///
/// Returns `true` when the lookahead is the first non-filler code point
/// (or end of input). Returns `false` on a `/` that starts neither `//`
/// nor `/*`: that slash is real content, such as a division operator, and
/// the caller has to deal with it. The `/` itself has been skipped by then.
///
/// Block comments do not nest here; the first `*/` closes the comment.
/// An unterminated block comment runs to end of input.
pub fn skip_whitespace_and_comments<L: Lexer + ?Sized>(lexer: &mut L) -> bool {
    loop {
        while is_space(lexer.lookahead()) {
            lexer.skip();
        }

        if lexer.lookahead() != '/' {
            return true;
        }
        lexer.skip();

        match lexer.lookahead() {
            '/' => {
                lexer.skip();
                lexer.skip_to_line_end();
            }
            '*' => {
                lexer.skip();
                skip_block_comment_body(lexer);
            }
            _ => return false,
        }
    }
}

/// Whitespace as tree-sitter hosts see it: `iswspace` in the C locale.
///
/// Only the six ASCII spacing characters count. U+00A0, U+0085 and the
/// other Unicode spaces are content, so `a\u{a0}b` never reads as two
/// words separated by filler.
#[inline]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Skip through the first `*/`, or to end of input.
fn skip_block_comment_body<L: Lexer + ?Sized>(lexer: &mut L) {
    while !lexer.eof() {
        if lexer.lookahead() == '*' {
            lexer.skip();
            if lexer.lookahead() == '/' {
                lexer.skip();
                return;
            }
        } else {
            lexer.skip();
        }
    }
}
