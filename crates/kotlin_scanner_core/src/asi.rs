//! Automatic semicolon insertion.
//!
//! Called where the grammar would accept a statement terminator. The
//! inserted token is zero-width: its end is marked before any lookahead is
//! consumed, so everything read afterwards only informs the decision.
//!
//! # Rules
//!
//! Without a newline, a terminator is inserted only before end of input, a
//! `}` or the start of an included range. After a newline (and any filler
//! that follows it) the first significant code point decides:
//!
//! | Next line starts with            | Insert? |
//! |----------------------------------|---------|
//! | `, . : ; * % > < = [ ( ? ^ \| & /` | no    |
//! | `++` / `--`                      | yes     |
//! | `+` / `-` (binary)               | no      |
//! | `!=`                             | no      |
//! | `!` (unary)                      | yes     |
//! | the word `in`                    | no      |
//! | anything else                    | yes     |
//!
//! `instanceof` and every other word starting with `i` insert a terminator.

use tracing::trace;

use crate::trivia::{is_space, skip_whitespace_and_comments};
use crate::Lexer;

/// Decide whether a statement terminator belongs at the current position.
///
/// Marks the token end at the current position on entry, then looks ahead
/// without ever extending the token.
pub fn scan_automatic_semicolon<L: Lexer + ?Sized>(lexer: &mut L) -> bool {
    lexer.mark_end();

    loop {
        if lexer.eof() {
            trace!("terminator before end of input");
            return true;
        }
        if lexer.lookahead() == '}' {
            trace!("terminator before closing brace");
            return true;
        }
        if lexer.is_at_included_range_start() {
            trace!("terminator before included range");
            return true;
        }
        match lexer.lookahead() {
            '\n' => break,
            c if is_space(c) => lexer.skip(),
            _ => return false,
        }
    }

    // Exactly one newline, then whatever filler follows it.
    lexer.skip();
    if !skip_whitespace_and_comments(lexer) {
        trace!("next line starts with a slash");
        return false;
    }

    let next = lexer.lookahead();
    let insert = next_line_starts_statement(lexer);
    trace!(?next, insert, "classified next line");
    insert
}

/// Classify the first significant code point of the next line.
fn next_line_starts_statement<L: Lexer + ?Sized>(lexer: &mut L) -> bool {
    match lexer.lookahead() {
        ',' | '.' | ':' | ';' | '*' | '%' | '>' | '<' | '=' | '[' | '(' | '?' | '^' | '|' | '&'
        | '/' => false,

        // `++`/`--` start a statement; binary `+`/`-` continue the last one.
        '+' => {
            lexer.skip();
            lexer.lookahead() == '+'
        }
        '-' => {
            lexer.skip();
            lexer.lookahead() == '-'
        }

        // `!=` continues; unary `!` starts a statement.
        '!' => {
            lexer.skip();
            lexer.lookahead() != '='
        }

        'i' => !is_in_keyword(lexer),

        _ => true,
    }
}

/// Consume a word starting with `i` and report whether it is exactly `in`.
///
/// Words are delimited by alphabetic code points only, so `in1` reads as
/// `in` followed by `1`.
fn is_in_keyword<L: Lexer + ?Sized>(lexer: &mut L) -> bool {
    lexer.skip();
    if lexer.lookahead() != 'n' {
        return false;
    }
    lexer.skip();

    if !is_word_continue(lexer.lookahead()) {
        return true;
    }

    for expected in "stanceof".chars() {
        if lexer.lookahead() != expected {
            return false;
        }
        lexer.skip();
    }

    // `instanceof`, with or without more letters after it, is not `in`.
    false
}

/// Code points that extend a word for keyword matching.
#[inline]
fn is_word_continue(c: char) -> bool {
    c.is_alphabetic()
}
