//! External scanner logic for the Kotlin tree-sitter grammar.
//!
//! The generated grammar cannot decide on its own where a statement ends
//! when the source omits `;`, and it cannot express the block-comment
//! rules. The host parser calls [`ScannerState::scan`] at those grammar
//! positions, handing over a [`Lexer`] and the set of token kinds it would
//! accept. Two tokens can come back:
//!
//! - [`TokenKind::AutomaticSemicolon`]: a zero-width statement terminator
//!   decided by the lookahead rules in [`asi`].
//! - [`TokenKind::MultilineComment`]: a `/* ... */` comment, see [`comment`].
//!
//! # Layering
//!
//! ```text
//! Lexer (host-supplied)  <-  trivia  <-  asi
//!                        <-  comment
//! ScannerState::scan  ->  asi | comment
//! ```
//!
//! Nothing here knows about the C ABI. The `kotlin_scanner` crate adapts
//! tree-sitter's `TSLexer` to [`Lexer`]; tests and Rust tooling use the
//! in-memory [`StrLexer`].

pub mod asi;
pub mod comment;
mod cursor;
mod error;
mod lexer;
mod scanner;
mod source_buffer;
mod str_lexer;
mod tag;
pub mod trivia;

pub use cursor::Cursor;
pub use error::SymbolError;
pub use lexer::Lexer;
pub use scanner::{ExternalScanner, ScannerState};
pub use source_buffer::SourceBuffer;
pub use str_lexer::StrLexer;
pub use tag::{TokenKind, ValidSymbols};
