use std::ops::Range;

use super::*;
use crate::{SourceBuffer, StrLexer};
use pretty_assertions::assert_eq;

/// Scan `source` from byte `at` with the given candidate set.
fn scan_at(source: &str, at: u32, valid: ValidSymbols) -> (Option<TokenKind>, Range<u32>) {
    let buf = SourceBuffer::new(source);
    let mut lexer = StrLexer::new(&buf);
    lexer.seek(at);
    let kind = ScannerState::new().scan(&mut lexer, valid);
    (kind, lexer.token_span())
}

// === Lifecycle ===

#[test]
fn serialize_writes_nothing() {
    let state = ScannerState::new();
    let mut buffer = [0xAAu8; 16];
    assert_eq!(state.serialize(&mut buffer), 0);
    assert!(buffer.iter().all(|&b| b == 0xAA));
}

#[test]
fn deserialize_accepts_anything() {
    let mut state = ScannerState::new();
    state.deserialize(&[]);
    state.deserialize(&[1, 2, 3]);
    assert_eq!(state, ScannerState::default());
}

#[test]
fn snapshot_round_trip_is_empty() {
    let original = ScannerState::new();
    let mut buffer = [0u8; 1024];
    let len = original.serialize(&mut buffer);

    let mut restored = ScannerState::default();
    restored.deserialize(&buffer[..len]);
    assert_eq!(restored, original);
}

#[test]
fn reset_returns_to_default() {
    let mut state = ScannerState::new();
    state.reset();
    assert_eq!(state, ScannerState::default());
}

#[test]
fn state_is_zero_sized() {
    assert_eq!(std::mem::size_of::<ScannerState>(), 0);
}

// === Dispatch ===

#[test]
fn nothing_valid_produces_nothing() {
    assert_eq!(scan_at("/* c */", 0, ValidSymbols::empty()).0, None);
    assert_eq!(scan_at("", 0, ValidSymbols::empty()).0, None);
}

#[test]
fn semicolon_at_end_of_input() {
    assert_eq!(
        scan_at("a", 1, ValidSymbols::AUTOMATIC_SEMICOLON),
        (Some(TokenKind::AutomaticSemicolon), 1..1)
    );
}

#[test]
fn semicolon_before_brace() {
    assert_eq!(
        scan_at("{ a }", 3, ValidSymbols::AUTOMATIC_SEMICOLON),
        (Some(TokenKind::AutomaticSemicolon), 3..3)
    );
}

#[test]
fn semicolon_decision_failure_is_final() {
    // The comment scanner is not consulted once the semicolon was eligible.
    let (kind, _) = scan_at("a /* c */", 1, ValidSymbols::all());
    assert_eq!(kind, None);
}

#[test]
fn semicolon_takes_precedence_over_comment() {
    let (kind, span) = scan_at("a\n/* c */ b", 1, ValidSymbols::all());
    assert_eq!(kind, Some(TokenKind::AutomaticSemicolon));
    assert_eq!(span, 1..1);
}

#[test]
fn comment_when_only_comment_valid() {
    assert_eq!(
        scan_at("/* c */ x", 0, ValidSymbols::MULTILINE_COMMENT),
        (Some(TokenKind::MultilineComment), 0..7)
    );
}

#[test]
fn leading_whitespace_before_comment_is_filler() {
    assert_eq!(
        scan_at("a   /* c */", 1, ValidSymbols::MULTILINE_COMMENT),
        (Some(TokenKind::MultilineComment), 4..11)
    );
}

#[test]
fn nested_comment_through_entry_point() {
    let buf = SourceBuffer::new("/* /* */ */");
    let mut lexer = StrLexer::new(&buf);
    let kind = ScannerState::new().scan(&mut lexer, ValidSymbols::MULTILINE_COMMENT);
    assert_eq!(kind, Some(TokenKind::MultilineComment));
    assert_eq!(lexer.token_text(), "/* /* */");
}

#[test]
fn unterminated_comment_through_entry_point() {
    assert_eq!(
        scan_at("/* unterminated", 0, ValidSymbols::MULTILINE_COMMENT).0,
        None
    );
}

#[test]
fn line_comment_is_not_produced() {
    assert_eq!(
        scan_at("// line", 0, ValidSymbols::MULTILINE_COMMENT).0,
        None
    );
}

// === Documented outcomes ===

#[test]
fn documented_semicolon_outcomes() {
    let cases = [
        ("a\n+b", false),
        ("a\n++b", true),
        ("a\nin b", false),
        ("a\nindex = 1", true),
        ("a\ninstanceof X", true),
    ];
    for (source, expected) in cases {
        let (kind, span) = scan_at(source, 1, ValidSymbols::AUTOMATIC_SEMICOLON);
        assert_eq!(
            kind.is_some(),
            expected,
            "unexpected decision for {source:?}"
        );
        if kind.is_some() {
            assert_eq!(span, 1..1, "semicolon not zero-width for {source:?}");
        }
    }
}

#[test]
fn state_is_reusable_across_calls() {
    let buf = SourceBuffer::new("a\nb\n/* c */");
    let mut lexer = StrLexer::new(&buf);
    let mut state = ScannerState::new();

    lexer.seek(1);
    assert_eq!(
        state.scan(&mut lexer, ValidSymbols::AUTOMATIC_SEMICOLON),
        Some(TokenKind::AutomaticSemicolon)
    );

    lexer.seek(3);
    assert_eq!(
        state.scan(&mut lexer, ValidSymbols::AUTOMATIC_SEMICOLON),
        Some(TokenKind::AutomaticSemicolon)
    );

    lexer.seek(4);
    assert_eq!(
        state.scan(&mut lexer, ValidSymbols::MULTILINE_COMMENT),
        Some(TokenKind::MultilineComment)
    );
    assert_eq!(lexer.token_text(), "/* c */");
}
