//! tree-sitter's lexer handle, seen from the scanner.
//!
//! `TSLexer` is laid out exactly as in `tree_sitter/parser.h`, up to the
//! last field this scanner reads. The host allocates it and owns every
//! field; the scanner reads `lookahead`, writes `result_symbol`, and calls
//! back into the host for everything else.

use std::marker::PhantomData;
use std::ptr::NonNull;

use kotlin_scanner_core::{Lexer, TokenKind};

/// Mirror of tree-sitter's `TSLexer` (ABI 14 and later).
#[repr(C)]
pub struct TSLexer {
    /// Current code point, `0` at end of input.
    pub lookahead: i32,
    /// Token produced by a successful scan.
    pub result_symbol: u16,
    /// Consume the lookahead; `true` marks it as skipped filler.
    pub advance: Option<unsafe extern "C" fn(*mut TSLexer, bool)>,
    /// Mark the current position as the token end.
    pub mark_end: Option<unsafe extern "C" fn(*mut TSLexer)>,
    /// Column of the current position.
    pub get_column: Option<unsafe extern "C" fn(*mut TSLexer) -> u32>,
    /// Whether the position starts an included range.
    pub is_at_included_range_start: Option<unsafe extern "C" fn(*const TSLexer) -> bool>,
    /// Whether the input is exhausted.
    pub eof: Option<unsafe extern "C" fn(*const TSLexer) -> bool>,
}

/// [`Lexer`] implementation over a host-owned `TSLexer`.
///
/// Borrowed for one scan call only; it must not outlive the call.
pub struct HostLexer<'a> {
    raw: NonNull<TSLexer>,
    _host: PhantomData<&'a mut TSLexer>,
}

#[allow(unsafe_code, reason = "calls through host-provided C callbacks")]
impl HostLexer<'_> {
    /// Wrap the host's lexer pointer. Returns `None` for a null pointer.
    ///
    /// # Safety
    ///
    /// A non-null `raw` must point to a live `TSLexer` whose callbacks
    /// remain valid, and which nothing else touches, while the returned
    /// value is alive.
    pub unsafe fn from_raw(raw: *mut TSLexer) -> Option<Self> {
        NonNull::new(raw).map(|raw| HostLexer {
            raw,
            _host: PhantomData,
        })
    }

    /// Report `kind` as the scanned token.
    pub fn set_result_symbol(&mut self, kind: TokenKind) {
        // SAFETY: `from_raw` contract: the pointer is live and exclusive.
        unsafe { (*self.raw.as_ptr()).result_symbol = kind.ordinal() };
    }

    fn raw_lookahead(&self) -> i32 {
        // SAFETY: `from_raw` contract: the pointer is live and exclusive.
        unsafe { (*self.raw.as_ptr()).lookahead }
    }

    fn call_advance(&mut self, skip: bool) {
        let ptr = self.raw.as_ptr();
        // SAFETY: `from_raw` contract; the host callback expects its own
        // lexer pointer.
        unsafe {
            if let Some(advance) = (*ptr).advance {
                advance(ptr, skip);
            }
        }
    }
}

#[allow(unsafe_code, reason = "calls through host-provided C callbacks")]
impl Lexer for HostLexer<'_> {
    fn lookahead(&self) -> char {
        u32::try_from(self.raw_lookahead())
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn advance(&mut self) {
        self.call_advance(false);
    }

    fn skip(&mut self) {
        self.call_advance(true);
    }

    fn mark_end(&mut self) {
        let ptr = self.raw.as_ptr();
        // SAFETY: `from_raw` contract.
        unsafe {
            if let Some(mark_end) = (*ptr).mark_end {
                mark_end(ptr);
            }
        }
    }

    fn is_at_included_range_start(&self) -> bool {
        let ptr = self.raw.as_ptr().cast_const();
        // SAFETY: `from_raw` contract.
        unsafe { (*ptr).is_at_included_range_start.is_some_and(|f| f(ptr)) }
    }

    fn eof(&self) -> bool {
        let ptr = self.raw.as_ptr().cast_const();
        // SAFETY: `from_raw` contract.
        match unsafe { (*ptr).eof } {
            // SAFETY: as above.
            Some(eof) => unsafe { eof(ptr) },
            // Hosts without the callback signal end of input with a zero.
            None => self.raw_lookahead() == 0,
        }
    }
}
