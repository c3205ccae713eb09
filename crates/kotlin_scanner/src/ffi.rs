//! The `tree_sitter_kotlin_external_scanner_*` symbols the generated
//! parser calls.
//!
//! Each function checks its pointers and degrades to "no token" or a no-op
//! instead of unwinding into C.

#![allow(unsafe_code, reason = "C ABI exports dereference host pointers")]

use std::ffi::{c_char, c_uint, c_void};

use kotlin_scanner_core::{ExternalScanner, ScannerState, TokenKind, ValidSymbols};
use tracing::warn;

use crate::{HostLexer, TSLexer, SERIALIZATION_BUFFER_SIZE};

/// Allocate the scanner state for a new parser.
#[no_mangle]
pub extern "C" fn tree_sitter_kotlin_external_scanner_create() -> *mut c_void {
    crate::init_tracing();
    Box::into_raw(Box::new(ScannerState::new())).cast()
}

/// Release a state returned by `create`.
///
/// # Safety
///
/// `payload` must be null or a pointer returned by
/// [`tree_sitter_kotlin_external_scanner_create`] that was not destroyed yet.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_kotlin_external_scanner_destroy(payload: *mut c_void) {
    if payload.is_null() {
        return;
    }
    // SAFETY: caller contract; the pointer came from `Box::into_raw`.
    drop(unsafe { Box::from_raw(payload.cast::<ScannerState>()) });
}

/// Return the state to its freshly created form.
///
/// # Safety
///
/// `payload` must be null or a live pointer returned by `create`.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_kotlin_external_scanner_reset(payload: *mut c_void) {
    // SAFETY: caller contract.
    if let Some(state) = unsafe { payload.cast::<ScannerState>().as_mut() } {
        state.reset();
    }
}

/// Write the state into the host's serialization buffer.
///
/// # Safety
///
/// `payload` must be null or a live pointer returned by `create`; `buffer`
/// must be null or valid for `SERIALIZATION_BUFFER_SIZE` bytes of writes.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_kotlin_external_scanner_serialize(
    payload: *mut c_void,
    buffer: *mut c_char,
) -> c_uint {
    // SAFETY: caller contract.
    let Some(state) = (unsafe { payload.cast::<ScannerState>().as_ref() }) else {
        return 0;
    };
    if buffer.is_null() {
        return 0;
    }
    // SAFETY: caller contract: the host buffer holds SERIALIZATION_BUFFER_SIZE bytes.
    let buffer =
        unsafe { std::slice::from_raw_parts_mut(buffer.cast::<u8>(), SERIALIZATION_BUFFER_SIZE) };
    c_uint::try_from(state.serialize(buffer)).unwrap_or(0)
}

/// Restore the state from bytes written by `serialize`.
///
/// # Safety
///
/// `payload` must be null or a live pointer returned by `create`; a
/// non-null `buffer` must be valid for `length` bytes of reads.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_kotlin_external_scanner_deserialize(
    payload: *mut c_void,
    buffer: *const c_char,
    length: c_uint,
) {
    // SAFETY: caller contract.
    let Some(state) = (unsafe { payload.cast::<ScannerState>().as_mut() }) else {
        return;
    };
    let bytes: &[u8] = if buffer.is_null() || length == 0 {
        &[]
    } else {
        // SAFETY: caller contract.
        unsafe { std::slice::from_raw_parts(buffer.cast::<u8>(), length as usize) }
    };
    state.deserialize(bytes);
}

/// Try to produce an external token at the lexer position.
///
/// On success `lexer->result_symbol` holds the token's ordinal and the
/// token end has been marked through the lexer.
///
/// # Safety
///
/// `payload` must be a live pointer returned by `create`, `lexer` a live
/// `TSLexer` owned by the calling parser, and `valid_symbols` an array of
/// at least `TokenKind::COUNT` booleans.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_kotlin_external_scanner_scan(
    payload: *mut c_void,
    lexer: *mut TSLexer,
    valid_symbols: *const bool,
) -> bool {
    // SAFETY: caller contract.
    let Some(state) = (unsafe { payload.cast::<ScannerState>().as_mut() }) else {
        warn!("scan called without scanner state");
        return false;
    };
    // SAFETY: caller contract; the lexer is exclusively ours for this call.
    let Some(mut lexer) = (unsafe { HostLexer::from_raw(lexer) }) else {
        warn!("scan called without a lexer");
        return false;
    };
    if valid_symbols.is_null() {
        warn!("scan called without valid symbols");
        return false;
    }
    // SAFETY: caller contract: one flag per external token.
    let table = unsafe { std::slice::from_raw_parts(valid_symbols, TokenKind::COUNT) };
    let valid = match ValidSymbols::from_table(table) {
        Ok(valid) => valid,
        Err(err) => {
            warn!(%err, "rejected valid-symbols table");
            return false;
        }
    };

    match state.scan(&mut lexer, valid) {
        Some(kind) => {
            lexer.set_result_symbol(kind);
            true
        }
        None => false,
    }
}
