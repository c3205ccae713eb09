//! A `TSLexer` backed by a Rust string, standing in for the parser runtime.

#![allow(unsafe_code, reason = "implements C callbacks over raw lexer pointers")]

use std::ops::Range;

use crate::TSLexer;

/// Host-side lexer state. `base` must stay the first field: the callbacks
/// receive a pointer to it and cast back to the whole struct.
#[repr(C)]
pub(crate) struct FakeLexer {
    base: TSLexer,
    chars: Vec<char>,
    pos: usize,
    token_start: usize,
    token_end: Option<usize>,
    region_starts: Vec<usize>,
}

impl FakeLexer {
    /// A lexer over `source`, positioned at code point `pos`.
    pub(crate) fn at(source: &str, pos: usize) -> Box<Self> {
        let mut fake = Box::new(FakeLexer {
            base: TSLexer {
                lookahead: 0,
                result_symbol: u16::MAX,
                advance: Some(fake_advance),
                mark_end: Some(fake_mark_end),
                get_column: Some(fake_get_column),
                is_at_included_range_start: Some(fake_is_at_included_range_start),
                eof: Some(fake_eof),
            },
            chars: source.chars().collect(),
            pos,
            token_start: pos,
            token_end: None,
            region_starts: Vec::new(),
        });
        fake.sync();
        fake
    }

    /// A lexer over `source`, positioned at the start.
    pub(crate) fn new(source: &str) -> Box<Self> {
        Self::at(source, 0)
    }

    /// Report code point offsets in `starts` as included range starts.
    pub(crate) fn set_region_starts(&mut self, starts: &[usize]) {
        self.region_starts = starts.to_vec();
    }

    /// Drop the callbacks older hosts do not provide.
    pub(crate) fn without_optional_callbacks(&mut self) {
        self.base.eof = None;
        self.base.is_at_included_range_start = None;
    }

    /// Overwrite the raw lookahead value the scanner sees.
    pub(crate) fn set_raw_lookahead(&mut self, value: i32) {
        self.base.lookahead = value;
    }

    /// The pointer a parser would pass to the scanner.
    pub(crate) fn as_raw(&mut self) -> *mut TSLexer {
        let ptr: *mut Self = self;
        ptr.cast()
    }

    pub(crate) fn result_symbol(&self) -> u16 {
        self.base.result_symbol
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Token range in code points, with tree-sitter's zero-width clamp.
    pub(crate) fn token_span(&self) -> Range<usize> {
        let end = self.token_end.unwrap_or(self.pos);
        self.token_start.min(end)..end
    }

    fn sync(&mut self) {
        self.base.lookahead = self
            .chars
            .get(self.pos)
            .map_or(0, |&c| i32::try_from(u32::from(c)).unwrap_or(0));
    }
}

/// Recover the fake from the pointer handed to a callback.
///
/// # Safety
///
/// `lexer` must come from [`FakeLexer::as_raw`] on a live fake.
unsafe fn fake_from_raw<'a>(lexer: *const TSLexer) -> &'a mut FakeLexer {
    // SAFETY: caller contract; `base` is the first field of a `repr(C)` struct.
    unsafe { &mut *lexer.cast::<FakeLexer>().cast_mut() }
}

unsafe extern "C" fn fake_advance(lexer: *mut TSLexer, skip: bool) {
    // SAFETY: only installed on fakes.
    let fake = unsafe { fake_from_raw(lexer) };
    if fake.pos < fake.chars.len() {
        fake.pos += 1;
    }
    if skip {
        fake.token_start = fake.pos;
    }
    fake.sync();
}

unsafe extern "C" fn fake_mark_end(lexer: *mut TSLexer) {
    // SAFETY: only installed on fakes.
    let fake = unsafe { fake_from_raw(lexer) };
    fake.token_end = Some(fake.pos);
}

unsafe extern "C" fn fake_get_column(lexer: *mut TSLexer) -> u32 {
    // SAFETY: only installed on fakes.
    let fake = unsafe { fake_from_raw(lexer) };
    let line_start = fake.chars[..fake.pos]
        .iter()
        .rposition(|&c| c == '\n')
        .map_or(0, |i| i + 1);
    u32::try_from(fake.pos - line_start).unwrap_or(u32::MAX)
}

unsafe extern "C" fn fake_is_at_included_range_start(lexer: *const TSLexer) -> bool {
    // SAFETY: only installed on fakes.
    let fake = unsafe { fake_from_raw(lexer) };
    fake.region_starts.contains(&fake.pos)
}

unsafe extern "C" fn fake_eof(lexer: *const TSLexer) -> bool {
    // SAFETY: only installed on fakes.
    let fake = unsafe { fake_from_raw(lexer) };
    fake.pos >= fake.chars.len()
}
