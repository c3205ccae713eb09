//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor advances one UTF-8 code point at a time. EOF is detected
//! when the current byte equals the sentinel (`0x00`) and the position
//! has reached the source length.
//!
//! # Interior Null Bytes
//!
//! If the source contains interior null bytes (U+0000), the cursor
//! distinguishes them from EOF by comparing `pos` against `source_len`.
//! A null at `pos < source_len` is ordinary content; a null at
//! `pos >= source_len` is the sentinel.

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a snapshot is a plain assignment.
///
/// # Invariant
///
/// `buf` must be sentinel-terminated: `buf[source_len] == 0x00`, and all
/// bytes after `source_len` are `0x00`. `pos` always sits on a code point
/// boundary and never passes `source_len`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the code point starting at the current position.
    ///
    /// Returns `'\0'` at EOF. Interior null bytes also return `'\0'`; use
    /// [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current_char(&self) -> char {
        let lead = self.current();
        if lead.is_ascii() {
            return char::from(lead);
        }
        let start = self.pos as usize;
        let end = start + Self::utf8_char_width(lead) as usize;
        std::str::from_utf8(&self.buf[start..end])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Move to byte offset `pos`, clamped to the source length.
    ///
    /// # Contract
    ///
    /// `pos` must fall on a code point boundary.
    pub fn seek(&mut self, pos: u32) {
        self.pos = pos.min(self.source_len);
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full code point. No-op at EOF.
    #[inline]
    pub fn advance_char(&mut self) {
        if self.is_eof() {
            return;
        }
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source_len);
    }

    /// Advance to the next `\n` byte or EOF using SIMD-accelerated search.
    ///
    /// Used to skip line comment bodies. If no newline is found, the cursor
    /// lands on the EOF sentinel.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr(b'\n', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Extract a source substring as `&str`.
    ///
    /// Returns `""` if `start..end` is out of range or splits a code point.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        let end = end.min(self.source_len) as usize;
        let start = (start as usize).min(end);
        std::str::from_utf8(&self.buf[start..end]).unwrap_or_default()
    }
}
