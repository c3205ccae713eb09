//! Sentinel-terminated source buffer for the in-memory lexer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the cursor can read one code point of lookahead near the end without
//! explicit bounds checking. The total buffer size is rounded up to the
//! next 64-byte boundary, which also leaves room for the widest UTF-8
//! sequence the decoder may touch.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated copy of a source text.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a zero-padded, sentinel-terminated buffer.
    ///
    /// Sources longer than `u32::MAX` bytes are truncated to that length;
    /// tree-sitter byte offsets are 32-bit as well.
    pub fn new(source: &str) -> Self {
        let source_len_u32 = u32::try_from(source.len()).unwrap_or(u32::MAX);
        let mut source_len = source_len_u32 as usize;
        // Never split a code point when truncating.
        while !source.is_char_boundary(source_len) {
            source_len -= 1;
        }
        let source_bytes = &source.as_bytes()[..source_len];

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the source text.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
