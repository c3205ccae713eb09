//! External token kinds and the per-call candidate set.
//!
//! The ordinals of [`TokenKind`] are shared with the generated grammar:
//! its `externals` list names the same tokens in the same order, and the
//! host indexes the valid-symbols table by these numbers. Reordering the
//! enum without regenerating the grammar silently swaps token meanings.

use bitflags::bitflags;

use crate::SymbolError;

/// A token the external scanner can produce.
///
/// Discriminants are the external symbol ordinals seen by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TokenKind {
    /// Zero-width statement terminator inserted where `;` was omitted.
    AutomaticSemicolon = 0,
    /// A `/* ... */` comment.
    MultilineComment = 1,
}

impl TokenKind {
    /// Number of external tokens (length of the host's valid-symbols table).
    pub const COUNT: usize = 2;

    /// Every kind, in ordinal order.
    pub const ALL: [TokenKind; Self::COUNT] =
        [TokenKind::AutomaticSemicolon, TokenKind::MultilineComment];

    /// The ordinal the host uses for this kind.
    #[inline]
    pub const fn ordinal(self) -> u16 {
        self as u16
    }

    /// Name of the token as spelled in the grammar's `externals`.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::AutomaticSemicolon => "automatic_semicolon",
            TokenKind::MultilineComment => "multiline_comment",
        }
    }
}

bitflags! {
    /// Token kinds the grammar accepts at the current position.
    ///
    /// Supplied fresh on every scan call and read-only to the scanner.
    /// Bit `n` corresponds to the kind with ordinal `n`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ValidSymbols: u8 {
        /// [`TokenKind::AutomaticSemicolon`] is acceptable.
        const AUTOMATIC_SEMICOLON = 1 << 0;
        /// [`TokenKind::MultilineComment`] is acceptable.
        const MULTILINE_COMMENT = 1 << 1;
    }
}

impl ValidSymbols {
    /// The single-kind set for `kind`.
    #[inline]
    pub const fn of(kind: TokenKind) -> Self {
        Self::from_bits_retain(1 << kind.ordinal())
    }

    /// Check whether `kind` is acceptable here.
    #[inline]
    pub const fn allows(self, kind: TokenKind) -> bool {
        self.contains(Self::of(kind))
    }

    /// Build the set from the host's boolean table, indexed by ordinal.
    ///
    /// Entries past `TokenKind::COUNT` belong to nothing the scanner knows
    /// and are ignored.
    pub fn from_table(table: &[bool]) -> Result<Self, SymbolError> {
        if table.len() < TokenKind::COUNT {
            return Err(SymbolError::TableTooShort {
                len: table.len(),
                expected: TokenKind::COUNT,
            });
        }
        Ok(TokenKind::ALL
            .into_iter()
            .filter(|kind| table[usize::from(kind.ordinal())])
            .collect())
    }
}

impl FromIterator<TokenKind> for ValidSymbols {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, kind| set.union(Self::of(kind)))
    }
}
