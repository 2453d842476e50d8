//! Error recovery for the parser.
//!
//! After a statement fails, the parser skips ahead to a point where a new
//! statement can plausibly begin and carries on.

use monkey_ir::TokenKind;

use crate::cursor::Cursor;

/// A set of token kinds as a bitset over the `TokenKind` discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | Self::bit(kind))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        self.0 & Self::bit(kind) != 0
    }

    #[inline]
    const fn bit(kind: TokenKind) -> u64 {
        1u64 << (kind as u32)
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokens that begin a top-level statement.
///
/// Recovery stops in front of these without consuming them.
pub const TOP_LEVEL_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenKind::Let)
    .with(TokenKind::Return)
    .with(TokenKind::Eof);

/// Inside a block, recovery also stops at the closing `}`.
pub const STMT_BOUNDARY: TokenSet = TOP_LEVEL_BOUNDARY.with(TokenKind::RBrace);

/// Tokens that end an expression without starting a new one.
///
/// A missing prefix parser at one of these leaves the token for the
/// enclosing production to consume.
pub const EXPR_FOLLOW: TokenSet = TokenSet::new()
    .with(TokenKind::RParen)
    .with(TokenKind::RBracket)
    .with(TokenKind::RBrace)
    .with(TokenKind::Comma)
    .with(TokenKind::Semicolon)
    .with(TokenKind::Colon)
    .with(TokenKind::Eof);

/// Skip to the end of the broken statement.
///
/// Stops after the next `;` (consumed) or in front of the next token in
/// `boundary` (not consumed). Returns the number of tokens skipped.
pub fn synchronize(cursor: &mut Cursor<'_>, boundary: TokenSet) -> usize {
    let mut skipped = 0;
    while !boundary.contains(cursor.current_kind()) {
        let semicolon = cursor.check(TokenKind::Semicolon);
        cursor.advance();
        skipped += 1;
        if semicolon {
            break;
        }
    }
    skipped
}
