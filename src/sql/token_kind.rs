//! Token kind definitions for the SQL tokenizer.
//!
//! Each `TokenKind` is a syntactic atom left over once the MySQL lexer has
//! dropped whitespace and comments. Quoting is already resolved at this point:
//! `` `my table` `` arrives as `Ident("my table")` and string literals as
//! `Literal` with their unescaped value.

use crate::sql::keyword::Keyword;

/// Classification for a token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Table / alias / column / database / generic identifier, quotes removed.
    Ident(String),
    /// Structural SQL keyword.
    Keyword(Keyword),
    /// Comma `,`.
    Comma,
    /// Dot `.` (qualified names like `db.table`).
    Dot,
    /// Opening parenthesis `(`.
    ParenOpen,
    /// Closing parenthesis `)`.
    ParenClose,
    /// `*`, either a wildcard or multiplication.
    Star,
    /// Number or string literal.
    Literal(String),
    /// Any other operator or punctuation, as written.
    Other(String),
}

impl TokenKind {
    /// True if this token is the given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }

    /// Returns the keyword if this token is one.
    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            TokenKind::Keyword(k) => Some(*k),
            _ => None,
        }
    }

    /// Returns the identifier text if this token is an `Ident`.
    pub fn ident(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(s) => Some(s.as_str()),
            _ => None,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_detection() {
        let tk = TokenKind::Keyword(Keyword::Select);
        assert!(tk.is_keyword(Keyword::Select));
        assert!(!tk.is_keyword(Keyword::From));
        assert_eq!(tk.keyword(), Some(Keyword::Select));
        assert!(tk.ident().is_none());
    }

    #[test]
    fn ident_access() {
        let tk = TokenKind::Ident("MyTable".into());
        assert_eq!(tk.ident(), Some("MyTable"));
        assert!(tk.keyword().is_none());
    }
}
