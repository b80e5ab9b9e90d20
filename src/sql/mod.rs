//! SQL tokenization and the lightweight statement tree.
//!
//! These are the building blocks the autocomplete resolver uses to reason about
//! a statement that is usually still being typed:
//!
//! - `keyword`    : the structural keywords, matched case-insensitively.
//! - `token_kind` : classification of lexical atoms.
//! - `token`      : a `TokenKind` plus its byte span.
//! - `tokenizer`  : MySQL lexing via `sqlparser`, reduced to `Token`s.
//! - `tree`       : grouping of tokens into a depth-annotated `Node` tree.
//!
//! ```rust
//! use nvim_mysql::prelude::*;
//!
//! let tree = parse("SELECT s.name FROM school.student s").unwrap();
//! assert!(tree.children[0].is_keyword(Keyword::Select));
//! ```
//!
//! NOTE: this is **not** a SQL parser. Only SELECT / FROM / subquery / alias /
//! UNION shapes are recognised, and only as far as namespace resolution needs.

pub mod keyword;
pub mod token;
pub mod token_kind;
pub mod tokenizer;
pub mod tree;

pub use keyword::Keyword;
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::tokenize;
pub use tree::{Identifier, Node, NodeKind, parse};

/// Failure to turn statement text into a tree.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Tokenize(#[from] sqlparser::tokenizer::TokenizerError),

    #[error("unbalanced parenthesis: `)` at offset {offset} has no matching `(`")]
    UnbalancedParen { offset: usize },
}

/// Convenience prelude re-exporting the most commonly used items.
pub mod prelude {
    pub use super::{Identifier, Keyword, Node, NodeKind, Token, TokenKind, parse, tokenize};
}
