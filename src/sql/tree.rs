//! Depth-annotated statement tree.
//!
//! The tree is shallow: it only groups what scope resolution
//! needs. Name chains (`db.table`, `t.col`, `t.*`) become `Identifier` nodes
//! carrying their alias, a name chain directly followed by `(` becomes a
//! `Function`, and every `( ... )` opens a `Parenthesis` whose contents sit one
//! level deeper. Everything else is a leaf at the level of its surroundings.
//!
//! Levels start at `0` for the `Statement` root, so the top-level tokens of a
//! statement are at level `1`.

use crate::sql::{ParseError, keyword::Keyword, token::Token, token_kind::TokenKind, tokenize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub level: usize,
    /// Byte range in the parsed text.
    pub span: (usize, usize),
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Statement,
    Keyword(Keyword),
    Identifier(Identifier),
    /// Function call; the arguments are the node's children.
    Function(Identifier),
    /// `( ... )`, optionally followed by a derived-table alias.
    Parenthesis { alias: Option<String> },
    Literal(String),
    /// Commas, operators, `*` and other punctuation.
    Other(String),
}

/// A possibly qualified name such as `student`, `school.student` or `s.name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub parts: Vec<String>,
    pub alias: Option<String>,
}

impl Identifier {
    /// The full dotted name, without the alias.
    pub fn qualified_name(&self) -> String {
        self.parts.join(".")
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// If some part contains `marker`, returns the qualifier written before that part
    /// (`None` inside the outer option when the marker sits in the first part).
    pub fn qualifier_before(&self, marker: &str) -> Option<Option<String>> {
        let at = self.parts.iter().position(|p| p.contains(marker))?;
        Some((at > 0).then(|| self.parts[..at].join(".")))
    }
}

impl Node {
    fn leaf(kind: NodeKind, level: usize, token: &Token) -> Self {
        Self {
            kind,
            level,
            span: token.span(),
            children: Vec::new(),
        }
    }

    pub fn identifier(&self) -> Option<&Identifier> {
        match &self.kind {
            NodeKind::Identifier(ident) => Some(ident),
            _ => None,
        }
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            NodeKind::Keyword(k) => Some(k),
            _ => None,
        }
    }

    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.keyword() == Some(kw)
    }

    /// Depth-first pre-order walk: each node is handed to `f` before its children.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }
}

/// Parse one statement's text into a tree.
///
/// Incomplete input is accepted: a `(` still open at the end of the text is
/// closed implicitly, since completion runs on statements being typed. A `)`
/// with no matching `(` is an error, as is anything the lexer rejects.
pub fn parse(sql: &str) -> Result<Node, ParseError> {
    let tokens = tokenize(sql)?;
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
    };
    let children = parser.group(1);
    if let Some(stray) = parser.peek() {
        return Err(ParseError::UnbalancedParen {
            offset: stray.start,
        });
    }
    Ok(Node {
        kind: NodeKind::Statement,
        level: 0,
        span: (0, sql.len()),
        children,
    })
}

struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Parser<'t> {
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self, ahead: usize) -> Option<&'t TokenKind> {
        self.tokens.get(self.pos + ahead).map(|t| &t.kind)
    }

    /// Collect nodes at `level` until a `)` or the end of input. The `)` is left
    /// for the caller.
    fn group(&mut self, level: usize) -> Vec<Node> {
        let mut nodes = Vec::new();
        while let Some(token) = self.peek() {
            let node = match &token.kind {
                TokenKind::ParenClose => break,
                TokenKind::ParenOpen => self.parenthesis(level),
                TokenKind::Ident(_) => self.name(level),
                TokenKind::Keyword(k) => {
                    self.pos += 1;
                    Node::leaf(NodeKind::Keyword(*k), level, token)
                }
                TokenKind::Literal(value) => {
                    self.pos += 1;
                    Node::leaf(NodeKind::Literal(value.clone()), level, token)
                }
                TokenKind::Comma => self.other(",", level, token),
                TokenKind::Dot => self.other(".", level, token),
                TokenKind::Star => self.other("*", level, token),
                TokenKind::Other(text) => self.other(text, level, token),
            };
            nodes.push(node);
        }
        nodes
    }

    fn other(&mut self, text: &str, level: usize, token: &Token) -> Node {
        self.pos += 1;
        Node::leaf(NodeKind::Other(text.to_string()), level, token)
    }

    /// `(` contents `)` [alias]. Called with the cursor on `(`.
    fn parenthesis(&mut self, level: usize) -> Node {
        let (children, span) = self.parenthesized(level + 1);
        let alias = self.alias();
        Node {
            kind: NodeKind::Parenthesis { alias },
            level,
            span,
            children,
        }
    }

    /// Consume `(` ... `)` and return the inner nodes (built at `inner_level`) and the span.
    fn parenthesized(&mut self, inner_level: usize) -> (Vec<Node>, (usize, usize)) {
        let start = self.peek().map(|t| t.start).unwrap_or_default();
        let mut end = self.peek().map(|t| t.end).unwrap_or_default();
        self.pos += 1;
        let children = self.group(inner_level);
        match self.peek() {
            Some(close) if close.kind == TokenKind::ParenClose => {
                end = close.end;
                self.pos += 1;
            }
            _ => {
                if let Some(last) = children.last() {
                    end = last.span.1;
                }
            }
        }
        (children, (start, end))
    }

    /// A name chain, then either a call's argument list or an optional alias.
    fn name(&mut self, level: usize) -> Node {
        let start = self.tokens[self.pos].start;
        let mut end = self.tokens[self.pos].end;
        let mut parts = Vec::new();
        if let Some(first) = self.peek().and_then(Token::ident) {
            parts.push(first.to_string());
        }
        self.pos += 1;

        while let Some(TokenKind::Dot) = self.peek_kind(0) {
            end = self.tokens[self.pos].end;
            match self.peek_kind(1) {
                Some(TokenKind::Ident(part)) => {
                    parts.push(part.clone());
                    end = self.tokens[self.pos + 1].end;
                    self.pos += 2;
                }
                Some(TokenKind::Star) => {
                    parts.push("*".to_string());
                    end = self.tokens[self.pos + 1].end;
                    self.pos += 2;
                    break;
                }
                // Trailing dot of a name still being typed.
                _ => {
                    self.pos += 1;
                    break;
                }
            }
        }

        if let Some(TokenKind::ParenOpen) = self.peek_kind(0) {
            let (children, (_, call_end)) = self.parenthesized(level + 1);
            let alias = self.alias();
            return Node {
                kind: NodeKind::Function(Identifier { parts, alias }),
                level,
                span: (start, call_end),
                children,
            };
        }

        let alias = self.alias();
        Node {
            kind: NodeKind::Identifier(Identifier { parts, alias }),
            level,
            span: (start, end),
            children: Vec::new(),
        }
    }

    /// `AS name` or a bare `name` directly after an item.
    fn alias(&mut self) -> Option<String> {
        match self.peek_kind(0)? {
            TokenKind::Keyword(Keyword::As) => match self.peek_kind(1) {
                Some(TokenKind::Ident(alias)) => {
                    self.pos += 2;
                    Some(alias.clone())
                }
                _ => None,
            },
            TokenKind::Ident(alias) => {
                self.pos += 1;
                Some(alias.clone())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top_level(sql: &str) -> Vec<NodeKind> {
        parse(sql)
            .expect("parse")
            .children
            .into_iter()
            .map(|n| n.kind)
            .collect()
    }

    fn ident(parts: &[&str], alias: Option<&str>) -> NodeKind {
        NodeKind::Identifier(Identifier {
            parts: parts.iter().map(|p| p.to_string()).collect(),
            alias: alias.map(str::to_string),
        })
    }

    #[test]
    fn groups_qualified_names_with_aliases() {
        assert_eq!(
            top_level("select s.name from school.student s"),
            vec![
                NodeKind::Keyword(Keyword::Select),
                ident(&["s", "name"], None),
                NodeKind::Keyword(Keyword::From),
                ident(&["school", "student"], Some("s")),
            ]
        );
    }

    #[test]
    fn as_alias_and_star() {
        assert_eq!(
            top_level("select t.* from a as t"),
            vec![
                NodeKind::Keyword(Keyword::Select),
                ident(&["t", "*"], None),
                NodeKind::Keyword(Keyword::From),
                ident(&["a"], Some("t")),
            ]
        );
    }

    #[test]
    fn trailing_dot_is_absorbed() {
        assert_eq!(
            top_level("select s.\nfrom student s"),
            vec![
                NodeKind::Keyword(Keyword::Select),
                ident(&["s"], None),
                NodeKind::Keyword(Keyword::From),
                ident(&["student"], Some("s")),
            ]
        );
    }

    #[test]
    fn parenthesis_nests_one_level() {
        let tree = parse("select x from t where id in (select id from u)").expect("parse");
        let paren = tree.children.last().expect("paren");
        assert_eq!(paren.level, 1);
        assert!(matches!(paren.kind, NodeKind::Parenthesis { alias: None }));
        assert!(paren.children.iter().all(|c| c.level == 2));
        assert!(paren.children[0].is_keyword(Keyword::Select));
    }

    #[test]
    fn derived_table_alias_attaches_to_parenthesis() {
        let tree = parse("select * from (select 1) x").expect("parse");
        assert_eq!(
            tree.children.last().map(|n| &n.kind),
            Some(&NodeKind::Parenthesis {
                alias: Some("x".into())
            })
        );
    }

    #[test]
    fn function_call_groups_arguments() {
        let tree = parse("select count(*) c from t").expect("parse");
        let call = &tree.children[1];
        assert_eq!(
            call.kind,
            NodeKind::Function(Identifier {
                parts: vec!["count".into()],
                alias: Some("c".into())
            })
        );
        assert_eq!(call.children.len(), 1);
        assert_eq!(call.children[0].level, 2);
    }

    #[test]
    fn unclosed_parenthesis_is_tolerated() {
        let tree = parse("select a from t where b in (select c from u").expect("parse");
        let paren = tree.children.last().expect("paren");
        assert!(matches!(paren.kind, NodeKind::Parenthesis { .. }));
        assert_eq!(paren.children.len(), 4);
    }

    #[test]
    fn stray_closing_parenthesis_fails() {
        let err = parse("select a from t)").expect_err("should fail");
        assert!(matches!(err, ParseError::UnbalancedParen { offset: 15 }));
    }

    #[test]
    fn walk_is_pre_order() {
        let tree = parse("select (select a)").expect("parse");
        let mut levels = Vec::new();
        tree.walk(&mut |n| levels.push(n.level));
        assert_eq!(levels, vec![0, 1, 1, 2, 2]);
    }

    #[test]
    fn identifier_helpers() {
        let id = Identifier {
            parts: vec!["db".into(), "t".into(), "col".into()],
            alias: None,
        };
        assert_eq!(id.qualified_name(), "db.t.col");
        assert_eq!(id.qualifier_before("col"), Some(Some("db.t".into())));
        assert_eq!(id.qualifier_before("db"), Some(None));
        assert_eq!(id.qualifier_before("zzz"), None);
    }
}
