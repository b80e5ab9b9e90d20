use crate::sql::{ParseError, keyword::Keyword, token::Token, token_kind::TokenKind};
use sqlparser::{
    dialect::MySqlDialect,
    tokenizer::{Location, Token as SqlToken, TokenWithSpan, Tokenizer, Word},
};

static MYSQL: MySqlDialect = MySqlDialect {};

/// SQL tokenizer producing a flat stream of `Token`s, whitespace and comments dropped.
///
/// Lexing is delegated to `sqlparser` with the MySQL dialect so backtick
/// identifiers, `#` comments and escaped string literals behave as the server
/// sees them. The result is then reduced to the small `TokenKind` vocabulary the
/// tree builder needs.
///
/// Unlike the grouping step, lexing is strict about one thing: an unterminated
/// string literal or quoted identifier is reported as `ParseError::Tokenize`.
pub fn tokenize(sql: &str) -> Result<Vec<Token>, ParseError> {
    let tokens = Tokenizer::new(&MYSQL, sql).tokenize_with_location()?;
    let lines = LineIndex::new(sql);

    let mut out = Vec::with_capacity(tokens.len());
    for TokenWithSpan { token, span } in tokens {
        let kind = match token {
            SqlToken::EOF | SqlToken::Whitespace(_) => continue,
            SqlToken::Word(word) => classify_word(word),
            SqlToken::Comma => TokenKind::Comma,
            SqlToken::Period => TokenKind::Dot,
            SqlToken::LParen => TokenKind::ParenOpen,
            SqlToken::RParen => TokenKind::ParenClose,
            SqlToken::Mul => TokenKind::Star,
            SqlToken::Number(n, _) => TokenKind::Literal(n),
            SqlToken::SingleQuotedString(s)
            | SqlToken::DoubleQuotedString(s)
            | SqlToken::NationalStringLiteral(s)
            | SqlToken::HexStringLiteral(s) => TokenKind::Literal(s),
            other => TokenKind::Other(other.to_string()),
        };
        out.push(Token::new(
            kind,
            lines.offset(span.start),
            lines.offset(span.end),
        ));
    }

    Ok(out)
}

fn classify_word(word: Word) -> TokenKind {
    if word.quote_style.is_some() {
        return TokenKind::Ident(word.value);
    }
    Keyword::from_lower(&word.value.to_ascii_lowercase())
        .map(TokenKind::Keyword)
        .unwrap_or(TokenKind::Ident(word.value))
}

/// Maps the lexer's 1-based line / character-column locations back to byte offsets.
struct LineIndex<'a> {
    sql: &'a str,
    starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(sql: &'a str) -> Self {
        let starts = std::iter::once(0)
            .chain(sql.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { sql, starts }
    }

    fn offset(&self, location: Location) -> usize {
        let line = (location.line as usize).saturating_sub(1);
        let Some(&start) = self.starts.get(line) else {
            return self.sql.len();
        };
        let column = (location.column as usize).saturating_sub(1);
        self.sql[start..]
            .char_indices()
            .nth(column)
            .map(|(i, _)| start + i)
            .unwrap_or(self.sql.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(sql: &str) -> Vec<TokenKind> {
        tokenize(sql)
            .expect("tokenize")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn basic_select_sequence() {
        assert_eq!(
            kinds("SELECT a, b FROM t"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Ident("a".into()),
                TokenKind::Comma,
                TokenKind::Ident("b".into()),
                TokenKind::Keyword(Keyword::From),
                TokenKind::Ident("t".into()),
            ]
        );
    }

    #[test]
    fn preserves_case_for_identifiers() {
        let toks = kinds("From MyTable");
        assert_eq!(toks[0], TokenKind::Keyword(Keyword::From));
        assert_eq!(toks[1], TokenKind::Ident("MyTable".into()));
    }

    #[test]
    fn backtick_identifiers_are_never_keywords() {
        assert_eq!(
            kinds("`select`.`my table`"),
            vec![
                TokenKind::Ident("select".into()),
                TokenKind::Dot,
                TokenKind::Ident("my table".into()),
            ]
        );
    }

    #[test]
    fn comments_and_literals() {
        assert_eq!(
            kinds("where x = 'a.b' # trailing\n and y = 3 -- done"),
            vec![
                TokenKind::Keyword(Keyword::Where),
                TokenKind::Ident("x".into()),
                TokenKind::Other("=".into()),
                TokenKind::Literal("a.b".into()),
                TokenKind::Keyword(Keyword::And),
                TokenKind::Ident("y".into()),
                TokenKind::Other("=".into()),
                TokenKind::Literal("3".into()),
            ]
        );
    }

    #[test]
    fn punctuation_tokens() {
        assert_eq!(
            kinds("(a.*,c)"),
            vec![
                TokenKind::ParenOpen,
                TokenKind::Ident("a".into()),
                TokenKind::Dot,
                TokenKind::Star,
                TokenKind::Comma,
                TokenKind::Ident("c".into()),
                TokenKind::ParenClose,
            ]
        );
    }

    #[test]
    fn byte_offsets_span_lines_and_multibyte_text() {
        let sql = "select 'é'\nfrom t";
        let toks = tokenize(sql).expect("tokenize");
        let from = toks
            .iter()
            .find(|t| t.is_keyword(Keyword::From))
            .expect("from");
        assert_eq!(&sql[from.start..from.end], "from");
        let t = toks.last().expect("t");
        assert_eq!(&sql[t.start..t.end], "t");
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert!(matches!(
            tokenize("select 'abc"),
            Err(ParseError::Tokenize(_))
        ));
    }
}
