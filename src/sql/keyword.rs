//! SQL keyword model used by the tokenizer / tree components.
//!
//! Only words that matter structurally are classified: the statement verbs that
//! introduce a table, the clause keywords that delimit a SELECT, and the
//! reserved words that must never be mistaken for a table alias. Everything else
//! (including most of MySQL's non-reserved keywords such as `name`, `status` or
//! `position`) stays an identifier, since those routinely appear as column names.
//!
//! Keywords are matched case-insensitively via `from_lower` on a pre-lower-cased
//! slice. Backtick-quoted words are never keywords.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Select,
    From,
    Update,
    Alter,
    Delete,
    Insert,
    Replace,
    Into,
    Table,
    Set,
    Values,
    With,
    Join,
    Inner,
    Left,
    Right,
    Outer,
    Cross,
    Natural,
    StraightJoin,
    On,
    Using,
    As,
    Where,
    Group,
    Order,
    By,
    Having,
    Limit,
    Offset,
    Union,
    Except,
    Intersect,
    All,
    Distinct,
    And,
    Or,
    Xor,
    Not,
    In,
    Is,
    Null,
    Like,
    Regexp,
    Between,
    Exists,
    Case,
    When,
    Then,
    Else,
    End,
    Asc,
    Desc,
    Describe,
    Explain,
    Show,
    Modify,
    Change,
    Add,
    Drop,
    Ignore,
    For,
    Window,
    Partition,
}

impl Keyword {
    /// Keywords after which the first identifier names the statement's primary table.
    pub const INTRODUCERS: [Self; 3] = [Keyword::From, Keyword::Update, Keyword::Alter];

    /// Attempt to classify a *lower-cased* word slice into a `Keyword`.
    ///
    /// NOTE: the caller lower-cases the input once per word.
    pub fn from_lower(word: &str) -> Option<Self> {
        use Keyword::*;
        let kw = match word {
            "select" => Select,
            "from" => From,
            "update" => Update,
            "alter" => Alter,
            "delete" => Delete,
            "insert" => Insert,
            "replace" => Replace,
            "into" => Into,
            "table" => Table,
            "set" => Set,
            "values" => Values,
            "with" => With,
            "join" => Join,
            "inner" => Inner,
            "left" => Left,
            "right" => Right,
            "outer" => Outer,
            "cross" => Cross,
            "natural" => Natural,
            "straight_join" => StraightJoin,
            "on" => On,
            "using" => Using,
            "as" => As,
            "where" => Where,
            "group" => Group,
            "order" => Order,
            "by" => By,
            "having" => Having,
            "limit" => Limit,
            "offset" => Offset,
            "union" => Union,
            "except" => Except,
            "intersect" => Intersect,
            "all" => All,
            "distinct" => Distinct,
            "and" => And,
            "or" => Or,
            "xor" => Xor,
            "not" => Not,
            "in" => In,
            "is" => Is,
            "null" => Null,
            "like" => Like,
            "regexp" | "rlike" => Regexp,
            "between" => Between,
            "exists" => Exists,
            "case" => Case,
            "when" => When,
            "then" => Then,
            "else" => Else,
            "end" => End,
            "asc" => Asc,
            "desc" => Desc,
            "describe" => Describe,
            "explain" => Explain,
            "show" => Show,
            "modify" => Modify,
            "change" => Change,
            "add" => Add,
            "drop" => Drop,
            "ignore" => Ignore,
            "for" => For,
            "window" => Window,
            "partition" => Partition,
            _ => return None,
        };
        Some(kw)
    }

    /// Canonical lowercase string form of the keyword.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Select => "select",
            From => "from",
            Update => "update",
            Alter => "alter",
            Delete => "delete",
            Insert => "insert",
            Replace => "replace",
            Into => "into",
            Table => "table",
            Set => "set",
            Values => "values",
            With => "with",
            Join => "join",
            Inner => "inner",
            Left => "left",
            Right => "right",
            Outer => "outer",
            Cross => "cross",
            Natural => "natural",
            StraightJoin => "straight_join",
            On => "on",
            Using => "using",
            As => "as",
            Where => "where",
            Group => "group",
            Order => "order",
            By => "by",
            Having => "having",
            Limit => "limit",
            Offset => "offset",
            Union => "union",
            Except => "except",
            Intersect => "intersect",
            All => "all",
            Distinct => "distinct",
            And => "and",
            Or => "or",
            Xor => "xor",
            Not => "not",
            In => "in",
            Is => "is",
            Null => "null",
            Like => "like",
            Regexp => "regexp",
            Between => "between",
            Exists => "exists",
            Case => "case",
            When => "when",
            Then => "then",
            Else => "else",
            End => "end",
            Asc => "asc",
            Desc => "desc",
            Describe => "describe",
            Explain => "explain",
            Show => "show",
            Modify => "modify",
            Change => "change",
            Add => "add",
            Drop => "drop",
            Ignore => "ignore",
            For => "for",
            Window => "window",
            Partition => "partition",
        }
    }

    /// True for keywords that introduce the statement's primary table.
    pub fn is_introducer(self) -> bool {
        Self::INTRODUCERS.contains(&self)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
