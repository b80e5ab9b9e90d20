use derive_more::{Debug, Display};

/// A MySQL column type, as reported by `SHOW COLUMNS` or by the driver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum DataType {
    #[display("boolean")]
    Boolean,
    #[display("tinyint{}", len(*_0))]
    TinyInt(Option<usize>),
    #[display("smallint{}", len(*_0))]
    SmallInt(Option<usize>),
    #[display("mediumint{}", len(*_0))]
    MediumInt(Option<usize>),
    #[display("int{}", len(*_0))]
    Int(Option<usize>),
    #[display("bigint{}", len(*_0))]
    BigInt(Option<usize>),
    #[display("decimal{}", precision(*_0, *_1))]
    Decimal(Option<usize>, Option<usize>),
    #[display("float")]
    Float,
    #[display("double")]
    Double,
    #[display("bit{}", len(*_0))]
    Bit(Option<usize>),
    #[display("date")]
    Date,
    #[display("datetime{}", len(*_0))]
    DateTime(Option<usize>),
    #[display("timestamp{}", len(*_0))]
    Timestamp(Option<usize>),
    #[display("time{}", len(*_0))]
    Time(Option<usize>),
    #[display("year")]
    Year,
    #[display("char{}", len(*_0))]
    Char(Option<usize>),
    #[display("varchar{}", len(*_0))]
    VarChar(Option<usize>),
    #[display("tinytext")]
    TinyText,
    #[display("text")]
    Text,
    #[display("mediumtext")]
    MediumText,
    #[display("longtext")]
    LongText,
    #[display("binary{}", len(*_0))]
    Binary(Option<usize>),
    #[display("varbinary{}", len(*_0))]
    VarBinary(Option<usize>),
    #[display("tinyblob")]
    TinyBlob,
    #[display("blob")]
    Blob,
    #[display("mediumblob")]
    MediumBlob,
    #[display("longblob")]
    LongBlob,
    #[display("enum({})", quoted(_0))]
    Enum(Vec<String>),
    #[display("set({})", quoted(_0))]
    Set(Vec<String>),
    #[display("json")]
    Json,
    #[display("geometry")]
    Geometry,
    #[display("null")]
    Null,
    #[display("{_0} unsigned")]
    Unsigned(Box<DataType>),
    /// Anything not recognised, kept verbatim (lowercased).
    #[display("{_0}")]
    Other(String),
}

fn len(n: Option<usize>) -> String {
    n.map(|n| format!("({n})")).unwrap_or_default()
}

fn precision(m: Option<usize>, d: Option<usize>) -> String {
    match (m, d) {
        (Some(m), Some(d)) => format!("({m},{d})"),
        (m, _) => len(m),
    }
}

fn quoted(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("'{}'", v.replace('\'', "''")))
        .collect::<Vec<_>>()
        .join(",")
}

impl DataType {
    /// Accepts `SHOW COLUMNS` text (`int(11) unsigned`, `decimal(10,2)`,
    /// `enum('a','b')`) as well as driver type names (`BIGINT UNSIGNED`).
    pub fn parse(text: &str) -> Self {
        let lower = text.trim().to_lowercase();
        let (name, args, rest) = match lower.find('(') {
            Some(open) => {
                let close = lower.rfind(')').filter(|&c| c > open).unwrap_or(lower.len());
                let rest = lower.get(close + 1..).unwrap_or_default();
                (&lower[..open], &lower[open + 1..close], rest)
            }
            None => match lower.find(' ') {
                Some(space) => (&lower[..space], "", &lower[space..]),
                None => (lower.as_str(), "", ""),
            },
        };
        let name = name.trim();
        let unsigned = rest.split_whitespace().any(|w| w == "unsigned");

        let sizes: Vec<usize> = args
            .split(',')
            .filter_map(|a| a.trim().parse().ok())
            .collect();
        let size = sizes.first().copied();

        let parsed = match name {
            "bool" | "boolean" => Self::Boolean,
            "tinyint" => Self::TinyInt(size),
            "smallint" => Self::SmallInt(size),
            "mediumint" => Self::MediumInt(size),
            "int" | "integer" => Self::Int(size),
            "bigint" => Self::BigInt(size),
            "decimal" | "numeric" | "dec" | "fixed" | "newdecimal" => {
                Self::Decimal(size, sizes.get(1).copied())
            }
            "float" => Self::Float,
            "double" | "real" => Self::Double,
            "bit" => Self::Bit(size),
            "date" | "newdate" => Self::Date,
            "datetime" => Self::DateTime(size),
            "timestamp" => Self::Timestamp(size),
            "time" => Self::Time(size),
            "year" => Self::Year,
            "char" => Self::Char(size),
            "varchar" => Self::VarChar(size),
            "tinytext" => Self::TinyText,
            "text" => Self::Text,
            "mediumtext" => Self::MediumText,
            "longtext" => Self::LongText,
            "binary" => Self::Binary(size),
            "varbinary" => Self::VarBinary(size),
            "tinyblob" => Self::TinyBlob,
            "blob" => Self::Blob,
            "mediumblob" => Self::MediumBlob,
            "longblob" => Self::LongBlob,
            "enum" => Self::Enum(enum_values(args)),
            "set" => Self::Set(enum_values(args)),
            "json" => Self::Json,
            "geometry" | "point" | "linestring" | "polygon" => Self::Geometry,
            "null" => Self::Null,
            _ => return Self::Other(lower),
        };

        if unsigned {
            Self::Unsigned(Box::new(parsed))
        } else {
            parsed
        }
    }

    pub fn is_numeric(&self) -> bool {
        match self {
            Self::Unsigned(inner) => inner.is_numeric(),
            Self::TinyInt(_)
            | Self::SmallInt(_)
            | Self::MediumInt(_)
            | Self::Int(_)
            | Self::BigInt(_)
            | Self::Decimal(..)
            | Self::Float
            | Self::Double => true,
            _ => false,
        }
    }

    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::Date | Self::DateTime(_) | Self::Timestamp(_) | Self::Time(_) | Self::Year
        )
    }
}

impl From<&str> for DataType {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

/// `'a','b,c','it''s'` into its values.
fn enum_values(args: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = args.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, quoted) {
            ('\'', true) if chars.peek() == Some(&'\'') => {
                chars.next();
                current.push('\'');
            }
            ('\'', _) => quoted = !quoted,
            (',', false) => values.push(std::mem::take(&mut current)),
            (c, true) => current.push(c),
            _ => {}
        }
    }
    if !current.is_empty() || !values.is_empty() {
        values.push(current);
    }
    values
}
