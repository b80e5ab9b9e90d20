use crate::*;
use std::{fmt, str::FromStr};

/// A table name with an optional database qualifier.
///
/// Parses `table`, `db.table` and `` `db`.`table` `` (backticks are dropped);
/// always displays fully quoted, ready to be spliced into a statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableRef {
    pub database: Option<String>,
    pub table: String,
}

impl TableRef {
    pub fn new(database: Option<impl Into<String>>, table: impl Into<String>) -> Self {
        Self {
            database: database.map(Into::into),
            table: table.into(),
        }
    }
}

impl FromStr for TableRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let unquoted = s.replace('`', "");
        let parts: Vec<&str> = unquoted.split('.').map(str::trim).collect();
        match parts.as_slice() {
            [table] if !table.is_empty() => Ok(Self::new(None::<String>, *table)),
            [database, table] if !database.is_empty() && !table.is_empty() => {
                Ok(Self::new(Some(*database), *table))
            }
            _ => Err(Error::InvalidTable(s.to_string())),
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(database) = &self.database {
            write!(f, "{}.", quote_ident(database))?;
        }
        write!(f, "{}", quote_ident(&self.table))
    }
}

/// Backtick-quote a MySQL identifier.
pub fn quote_ident(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}
