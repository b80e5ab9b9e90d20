use crate::sql::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),

    #[error("This is not a MySQL-connected tabpage")]
    NotConnected,

    #[error("No query is currently running in this tab")]
    NoRunningQuery,

    #[error("Table '{0}' does not exist")]
    TableNotFound(String),

    #[error("Unknown database '{0}'")]
    UnknownDatabase(String),

    #[error("No database selected")]
    NoDatabaseSelected,

    #[error("Invalid table reference '{0}'")]
    InvalidTable(String),

    #[error("Invalid results format '{0}'")]
    InvalidFormat(String),

    #[error("This command can only be run in {0} buffer")]
    WrongBuffer(&'static str),

    #[error("Timed out waiting for the server")]
    Timeout(#[from] tokio::time::error::Elapsed),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T = ()> = std::result::Result<T, Error>;
