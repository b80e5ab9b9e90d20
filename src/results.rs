//! Query results and their text renderings for the results buffer.
crate::reexport!(cell);
crate::reexport!(format);

/// One row of `SHOW WARNINGS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub level: String,
    pub code: u32,
    pub message: String,
}

/// Outcome of running one or more statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResults {
    Read {
        header: Vec<String>,
        types: Vec<crate::DataType>,
        rows: Vec<Vec<Cell>>,
        count: u64,
        warnings: Vec<Warning>,
    },
    Write {
        count: u64,
        warnings: Vec<Warning>,
    },
    Error {
        message: String,
    },
}

impl QueryResults {
    pub fn warnings(&self) -> &[Warning] {
        match self {
            Self::Read { warnings, .. } | Self::Write { warnings, .. } => warnings,
            Self::Error { .. } => &[],
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}
