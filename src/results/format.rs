use super::*;
use crate::*;
use itertools::Itertools as _;
use std::{str::FromStr, time::Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum ResultsFormat {
    /// ASCII grid like the `mysql` client.
    #[default]
    #[display("table")]
    Table,
    #[display("csv")]
    Csv,
    /// The first column only, unescaped.
    #[display("raw_column")]
    RawColumn,
    /// One `name: value` line per field.
    #[display("vertical")]
    Vertical,
}

impl FromStr for ResultsFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "raw_column" => Ok(Self::RawColumn),
            "vertical" => Ok(Self::Vertical),
            other => Err(Error::InvalidFormat(other.to_string())),
        }
    }
}

/// Render `results` as results-buffer lines.
///
/// The `table` format also carries the run's duration, warnings and the query
/// text when they are given.
pub fn format_results(
    results: &QueryResults,
    format: ResultsFormat,
    query: Option<&str>,
    duration: Option<Duration>,
) -> Vec<String> {
    let mut lines = match results {
        QueryResults::Read {
            header,
            types,
            rows,
            count,
            ..
        } => match format {
            ResultsFormat::Table => {
                let mut lines = to_table(&hinted(header, types), rows);
                lines.push(String::new());
                lines.push(format!("{count} row(s) in set, {} col(s)", header.len()));
                lines
            }
            ResultsFormat::Csv => to_csv(header, rows).unwrap_or_else(|e| {
                warn!("could not render csv: {e}");
                vec![format!("Error: {e}")]
            }),
            ResultsFormat::RawColumn => rows
                .iter()
                .filter_map(|row| row.first())
                .map(Cell::raw)
                .join("\n")
                .lines()
                .map(str::to_string)
                .collect(),
            ResultsFormat::Vertical => to_vertical(&hinted(header, types), rows),
        },
        QueryResults::Write { count, .. } => {
            vec![String::new(), format!("{count} row(s) affected")]
        }
        QueryResults::Error { message } => message.lines().map(str::to_string).collect(),
    };

    if format != ResultsFormat::Table {
        return lines;
    }

    if let (Some(duration), false) = (duration, results.is_error()) {
        if let Some(last) = lines.last_mut() {
            last.push_str(&format!(" ({:.2} sec)", duration.as_secs_f64()));
        }
    }

    let warnings = results.warnings();
    if !warnings.is_empty() {
        lines.push(String::new());
        lines.push("[warnings]:".to_string());
        lines.extend(
            warnings
                .iter()
                .map(|w| format!("({}) {}", w.code, w.message)),
        );
    }

    if let Some(query) = query {
        lines.extend(["", "---", ""].map(String::from));
        lines.extend(query.lines().map(str::to_string));
    }

    lines
}

/// Header names with `#` in front of numeric columns and `@` in front of temporal ones.
fn hinted(header: &[String], types: &[DataType]) -> Vec<String> {
    header
        .iter()
        .enumerate()
        .map(|(i, name)| match types.get(i) {
            Some(t) if t.is_numeric() => format!("#{name}"),
            Some(t) if t.is_temporal() => format!("@{name}"),
            _ => name.clone(),
        })
        .collect()
}

fn to_table(header: &[String], rows: &[Vec<Cell>]) -> Vec<String> {
    let header: Vec<String> = header.iter().map(|h| h.lines().join(" ")).collect();
    let shown: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(Cell::display).collect())
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|i| {
            std::iter::once(&header[i])
                .chain(shown.iter().filter_map(|row| row.get(i)))
                .map(|v| v.chars().count())
                .max()
                .unwrap_or_default()
        })
        .collect();

    let bar = format!("+{}+", widths.iter().map(|w| "-".repeat(w + 2)).join("+"));
    let line = |values: &[String]| {
        format!(
            "|{}|",
            values
                .iter()
                .zip(&widths)
                .map(|(v, &w)| format!(" {v:w$} "))
                .join("|")
        )
    };

    let mut lines = vec![bar.clone(), line(header.as_slice()), bar.clone()];
    lines.extend(shown.iter().map(|row| line(row.as_slice())));
    lines.push(bar);
    lines
}

fn to_vertical(header: &[String], rows: &[Vec<Cell>]) -> Vec<String> {
    let width = header.iter().map(|h| h.chars().count()).max().unwrap_or_default() + 1;
    let many = rows.len() > 1;

    let mut lines = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        if many {
            lines.push(format!("***** row {} *****", i + 1));
        }
        for (name, value) in header.iter().zip(row) {
            lines.push(format!("{name:>width$}: {}", value.display()));
        }
        if many && i + 1 < rows.len() {
            lines.push(String::new());
        }
    }
    lines
}

/// RFC 4180 style: fields are quoted only when they need it and NULL is an empty field.
fn to_csv(
    header: &[String],
    rows: &[Vec<Cell>],
) -> std::result::Result<Vec<String>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row.iter().map(|cell| match cell {
            Cell::Null => String::new(),
            other => other.raw(),
        }))?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).lines().map(str::to_string).collect())
}
