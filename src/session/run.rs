use crate::*;
use futures::TryStreamExt as _;
use sqlx::{
    AssertSqlSafe, Column as _, Either, Executor as _, MySqlConnection, Row as _, SqlSafeStr as _,
    Statement as _, TypeInfo as _,
};

/// Run one statement and collect what it produced.
pub(super) async fn run_statement(conn: &mut MySqlConnection, query: &str) -> Result<QueryResults> {
    debug!("executing query: {query}");
    let mut rows = Vec::new();
    let mut affected = 0;
    {
        let mut stream = sqlx::raw_sql(AssertSqlSafe(query.to_string())).fetch_many(&mut *conn);
        while let Some(step) = stream.try_next().await? {
            match step {
                Either::Left(done) => affected += done.rows_affected(),
                Either::Right(row) => rows.push(row),
            }
        }
    }

    let warnings = warnings(conn).await?;

    if rows.is_empty() && !is_read(query) {
        return Ok(QueryResults::Write {
            count: affected,
            warnings,
        });
    }

    let (header, types): (Vec<String>, Vec<DataType>) = match rows.first() {
        Some(row) => row
            .columns()
            .iter()
            .map(|c| (c.name().to_string(), DataType::parse(c.type_info().name())))
            .unzip(),
        None => describe(conn, query).await,
    };
    let cells = rows
        .iter()
        .map(|row| {
            (0..row.len())
                .map(|i| Ok(Cell::from_bytes(row.try_get_unchecked(i)?)))
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QueryResults::Read {
        header,
        types,
        count: cells.len() as u64,
        rows: cells,
        warnings,
    })
}

/// Column names and types of a read that returned no rows.
async fn describe(conn: &mut MySqlConnection, query: &str) -> (Vec<String>, Vec<DataType>) {
    match conn.prepare(AssertSqlSafe(query.to_string()).into_sql_str()).await {
        Ok(statement) => statement
            .columns()
            .iter()
            .map(|c| (c.name().to_string(), DataType::parse(c.type_info().name())))
            .unzip(),
        Err(e) => {
            debug!("could not describe empty result: {e}");
            (Vec::new(), Vec::new())
        }
    }
}

async fn warnings(conn: &mut MySqlConnection) -> Result<Vec<Warning>> {
    sqlx::raw_sql("SHOW WARNINGS")
        .fetch_all(&mut *conn)
        .await?
        .iter()
        .map(|row| {
            Ok(Warning {
                level: text_at(row, 0)?,
                code: text_at(row, 1)?.parse().unwrap_or_default(),
                message: text_at(row, 2)?,
            })
        })
        .collect()
}

/// Statements that produce a result set even when it is empty.
pub(crate) fn is_read(query: &str) -> bool {
    use Keyword::*;
    let Ok(tokens) = tokenize(query) else {
        return false;
    };
    tokens
        .first()
        .and_then(|t| t.kind.keyword())
        .is_some_and(|k| matches!(k, Select | Show | Describe | Desc | Explain | With))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("select 1", true)]
    #[case("  SHOW tables", true)]
    #[case("describe t", true)]
    #[case("desc t", true)]
    #[case("explain select 1", true)]
    #[case("with x as (select 1) select * from x", true)]
    #[case("/* note */ select 1", true)]
    #[case("update t set a = 1", false)]
    #[case("insert into t values (1)", false)]
    #[case("set @a = 1", false)]
    #[case("", false)]
    fn should_classify_reads(#[case] query: &str, #[case] read: bool) {
        assert_eq!(is_read(query), read);
    }
}
