use crate::*;
use sqlx::{
    AssertSqlSafe, Row as _,
    mysql::{MySqlConnection, MySqlRow},
};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Schema lookups against a live server through `SHOW` statements.
///
/// Unqualified lookups (`SHOW TABLES`) answer for the connection's current
/// database, so they follow any `USE` run on that connection.
#[derive(Debug, Clone)]
pub struct MySqlIntrospector {
    conn: Arc<Mutex<MySqlConnection>>,
}

impl MySqlIntrospector {
    pub fn new(conn: MySqlConnection) -> Self {
        Self::shared(Arc::new(Mutex::new(conn)))
    }

    /// Look up through a connection that is also used for other work.
    pub fn shared(conn: Arc<Mutex<MySqlConnection>>) -> Self {
        Self { conn }
    }

    async fn show(&self, statement: String) -> Result<Vec<MySqlRow>> {
        trace!("introspecting: {statement}");
        let mut conn = self.conn.lock().await;
        Ok(sqlx::raw_sql(AssertSqlSafe(statement))
            .fetch_all(&mut *conn)
            .await?)
    }
}

/// Column `index` as text. `SHOW` output mixes VARCHAR and binary-collated columns,
/// so the type check is skipped and the bytes are decoded leniently.
pub(crate) fn text_at(row: &MySqlRow, index: usize) -> Result<String> {
    let bytes: Option<Vec<u8>> = row.try_get_unchecked(index)?;
    Ok(bytes
        .map(|b| String::from_utf8_lossy(&b).into_owned())
        .unwrap_or_default())
}

impl Introspect for MySqlIntrospector {
    async fn databases(&self) -> Result<Vec<String>> {
        self.show("SHOW DATABASES".to_string())
            .await?
            .iter()
            .map(|row| text_at(row, 0))
            .collect()
    }

    async fn tables(&self, database: Option<&str>) -> Result<Vec<String>> {
        let statement = match database {
            Some(database) => format!("SHOW TABLES FROM {}", quote_ident(database)),
            None => "SHOW TABLES".to_string(),
        };
        self.show(statement)
            .await?
            .iter()
            .map(|row| text_at(row, 0))
            .collect()
    }

    async fn columns(&self, table: &TableRef) -> Result<Vec<Column>> {
        self.show(format!("SHOW COLUMNS FROM {table}"))
            .await?
            .iter()
            .map(|row| Ok(Column::new(text_at(row, 0)?, text_at(row, 1)?.as_str())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{IsolatedIntegrationTest, common_init};
    use sqlx::Connection as _;
    use test_context::test_context;

    async fn introspector(ctx: &IsolatedIntegrationTest) -> MySqlIntrospector {
        let conn = MySqlConnection::connect(&ctx.connection_string().await)
            .await
            .expect("connect");
        MySqlIntrospector::new(conn)
    }

    #[test_context(IsolatedIntegrationTest)]
    #[tokio::test]
    #[ignore = "requires docker"]
    async fn introspects_live_schema(ctx: &mut IsolatedIntegrationTest) -> Result {
        common_init();
        sqlx::raw_sql(AssertSqlSafe(format!(
            "CREATE TABLE `{}`.student (id INT UNSIGNED PRIMARY KEY, name VARCHAR(64))",
            ctx.database
        )))
        .execute(&ctx.pool)
        .await?;

        let introspector = introspector(ctx).await;
        assert!(introspector.databases().await?.contains(&ctx.database));
        assert_eq!(
            introspector.tables(Some(&ctx.database)).await?,
            ["student"]
        );

        let columns = introspector
            .columns(&TableRef::new(Some(ctx.database.as_str()), "student"))
            .await?;
        assert_eq!(columns[0].name, "id");
        assert!(columns[0].data_type.is_numeric());
        assert_eq!(columns[1].data_type, DataType::VarChar(Some(64)));

        let table = TableRef::new(Some(ctx.database.as_str()), "student");
        assert!(table_exists(&introspector, &table).await?);
        Ok(())
    }

    #[test_context(IsolatedIntegrationTest)]
    #[tokio::test]
    #[ignore = "requires docker"]
    async fn unqualified_tables_follow_the_current_database(
        ctx: &mut IsolatedIntegrationTest,
    ) -> Result {
        sqlx::raw_sql(AssertSqlSafe(format!("CREATE TABLE `{}`.pupil (id INT)", ctx.database)))
            .execute(&ctx.pool)
            .await?;
        let conn = Arc::new(Mutex::new(
            MySqlConnection::connect(&ctx.connection_string().await).await?,
        ));
        let introspector = MySqlIntrospector::shared(conn.clone());
        assert_eq!(introspector.tables(None).await?, ["pupil"]);

        sqlx::raw_sql("USE mysql").execute(&mut *conn.lock().await).await?;
        let tables = introspector.tables(None).await?;
        assert!(tables.contains(&"user".to_string()));
        assert!(!table_exists(&introspector, &TableRef::new(None::<String>, "pupil")).await?);
        Ok(())
    }
}
