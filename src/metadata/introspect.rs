use crate::*;

/// Read-only access to a server's schema.
#[allow(async_fn_in_trait)]
pub trait Introspect {
    /// Every database visible to the connection.
    async fn databases(&self) -> Result<Vec<String>>;

    /// Tables of `database`, or of the connection's current database.
    async fn tables(&self, database: Option<&str>) -> Result<Vec<String>>;

    /// Columns of `table` in declaration order.
    async fn columns(&self, table: &TableRef) -> Result<Vec<Column>>;
}

/// Whether `table` exists. A qualified reference to a database that does not
/// exist is simply `false`.
pub async fn table_exists<I: Introspect>(introspector: &I, table: &TableRef) -> Result<bool> {
    let tables = match &table.database {
        Some(database) => {
            if !introspector.databases().await?.contains(database) {
                return Ok(false);
            }
            introspector.tables(Some(database)).await?
        }
        None => introspector.tables(None).await?,
    };
    Ok(tables.contains(&table.table))
}
