use crate::*;
use std::collections::HashMap;

/// In-memory schema catalog.
///
/// Serves completion without a live connection and backs the completion and
/// tree-view tests.
#[derive(Debug)]
pub struct Server {
    pub databases: Data<Database>,
    /// The database a connection would have selected.
    pub current: Option<String>,
}

impl Server {
    pub fn new(current: Option<&str>) -> Self {
        Self {
            databases: Data::new(HashMap::new()),
            current: current.map(str::to_string),
        }
    }

    /// Insert (or overwrite) a database.
    pub async fn insert_database(&self, database: Database) {
        self.databases
            .write()
            .await
            .insert(database.name.clone(), database);
    }

    /// Add (or create) the database and insert the table.
    pub async fn insert_table(&self, database: &str, table: Table) {
        self.databases
            .write()
            .await
            .entry(database.to_string())
            .or_insert_with(|| Database::new(database)) // Create/return database
            .insert_table(table)
            .await;
    }

    pub async fn drop_database(&self, database: &str) {
        self.databases.write().await.remove(database);
    }
}

impl Introspect for Server {
    async fn databases(&self) -> Result<Vec<String>> {
        let mut names: Vec<_> = self.databases.read().await.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn tables(&self, database: Option<&str>) -> Result<Vec<String>> {
        let name = database
            .or(self.current.as_deref())
            .ok_or(Error::NoDatabaseSelected)?;
        let databases = self.databases.read().await;
        let database = databases
            .get(name)
            .ok_or_else(|| Error::UnknownDatabase(name.to_string()))?;
        Ok(database.table_names().await)
    }

    async fn columns(&self, table: &TableRef) -> Result<Vec<Column>> {
        let name = table
            .database
            .as_deref()
            .or(self.current.as_deref())
            .ok_or(Error::NoDatabaseSelected)?;
        let databases = self.databases.read().await;
        let database = databases
            .get(name)
            .ok_or_else(|| Error::UnknownDatabase(name.to_string()))?;
        let tables = database.tables.read().await;
        let found = tables
            .get(&table.table)
            .ok_or_else(|| Error::TableNotFound(table.to_string()))?;
        Ok(found.ordered_columns().await)
    }
}

#[cfg(test)]
pub(crate) async fn school_server() -> Server {
    let server = Server::new(Some("school"));
    server
        .insert_table(
            "school",
            Table::with_columns(
                "student",
                [("id", "int(11)"), ("name", "varchar(64)"), ("First Name", "text")],
            ),
        )
        .await;
    server
        .insert_table("school", Table::with_columns("classroom", [("id", "int(11)")]))
        .await;
    server
        .insert_table(
            "school",
            Table::with_columns("soccer_team", [("id", "int(11)"), ("founded", "date")]),
        )
        .await;
    server
        .insert_table("library", Table::with_columns("book", [("isbn", "char(13)")]))
        .await;
    server.insert_database(Database::new("empty-db")).await;
    server
}
