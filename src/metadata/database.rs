use super::*;

#[derive(Debug)]
pub struct Database {
    pub name: String,
    pub tables: Data<Table>,
}

impl Database {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: Data::new(HashMap::new()),
        }
    }

    /// Add (or create) the table and insert the column.
    pub async fn insert_column(&self, table_name: &str, column: Column) {
        self.tables
            .write()
            .await
            .entry(table_name.to_string())
            .or_insert_with(|| Table::new(table_name)) // Create/return table
            .insert_column(column)
            .await;
    }

    /// Insert (or overwrite) a table.
    pub async fn insert_table(&self, table: Table) {
        self.tables.write().await.insert(table.name.clone(), table);
    }

    pub async fn table_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.tables.read().await.keys().cloned().collect();
        names.sort();
        names
    }
}
