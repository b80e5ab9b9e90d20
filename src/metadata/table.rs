use super::*;

#[derive(Debug, Default)]
pub struct Table {
    pub name: String,
    pub columns: Data<Column>,
    // Column order as declared; the map alone loses it.
    pub column_order: Vec<String>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Construct a table from `(name, type)` pairs, keeping their order.
    pub fn with_columns<N: Into<String>, T: Into<DataType>>(
        name: impl Into<String>,
        columns: impl IntoIterator<Item = (N, T)>,
    ) -> Self {
        let mut map = HashMap::new();
        let mut order = Vec::new();
        for (column, data_type) in columns {
            let column = Column::new(column, data_type);
            order.push(column.name.clone());
            map.insert(column.name.clone(), column);
        }
        Self {
            name: name.into(),
            columns: Data::new(map),
            column_order: order,
        }
    }

    /// Insert (or overwrite) a column. New columns go last.
    pub async fn insert_column(&mut self, column: Column) {
        if !self.column_order.contains(&column.name) {
            self.column_order.push(column.name.clone());
        }
        self.columns.write().await.insert(column.name.clone(), column);
    }

    /// Columns in declaration order.
    pub async fn ordered_columns(&self) -> Vec<Column> {
        let guard = self.columns.read().await;
        self.column_order
            .iter()
            .filter_map(|n| guard.get(n).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn keeps_declaration_order() {
        let mut table = Table::with_columns("student", [("id", "int"), ("name", "varchar(32)")]);
        table.insert_column(Column::new("age", "tinyint")).await;
        table.insert_column(Column::new("id", "bigint")).await;

        let columns = table.ordered_columns().await;
        let names: Vec<_> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["id", "name", "age"]);
        assert_eq!(columns[0].data_type, DataType::BigInt(None));
    }
}
