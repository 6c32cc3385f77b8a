//! Schema model types.
//!
//! These types describe the tables found in one DDL text: per table the
//! column definitions in declaration order, plus any raw `ALTER TABLE`
//! lines that followed its `CREATE TABLE` block. Column definitions are kept
//! as raw type strings; they are only canonicalized at comparison time.

use serde::{Deserialize, Serialize};

/// A single column declaration: name plus its raw type definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column name (without backticks).
    pub name: String,
    /// Everything after the column name, e.g. `varchar(50) NOT NULL`.
    pub definition: String,
}

impl ColumnDefinition {
    /// Creates a new column definition.
    #[must_use]
    pub fn new(name: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition: definition.into(),
        }
    }
}

/// Everything known about one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Table name.
    pub name: String,
    /// Columns in declaration order. Names are unique.
    pub columns: Vec<ColumnDefinition>,
    /// Raw lines of the `ALTER TABLE` blocks that followed the table's
    /// `CREATE TABLE`, verbatim and without their header lines.
    pub trailing_alter_lines: Vec<String>,
}

impl TableDefinition {
    /// Creates an empty table definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            trailing_alter_lines: Vec::new(),
        }
    }

    /// Adds a column to the table.
    #[must_use]
    pub fn column(mut self, name: impl Into<String>, definition: impl Into<String>) -> Self {
        self.set_column(name, definition);
        self
    }

    /// Adds a trailing alter line.
    #[must_use]
    pub fn alter_line(mut self, line: impl Into<String>) -> Self {
        self.trailing_alter_lines.push(line.into());
        self
    }

    /// Declares a column. A name declared twice keeps its first position
    /// and takes the latest definition.
    pub fn set_column(&mut self, name: impl Into<String>, definition: impl Into<String>) {
        let name = name.into();
        let definition = definition.into();
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.definition = definition,
            None => self.columns.push(ColumnDefinition { name, definition }),
        }
    }

    /// Gets a column by name.
    #[must_use]
    pub fn get_column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Name of the last declared column, the anchor for `ADD ... AFTER`.
    #[must_use]
    pub fn last_column_name(&self) -> Option<&str> {
        self.columns.last().map(|c| c.name.as_str())
    }

    /// Returns column names in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}

/// All tables of one DDL text, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaModel {
    /// Tables. Names are unique.
    pub tables: Vec<TableDefinition>,
}

impl SchemaModel {
    /// Creates a new empty schema model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table to the model.
    #[must_use]
    pub fn table(mut self, table: TableDefinition) -> Self {
        self.insert_table(table);
        self
    }

    /// Inserts a table, replacing any same-named table in place.
    pub fn insert_table(&mut self, table: TableDefinition) {
        match self.tables.iter_mut().find(|t| t.name == table.name) {
            Some(existing) => *existing = table,
            None => self.tables.push(table),
        }
    }

    /// Gets a table by name.
    #[must_use]
    pub fn get_table(&self, name: &str) -> Option<&TableDefinition> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Gets a mutable table by name.
    pub fn get_table_mut(&mut self, name: &str) -> Option<&mut TableDefinition> {
        self.tables.iter_mut().find(|t| t.name == name)
    }

    /// Returns table names.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.name.as_str())
    }

    /// Returns `true` if the model holds no tables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
