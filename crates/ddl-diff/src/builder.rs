//! Builds a [`SchemaModel`] from a complete DDL text.
//!
//! The builder drives the [`LineScanner`] over every line and folds its
//! events into table definitions, merging the CREATE and ALTER sections of
//! the same table.

use tracing::{debug, trace};

use crate::scanner::{LineScanner, ScanEvent};
use crate::schema::{SchemaModel, TableDefinition};

/// Parses a full schema dump into a model.
///
/// Parsing never fails: unrecognised lines are skipped and a table without
/// parsable columns simply has none.
#[must_use]
pub fn parse_schema(ddl: &str) -> SchemaModel {
    let mut model = SchemaModel::new();
    let mut scanner = LineScanner::new();

    for line in ddl.lines() {
        match scanner.scan_line(line) {
            ScanEvent::CreateTable { table } => {
                trace!(table = %table, "create table");
                model.insert_table(TableDefinition::new(table));
            }
            ScanEvent::Column {
                table,
                name,
                definition,
            } => {
                if let Some(t) = model.get_table_mut(&table) {
                    t.set_column(name, definition);
                }
            }
            ScanEvent::AlterLine { table, line } => match model.get_table_mut(&table) {
                Some(t) => t.trailing_alter_lines.push(line.to_string()),
                None => debug!(table = %table, "dropping alter line for undeclared table"),
            },
            ScanEvent::AlterOpened { .. } | ScanEvent::CreateClosed | ScanEvent::Ignored => {}
        }
    }

    debug!(tables = model.tables.len(), "parsed schema");
    model
}

impl SchemaModel {
    /// Parses a full schema dump. See [`parse_schema`].
    #[must_use]
    pub fn parse(ddl: &str) -> Self {
        parse_schema(ddl)
    }
}
