//! Schema diff engine.
//!
//! Compares an "old" (deployed) and "new" (desired) [`SchemaModel`] and
//! produces the statements that migrate old to new. The migration is
//! additive only:
//!
//! - tables missing from the old schema are created whole,
//! - columns missing from the old table are added after the old table's
//!   last column,
//! - changed columns are modified, ENUMs by appending values,
//! - nothing is ever dropped: tables, columns and ENUM values that exist
//!   only in the old schema are left alone.

use tracing::debug;

use crate::enum_merge::{is_enum, merge_enum};
use crate::error::Result;
use crate::normalize::{definitions_equal, normalize_definition};
use crate::render::{
    render_add_column, render_create_table, render_debug_entry, render_enum_modify,
    render_modify_column,
};
use crate::schema::{ColumnDefinition, SchemaModel, TableDefinition};

/// Classification of one column of an existing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnChange {
    /// Same definition on both sides, or an ENUM with nothing to add.
    Unchanged,
    /// The column is new to the table.
    Added {
        /// Column name.
        column: String,
        /// Raw definition from the new schema.
        definition: String,
        /// Last column of the old table, if it has any.
        after: Option<String>,
    },
    /// The column exists on both sides with different definitions.
    Modified {
        /// Column name.
        column: String,
        /// The rendered `MODIFY` statement.
        statement: String,
        /// Before/after report entry.
        debug: String,
    },
}

/// Result of comparing two schema models.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDiff {
    /// `ALTER TABLE ... ADD` statements for new columns.
    pub add_statements: Vec<String>,
    /// `ALTER TABLE ... MODIFY` statements for changed columns.
    pub modify_statements: Vec<String>,
    /// One `CREATE TABLE` group per new table.
    pub create_statements: Vec<String>,
    /// One before/after entry per modified column.
    pub debug_entries: Vec<String>,
}

impl SchemaDiff {
    /// Returns `true` if no statement of any kind was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.add_statements.is_empty()
            && self.modify_statements.is_empty()
            && self.create_statements.is_empty()
    }

    /// Returns the combined ADD/MODIFY report.
    ///
    /// CREATE statements are not part of the report.
    #[must_use]
    pub fn report(&self) -> String {
        let mut lines: Vec<&str> = vec!["", "--- ALTER STATEMENTS ---"];
        lines.extend(self.add_statements.iter().map(String::as_str));
        lines.push("");
        lines.push("--- MODIFY STATEMENTS ---");
        lines.extend(self.modify_statements.iter().map(String::as_str));
        lines.push("");
        lines.join("\n")
    }
}

/// Parses two DDL texts and diffs them.
///
/// # Errors
///
/// Returns [`DiffError::EnumParse`](crate::error::DiffError::EnumParse) if a
/// changed ENUM column cannot be parsed; no partial result is returned.
pub fn diff_schemas(old_ddl: &str, new_ddl: &str) -> Result<SchemaDiff> {
    let old = SchemaModel::parse(old_ddl);
    let new = SchemaModel::parse(new_ddl);
    diff_models(&old, &new)
}

/// Compares two models and returns the statements migrating `old` to `new`.
///
/// # Errors
///
/// Returns [`DiffError::EnumParse`](crate::error::DiffError::EnumParse) on
/// the first changed ENUM column that cannot be parsed.
pub fn diff_models(old: &SchemaModel, new: &SchemaModel) -> Result<SchemaDiff> {
    let mut diff = SchemaDiff::default();

    for new_table in &new.tables {
        let Some(old_table) = old.get_table(&new_table.name) else {
            debug!(table = %new_table.name, "new table");
            diff.create_statements.push(render_create_table(new_table));
            continue;
        };

        for column in &new_table.columns {
            match classify_column(old_table, column)? {
                ColumnChange::Unchanged => {}
                ColumnChange::Added {
                    column,
                    definition,
                    after,
                } => {
                    debug!(table = %new_table.name, column = %column, "new column");
                    diff.add_statements.push(render_add_column(
                        &new_table.name,
                        &column,
                        &definition,
                        after.as_deref(),
                    ));
                }
                ColumnChange::Modified {
                    column,
                    statement,
                    debug,
                } => {
                    debug!(table = %new_table.name, column = %column, "modified column");
                    diff.modify_statements.push(statement);
                    diff.debug_entries.push(debug);
                }
            }
        }
    }

    Ok(diff)
}

/// Classifies one column of the new schema against the old table.
///
/// # Errors
///
/// Returns [`DiffError::EnumParse`](crate::error::DiffError::EnumParse) if
/// both sides are differing ENUMs and either cannot be parsed.
pub fn classify_column(old_table: &TableDefinition, new: &ColumnDefinition) -> Result<ColumnChange> {
    let table = old_table.name.as_str();

    let Some(old) = old_table.get_column(&new.name) else {
        return Ok(ColumnChange::Added {
            column: new.name.clone(),
            definition: new.definition.clone(),
            after: old_table.last_column_name().map(str::to_string),
        });
    };

    if definitions_equal(&old.definition, &new.definition) {
        return Ok(ColumnChange::Unchanged);
    }

    let old_normalized = normalize_definition(&old.definition);
    let new_normalized = normalize_definition(&new.definition);

    let statement = if is_enum(&old_normalized) && is_enum(&new_normalized) {
        match merge_enum(table, &new.name, &old_normalized, &new_normalized)? {
            Some(merge) => render_enum_modify(table, &new.name, &merge),
            None => return Ok(ColumnChange::Unchanged),
        }
    } else {
        render_modify_column(table, &new.name, &new.definition)
    };

    let debug = render_debug_entry(table, &new.name, &old_normalized, &new_normalized, &statement);
    Ok(ColumnChange::Modified {
        column: new.name.clone(),
        statement,
        debug,
    })
}
