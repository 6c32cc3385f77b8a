//! MySQL statement rendering.
//!
//! Every identifier is backtick-quoted; column definitions are emitted as
//! written in the dump they came from.

use crate::enum_merge::EnumMerge;
use crate::schema::TableDefinition;

/// Quotes an identifier with backticks.
#[must_use]
pub fn quote_identifier(name: &str) -> String {
    format!("`{name}`")
}

/// Renders `ALTER TABLE ... ADD ...`, positioned after `after` when the
/// existing table has a column to anchor to.
#[must_use]
pub fn render_add_column(
    table: &str,
    column: &str,
    definition: &str,
    after: Option<&str>,
) -> String {
    let mut sql = format!(
        "ALTER TABLE {} ADD {} {}",
        quote_identifier(table),
        quote_identifier(column),
        definition
    );
    if let Some(after) = after {
        sql.push_str(" AFTER ");
        sql.push_str(&quote_identifier(after));
    }
    sql.push(';');
    sql
}

/// Renders `ALTER TABLE ... MODIFY ...` with a raw definition.
#[must_use]
pub fn render_modify_column(table: &str, column: &str, definition: &str) -> String {
    format!(
        "ALTER TABLE {} MODIFY {} {};",
        quote_identifier(table),
        quote_identifier(column),
        definition
    )
}

/// Renders the MODIFY statement for a merged ENUM.
#[must_use]
pub fn render_enum_modify(table: &str, column: &str, merge: &EnumMerge<'_>) -> String {
    let definition = format!("ENUM({}){}", merge.value_list(), merge.modifiers);
    render_modify_column(table, column, &definition)
}

/// Renders the statement group for a table that does not exist yet.
///
/// The group starts with an empty line, followed by the `CREATE TABLE` and,
/// when the dump had any, the replayed `ALTER TABLE` blocks. Captured lines
/// after a `;`-terminated line get a fresh `ALTER TABLE` header.
#[must_use]
pub fn render_create_table(table: &TableDefinition) -> String {
    let name = quote_identifier(&table.name);
    let columns = table
        .columns
        .iter()
        .map(|c| format!("  {} {}", quote_identifier(&c.name), c.definition))
        .collect::<Vec<_>>()
        .join(",\n");

    let mut parts = vec![String::new(), format!("CREATE TABLE {name} (\n{columns}\n);")];

    if !table.trailing_alter_lines.is_empty() {
        let mut alter = String::new();
        let mut block_open = false;
        for line in &table.trailing_alter_lines {
            if !block_open {
                alter.push_str("ALTER TABLE ");
                alter.push_str(&name);
                alter.push('\n');
                block_open = true;
            }
            alter.push_str(line);
            alter.push('\n');
            if line.trim().ends_with(';') {
                block_open = false;
            }
        }
        parts.push(alter);
    }

    parts.join("\n")
}

/// Renders the before/after report entry of a modified column.
///
/// `old` and `new` are the normalized definitions; they are reported in
/// lowercase. An `ENUM` fragment of the statement is echoed on a
/// `MODIFY:` line.
#[must_use]
pub fn render_debug_entry(table: &str, column: &str, old: &str, new: &str, statement: &str) -> String {
    let mut entry = format!(
        "=== {table} -> {column} ===\nBEFORE: {}\nAFTER:  {}\n",
        old.to_lowercase(),
        new.to_lowercase()
    );
    if let Some(fragment) = statement.split("ENUM").nth(1).filter(|f| !f.is_empty()) {
        entry.push_str("MODIFY: ENUM");
        entry.push_str(fragment);
        entry.push('\n');
    }
    entry
}
