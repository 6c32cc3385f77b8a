#![allow(dead_code)]

use ddl_diff::prelude::*;

/// Wraps column lines into a dump-style `CREATE TABLE` block.
pub fn create_table(name: &str, columns: &[&str]) -> String {
    let body = columns
        .iter()
        .map(|c| format!("  {c}"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("CREATE TABLE `{name}` (\n{body}\n) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;\n")
}

pub fn diff(old: &str, new: &str) -> SchemaDiff {
    diff_schemas(old, new).unwrap_or_else(|e| panic!("Diff failed: {e}"))
}

pub fn diff_err(old: &str, new: &str) -> DiffError {
    diff_schemas(old, new).expect_err("Expected diff to fail")
}
