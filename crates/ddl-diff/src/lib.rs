//! Additive MySQL schema migrations from two DDL dumps.
//!
//! `ddl-diff` reads the `CREATE TABLE` / `ALTER TABLE` text of an old and a
//! new schema dump and generates the statements that bring a database from
//! the old structure to the new one:
//!
//! - `CREATE TABLE` (plus the dump's trailing `ALTER TABLE` blocks) for new
//!   tables,
//! - `ALTER TABLE ... ADD ... AFTER` for new columns,
//! - `ALTER TABLE ... MODIFY` for changed columns.
//!
//! Nothing is ever dropped. Columns and tables only present in the old dump
//! are ignored, and ENUM columns are widened to the union of their old and
//! new values so rows holding a retired value stay valid.
//!
//! # Architecture
//!
//! - **Scanner** - Line-level state machine over dump text
//! - **Builder** - Folds scanner events into a [`SchemaModel`]
//! - **Normalize** - Whitespace-insensitive definition comparison
//! - **Enum merge** - Additive ENUM value unions
//! - **Differ** - Classifies every column and collects statements
//! - **Render** - MySQL statement text
//! - **Output** - The four artifact files
//!
//! # Example
//!
//! ```rust
//! use ddl_diff::prelude::*;
//!
//! let old = "CREATE TABLE `users` (\n  `id` INT,\n  `name` VARCHAR(50)\n) ENGINE=InnoDB;";
//! let new = "CREATE TABLE `users` (\n  `id` INT,\n  `name` VARCHAR(50),\n  `email` VARCHAR(100)\n) ENGINE=InnoDB;";
//!
//! let diff = diff_schemas(old, new)?;
//! assert_eq!(
//!     diff.add_statements,
//!     vec!["ALTER TABLE `users` ADD `email` VARCHAR(100) AFTER `name`;"]
//! );
//! # Ok::<(), DiffError>(())
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Diff input/old.sql against input/new.sql and write ./output/*
//! ddl-diff diff
//!
//! # Print the report without writing files
//! ddl-diff diff --old prod.sql --new dev.sql --dry-run
//!
//! # Show how a dump was parsed
//! ddl-diff model dev.sql --pretty
//! ```

pub mod builder;
pub mod differ;
pub mod enum_merge;
pub mod error;
pub mod normalize;
pub mod output;
pub mod render;
pub mod scanner;
pub mod schema;

pub use differ::{diff_models, diff_schemas};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::builder::parse_schema;
    pub use crate::differ::{ColumnChange, SchemaDiff, classify_column, diff_models, diff_schemas};
    pub use crate::enum_merge::{EnumDefinition, EnumMerge, merge_enum};
    pub use crate::error::{DiffError, Result};
    pub use crate::normalize::{definitions_equal, normalize_definition};
    pub use crate::output::OutputArtifacts;
    pub use crate::scanner::{LineScanner, ScanEvent, ScanState};
    pub use crate::schema::{ColumnDefinition, SchemaModel, TableDefinition};
}
