//! Output artifacts of a diff run.
//!
//! A finished [`SchemaDiff`] maps onto four text files. Nothing here runs
//! until the diff has completed, so a failed diff never leaves partial
//! artifacts behind.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::differ::SchemaDiff;
use crate::error::{DiffError, Result};

/// File receiving the `ADD` statements.
pub const ADD_FILE: &str = "alter_statements.sql";
/// File receiving the `CREATE TABLE` groups.
pub const CREATE_FILE: &str = "create_statements.sql";
/// File receiving the `MODIFY` statements.
pub const MODIFY_FILE: &str = "modify_statements.sql";
/// File receiving the before/after report.
pub const DEBUG_FILE: &str = "modify_statements_debug.txt";

/// The contents of the four output files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifacts {
    /// `ADD` statements, one per line.
    pub add: String,
    /// `CREATE TABLE` groups.
    pub create: String,
    /// `MODIFY` statements, one per line.
    pub modify: String,
    /// Before/after entries.
    pub debug: String,
}

impl From<&SchemaDiff> for OutputArtifacts {
    fn from(diff: &SchemaDiff) -> Self {
        Self {
            add: diff.add_statements.join("\n"),
            create: diff.create_statements.join("\n"),
            modify: diff.modify_statements.join("\n"),
            debug: diff.debug_entries.join("\n"),
        }
    }
}

impl OutputArtifacts {
    /// Returns `(file name, contents)` for every artifact.
    #[must_use]
    pub fn files(&self) -> [(&'static str, &str); 4] {
        [
            (ADD_FILE, self.add.as_str()),
            (CREATE_FILE, self.create.as_str()),
            (MODIFY_FILE, self.modify.as_str()),
            (DEBUG_FILE, self.debug.as_str()),
        ]
    }

    /// Writes every artifact into `dir`, creating it if needed, and returns
    /// the written paths.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::Io`] if the directory or a file cannot be
    /// written.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir).map_err(|e| DiffError::io(dir, e))?;

        let mut written = Vec::with_capacity(4);
        for (name, contents) in self.files() {
            let path = dir.join(name);
            fs::write(&path, contents).map_err(|e| DiffError::io(&path, e))?;
            info!("Wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}
