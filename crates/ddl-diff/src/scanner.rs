//! Line scanner for MySQL dump DDL.
//!
//! The scanner does not tokenize SQL. It classifies whole lines of a dump
//! in the layout written by `mysqldump`/phpMyAdmin:
//!
//! ```text
//! CREATE TABLE `users` (
//!   `id` int(11) NOT NULL,
//!   `name` varchar(50) DEFAULT NULL
//! ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;
//!
//! ALTER TABLE `users`
//!   ADD PRIMARY KEY (`id`);
//! ```
//!
//! Scanning is a state machine over [`ScanState`]; the table a line belongs
//! to is carried inside the state, so a line can never be attributed to
//! both a CREATE body and an ALTER block.

const CREATE_TABLE: &str = "CREATE TABLE ";
const ALTER_TABLE: &str = "ALTER TABLE";
const CREATE_BODY_END: &str = ") ENGINE";

/// Where the scanner currently is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScanState {
    /// Outside any recognised block.
    #[default]
    Idle,
    /// Between `CREATE TABLE` and `) ENGINE`.
    InCreateBody {
        /// Table being declared.
        table: String,
    },
    /// Inside an `ALTER TABLE` block, until a line ending in `;`.
    InAlterBody {
        /// Table being altered.
        table: String,
    },
}

/// What a single line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent<'a> {
    /// A `CREATE TABLE` header; the table's previous definition is reset.
    CreateTable {
        /// Table name.
        table: String,
    },
    /// The `) ENGINE` line closing a CREATE body.
    CreateClosed,
    /// An `ALTER TABLE` header opening a block.
    AlterOpened {
        /// Table name.
        table: String,
    },
    /// A column declaration inside a CREATE body.
    Column {
        /// Owning table.
        table: String,
        /// Column name.
        name: &'a str,
        /// Raw definition, trimmed and without its trailing comma.
        definition: &'a str,
    },
    /// A raw line inside an ALTER block, kept verbatim.
    AlterLine {
        /// Owning table.
        table: String,
        /// The untouched line.
        line: &'a str,
    },
    /// A line matching none of the rules.
    Ignored,
}

/// Classifies DDL lines one at a time.
#[derive(Debug, Default)]
pub struct LineScanner {
    state: ScanState,
}

impl LineScanner {
    /// Creates a scanner in the [`ScanState::Idle`] state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &ScanState {
        &self.state
    }

    /// Classifies `line` and advances the state machine.
    pub fn scan_line<'a>(&mut self, line: &'a str) -> ScanEvent<'a> {
        if line.contains(CREATE_TABLE) {
            return match quoted_identifier(line) {
                Some(table) => {
                    self.state = ScanState::InCreateBody {
                        table: table.to_string(),
                    };
                    ScanEvent::CreateTable {
                        table: table.to_string(),
                    }
                }
                None => {
                    self.state = ScanState::Idle;
                    ScanEvent::Ignored
                }
            };
        }

        if matches!(self.state, ScanState::InCreateBody { .. }) && line.contains(CREATE_BODY_END) {
            self.state = ScanState::Idle;
            return ScanEvent::CreateClosed;
        }

        if line.contains(ALTER_TABLE) {
            let Some(table) = quoted_identifier(line) else {
                return ScanEvent::Ignored;
            };
            self.state = ScanState::InAlterBody {
                table: table.to_string(),
            };
            return ScanEvent::AlterOpened {
                table: table.to_string(),
            };
        }

        match &self.state {
            ScanState::InAlterBody { table } => {
                let event = ScanEvent::AlterLine {
                    table: table.clone(),
                    line,
                };
                if line.trim().ends_with(';') {
                    self.state = ScanState::Idle;
                }
                event
            }
            ScanState::InCreateBody { table } if line.contains('`') => {
                match parse_column_line(line) {
                    Some((name, definition)) => ScanEvent::Column {
                        table: table.clone(),
                        name,
                        definition,
                    },
                    None => ScanEvent::Ignored,
                }
            }
            _ => ScanEvent::Ignored,
        }
    }
}

/// Returns the first backtick-quoted identifier on the line.
fn quoted_identifier(line: &str) -> Option<&str> {
    line.split('`').nth(1)
}

/// Splits a column declaration into its name and definition.
///
/// The name is the first backtick-delimited token; the definition is
/// everything after the second backtick.
fn parse_column_line(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.splitn(3, '`');
    parts.next()?;
    let name = parts.next()?;
    let rest = parts.next().unwrap_or_default().trim();
    let definition = rest.strip_suffix(',').unwrap_or(rest);
    Some((name, definition))
}
