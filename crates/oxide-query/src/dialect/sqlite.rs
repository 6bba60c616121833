//! SQLite dialect.

use super::Dialect;

/// SQLite dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn quote_left(&self) -> char {
        '"' // SQLite also accepts backticks, but double quotes are standard
    }

    fn quote_right(&self) -> char {
        '"'
    }
}
