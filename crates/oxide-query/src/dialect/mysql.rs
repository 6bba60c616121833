//! MySQL / MariaDB dialect.

use super::Dialect;

/// MySQL dialect: backtick quoting, backslash-aware literal escaping.
#[derive(Debug, Default, Clone, Copy)]
pub struct MysqlDialect;

impl MysqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MysqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn quote_left(&self) -> char {
        '`'
    }

    fn quote_right(&self) -> char {
        '`'
    }

    fn escape_text(&self, text: &str) -> String {
        // backslash is an escape character unless NO_BACKSLASH_ESCAPES is set
        text.replace('\\', "\\\\").replace('\'', "''")
    }
}
