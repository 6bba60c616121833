//! Configurable dialect loaded per connection.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::{
    Dialect, GenericDialect, MysqlDialect, PostgresDialect, SqlServerDialect, SqliteDialect,
};
use crate::error::QueryError;

/// The engine a connection talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    /// ANSI SQL.
    #[default]
    Generic,
    /// MySQL / MariaDB.
    Mysql,
    /// PostgreSQL.
    Postgres,
    /// SQLite.
    Sqlite,
    /// Microsoft SQL Server.
    Sqlserver,
}

impl DialectKind {
    fn builtin(self) -> &'static dyn Dialect {
        match self {
            Self::Generic => &GenericDialect,
            Self::Mysql => &MysqlDialect,
            Self::Postgres => &PostgresDialect,
            Self::Sqlite => &SqliteDialect,
            Self::Sqlserver => &SqlServerDialect,
        }
    }
}

impl FromStr for DialectKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "generic" | "ansi" => Ok(Self::Generic),
            "mysql" | "mariadb" => Ok(Self::Mysql),
            "postgres" | "postgresql" | "pgsql" => Ok(Self::Postgres),
            "sqlite" => Ok(Self::Sqlite),
            "sqlserver" | "mssql" | "sqlsrv" => Ok(Self::Sqlserver),
            _ => Err(QueryError::UnknownDialect(String::from(s))),
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.builtin().name())
    }
}

/// An explicit identifier quote-character pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct QuotePair {
    /// Opening quote.
    pub left: char,
    /// Closing quote.
    pub right: char,
}

/// Per-connection dialect settings.
///
/// ```rust
/// use oxide_query::dialect::{Dialect, DialectConfig, DialectKind};
///
/// let config = DialectConfig::new(DialectKind::Mysql).with_prefix("app_");
/// assert_eq!(config.quote_identifier("users"), "`users`");
/// assert_eq!(config.table_prefix(), "app_");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DialectConfig {
    /// The engine, which decides escaping and native placeholders.
    #[serde(default)]
    pub kind: DialectKind,
    /// Prefix injected into quoted table names.
    #[serde(default)]
    pub table_prefix: String,
    /// Overrides the engine's quote characters.
    #[serde(default)]
    pub quote: Option<QuotePair>,
}

impl DialectConfig {
    /// Creates a configuration for `kind` with no prefix.
    #[must_use]
    pub const fn new(kind: DialectKind) -> Self {
        Self {
            kind,
            table_prefix: String::new(),
            quote: None,
        }
    }

    /// Sets the table prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_prefix = prefix.into();
        self
    }

    /// Overrides the quote characters.
    #[must_use]
    pub const fn quote(mut self, left: char, right: char) -> Self {
        self.quote = Some(QuotePair { left, right });
        self
    }
}

impl Dialect for DialectConfig {
    fn name(&self) -> &'static str {
        self.kind.builtin().name()
    }

    fn quote_left(&self) -> char {
        self.quote
            .map_or_else(|| self.kind.builtin().quote_left(), |q| q.left)
    }

    fn quote_right(&self) -> char {
        self.quote
            .map_or_else(|| self.kind.builtin().quote_right(), |q| q.right)
    }

    fn table_prefix(&self) -> &str {
        &self.table_prefix
    }

    fn escape_text(&self, text: &str) -> String {
        self.kind.builtin().escape_text(text)
    }

    fn native_placeholder(&self, position: usize) -> String {
        self.kind.builtin().native_placeholder(position)
    }
}
