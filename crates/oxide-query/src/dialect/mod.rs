//! SQL Dialect support.
//!
//! A dialect supplies the quote-character pair, the per-connection table
//! prefix, literal text escaping and the native placeholder syntax used by the
//! flattener. Built-in dialects carry no prefix; wrap one with
//! [`Dialect::with_table_prefix`] or use a [`DialectConfig`] loaded from
//! configuration.

mod config;
mod generic;
mod mysql;
mod postgres;
mod prefixed;
mod sqlite;
mod sqlserver;

pub use config::{DialectConfig, DialectKind, QuotePair};
pub use generic::GenericDialect;
pub use mysql::MysqlDialect;
pub use postgres::PostgresDialect;
pub use prefixed::Prefixed;
pub use sqlite::SqliteDialect;
pub use sqlserver::SqlServerDialect;

/// Trait for SQL dialect-specific rendering.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the opening identifier quote character.
    fn quote_left(&self) -> char {
        '"'
    }

    /// Returns the closing identifier quote character.
    fn quote_right(&self) -> char {
        '"'
    }

    /// Returns the prefix injected into every quoted table name.
    fn table_prefix(&self) -> &str {
        ""
    }

    /// Escapes the body of a single-quoted text literal.
    fn escape_text(&self, text: &str) -> String {
        text.replace('\'', "''")
    }

    /// Returns the native placeholder for the 1-based bind position.
    fn native_placeholder(&self, _position: usize) -> String {
        String::from("?")
    }

    /// Quotes a single name segment, doubling any embedded closing quote.
    fn quote_identifier(&self, name: &str) -> String {
        let left = self.quote_left();
        let right = self.quote_right();
        let mut quoted = String::with_capacity(name.len() + 2);
        quoted.push(left);
        for c in name.chars() {
            if c == right {
                quoted.push(right);
            }
            quoted.push(c);
        }
        quoted.push(right);
        quoted
    }

    /// Wraps this dialect with a table prefix.
    fn with_table_prefix(self, prefix: impl Into<String>) -> Prefixed<Self>
    where
        Self: Sized,
    {
        Prefixed::new(self, prefix)
    }
}

impl<D: Dialect + ?Sized> Dialect for &D {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn quote_left(&self) -> char {
        (**self).quote_left()
    }

    fn quote_right(&self) -> char {
        (**self).quote_right()
    }

    fn table_prefix(&self) -> &str {
        (**self).table_prefix()
    }

    fn escape_text(&self, text: &str) -> String {
        (**self).escape_text(text)
    }

    fn native_placeholder(&self, position: usize) -> String {
        (**self).native_placeholder(position)
    }

    fn quote_identifier(&self, name: &str) -> String {
        (**self).quote_identifier(name)
    }
}
