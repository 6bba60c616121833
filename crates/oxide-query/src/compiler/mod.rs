//! Dialect rendering and parameter flattening.
//!
//! [`compile`] inlines every parameter as quoted SQL text. [`flatten`] keeps
//! literals out of the text and returns them as a flat bind list next to a
//! template that uses only the dialect's native placeholders.
//!
//! ```rust
//! use oxide_query::compiler::{compile, flatten};
//! use oxide_query::dialect::{Dialect, GenericDialect};
//! use oxide_query::{Column, Conditions, Select, SqlValue, Table, Value};
//!
//! let select = Select::new()
//!     .from(Table::new("orders"))
//!     .where_clause(Conditions::predicate(Column::new("status"), "=", "open"));
//! let node = Value::from(select);
//! let dialect = GenericDialect.with_table_prefix("shop_");
//!
//! assert_eq!(
//!     compile(&node, &dialect).unwrap(),
//!     r#"SELECT * FROM "shop_orders" WHERE "status" = 'open'"#
//! );
//!
//! let (sql, params) = flatten(&node, &dialect).unwrap();
//! assert_eq!(sql, r#"SELECT * FROM "shop_orders" WHERE "status" = ?"#);
//! assert_eq!(params, vec![SqlValue::Text(String::from("open"))]);
//! ```

mod flatten;
pub(crate) mod placeholder;

pub use flatten::Flattener;

use std::fmt::Write;

use tracing::debug;

use crate::ast::Expression;
use crate::dialect::Dialect;
use crate::error::{QueryError, Result};
use crate::identifier::{Column, Identifier, Namespace, Table};
use crate::value::{SqlValue, Value};

/// Renders a node to SQL text for `dialect`.
pub fn compile<D: Dialect + ?Sized>(node: &Value, dialect: &D) -> Result<String> {
    let sql = Compiler::new(dialect).compile(node)?;
    debug!(dialect = dialect.name(), len = sql.len(), "compiled statement");
    Ok(sql)
}

/// Rewrites a node into a native-placeholder template and its bind list.
pub fn flatten<D: Dialect + ?Sized>(node: &Value, dialect: &D) -> Result<(String, Vec<SqlValue>)> {
    Flattener::new(dialect).flatten(node)
}

/// Renders AST nodes with a dialect's quoting rules.
#[derive(Debug)]
pub struct Compiler<'d, D: ?Sized> {
    dialect: &'d D,
}

impl<D: ?Sized> Clone for Compiler<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: ?Sized> Copy for Compiler<'_, D> {}

impl<'d, D: Dialect + ?Sized> Compiler<'d, D> {
    /// Creates a compiler for `dialect`.
    #[must_use]
    pub const fn new(dialect: &'d D) -> Self {
        Self { dialect }
    }

    /// Returns the dialect.
    #[must_use]
    pub const fn dialect(&self) -> &'d D {
        self.dialect
    }

    /// Compiles any node.
    pub fn compile(&self, node: &Value) -> Result<String> {
        match node {
            Value::Literal(value) => self.quote_literal(value),
            Value::Identifier(ident) => Ok(self.quote_identifier(ident)),
            Value::Column(column) => Ok(self.quote_column(column)),
            Value::Table(table) => Ok(self.quote_table(table)),
            Value::Expression(expr) => self.quote_expression(expr),
            Value::Sequence(items) => {
                let mut parts = Vec::with_capacity(items.len());
                for item in items {
                    let part = self.compile(item)?;
                    if !part.is_empty() {
                        parts.push(part);
                    }
                }
                Ok(parts.join(", "))
            }
        }
    }

    /// Inlines each parameter of `expr` at its placeholder.
    ///
    /// An expression without parameters is returned verbatim.
    pub fn quote_expression(&self, expr: &Expression) -> Result<String> {
        if !expr.has_parameters() {
            return Ok(String::from(expr.template()));
        }
        placeholder::walk(expr, |value, out| {
            out.push_str(&self.compile(value)?);
            Ok(())
        })
    }

    /// Quotes a generic identifier. Never prefixed.
    #[must_use]
    pub fn quote_identifier(&self, ident: &Identifier) -> String {
        let mut quoted = self.quote_namespace(ident.namespace());
        quoted.push_str(&self.dialect.quote_identifier(ident.name()));
        quoted
    }

    /// Quotes a column; a bare `*` passes through unquoted.
    #[must_use]
    pub fn quote_column(&self, column: &Column) -> String {
        let mut quoted = self.quote_namespace(column.namespace());
        if column.name() == "*" {
            quoted.push('*');
        } else {
            quoted.push_str(&self.dialect.quote_identifier(column.name()));
        }
        quoted
    }

    /// Quotes a table, injecting the table prefix inside the opening quote.
    #[must_use]
    pub fn quote_table(&self, table: &Table) -> String {
        let mut quoted = self.quote_namespace(table.namespace());
        let prefixed = format!("{}{}", self.dialect.table_prefix(), table.name());
        quoted.push_str(&self.dialect.quote_identifier(&prefixed));
        quoted
    }

    fn quote_namespace(&self, namespace: &Namespace) -> String {
        let mut quoted = match namespace {
            Namespace::None => return String::new(),
            Namespace::Segments(segments) => segments
                .iter()
                .map(|s| self.dialect.quote_identifier(s))
                .collect::<Vec<_>>()
                .join("."),
            Namespace::Identifier(ident) => self.quote_identifier(ident),
            Namespace::Table(table) => self.quote_table(table),
        };
        quoted.push('.');
        quoted
    }

    /// Renders a literal with escaping.
    pub fn quote_literal(&self, value: &SqlValue) -> Result<String> {
        match value {
            SqlValue::Null => Ok(String::from("NULL")),
            SqlValue::Bool(true) => Ok(String::from("'1'")),
            SqlValue::Bool(false) => Ok(String::from("'0'")),
            SqlValue::Int(n) => Ok(n.to_string()),
            SqlValue::Float(f) if !f.is_finite() => Err(QueryError::NonFiniteFloat(*f)),
            // Display for f64 never switches to exponent notation
            SqlValue::Float(f) => Ok(f.to_string()),
            SqlValue::Text(s) => Ok(format!("'{}'", self.dialect.escape_text(s))),
            SqlValue::Blob(bytes) => {
                let mut hex = String::with_capacity(bytes.len() * 2 + 3);
                hex.push_str("X'");
                for byte in bytes {
                    let _ = write!(hex, "{byte:02X}");
                }
                hex.push('\'');
                Ok(hex)
            }
        }
    }

    /// Renders literals as a parenthesized, comma-joined list.
    pub fn quote_list(&self, values: &[SqlValue]) -> Result<String> {
        let quoted = values
            .iter()
            .map(|v| self.quote_literal(v))
            .collect::<Result<Vec<_>>>()?;
        Ok(format!("({})", quoted.join(", ")))
    }
}
