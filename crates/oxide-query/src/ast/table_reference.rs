//! FROM-clause table lists and joins.

use super::{Alias, Conditions, Expression};
use crate::identifier::Column;
use crate::value::Value;

/// Join flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    /// INNER JOIN.
    Inner,
    /// LEFT JOIN.
    Left,
    /// RIGHT JOIN.
    Right,
    /// FULL JOIN.
    Full,
    /// CROSS JOIN.
    Cross,
}

impl JoinType {
    /// Returns the SQL keyword(s).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
            Self::Cross => "CROSS JOIN",
        }
    }
}

/// Comma- and JOIN-separated tables with `ON` / `USING` constraints.
///
/// ```rust
/// use oxide_query::compiler::compile;
/// use oxide_query::dialect::GenericDialect;
/// use oxide_query::{Column, Conditions, JoinType, Table, TableReference, Value};
///
/// let from = TableReference::aliased(Table::new("users"), "u")
///     .join_as(JoinType::Left, Table::new("orders"), "o")
///     .on(Conditions::predicate(Column::new("u.id"), "=", Column::new("o.user_id")));
///
/// assert_eq!(
///     compile(&Value::from(from), &GenericDialect).unwrap(),
///     r#""users" AS "u" LEFT JOIN "orders" AS "o" ON "u"."id" = "o"."user_id""#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableReference {
    expr: Expression,
}

impl TableReference {
    /// Starts with a single table.
    #[must_use]
    pub fn new(table: impl Into<Value>) -> Self {
        Self {
            expr: Expression::new("?").bind(table),
        }
    }

    /// Starts with an aliased table.
    #[must_use]
    pub fn aliased(table: impl Into<Value>, alias: &str) -> Self {
        Self::new(Alias::new(table, alias))
    }

    /// Adds another table separated by a comma.
    #[must_use]
    pub fn add(mut self, table: impl Into<Value>) -> Self {
        self.expr.push_template(", ?");
        self.expr.push_positional(table.into());
        self
    }

    /// Adds another aliased table separated by a comma.
    #[must_use]
    pub fn add_as(self, table: impl Into<Value>, alias: &str) -> Self {
        self.add(Alias::new(table, alias))
    }

    /// Joins a table.
    #[must_use]
    pub fn join(mut self, join: JoinType, table: impl Into<Value>) -> Self {
        self.expr.push_template(&format!(" {} ?", join.as_str()));
        self.expr.push_positional(table.into());
        self
    }

    /// Joins an aliased table.
    #[must_use]
    pub fn join_as(self, join: JoinType, table: impl Into<Value>, alias: &str) -> Self {
        self.join(join, Alias::new(table, alias))
    }

    /// Constrains the last join with `ON`.
    #[must_use]
    pub fn on(mut self, conditions: Conditions) -> Self {
        self.expr.push_template(" ON ?");
        self.expr.push_positional(conditions.into());
        self
    }

    /// Constrains the last join with `USING (...)`.
    #[must_use]
    pub fn using(mut self, columns: &[&str]) -> Self {
        self.expr.push_template(" USING (?)");
        self.expr
            .push_positional(Value::sequence(columns.iter().map(|c| Column::new(c))));
        self
    }

    /// Converts into an expression.
    #[must_use]
    pub fn into_expression(self) -> Expression {
        self.expr
    }
}

impl From<TableReference> for Expression {
    fn from(reference: TableReference) -> Self {
        reference.into_expression()
    }
}

impl From<TableReference> for Value {
    fn from(reference: TableReference) -> Self {
        Self::from(reference.into_expression())
    }
}
