//! SELECT statement builder.

use super::{OrderDirection, Slots, count_value, order_item};
use crate::ast::{Alias, Conditions, Expression};
use crate::identifier::Column;
use crate::value::Value;

/// A SELECT statement.
///
/// Clause order: `SELECT [DISTINCT] columns [FROM table] [WHERE where]
/// [GROUP BY groupby] [HAVING having] [ORDER BY orderby] [LIMIT limit]
/// [OFFSET offset]`. With no columns the list renders as `*`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    distinct: bool,
    columns: Vec<Value>,
    table: Option<Value>,
    where_clause: Option<Conditions>,
    group_by: Vec<Value>,
    having: Option<Conditions>,
    order_by: Vec<Value>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl Select {
    /// Creates a new SELECT builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets DISTINCT.
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Adds column names (dotted names are qualified).
    #[must_use]
    pub fn columns(mut self, cols: &[&str]) -> Self {
        self.columns
            .extend(cols.iter().map(|name| Value::from(Column::new(name))));
        self
    }

    /// Adds any value to the column list.
    #[must_use]
    pub fn column(mut self, value: impl Into<Value>) -> Self {
        self.columns.push(value.into());
        self
    }

    /// Adds an aliased value to the column list.
    #[must_use]
    pub fn column_as(self, value: impl Into<Value>, alias: &str) -> Self {
        self.column(Alias::new(value, alias))
    }

    /// Specifies the table, table reference or subquery to select from.
    #[must_use]
    pub fn from(mut self, table: impl Into<Value>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Sets the WHERE clause. An empty chain is skipped.
    #[must_use]
    pub fn where_clause(mut self, conditions: Conditions) -> Self {
        self.where_clause = Some(conditions);
        self
    }

    /// Adds GROUP BY columns.
    #[must_use]
    pub fn group_by(mut self, cols: &[&str]) -> Self {
        self.group_by
            .extend(cols.iter().map(|name| Value::from(Column::new(name))));
        self
    }

    /// Sets the HAVING clause.
    #[must_use]
    pub fn having(mut self, conditions: Conditions) -> Self {
        self.having = Some(conditions);
        self
    }

    /// Adds an ORDER BY item.
    #[must_use]
    pub fn order_by(mut self, value: impl Into<Value>, direction: OrderDirection) -> Self {
        self.order_by.push(order_item(value, direction));
        self
    }

    /// Adds a LIMIT clause.
    #[must_use]
    pub const fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Adds an OFFSET clause.
    #[must_use]
    pub const fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Assembles the statement template from the populated slots.
    #[must_use]
    pub fn into_expression(self) -> Expression {
        let mut slots = Slots::new("SELECT ");

        if self.distinct {
            slots.push("DISTINCT ");
        }

        if self.columns.is_empty() {
            slots.push("*");
        } else {
            slots.slot("", "columns", Value::Sequence(self.columns));
        }

        if let Some(table) = self.table {
            slots.slot(" FROM ", "table", table);
        }

        if let Some(conditions) = self.where_clause.filter(|c| !c.is_empty()) {
            slots.slot(" WHERE ", "where", conditions.into());
        }

        if !self.group_by.is_empty() {
            slots.slot(" GROUP BY ", "groupby", Value::Sequence(self.group_by));
        }

        if let Some(conditions) = self.having.filter(|c| !c.is_empty()) {
            slots.slot(" HAVING ", "having", conditions.into());
        }

        if !self.order_by.is_empty() {
            slots.slot(" ORDER BY ", "orderby", Value::Sequence(self.order_by));
        }

        if let Some(n) = self.limit {
            slots.slot(" LIMIT ", "limit", count_value(n));
        }

        if let Some(n) = self.offset {
            slots.slot(" OFFSET ", "offset", count_value(n));
        }

        slots.finish()
    }
}

impl From<Select> for Expression {
    fn from(select: Select) -> Self {
        select.into_expression()
    }
}

impl From<Select> for Value {
    fn from(select: Select) -> Self {
        Self::from(select.into_expression())
    }
}
