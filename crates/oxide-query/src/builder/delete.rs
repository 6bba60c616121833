//! DELETE statement builder.

use super::{OrderDirection, Slots, count_value, order_item};
use crate::ast::{Conditions, Expression};
use crate::value::Value;

/// A DELETE statement.
///
/// Clause order: `DELETE FROM table [WHERE where] [ORDER BY orderby]
/// [LIMIT limit]`.
///
/// **Important**: DELETE without WHERE deletes all rows!
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    table: Value,
    where_clause: Option<Conditions>,
    order_by: Vec<Value>,
    limit: Option<u64>,
}

impl Delete {
    /// Creates a DELETE from `table`.
    #[must_use]
    pub fn new(table: impl Into<Value>) -> Self {
        Self {
            table: table.into(),
            where_clause: None,
            order_by: Vec::new(),
            limit: None,
        }
    }

    /// Sets the WHERE clause.
    #[must_use]
    pub fn where_clause(mut self, conditions: Conditions) -> Self {
        self.where_clause = Some(conditions);
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

    /// Assembles the statement template from the populated slots.
    #[must_use]
    pub fn into_expression(self) -> Expression {
        let mut slots = Slots::new("DELETE FROM");
        slots.slot(" ", "table", self.table);

        if let Some(conditions) = self.where_clause.filter(|c| !c.is_empty()) {
            slots.slot(" WHERE ", "where", conditions.into());
        }

        if !self.order_by.is_empty() {
            slots.slot(" ORDER BY ", "orderby", Value::Sequence(self.order_by));
        }

        if let Some(n) = self.limit {
            slots.slot(" LIMIT ", "limit", count_value(n));
        }

        slots.finish()
    }
}

impl From<Delete> for Expression {
    fn from(delete: Delete) -> Self {
        delete.into_expression()
    }
}

impl From<Delete> for Value {
    fn from(delete: Delete) -> Self {
        Self::from(delete.into_expression())
    }
}
