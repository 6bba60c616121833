//! UPDATE statement builder.

use super::{OrderDirection, Slots, count_value, order_item};
use crate::ast::{Conditions, Expression};
use crate::identifier::Column;
use crate::value::Value;

/// An UPDATE statement.
///
/// Clause order: `UPDATE table SET assignments [WHERE where]
/// [ORDER BY orderby] [LIMIT limit]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    table: Value,
    assignments: Vec<Value>,
    where_clause: Option<Conditions>,
    order_by: Vec<Value>,
    limit: Option<u64>,
}

impl Update {
    /// Creates an UPDATE of `table`.
    #[must_use]
    pub fn new(table: impl Into<Value>) -> Self {
        Self {
            table: table.into(),
            assignments: Vec::new(),
            where_clause: None,
            order_by: Vec::new(),
            limit: None,
        }
    }

    /// Adds a `column = value` assignment.
    #[must_use]
    pub fn set(self, column: &str, value: impl Into<Value>) -> Self {
        self.set_column(Column::new(column), value)
    }

    /// Adds an assignment to an explicit column.
    #[must_use]
    pub fn set_column(mut self, column: Column, value: impl Into<Value>) -> Self {
        self.assignments
            .push(Value::from(Expression::new("? = ?").bind(column).bind(value)));
        self
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
        let mut slots = Slots::new("UPDATE");
        slots.slot(" ", "table", self.table);

        if !self.assignments.is_empty() {
            slots.slot(" SET ", "set", Value::Sequence(self.assignments));
        }

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

impl From<Update> for Expression {
    fn from(update: Update) -> Self {
        update.into_expression()
    }
}

impl From<Update> for Value {
    fn from(update: Update) -> Self {
        Self::from(update.into_expression())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::{compile, flatten};
    use crate::dialect::{GenericDialect, PostgresDialect};
    use crate::identifier::Table;
    use crate::value::SqlValue;

    #[test]
    fn test_simple_update() {
        let update = Update::new(Table::new("users"))
            .set("name", "Bob")
            .where_clause(Conditions::predicate(Column::new("id"), "=", 1));
        assert_eq!(
            compile(&Value::from(update), &GenericDialect).unwrap(),
            "UPDATE \"users\" SET \"name\" = 'Bob' WHERE \"id\" = 1"
        );
    }

    #[test]
    fn test_update_multiple_assignments_flattened() {
        let update = Update::new(Table::new("users"))
            .set("name", "Bob")
            .set("active", false)
            .set_column(Column::new("seen_at"), Expression::raw("NOW()"))
            .where_clause(Conditions::predicate(Column::new("id"), "=", 1));
        let (sql, params) = flatten(&Value::from(update), &PostgresDialect).unwrap();
        assert_eq!(
            sql,
            "UPDATE \"users\" SET \"name\" = $1, \"active\" = $2, \"seen_at\" = NOW() WHERE \"id\" = $3"
        );
        assert_eq!(
            params,
            vec![
                SqlValue::Text(String::from("Bob")),
                SqlValue::Bool(false),
                SqlValue::Int(1),
            ]
        );
    }

    #[test]
    fn test_update_order_limit() {
        let update = Update::new(Table::new("jobs"))
            .set("state", "queued")
            .order_by(Column::new("id"), OrderDirection::Asc)
            .limit(1);
        assert_eq!(
            compile(&Value::from(update), &GenericDialect).unwrap(),
            "UPDATE \"jobs\" SET \"state\" = 'queued' ORDER BY \"id\" ASC LIMIT 1"
        );
    }
}
