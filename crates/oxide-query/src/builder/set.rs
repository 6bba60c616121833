//! Compound queries: UNION / INTERSECT / EXCEPT.

use super::{OrderDirection, Slots, count_value, order_item};
use crate::ast::Expression;
use crate::value::Value;

/// Set operators combining two queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOperator {
    /// UNION.
    Union,
    /// INTERSECT.
    Intersect,
    /// EXCEPT.
    Except,
}

impl SetOperator {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Union => "UNION",
            Self::Intersect => "INTERSECT",
            Self::Except => "EXCEPT",
        }
    }
}

/// A chain of queries combined with set operators, followed by optional
/// ORDER BY / LIMIT / OFFSET applying to the whole result.
#[derive(Debug, Clone, PartialEq)]
pub struct Set {
    queries: Expression,
    order_by: Vec<Value>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl Set {
    /// Starts with the first query.
    #[must_use]
    pub fn new(first: impl Into<Value>) -> Self {
        Self {
            queries: Expression::new("?").bind(first),
            order_by: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Combines another query with `operator`, optionally keeping duplicates.
    #[must_use]
    pub fn combine(mut self, operator: SetOperator, all: bool, query: impl Into<Value>) -> Self {
        let all = if all { " ALL" } else { "" };
        self.queries
            .push_template(&format!(" {}{all} ?", operator.as_str()));
        self.queries.push_positional(query.into());
        self
    }

    /// Adds `UNION <query>`.
    #[must_use]
    pub fn union(self, query: impl Into<Value>) -> Self {
        self.combine(SetOperator::Union, false, query)
    }

    /// Adds `UNION ALL <query>`.
    #[must_use]
    pub fn union_all(self, query: impl Into<Value>) -> Self {
        self.combine(SetOperator::Union, true, query)
    }

    /// Adds `INTERSECT <query>`.
    #[must_use]
    pub fn intersect(self, query: impl Into<Value>) -> Self {
        self.combine(SetOperator::Intersect, false, query)
    }

    /// Adds `INTERSECT ALL <query>`.
    #[must_use]
    pub fn intersect_all(self, query: impl Into<Value>) -> Self {
        self.combine(SetOperator::Intersect, true, query)
    }

    /// Adds `EXCEPT <query>`.
    #[must_use]
    pub fn except(self, query: impl Into<Value>) -> Self {
        self.combine(SetOperator::Except, false, query)
    }

    /// Adds `EXCEPT ALL <query>`.
    #[must_use]
    pub fn except_all(self, query: impl Into<Value>) -> Self {
        self.combine(SetOperator::Except, true, query)
    }

    /// Adds an ORDER BY item for the combined result.
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

    /// Assembles `? UNION ? ... [ORDER BY :orderby] [LIMIT :limit]
    /// [OFFSET :offset]`.
    #[must_use]
    pub fn into_expression(self) -> Expression {
        let mut slots = Slots::new("");
        slots.slot("", "queries", Value::from(self.queries));

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

impl From<Set> for Expression {
    fn from(set: Set) -> Self {
        set.into_expression()
    }
}

impl From<Set> for Value {
    fn from(set: Set) -> Self {
        Self::from(set.into_expression())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Conditions;
    use crate::builder::Select;
    use crate::compiler::{compile, flatten};
    use crate::dialect::GenericDialect;
    use crate::identifier::{Column, Table};

    fn names_from(table: &str, min_id: i64) -> Select {
        Select::new()
            .columns(&["name"])
            .from(Table::new(table))
            .where_clause(Conditions::predicate(Column::new("id"), ">", min_id))
    }

    #[test]
    fn test_union_all_with_order() {
        let set = Set::new(names_from("a", 1))
            .union_all(names_from("b", 2))
            .order_by(Column::new("name"), OrderDirection::Desc)
            .limit(3);
        assert_eq!(
            compile(&Value::from(set), &GenericDialect).unwrap(),
            "SELECT \"name\" FROM \"a\" WHERE \"id\" > 1 UNION ALL \
             SELECT \"name\" FROM \"b\" WHERE \"id\" > 2 ORDER BY \"name\" DESC LIMIT 3"
        );
    }

    #[test]
    fn test_intersect_except_flattened() {
        let set = Set::new(names_from("a", 1))
            .intersect(names_from("b", 2))
            .except_all(names_from("c", 3))
            .offset(4);
        let (sql, params) = flatten(&Value::from(set), &GenericDialect).unwrap();
        assert_eq!(
            sql,
            "SELECT \"name\" FROM \"a\" WHERE \"id\" > ? INTERSECT \
             SELECT \"name\" FROM \"b\" WHERE \"id\" > ? EXCEPT ALL \
             SELECT \"name\" FROM \"c\" WHERE \"id\" > ? OFFSET ?"
        );
        assert_eq!(
            params.iter().map(|p| format!("{p:?}")).collect::<Vec<_>>(),
            vec!["Int(1)", "Int(2)", "Int(3)", "Int(4)"]
        );
    }
}
