//! DML statement builders.
//!
//! Each builder owns a fixed set of named slots (`:table`, `:where`,
//! `:columns`, ...) and assembles its template from the populated ones in a
//! fixed clause order. Builders convert into an [`Expression`] and therefore
//! into a [`Value`], so a statement can be nested anywhere a value can.
//!
//! # Example
//!
//! ```rust
//! use oxide_query::compiler::compile;
//! use oxide_query::dialect::GenericDialect;
//! use oxide_query::{Column, Conditions, OrderDirection, Select, Table, Value};
//!
//! let select = Select::new()
//!     .columns(&["id", "name"])
//!     .from(Table::new("users"))
//!     .where_clause(Conditions::predicate(Column::new("active"), "=", true))
//!     .order_by(Column::new("name"), OrderDirection::Asc)
//!     .limit(10);
//!
//! assert_eq!(
//!     compile(&Value::from(select), &GenericDialect).unwrap(),
//!     r#"SELECT "id", "name" FROM "users" WHERE "active" = '1' ORDER BY "name" ASC LIMIT 10"#
//! );
//! ```

mod delete;
mod insert;
mod select;
mod set;
mod update;

pub use delete::Delete;
pub use insert::Insert;
pub use select::Select;
pub use set::{Set, SetOperator};
pub use update::Update;

use crate::ast::Expression;
use crate::value::Value;

/// Sort direction for ORDER BY items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Builds one `? ASC` / `? DESC` ORDER BY item.
pub(crate) fn order_item(value: impl Into<Value>, direction: OrderDirection) -> Value {
    Value::from(Expression::new(format!("? {}", direction.as_str())).bind(value))
}

/// Row counts beyond `i64::MAX` are clamped.
pub(crate) fn count_value(n: u64) -> Value {
    Value::from(i64::try_from(n).unwrap_or(i64::MAX))
}

/// Assembles a template from named slots in clause order.
#[derive(Debug, Default)]
pub(crate) struct Slots {
    sql: String,
    named: Vec<(&'static str, Value)>,
}

impl Slots {
    pub(crate) fn new(keyword: &str) -> Self {
        Self {
            sql: String::from(keyword),
            named: Vec::new(),
        }
    }

    /// Appends literal SQL.
    pub(crate) fn push(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Appends `<clause> :<name>` and records the slot's value.
    pub(crate) fn slot(&mut self, clause: &str, name: &'static str, value: Value) {
        self.sql.push_str(clause);
        self.sql.push(crate::ast::NAMED_SIGIL);
        self.sql.push_str(name);
        self.named.push((name, value));
    }

    pub(crate) fn finish(self) -> Expression {
        self.named
            .into_iter()
            .fold(Expression::new(self.sql), |expr, (name, value)| {
                expr.bind_named(name, value)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_assemble_named_template() {
        let mut slots = Slots::new("DELETE FROM");
        slots.slot(" ", "table", Value::from(1));
        slots.slot(" WHERE ", "where", Value::from(2));
        let expr = slots.finish();
        assert_eq!(expr.template(), "DELETE FROM :table WHERE :where");
        assert_eq!(expr.named_param(":where"), Some(&Value::from(2)));
    }

    #[test]
    fn test_count_value_clamps() {
        assert_eq!(count_value(5), Value::from(5_i64));
        assert_eq!(count_value(u64::MAX), Value::from(i64::MAX));
    }
}
