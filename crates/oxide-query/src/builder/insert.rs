//! INSERT statement builder.

use super::{Select, Slots};
use crate::ast::Expression;
use crate::identifier::Column;
use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
enum Source {
    Values(Vec<Vec<Value>>),
    Select(Select),
}

/// An INSERT statement.
///
/// Clause order: `INSERT INTO table [(columns)] VALUES rows | select`, or
/// `DEFAULT VALUES` when no row was added.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    table: Value,
    columns: Vec<Value>,
    source: Source,
}

impl Insert {
    /// Creates an INSERT into `table`.
    #[must_use]
    pub fn new(table: impl Into<Value>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            source: Source::Values(Vec::new()),
        }
    }

    /// Specifies the columns to insert into.
    #[must_use]
    pub fn columns(mut self, cols: &[&str]) -> Self {
        self.columns
            .extend(cols.iter().map(|name| Value::from(Column::new(name))));
        self
    }

    /// Adds a row of values. Replaces an `INSERT ... SELECT` source.
    #[must_use]
    pub fn values<I, T>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let row: Vec<Value> = row.into_iter().map(Into::into).collect();
        match &mut self.source {
            Source::Values(rows) => rows.push(row),
            Source::Select(_) => self.source = Source::Values(vec![row]),
        }
        self
    }

    /// Inserts the result of a query instead of literal rows.
    #[must_use]
    pub fn select(mut self, query: Select) -> Self {
        self.source = Source::Select(query);
        self
    }

    /// Assembles the statement template from the populated slots.
    #[must_use]
    pub fn into_expression(self) -> Expression {
        let mut slots = Slots::new("INSERT INTO");
        slots.slot(" ", "table", self.table);

        if !self.columns.is_empty() {
            slots.push(" (");
            slots.slot("", "columns", Value::Sequence(self.columns));
            slots.push(")");
        }

        match self.source {
            Source::Select(query) => slots.slot(" ", "select", query.into()),
            Source::Values(rows) if rows.is_empty() => slots.push(" DEFAULT VALUES"),
            Source::Values(rows) => {
                let rows = rows
                    .into_iter()
                    .map(|row| Value::from(Expression::new("(?)").bind(Value::Sequence(row))))
                    .collect();
                slots.slot(" VALUES ", "values", Value::Sequence(rows));
            }
        }

        slots.finish()
    }
}

impl From<Insert> for Expression {
    fn from(insert: Insert) -> Self {
        insert.into_expression()
    }
}

impl From<Insert> for Value {
    fn from(insert: Insert) -> Self {
        Self::from(insert.into_expression())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Conditions;
    use crate::compiler::{compile, flatten};
    use crate::dialect::{Dialect, GenericDialect, MysqlDialect};
    use crate::identifier::Table;
    use crate::value::SqlValue;

    #[test]
    fn test_simple_insert() {
        let insert = Insert::new(Table::new("users"))
            .columns(&["name", "email"])
            .values(["Alice", "alice@example.com"]);
        assert_eq!(
            compile(&Value::from(insert), &GenericDialect).unwrap(),
            "INSERT INTO \"users\" (\"name\", \"email\") VALUES ('Alice', 'alice@example.com')"
        );
    }

    #[test]
    fn test_insert_multiple_rows_flattened() {
        let insert = Insert::new(Table::new("users"))
            .columns(&["name"])
            .values(["Alice"])
            .values(["Bob"])
            .values(["Charlie"]);
        let (sql, params) = flatten(&Value::from(insert), &GenericDialect).unwrap();
        assert_eq!(sql, "INSERT INTO \"users\" (\"name\") VALUES (?), (?), (?)");
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_insert_without_columns() {
        let insert = Insert::new(Table::new("users")).values(vec![Value::from(1), Value::NULL]);
        assert_eq!(
            compile(&Value::from(insert), &GenericDialect).unwrap(),
            "INSERT INTO \"users\" VALUES (1, NULL)"
        );
    }

    #[test]
    fn test_insert_default_values() {
        let insert = Insert::new(Table::new("events"));
        assert_eq!(
            compile(&Value::from(insert), &GenericDialect).unwrap(),
            "INSERT INTO \"events\" DEFAULT VALUES"
        );
    }

    #[test]
    fn test_insert_select() {
        let dialect = MysqlDialect.with_table_prefix("app_");
        let insert = Insert::new(Table::new("archive"))
            .columns(&["id"])
            .select(
                Select::new()
                    .columns(&["id"])
                    .from(Table::new("orders"))
                    .where_clause(Conditions::predicate(Column::new("closed"), "=", true)),
            );
        let (sql, params) = flatten(&Value::from(insert), &dialect).unwrap();
        assert_eq!(
            sql,
            "INSERT INTO `app_archive` (`id`) SELECT `id` FROM `app_orders` WHERE `closed` = ?"
        );
        assert_eq!(params, vec![SqlValue::Bool(true)]);
    }

    #[test]
    fn test_insert_empty_row_has_no_stray_separator() {
        let insert = Insert::new(Table::new("t")).values(Vec::<Value>::new());
        let (sql, params) = flatten(&Value::from(insert), &GenericDialect).unwrap();
        assert_eq!(sql, "INSERT INTO \"t\" VALUES ()");
        assert!(params.is_empty());
    }
}
