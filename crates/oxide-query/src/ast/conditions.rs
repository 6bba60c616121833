//! Predicate chains for WHERE / HAVING / ON clauses.

use tracing::warn;

use super::Expression;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Group {
    /// Template length before the group's connective was written.
    mark: usize,
    /// `just_opened` state before the group was opened.
    was_just_opened: bool,
}

/// Accumulates `<left> <OP> <right>` fragments joined by logical connectives.
///
/// The connective is omitted at the start of the chain and right after an
/// [`open`](Self::open). `IN` wraps its argument in one parenthesized
/// placeholder; `BETWEEN` takes a two-element sequence joined by `AND`.
///
/// ```rust
/// use oxide_query::compiler::compile;
/// use oxide_query::dialect::GenericDialect;
/// use oxide_query::{Column, Conditions, Value};
///
/// let cond = Conditions::new()
///     .and(Column::new("active"), "=", true)
///     .open("or")
///     .and(Column::new("age"), "between", Value::sequence([18, 65]))
///     .or(Column::new("role"), "in", Value::sequence(["admin", "staff"]))
///     .close();
///
/// assert_eq!(
///     compile(&Value::from(cond), &GenericDialect).unwrap(),
///     r#""active" = '1' OR ("age" BETWEEN 18 AND 65 OR "role" IN ('admin', 'staff'))"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Conditions {
    expr: Expression,
    just_opened: bool,
    groups: Vec<Group>,
}

impl Default for Conditions {
    fn default() -> Self {
        Self::new()
    }
}

impl Conditions {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expr: Expression::default(),
            just_opened: true,
            groups: Vec::new(),
        }
    }

    /// Creates a chain holding a single `<left> <OP> <right>` predicate.
    #[must_use]
    pub fn predicate(
        left: impl Into<Value>,
        operator: &str,
        right: impl Into<Value>,
    ) -> Self {
        Self::new().and(left, operator, right)
    }

    /// Appends `<left> <OP> <right>` after the uppercased `logic` connective.
    ///
    /// An empty operator appends just `<left>` and drops `right`.
    #[must_use]
    pub fn add(
        mut self,
        logic: &str,
        left: impl Into<Value>,
        operator: &str,
        right: impl Into<Value>,
    ) -> Self {
        self.connective(logic);
        let operator = operator.trim().to_uppercase();
        self.expr.push_positional(left.into());
        match operator.as_str() {
            "" => self.expr.push_template("?"),
            "IN" | "NOT IN" => {
                self.expr.push_template(&format!("? {operator} (?)"));
                self.expr.push_positional(right.into());
            }
            "BETWEEN" | "NOT BETWEEN" => {
                self.expr.push_template(&format!("? {operator} ? AND ?"));
                // any arity other than two surfaces as a placeholder mismatch
                match right.into() {
                    Value::Sequence(bounds) => {
                        for bound in bounds {
                            self.expr.push_positional(bound);
                        }
                    }
                    other => self.expr.push_positional(other),
                }
            }
            _ => {
                self.expr.push_template(&format!("? {operator} ?"));
                self.expr.push_positional(right.into());
            }
        }
        self
    }

    /// Appends a bare `<left>` fragment, such as a raw expression or a
    /// nested chain.
    #[must_use]
    pub fn add_expr(mut self, logic: &str, left: impl Into<Value>) -> Self {
        self.connective(logic);
        self.expr.push_template("?");
        self.expr.push_positional(left.into());
        self
    }

    /// Appends with `AND`.
    #[must_use]
    pub fn and(self, left: impl Into<Value>, operator: &str, right: impl Into<Value>) -> Self {
        self.add("and", left, operator, right)
    }

    /// Appends with `OR`.
    #[must_use]
    pub fn or(self, left: impl Into<Value>, operator: &str, right: impl Into<Value>) -> Self {
        self.add("or", left, operator, right)
    }

    /// Appends a bare fragment with `AND`.
    #[must_use]
    pub fn and_expr(self, left: impl Into<Value>) -> Self {
        self.add_expr("and", left)
    }

    /// Appends a bare fragment with `OR`.
    #[must_use]
    pub fn or_expr(self, left: impl Into<Value>) -> Self {
        self.add_expr("or", left)
    }

    /// Appends `<left> IN (<values>)` with `AND`.
    #[must_use]
    pub fn and_in(self, left: impl Into<Value>, values: Vec<Value>) -> Self {
        self.add("and", left, "IN", Value::Sequence(values))
    }

    /// Appends `<left> BETWEEN <low> AND <high>` with `AND`.
    #[must_use]
    pub fn and_between(
        self,
        left: impl Into<Value>,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        let bounds = Value::Sequence(vec![low.into(), high.into()]);
        self.add("and", left, "BETWEEN", bounds)
    }

    /// Opens a parenthesized group after the `logic` connective.
    #[must_use]
    pub fn open(mut self, logic: &str) -> Self {
        let group = Group {
            mark: self.expr.template().len(),
            was_just_opened: self.just_opened,
        };
        self.connective(logic);
        self.expr.push_template("(");
        self.groups.push(group);
        self.just_opened = true;
        self
    }

    /// Closes the innermost group.
    #[must_use]
    pub fn close(mut self) -> Self {
        if self.groups.pop().is_none() {
            warn!("close() without an open group ignored");
            return self;
        }
        self.expr.push_template(")");
        self.just_opened = false;
        self
    }

    /// Closes the innermost group, or removes it entirely when nothing was
    /// added since it was opened.
    #[must_use]
    pub fn close_empty(mut self) -> Self {
        if !self.just_opened {
            return self.close();
        }
        let Some(group) = self.groups.pop() else {
            warn!("close_empty() without an open group ignored");
            return self;
        };
        self.expr.truncate_template(group.mark);
        self.just_opened = group.was_just_opened;
        self
    }

    /// Returns `true` when no fragment has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.expr.has_parameters() && self.expr.template().is_empty()
    }

    /// Returns the number of groups still open.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.groups.len()
    }

    /// Converts into an expression, closing any groups left open.
    #[must_use]
    pub fn into_expression(self) -> Expression {
        let mut expr = self.expr;
        for _ in &self.groups {
            expr.push_template(")");
        }
        expr
    }

    fn connective(&mut self, logic: &str) {
        if !self.just_opened {
            let logic = logic.trim().to_uppercase();
            self.expr.push_template(&format!(" {logic} "));
        }
        self.just_opened = false;
    }
}

impl From<Conditions> for Expression {
    fn from(conditions: Conditions) -> Self {
        conditions.into_expression()
    }
}

impl From<Conditions> for Value {
    fn from(conditions: Conditions) -> Self {
        Self::from(conditions.into_expression())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::Column;

    fn template(c: &Conditions) -> String {
        c.clone().into_expression().template().to_string()
    }

    #[test]
    fn test_first_fragment_has_no_connective() {
        let c = Conditions::new().or(Column::new("a"), "=", 1);
        assert_eq!(template(&c), "? = ?");
        assert_eq!(c.clone().into_expression().positional().len(), 2);
    }

    #[test]
    fn test_connective_is_uppercased() {
        let c = Conditions::new()
            .and(Column::new("a"), "=", 1)
            .add("or not", Column::new("b"), "like", "x%");
        assert_eq!(template(&c), "? = ? OR NOT ? LIKE ?");
    }

    #[test]
    fn test_in_and_between_shapes() {
        let c = Conditions::new()
            .and_in(Column::new("a"), vec![Value::from(1), Value::from(2)])
            .and_between(Column::new("b"), 1, 9)
            .and(Column::new("c"), "not between", Value::sequence([3, 4]));
        assert_eq!(
            template(&c),
            "? IN (?) AND ? BETWEEN ? AND ? AND ? NOT BETWEEN ? AND ?"
        );
        assert_eq!(c.into_expression().positional().len(), 8);
    }

    #[test]
    fn test_open_close() {
        let c = Conditions::new()
            .and(Column::new("a"), "=", 1)
            .open("or")
            .and(Column::new("b"), "=", 2)
            .and(Column::new("c"), "=", 3)
            .close();
        assert_eq!(template(&c), "? = ? OR (? = ? AND ? = ?)");
        assert_eq!(c.depth(), 0);
    }

    #[test]
    fn test_open_at_start() {
        let c = Conditions::new()
            .open("and")
            .and(Column::new("a"), "=", 1)
            .close()
            .and(Column::new("b"), "=", 2);
        assert_eq!(template(&c), "(? = ?) AND ? = ?");
    }

    #[test]
    fn test_close_empty_removes_dangling_group() {
        let c = Conditions::new()
            .and(Column::new("a"), "=", 1)
            .open("and")
            .close_empty()
            .or(Column::new("b"), "=", 2);
        assert_eq!(template(&c), "? = ? OR ? = ?");
    }

    #[test]
    fn test_close_empty_at_start_restores_state() {
        let c = Conditions::new()
            .open("and")
            .close_empty()
            .and(Column::new("a"), "=", 1);
        assert_eq!(template(&c), "? = ?");
        assert!(Conditions::new().open("and").close_empty().is_empty());
    }

    #[test]
    fn test_close_empty_with_content_closes() {
        let c = Conditions::new()
            .open("and")
            .and(Column::new("a"), "=", 1)
            .close_empty();
        assert_eq!(template(&c), "(? = ?)");
    }

    #[test]
    fn test_nested_close_empty() {
        let c = Conditions::new()
            .and(Column::new("a"), "=", 1)
            .open("and")
            .open("or")
            .close_empty()
            .and(Column::new("b"), "=", 2)
            .close();
        assert_eq!(template(&c), "? = ? AND (? = ?)");
    }

    #[test]
    fn test_unbalanced_groups_are_closed() {
        let c = Conditions::new()
            .open("and")
            .and(Column::new("a"), "=", 1);
        assert_eq!(c.depth(), 1);
        assert_eq!(template(&c), "(? = ?)");
    }

    #[test]
    fn test_stray_close_is_ignored() {
        let c = Conditions::new().and(Column::new("a"), "=", 1).close();
        assert_eq!(template(&c), "? = ?");
    }

    #[test]
    fn test_empty_operator_keeps_left_only() {
        let c = Conditions::new().and(Column::new("flag"), "", Value::NULL);
        assert_eq!(template(&c), "?");
        assert_eq!(c.into_expression().positional().len(), 1);
    }

    #[test]
    fn test_bare_fragment() {
        let c = Conditions::new()
            .and_expr(Expression::raw("deleted_at IS NULL"))
            .and(Column::new("a"), "=", 1);
        assert_eq!(template(&c), "? AND ? = ?");
    }
}
