//! `<value> AS <alias>` nodes.

use super::Expression;
use crate::identifier::{Identifier, Namespace};
use crate::value::Value;

/// A value renamed with `AS`.
#[derive(Debug, Clone, PartialEq)]
pub struct Alias {
    value: Value,
    alias: Identifier,
}

impl Alias {
    /// Aliases `value` as `alias`. The alias is a single name and is not
    /// split on dots.
    #[must_use]
    pub fn new(value: impl Into<Value>, alias: &str) -> Self {
        Self {
            value: value.into(),
            alias: Identifier::with_namespace(alias, Namespace::None),
        }
    }

    /// Returns the alias name.
    #[must_use]
    pub fn alias(&self) -> &str {
        self.alias.name()
    }

    /// Converts into `? AS ?`.
    #[must_use]
    pub fn into_expression(self) -> Expression {
        Expression::new("? AS ?")
            .bind(self.value)
            .bind(self.alias)
    }
}

impl From<Alias> for Expression {
    fn from(alias: Alias) -> Self {
        alias.into_expression()
    }
}

impl From<Alias> for Value {
    fn from(alias: Alias) -> Self {
        Self::from(alias.into_expression())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::Compiler;
    use crate::dialect::GenericDialect;
    use crate::identifier::{Column, Table};

    #[test]
    fn test_alias_column() {
        let expr = Alias::new(Column::new("u.name"), "user.name").into_expression();
        assert_eq!(
            Compiler::new(&GenericDialect).quote_expression(&expr).unwrap(),
            "\"u\".\"name\" AS \"user.name\""
        );
    }

    #[test]
    fn test_alias_table_is_not_prefixed() {
        let dialect = crate::dialect::Dialect::with_table_prefix(GenericDialect, "app_");
        let expr = Alias::new(Table::new("users"), "u").into_expression();
        assert_eq!(
            Compiler::new(&dialect).quote_expression(&expr).unwrap(),
            "\"app_users\" AS \"u\""
        );
    }
}
