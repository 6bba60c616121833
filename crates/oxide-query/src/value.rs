//! Literal values and the compilable node type.
//!
//! [`SqlValue`] is a bind-able literal. [`Value`] is the closed set of things
//! that may appear as an expression parameter: literals, identifiers, nested
//! expressions and sequences of any of those.

use crate::ast::Expression;
use crate::identifier::{Column, Identifier, Table};

/// A SQL literal that can be bound as a prepared-statement parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Binary blob value.
    Blob(Vec<u8>),
}

/// Trait for types that can be converted to SQL values.
pub trait ToSqlValue {
    /// Converts the value to a `SqlValue`.
    fn to_sql_value(self) -> SqlValue;
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self
    }
}

macro_rules! int_to_sql_value {
    ($($ty:ty),*) => {
        $(
            impl ToSqlValue for $ty {
                fn to_sql_value(self) -> SqlValue {
                    SqlValue::Int(i64::from(self))
                }
            }
        )*
    };
}

int_to_sql_value!(i64, i32, i16, i8, u32, u16, u8);

impl ToSqlValue for bool {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Bool(self)
    }
}

impl ToSqlValue for f64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(self)
    }
}

impl ToSqlValue for f32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(f64::from(self))
    }
}

impl ToSqlValue for String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self)
    }
}

impl ToSqlValue for &str {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(String::from(self))
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        match self {
            Some(v) => v.to_sql_value(),
            None => SqlValue::Null,
        }
    }
}

impl ToSqlValue for Vec<u8> {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Blob(self)
    }
}

impl ToSqlValue for &[u8] {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Blob(self.to_vec())
    }
}

/// A compilable AST node.
///
/// The compiler and flattener match exhaustively on this enum; statement
/// builders convert into [`Value::Expression`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A literal, quoted by the compiler or bound by the flattener.
    Literal(SqlValue),
    /// A generic identifier (never prefixed).
    Identifier(Identifier),
    /// A column reference.
    Column(Column),
    /// A table reference (prefixed).
    Table(Table),
    /// A template with its own parameters.
    Expression(Box<Expression>),
    /// A comma-separated list.
    Sequence(Vec<Value>),
}

impl Value {
    /// Shorthand for [`Value::Literal`] of [`SqlValue::Null`].
    pub const NULL: Self = Self::Literal(SqlValue::Null);

    /// Builds a sequence from anything convertible into values.
    #[must_use]
    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Returns `true` for an empty sequence.
    #[must_use]
    pub fn is_empty_sequence(&self) -> bool {
        matches!(self, Self::Sequence(items) if items.is_empty())
    }
}

macro_rules! literal_into_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Literal(value.to_sql_value())
                }
            }
        )*
    };
}

literal_into_value!(
    SqlValue, bool, i64, i32, i16, i8, u32, u16, u8, f64, f32, String, &str, &[u8]
);

impl<T: ToSqlValue> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        Self::Literal(value.to_sql_value())
    }
}

impl From<Identifier> for Value {
    fn from(ident: Identifier) -> Self {
        Self::Identifier(ident)
    }
}

impl From<Column> for Value {
    fn from(column: Column) -> Self {
        Self::Column(column)
    }
}

impl From<Table> for Value {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

impl From<Expression> for Value {
    fn from(expr: Expression) -> Self {
        Self::Expression(Box::new(expr))
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::Sequence(items)
    }
}
