//! # oxide-query
//!
//! A dialect-portable SQL statement model.
//!
//! This crate provides:
//! - An identifier model (tables, columns, dotted namespaces) rendered with
//!   per-dialect quoting and per-connection table prefixes
//! - A parameterized expression tree with positional `?` and named `:name`
//!   placeholders, nested to any depth
//! - A compiler that inlines every parameter as escaped SQL text, and a
//!   flattener that turns the same tree into a native-placeholder template plus
//!   a flat bind list
//! - Statement builders and a chainable condition builder
//! - Savepoint bookkeeping for nested transactions
//!
//! ## Building and rendering
//!
//! ```rust
//! use oxide_query::dialect::PostgresDialect;
//! use oxide_query::{Column, Conditions, Select, SqlValue, Table, Value, compile, flatten};
//!
//! let select = Select::new()
//!     .columns(&["id", "name"])
//!     .from(Table::new("users"))
//!     .where_clause(
//!         Conditions::predicate(Column::new("active"), "=", true)
//!             .and_in(Column::new("role"), vec![Value::from("admin"), Value::from("staff")]),
//!     );
//! let node = Value::from(select);
//!
//! assert_eq!(
//!     compile(&node, &PostgresDialect).unwrap(),
//!     r#"SELECT "id", "name" FROM "users" WHERE "active" = '1' AND "role" IN ('admin', 'staff')"#
//! );
//!
//! let (sql, params) = flatten(&node, &PostgresDialect).unwrap();
//! assert_eq!(
//!     sql,
//!     r#"SELECT "id", "name" FROM "users" WHERE "active" = $1 AND "role" IN ($2, $3)"#
//! );
//! assert_eq!(params.len(), 3);
//! assert_eq!(params[0], SqlValue::Bool(true));
//! ```
//!
//! ## SQL Injection Prevention
//!
//! Text literals are always escaped by `compile`, and never appear in the SQL
//! text produced by `flatten`:
//!
//! ```rust
//! use oxide_query::dialect::MysqlDialect;
//! use oxide_query::{Column, Conditions, Select, Table, Value, compile};
//!
//! let user_input = "'; DROP TABLE users; --";
//! let select = Select::new()
//!     .from(Table::new("users"))
//!     .where_clause(Conditions::predicate(Column::new("name"), "=", user_input));
//!
//! assert_eq!(
//!     compile(&Value::from(select), &MysqlDialect).unwrap(),
//!     "SELECT * FROM `users` WHERE `name` = '''; DROP TABLE users; --'"
//! );
//! ```

pub mod ast;
pub mod builder;
pub mod compiler;
pub mod dialect;
pub mod error;
pub mod identifier;
pub mod registry;
pub mod savepoint;
pub mod value;

pub use ast::{Alias, Conditions, Expression, JoinType, TableReference};
pub use builder::{Delete, Insert, OrderDirection, Select, Set, SetOperator, Update};
pub use compiler::{Compiler, Flattener, compile, flatten};
pub use dialect::Dialect;
pub use error::{QueryError, Result};
pub use identifier::{Column, Identifier, Namespace, Table};
pub use registry::ConnectionRegistry;
pub use savepoint::{DualSavepointStack, SavepointStack};
pub use value::{SqlValue, ToSqlValue, Value};
