//! Abstract Syntax Tree (AST) nodes shared by every statement.

mod alias;
mod conditions;
mod expression;
mod table_reference;

pub use alias::Alias;
pub use conditions::Conditions;
pub use expression::{Expression, NAMED_SIGIL};
pub use table_reference::{JoinType, TableReference};
