//! PostgreSQL dialect.

use super::Dialect;

/// PostgreSQL dialect: numbered native placeholders (`$1`, `$2`, ...).
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn native_placeholder(&self, position: usize) -> String {
        format!("${position}")
    }
}
