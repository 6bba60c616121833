//! SQL Server dialect.

use super::Dialect;

/// SQL Server dialect: bracket quoting.
///
/// SQL Server has no `RELEASE SAVEPOINT`; pair it with
/// [`DualSavepointStack`](crate::savepoint::DualSavepointStack) to keep
/// nested savepoint names consistent.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlServerDialect;

impl SqlServerDialect {
    /// Creates a new SQL Server dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqlServerDialect {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    fn quote_left(&self) -> char {
        '['
    }

    fn quote_right(&self) -> char {
        ']'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlserver_dialect() {
        let dialect = SqlServerDialect::new();
        assert_eq!(dialect.name(), "sqlserver");
        assert_eq!(dialect.quote_identifier("users"), "[users]");
    }
}
