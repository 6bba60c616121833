//! Table-prefix adapter for any dialect.

use super::Dialect;

/// A dialect with a configured table prefix.
#[derive(Debug, Clone)]
pub struct Prefixed<D> {
    inner: D,
    prefix: String,
}

impl<D: Dialect> Prefixed<D> {
    /// Wraps `inner`, injecting `prefix` into every quoted table name.
    #[must_use]
    pub fn new(inner: D, prefix: impl Into<String>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
        }
    }

    /// Returns the wrapped dialect.
    #[must_use]
    pub const fn inner(&self) -> &D {
        &self.inner
    }
}

impl<D: Dialect> Dialect for Prefixed<D> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn quote_left(&self) -> char {
        self.inner.quote_left()
    }

    fn quote_right(&self) -> char {
        self.inner.quote_right()
    }

    fn table_prefix(&self) -> &str {
        &self.prefix
    }

    fn escape_text(&self, text: &str) -> String {
        self.inner.escape_text(text)
    }

    fn native_placeholder(&self, position: usize) -> String {
        self.inner.native_placeholder(position)
    }

    fn quote_identifier(&self, name: &str) -> String {
        self.inner.quote_identifier(name)
    }
}
