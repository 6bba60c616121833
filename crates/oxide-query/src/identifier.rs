//! Identifier model: dotted names decomposed into `(name, namespace)`.
//!
//! An [`Identifier`] is the generic quoted name. [`Column`] and [`Table`] share
//! its decomposition but render differently: only a [`Table`] receives the
//! dialect's table prefix when quoted.
//!
//! ```rust
//! use oxide_query::{Identifier, Namespace};
//!
//! let ident = Identifier::new("a.b.c");
//! assert_eq!(ident.name(), "c");
//! assert_eq!(
//!     ident.namespace(),
//!     &Namespace::Segments(vec![String::from("a"), String::from("b")])
//! );
//! ```

/// The qualifier in front of an identifier's bare name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Namespace {
    /// No qualifier.
    #[default]
    None,
    /// Plain dot-separated segments, each quoted on its own.
    Segments(Vec<String>),
    /// Another identifier, quoted recursively and never prefixed.
    Identifier(Box<Identifier>),
    /// A table, quoted with prefix injection.
    Table(Box<Table>),
}

impl Namespace {
    /// Returns `true` when there is no qualifier.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// A SQL identifier split into its bare name and namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    name: String,
    namespace: Namespace,
}

impl Identifier {
    /// Decomposes a dotted name. The last segment is the name, the rest is
    /// the namespace.
    #[must_use]
    pub fn new(value: &str) -> Self {
        let mut segments: Vec<String> = value.split('.').map(String::from).collect();
        // split always yields at least one segment
        let name = segments.pop().unwrap_or_default();
        let namespace = if segments.is_empty() {
            Namespace::None
        } else {
            Namespace::Segments(segments)
        };
        Self { name, namespace }
    }

    /// Builds an identifier from already separated segments. The last
    /// element is the name.
    #[must_use]
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Self {
        let Some((name, rest)) = segments.split_last() else {
            return Self::with_namespace("", Namespace::None);
        };
        let namespace = if rest.is_empty() {
            Namespace::None
        } else {
            Namespace::Segments(rest.iter().map(|s| String::from(s.as_ref())).collect())
        };
        Self::with_namespace(name.as_ref(), namespace)
    }

    /// Builds an identifier from an already decomposed form.
    #[must_use]
    pub fn with_namespace(name: &str, namespace: Namespace) -> Self {
        Self {
            name: String::from(name),
            namespace,
        }
    }

    /// Returns the bare name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the namespace.
    #[must_use]
    pub const fn namespace(&self) -> &Namespace {
        &self.namespace
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A column reference. `*` as a bare name is rendered unquoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column(Identifier);

impl Column {
    /// Decomposes a dotted column name such as `orders.status`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(Identifier::new(value))
    }

    /// Creates a column qualified by a table, so the table prefix applies to
    /// the qualifier.
    #[must_use]
    pub fn of(table: Table, name: &str) -> Self {
        Self(Identifier::with_namespace(
            name,
            Namespace::Table(Box::new(table)),
        ))
    }

    /// Returns the bare column name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.name()
    }

    /// Returns the namespace.
    #[must_use]
    pub const fn namespace(&self) -> &Namespace {
        self.0.namespace()
    }

    /// Returns the underlying identifier.
    #[must_use]
    pub const fn identifier(&self) -> &Identifier {
        &self.0
    }
}

impl From<Identifier> for Column {
    fn from(ident: Identifier) -> Self {
        Self(ident)
    }
}

/// A table reference; quoting injects the dialect's table prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table(Identifier);

impl Table {
    /// Decomposes a dotted table name such as `main.users`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(Identifier::new(value))
    }

    /// Returns the bare table name, without prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.name()
    }

    /// Returns the namespace (schema or database qualifier).
    #[must_use]
    pub const fn namespace(&self) -> &Namespace {
        self.0.namespace()
    }

    /// Returns the underlying identifier.
    #[must_use]
    pub const fn identifier(&self) -> &Identifier {
        &self.0
    }
}

impl From<Identifier> for Table {
    fn from(ident: Identifier) -> Self {
        Self(ident)
    }
}
