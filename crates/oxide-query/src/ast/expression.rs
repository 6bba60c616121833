//! The universal template node.

use std::collections::BTreeMap;

use crate::value::Value;

/// Sigil that starts a named placeholder.
pub const NAMED_SIGIL: char = ':';

/// Raw SQL text with `?` / `:name` placeholders and the values they stand for.
///
/// An expression with no parameters at all is treated as pre-rendered SQL and
/// emitted verbatim, placeholders included.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expression {
    template: String,
    positional: Vec<Value>,
    named: BTreeMap<String, Value>,
}

impl Expression {
    /// Creates an expression from a template with no parameters yet.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            positional: Vec::new(),
            named: BTreeMap::new(),
        }
    }

    /// Creates a pre-rendered fragment that is emitted as-is.
    ///
    /// **Warning**: Only use this for SQL fragments that don't contain user input.
    #[must_use]
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::new(sql)
    }

    /// Creates an expression with positional parameters.
    #[must_use]
    pub fn with_params(template: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            template: template.into(),
            positional: params,
            named: BTreeMap::new(),
        }
    }

    /// Appends the next positional parameter.
    #[must_use]
    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Sets a named parameter. The sigil is added when missing.
    #[must_use]
    pub fn bind_named(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.set_named(name, value.into());
        self
    }

    pub(crate) fn push_positional(&mut self, value: Value) {
        self.positional.push(value);
    }

    pub(crate) fn push_template(&mut self, sql: &str) {
        self.template.push_str(sql);
    }

    pub(crate) fn truncate_template(&mut self, len: usize) {
        self.template.truncate(len);
    }

    pub(crate) fn set_named(&mut self, name: &str, value: Value) {
        let key = if name.starts_with(NAMED_SIGIL) {
            String::from(name)
        } else {
            format!("{NAMED_SIGIL}{name}")
        };
        self.named.insert(key, value);
    }

    /// Returns the template text.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the positional parameters in placeholder order.
    #[must_use]
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Returns the named parameter map, keyed with the sigil.
    #[must_use]
    pub const fn named(&self) -> &BTreeMap<String, Value> {
        &self.named
    }

    /// Looks up a named parameter by its exact token.
    #[must_use]
    pub fn named_param(&self, token: &str) -> Option<&Value> {
        self.named.get(token)
    }

    /// Returns `true` when any parameter is attached.
    #[must_use]
    pub fn has_parameters(&self) -> bool {
        !self.positional.is_empty() || !self.named.is_empty()
    }
}
