//! Native parameter rewrite for prepared statements.

use tracing::debug;

use super::placeholder;
use super::Compiler;
use crate::dialect::Dialect;
use crate::error::Result;
use crate::value::{SqlValue, Value};

/// Rewrites nested nodes into a template with only native placeholders and a
/// flat list of literals in matching order.
///
/// Identifiers are rendered into the text, since native APIs bind only
/// literal values. Nested expressions are expanded in place.
#[derive(Debug)]
pub struct Flattener<'d, D: ?Sized> {
    compiler: Compiler<'d, D>,
}

impl<'d, D: Dialect + ?Sized> Flattener<'d, D> {
    /// Creates a flattener for `dialect`.
    #[must_use]
    pub const fn new(dialect: &'d D) -> Self {
        Self {
            compiler: Compiler::new(dialect),
        }
    }

    /// Flattens `node`, cloning each bound literal.
    pub fn flatten(&self, node: &Value) -> Result<(String, Vec<SqlValue>)> {
        let (sql, params) = self.flatten_ref(node)?;
        Ok((sql, params.into_iter().cloned().collect()))
    }

    /// Flattens `node`, borrowing each bound literal from the tree.
    ///
    /// For drivers that bind parameters by reference.
    pub fn flatten_ref<'v>(&self, node: &'v Value) -> Result<(String, Vec<&'v SqlValue>)> {
        let mut params = Vec::new();
        let mut sql = String::new();
        self.resolve(node, &mut sql, &mut params)?;
        debug!(
            dialect = self.compiler.dialect().name(),
            params = params.len(),
            "flattened statement"
        );
        Ok((sql, params))
    }

    fn resolve<'v>(
        &self,
        node: &'v Value,
        out: &mut String,
        params: &mut Vec<&'v SqlValue>,
    ) -> Result<()> {
        match node {
            Value::Literal(value) => {
                params.push(value);
                out.push_str(&self.compiler.dialect().native_placeholder(params.len()));
            }
            Value::Identifier(ident) => out.push_str(&self.compiler.quote_identifier(ident)),
            Value::Column(column) => out.push_str(&self.compiler.quote_column(column)),
            Value::Table(table) => out.push_str(&self.compiler.quote_table(table)),
            Value::Expression(expr) => {
                if expr.has_parameters() {
                    let expanded =
                        placeholder::walk(expr, |value, out| self.resolve(value, out, params))?;
                    out.push_str(&expanded);
                } else {
                    out.push_str(expr.template());
                }
            }
            Value::Sequence(items) => {
                let mut first = true;
                for item in items {
                    let mut fragment = String::new();
                    self.resolve(item, &mut fragment, params)?;
                    if fragment.is_empty() {
                        continue;
                    }
                    if !first {
                        out.push_str(", ");
                    }
                    out.push_str(&fragment);
                    first = false;
                }
            }
        }
        Ok(())
    }
}
