#![allow(dead_code)]

use oxide_query::dialect::{
    Dialect, GenericDialect, MysqlDialect, PostgresDialect, SqlServerDialect, SqliteDialect,
};
use oxide_query::{Compiler, SqlValue, Value, compile, flatten};

/// Every built-in dialect.
pub fn all_dialects() -> Vec<Box<dyn Dialect>> {
    vec![
        Box::new(GenericDialect),
        Box::new(MysqlDialect),
        Box::new(PostgresDialect),
        Box::new(SqliteDialect),
        Box::new(SqlServerDialect),
    ]
}

/// The built-in dialects whose native placeholder is a bare `?`.
pub fn question_mark_dialects() -> Vec<Box<dyn Dialect>> {
    all_dialects()
        .into_iter()
        .filter(|d| d.native_placeholder(1) == "?")
        .collect()
}

pub fn sql<D: Dialect + ?Sized>(node: impl Into<Value>, dialect: &D) -> String {
    let node = node.into();
    compile(&node, dialect).unwrap_or_else(|e| panic!("Failed to compile {node:?}\nError: {e}"))
}

pub fn flat<D: Dialect + ?Sized>(node: impl Into<Value>, dialect: &D) -> (String, Vec<SqlValue>) {
    let node = node.into();
    flatten(&node, dialect).unwrap_or_else(|e| panic!("Failed to flatten {node:?}\nError: {e}"))
}

/// Re-inlines flattened parameters at their `?` placeholders.
///
/// Only meaningful when no identifier or literal in the statement contains a
/// `?` of its own.
pub fn inline<D: Dialect + ?Sized>(template: &str, params: &[SqlValue], dialect: &D) -> String {
    let compiler = Compiler::new(dialect);
    let mut chunks = template.split('?');
    let mut out = String::from(chunks.next().unwrap_or_default());
    let mut params = params.iter();
    for chunk in chunks {
        let param = params.next().expect("more placeholders than parameters");
        out.push_str(&compiler.quote_literal(param).unwrap());
        out.push_str(chunk);
    }
    assert!(params.next().is_none(), "more parameters than placeholders");
    out
}

/// Asserts that flattening agrees with compiling for a `?` dialect.
pub fn assert_flatten_matches_compile<D: Dialect + ?Sized>(node: &Value, dialect: &D) {
    let compiled = compile(node, dialect).unwrap();
    let (template, params) = flatten(node, dialect).unwrap();
    assert_eq!(
        template.matches('?').count(),
        params.len(),
        "placeholder count mismatch in {template}"
    );
    assert_eq!(inline(&template, &params, dialect), compiled);
}
