//! Offset-tracked placeholder splitting.
//!
//! A template is split exactly once, over its original text. Each parameter
//! is resolved at the boundary where its placeholder was found, so
//! substituted output is never scanned again.

use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use crate::ast::Expression;
use crate::error::{QueryError, Result};
use crate::value::Value;

fn placeholder_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\?|:\w+").expect("Invalid placeholder regex"))
}

/// One piece of a split template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Piece<'t> {
    /// Literal SQL between placeholders.
    Text(&'t str),
    /// A bare `?`.
    Positional,
    /// A `:name` token, sigil included.
    Named(&'t str),
}

/// Splits `template` into text and placeholder pieces.
///
/// A `:name` token directly after another `:` is a cast (`x::int`) and stays
/// text.
pub(crate) fn split(template: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for found in placeholder_regex().find_iter(template) {
        let start = found.start();
        if found.as_str() != "?" && template[..start].ends_with(':') {
            continue;
        }
        if start > last {
            pieces.push(Piece::Text(&template[last..start]));
        }
        pieces.push(if found.as_str() == "?" {
            Piece::Positional
        } else {
            Piece::Named(found.as_str())
        });
        last = found.end();
    }
    if last < template.len() {
        pieces.push(Piece::Text(&template[last..]));
    }
    pieces
}

/// Walks `expr`'s template left to right, handing each placeholder's value to
/// `emit` at its position in the output.
///
/// Positional parameters are consumed in order; every one must be used.
pub(crate) fn walk<'e, F>(expr: &'e Expression, mut emit: F) -> Result<String>
where
    F: FnMut(&'e Value, &mut String) -> Result<()>,
{
    let template = expr.template();
    let positional = expr.positional();
    let mut out = String::with_capacity(template.len());
    let mut next = 0;

    for piece in split(template) {
        match piece {
            Piece::Text(text) => out.push_str(text),
            Piece::Positional => {
                let value = positional
                    .get(next)
                    .ok_or_else(|| QueryError::MissingPositional {
                        index: next,
                        template: String::from(template),
                    })?;
                trace!(index = next, "resolving positional parameter");
                next += 1;
                emit(value, &mut out)?;
            }
            Piece::Named(token) => {
                let value = expr
                    .named_param(token)
                    .ok_or_else(|| QueryError::MissingNamed {
                        name: String::from(token),
                        template: String::from(template),
                    })?;
                trace!(name = token, "resolving named parameter");
                emit(value, &mut out)?;
            }
        }
    }

    if next < positional.len() {
        return Err(QueryError::UnusedPositional {
            used: next,
            supplied: positional.len(),
            template: String::from(template),
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_mixed() {
        assert_eq!(
            split("a = ? AND b = :b OR c = ?"),
            vec![
                Piece::Text("a = "),
                Piece::Positional,
                Piece::Text(" AND b = "),
                Piece::Named(":b"),
                Piece::Text(" OR c = "),
                Piece::Positional,
            ]
        );
    }

    #[test]
    fn test_split_adjacent_placeholders() {
        assert_eq!(
            split("??:x?"),
            vec![
                Piece::Positional,
                Piece::Positional,
                Piece::Named(":x"),
                Piece::Positional,
            ]
        );
    }

    #[test]
    fn test_split_skips_casts() {
        assert_eq!(
            split("?::int"),
            vec![Piece::Positional, Piece::Text("::int")]
        );
    }

    #[test]
    fn test_split_without_placeholders() {
        assert_eq!(split("SELECT 1"), vec![Piece::Text("SELECT 1")]);
        assert!(split("").is_empty());
    }

    #[test]
    fn test_walk_reports_missing_positional() {
        let expr = Expression::new("? = ?").bind(1);
        let err = walk(&expr, |_, out| {
            out.push('x');
            Ok(())
        })
        .unwrap_err();
        assert!(matches!(err, QueryError::MissingPositional { index: 1, .. }));
    }

    #[test]
    fn test_walk_reports_missing_named() {
        let expr = Expression::new(":a = :b").bind_named("a", 1);
        let err = walk(&expr, |_, _| Ok(())).unwrap_err();
        assert!(matches!(err, QueryError::MissingNamed { ref name, .. } if name == ":b"));
    }

    #[test]
    fn test_walk_reports_unused_positional() {
        let expr = Expression::new("?").bind(1).bind(2);
        let err = walk(&expr, |_, _| Ok(())).unwrap_err();
        assert!(matches!(
            err,
            QueryError::UnusedPositional {
                used: 1,
                supplied: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_walk_reuses_named_value() {
        let expr = Expression::new(":v + :v").bind_named("v", 2);
        let mut seen = 0;
        let out = walk(&expr, |_, out| {
            seen += 1;
            out.push('2');
            Ok(())
        })
        .unwrap();
        assert_eq!(out, "2 + 2");
        assert_eq!(seen, 2);
    }
}
