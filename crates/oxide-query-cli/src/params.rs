//! JSON parameter documents to AST nodes.
//!
//! Scalars and arrays map to literals and sequences. Objects with a single
//! tag key build the other node kinds:
//!
//! - `{"table": "users"}`, `{"column": "u.id"}`, `{"identifier": "a.b"}`
//! - `{"raw": "COUNT(*)"}`
//! - `{"expression": {"template": "? + ?", "params": [1, 2], "named": {}}}`

use anyhow::{Context, Result, anyhow, bail};
use serde_json::{Map, Value as Json};

use oxide_query::{Column, Expression, Identifier, Table, Value};

/// Converts one JSON value into a node.
pub fn to_value(json: &Json) -> Result<Value> {
    Ok(match json {
        Json::Null => Value::NULL,
        Json::Bool(b) => Value::from(*b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Value::from(i),
            None => Value::from(
                n.as_f64()
                    .ok_or_else(|| anyhow!("unrepresentable number {n}"))?,
            ),
        },
        Json::String(s) => Value::from(s.as_str()),
        Json::Array(items) => Value::Sequence(to_values(items)?),
        Json::Object(map) => tagged(map)?,
    })
}

/// Converts a JSON array into positional parameters.
pub fn to_values(items: &[Json]) -> Result<Vec<Value>> {
    items.iter().map(to_value).collect()
}

/// Builds an expression from a template and optional JSON parameter
/// documents.
pub fn expression(template: &str, params: Option<&str>, named: Option<&str>) -> Result<Expression> {
    let positional = match params {
        Some(doc) => {
            let json: Json = serde_json::from_str(doc).context("invalid --params document")?;
            let Json::Array(items) = json else {
                bail!("--params must be a JSON array");
            };
            to_values(&items)?
        }
        None => Vec::new(),
    };

    let mut expr = Expression::with_params(template, positional);
    if let Some(doc) = named {
        let json: Json = serde_json::from_str(doc).context("invalid --named document")?;
        let Json::Object(map) = json else {
            bail!("--named must be a JSON object");
        };
        expr = bind_named(expr, &map)?;
    }
    Ok(expr)
}

fn bind_named(expr: Expression, map: &Map<String, Json>) -> Result<Expression> {
    map.iter().try_fold(expr, |expr, (name, json)| {
        Ok(expr.bind_named(name, to_value(json)?))
    })
}

fn tagged(map: &Map<String, Json>) -> Result<Value> {
    let mut entries = map.iter();
    let (Some((tag, body)), None) = (entries.next(), entries.next()) else {
        bail!("node objects take exactly one tag key");
    };

    let text = || {
        body.as_str()
            .ok_or_else(|| anyhow!("'{tag}' expects a string"))
    };

    Ok(match tag.as_str() {
        "table" => Value::from(Table::new(text()?)),
        "column" => Value::from(Column::new(text()?)),
        "identifier" => Value::from(Identifier::new(text()?)),
        "raw" => Value::from(Expression::raw(text()?)),
        "expression" => {
            let Json::Object(fields) = body else {
                bail!("'expression' expects an object");
            };
            let template = fields
                .get("template")
                .and_then(Json::as_str)
                .ok_or_else(|| anyhow!("'expression' needs a string 'template'"))?;
            let positional = match fields.get("params") {
                Some(Json::Array(items)) => to_values(items)?,
                Some(_) => bail!("'params' must be an array"),
                None => Vec::new(),
            };
            let expr = Expression::with_params(template, positional);
            let expr = match fields.get("named") {
                Some(Json::Object(named)) => bind_named(expr, named)?,
                Some(_) => bail!("'named' must be an object"),
                None => expr,
            };
            Value::from(expr)
        }
        other => bail!("unknown node tag '{other}'"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxide_query::dialect::GenericDialect;
    use oxide_query::{SqlValue, compile};
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(to_value(&json!(null)).unwrap(), Value::NULL);
        assert_eq!(to_value(&json!(true)).unwrap(), Value::from(true));
        assert_eq!(to_value(&json!(42)).unwrap(), Value::from(42_i64));
        assert_eq!(
            to_value(&json!(1.5)).unwrap(),
            Value::Literal(SqlValue::Float(1.5))
        );
        assert_eq!(to_value(&json!("x")).unwrap(), Value::from("x"));
    }

    #[test]
    fn test_tagged_nodes() {
        assert_eq!(
            to_value(&json!({"table": "users"})).unwrap(),
            Value::from(Table::new("users"))
        );
        assert_eq!(
            to_value(&json!({"column": "u.id"})).unwrap(),
            Value::from(Column::new("u.id"))
        );
        assert!(to_value(&json!({"table": 1})).is_err());
        assert!(to_value(&json!({"table": "a", "column": "b"})).is_err());
        assert!(to_value(&json!({"nope": "a"})).is_err());
    }

    #[test]
    fn test_nested_expression() {
        let expr = expression(
            "SELECT * FROM ? WHERE ? IN (?)",
            Some(r#"[{"table": "t"}, {"column": "id"}, {"expression": {"template": "? + ?", "params": [1, 2]}}]"#),
            None,
        )
        .unwrap();
        assert_eq!(
            compile(&Value::from(expr), &GenericDialect).unwrap(),
            r#"SELECT * FROM "t" WHERE "id" IN (1 + 2)"#
        );
    }

    #[test]
    fn test_named_document() {
        let expr = expression("? = :v", Some(r#"[{"column": "a"}]"#), Some(r#"{"v": [1, 2]}"#))
            .unwrap();
        assert_eq!(
            compile(&Value::from(expr), &GenericDialect).unwrap(),
            r#""a" = 1, 2"#
        );
    }

    #[test]
    fn test_rejects_wrong_document_shapes() {
        assert!(expression("?", Some("{}"), None).is_err());
        assert!(expression("?", None, Some("[]")).is_err());
        assert!(expression("?", Some("not json"), None).is_err());
    }
}
