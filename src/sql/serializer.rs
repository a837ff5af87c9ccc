//! Statement serializer
//!
//! Converts parsed statements into generic JSON documents. Serialization is
//! driven by the `Serialize` implementations the grammar crate derives for
//! every AST node, so new statement kinds need no changes here.
//!
//! Object keys come out sorted, which keeps documents for equal statements
//! byte-identical.

use serde::Serialize;
use serde_json::Value;

use super::error::SqlResult;

/// Serialize a value into a JSON document
pub fn to_document<T: Serialize + ?Sized>(value: &T) -> SqlResult<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Serialize a value into a compact JSON string
pub fn to_document_string<T: Serialize + ?Sized>(value: &T) -> SqlResult<String> {
    Ok(serde_json::to_string(&to_document(value)?)?)
}

/// Serialize a value into an indented JSON string
pub fn to_pretty_string<T: Serialize + ?Sized>(value: &T) -> SqlResult<String> {
    Ok(serde_json::to_string_pretty(&to_document(value)?)?)
}

/// Name of the variant of an externally tagged enum document
///
/// Struct and tuple variants serialize as `{"Variant": ...}`, unit variants
/// as `"Variant"`.
pub fn variant_name(document: &Value) -> Option<&str> {
    match document {
        Value::String(name) => Some(name.as_str()),
        Value::Object(map) if map.len() == 1 => map.keys().next().map(String::as_str),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sqlparser::dialect::MySqlDialect;
    use sqlparser::parser::Parser;

    #[derive(Serialize)]
    enum Shape {
        Point,
        Circle { radius: u32 },
        Polygon(Vec<(i32, i32)>),
    }

    #[test]
    fn test_variant_name() {
        assert_eq!(variant_name(&to_document(&Shape::Point).unwrap()), Some("Point"));
        let circle = to_document(&Shape::Circle { radius: 3 }).unwrap();
        assert_eq!(variant_name(&circle), Some("Circle"));
        let polygon = to_document(&Shape::Polygon(vec![(0, 0), (1, 1)])).unwrap();
        assert_eq!(variant_name(&polygon), Some("Polygon"));
        assert_eq!(variant_name(&json!({"a": 1, "b": 2})), None);
        assert_eq!(variant_name(&json!(42)), None);
    }

    #[test]
    fn test_nested_lists_keep_order() {
        let doc = to_document(&Shape::Polygon(vec![(1, 2), (3, 4)])).unwrap();
        assert_eq!(doc, json!({"Polygon": [[1, 2], [3, 4]]}));
    }

    #[test]
    fn test_statement_document() {
        let stmt = Parser::parse_sql(&MySqlDialect {}, "SELECT a FROM t").unwrap();
        let doc = to_document(&stmt[0]).unwrap();
        assert_eq!(variant_name(&doc), Some("Query"));
        assert!(doc.to_string().contains("\"value\":\"t\""));
    }

    #[test]
    fn test_deterministic_output() {
        let a = Parser::parse_sql(&MySqlDialect {}, "SELECT a, b FROM t WHERE a > 1").unwrap();
        let b = Parser::parse_sql(&MySqlDialect {}, "SELECT a, b FROM t WHERE a > 1").unwrap();
        assert_eq!(to_document_string(&a).unwrap(), to_document_string(&b).unwrap());
    }

    #[test]
    fn test_pretty_string_is_same_document() {
        let shape = Shape::Circle { radius: 7 };
        let pretty = to_pretty_string(&shape).unwrap();
        let parsed: Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(parsed, to_document(&shape).unwrap());
    }
}
