//! Builders for the widget's style-spec expressions. The widget consumes
//! these as plain JSON arrays; keeping them behind helpers pins the shapes
//! down in one place.

use serde_json::{json, Value};

/// `["==", ["geometry-type"], kind]`
pub fn geometry_is(kind: &str) -> Value {
    json!(["==", ["geometry-type"], kind])
}

/// `["get", key]` — evaluates to nothing (not an error) when the property
/// is absent, which is what the POI icon lookup relies on.
pub fn get(key: &str) -> Value {
    json!(["get", key])
}

/// `["==", ["get", key], value]`
pub fn equals(key: &str, value: &str) -> Value {
    json!(["==", ["get", key], value])
}

/// `["!=", ["get", key], value]`
pub fn not_equals(key: &str, value: &str) -> Value {
    json!(["!=", ["get", key], value])
}

/// `["all", clause, ...]`
pub fn all(clauses: &[Value]) -> Value {
    let mut expression = vec![Value::from("all")];
    expression.extend(clauses.iter().cloned());
    Value::Array(expression)
}
