//! Nested color dictionary traversal

use serde::Serialize;
use serde_json::{Map, Value};

/// One addressable color from the flattened dictionary
#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct FlatColorEntry {
    /// Dot-joined path from the dictionary root
    pub(crate) name: String,
    /// Original color string, untouched
    pub(crate) value: String,
    /// Ordered path segments
    pub(crate) keys: Vec<String>,
}

/// What a dictionary node can be, decided once per node
enum Node<'a> {
    Leaf(&'a str),
    Nested(&'a Map<String, Value>),
    Other,
}

fn classify(value: &Value) -> Node<'_> {
    match value {
        Value::String(s) => Node::Leaf(s),
        Value::Object(map) => Node::Nested(map),
        _ => Node::Other,
    }
}

/// Flatten a nested color dictionary depth-first, preserving key order.
/// String leaves become entries, nested objects are recursed into without
/// emitting an entry themselves, and any other value type is skipped.
pub(crate) fn flatten(dict: &Map<String, Value>) -> Vec<FlatColorEntry> {
    let mut entries = Vec::new();
    walk(dict, &mut Vec::new(), &mut entries);
    entries
}

fn walk(map: &Map<String, Value>, path: &mut Vec<String>, out: &mut Vec<FlatColorEntry>) {
    for (key, value) in map {
        path.push(key.clone());
        match classify(value) {
            Node::Leaf(color) => out.push(FlatColorEntry {
                name: path.join("."),
                value: color.to_string(),
                keys: path.clone(),
            }),
            Node::Nested(nested) => walk(nested, path, out),
            Node::Other => {}
        }
        path.pop();
    }
}
