//! Palette configuration loading and merging

use serde_json::{Map, Value};
use std::fs;

/// Base design-system palette compiled into the binary
const BASE_PALETTE: &str = include_str!("palette/base.json");

/// The embedded base palette. The asset ships with the binary, so a parse
/// failure degrades to an empty dictionary rather than aborting.
pub(crate) fn base_palette() -> Map<String, Value> {
    match serde_json::from_str(BASE_PALETTE) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Read the optional project palette file.
///
/// The file is a JSON object; a top-level `"colors"` key is unwrapped if
/// present, otherwise the whole document is the color dictionary. Errors
/// are reported by the caller as warnings and processing continues with
/// the base palette.
pub(crate) fn load_custom_palette(path: &str) -> Result<Map<String, Value>, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("Cannot read {}: {}", path, e))?;
    let doc: Value =
        serde_json::from_str(&text).map_err(|e| format!("Invalid JSON in {}: {}", path, e))?;
    match doc {
        Value::Object(map) => match map.get("colors") {
            Some(Value::Object(colors)) => Ok(colors.clone()),
            Some(_) => Err(format!("\"colors\" in {} is not an object", path)),
            None => Ok(map),
        },
        _ => Err(format!("{} does not contain a JSON object", path)),
    }
}

/// Shallow top-level merge: custom keys replace base keys wholesale,
/// keeping the base key position for overridden families
pub(crate) fn merge_palettes(
    base: Map<String, Value>,
    custom: Map<String, Value>,
) -> Map<String, Value> {
    let mut merged = base;
    for (key, value) in custom {
        merged.insert(key, value);
    }
    merged
}
