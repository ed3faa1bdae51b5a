//! Artifact generation: JSON export and interactive HTML chart

use crate::palette::FlatColorEntry;
use serde_json::{Map, Value};
use std::fs;

const HTML_TEMPLATE: &str = include_str!("template.html");

/// Write the merged color dictionary as pretty-printed JSON,
/// key order preserved
pub(crate) fn write_json(path: &str, colors: &Map<String, Value>) -> Result<(), String> {
    let json = serde_json::to_string_pretty(colors)
        .map_err(|e| format!("Failed to serialize palette: {}", e))?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path, e))
}

/// Write the self-contained interactive color chart. The embedded template
/// gets the merged dictionary and the flattened entry list substituted in;
/// everything else is static.
pub(crate) fn write_html(
    path: &str,
    entries: &[FlatColorEntry],
    colors: &Map<String, Value>,
) -> Result<(), String> {
    let color_json = serde_json::to_string_pretty(colors)
        .map_err(|e| format!("Failed to serialize palette: {}", e))?;
    let color_list = serde_json::to_string(entries)
        .map_err(|e| format!("Failed to serialize color list: {}", e))?;
    let html = HTML_TEMPLATE
        .replace("__COLOR_JSON__", &color_json)
        .replace("__COLOR_LIST__", &color_list);
    fs::write(path, html).map_err(|e| format!("Failed to write {}: {}", path, e))
}
