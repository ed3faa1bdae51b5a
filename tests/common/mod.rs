//! Common test utilities

use std::fs;
use std::path::{Path, PathBuf};

/// Write a palette config JSON file into the given directory
pub fn write_config(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write palette config");
    path
}

/// Flat overrides: the whole document is the color dictionary
pub const BRAND_OVERRIDES: &str =
    r##"{ "brand": { "primary": "#123456", "secondary": "#abcdef" } }"##;

/// Overrides wrapped under a top-level "colors" key, other keys ignored
pub const WRAPPED_OVERRIDES: &str =
    r#"{ "name": "demo project", "colors": { "brand": { "primary": "#654321" } } }"#;

/// Replaces the base blue family wholesale (shallow merge)
pub const BLUE_REPLACEMENT: &str = r#"{ "blue": { "500": "#0000ff" } }"#;
