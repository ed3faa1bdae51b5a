//! Unit tests for palette module

use serde_json::{Map, Value, json};

use super::flatten::{FlatColorEntry, flatten};
use super::nearest::{distance, nearest};
use super::oklch::{ColorResolver, OklchResolver};
use super::parse::{FALLBACK_RGB, Rgb, parse_to_rgb, relative_luminance};
use super::related::related_colors;

/// Resolver stub returning a fixed answer, for exercising the seam
/// without real color math
struct StubResolver(Option<Rgb>);

impl ColorResolver for StubResolver {
    fn resolve_to_rgb(&self, _value: &str) -> Option<Rgb> {
        self.0
    }
}

fn as_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("Expected JSON object, got {}", other),
    }
}

fn entry(name: &str, value: &str) -> FlatColorEntry {
    FlatColorEntry {
        name: name.to_string(),
        value: value.to_string(),
        keys: name.split('.').map(str::to_string).collect(),
    }
}

// =============================================================================
// Flattening
// =============================================================================

#[test]
fn test_flatten_nested_ordering() {
    let dict = as_map(json!({"a": {"b": "#fff", "c": {"d": "#000"}}}));
    let entries = flatten(&dict);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "a.b");
    assert_eq!(entries[0].value, "#fff");
    assert_eq!(entries[0].keys, vec!["a", "b"]);
    assert_eq!(entries[1].name, "a.c.d");
    assert_eq!(entries[1].value, "#000");
    assert_eq!(entries[1].keys, vec!["a", "c", "d"]);
}

#[test]
fn test_flatten_preserves_insertion_order() {
    let dict = as_map(json!({"zeta": "#111111", "alpha": "#222222", "mid": {"z": "#333333", "a": "#444444"}}));
    let names: Vec<String> = flatten(&dict).into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid.z", "mid.a"]);
}

#[test]
fn test_flatten_skips_non_color_values() {
    let dict = as_map(json!({
        "good": "#abcdef",
        "number": 7,
        "null": null,
        "list": ["#fff", "#000"],
        "flag": true
    }));
    let entries = flatten(&dict);
    assert_eq!(entries.len(), 1, "Only the string leaf should survive");
    assert_eq!(entries[0].name, "good");
}

#[test]
fn test_flatten_empty_dictionary() {
    let entries = flatten(&Map::new());
    assert!(entries.is_empty());
}

#[test]
fn test_flatten_no_entry_for_intermediate_nodes() {
    let dict = as_map(json!({"outer": {"inner": {"leaf": "#123456"}}}));
    let entries = flatten(&dict);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "outer.inner.leaf");
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn test_parse_six_digit_hex() {
    let rgb = parse_to_rgb("#3366ff", &OklchResolver);
    assert_eq!(rgb, Rgb { r: 0x33, g: 0x66, b: 0xff });
}

#[test]
fn test_parse_hex_case_insensitive() {
    let lower = parse_to_rgb("#aabbcc", &OklchResolver);
    let upper = parse_to_rgb("#AABBCC", &OklchResolver);
    assert_eq!(lower, upper);
}

#[test]
fn test_parse_three_digit_hex_expands() {
    let rgb = parse_to_rgb("#abc", &OklchResolver);
    assert_eq!(rgb, Rgb { r: 0xaa, g: 0xbb, b: 0xcc });
}

#[test]
fn test_parse_hex_round_trip() {
    for hex in ["#000000", "#ffffff", "#3366ff", "#0a1b2c"] {
        let rgb = parse_to_rgb(hex, &OklchResolver);
        assert_eq!(rgb.to_hex(), hex, "Round trip failed for {}", hex);
    }
}

#[test]
fn test_parse_rgb_function() {
    let rgb = parse_to_rgb("rgb(10,20,30)", &OklchResolver);
    assert_eq!(rgb, Rgb { r: 10, g: 20, b: 30 });
}

#[test]
fn test_parse_rgb_whitespace_variance() {
    let rgb = parse_to_rgb("RGB(  10 ,   20 ,30  )", &OklchResolver);
    assert_eq!(rgb, Rgb { r: 10, g: 20, b: 30 });
}

#[test]
fn test_parse_rgba_ignores_alpha() {
    let rgb = parse_to_rgb("rgba(1, 2, 3, 0.5)", &OklchResolver);
    assert_eq!(rgb, Rgb { r: 1, g: 2, b: 3 });
}

#[test]
fn test_parse_unrecognized_falls_back() {
    for value in ["hsl(120, 50%, 50%)", "rebeccapurple", "", "#12345", "#gggggg"] {
        assert_eq!(
            parse_to_rgb(value, &OklchResolver),
            FALLBACK_RGB,
            "Expected neutral default for {:?}",
            value
        );
    }
}

#[test]
fn test_parse_oklch_goes_through_resolver() {
    let stub = StubResolver(Some(Rgb { r: 1, g: 2, b: 3 }));
    let rgb = parse_to_rgb("oklch(0.5 0.1 200)", &stub);
    assert_eq!(rgb, Rgb { r: 1, g: 2, b: 3 });
}

#[test]
fn test_parse_oklch_resolver_failure_falls_back() {
    let stub = StubResolver(None);
    let rgb = parse_to_rgb("oklch(0.5 0.1 200)", &stub);
    assert_eq!(rgb, FALLBACK_RGB);
}

// =============================================================================
// OKLCH resolution
// =============================================================================

#[test]
fn test_oklch_white() {
    let rgb = OklchResolver.resolve_to_rgb("oklch(1 0 0)").unwrap();
    assert!(rgb.r >= 254 && rgb.g >= 254 && rgb.b >= 254, "Expected ~white, got {:?}", rgb);
}

#[test]
fn test_oklch_black() {
    let rgb = OklchResolver.resolve_to_rgb("oklch(0 0 0)").unwrap();
    assert_eq!(rgb, Rgb { r: 0, g: 0, b: 0 });
}

#[test]
fn test_oklch_red_hue() {
    // sRGB red is roughly oklch(0.628 0.258 29.23)
    let rgb = OklchResolver.resolve_to_rgb("oklch(0.628 0.258 29.23)").unwrap();
    assert!(rgb.r > 240, "Red channel should dominate, got {:?}", rgb);
    assert!(rgb.g < 40 && rgb.b < 40, "Green/blue should be low, got {:?}", rgb);
}

#[test]
fn test_oklch_rejects_malformed() {
    assert!(OklchResolver.resolve_to_rgb("oklch(0.5 0.1)").is_none());
    assert!(OklchResolver.resolve_to_rgb("oklch(0.5 0.1 200 1)").is_none());
    assert!(OklchResolver.resolve_to_rgb("oklch(a b c)").is_none());
    assert!(OklchResolver.resolve_to_rgb("oklch 0.5 0.1 200").is_none());
}

// =============================================================================
// Distance and nearest match
// =============================================================================

#[test]
fn test_distance_identity() {
    let a = Rgb { r: 12, g: 200, b: 99 };
    assert_eq!(distance(a, a), 0.0);
}

#[test]
fn test_distance_symmetry() {
    let a = Rgb { r: 0, g: 50, b: 250 };
    let b = Rgb { r: 255, g: 0, b: 13 };
    assert_eq!(distance(a, b), distance(b, a));
}

#[test]
fn test_distance_known_value() {
    // 3-4-5 triangle in the RG plane
    let a = Rgb { r: 0, g: 0, b: 0 };
    let b = Rgb { r: 3, g: 4, b: 0 };
    assert!((distance(a, b) - 5.0).abs() < 1e-12);
}

#[test]
fn test_nearest_basic() {
    let palette = vec![entry("black", "#010101"), entry("white", "#ffffff")];
    let hit = nearest("#000000", &palette, &OklchResolver).unwrap();
    assert_eq!(hit.name, "black");
    assert_eq!(hit.value, "#010101");
}

#[test]
fn test_nearest_tie_break_first_wins() {
    // Both entries are exactly 16 away from the target
    let palette = vec![entry("low", "#000000"), entry("high", "#200000")];
    let hit = nearest("#100000", &palette, &OklchResolver).unwrap();
    assert_eq!(hit.name, "low", "First entry at minimum distance must win");
}

#[test]
fn test_nearest_empty_palette() {
    assert!(nearest("#123456", &[], &OklchResolver).is_none());
}

// =============================================================================
// Related colors
// =============================================================================

#[test]
fn test_related_hex_fixed_order_and_values() {
    let related = related_colors("#3366ff", &[], &OklchResolver);
    let labels: Vec<&str> = related.iter().map(|r| r.label).collect();
    assert_eq!(
        labels,
        vec!["Complementary", "Triadic 1", "Triadic 2", "Analogous 1", "Analogous 2"]
    );
    assert_eq!(related[0].value, "#cc9900");
    assert_eq!(related[1].value, "#66ff33");
    assert_eq!(related[2].value, "#ff3366");
    assert_eq!(related[3].value, "#1566ff"); // 0x33 - 30 = 0x15
    assert_eq!(related[4].value, "#3348ff"); // 0x66 - 30 = 0x48
}

#[test]
fn test_related_hex_analogous_floors_at_zero() {
    let related = related_colors("#0a0aff", &[], &OklchResolver);
    assert_eq!(related[3].value, "#000aff");
    assert_eq!(related[4].value, "#0a00ff");
}

#[test]
fn test_related_short_hex() {
    let related = related_colors("#fff", &[], &OklchResolver);
    assert_eq!(related.len(), 5);
    assert_eq!(related[0].value, "#000000");
}

#[test]
fn test_related_unsupported_format_is_empty() {
    assert!(related_colors("rgb(10,20,30)", &[], &OklchResolver).is_empty());
    assert!(related_colors("hsl(10, 20%, 30%)", &[], &OklchResolver).is_empty());
    assert!(related_colors("not-a-color", &[], &OklchResolver).is_empty());
}

#[test]
fn test_related_oklch_hue_rotation() {
    let related = related_colors("oklch(0.65 0.15 350)", &[], &OklchResolver);
    assert_eq!(related.len(), 5);
    assert_eq!(related[0].value, "oklch(0.65 0.15 170)");
    assert_eq!(related[1].value, "oklch(0.65 0.15 110)");
    assert_eq!(related[2].value, "oklch(0.65 0.15 230)");
    assert_eq!(related[3].value, "oklch(0.65 0.15 20)");
    assert_eq!(related[4].value, "oklch(0.65 0.15 320)");
}

#[test]
fn test_related_oklch_negative_wrap() {
    // Analogous 2 is -30, which must wrap into [0, 360)
    let related = related_colors("oklch(0.7 0.1 10)", &[], &OklchResolver);
    assert_eq!(related[4].value, "oklch(0.7 0.1 340)");
}

#[test]
fn test_related_oklch_keeps_lightness_chroma_verbatim() {
    // Trailing zeros in L and C must not be renormalized
    let related = related_colors("oklch(0.70 0.10 40)", &[], &OklchResolver);
    assert_eq!(related[0].value, "oklch(0.70 0.10 220)");
}

#[test]
fn test_related_attaches_nearest_palette_match() {
    let palette = vec![entry("amber", "#cc9a02"), entry("sky", "#3366fe")];
    let related = related_colors("#3366ff", &palette, &OklchResolver);
    let comp = &related[0];
    assert_eq!(comp.value, "#cc9900");
    let hit = comp.nearest.as_ref().unwrap();
    assert_eq!(hit.name, "amber");
    assert_eq!(hit.value, "#cc9a02");
}

#[test]
fn test_related_empty_palette_has_no_nearest() {
    let related = related_colors("#3366ff", &[], &OklchResolver);
    assert!(related.iter().all(|r| r.nearest.is_none()));
}

// =============================================================================
// Luminance
// =============================================================================

#[test]
fn test_relative_luminance_extremes() {
    let white = relative_luminance(Rgb { r: 255, g: 255, b: 255 });
    let black = relative_luminance(Rgb { r: 0, g: 0, b: 0 });
    assert!((white - 1.0).abs() < 1e-9, "White should be 1.0, got {}", white);
    assert!(black.abs() < 1e-12, "Black should be 0.0, got {}", black);
}

#[test]
fn test_relative_luminance_green_dominates() {
    let g = relative_luminance(Rgb { r: 0, g: 255, b: 0 });
    let b = relative_luminance(Rgb { r: 0, g: 0, b: 255 });
    assert!(g > b, "Green ({}) should outweigh blue ({})", g, b);
}
