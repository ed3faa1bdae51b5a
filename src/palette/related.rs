//! Complementary / triadic / analogous color derivation

use super::flatten::FlatColorEntry;
use super::nearest::{Nearest, nearest};
use super::oklch::{ColorResolver, split_oklch};
use super::parse::{Rgb, parse_hex};

/// A derived color suggestion with its closest palette counterpart
#[derive(Clone, Debug)]
pub(crate) struct RelatedColor {
    pub(crate) label: &'static str,
    pub(crate) value: String,
    pub(crate) nearest: Option<Nearest>,
}

/// Derive the five related colors for a hex or OKLCH color and attach the
/// nearest palette match to each. Output order is always Complementary,
/// Triadic 1, Triadic 2, Analogous 1, Analogous 2. Unsupported formats
/// (plain `rgb()`, `hsl()`, ...) yield an empty vec.
pub(crate) fn related_colors(
    value: &str,
    palette: &[FlatColorEntry],
    resolver: &dyn ColorResolver,
) -> Vec<RelatedColor> {
    let trimmed = value.trim();
    let candidates = if let Some(rgb) = parse_hex(trimmed) {
        hex_related(rgb)
    } else if let Some((l, c, h)) = split_oklch(trimmed) {
        oklch_related(l, c, h)
    } else {
        return Vec::new();
    };

    candidates
        .into_iter()
        .map(|(label, derived)| RelatedColor {
            nearest: nearest(&derived, palette, resolver),
            label,
            value: derived,
        })
        .collect()
}

fn hex_related(rgb: Rgb) -> Vec<(&'static str, String)> {
    let Rgb { r, g, b } = rgb;
    vec![
        // Channel-wise inversion
        (
            "Complementary",
            Rgb {
                r: 255 - r,
                g: 255 - g,
                b: 255 - b,
            }
            .to_hex(),
        ),
        // Channel rotations
        ("Triadic 1", Rgb { r: g, g: b, b: r }.to_hex()),
        ("Triadic 2", Rgb { r: b, g: r, b: g }.to_hex()),
        // One channel pulled down, floored at 0
        (
            "Analogous 1",
            Rgb {
                r: r.saturating_sub(30),
                g,
                b,
            }
            .to_hex(),
        ),
        (
            "Analogous 2",
            Rgb {
                r,
                g: g.saturating_sub(30),
                b,
            }
            .to_hex(),
        ),
    ]
}

/// Hue rotations with lightness and chroma carried over verbatim
fn oklch_related(l: &str, c: &str, h: f64) -> Vec<(&'static str, String)> {
    let rotate = |offset: f64| {
        let hue = ((h + offset) % 360.0 + 360.0) % 360.0;
        format!("oklch({l} {c} {hue})")
    };
    vec![
        ("Complementary", rotate(180.0)),
        ("Triadic 1", rotate(120.0)),
        ("Triadic 2", rotate(240.0)),
        ("Analogous 1", rotate(30.0)),
        ("Analogous 2", rotate(-30.0)),
    ]
}
