//! Color string parsing into RGB triples

use super::oklch::ColorResolver;

/// Canonical comparison form for a color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Rgb {
    /// Lowercase `#rrggbb` encoding
    pub(crate) fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Neutral fallback for unrecognized color syntax
pub(crate) const FALLBACK_RGB: Rgb = Rgb {
    r: 200,
    g: 200,
    b: 200,
};

/// Parse a `#abc` or `#aabbcc` hex string, case-insensitive
pub(super) fn parse_hex(value: &str) -> Option<Rgb> {
    let hex = value.strip_prefix('#')?;
    let nibble = |c: char| c.to_digit(16).map(|d| d as u8);
    let chars: Vec<char> = hex.chars().collect();
    match chars.len() {
        // Short form expands by doubling each nibble: #abc -> #aabbcc
        3 => Some(Rgb {
            r: nibble(chars[0])? * 17,
            g: nibble(chars[1])? * 17,
            b: nibble(chars[2])? * 17,
        }),
        6 => {
            let byte = |i: usize| Some((nibble(chars[i])? << 4) | nibble(chars[i + 1])?);
            Some(Rgb {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
            })
        }
        _ => None,
    }
}

/// Parse `rgb(r, g, b)` / `rgba(r, g, b, a)` with arbitrary whitespace.
/// Only the three leading integer components are captured; alpha is ignored.
fn parse_rgb_func(value: &str) -> Option<Rgb> {
    let lower = value.to_ascii_lowercase();
    let rest = lower
        .strip_prefix("rgba")
        .or_else(|| lower.strip_prefix("rgb"))?;
    let inner = rest
        .trim_start()
        .strip_prefix('(')?
        .trim_end()
        .strip_suffix(')')?;
    let mut parts = inner.split(',');
    let mut channel = || parts.next()?.trim().parse::<u8>().ok();
    Some(Rgb {
        r: channel()?,
        g: channel()?,
        b: channel()?,
    })
}

/// Parse any supported color string into an RGB triple.
///
/// Hex and `rgb()`/`rgba()` are handled directly; `oklch()` is delegated to
/// the resolver. Everything else (including `hsl()`) soft-fails to the
/// neutral default. This function never errors.
pub(crate) fn parse_to_rgb(value: &str, resolver: &dyn ColorResolver) -> Rgb {
    let trimmed = value.trim();
    if let Some(rgb) = parse_hex(trimmed) {
        return rgb;
    }
    if let Some(rgb) = parse_rgb_func(trimmed) {
        return rgb;
    }
    if trimmed
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("oklch("))
    {
        return resolver.resolve_to_rgb(trimmed).unwrap_or(FALLBACK_RGB);
    }
    FALLBACK_RGB
}

/// Relative luminance of a color in [0, 1], computed in linear sRGB
pub(crate) fn relative_luminance(rgb: Rgb) -> f64 {
    let lin = |c: u8| {
        let c = c as f64 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * lin(rgb.r) + 0.7152 * lin(rgb.g) + 0.0722 * lin(rgb.b)
}
