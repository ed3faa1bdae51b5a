//! OKLCH resolution behind a narrow capability seam

use super::parse::Rgb;

/// Resolves color strings the plain parser cannot handle on its own.
/// `None` means the string could not be resolved; callers fall back to
/// the neutral default triple.
pub(crate) trait ColorResolver {
    fn resolve_to_rgb(&self, value: &str) -> Option<Rgb>;
}

/// Production resolver: OKLCH -> Oklab -> linear sRGB -> sRGB,
/// using Björn Ottosson's matrices.
pub(crate) struct OklchResolver;

impl ColorResolver for OklchResolver {
    fn resolve_to_rgb(&self, value: &str) -> Option<Rgb> {
        let (l, c, h) = split_oklch(value)?;
        let l: f32 = l.parse().ok()?;
        let c: f32 = c.parse().ok()?;
        let (r, g, b) = oklch_to_srgb(l, c, h as f32);
        Some(Rgb {
            r: quantize(r),
            g: quantize(g),
            b: quantize(b),
        })
    }
}

/// Match `oklch(L C H)` with space-separated numeric components.
/// Returns the L and C substrings verbatim plus the parsed hue, so callers
/// that re-emit OKLCH strings keep lightness and chroma untouched.
pub(super) fn split_oklch(value: &str) -> Option<(&str, &str, f64)> {
    let prefix = value.get(..6)?;
    if !prefix.eq_ignore_ascii_case("oklch(") {
        return None;
    }
    let inner = value.get(6..)?.strip_suffix(')')?;
    let numeric = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit() || c == '.');

    let mut parts = inner.split_whitespace();
    let l = parts.next().filter(|s| numeric(s))?;
    let c = parts.next().filter(|s| numeric(s))?;
    let h = parts.next().filter(|s| numeric(s))?;
    if parts.next().is_some() {
        return None;
    }
    Some((l, c, h.parse().ok()?))
}

fn quantize(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn oklch_to_srgb(l: f32, c: f32, h: f32) -> (f32, f32, f32) {
    // OKLCH -> Oklab
    let h_rad = h.to_radians();
    let a = c * h_rad.cos();
    let b = c * h_rad.sin();

    // Oklab -> LMS (undo the cube root)
    let l_ = l + 0.396_337_78 * a + 0.215_803_76 * b;
    let m_ = l - 0.105_561_346 * a - 0.063_854_17 * b;
    let s_ = l - 0.089_484_18 * a - 1.291_485_5 * b;

    let l3 = l_ * l_ * l_;
    let m3 = m_ * m_ * m_;
    let s3 = s_ * s_ * s_;

    // LMS -> linear sRGB
    let r = 4.076_741_7 * l3 - 3.307_711_6 * m3 + 0.230_969_94 * s3;
    let g = -1.268_438 * l3 + 2.609_757_4 * m3 - 0.341_319_38 * s3;
    let b = -0.004_196_086_3 * l3 - 0.703_418_6 * m3 + 1.707_614_7 * s3;

    (linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
}

/// Apply sRGB gamma to one linear component. Out-of-gamut values are
/// clamped later during quantization.
fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
