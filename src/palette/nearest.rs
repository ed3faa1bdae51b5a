//! RGB distance and nearest-palette lookup

use super::flatten::FlatColorEntry;
use super::oklch::ColorResolver;
use super::parse::{Rgb, parse_to_rgb};

/// Closest palette entry for a target color
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Nearest {
    pub(crate) value: String,
    pub(crate) name: String,
}

/// Euclidean distance in the RGB cube, range [0, ~441.67]
pub(crate) fn distance(a: Rgb, b: Rgb) -> f64 {
    let dr = a.r as f64 - b.r as f64;
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Linear scan for the palette entry closest to `target`.
///
/// The comparison is strict, so the first entry at the minimum distance
/// wins and insertion order breaks ties. An empty palette yields `None`.
pub(crate) fn nearest(
    target: &str,
    palette: &[FlatColorEntry],
    resolver: &dyn ColorResolver,
) -> Option<Nearest> {
    let target_rgb = parse_to_rgb(target, resolver);
    let mut best: Option<(f64, &FlatColorEntry)> = None;
    for entry in palette {
        let dist = distance(target_rgb, parse_to_rgb(&entry.value, resolver));
        if best.is_none_or(|(min, _)| dist < min) {
            best = Some((dist, entry));
        }
    }
    best.map(|(_, entry)| Nearest {
        value: entry.value.clone(),
        name: entry.name.clone(),
    })
}
