//! Chart rendering for palette overview visualization

mod colors;
mod overview;

pub(crate) use overview::render_overview_chart;

use crate::palette::{ColorResolver, FlatColorEntry, parse_to_rgb, relative_luminance};

/// Aggregated chart data for one top-level color family
pub(crate) struct FamilySummary {
    pub(crate) name: String,
    pub(crate) count: usize,
    /// Mean relative luminance of the family's colors, in percent
    pub(crate) mean_luminance_pct: f64,
}

/// Group flat entries by their first path segment, preserving the order of
/// first appearance. Top-level colors without shades form single-entry
/// families of their own.
pub(crate) fn summarize_families(
    entries: &[FlatColorEntry],
    resolver: &dyn ColorResolver,
) -> Vec<FamilySummary> {
    let mut families: Vec<(String, Vec<f64>)> = Vec::new();
    for entry in entries {
        let family = entry.keys.first().cloned().unwrap_or_default();
        let luminance = relative_luminance(parse_to_rgb(&entry.value, resolver));
        match families.iter_mut().find(|(name, _)| *name == family) {
            Some((_, values)) => values.push(luminance),
            None => families.push((family, vec![luminance])),
        }
    }
    families
        .into_iter()
        .map(|(name, values)| {
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            FamilySummary {
                name,
                count: values.len(),
                mean_luminance_pct: mean * 100.0,
            }
        })
        .collect()
}
