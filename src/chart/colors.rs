//! Color definitions for the overview chart

pub(super) const COLOR_BACKGROUND: &str = "#0A0A0C"; // Near black
pub(super) const COLOR_TEXT: &str = "#FFFFFF"; // White
pub(super) const COLOR_GRID: &str = "#505050"; // Grid lines

/// Bar gradient for the per-family share series
pub(super) const BAR_TOP: &str = "#68B4FF"; // Blue
pub(super) const BAR_BOTTOM: &str = "#1888F8"; // Vivid blue

/// Overlay line for mean lightness
pub(super) const LINE_LIGHTNESS: &str = "#FFD858"; // Warm yellow
