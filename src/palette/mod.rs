//! Palette flattening and color-relationship analysis

mod flatten;
mod nearest;
mod oklch;
mod parse;
mod related;

pub(crate) use flatten::{FlatColorEntry, flatten};
pub(crate) use oklch::{ColorResolver, OklchResolver};
pub(crate) use parse::{Rgb, parse_to_rgb, relative_luminance};
pub(crate) use related::{RelatedColor, related_colors};

#[cfg(test)]
mod tests;
