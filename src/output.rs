use crate::palette::{ColorResolver, FlatColorEntry, RelatedColor, Rgb, parse_to_rgb};
use colored::*;

const NAME_WIDTH: usize = 32;
const RULE_WIDTH: usize = 60;

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

/// Truecolor block showing the color itself; honors --no-color
fn swatch(rgb: Rgb) -> ColoredString {
    "  ".on_truecolor(rgb.r, rgb.g, rgb.b)
}

fn print_rule() {
    println!("{}", "-".repeat(RULE_WIDTH));
}

pub(crate) fn print_palette_table(entries: &[FlatColorEntry], resolver: &dyn ColorResolver) {
    println!("Palette:");
    print_rule();
    println!("   {:<NAME_WIDTH$} Value", "Reference");
    print_rule();
    for entry in entries {
        let rgb = parse_to_rgb(&entry.value, resolver);
        println!("{} {:<NAME_WIDTH$} {}", swatch(rgb), entry.name, entry.value);
    }
    print_rule();
    println!("Total: {} colors", entries.len());
}

pub(crate) fn print_related_report(
    source: &str,
    related: &[RelatedColor],
    resolver: &dyn ColorResolver,
) {
    let source_rgb = parse_to_rgb(source, resolver);
    println!("Related colors for {} {}:", swatch(source_rgb), source);
    print_rule();
    println!(
        "   {:<14} {:<22} Nearest palette color",
        "Suggestion", "Value"
    );
    print_rule();
    for r in related {
        let rgb = parse_to_rgb(&r.value, resolver);
        let nearest = match &r.nearest {
            Some(n) => format!("{} ({})", n.name, n.value),
            None => "-".to_string(),
        };
        println!("{} {:<14} {:<22} {}", swatch(rgb), r.label, r.value, nearest);
    }
    print_rule();
}

pub(crate) fn print_legend() {
    println!("Complementary: opposite side of the color wheel (channel inversion for hex)");
    println!("Triadic: two colors evenly spaced around the wheel");
    println!("Analogous: neighboring hues on either side");
    println!("Nearest: closest palette entry by RGB distance");
}
