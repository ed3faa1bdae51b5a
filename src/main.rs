mod chart;
mod config;
mod export;
mod output;
mod palette;

use clap::Parser;
use serde_json::{Map, Value};

use output::{
    print_error, print_legend, print_palette_table, print_related_report, print_warning,
};
use palette::OklchResolver;

#[derive(Parser)]
#[command(
    name = "palchart",
    version,
    about = "Design-system palette exporter with color chart generation and related-color analysis",
    after_help = "Examples:
  palchart                                  Export palette with default paths
  palchart --config brand.json              Merge project palette overrides
  palchart --json out/colors.json --html out/chart.html
  palchart --image overview.png             Also render a PNG overview chart
  palchart --related \"#3366ff\"              Suggest related palette colors
  palchart --no-color                       Disable colored output"
)]
struct Args {
    /// Project palette overrides (JSON). A missing or invalid file falls
    /// back to the base palette with a warning.
    #[arg(short, long, default_value = "palette.config.json", value_name = "PATH")]
    config: String,

    /// Output path for the merged palette JSON
    #[arg(long, default_value = "colors.json", value_name = "PATH")]
    json: String,

    /// Output path for the interactive HTML color chart
    #[arg(long, default_value = "color-chart.html", value_name = "PATH")]
    html: String,

    /// Render a palette overview chart as PNG image
    #[arg(long, value_name = "PATH")]
    image: Option<String>,

    /// Print related-color suggestions for a color instead of exporting
    #[arg(short, long, value_name = "COLOR")]
    related: Option<String>,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// Load the base palette and merge in the optional project overrides.
/// Configuration problems degrade to the base palette with a warning.
fn load_palette(config_path: &str) -> Map<String, Value> {
    let base = config::base_palette();
    match config::load_custom_palette(config_path) {
        Ok(custom) => config::merge_palettes(base, custom),
        Err(e) => {
            print_warning(&format!("{}; using base palette only", e));
            base
        }
    }
}

// Mode: export artifacts and print the summary table
fn run_export(args: &Args) {
    let resolver = OklchResolver;
    let merged = load_palette(&args.config);
    let entries = palette::flatten(&merged);

    print_palette_table(&entries, &resolver);

    if let Err(e) = export::write_json(&args.json, &merged) {
        print_error(&e);
        std::process::exit(1);
    }
    if let Err(e) = export::write_html(&args.html, &entries, &merged) {
        print_error(&e);
        std::process::exit(1);
    }

    if !args.quiet {
        println!();
        println!("Palette JSON written to: {}", args.json);
        println!("HTML color chart written to: {}", args.html);
    }

    // Output chart image if requested
    if let Some(ref path) = args.image {
        let families = chart::summarize_families(&entries, &resolver);
        if let Err(e) = chart::render_overview_chart(&families, path) {
            print_error(&e);
        } else {
            eprintln!("Chart saved to: {}", path);
        }
    }
}

// Mode: related-color suggestions for a single color
fn run_related(color: &str, config_path: &str, quiet: bool) {
    let resolver = OklchResolver;
    let merged = load_palette(config_path);
    let entries = palette::flatten(&merged);

    let related = palette::related_colors(color, &entries, &resolver);
    if related.is_empty() {
        println!(
            "No related colors for {} (unsupported format; use hex or oklch)",
            color
        );
        return;
    }

    print_related_report(color, &related, &resolver);

    if !quiet {
        println!();
        print_legend();
    }
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    // Validate option combinations
    if args.related.is_some() && args.image.is_some() {
        print_error("--image cannot be used with --related");
        std::process::exit(1);
    }

    // Validate image output path
    if let Some(ref path) = args.image {
        use std::path::Path;
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            print_error(&format!("Directory does not exist: {}", parent.display()));
            std::process::exit(1);
        }
    }

    // Dispatch to appropriate mode
    if let Some(ref color) = args.related {
        run_related(color, &args.config, args.quiet);
    } else {
        run_export(&args);
    }
}
