//! Overview chart rendering (per-family bars with lightness overlay line)

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisType, Color, ColorStop, ItemStyle, Label, LabelPosition, LineStyle,
        SplitLine, Symbol, TextStyle,
    },
    renderer::ImageFormat,
    series::{Bar, Line},
};

use super::FamilySummary;
use super::colors::{BAR_BOTTOM, BAR_TOP, COLOR_BACKGROUND, COLOR_GRID, COLOR_TEXT, LINE_LIGHTNESS};

/// Chart dimensions (2x for Retina quality)
const CHART_WIDTH: u32 = 2800;
const CHART_HEIGHT: u32 = 1200;

/// Render the palette overview to a PNG file. Bars show each family's share
/// of the palette, the line overlays mean relative luminance.
pub(crate) fn render_overview_chart(
    families: &[FamilySummary],
    output_path: &str,
) -> Result<(), String> {
    if families.is_empty() {
        return Err("Chart requires a non-empty palette".to_string());
    }

    let total: usize = families.iter().map(|f| f.count).sum();
    let round = |v: f64| (v * 10.0).round() / 10.0;

    let family_labels: Vec<String> = families
        .iter()
        .map(|f| format!("{}\n({})", f.name, f.count))
        .collect();
    let share_pct: Vec<f64> = families
        .iter()
        .map(|f| round(f.count as f64 * 100.0 / total as f64))
        .collect();
    let lightness_pct: Vec<f64> = families
        .iter()
        .map(|f| round(f.mean_luminance_pct))
        .collect();

    let subtitle = format!("{} colors in {} families", total, families.len());

    let chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text("Palette Overview")
                .subtext(subtitle)
                .left("center")
                .top("3%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(36))
                .subtext_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .legend(
            Legend::new()
                .data(vec!["Share".to_string(), "Lightness".to_string()])
                .bottom("3%")
                .item_gap(40)
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("3%")
                .bottom("7%")
                .top("15%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(family_labels)
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(24)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("%")
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(24))
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(24))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        )
        .series(
            Line::new()
                .name("Lightness")
                .data(lightness_pct)
                .symbol(Symbol::Circle)
                .symbol_size(10)
                .line_style(LineStyle::new().width(2))
                .item_style(ItemStyle::new().color(LINE_LIGHTNESS)),
        )
        .series(
            Bar::new()
                .name("Share")
                .data(share_pct)
                .item_style(
                    ItemStyle::new()
                        .color(Color::LinearGradient {
                            x: 0.0,
                            y: 0.0,
                            x2: 0.0,
                            y2: 1.0,
                            color_stops: vec![
                                ColorStop::new(0.0, BAR_TOP),
                                ColorStop::new(1.0, BAR_BOTTOM),
                            ],
                        })
                        .opacity(0.9),
                )
                .label(
                    Label::new()
                        .show(true)
                        .position(LabelPosition::Top)
                        .color(COLOR_TEXT)
                        .font_size(20)
                        .formatter("{c}"),
                ),
        );

    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| format!("Failed to save chart: {}", e))?;

    Ok(())
}
