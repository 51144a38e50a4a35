//! Static SVG rendering of chart data.
//!
//! Output is plain SVG: no scripts, no external assets.

use super::series::{FraudHeatmap, Series};
use crate::utils::error::ChartError;
use log::info;

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// Chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub color: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Transactions".to_string(),
            width: 900,
            height: 400,
            color: "rgb(70, 130, 180)".to_string(),
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// Render a series as vertical bars
///
/// # Errors
/// * `ChartError::EmptySeries` - the series has no points
pub fn render_bar_chart(series: &Series, config: &ChartConfig) -> Result<String, ChartError> {
    if series.is_empty() {
        return Err(ChartError::EmptySeries(series.name.clone()));
    }

    info!("Rendering bar chart '{}' ({} points)", config.title, series.points.len());

    let (plot_w, plot_h) = plot_area(config);
    let y_max = series.max_value().max(1.0);
    let slot = plot_w / series.points.len() as f64;
    let bar_w = (slot * 0.8).max(1.0);

    let mut svg = open_svg(config);
    render_axes(&mut svg, config, y_max);

    for (i, point) in series.points.iter().enumerate() {
        let h = point.value / y_max * plot_h;
        let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_w) / 2.0;
        let y = MARGIN_TOP + plot_h - h;

        svg.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"><title>{}: {}</title></rect>"#,
            x, y, bar_w, h, config.color, escape(&point.label), point.value
        ));
    }

    render_x_labels(&mut svg, series, slot, plot_h);
    svg.push_str("</svg>");

    Ok(svg)
}

/// Render a series as a line with point markers
///
/// # Errors
/// * `ChartError::EmptySeries` - the series has no points
pub fn render_line_chart(series: &Series, config: &ChartConfig) -> Result<String, ChartError> {
    if series.is_empty() {
        return Err(ChartError::EmptySeries(series.name.clone()));
    }

    info!("Rendering line chart '{}' ({} points)", config.title, series.points.len());

    let (plot_w, plot_h) = plot_area(config);
    let y_max = series.max_value().max(1.0);
    let slot = plot_w / series.points.len() as f64;

    let coords: Vec<(f64, f64)> = series
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = MARGIN_LEFT + slot * i as f64 + slot / 2.0;
            let y = MARGIN_TOP + plot_h - p.value / y_max * plot_h;
            (x, y)
        })
        .collect();

    let mut svg = open_svg(config);
    render_axes(&mut svg, config, y_max);

    let path: Vec<String> = coords.iter().map(|(x, y)| format!("{:.2},{:.2}", x, y)).collect();
    svg.push_str(&format!(
        r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="3"/>"#,
        path.join(" "),
        config.color
    ));

    for ((x, y), point) in coords.iter().zip(&series.points) {
        svg.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="4" fill="{}"><title>{}: {}</title></circle>"#,
            x, y, config.color, escape(&point.label), point.value
        ));
    }

    render_x_labels(&mut svg, series, slot, plot_h);
    svg.push_str("</svg>");

    Ok(svg)
}

/// Render the category × hour fraud-rate grid
///
/// # Errors
/// * `ChartError::EmptySeries` - the heatmap has no rows
pub fn render_heatmap(heatmap: &FraudHeatmap, config: &ChartConfig) -> Result<String, ChartError> {
    if heatmap.rows.is_empty() {
        return Err(ChartError::EmptySeries("heatmap".to_string()));
    }

    info!("Rendering heatmap '{}'", config.title);

    let label_w = 150.0;
    let (plot_w, plot_h) = plot_area(config);
    let cell_w = (plot_w + MARGIN_LEFT - label_w) / 24.0;
    let cell_h = plot_h / heatmap.rows.len() as f64;
    let max_rate = heatmap
        .rows
        .iter()
        .flat_map(|r| r.rates.iter().copied())
        .fold(0.0, f64::max);

    let mut svg = open_svg(config);

    for (r, row) in heatmap.rows.iter().enumerate() {
        let y = MARGIN_TOP + cell_h * r as f64;
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="11" text-anchor="end">{}</text>"#,
            label_w - 6.0,
            y + cell_h / 2.0 + 4.0,
            escape(row.category.label())
        ));

        for (hour, rate) in row.rates.iter().enumerate() {
            let x = label_w + cell_w * hour as f64;
            svg.push_str(&format!(
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"><title>{:02}:00 {:.4}</title></rect>"#,
                x, y, cell_w, cell_h, heat_color(*rate, max_rate), hour, rate
            ));
        }
    }

    for hour in 0..24 {
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="10" text-anchor="middle">{:02}</text>"#,
            label_w + cell_w * hour as f64 + cell_w / 2.0,
            MARGIN_TOP + plot_h + 15.0,
            hour
        ));
    }

    svg.push_str("</svg>");
    Ok(svg)
}

fn plot_area(config: &ChartConfig) -> (f64, f64) {
    let w = (config.width as f64 - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
    let h = (config.height as f64 - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
    (w, h)
}

fn open_svg(config: &ChartConfig) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        config.width, config.height, config.width, config.height
    );
    svg.push_str(r#"<style>text { font-family: sans-serif; }</style>"#);
    svg.push_str(&format!(
        r#"<text x="{}" y="24" font-size="16" text-anchor="middle" font-weight="bold">{}</text>"#,
        config.width / 2,
        escape(&config.title)
    ));
    svg
}

fn render_axes(svg: &mut String, config: &ChartConfig, y_max: f64) {
    let (plot_w, plot_h) = plot_area(config);
    let bottom = MARGIN_TOP + plot_h;

    svg.push_str(&format!(
        r#"<line x1="{l}" y1="{t}" x2="{l}" y2="{b}" stroke="black"/><line x1="{l}" y1="{b}" x2="{r}" y2="{b}" stroke="black"/>"#,
        l = MARGIN_LEFT,
        t = MARGIN_TOP,
        b = bottom,
        r = MARGIN_LEFT + plot_w
    ));

    // Y ticks at 0, 25, 50, 75, 100% of the maximum
    for step in 0..=4 {
        let value = y_max * step as f64 / 4.0;
        let y = bottom - plot_h * step as f64 / 4.0;
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="10" text-anchor="end">{:.0}</text>"#,
            MARGIN_LEFT - 6.0,
            y + 3.0,
            value
        ));
    }
}

fn render_x_labels(svg: &mut String, series: &Series, slot: f64, plot_h: f64) {
    // Thin out labels so they do not overlap
    let every = (series.points.len() / 24).max(1);

    for (i, point) in series.points.iter().enumerate().step_by(every) {
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="10" text-anchor="middle">{}</text>"#,
            MARGIN_LEFT + slot * i as f64 + slot / 2.0,
            MARGIN_TOP + plot_h + 15.0,
            escape(&point.label)
        ));
    }
}

/// White to red, scaled against the largest rate
fn heat_color(rate: f64, max_rate: f64) -> String {
    let intensity = if max_rate > 0.0 { rate / max_rate } else { 0.0 };
    let fade = (255.0 * (1.0 - intensity)).round() as u8;
    format!("rgb(255, {}, {})", fade, fade)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::series::HeatmapRow;
    use crate::data::AmountCategory;

    fn sample_series() -> Series {
        let mut series = Series::new("fraud by hour");
        series.push("00:00", 3.0);
        series.push("01:00", 7.0);
        series
    }

    #[test]
    fn test_bar_chart_has_one_rect_per_point() {
        let svg = render_bar_chart(&sample_series(), &ChartConfig::new()).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<rect").count(), 2);
    }

    #[test]
    fn test_line_chart_markers() {
        let config = ChartConfig::new().with_title("Fraud Transactions by Hour");
        let svg = render_line_chart(&sample_series(), &config).unwrap();

        assert!(svg.contains("<polyline"));
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains("Fraud Transactions by Hour"));
    }

    #[test]
    fn test_empty_series_is_an_error() {
        let result = render_bar_chart(&Series::new("empty"), &ChartConfig::new());
        assert!(matches!(result, Err(ChartError::EmptySeries(_))));
    }

    #[test]
    fn test_heatmap_escapes_category_labels() {
        let heatmap = FraudHeatmap {
            rows: vec![HeatmapRow {
                category: AmountCategory::Small,
                rates: [0.0; 24],
            }],
        };
        let svg = render_heatmap(&heatmap, &ChartConfig::new()).unwrap();

        assert!(svg.contains("Small (&lt; $100)"));
        assert_eq!(svg.matches("<rect").count(), 24);
    }
}
