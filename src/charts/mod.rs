//! Chart data and static SVG rendering for the dashboard pages.

pub mod series;
pub mod svg;

// Re-export main types
pub use series::{
    amount_distribution, fraud_heatmap, fraud_timeline, AmountDistribution, FraudHeatmap,
    HeatmapRow, Histogram, Series, SeriesPoint,
};
pub use svg::{render_bar_chart, render_heatmap, render_line_chart, ChartConfig};
