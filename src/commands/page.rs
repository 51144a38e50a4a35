//! Page command implementation.
//!
//! Every page command:
//! 1. Loads and prepares the dataset (through the cache)
//! 2. Builds the page report
//! 3. Prints the text summary
//! 4. Writes the JSON report and SVG charts, if requested
//!
//! The `dashboard` command runs all pages against a single cached load.

use super::models::{Page, PageArgs};
use crate::charts::{
    render_bar_chart, render_heatmap, render_line_chart, ChartConfig, Series,
};
use crate::data::DatasetCache;
use crate::output::{write_report, write_svg};
use crate::report::{
    fraud_report, home_summary, overview_report, render_text, risk_report, transaction_report,
    PageReport,
};
use crate::source::DataSource;
use crate::utils::config::HOURS_PER_DAY;
use crate::utils::error::ChartError;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

const FRAUD_COLOR: &str = "rgb(220, 20, 60)";
const NORMAL_COLOR: &str = "rgb(70, 130, 180)";

/// Execute a single page command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `page` - Page to build
/// * `args` - Source, output and filter arguments
/// * `cache` - Dataset cache shared across pages of one run
///
/// # Returns
/// The page report that was printed and written
///
/// # Errors
/// * Dataset unavailable or malformed
/// * File write errors
pub fn execute_page(page: Page, args: &PageArgs, cache: &mut DatasetCache) -> Result<PageReport> {
    let start_time = Instant::now();

    info!("Building {} page from: {}", page, args.source);

    let source = DataSource::parse(&args.source).context("Invalid data source")?;
    let table = cache
        .get_or_load(&source)
        .with_context(|| format!("Failed to load dataset from {}", source))?;

    info!("Dataset ready: {}", table.summary().summary());

    let view = table.view();
    let source_name = source.to_string();
    let report = match page {
        Page::Home => PageReport::Home(home_summary(&view, &source_name)),
        Page::Overview => PageReport::Overview(overview_report(&view, &source_name)),
        Page::Transactions => PageReport::Transactions(transaction_report(
            &view,
            &args.filter(),
            &source_name,
        )),
        Page::Fraud => PageReport::Fraud(fraud_report(&view, &source_name)),
        Page::Risk => PageReport::Risk(risk_report(&view, &source_name)),
    };

    println!("{}", render_text(&report));

    if let Some(output_json) = &args.output_json {
        write_report(&report, output_json)
            .with_context(|| format!("Failed to write {} report JSON", page))?;
        info!("✓ Report written to: {}", output_json.display());
    }

    if let Some(charts_dir) = &args.charts_dir {
        let written = write_page_charts(&report, charts_dir)?;
        info!("✓ {} chart(s) written to: {}", written.len(), charts_dir.display());
    }

    debug!(
        "{} page completed in {:.2}s",
        page,
        start_time.elapsed().as_secs_f64()
    );

    Ok(report)
}

/// Execute every page, continuing past pages that fail
///
/// **Public** - the dataset is loaded once and shared through the cache
///
/// # Arguments
/// * `args` - Shared arguments; `output_json` is ignored in favour of `output_dir`
/// * `output_dir` - Directory receiving one `<page>.json` per page (optional)
///
/// # Returns
/// The reports of the pages that succeeded
///
/// # Errors
/// Only when every page failed; the first failure is returned
pub fn execute_dashboard(args: &PageArgs, output_dir: Option<&Path>) -> Result<Vec<PageReport>> {
    let mut cache = DatasetCache::new();
    let mut reports = Vec::new();
    let mut first_error = None;

    for page in Page::ALL {
        let page_args = args.for_page_in(page, output_dir);

        match execute_page(page, &page_args, &mut cache) {
            Ok(report) => reports.push(report),
            Err(e) => {
                warn!("{} page failed: {:#}", page, e);
                first_error.get_or_insert(e);
            }
        }
    }

    info!(
        "Dashboard completed: {} of {} pages rendered",
        reports.len(),
        Page::ALL.len()
    );

    match first_error {
        Some(e) if reports.is_empty() => Err(e.context("Every dashboard page failed")),
        _ => Ok(reports),
    }
}

/// Validate page arguments
///
/// **Public** - can be called before execute_page for early validation
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &PageArgs) -> Result<()> {
    if args.source.trim().is_empty() {
        anyhow::bail!("Source cannot be empty");
    }

    for (name, value) in [("min-amount", args.min_amount), ("max-amount", args.max_amount)] {
        if let Some(v) = value {
            if !v.is_finite() || v < 0.0 {
                anyhow::bail!("{} must be a non-negative number, got {}", name, v);
            }
        }
    }

    for (name, value) in [("min-hour", args.min_hour), ("max-hour", args.max_hour)] {
        if let Some(v) = value {
            if !(0.0..=HOURS_PER_DAY).contains(&v) {
                anyhow::bail!("{} must be between 0 and {}, got {}", name, HOURS_PER_DAY, v);
            }
        }
    }

    if let (Some(min), Some(max)) = (args.min_amount, args.max_amount) {
        if min > max {
            anyhow::bail!("min-amount ({}) is greater than max-amount ({})", min, max);
        }
    }

    if let (Some(min), Some(max)) = (args.min_hour, args.max_hour) {
        if min > max {
            anyhow::bail!("min-hour ({}) is greater than max-hour ({})", min, max);
        }
    }

    Ok(())
}

/// Render the charts of a page report into SVG strings
///
/// **Public** - one `(file name, result)` per chart; the home page has none
pub fn render_page_charts(report: &PageReport) -> Vec<(&'static str, Result<String, ChartError>)> {
    let fraud = ChartConfig::new().with_color(FRAUD_COLOR);
    let normal = ChartConfig::new().with_color(NORMAL_COLOR);

    match report {
        PageReport::Home(_) => Vec::new(),
        PageReport::Overview(r) => vec![
            (
                "fraud_timeline.svg",
                render_line_chart(
                    &Series::from_groups("fraud by hour", &r.fraud_timeline),
                    &fraud.clone().with_title("Fraud Transactions by Hour"),
                ),
            ),
            (
                "amount_distribution_normal.svg",
                render_bar_chart(
                    &Series::from_histogram("normal amounts", &r.amount_distribution.normal),
                    &normal.clone().with_title("Normal Transaction Amounts"),
                ),
            ),
            (
                "amount_distribution_fraud.svg",
                render_bar_chart(
                    &Series::from_histogram("fraud amounts", &r.amount_distribution.fraud),
                    &fraud.with_title("Fraud Transaction Amounts"),
                ),
            ),
        ],
        PageReport::Transactions(r) => vec![
            (
                "transactions_by_hour.svg",
                render_line_chart(
                    &Series::from_groups("transactions by hour", &r.hourly),
                    &normal.clone().with_title("Customer Activity Throughout the Day"),
                ),
            ),
            (
                "transactions_by_category.svg",
                render_bar_chart(
                    &Series::from_groups("transactions by category", &r.categories),
                    &normal.with_title("Transactions by Amount Category"),
                ),
            ),
        ],
        PageReport::Fraud(r) => vec![
            (
                "fraud_by_hour.svg",
                render_bar_chart(
                    &Series::from_groups("fraud by hour", &r.hourly),
                    &fraud.clone().with_title("Fraud Distribution by Hour"),
                ),
            ),
            (
                "fraud_by_category.svg",
                render_bar_chart(
                    &Series::from_groups("fraud by category", &r.categories),
                    &fraud.with_title("Fraud by Amount Category"),
                ),
            ),
        ],
        PageReport::Risk(r) => {
            let mut rates = Series::new("risk rate by category");
            for row in &r.risk_matrix {
                rates.push(row.category.label(), row.risk_rate);
            }

            vec![
                (
                    "risk_rate_by_category.svg",
                    render_bar_chart(&rates, &fraud.clone().with_title("Risk Rate by Amount Category (%)")),
                ),
                (
                    "fraud_heatmap.svg",
                    render_heatmap(&r.heatmap, &fraud.with_title("Fraud Rate by Hour and Amount")),
                ),
            ]
        }
    }
}

/// Write the charts of a page into `charts_dir`
///
/// **Private** - empty charts are skipped with a warning
fn write_page_charts(report: &PageReport, charts_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for (file_name, rendered) in render_page_charts(report) {
        match rendered {
            Ok(svg) => {
                let path = charts_dir.join(file_name);
                write_svg(&svg, &path)
                    .with_context(|| format!("Failed to write chart {}", path.display()))?;
                written.push(path);
            }
            Err(ChartError::EmptySeries(name)) => {
                warn!("Skipping chart {}: no data for '{}'", file_name, name);
            }
        }
    }

    Ok(written)
}
