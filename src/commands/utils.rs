use crate::output::read_report;
use crate::report::PageReport;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::{Context, Result};
use log::warn;
use std::path::Path;

/// Validate a page report JSON file
///
/// **Public** - prints what was found and returns the parsed report
pub fn validate_report_file(file_path: &Path) -> Result<PageReport> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)
        .with_context(|| format!("{} is not a valid page report", file_path.display()))?;
    let meta = report.meta();

    if meta.version != REPORT_SCHEMA_VERSION {
        warn!(
            "Report schema version {} differs from current version {}",
            meta.version, REPORT_SCHEMA_VERSION
        );
    }

    println!("✓ Valid report JSON");
    println!("  Page:      {}", report.page_name());
    println!("  Version:   {}", meta.version);
    println!("  Source:    {}", meta.source);
    println!("  Generated: {}", meta.generated_at);

    Ok(report)
}

/// Display version information
pub fn display_version() {
    println!("Card Risk Dashboard v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Credit card fraud analytics: dataset preparation, risk metrics and page reports.");
}
