//! JSON report writer.
//!
//! Writes page reports to JSON files with pretty formatting and reads them
//! back for validation.

use super::prepare_output_path;
use crate::report::PageReport;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Write a page report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `report` - Page report to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
pub fn write_report(report: &PageReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!(
        "Writing {} report to: {}",
        report.page_name(),
        output_path.display()
    );

    prepare_output_path(output_path)?;

    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)?;

    info!(
        "Report written successfully ({} bytes)",
        file_size(output_path)
    );

    Ok(())
}

/// Read a page report back from a JSON file
///
/// **Public** - used by the `validate` command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (I/O errors share this variant)
/// * `OutputError::SerializationFailed` - Not a valid page report
pub fn read_report(input_path: impl AsRef<Path>) -> Result<PageReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path)?;
    let report: PageReport = serde_json::from_reader(BufReader::new(file))?;

    debug!(
        "Report loaded: page {}, version {}, source {}",
        report.page_name(),
        report.meta().version,
        report.meta().source
    );

    Ok(report)
}

fn file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
