//! Dataset preparation: parse, clean, de-duplicate and annotate.
//!
//! Rows with any missing cell are dropped, then exact duplicates are
//! dropped (first occurrence kept), and only then are the derived
//! attributes computed.

use super::model::{PrepareSummary, PreparedTable, Transaction};
use crate::source::{read_source, DataSource};
use crate::utils::config::{AMOUNT_COLUMN, CLASS_COLUMN, MISSING_MARKERS, REQUIRED_COLUMNS, TIME_COLUMN};
use crate::utils::error::DataError;
use log::{debug, info};
use std::collections::HashSet;

/// Parsed but not yet cleaned input
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Header names in source order
    pub columns: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// One CSV record; `None` marks a missing cell
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// 1-based line number in the source text
    pub line: u64,
    pub cells: Vec<Option<f64>>,
}

/// Read, parse and prepare a dataset in one go
///
/// **Public** - main entry point for loading
///
/// # Errors
/// * `DataError::DataUnavailable` - source cannot be read
/// * `DataError::SchemaError` - `Time`, `Amount` or `Class` column missing
/// * `DataError::InvalidValue` - a cell is present but unusable
pub fn load_and_prepare(source: &DataSource) -> Result<PreparedTable, DataError> {
    let text = read_source(source)?;
    let raw = parse_records(&text)?;
    prepare(raw)
}

/// Parse CSV text into raw rows
///
/// **Public** - step 1 of preparation
///
/// Cells that are empty or spell a missing marker (`NA`, `NaN`, ...) become
/// `None`. Any other cell must parse as a finite number.
pub fn parse_records(text: &str) -> Result<RawTable, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    for required in REQUIRED_COLUMNS {
        if !columns.iter().any(|c| c == *required) {
            return Err(DataError::SchemaError(required.to_string()));
        }
    }

    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let cells = record
            .iter()
            .zip(&columns)
            .map(|(cell, column)| parse_cell(cell, column, line))
            .collect::<Result<Vec<_>, _>>()?;

        rows.push(RawRow { line, cells });
    }

    debug!("Parsed {} rows with {} columns", rows.len(), columns.len());

    Ok(RawTable { columns, rows })
}

/// Clean and annotate parsed rows
///
/// **Public** - steps 2-5 of preparation
///
/// # Errors
/// * `DataError::SchemaError` - required column missing from `raw.columns`
/// * `DataError::RowLength` - a row's cell count differs from the header
/// * `DataError::InvalidValue` - negative time/amount or class outside {0, 1}
pub fn prepare(raw: RawTable) -> Result<PreparedTable, DataError> {
    let time_idx = column_index(&raw.columns, TIME_COLUMN)?;
    let amount_idx = column_index(&raw.columns, AMOUNT_COLUMN)?;
    let class_idx = column_index(&raw.columns, CLASS_COLUMN)?;

    let feature_idx: Vec<usize> = (0..raw.columns.len())
        .filter(|i| *i != time_idx && *i != amount_idx && *i != class_idx)
        .collect();
    let feature_columns: Vec<String> = feature_idx.iter().map(|i| raw.columns[*i].clone()).collect();

    let raw_rows = raw.rows.len();

    if let Some(row) = raw.rows.iter().find(|r| r.cells.len() != raw.columns.len()) {
        return Err(DataError::RowLength {
            line: row.line,
            found: row.cells.len(),
            expected: raw.columns.len(),
        });
    }

    // Step 2: strict missing-value policy
    let complete: Vec<(u64, Vec<f64>)> = raw
        .rows
        .into_iter()
        .filter_map(|row| {
            let values = row.cells.into_iter().collect::<Option<Vec<f64>>>()?;
            Some((row.line, values))
        })
        .collect();
    let dropped_missing = raw_rows - complete.len();

    // Step 3: full-row de-duplication
    let mut seen: HashSet<Vec<u64>> = HashSet::with_capacity(complete.len());
    let unique: Vec<(u64, Vec<f64>)> = complete
        .into_iter()
        .filter(|(_, values)| seen.insert(row_key(values)))
        .collect();
    let dropped_duplicates = raw_rows - dropped_missing - unique.len();

    // Step 4: derived attributes
    let mut rows = Vec::with_capacity(unique.len());
    for (line, values) in unique {
        let time_seconds = non_negative(values[time_idx], TIME_COLUMN, line)?;
        let amount = non_negative(values[amount_idx], AMOUNT_COLUMN, line)?;
        let class_value = values[class_idx];
        let features = feature_idx.iter().map(|i| values[*i]).collect();

        let transaction = class_label(class_value)
            .and_then(|class| Transaction::new(time_seconds, amount, class, features))
            .ok_or_else(|| DataError::InvalidValue {
                line,
                column: CLASS_COLUMN.to_string(),
                value: class_value.to_string(),
            })?;

        rows.push(transaction);
    }

    let summary = PrepareSummary {
        raw_rows,
        dropped_missing,
        dropped_duplicates,
        final_rows: rows.len(),
    };
    info!("Prepared dataset: {}", summary.summary());

    Ok(PreparedTable::new(feature_columns, rows, summary))
}

/// Write a prepared table back out as CSV
///
/// **Public** - columns are `Time`, the feature columns, `Amount`, `Class`.
/// Feeding the output to [`parse_records`] and [`prepare`] reproduces the table.
pub fn to_csv(table: &PreparedTable) -> Result<String, DataError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec![TIME_COLUMN.to_string()];
    header.extend(table.feature_columns().iter().cloned());
    header.push(AMOUNT_COLUMN.to_string());
    header.push(CLASS_COLUMN.to_string());
    writer.write_record(&header)?;

    for row in table.rows() {
        let mut record = vec![row.time_seconds.to_string()];
        record.extend(row.features.iter().map(|v| v.to_string()));
        record.push(row.amount.to_string());
        record.push(row.class_label.to_string());
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DataError::DataUnavailable(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| DataError::DataUnavailable(e.to_string()))
}

/// **Private** - missing markers become `None`, everything else must be a finite number
fn parse_cell(cell: &str, column: &str, line: u64) -> Result<Option<f64>, DataError> {
    if MISSING_MARKERS.iter().any(|m| cell.eq_ignore_ascii_case(m)) {
        return Ok(None);
    }

    match cell.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(DataError::InvalidValue {
            line,
            column: column.to_string(),
            value: cell.to_string(),
        }),
    }
}

fn column_index(columns: &[String], name: &str) -> Result<usize, DataError> {
    columns
        .iter()
        .position(|c| c == name)
        .ok_or_else(|| DataError::SchemaError(name.to_string()))
}

/// Equality key for a full row; `-0.0` and `0.0` compare equal
fn row_key(values: &[f64]) -> Vec<u64> {
    values
        .iter()
        .map(|v| if *v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() })
        .collect()
}

fn non_negative(value: f64, column: &str, line: u64) -> Result<f64, DataError> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(DataError::InvalidValue {
            line,
            column: column.to_string(),
            value: value.to_string(),
        })
    }
}

fn class_label(value: f64) -> Option<u8> {
    if value == 0.0 {
        Some(0)
    } else if value == 1.0 {
        Some(1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_row_is_rejected() {
        let raw = RawTable {
            columns: vec!["Time".to_string(), "Amount".to_string(), "Class".to_string()],
            rows: vec![RawRow {
                line: 2,
                cells: vec![Some(0.0), Some(10.0)],
            }],
        };

        let result = prepare(raw);
        assert!(matches!(
            result,
            Err(DataError::RowLength { line: 2, found: 2, expected: 3 })
        ));
    }

    #[test]
    fn test_parse_missing_markers() {
        let raw = parse_records("Time,Amount,Class\n0,NaN,0\n1,,1\n2,3.5,NA\n").unwrap();
        assert_eq!(raw.rows.len(), 3);
        assert_eq!(raw.rows[0].cells, vec![Some(0.0), None, Some(0.0)]);
        assert_eq!(raw.rows[1].cells[1], None);
        assert_eq!(raw.rows[2].cells[2], None);
    }

    #[test]
    fn test_parse_reports_line_of_bad_cell() {
        let err = parse_records("Time,Amount,Class\n0,1.0,0\n5,abc,0\n").unwrap_err();
        match err {
            DataError::InvalidValue { line, column, value } => {
                assert_eq!(line, 3);
                assert_eq!(column, "Amount");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_required_column() {
        let err = parse_records("Time,V1,Class\n0,1.0,0\n").unwrap_err();
        assert!(matches!(err, DataError::SchemaError(ref c) if c == "Amount"));
    }

    #[test]
    fn test_row_key_treats_signed_zero_as_equal() {
        assert_eq!(row_key(&[-0.0, 1.0]), row_key(&[0.0, 1.0]));
        assert_ne!(row_key(&[0.5]), row_key(&[0.25]));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let raw = parse_records("Time,Amount,Class\n0,-5,0\n").unwrap();
        assert!(matches!(
            prepare(raw),
            Err(DataError::InvalidValue { ref column, .. }) if column == "Amount"
        ));
    }

    #[test]
    fn test_class_outside_labels_rejected() {
        let raw = parse_records("Time,Amount,Class\n0,5,2\n").unwrap();
        assert!(matches!(
            prepare(raw),
            Err(DataError::InvalidValue { ref column, .. }) if column == "Class"
        ));
    }

    #[test]
    fn test_summary_counts() {
        let raw = parse_records(
            "Time,V1,Amount,Class\n0,0.1,10,0\n0,0.1,10,0\n1,,20,0\n2,0.3,30,1\n",
        )
        .unwrap();
        let table = prepare(raw).unwrap();
        let summary = table.summary();

        assert_eq!(summary.raw_rows, 4);
        assert_eq!(summary.dropped_missing, 1);
        assert_eq!(summary.dropped_duplicates, 1);
        assert_eq!(summary.final_rows, 2);
        assert_eq!(table.feature_columns(), &["V1".to_string()]);
    }
}
