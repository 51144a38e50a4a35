//! Configuration and constants for the CLI.

use std::time::Duration;

/// Dataset location used when no source is given
pub const DEFAULT_SOURCE: &str = "data/creditcard.csv";

/// Environment variable that overrides the default source
pub const SOURCE_ENV_VAR: &str = "CARD_RISK_SOURCE";

/// Default timeout for fetching a remote dataset
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

// Column names in the source CSV
pub const TIME_COLUMN: &str = "Time";
pub const AMOUNT_COLUMN: &str = "Amount";
pub const CLASS_COLUMN: &str = "Class";
pub const REQUIRED_COLUMNS: &[&str] = &[TIME_COLUMN, AMOUNT_COLUMN, CLASS_COLUMN];

// Cell spellings treated as a missing value (compared case-insensitively)
pub const MISSING_MARKERS: &[&str] = &["", "na", "nan", "null", "none"];

// Time conversion
pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const HOURS_PER_DAY: f64 = 24.0;

// Amount category thresholds (lower bound inclusive)
pub const MEDIUM_AMOUNT_THRESHOLD: f64 = 100.0;
pub const LARGE_AMOUNT_THRESHOLD: f64 = 500.0;
pub const VERY_LARGE_AMOUNT_THRESHOLD: f64 = 1000.0;

/// Histogram bins for the amount distribution chart
pub const DEFAULT_HISTOGRAM_BINS: usize = 50;

/// Rows shown in the "top fraud transactions" table
pub const TOP_FRAUD_LIMIT: usize = 10;

/// Targeted share of fraud loss recoverable by the recommended actions
pub const ESTIMATED_SAVINGS_RATE: f64 = 0.30;
