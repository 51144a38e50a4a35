//! Page reports: one serializable report per dashboard page, plus a
//! plain-text renderer for the terminal.

pub mod pages;
pub mod schema;
pub mod text;

// Re-export main types
pub use pages::{fraud_report, home_summary, overview_report, risk_report, transaction_report};
pub use schema::{
    FraudFindings, FraudReport, HomeSummary, OverviewReport, PageReport, ReportMeta, RiskReport,
    TransactionReport,
};
pub use text::render_text;
