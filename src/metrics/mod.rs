//! Metrics calculated from prepared transaction views.
//!
//! This module turns a (possibly filtered) view into:
//! - Headline statistics, risk indicators and financial impact
//! - Grouped counts by hour or amount category
//! - Descriptive statistics of transaction amounts

pub mod grouping;
pub mod stats;
pub mod summary;

// Re-export main types and functions
pub use grouping::{
    class_comparison, grouped_counts, peak_group, risk_matrix, top_fraud_transactions,
    ClassComparison, FraudHighlight, GroupBy, GroupCount, GroupKey, RiskMatrixRow,
};
pub use stats::{
    basic_stats, estimated_savings, financial_impact, risk_metrics, BasicStats, FinancialImpact,
    RiskMetrics,
};
pub use summary::{amount_summary, AmountSummary};
