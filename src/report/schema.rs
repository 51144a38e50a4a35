//! Output JSON schema definitions for page reports.
//!
//! One report type per dashboard page. Reports are versioned to allow
//! future evolution.

use crate::charts::{AmountDistribution, FraudHeatmap};
use crate::data::{AmountCategory, TransactionFilter};
use crate::metrics::{
    AmountSummary, BasicStats, ClassComparison, FinancialImpact, FraudHighlight, GroupCount,
    RiskMatrixRow, RiskMetrics,
};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Any page report, tagged with the page it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageReport {
    Home(HomeSummary),
    Overview(OverviewReport),
    Transactions(TransactionReport),
    Fraud(FraudReport),
    Risk(RiskReport),
}

impl PageReport {
    pub fn meta(&self) -> &ReportMeta {
        match self {
            PageReport::Home(r) => &r.meta,
            PageReport::Overview(r) => &r.meta,
            PageReport::Transactions(r) => &r.meta,
            PageReport::Fraud(r) => &r.meta,
            PageReport::Risk(r) => &r.meta,
        }
    }

    /// Page name as used on the command line
    pub fn page_name(&self) -> &'static str {
        match self {
            PageReport::Home(_) => "home",
            PageReport::Overview(_) => "overview",
            PageReport::Transactions(_) => "transactions",
            PageReport::Fraud(_) => "fraud",
            PageReport::Risk(_) => "risk",
        }
    }
}

/// Common header of every report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Schema version for compatibility checking
    pub version: String,

    /// Dataset path or URL the report was computed from
    pub source: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,
}

impl ReportMeta {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            version: REPORT_SCHEMA_VERSION.to_string(),
            source: source.into(),
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Quick stats shown on the landing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeSummary {
    pub meta: ReportMeta,
    pub total_transactions: usize,
    pub fraud_transactions: usize,
    pub fraud_rate: f64,
    pub total_amount: f64,
}

/// Executive overview: KPIs, fraud timeline and amount distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewReport {
    pub meta: ReportMeta,
    pub stats: BasicStats,
    pub impact: FinancialImpact,
    pub fraud_timeline: Vec<GroupCount>,
    pub amount_distribution: AmountDistribution,
}

/// Normal customer behaviour within the selected amount/hour window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionReport {
    pub meta: ReportMeta,
    pub filter: TransactionFilter,
    pub transaction_count: usize,
    pub average_amount: f64,
    pub total_amount: f64,
    pub hourly: Vec<GroupCount>,
    pub categories: Vec<GroupCount>,
    pub amount_summary: AmountSummary,
}

/// Fraud patterns and characteristics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudReport {
    pub meta: ReportMeta,

    /// Set when the view holds no fraud rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,

    pub fraud_transactions: usize,

    /// Fraud share of all transactions, in percent
    pub share_of_total: f64,

    pub total_loss: f64,
    pub max_loss: f64,
    pub comparison: Vec<ClassComparison>,
    pub hourly: Vec<GroupCount>,
    pub categories: Vec<GroupCount>,
    pub top_frauds: Vec<FraudHighlight>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub findings: Option<FraudFindings>,
}

/// Headline observations about fraud
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudFindings {
    pub average_fraud_amount: f64,

    /// Average fraud amount as a multiple of the average normal amount
    pub multiple_of_normal: f64,

    pub peak_hour: u8,
    pub highest_risk_category: AmountCategory,
}

/// Risk indicators, category risk matrix and savings estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub meta: ReportMeta,
    pub risk: RiskMetrics,
    pub impact: FinancialImpact,
    pub risk_matrix: Vec<RiskMatrixRow>,
    pub estimated_savings: f64,
    pub heatmap: FraudHeatmap,
}
