//! Scalar fraud and risk statistics.
//!
//! Every function here is total: empty views and views without fraud rows
//! produce zeros (or `None` for the busiest fraud hour), never an error.

use crate::data::TableView;
use serde::{Deserialize, Serialize};

/// Headline counts and amounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    pub total_transactions: usize,
    pub fraud_transactions: usize,
    pub normal_transactions: usize,

    /// Fraud share of all transactions, in percent
    pub fraud_rate: f64,

    pub total_amount: f64,
    pub fraud_amount: f64,

    /// Fraud share of the total amount, in percent
    pub fraud_amount_percent: f64,

    pub avg_normal_amount: f64,
}

impl BasicStats {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Transactions: {} | Fraud: {} ({:.4}%) | Amount: {:.2} | Fraud amount: {:.2}",
            self.total_transactions,
            self.fraud_transactions,
            self.fraud_rate,
            self.total_amount,
            self.fraud_amount
        )
    }
}

/// Comparison of fraud against normal behaviour
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    pub avg_fraud_amount: f64,
    pub avg_normal_amount: f64,
    pub max_fraud_amount: f64,

    /// Average fraud amount divided by average normal amount
    pub fraud_to_normal_ratio: f64,

    /// Integer hour with the most fraud; `None` when there is no fraud
    pub busiest_fraud_hour: Option<u8>,
}

/// Money lost to fraud
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialImpact {
    pub total_fraud_loss: f64,
    pub total_transactions_volume: f64,
    pub avg_loss_per_fraud: f64,
    pub max_fraud_amount: f64,

    /// Fraud loss as a share of total volume, in percent
    pub loss_percentage: f64,
}

/// Calculate headline statistics
///
/// **Public** - used by the home, overview and fraud pages
pub fn basic_stats(view: &TableView<'_>) -> BasicStats {
    let fraud = view.fraud();
    let normal = view.normal();

    let total_transactions = view.len();
    let fraud_transactions = fraud.len();
    let total_amount = sum(&view.amounts());
    let fraud_amount = sum(&fraud.amounts());

    BasicStats {
        total_transactions,
        fraud_transactions,
        normal_transactions: total_transactions - fraud_transactions,
        fraud_rate: percent(fraud_transactions as f64, total_transactions as f64),
        total_amount,
        fraud_amount,
        fraud_amount_percent: percent(fraud_amount, total_amount),
        avg_normal_amount: mean(&normal.amounts()),
    }
}

/// Calculate risk indicators
///
/// **Public** - used by the risk insights page
pub fn risk_metrics(view: &TableView<'_>) -> RiskMetrics {
    let fraud = view.fraud();
    let fraud_amounts = fraud.amounts();

    let avg_fraud_amount = mean(&fraud_amounts);
    let avg_normal_amount = mean(&view.normal().amounts());

    let fraud_to_normal_ratio = if avg_normal_amount > 0.0 {
        avg_fraud_amount / avg_normal_amount
    } else {
        0.0
    };

    RiskMetrics {
        avg_fraud_amount,
        avg_normal_amount,
        max_fraud_amount: max(&fraud_amounts),
        fraud_to_normal_ratio,
        busiest_fraud_hour: busiest_hour(&fraud),
    }
}

/// Calculate the financial impact of fraud
///
/// **Public** - used by the overview and risk pages
pub fn financial_impact(view: &TableView<'_>) -> FinancialImpact {
    let fraud_amounts = view.fraud().amounts();

    let total_fraud_loss = sum(&fraud_amounts);
    let total_transactions_volume = sum(&view.amounts());

    FinancialImpact {
        total_fraud_loss,
        total_transactions_volume,
        avg_loss_per_fraud: mean(&fraud_amounts),
        max_fraud_amount: max(&fraud_amounts),
        loss_percentage: percent(total_fraud_loss, total_transactions_volume),
    }
}

/// Projected savings if fraud loss drops by `rate` (0.0 - 1.0)
pub fn estimated_savings(impact: &FinancialImpact, rate: f64) -> f64 {
    impact.total_fraud_loss * rate
}

/// Hour (0-23) with the most rows; ties go to the earliest hour
///
/// **Private** - rows are binned by floor of `hour_of_day`
fn busiest_hour(view: &TableView<'_>) -> Option<u8> {
    if view.is_empty() {
        return None;
    }

    let mut counts = [0usize; 24];
    for t in view.iter() {
        counts[t.hour_bin() as usize] += 1;
    }

    let mut busiest = 0;
    for hour in 1..counts.len() {
        if counts[hour] > counts[busiest] {
            busiest = hour;
        }
    }

    Some(busiest as u8)
}

pub(crate) fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        sum(values) / values.len() as f64
    }
}

pub(crate) fn max(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

/// `part / whole * 100`, or 0 when `whole` is not positive
pub(crate) fn percent(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        (part / whole) * 100.0
    } else {
        0.0
    }
}
