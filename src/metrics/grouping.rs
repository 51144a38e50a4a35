//! Grouped breakdowns: per hour, per amount category, per class.

use super::stats::{mean, percent};
use crate::data::{AmountCategory, TableView, TransactionType};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field to group rows by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    /// Integer hour of day (floor of `hour_of_day`)
    Hour,
    AmountCategory,
}

/// Key of a single group
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupKey {
    Hour(u8),
    Category(AmountCategory),
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupKey::Hour(hour) => write!(f, "{:02}:00", hour),
            GroupKey::Category(category) => write!(f, "{}", category),
        }
    }
}

/// Row count of one group and its share of the view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupCount {
    pub key: GroupKey,
    pub count: usize,

    /// Share of all rows in the view, in percent
    pub percentage: f64,
}

/// Fraud risk of one amount category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMatrixRow {
    pub category: AmountCategory,
    pub normal_count: usize,
    pub fraud_count: usize,

    /// fraud / (normal + fraud), in percent
    pub risk_rate: f64,
}

/// Count and average amount of one transaction type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassComparison {
    pub transaction_type: TransactionType,
    pub count: usize,
    pub average_amount: f64,
}

/// A single large fraud transaction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FraudHighlight {
    pub amount: f64,
    pub hour_of_day: f64,
    pub amount_category: AmountCategory,
}

/// Count rows per group
///
/// **Public** - main entry point for grouped metrics
///
/// # Returns
/// Groups in ascending key order (hour 0-23, or Small to Very Large).
/// Only groups with at least one row are returned; an empty view yields
/// an empty vector.
pub fn grouped_counts(view: &TableView<'_>, group_by: GroupBy) -> Vec<GroupCount> {
    let mut counts: BTreeMap<GroupKey, usize> = BTreeMap::new();

    for t in view.iter() {
        let key = match group_by {
            GroupBy::Hour => GroupKey::Hour(t.hour_bin()),
            GroupBy::AmountCategory => GroupKey::Category(t.amount_category),
        };
        *counts.entry(key).or_insert(0) += 1;
    }

    let total = view.len() as f64;

    debug!("Grouped {} rows into {} groups ({:?})", view.len(), counts.len(), group_by);

    counts
        .into_iter()
        .map(|(key, count)| GroupCount {
            key,
            count,
            percentage: percent(count as f64, total),
        })
        .collect()
}

/// Group with the highest count; the first one wins a tie
pub fn peak_group(groups: &[GroupCount]) -> Option<&GroupCount> {
    let mut peak: Option<&GroupCount> = None;

    for group in groups {
        match peak {
            Some(best) if group.count <= best.count => {}
            _ => peak = Some(group),
        }
    }

    peak
}

/// Normal/fraud counts and fraud rate for every amount category
///
/// **Public** - always returns all four categories, in order
pub fn risk_matrix(view: &TableView<'_>) -> Vec<RiskMatrixRow> {
    AmountCategory::ALL
        .iter()
        .map(|category| {
            let rows = view.filter(|t| t.amount_category == *category);
            let fraud_count = rows.fraud().len();
            let normal_count = rows.len() - fraud_count;

            RiskMatrixRow {
                category: *category,
                normal_count,
                fraud_count,
                risk_rate: percent(fraud_count as f64, rows.len() as f64),
            }
        })
        .collect()
}

/// Count and average amount for normal and fraud rows
pub fn class_comparison(view: &TableView<'_>) -> Vec<ClassComparison> {
    [
        (TransactionType::Normal, view.normal()),
        (TransactionType::Fraud, view.fraud()),
    ]
    .into_iter()
    .map(|(transaction_type, rows)| ClassComparison {
        transaction_type,
        count: rows.len(),
        average_amount: mean(&rows.amounts()),
    })
    .collect()
}

/// The `limit` largest fraud transactions, largest first
///
/// **Public** - equal amounts keep their table order
pub fn top_fraud_transactions(view: &TableView<'_>, limit: usize) -> Vec<FraudHighlight> {
    let mut highlights: Vec<FraudHighlight> = view
        .fraud()
        .iter()
        .map(|t| FraudHighlight {
            amount: t.amount,
            hour_of_day: t.hour_of_day,
            amount_category: t.amount_category,
        })
        .collect();

    highlights.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    highlights.truncate(limit);

    highlights
}
