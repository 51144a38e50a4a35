//! Core types of the prepared dataset.
//!
//! A [`PreparedTable`] owns every cleaned [`Transaction`]. Downstream code
//! never touches the table directly: it works on [`TableView`]s, which are
//! borrowed row selections and can be narrowed further without copying.

use crate::utils::config::{
    HOURS_PER_DAY, LARGE_AMOUNT_THRESHOLD, MEDIUM_AMOUNT_THRESHOLD, SECONDS_PER_HOUR,
    VERY_LARGE_AMOUNT_THRESHOLD,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Readable form of the `Class` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TransactionType {
    Normal,
    Fraud,
}

impl TransactionType {
    /// Map a class label (0 = normal, 1 = fraud)
    pub fn from_class(class_label: u8) -> Option<Self> {
        match class_label {
            0 => Some(TransactionType::Normal),
            1 => Some(TransactionType::Fraud),
            _ => None,
        }
    }

    pub fn is_fraud(self) -> bool {
        self == TransactionType::Fraud
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Normal => write!(f, "Normal"),
            TransactionType::Fraud => write!(f, "Fraud"),
        }
    }
}

/// Fixed monetary buckets, ordered from smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AmountCategory {
    #[serde(rename = "Small (< $100)")]
    Small,
    #[serde(rename = "Medium ($100-$500)")]
    Medium,
    #[serde(rename = "Large ($500-$1000)")]
    Large,
    #[serde(rename = "Very Large (> $1000)")]
    VeryLarge,
}

impl AmountCategory {
    pub const ALL: [AmountCategory; 4] = [
        AmountCategory::Small,
        AmountCategory::Medium,
        AmountCategory::Large,
        AmountCategory::VeryLarge,
    ];

    /// Bucket an amount. Each threshold belongs to the bucket above it.
    pub fn classify(amount: f64) -> Self {
        if amount < MEDIUM_AMOUNT_THRESHOLD {
            AmountCategory::Small
        } else if amount < LARGE_AMOUNT_THRESHOLD {
            AmountCategory::Medium
        } else if amount < VERY_LARGE_AMOUNT_THRESHOLD {
            AmountCategory::Large
        } else {
            AmountCategory::VeryLarge
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AmountCategory::Small => "Small (< $100)",
            AmountCategory::Medium => "Medium ($100-$500)",
            AmountCategory::Large => "Large ($500-$1000)",
            AmountCategory::VeryLarge => "Very Large (> $1000)",
        }
    }
}

impl fmt::Display for AmountCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One cleaned and annotated row
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Seconds elapsed since the first transaction in the dataset
    pub time_seconds: f64,

    pub amount: f64,

    /// 0 = normal, 1 = fraud
    pub class_label: u8,

    /// Anonymized feature columns, aligned with `PreparedTable::feature_columns`
    pub features: Vec<f64>,

    pub transaction_type: TransactionType,

    /// Hour of day in [0, 24)
    pub hour_of_day: f64,

    pub amount_in_thousands: f64,

    pub amount_category: AmountCategory,
}

impl Transaction {
    /// Build a row and derive its analytical attributes.
    ///
    /// Returns `None` when `class_label` is not 0 or 1.
    pub fn new(time_seconds: f64, amount: f64, class_label: u8, features: Vec<f64>) -> Option<Self> {
        let transaction_type = TransactionType::from_class(class_label)?;
        let hour_of_day = (time_seconds / SECONDS_PER_HOUR) % HOURS_PER_DAY;
        let amount_in_thousands = amount / 1000.0;
        let amount_category = AmountCategory::classify(amount);

        Some(Self {
            time_seconds,
            amount,
            class_label,
            features,
            transaction_type,
            hour_of_day,
            amount_in_thousands,
            amount_category,
        })
    }

    pub fn is_fraud(&self) -> bool {
        self.transaction_type.is_fraud()
    }

    /// Integer hour 0-23 (floor of `hour_of_day`)
    pub fn hour_bin(&self) -> u8 {
        (self.hour_of_day.floor() as u8).min(23)
    }
}

/// Row counts recorded while cleaning the raw input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepareSummary {
    pub raw_rows: usize,
    pub dropped_missing: usize,
    pub dropped_duplicates: usize,
    pub final_rows: usize,
}

impl PrepareSummary {
    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Raw: {} rows | Missing dropped: {} | Duplicates dropped: {} | Final: {}",
            self.raw_rows, self.dropped_missing, self.dropped_duplicates, self.final_rows
        )
    }
}

/// The cleaned, annotated and immutable dataset
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedTable {
    feature_columns: Vec<String>,
    rows: Vec<Transaction>,
    summary: PrepareSummary,
}

impl PreparedTable {
    pub fn new(feature_columns: Vec<String>, rows: Vec<Transaction>, summary: PrepareSummary) -> Self {
        Self {
            feature_columns,
            rows,
            summary,
        }
    }

    pub fn feature_columns(&self) -> &[String] {
        &self.feature_columns
    }

    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn summary(&self) -> PrepareSummary {
        self.summary
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// View over every row
    pub fn view(&self) -> TableView<'_> {
        TableView {
            rows: self.rows.iter().collect(),
        }
    }
}

/// Read-only selection of rows from a [`PreparedTable`]
#[derive(Debug, Clone, Default)]
pub struct TableView<'a> {
    rows: Vec<&'a Transaction>,
}

impl<'a> TableView<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Transaction> + '_ {
        self.rows.iter().copied()
    }

    /// Narrow the view to rows matching `predicate`
    pub fn filter<P>(&self, predicate: P) -> TableView<'a>
    where
        P: Fn(&Transaction) -> bool,
    {
        TableView {
            rows: self.rows.iter().copied().filter(|t| predicate(t)).collect(),
        }
    }

    pub fn fraud(&self) -> TableView<'a> {
        self.filter(Transaction::is_fraud)
    }

    pub fn normal(&self) -> TableView<'a> {
        self.filter(|t| !t.is_fraud())
    }

    /// Amount column of the view, in row order
    pub fn amounts(&self) -> Vec<f64> {
        self.rows.iter().map(|t| t.amount).collect()
    }
}
