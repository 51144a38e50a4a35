//! Row filters used by the dashboard pages.
//!
//! Filtering always produces a new [`TableView`]; the prepared table is
//! never modified.

use super::model::{TableView, Transaction, TransactionType};
use serde::{Deserialize, Serialize};

/// Inclusive amount/hour bounds plus an optional class restriction.
/// An unset field does not constrain anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilter {
    pub amount_range: Option<(f64, f64)>,
    pub hour_range: Option<(f64, f64)>,
    pub class: Option<TransactionType>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_amount_range(mut self, min: f64, max: f64) -> Self {
        self.amount_range = Some((min, max));
        self
    }

    /// Bounds compare against the continuous `hour_of_day`
    pub fn with_hour_range(mut self, min: f64, max: f64) -> Self {
        self.hour_range = Some((min, max));
        self
    }

    pub fn with_class(mut self, class: TransactionType) -> Self {
        self.class = Some(class);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.amount_range.is_none() && self.hour_range.is_none() && self.class.is_none()
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        let in_range = |range: Option<(f64, f64)>, value: f64| match range {
            Some((min, max)) => value >= min && value <= max,
            None => true,
        };

        in_range(self.amount_range, transaction.amount)
            && in_range(self.hour_range, transaction.hour_of_day)
            && self.class.map_or(true, |c| transaction.transaction_type == c)
    }

    /// Apply the filter to a view
    ///
    /// **Public** - pages call this before any metrics function
    pub fn apply<'a>(&self, view: &TableView<'a>) -> TableView<'a> {
        if self.is_empty() {
            return view.clone();
        }
        view.filter(|t| self.matches(t))
    }
}
