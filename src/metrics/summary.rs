//! Descriptive statistics of the amount column.

use super::stats::{max, mean};
use crate::data::TableView;
use serde::{Deserialize, Serialize};

/// count / mean / std / min / quartiles / max of `amount`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AmountSummary {
    pub count: usize,
    pub mean: f64,

    /// Sample standard deviation (n - 1); 0 for fewer than two rows
    pub std: f64,

    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Describe the amounts of a view
///
/// **Public** - quartiles use linear interpolation between closest ranks
pub fn amount_summary(view: &TableView<'_>) -> AmountSummary {
    let mut amounts = view.amounts();
    if amounts.is_empty() {
        return AmountSummary::default();
    }

    amounts.sort_by(f64::total_cmp);

    let count = amounts.len();
    let mean = mean(&amounts);
    let std = if count > 1 {
        let squares: f64 = amounts.iter().map(|a| (a - mean).powi(2)).sum();
        (squares / (count - 1) as f64).sqrt()
    } else {
        0.0
    };

    AmountSummary {
        count,
        mean,
        std,
        min: amounts[0],
        q25: quantile(&amounts, 0.25),
        median: quantile(&amounts, 0.5),
        q75: quantile(&amounts, 0.75),
        max: max(&amounts),
    }
}

/// **Private** - `sorted` must be non-empty and ascending
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;

    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{PrepareSummary, PreparedTable, Transaction};

    fn table(amounts: &[f64]) -> PreparedTable {
        let rows = amounts
            .iter()
            .map(|a| Transaction::new(0.0, *a, 0, Vec::new()).unwrap())
            .collect();
        PreparedTable::new(Vec::new(), rows, PrepareSummary::default())
    }

    #[test]
    fn test_amount_summary() {
        let table = table(&[4.0, 1.0, 3.0, 2.0]);
        let summary = amount_summary(&table.view());

        assert_eq!(summary.count, 4);
        assert_eq!(summary.mean, 2.5);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 4.0);
        assert_eq!(summary.q25, 1.75);
        assert_eq!(summary.median, 2.5);
        assert_eq!(summary.q75, 3.25);
        assert!((summary.std - 1.290_994).abs() < 1e-6);
    }

    #[test]
    fn test_single_row_has_zero_std() {
        let table = table(&[42.0]);
        let summary = amount_summary(&table.view());

        assert_eq!(summary.std, 0.0);
        assert_eq!(summary.median, 42.0);
    }

    #[test]
    fn test_empty_summary() {
        let table = table(&[]);
        assert_eq!(amount_summary(&table.view()), AmountSummary::default());
    }
}
