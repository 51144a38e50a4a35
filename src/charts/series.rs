//! Chart data: the numbers behind each dashboard chart.

use crate::data::{AmountCategory, TableView};
use crate::metrics::{grouped_counts, GroupBy, GroupCount};
use serde::{Deserialize, Serialize};

/// A labelled sequence of values, ready to draw as bars or a line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.points.push(SeriesPoint {
            label: label.into(),
            value,
        });
    }

    /// One point per group, valued by count
    pub fn from_groups(name: impl Into<String>, groups: &[GroupCount]) -> Self {
        let mut series = Series::new(name);
        for group in groups {
            series.push(group.key.to_string(), group.count as f64);
        }
        series
    }

    /// One point per histogram bin, labelled with the bin's lower edge
    pub fn from_histogram(name: impl Into<String>, histogram: &Histogram) -> Self {
        let mut series = Series::new(name);
        for (i, count) in histogram.counts.iter().enumerate() {
            let lower = histogram.start + histogram.bin_width * i as f64;
            series.push(format!("{:.0}", lower), *count as f64);
        }
        series
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }
}

/// Equal-width histogram
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Lower edge of the first bin
    pub start: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins spanning [min, max].
    /// The last bin is closed on both ends. Empty input gives an empty histogram.
    pub fn from_values(values: &[f64], bins: usize) -> Self {
        if values.is_empty() || bins == 0 {
            return Histogram::default();
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        // A single distinct value gets a unit-wide range around it
        let (start, end) = if max > min { (min, max) } else { (min - 0.5, min + 0.5) };
        let bin_width = (end - start) / bins as f64;

        let mut counts = vec![0usize; bins];
        for value in values {
            let idx = ((value - start) / bin_width).floor() as usize;
            counts[idx.min(bins - 1)] += 1;
        }

        Histogram {
            start,
            bin_width,
            counts,
        }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Side-by-side amount histograms of normal and fraud rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmountDistribution {
    pub normal: Histogram,
    pub fraud: Histogram,
}

/// Fraud rate per amount category and hour of day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudHeatmap {
    pub rows: Vec<HeatmapRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapRow {
    pub category: AmountCategory,

    /// Fraction of fraud rows (0.0 - 1.0) for hours 0-23; 0 where the cell is empty
    pub rates: [f64; 24],
}

/// Fraud counts per hour of day
///
/// **Public** - hours without fraud are omitted
pub fn fraud_timeline(view: &TableView<'_>) -> Vec<GroupCount> {
    grouped_counts(&view.fraud(), GroupBy::Hour)
}

/// Amount histograms for normal and fraud rows
pub fn amount_distribution(view: &TableView<'_>, bins: usize) -> AmountDistribution {
    AmountDistribution {
        normal: Histogram::from_values(&view.normal().amounts(), bins),
        fraud: Histogram::from_values(&view.fraud().amounts(), bins),
    }
}

/// Fraud rate for every amount category × hour cell
pub fn fraud_heatmap(view: &TableView<'_>) -> FraudHeatmap {
    let rows = AmountCategory::ALL
        .iter()
        .map(|category| {
            let mut totals = [0usize; 24];
            let mut frauds = [0usize; 24];

            for t in view.iter().filter(|t| t.amount_category == *category) {
                let hour = t.hour_bin() as usize;
                totals[hour] += 1;
                if t.is_fraud() {
                    frauds[hour] += 1;
                }
            }

            let mut rates = [0.0; 24];
            for hour in 0..24 {
                if totals[hour] > 0 {
                    rates[hour] = frauds[hour] as f64 / totals[hour] as f64;
                }
            }

            HeatmapRow {
                category: *category,
                rates,
            }
        })
        .collect();

    FraudHeatmap { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{PrepareSummary, PreparedTable, Transaction};

    fn table(rows: &[(f64, f64, u8)]) -> PreparedTable {
        let rows = rows
            .iter()
            .map(|(time, amount, class)| Transaction::new(*time, *amount, *class, Vec::new()).unwrap())
            .collect();
        PreparedTable::new(Vec::new(), rows, PrepareSummary::default())
    }

    #[test]
    fn test_histogram_counts_every_value() {
        let values = [0.0, 1.0, 2.5, 7.5, 10.0];
        let histogram = Histogram::from_values(&values, 4);

        assert_eq!(histogram.start, 0.0);
        assert_eq!(histogram.bin_width, 2.5);
        assert_eq!(histogram.counts, vec![2, 1, 0, 2]);
        assert_eq!(histogram.total(), values.len());
    }

    #[test]
    fn test_histogram_single_value() {
        let histogram = Histogram::from_values(&[5.0, 5.0], 10);
        assert_eq!(histogram.total(), 2);
    }

    #[test]
    fn test_histogram_empty() {
        assert!(Histogram::from_values(&[], 50).counts.is_empty());
    }

    #[test]
    fn test_fraud_timeline_only_fraud_hours() {
        let table = table(&[(0.0, 1.0, 1), (3600.0, 1.0, 0), (3600.0 * 5.0, 1.0, 1)]);
        let timeline = fraud_timeline(&table.view());

        let series = Series::from_groups("fraud", &timeline);
        let labels: Vec<&str> = series.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["00:00", "05:00"]);
    }

    #[test]
    fn test_fraud_heatmap_rates() {
        let table = table(&[(0.0, 10.0, 1), (0.0, 20.0, 0), (3600.0 * 3.0, 2000.0, 1)]);
        let heatmap = fraud_heatmap(&table.view());

        assert_eq!(heatmap.rows.len(), 4);
        assert_eq!(heatmap.rows[0].rates[0], 0.5);
        assert_eq!(heatmap.rows[3].rates[3], 1.0);
        assert_eq!(heatmap.rows[1].rates.iter().sum::<f64>(), 0.0);
    }
}
