//! Builds one report per dashboard page from a prepared view.

use super::schema::{
    FraudFindings, FraudReport, HomeSummary, OverviewReport, ReportMeta, RiskReport,
    TransactionReport,
};
use crate::charts::{amount_distribution, fraud_heatmap, fraud_timeline};
use crate::data::{TableView, TransactionFilter};
use crate::metrics::{
    amount_summary, basic_stats, class_comparison, estimated_savings, financial_impact,
    grouped_counts, peak_group, risk_matrix, risk_metrics, top_fraud_transactions, GroupBy,
    GroupKey,
};
use crate::utils::config::{DEFAULT_HISTOGRAM_BINS, ESTIMATED_SAVINGS_RATE, TOP_FRAUD_LIMIT};
use log::{debug, warn};

/// Landing page quick stats
pub fn home_summary(view: &TableView<'_>, source: &str) -> HomeSummary {
    let stats = basic_stats(view);

    HomeSummary {
        meta: ReportMeta::new(source),
        total_transactions: stats.total_transactions,
        fraud_transactions: stats.fraud_transactions,
        fraud_rate: stats.fraud_rate,
        total_amount: stats.total_amount,
    }
}

/// Executive overview page
pub fn overview_report(view: &TableView<'_>, source: &str) -> OverviewReport {
    let stats = basic_stats(view);
    debug!("Overview: {}", stats.summary());

    OverviewReport {
        meta: ReportMeta::new(source),
        stats,
        impact: financial_impact(view),
        fraud_timeline: fraud_timeline(view),
        amount_distribution: amount_distribution(view, DEFAULT_HISTOGRAM_BINS),
    }
}

/// Transaction analysis page
///
/// **Public** - only normal transactions are analysed; `filter` narrows
/// them further by amount and hour
pub fn transaction_report(
    view: &TableView<'_>,
    filter: &TransactionFilter,
    source: &str,
) -> TransactionReport {
    let filtered = filter.apply(&view.normal());
    let summary = amount_summary(&filtered);

    debug!("Transaction analysis: {} of {} rows pass the filter", filtered.len(), view.len());

    TransactionReport {
        meta: ReportMeta::new(source),
        filter: *filter,
        transaction_count: filtered.len(),
        average_amount: summary.mean,
        total_amount: filtered.amounts().iter().sum(),
        hourly: grouped_counts(&filtered, GroupBy::Hour),
        categories: grouped_counts(&filtered, GroupBy::AmountCategory),
        amount_summary: summary,
    }
}

/// Fraud analysis page
///
/// **Public** - a view without fraud yields a report with a warning and
/// empty sections instead of an error
pub fn fraud_report(view: &TableView<'_>, source: &str) -> FraudReport {
    let fraud = view.fraud();
    let stats = basic_stats(view);
    let impact = financial_impact(view);

    let hourly = grouped_counts(&fraud, GroupBy::Hour);
    let categories = grouped_counts(&fraud, GroupBy::AmountCategory);

    let warning = if fraud.is_empty() {
        warn!("No fraud transactions found in the data");
        Some("No fraud transactions found in the data".to_string())
    } else {
        None
    };

    let peaks = (
        peak_group(&hourly).map(|g| g.key),
        peak_group(&categories).map(|g| g.key),
    );
    let findings = match peaks {
        (Some(GroupKey::Hour(peak_hour)), Some(GroupKey::Category(highest_risk_category))) => {
            let risk = risk_metrics(view);
            Some(FraudFindings {
                average_fraud_amount: risk.avg_fraud_amount,
                multiple_of_normal: risk.fraud_to_normal_ratio,
                peak_hour,
                highest_risk_category,
            })
        }
        _ => None,
    };

    FraudReport {
        meta: ReportMeta::new(source),
        warning,
        fraud_transactions: stats.fraud_transactions,
        share_of_total: stats.fraud_rate,
        total_loss: impact.total_fraud_loss,
        max_loss: impact.max_fraud_amount,
        comparison: class_comparison(view),
        hourly,
        categories,
        top_frauds: top_fraud_transactions(view, TOP_FRAUD_LIMIT),
        findings,
    }
}

/// Risk insights page
pub fn risk_report(view: &TableView<'_>, source: &str) -> RiskReport {
    let impact = financial_impact(view);

    RiskReport {
        meta: ReportMeta::new(source),
        risk: risk_metrics(view),
        impact,
        risk_matrix: risk_matrix(view),
        estimated_savings: estimated_savings(&impact, ESTIMATED_SAVINGS_RATE),
        heatmap: fraud_heatmap(view),
    }
}
