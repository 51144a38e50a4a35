//! Plain-text rendering of page reports for the terminal.

use super::schema::{
    FraudReport, HomeSummary, OverviewReport, PageReport, RiskReport, TransactionReport,
};
use crate::metrics::GroupCount;
use crate::utils::config::ESTIMATED_SAVINGS_RATE;

const RULE_WIDTH: usize = 80;
const BAR_WIDTH: usize = 40;

/// Render any page report as a text summary
///
/// **Public** - main entry point for stdout output
pub fn render_text(report: &PageReport) -> String {
    let body = match report {
        PageReport::Home(r) => render_home(r),
        PageReport::Overview(r) => render_overview(r),
        PageReport::Transactions(r) => render_transactions(r),
        PageReport::Fraud(r) => render_fraud(r),
        PageReport::Risk(r) => render_risk(r),
    };

    let meta = report.meta();
    let mut lines = vec![
        "=".repeat(RULE_WIDTH),
        page_title(report).to_string(),
        "=".repeat(RULE_WIDTH),
    ];
    lines.extend(body);
    lines.push(String::new());
    lines.push(format!("  Source: {}  |  Generated: {}", meta.source, meta.generated_at));
    lines.push("=".repeat(RULE_WIDTH));

    lines.join("\n")
}

fn page_title(report: &PageReport) -> &'static str {
    match report {
        PageReport::Home(_) => "CREDIT CARD RISK DASHBOARD",
        PageReport::Overview(_) => "EXECUTIVE OVERVIEW - CREDIT CARD FRAUD RISK",
        PageReport::Transactions(_) => "TRANSACTION ANALYSIS",
        PageReport::Fraud(_) => "FRAUD TRANSACTION ANALYSIS",
        PageReport::Risk(_) => "RISK INSIGHTS & RECOMMENDATIONS",
    }
}

fn render_home(r: &HomeSummary) -> Vec<String> {
    vec![
        format!("  Total Transactions:  {}", r.total_transactions),
        format!(
            "  Fraud Transactions:  {} ({:.4}%)",
            r.fraud_transactions, r.fraud_rate
        ),
        format!("  Total Amount:        ${:.0}", r.total_amount),
    ]
}

fn render_overview(r: &OverviewReport) -> Vec<String> {
    let mut lines = vec![
        format!("  Total Transactions:  {}", r.stats.total_transactions),
        format!("  Total Amount:        ${:.0}", r.stats.total_amount),
        format!(
            "  Fraud Transactions:  {} ({:.3}% of total)",
            r.stats.fraud_transactions, r.stats.fraud_rate
        ),
        format!(
            "  Fraud Loss:          ${:.0} ({:.2}% of total)",
            r.stats.fraud_amount, r.stats.fraud_amount_percent
        ),
        String::new(),
        "  RISK SUMMARY".to_string(),
        format!("  - Fraud Rate: {:.4}% of transactions", r.stats.fraud_rate),
        format!("  - Average Fraud Loss: ${:.2} per transaction", r.impact.avg_loss_per_fraud),
        format!("  - Maximum Loss: ${:.2} in one transaction", r.impact.max_fraud_amount),
        format!(
            "  - Fraud losses represent {:.2}% of total amount",
            r.impact.loss_percentage
        ),
        format!("  - Average normal transaction: ${:.2}", r.stats.avg_normal_amount),
        String::new(),
        "  FRAUD TRANSACTIONS BY HOUR".to_string(),
    ];
    lines.extend(render_bars(&r.fraud_timeline));
    lines
}

fn render_transactions(r: &TransactionReport) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some((min, max)) = r.filter.amount_range {
        // An open upper bound is stored as f64::MAX
        if max == f64::MAX {
            lines.push(format!("  Amount range: ${:.2} and above", min));
        } else {
            lines.push(format!("  Amount range: ${:.2} - ${:.2}", min, max));
        }
    }
    if let Some((min, max)) = r.filter.hour_range {
        lines.push(format!("  Hour range:   {:.0} - {:.0}", min, max));
    }

    lines.push(format!("  Normal Transactions: {}", r.transaction_count));
    lines.push(format!("  Average Amount:      ${:.2}", r.average_amount));
    lines.push(format!("  Total Amount:        ${:.0}", r.total_amount));
    lines.push(String::new());
    lines.push("  CUSTOMER ACTIVITY THROUGHOUT THE DAY".to_string());
    lines.extend(render_bars(&r.hourly));
    lines.push(String::new());
    lines.push("  AMOUNT CATEGORY ANALYSIS".to_string());
    lines.extend(render_group_table(&r.categories));
    lines.push(String::new());

    let s = &r.amount_summary;
    lines.push("  SUMMARY STATISTICS".to_string());
    lines.push(format!(
        "  count {}  mean {:.2}  std {:.2}  min {:.2}  25% {:.2}  50% {:.2}  75% {:.2}  max {:.2}",
        s.count, s.mean, s.std, s.min, s.q25, s.median, s.q75, s.max
    ));

    lines
}

fn render_fraud(r: &FraudReport) -> Vec<String> {
    if let Some(warning) = &r.warning {
        return vec![format!("  ⚠ {}", warning)];
    }

    let mut lines = vec![
        format!("  Fraud Transactions:  {}", r.fraud_transactions),
        format!("  Percentage of Total: {:.4}%", r.share_of_total),
        format!("  Total Loss:          ${:.0}", r.total_loss),
        format!("  Maximum Loss:        ${:.2}", r.max_loss),
        String::new(),
        "  NORMAL VS FRAUD".to_string(),
    ];

    for c in &r.comparison {
        lines.push(format!(
            "  {:<8} count {:>10}  average ${:>10.2}",
            c.transaction_type.to_string(),
            c.count,
            c.average_amount
        ));
    }

    lines.push(String::new());
    lines.push("  FRAUD DISTRIBUTION BY HOUR".to_string());
    lines.extend(render_bars(&r.hourly));
    lines.push(String::new());
    lines.push("  FRAUD BY AMOUNT CATEGORY".to_string());
    lines.extend(render_group_table(&r.categories));
    lines.push(String::new());
    lines.push(format!("  TOP {} FRAUD TRANSACTIONS", r.top_frauds.len()));

    for (i, f) in r.top_frauds.iter().enumerate() {
        lines.push(format!(
            "  {:>2}. ${:>12.2}  hour {:>5.2}  {}",
            i + 1,
            f.amount,
            f.hour_of_day,
            f.amount_category
        ));
    }

    if let Some(findings) = &r.findings {
        lines.push(String::new());
        lines.push("  KEY FINDINGS".to_string());
        lines.push(format!(
            "  - Average Fraud Amount: ${:.2} ({:.1}x larger than normal)",
            findings.average_fraud_amount, findings.multiple_of_normal
        ));
        lines.push(format!("  - Peak Fraud Hour: {}:00", findings.peak_hour));
        lines.push(format!(
            "  - Highest Risk Category: {}",
            findings.highest_risk_category
        ));
    }

    lines
}

fn render_risk(r: &RiskReport) -> Vec<String> {
    let riskiest_hour = match r.risk.busiest_fraud_hour {
        Some(hour) => format!("{:02}:00", hour),
        None => "No data".to_string(),
    };

    let mut lines = vec![
        "  KEY RISK INDICATORS".to_string(),
        format!("  Fraud vs Normal Ratio: {:.1}x", r.risk.fraud_to_normal_ratio),
        format!("  Riskiest Hour:         {}", riskiest_hour),
        format!("  Total Fraud Loss:      ${:.0}", r.impact.total_fraud_loss),
        String::new(),
        "  RISK MATRIX BY AMOUNT CATEGORY".to_string(),
        format!(
            "  {:<22} {:>12} {:>12} {:>14}",
            "Category", "Normal", "Fraud", "Risk Rate (%)"
        ),
    ];

    for row in &r.risk_matrix {
        lines.push(format!(
            "  {:<22} {:>12} {:>12} {:>14.4}",
            row.category.label(),
            row.normal_count,
            row.fraud_count,
            row.risk_rate
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "  Estimated Annual Savings: ${:.0} ({:.0}% reduction target)",
        r.estimated_savings,
        ESTIMATED_SAVINGS_RATE * 100.0
    ));

    lines
}

/// Horizontal bar per group, scaled to the largest count
fn render_bars(groups: &[GroupCount]) -> Vec<String> {
    if groups.is_empty() {
        return vec!["  (no data)".to_string()];
    }

    let max = groups.iter().map(|g| g.count).max().unwrap_or(1).max(1);

    groups
        .iter()
        .map(|g| {
            let width = g.count * BAR_WIDTH / max;
            format!(
                "  {:>6} {:<width$} {:>8}",
                g.key.to_string(),
                "█".repeat(width),
                g.count,
                width = BAR_WIDTH
            )
        })
        .collect()
}

fn render_group_table(groups: &[GroupCount]) -> Vec<String> {
    if groups.is_empty() {
        return vec!["  (no data)".to_string()];
    }

    groups
        .iter()
        .map(|g| {
            format!(
                "  {:<22} {:>10} {:>8.2}%",
                g.key.to_string(),
                g.count,
                g.percentage
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::FraudHeatmap;
    use crate::data::TransactionFilter;
    use crate::metrics::{AmountSummary, FinancialImpact, RiskMetrics};
    use crate::report::schema::{HomeSummary, ReportMeta};

    fn meta() -> ReportMeta {
        ReportMeta::new("data/creditcard.csv")
    }

    #[test]
    fn test_home_text_contains_counts() {
        let report = PageReport::Home(HomeSummary {
            meta: meta(),
            total_transactions: 2,
            fraud_transactions: 1,
            fraud_rate: 50.0,
            total_amount: 200.0,
        });

        let text = render_text(&report);
        assert!(text.contains("CREDIT CARD RISK DASHBOARD"));
        assert!(text.contains("Total Transactions:  2"));
        assert!(text.contains("(50.0000%)"));
        assert!(text.contains("data/creditcard.csv"));
    }

    #[test]
    fn test_risk_text_without_fraud_hour() {
        let report = PageReport::Risk(RiskReport {
            meta: meta(),
            risk: RiskMetrics::default(),
            impact: FinancialImpact::default(),
            risk_matrix: Vec::new(),
            estimated_savings: 0.0,
            heatmap: FraudHeatmap { rows: Vec::new() },
        });

        let text = render_text(&report);
        assert!(text.contains("Riskiest Hour:         No data"));
    }

    #[test]
    fn test_open_amount_range_renders_and_above() {
        let filter = TransactionFilter::new().with_amount_range(100.0, f64::MAX);
        let report = PageReport::Transactions(TransactionReport {
            meta: meta(),
            filter,
            transaction_count: 0,
            average_amount: 0.0,
            total_amount: 0.0,
            hourly: Vec::new(),
            categories: Vec::new(),
            amount_summary: AmountSummary::default(),
        });

        let text = render_text(&report);
        let range_line = text.lines().find(|l| l.contains("Amount range")).unwrap();
        assert_eq!(range_line, "  Amount range: $100.00 and above");
    }

    #[test]
    fn test_empty_groups_render_placeholder() {
        assert_eq!(render_bars(&[]), vec!["  (no data)".to_string()]);
    }
}
