use card_risk_dashboard::data::{
    AmountCategory, PrepareSummary, PreparedTable, Transaction, TransactionFilter,
};
use card_risk_dashboard::metrics::{
    amount_summary, basic_stats, financial_impact, grouped_counts, risk_matrix, risk_metrics,
    top_fraud_transactions, BasicStats, FinancialImpact, GroupBy, GroupKey,
};
use pretty_assertions::assert_eq;

/// (time seconds, amount, class)
fn table(rows: &[(f64, f64, u8)]) -> PreparedTable {
    let rows = rows
        .iter()
        .map(|(time, amount, class)| Transaction::new(*time, *amount, *class, vec![0.0]).unwrap())
        .collect();
    PreparedTable::new(vec!["V1".to_string()], rows, PrepareSummary::default())
}

fn mixed_table() -> PreparedTable {
    table(&[
        (0.0, 50.0, 0),
        (1800.0, 150.0, 1),
        (3600.0, 20.0, 0),
        (7300.0, 1200.0, 1),
        (7400.0, 600.0, 0),
        (86_000.0, 90.0, 1),
        (50_000.0, 300.0, 0),
    ])
}

#[test]
fn test_two_row_scenario() {
    let table = table(&[(0.0, 50.0, 0), (7200.0, 150.0, 1)]);
    let view = table.view();

    let stats = basic_stats(&view);
    assert_eq!(stats.total_transactions, 2);
    assert_eq!(stats.fraud_transactions, 1);
    assert_eq!(stats.fraud_rate, 50.0);
    assert_eq!(stats.total_amount, 200.0);
    assert_eq!(stats.fraud_amount, 150.0);
    assert_eq!(stats.fraud_amount_percent, 75.0);

    let risk = risk_metrics(&view);
    assert_eq!(risk.fraud_to_normal_ratio, 3.0);
    assert_eq!(risk.busiest_fraud_hour, Some(2));
}

#[test]
fn test_counts_partition_the_view() {
    let table = mixed_table();
    let stats = basic_stats(&table.view());

    assert_eq!(
        stats.fraud_transactions + stats.normal_transactions,
        stats.total_transactions
    );
    assert_eq!(stats.total_transactions, 7);
}

#[test]
fn test_group_percentages_sum_to_hundred() {
    let table = mixed_table();
    let view = table.view();

    for group_by in [GroupBy::Hour, GroupBy::AmountCategory] {
        let groups = grouped_counts(&view, group_by);
        let total: f64 = groups.iter().map(|g| g.percentage).sum();
        let count: usize = groups.iter().map(|g| g.count).sum();

        assert!((total - 100.0).abs() < 1e-9, "{:?} sums to {}", group_by, total);
        assert_eq!(count, view.len());
    }
}

#[test]
fn test_hour_groups_are_ascending() {
    let table = mixed_table();
    let keys: Vec<GroupKey> = grouped_counts(&table.view(), GroupBy::Hour)
        .iter()
        .map(|g| g.key)
        .collect();

    assert_eq!(
        keys,
        vec![
            GroupKey::Hour(0),
            GroupKey::Hour(1),
            GroupKey::Hour(2),
            GroupKey::Hour(13),
            GroupKey::Hour(23),
        ]
    );
}

#[test]
fn test_empty_view_is_all_zero() {
    let table = table(&[]);
    let view = table.view();

    assert_eq!(basic_stats(&view), BasicStats::default());
    assert_eq!(risk_metrics(&view).busiest_fraud_hour, None);
    assert_eq!(financial_impact(&view), FinancialImpact::default());
    assert!(grouped_counts(&view, GroupBy::Hour).is_empty());
    assert_eq!(amount_summary(&view).count, 0);
}

#[test]
fn test_filtered_metrics_leave_table_untouched() {
    let table = mixed_table();
    let before = table.clone();

    let filter = TransactionFilter::new().with_amount_range(100.0, 1000.0);
    let filtered = filter.apply(&table.view());
    let stats = basic_stats(&filtered);

    assert_eq!(stats.total_transactions, 3);
    assert_eq!(stats.fraud_transactions, 1);
    assert_eq!(table, before);
}

#[test]
fn test_risk_matrix_covers_every_category() {
    let table = mixed_table();
    let matrix = risk_matrix(&table.view());

    let categories: Vec<AmountCategory> = matrix.iter().map(|r| r.category).collect();
    assert_eq!(categories, AmountCategory::ALL.to_vec());

    let very_large = &matrix[3];
    assert_eq!(very_large.fraud_count, 1);
    assert_eq!(very_large.normal_count, 0);
    assert_eq!(very_large.risk_rate, 100.0);
}

#[test]
fn test_top_frauds_descending() {
    let table = mixed_table();
    let amounts: Vec<f64> = top_fraud_transactions(&table.view(), 2)
        .iter()
        .map(|f| f.amount)
        .collect();

    assert_eq!(amounts, vec![1200.0, 150.0]);
}

#[test]
fn test_loss_percentage() {
    let table = mixed_table();
    let impact = financial_impact(&table.view());

    assert_eq!(impact.total_fraud_loss, 1440.0);
    assert_eq!(impact.total_transactions_volume, 2410.0);
    assert_eq!(impact.max_fraud_amount, 1200.0);
    assert!((impact.loss_percentage - 1440.0 / 2410.0 * 100.0).abs() < 1e-9);
}
