use card_risk_dashboard::commands::{
    execute_dashboard, execute_page, render_page_charts, Page, PageArgs,
};
use card_risk_dashboard::data::{parse_records, prepare, DatasetCache, PreparedTable, TransactionFilter};
use card_risk_dashboard::output::read_report;
use card_risk_dashboard::report::{
    fraud_report, overview_report, risk_report, transaction_report, PageReport,
};
use pretty_assertions::assert_eq;
use std::path::Path;

const SAMPLE_CSV: &str = "\
Time,V1,V2,Amount,Class
0,-1.36,-0.07,149.62,0
0,1.19,0.26,2.69,0
1,-1.36,-1.34,378.66,0
3700,-0.97,-0.19,123.5,1
7300,-1.16,0.88,69.99,0
7300,-1.16,0.88,69.99,0
40000,0.5,0.1,1809.68,1
80000,2.1,-0.3,529.0,1
";

fn sample_table() -> PreparedTable {
    prepare(parse_records(SAMPLE_CSV).unwrap()).unwrap()
}

fn write_sample(dir: &Path) -> String {
    let path = dir.join("creditcard.csv");
    std::fs::write(&path, SAMPLE_CSV).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_overview_report() {
    let table = sample_table();
    let report = overview_report(&table.view(), "sample");

    assert_eq!(report.stats.total_transactions, 7);
    assert_eq!(report.stats.fraud_transactions, 3);
    assert_eq!(report.amount_distribution.fraud.total(), 3);
    assert_eq!(report.amount_distribution.normal.total(), 4);

    let timeline_total: usize = report.fraud_timeline.iter().map(|g| g.count).sum();
    assert_eq!(timeline_total, 3);
}

#[test]
fn test_transaction_report_only_counts_normal_rows() {
    let table = sample_table();
    let filter = TransactionFilter::new().with_amount_range(50.0, 400.0);
    let report = transaction_report(&table.view(), &filter, "sample");

    // 149.62, 378.66 and 69.99 are normal; 123.5 is fraud
    assert_eq!(report.transaction_count, 3);
    assert_eq!(report.filter, filter);
    assert!((report.total_amount - (149.62 + 378.66 + 69.99)).abs() < 1e-9);
}

#[test]
fn test_fraud_report_findings() {
    let table = sample_table();
    let report = fraud_report(&table.view(), "sample");

    assert!(report.warning.is_none());
    assert_eq!(report.top_frauds[0].amount, 1809.68);

    let findings = report.findings.unwrap();
    assert_eq!(findings.peak_hour, 1);
}

#[test]
fn test_fraud_report_without_fraud_warns() {
    let table = prepare(parse_records("Time,Amount,Class\n0,10,0\n60,20,0\n").unwrap()).unwrap();
    let report = fraud_report(&table.view(), "sample");

    assert!(report.warning.is_some());
    assert!(report.findings.is_none());
    assert!(report.top_frauds.is_empty());
    assert_eq!(report.fraud_transactions, 0);
}

#[test]
fn test_risk_report_savings() {
    let table = sample_table();
    let report = risk_report(&table.view(), "sample");

    let expected = (123.5 + 1809.68 + 529.0) * 0.30;
    assert!((report.estimated_savings - expected).abs() < 1e-9);
    assert_eq!(report.risk_matrix.len(), 4);
    assert_eq!(report.heatmap.rows.len(), 4);
}

#[test]
fn test_charts_render_for_every_page_with_data() {
    let table = sample_table();
    let report = PageReport::Risk(risk_report(&table.view(), "sample"));

    let charts = render_page_charts(&report);
    assert_eq!(charts.len(), 2);
    assert!(charts.iter().all(|(_, svg)| svg.is_ok()));
}

#[test]
fn test_execute_page_writes_json() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = temp_dir.path().join("out/home.json");
    let args = PageArgs {
        source: write_sample(temp_dir.path()),
        output_json: Some(output.clone()),
        ..Default::default()
    };

    let mut cache = DatasetCache::new();
    let report = execute_page(Page::Home, &args, &mut cache).unwrap();

    assert_eq!(read_report(&output).unwrap(), report);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_dashboard_writes_every_page() {
    let temp_dir = tempfile::tempdir().unwrap();
    let reports_dir = temp_dir.path().join("reports");
    let charts_dir = temp_dir.path().join("charts");
    let args = PageArgs {
        source: write_sample(temp_dir.path()),
        charts_dir: Some(charts_dir.clone()),
        ..Default::default()
    };

    let reports = execute_dashboard(&args, Some(reports_dir.as_path())).unwrap();

    assert_eq!(reports.len(), Page::ALL.len());
    for page in Page::ALL {
        assert!(reports_dir.join(format!("{}.json", page)).exists());
    }
    assert!(charts_dir.join("fraud_heatmap.svg").exists());
    assert!(charts_dir.join("fraud_timeline.svg").exists());
}

#[test]
fn test_dashboard_fails_when_source_is_missing() {
    let args = PageArgs {
        source: "no/such/file.csv".to_string(),
        ..Default::default()
    };

    assert!(execute_dashboard(&args, None).is_err());
}
