mod support;

use startup_risk::dashboard::{DashboardQuery, TableColumn, render};
use startup_risk::dataset::loader::{REQUIRED_COLUMNS, STATE_CODE};
use startup_risk::dataset::{DatasetLoadError, RiskBucket, load_dataset};
use support::csv_fixture::{FULL_HEADER, SCENARIO_ROWS, without_column, write_csv};
use tempfile::tempdir;

#[test]
fn loads_scenario_file_from_disk() {
    let dir = tempdir().unwrap();
    let path = write_csv(dir.path(), "portfolio.csv", FULL_HEADER, &SCENARIO_ROWS);

    let dataset = load_dataset(&path).unwrap();

    assert_eq!(dataset.len(), 3);
    assert!(dataset.has_state_code());
    assert_eq!(dataset.source(), path.as_path());
    let first = &dataset.records()[0];
    assert_eq!(first.name.as_deref(), Some("A"));
    assert_eq!(first.risk_bucket_rf, RiskBucket::High);
    assert!(first.target_failure);
    assert!(first.is_top500);
}

#[test]
fn every_required_column_is_checked() {
    let dir = tempdir().unwrap();
    for column in REQUIRED_COLUMNS {
        let (header, rows) = without_column(column, &SCENARIO_ROWS);
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        let path = write_csv(dir.path(), &format!("no_{column}.csv"), &header, &rows);

        match load_dataset(&path) {
            Err(DatasetLoadError::MissingColumn { column: missing, .. }) => {
                assert_eq!(missing, column);
            }
            other => panic!("expected MissingColumn for {column}, got {other:?}"),
        }
    }
}

#[test]
fn state_column_is_optional() {
    let dir = tempdir().unwrap();
    let (header, rows) = without_column(STATE_CODE, &SCENARIO_ROWS);
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    let path = write_csv(dir.path(), "stateless.csv", &header, &rows);

    let dataset = load_dataset(&path).unwrap();

    assert!(!dataset.has_state_code());
    assert!(dataset.records().iter().all(|record| record.state_code.is_none()));
}

#[test]
fn missing_file_reports_open_error_with_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let err = load_dataset(&path).unwrap_err();

    assert!(matches!(err, DatasetLoadError::Open { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn bad_value_names_row_and_column() {
    let dir = tempdir().unwrap();
    let rows = [SCENARIO_ROWS[0], "B,CA,250000,1,1,2,0,0,1.5,Low"];
    let path = write_csv(dir.path(), "bad_prob.csv", FULL_HEADER, &rows);

    match load_dataset(&path) {
        Err(DatasetLoadError::InvalidValue { row, column, value, .. }) => {
            assert_eq!(row, 2);
            assert_eq!(column, "pred_failure_prob_rf");
            assert_eq!(value, "1.5");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn extra_columns_reach_the_data_table() {
    let dir = tempdir().unwrap();
    let header = format!("{FULL_HEADER},category_code,founded_year");
    let rows = ["A,CA,10,1,1,1,0,1,0.8,High,software,2007"];
    let path = write_csv(dir.path(), "extended.csv", &header, &rows);

    let dataset = load_dataset(&path).unwrap();
    let view = render(&dataset, &DashboardQuery::default());
    let portfolio = view.portfolio().unwrap();

    let headers: Vec<&str> = portfolio
        .table_columns
        .iter()
        .map(|(_, header)| *header)
        .collect();
    assert_eq!(headers.len(), TableColumn::FIXED.len() + 2);
    assert_eq!(&headers[TableColumn::FIXED.len()..], ["category_code", "founded_year"]);
    let cells: Vec<String> = portfolio
        .table_columns
        .iter()
        .map(|(column, _)| column.cell(portfolio.table[0]))
        .collect();
    assert!(cells.iter().any(|cell| cell == "software"));
    assert_eq!(cells.last().map(String::as_str), Some("2007"));
}

#[test]
fn header_only_file_is_an_empty_dataset() {
    let dir = tempdir().unwrap();
    let path = write_csv(dir.path(), "empty.csv", FULL_HEADER, &[]);

    let dataset = load_dataset(&path).unwrap();

    assert!(dataset.is_empty());
}

#[test]
fn bundled_sample_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join(startup_risk::dataset::DEFAULT_DATA_PATH);

    let dataset = load_dataset(&path).unwrap();

    assert!(!dataset.is_empty());
    assert!(dataset.has_state_code());
}
