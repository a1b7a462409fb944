use std::path::{Path, PathBuf};

pub const FULL_HEADER: &str = "name,state_code,funding_total_usd,funding_rounds,milestones,\
relationships,is_top500,target_failure,pred_failure_prob_rf,risk_bucket_rf";

/// Scenario portfolio: two California startups and one in New York.
pub const SCENARIO_ROWS: [&str; 3] = [
    "A,CA,1000000,2,3,5,1,1,0.8,High",
    "B,CA,250000,1,1,2,0,0,0.2,Low",
    "C,NY,5000000,4,2,9,1,1,0.5,Medium",
];

pub fn csv_text(header: &str, rows: &[&str]) -> String {
    let mut text = String::from(header);
    text.push('\n');
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}

/// Write `header` and `rows` to `dir/name` and return the path.
pub fn write_csv(dir: &Path, name: &str, header: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, csv_text(header, rows)).expect("write csv fixture");
    path
}

/// Header with `column` dropped, along with the matching cell from each row.
pub fn without_column(column: &str, rows: &[&str]) -> (String, Vec<String>) {
    let headers: Vec<&str> = FULL_HEADER.split(',').collect();
    let skip = headers
        .iter()
        .position(|header| *header == column)
        .expect("column in fixture header");
    let keep = |line: &str| {
        line.split(',')
            .enumerate()
            .filter(|(idx, _)| *idx != skip)
            .map(|(_, cell)| cell)
            .collect::<Vec<_>>()
            .join(",")
    };
    let header = keep(FULL_HEADER);
    let rows = rows.iter().map(|row| keep(row)).collect();
    (header, rows)
}
