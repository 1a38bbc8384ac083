//! JSON出力

use crate::error::Result;
use crate::pipeline::MatchReport;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct JsonRow<'a> {
    row: usize,
    text: &'a str,
    label: &'a str,
    matched: bool,
    old_row: Option<usize>,
    distance: Option<f64>,
    score: Option<f64>,
}

pub fn generate_json(report: &MatchReport, output_path: &Path) -> Result<()> {
    let rows: Vec<JsonRow> = report
        .results
        .iter()
        .zip(&report.new_records)
        .map(|(result, record)| JsonRow {
            row: record.row,
            text: &record.text,
            label: result.label.as_str(),
            matched: result.label.is_match(),
            old_row: result
                .label
                .is_match()
                .then(|| result.candidate.map(|c| report.old_records[c.old_index].row))
                .flatten(),
            distance: result.candidate.map(|c| c.distance),
            score: result.score,
        })
        .collect();

    let json = serde_json::to_string_pretty(&rows)?;
    std::fs::write(output_path, json)?;
    Ok(())
}
