//! ワークブック照合パイプライン
//!
//! 旧リスト列・新リスト列を読み込み、照合を実行して結果をまとめる。

use crate::error::{LabelMatchError, Result};
use crate::matcher::{self, MatchOptions, MatchResult, MatchSummary, TextRecord};
use crate::workbook::{self, SheetTable};
use std::path::PathBuf;

/// 照合対象の指定
#[derive(Debug, Clone)]
pub struct MatchRequest {
    /// 旧リスト（照合先）のファイル
    pub old_input: PathBuf,
    pub old_sheet: String,
    pub old_column: String,
    /// 新リスト（照合元）のファイル
    pub new_input: PathBuf,
    pub new_sheet: String,
    pub new_column: String,
    pub options: MatchOptions,
}

impl MatchRequest {
    /// 必須項目が空でないか確認する
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("旧シート名", &self.old_sheet),
            ("旧列名", &self.old_column),
            ("新シート名", &self.new_sheet),
            ("新列名", &self.new_column),
        ];
        for (label, value) in fields {
            if value.trim().is_empty() {
                return Err(LabelMatchError::MissingInput(label.to_string()));
            }
        }
        Ok(())
    }
}

/// 照合結果一式
#[derive(Debug, Clone)]
pub struct MatchReport {
    /// 新リストのシート（出力時に全列を書き戻す）
    pub table: SheetTable,
    pub old_records: Vec<TextRecord>,
    pub new_records: Vec<TextRecord>,
    /// `new_records` と同順
    pub results: Vec<MatchResult>,
    pub summary: MatchSummary,
}

/// ワークブックを読み込んで照合する
pub fn match_workbook<F>(request: &MatchRequest, on_progress: F) -> Result<MatchReport>
where
    F: FnMut(usize, usize),
{
    request.validate()?;

    let old_table = workbook::read_sheet(&request.old_input, &request.old_sheet)?;
    let old_records = old_table.column_records(&request.old_column)?;

    let table = workbook::read_sheet(&request.new_input, &request.new_sheet)?;
    let new_records = table.column_records(&request.new_column)?;

    log::info!(
        "旧リスト {}件 / 新リスト {}件 (距離閾値 {}, スコア閾値 {})",
        old_records.len(),
        new_records.len(),
        request.options.thresholds.distance,
        request.options.thresholds.score
    );

    let old_texts: Vec<&str> = old_records.iter().map(|r| r.text.as_str()).collect();
    let new_texts: Vec<&str> = new_records.iter().map(|r| r.text.as_str()).collect();

    let results = matcher::run(&old_texts, &new_texts, &request.options, on_progress)?;
    let summary = MatchSummary::from_results(&results);

    Ok(MatchReport {
        table,
        old_records,
        new_records,
        results,
        summary,
    })
}
