//! Excel出力（rust_xlsxwriter）
//!
//! 新リストのシートを全列そのまま書き出し、照合結果列を書き込む。
//! 結果列（`--with-scores` 時は Distance/Score 列も）が既にあればその列を上書きし、
//! 無ければ末尾に追加する。表は読み込んだシート上と同じ位置に書く。

use super::ExportOptions;
use crate::error::{LabelMatchError, Result};
use crate::pipeline::MatchReport;
use crate::workbook::{Cell, SheetTable};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;

const DISTANCE_COLUMN: &str = "Distance";
const SCORE_COLUMN: &str = "Score";
/// Excelシートの最大列数
const MAX_COLUMNS: usize = 16_384;

fn xlsx_error(e: XlsxError) -> LabelMatchError {
    LabelMatchError::ExcelGeneration(e.to_string())
}

/// 出力列の配置
#[derive(Debug, PartialEq)]
struct ColumnLayout {
    headers: Vec<String>,
    result: usize,
    distance: Option<usize>,
    score: Option<usize>,
}

impl ColumnLayout {
    fn new(table: &SheetTable, options: &ExportOptions) -> Self {
        let mut headers = table.headers.clone();
        let mut place = |name: &str| match table.column_index(name) {
            Ok(index) => index,
            Err(_) => {
                headers.push(name.to_string());
                headers.len() - 1
            }
        };

        let result = place(&options.result_column);
        let (distance, score) = if options.with_scores {
            (Some(place(DISTANCE_COLUMN)), Some(place(SCORE_COLUMN)))
        } else {
            (None, None)
        };

        Self {
            headers,
            result,
            distance,
            score,
        }
    }

    /// 照合結果で上書きする列か
    fn is_output(&self, col: usize) -> bool {
        col == self.result || self.distance == Some(col) || self.score == Some(col)
    }
}

/// 日付・時刻セルの表示形式
struct DateFormats {
    date: Format,
    time: Format,
    datetime: Format,
}

impl DateFormats {
    fn new() -> Self {
        Self {
            date: Format::new().set_num_format("yyyy-mm-dd"),
            time: Format::new().set_num_format("hh:mm:ss"),
            datetime: Format::new().set_num_format("yyyy-mm-dd hh:mm:ss"),
        }
    }

    fn for_serial(&self, serial: f64) -> &Format {
        if serial.fract() == 0.0 {
            &self.date
        } else if serial < 1.0 {
            &self.time
        } else {
            &self.datetime
        }
    }
}

pub fn generate_excel(report: &MatchReport, output_path: &Path, options: &ExportOptions) -> Result<()> {
    let table = &report.table;
    let layout = ColumnLayout::new(table, options);

    if table.first_col as usize + layout.headers.len() > MAX_COLUMNS {
        return Err(LabelMatchError::ExcelGeneration(format!(
            "列数が多すぎます: {}",
            layout.headers.len()
        )));
    }

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let date_formats = DateFormats::new();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&table.name).map_err(xlsx_error)?;

    let header_row = table.header_row;
    let column = |index: usize| table.first_col + index as u16;

    for (col, header) in layout.headers.iter().enumerate() {
        worksheet
            .write_string_with_format(header_row, column(col), header, &header_format)
            .map_err(xlsx_error)?;
    }

    for (index, cells) in table.rows.iter().enumerate() {
        let row = header_row + 1 + index as u32;

        for (col, cell) in cells.iter().enumerate() {
            if layout.is_output(col) {
                continue;
            }
            write_cell(worksheet, row, column(col), cell, &date_formats)?;
        }

        // 結果は新リストと同順・同数
        let Some(result) = report.results.get(index) else {
            continue;
        };
        worksheet
            .write_string(row, column(layout.result), result.label.as_str())
            .map_err(xlsx_error)?;

        if let (Some(col), Some(candidate)) = (layout.distance, &result.candidate) {
            worksheet
                .write_number(row, column(col), candidate.distance)
                .map_err(xlsx_error)?;
        }
        if let (Some(col), Some(score)) = (layout.score, result.score) {
            worksheet
                .write_number(row, column(col), score)
                .map_err(xlsx_error)?;
        }
    }

    worksheet
        .set_freeze_panes(header_row + 1, table.first_col)
        .map_err(xlsx_error)?;

    workbook.save(output_path).map_err(xlsx_error)?;
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    date_formats: &DateFormats,
) -> Result<()> {
    match cell {
        Cell::Empty => {}
        Cell::Text(text) => {
            worksheet.write_string(row, col, text).map_err(xlsx_error)?;
        }
        Cell::Number(n) => {
            worksheet.write_number(row, col, *n).map_err(xlsx_error)?;
        }
        Cell::DateTime(serial) => {
            worksheet
                .write_number_with_format(row, col, *serial, date_formats.for_serial(*serial))
                .map_err(xlsx_error)?;
        }
        Cell::Bool(b) => {
            worksheet.write_boolean(row, col, *b).map_err(xlsx_error)?;
        }
    }
    Ok(())
}
