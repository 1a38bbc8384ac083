//! Excel読み込み（calamine）

use super::{Cell, SheetTable};
use crate::error::{LabelMatchError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn open(path: &Path) -> Result<Sheets<BufReader<File>>> {
    if !path.exists() {
        return Err(LabelMatchError::FileNotFound(path.display().to_string()));
    }
    open_workbook_auto(path)
        .map_err(|e| LabelMatchError::SpreadsheetRead(format!("{}: {}", path.display(), e)))
}

/// シート名の一覧
pub fn list_sheets(path: &Path) -> Result<Vec<String>> {
    Ok(open(path)?.sheet_names())
}

/// 指定シートを読み込む
pub fn read_sheet(path: &Path, sheet: &str) -> Result<SheetTable> {
    let mut workbook = open(path)?;
    if !workbook.sheet_names().iter().any(|s| s == sheet) {
        return Err(LabelMatchError::SheetNotFound(sheet.to_string()));
    }
    load_table(&mut workbook, sheet)
}

/// 全シートを読み込む
pub fn read_all_sheets(path: &Path) -> Result<Vec<SheetTable>> {
    let mut workbook = open(path)?;
    let names = workbook.sheet_names();
    names
        .iter()
        .map(|name| load_table(&mut workbook, name))
        .collect()
}

fn load_table(workbook: &mut Sheets<BufReader<File>>, sheet: &str) -> Result<SheetTable> {
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| LabelMatchError::SpreadsheetRead(format!("{}: {}", sheet, e)))?;

    let table = table_from_range(sheet, &range);
    log::debug!(
        "シート「{}」を読み込み: {}列, {}行",
        sheet,
        table.headers.len(),
        table.row_count()
    );
    Ok(table)
}

/// 使用範囲を表に変換する
///
/// calamine の範囲は最初の使用セルから始まるため、表の位置を `header_row` と
/// `first_col` に残す。
fn table_from_range(sheet: &str, range: &Range<Data>) -> SheetTable {
    let (header_row, first_col) = range.start().unwrap_or((0, 0));
    let mut rows = range.rows();

    let headers = match rows.next() {
        Some(first) => first
            .iter()
            .enumerate()
            .map(|(i, cell)| match to_cell(cell) {
                Cell::Empty => format!("Unnamed: {}", i),
                other => other.to_text(),
            })
            .collect(),
        None => Vec::new(),
    };

    let rows = rows
        .map(|row| row.iter().map(to_cell).collect())
        .collect();

    SheetTable {
        name: sheet.to_string(),
        header_row,
        first_col: first_col as u16,
        headers,
        rows,
    }
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::DateTime(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;

    #[test]
    fn test_error_cell_uses_excel_literal() {
        assert_eq!(to_cell(&Data::Error(CellErrorType::Div0)), Cell::Text("#DIV/0!".into()));
        assert_eq!(to_cell(&Data::Error(CellErrorType::NA)), Cell::Text("#N/A".into()));
    }

    #[test]
    fn test_table_from_offset_range() {
        // B2起点の表
        let mut range = Range::new((1, 1), (2, 2));
        range.set_value((1, 1), Data::String("Model".into()));
        range.set_value((1, 2), Data::String("Price".into()));
        range.set_value((2, 1), Data::String("Widget".into()));
        range.set_value((2, 2), Data::Float(9.5));

        let table = table_from_range("Old", &range);
        assert_eq!((table.header_row, table.first_col), (1, 1));
        assert_eq!(table.headers, vec!["Model", "Price"]);
        assert_eq!(
            table.rows,
            vec![vec![Cell::Text("Widget".into()), Cell::Number(9.5)]]
        );
        assert_eq!(table.column_index("Model").unwrap(), 0);
    }

    #[test]
    fn test_table_from_empty_range() {
        let range: Range<Data> = Range::empty();
        let table = table_from_range("Empty", &range);
        assert_eq!((table.header_row, table.first_col), (0, 0));
        assert!(table.headers.is_empty());
        assert_eq!(table.row_count(), 0);
    }
}
