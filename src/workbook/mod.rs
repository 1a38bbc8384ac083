//! ワークブック（表データ）モジュール
//!
//! 使用範囲の1行目を見出し、以降をデータ行として扱う。

pub mod reader;

pub use reader::{list_sheets, read_all_sheets, read_sheet};

use crate::error::{LabelMatchError, Result};
use crate::matcher::TextRecord;

/// セル値
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    /// 日付・時刻（Excelシリアル値）
    DateTime(f64),
    Bool(bool),
}

impl Cell {
    /// 照合用の文字列表現
    ///
    /// 整数値の数値は小数部なしで表す（`100.0` → `"100"`）。空セルは空文字列。
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(text) => text.clone(),
            Cell::Number(n) | Cell::DateTime(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                format!("{}", *n as i64)
            }
            Cell::Number(n) | Cell::DateTime(n) => n.to_string(),
            Cell::Bool(b) => if *b { "TRUE".into() } else { "FALSE".into() },
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// 1シート分の表
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub name: String,
    /// 見出し行のシート上の位置（0始まり）
    pub header_row: u32,
    pub first_col: u16,
    pub headers: Vec<String>,
    /// データ行（各行は見出しと同じ列数）
    pub rows: Vec<Vec<Cell>>,
}

impl SheetTable {
    /// 見出し名から列番号を探す
    ///
    /// 完全一致を優先し、無ければ前後空白を除いた大文字小文字無視で探す。
    pub fn column_index(&self, column: &str) -> Result<usize> {
        if let Some(index) = self.headers.iter().position(|h| h == column) {
            return Ok(index);
        }

        let wanted = column.trim().to_lowercase();
        self.headers
            .iter()
            .position(|h| h.trim().to_lowercase() == wanted)
            .ok_or_else(|| LabelMatchError::ColumnNotFound {
                sheet: self.name.clone(),
                column: column.to_string(),
            })
    }

    /// 指定列のセルを照合用テキストとして取り出す
    pub fn column_records(&self, column: &str) -> Result<Vec<TextRecord>> {
        let index = self.column_index(column)?;
        Ok(self
            .rows
            .iter()
            .enumerate()
            .map(|(row, cells)| TextRecord {
                row,
                text: cells.get(index).map(Cell::to_text).unwrap_or_default(),
            })
            .collect())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> SheetTable {
        SheetTable {
            name: "New".into(),
            header_row: 0,
            first_col: 0,
            headers: vec!["Id".into(), "Model Name".into()],
            rows: vec![
                vec![Cell::Number(1.0), Cell::Text("Widget Pro".into())],
                vec![Cell::Number(2.0), Cell::Empty],
                vec![Cell::Number(3.0), Cell::Number(2024.0)],
            ],
        }
    }

    #[test]
    fn test_cell_to_text() {
        assert_eq!(Cell::Empty.to_text(), "");
        assert_eq!(Cell::Number(100.0).to_text(), "100");
        assert_eq!(Cell::Number(-3.0).to_text(), "-3");
        assert_eq!(Cell::Number(1.5).to_text(), "1.5");
        assert_eq!(Cell::DateTime(45366.0).to_text(), "45366");
        assert_eq!(Cell::Bool(true).to_text(), "TRUE");
        assert_eq!(Cell::Text("A100".into()).to_text(), "A100");
    }

    #[test]
    fn test_column_index() {
        let table = sample_table();
        assert_eq!(table.column_index("Model Name").unwrap(), 1);
        assert_eq!(table.column_index(" model name ").unwrap(), 1);
        let err = table.column_index("Price").unwrap_err();
        assert!(matches!(err, LabelMatchError::ColumnNotFound { .. }));
    }

    #[test]
    fn test_column_records() {
        let table = sample_table();
        let records = table.column_records("Model Name").unwrap();
        let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["Widget Pro", "", "2024"]);
        assert_eq!(records[2].row, 2);
    }
}
