//! シート・列の対話式選択モジュール
//!
//! コマンドラインで省略されたシート名・列名をワークブックの内容から選ばせる。

use crate::error::{LabelMatchError, Result};
use crate::workbook;
use dialoguer::Select;
use std::path::Path;

/// シート名を決める（指定があればそのまま使う）
pub fn resolve_sheet(
    path: &Path,
    given: Option<String>,
    label: &str,
    interactive: bool,
) -> Result<String> {
    if let Some(sheet) = given {
        return Ok(sheet);
    }
    if !interactive {
        return Err(LabelMatchError::MissingInput(format!("{}のシート名", label)));
    }

    let sheets = workbook::list_sheets(path)?;
    if sheets.is_empty() {
        return Err(LabelMatchError::SheetNotFound(format!(
            "{} にシートがありません",
            path.display()
        )));
    }
    if sheets.len() == 1 {
        println!("→ {}: シート「{}」を使用", label, sheets[0]);
        return Ok(sheets[0].clone());
    }

    let selected = select(&format!("{}のシートを選択", label), &sheets)?;
    Ok(sheets[selected].clone())
}

/// 列名を決める（指定があればそのまま使う）
pub fn resolve_column(
    path: &Path,
    sheet: &str,
    given: Option<String>,
    label: &str,
    interactive: bool,
) -> Result<String> {
    if let Some(column) = given {
        return Ok(column);
    }
    if !interactive {
        return Err(LabelMatchError::MissingInput(format!("{}の列名", label)));
    }

    let table = workbook::read_sheet(path, sheet)?;
    if table.headers.is_empty() {
        return Err(LabelMatchError::ColumnNotFound {
            sheet: sheet.to_string(),
            column: "(見出し行なし)".into(),
        });
    }

    let selected = select(&format!("{}の列を選択", label), &table.headers)?;
    Ok(table.headers[selected].clone())
}

fn select(prompt: &str, items: &[String]) -> Result<usize> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(|e| LabelMatchError::Prompt(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_given_names_are_used_as_is() {
        let path = Path::new("/nonexistent/book.xlsx");
        let sheet = resolve_sheet(path, Some("Old".into()), "旧リスト", false).unwrap();
        assert_eq!(sheet, "Old");
        let column = resolve_column(path, "Old", Some("Model".into()), "旧リスト", false).unwrap();
        assert_eq!(column, "Model");
    }

    #[test]
    fn test_missing_name_without_prompt() {
        let path = Path::new("/nonexistent/book.xlsx");
        let err = resolve_sheet(path, None, "旧リスト", false).unwrap_err();
        assert!(matches!(err, LabelMatchError::MissingInput(_)));
        let err = resolve_column(path, "Old", None, "新リスト", false).unwrap_err();
        assert!(matches!(err, LabelMatchError::MissingInput(_)));
    }
}
