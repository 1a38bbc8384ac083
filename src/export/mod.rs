pub mod excel;
pub mod json;

use crate::cli::ExportFormat;
use crate::config::DEFAULT_RESULT_COLUMN;
use crate::error::Result;
use crate::pipeline::MatchReport;
use std::path::{Path, PathBuf};

/// 出力オプション
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// 追加する結果列の見出し
    pub result_column: String,
    /// 距離・スコア列も出力する
    pub with_scores: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            result_column: DEFAULT_RESULT_COLUMN.into(),
            with_scores: false,
        }
    }
}

fn default_file_name(input: &Path, extension: &str) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("result");
    format!("{}_matched.{}", stem, extension)
}

pub fn output_path_for_format(output: Option<&Path>, input: &Path, extension: &str) -> PathBuf {
    match output {
        Some(output) if output.is_dir() || output.extension().is_none() => {
            output.join(default_file_name(input, extension))
        }
        Some(output) => output.to_path_buf(),
        None => {
            let parent = input.parent().unwrap_or_else(|| Path::new("."));
            parent.join(default_file_name(input, extension))
        }
    }
}

fn output_paths_for_both(output: Option<&Path>, input: &Path) -> (PathBuf, PathBuf) {
    match output {
        Some(output) if !(output.is_dir() || output.extension().is_none()) => {
            let parent = output.parent().unwrap_or_else(|| Path::new("."));
            let stem = output
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("result");
            (
                parent.join(format!("{}.xlsx", stem)),
                parent.join(format!("{}.json", stem)),
            )
        }
        _ => (
            output_path_for_format(output, input, "xlsx"),
            output_path_for_format(output, input, "json"),
        ),
    }
}

/// 照合結果を指定形式で保存し、書き出したパスを返す
pub fn export_report(
    report: &MatchReport,
    format: &ExportFormat,
    output: Option<&Path>,
    input: &Path,
    options: &ExportOptions,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    match format {
        ExportFormat::Excel => {
            let output_path = output_path_for_format(output, input, "xlsx");
            println!("- Excelを生成中...");
            excel::generate_excel(report, &output_path, options)?;
            println!("✔ Excel出力: {}", output_path.display());
            written.push(output_path);
        }
        ExportFormat::Json => {
            let output_path = output_path_for_format(output, input, "json");
            println!("- JSONを生成中...");
            json::generate_json(report, &output_path)?;
            println!("✔ JSON出力: {}", output_path.display());
            written.push(output_path);
        }
        ExportFormat::Both => {
            let (excel_path, json_path) = output_paths_for_both(output, input);

            println!("- Excelを生成中...");
            excel::generate_excel(report, &excel_path, options)?;
            println!("✔ Excel出力: {}", excel_path.display());

            println!("- JSONを生成中...");
            json::generate_json(report, &json_path)?;
            println!("✔ JSON出力: {}", json_path.display());

            written.push(excel_path);
            written.push(json_path);
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let path = output_path_for_format(None, Path::new("/data/models.xlsx"), "xlsx");
        assert_eq!(path, PathBuf::from("/data/models_matched.xlsx"));
    }

    #[test]
    fn test_explicit_output_path() {
        let path = output_path_for_format(
            Some(Path::new("/out/result.xlsx")),
            Path::new("/data/models.xlsx"),
            "xlsx",
        );
        assert_eq!(path, PathBuf::from("/out/result.xlsx"));
    }

    #[test]
    fn test_output_directory_without_extension() {
        let path = output_path_for_format(
            Some(Path::new("/out/reports")),
            Path::new("/data/models.xlsx"),
            "json",
        );
        assert_eq!(path, PathBuf::from("/out/reports/models_matched.json"));
    }

    #[test]
    fn test_output_paths_for_both() {
        let (excel, json) = output_paths_for_both(
            Some(Path::new("/out/result.xlsx")),
            Path::new("/data/models.xlsx"),
        );
        assert_eq!(excel, PathBuf::from("/out/result.xlsx"));
        assert_eq!(json, PathBuf::from("/out/result.json"));
    }
}
