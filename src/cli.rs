use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "label-match")]
#[command(about = "新旧ラベル一覧の類似度照合ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 新リスト列を旧リスト列と照合し、結果列を追加して保存
    Match {
        /// 入力Excelファイル（新リストを含む）
        #[arg(required = true)]
        input: PathBuf,

        /// 旧リストのシート名（省略時は選択）
        #[arg(long)]
        old_sheet: Option<String>,

        /// 旧リストの列名（省略時は選択）
        #[arg(long)]
        old_column: Option<String>,

        /// 新リストのシート名（省略時は選択）
        #[arg(long)]
        new_sheet: Option<String>,

        /// 新リストの列名（省略時は選択）
        #[arg(long)]
        new_column: Option<String>,

        /// 旧リストを別ファイルから読む
        #[arg(long)]
        old_input: Option<PathBuf>,

        /// コサイン距離の閾値（0.0-1.0、この値未満で候補採用）
        #[arg(short = 'd', long)]
        distance_threshold: Option<f64>,

        /// 複合スコアの閾値（0.0-1.0、この値を超えたら一致）
        #[arg(short = 's', long)]
        score_threshold: Option<f64>,

        /// 出力ファイル/ディレクトリ（デフォルト: 入力と同じ場所の *_matched.xlsx）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (excel/json/both)
        #[arg(short, long, default_value = "excel")]
        format: ExportFormat,

        /// 距離・スコア列も出力
        #[arg(long)]
        with_scores: bool,

        /// 進捗バーを表示しない
        #[arg(short, long)]
        quiet: bool,

        /// シート名・列名を対話で選ばない（省略時はエラー）
        #[arg(long)]
        no_interactive: bool,
    },

    /// ワークブックのシート・列一覧を表示
    Inspect {
        /// 入力Excelファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 2つのテキストの正規化結果と類似度を表示
    Score {
        /// 旧リスト側のテキスト
        old: String,

        /// 新リスト側のテキスト
        new: String,
    },

    /// 設定を表示/編集
    Config {
        /// 距離閾値の既定値を設定
        #[arg(long)]
        set_distance_threshold: Option<f64>,

        /// スコア閾値の既定値を設定
        #[arg(long)]
        set_score_threshold: Option<f64>,

        /// 結果列名を設定
        #[arg(long)]
        set_result_column: Option<String>,

        /// 既定値に戻す
        #[arg(long)]
        reset: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ExportFormat {
    #[default]
    Excel,
    Json,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "json" => Ok(ExportFormat::Json),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use excel, json, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_export_format_parse() {
        assert_eq!("XLSX".parse::<ExportFormat>(), Ok(ExportFormat::Excel));
        assert_eq!("json".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert_eq!("both".parse::<ExportFormat>(), Ok(ExportFormat::Both));
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_parse_match_command() {
        let cli = Cli::try_parse_from([
            "label-match", "match", "book.xlsx",
            "--old-sheet", "Old", "--old-column", "Model",
            "--new-sheet", "New", "--new-column", "Model",
            "-d", "0.4", "--format", "both",
        ])
        .unwrap();
        match cli.command {
            Commands::Match { distance_threshold, score_threshold, format, .. } => {
                assert_eq!(distance_threshold, Some(0.4));
                assert_eq!(score_threshold, None);
                assert_eq!(format, ExportFormat::Both);
            }
            _ => panic!("match サブコマンドとして解析されていない"),
        }
    }
}
