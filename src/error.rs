use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("シートが見つかりません: {0}")]
    SheetNotFound(String),

    #[error("列が見つかりません: シート「{sheet}」に「{column}」列がありません")]
    ColumnNotFound { sheet: String, column: String },

    #[error("Excel読み込みエラー: {0}")]
    SpreadsheetRead(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    /// 旧リストから語彙を構築できない（空リスト・ストップワードのみ等）
    #[error("ベクトル空間の構築に失敗: {0}")]
    Fitting(String),

    #[error("入力が不足しています: {0}")]
    MissingInput(String),

    #[error("対話入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LabelMatchError>;
