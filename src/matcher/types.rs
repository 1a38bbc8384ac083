use std::fmt;

/// 不一致を表す出力値
pub const NO_MATCH: &str = "No Match";

/// 元データのセル値と行位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRecord {
    /// データ行の位置（見出し行を除いた0始まり）
    pub row: usize,
    pub text: String,
}

/// 新リスト1行に対する最近傍候補
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateMatch {
    pub new_index: usize,
    pub old_index: usize,
    /// コサイン距離（0〜1）
    pub distance: f64,
}

/// 照合ラベル
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchLabel {
    /// 採用された旧リストの元テキスト
    Matched(String),
    NoMatch,
}

impl MatchLabel {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchLabel::Matched(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            MatchLabel::Matched(text) => text,
            MatchLabel::NoMatch => NO_MATCH,
        }
    }
}

impl fmt::Display for MatchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 照合結果（新リストと同じ順序）
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub new_index: usize,
    pub label: MatchLabel,
    /// 旧リストが空の場合は None
    pub candidate: Option<CandidateMatch>,
    /// 距離判定を通過した場合のみ計算される
    pub score: Option<f64>,
}

/// 照合件数の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub total: usize,
    pub matched: usize,
    pub no_match: usize,
}

impl MatchSummary {
    pub fn from_results(results: &[MatchResult]) -> Self {
        let matched = results.iter().filter(|r| r.label.is_match()).count();
        Self {
            total: results.len(),
            matched,
            no_match: results.len() - matched,
        }
    }
}
