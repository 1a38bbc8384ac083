//! 新旧リスト照合モジュール
//!
//! ## 処理フロー
//! 1. 旧リストを正規化し、TF-IDFベクトル空間を構築（1回のみ）
//! 2. 新リストを正規化
//! 3. 各行について最近傍の旧テキストを検索
//! 4. 距離判定 → 複合スコア判定の2段階で採否を決定

pub mod index;
pub mod scorer;
pub mod tfidf;
mod types;

pub use index::VectorSpace;
pub use scorer::{combined_similarity, combined_similarity_with, ScoreWeights};
pub use types::{CandidateMatch, MatchLabel, MatchResult, MatchSummary, TextRecord, NO_MATCH};

use crate::error::Result;
use crate::normalizer;

/// 採否判定の閾値
///
/// 範囲外の値もそのまま使う（常に通過/常に不通過になるだけ）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// この値未満の距離のみ第2段階へ進む
    pub distance: f64,
    /// この値を超えるスコアで採用
    pub score: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            distance: 0.5,
            score: 0.5,
        }
    }
}

/// 照合オプション
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MatchOptions {
    pub thresholds: Thresholds,
    pub weights: ScoreWeights,
}

/// 判定結果
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub label: MatchLabel,
    /// 距離判定で棄却された場合は None
    pub score: Option<f64>,
}

/// 1組の候補について採否を決める
pub fn decide(
    distance: f64,
    raw_old: &str,
    raw_new: &str,
    thresholds: &Thresholds,
    weights: &ScoreWeights,
) -> Decision {
    if !(distance < thresholds.distance) {
        return Decision {
            label: MatchLabel::NoMatch,
            score: None,
        };
    }

    let score = combined_similarity_with(raw_old, raw_new, weights);
    let label = if score > thresholds.score {
        MatchLabel::Matched(raw_old.to_string())
    } else {
        MatchLabel::NoMatch
    };

    Decision {
        label,
        score: Some(score),
    }
}

/// 新リスト全行を照合する
///
/// 結果は `new_texts` と同じ長さ・順序。`on_progress(完了数, 総数)` は各行の処理後に
/// 呼び出し元スレッドで順に呼ばれる。旧リストが空なら全行 "No Match"。
pub fn run<O, N, F>(
    old_texts: &[O],
    new_texts: &[N],
    options: &MatchOptions,
    mut on_progress: F,
) -> Result<Vec<MatchResult>>
where
    O: AsRef<str> + Sync,
    N: AsRef<str> + Sync,
    F: FnMut(usize, usize),
{
    let total = new_texts.len();
    let mut results = Vec::with_capacity(total);

    if old_texts.is_empty() {
        log::warn!("旧リストが空のため全行を不一致とします");
        for new_index in 0..total {
            results.push(MatchResult {
                new_index,
                label: MatchLabel::NoMatch,
                candidate: None,
                score: None,
            });
            on_progress(new_index + 1, total);
        }
        return Ok(results);
    }

    let old_normalized = normalizer::normalize_all(old_texts);
    let space = VectorSpace::fit(&old_normalized)?;
    let new_normalized = normalizer::normalize_all(new_texts);

    for (new_index, query) in new_normalized.iter().enumerate() {
        let (old_index, distance) = space.nearest(query);
        let raw_old = old_texts[old_index].as_ref();
        let raw_new = new_texts[new_index].as_ref();

        let decision = decide(distance, raw_old, raw_new, &options.thresholds, &options.weights);
        log::debug!(
            "行{}: 候補={} 距離={:.4} スコア={:?} → {}",
            new_index,
            old_index,
            distance,
            decision.score,
            decision.label
        );

        results.push(MatchResult {
            new_index,
            label: decision.label,
            candidate: Some(CandidateMatch {
                new_index,
                old_index,
                distance,
            }),
            score: decision.score,
        });
        on_progress(new_index + 1, total);
    }

    let summary = MatchSummary::from_results(&results);
    log::info!(
        "照合完了: {}件中 {}件一致, {}件不一致",
        summary.total,
        summary.matched,
        summary.no_match
    );

    Ok(results)
}
