//! 候補ペアの複合類似度
//!
//! 正規化前の元テキスト同士で以下を計算し、重み付き和を取る。
//! - 2文書だけで学習したTF-IDF空間でのコサイン類似度
//! - 文字単位の一致率（挿入・削除の編集距離ベース）

use super::tfidf::{cosine_similarity, TfidfModel};

/// 複合スコアの重み
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub cosine: f64,
    pub ratio: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            cosine: 0.7,
            ratio: 0.3,
        }
    }
}

/// 複合類似度（デフォルト重み 0.7 / 0.3）
pub fn combined_similarity(a: &str, b: &str) -> f64 {
    combined_similarity_with(a, b, &ScoreWeights::default())
}

/// 複合類似度（0〜1）
pub fn combined_similarity_with(a: &str, b: &str, weights: &ScoreWeights) -> f64 {
    let score = weights.cosine * pair_cosine_similarity(a, b) + weights.ratio * char_ratio(a, b);
    score.clamp(0.0, 1.0)
}

/// ペアごとに学習し直したTF-IDF空間でのコサイン類似度
///
/// 2文書とも語彙を持たない場合は0。
pub fn pair_cosine_similarity(a: &str, b: &str) -> f64 {
    match TfidfModel::fit(&[a, b]) {
        Ok(model) => cosine_similarity(&model.transform(a), &model.transform(b)),
        Err(_) => {
            log::debug!("ペア語彙が空のためコサイン類似度0: {:?} / {:?}", a, b);
            0.0
        }
    }
}

/// 文字単位の一致率（0〜1、小数第2位で丸め）
///
/// `2 * LCS / (len(a) + len(b))`。大文字小文字は区別する。どちらかが空なら0。
pub fn char_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.is_empty() || b_chars.is_empty() {
        return 0.0;
    }

    let common = longest_common_subsequence(&a_chars, &b_chars);
    let total = a_chars.len() + b_chars.len();
    let percent = (200.0 * common as f64 / total as f64).round_ties_even();

    percent / 100.0
}

/// 最長共通部分列の長さ
fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &a_char in a {
        for (j, &b_char) in b.iter().enumerate() {
            curr[j + 1] = if a_char == b_char {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_common_subsequence() {
        let lcs = |a: &str, b: &str| {
            let a: Vec<char> = a.chars().collect();
            let b: Vec<char> = b.chars().collect();
            longest_common_subsequence(&a, &b)
        };
        assert_eq!(lcs("", "abc"), 0);
        assert_eq!(lcs("abc", "abc"), 3);
        assert_eq!(lcs("kitten", "sitting"), 4);
        assert_eq!(lcs("Model A100", "model a100"), 8);
    }

    #[test]
    fn test_char_ratio() {
        assert_eq!(char_ratio("abc", "abc"), 1.0);
        assert_eq!(char_ratio("", "abc"), 0.0);
        assert_eq!(char_ratio("", ""), 0.0);
        assert_eq!(char_ratio("Model A100", "model a100"), 0.8);
        // 2 * 4 / 13 = 0.615... → 62
        assert_eq!(char_ratio("kitten", "sitting"), 0.62);
        assert_eq!(char_ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_pair_cosine_similarity() {
        assert!((pair_cosine_similarity("Red Widget", "red widget") - 1.0).abs() < 1e-9);
        assert_eq!(pair_cosine_similarity("Red Widget", "Blue Gadget"), 0.0);
        // 語彙が空（1文字のみ）
        assert_eq!(pair_cosine_similarity("a", "b"), 0.0);
        assert_eq!(pair_cosine_similarity("", ""), 0.0);
    }

    #[test]
    fn test_combined_similarity() {
        let score = combined_similarity("Model A100", "model a100");
        assert!((score - (0.7 + 0.3 * 0.8)).abs() < 1e-9);

        let score = combined_similarity("Red Widget", "Blue Gadget");
        assert!(score < 0.5);
    }

    #[test]
    fn test_combined_similarity_bounds() {
        let pairs = [
            ("", ""),
            ("", "abc"),
            ("Widget Pro", "Widget Pro"),
            ("Widget Pro 2000", "Pro Widget"),
            ("ÄÖÜ", "äöü"),
            ("x", "x"),
        ];
        for (a, b) in pairs {
            let score = combined_similarity(a, b);
            assert!((0.0..=1.0).contains(&score), "範囲外: {:?} {:?} → {}", a, b, score);
        }
    }

    #[test]
    fn test_custom_weights() {
        let weights = ScoreWeights { cosine: 0.0, ratio: 1.0 };
        assert_eq!(combined_similarity_with("abc", "abc", &weights), 1.0);
        let weights = ScoreWeights { cosine: 2.0, ratio: 2.0 };
        assert_eq!(combined_similarity_with("abc", "abc", &weights), 1.0);
    }
}
