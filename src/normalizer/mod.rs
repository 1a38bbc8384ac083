//! テキスト正規化モジュール
//!
//! 照合前にラベル文字列を語幹トークン列へ変換する。
//!
//! ## 処理フロー
//! 1. 小文字化
//! 2. `[a-z0-9]` と空白以外を除去（アクセント文字等は変換せず削除）
//! 3. 空白で分割（連続空白・前後空白は消える）
//! 4. ストップワード除去
//! 5. 語幹化（Snowball English）
//! 6. 半角スペースで再結合

pub mod stopwords;

use rayon::prelude::*;
use rust_stemmers::{Algorithm, Stemmer};

pub use stopwords::is_stopword;

/// 語幹化を繰り返す上限（通常は1〜2回で収束する）
const MAX_STEM_PASSES: usize = 8;

lazy_static::lazy_static! {
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
}

/// 1件のテキストを正規化する
///
/// 空文字列、またはトークンが残らない入力は空文字列を返す。
/// 出力を再度正規化しても変化しない（冪等）。
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    stripped
        .split_whitespace()
        .filter(|token| !is_stopword(token))
        .filter_map(reduce_token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// 列全体を正規化する（順序は入力と同じ）
pub fn normalize_all<S>(texts: &[S]) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    texts.par_iter().map(|t| normalize(t.as_ref())).collect()
}

/// トークンを語幹に縮約する
///
/// 語幹が変化しなくなるまで繰り返し、語幹がストップワードになった場合は捨てる。
fn reduce_token(token: &str) -> Option<String> {
    let mut current = token.to_string();
    for _ in 0..MAX_STEM_PASSES {
        let next = STEMMER.stem(&current).into_owned();
        if next == current {
            break;
        }
        current = next;
    }

    if current.is_empty() || is_stopword(&current) {
        None
    } else {
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize("Model A100"), "model a100");
        assert_eq!(normalize("model a100"), "model a100");
    }

    #[test]
    fn test_normalize_strips_punctuation_and_accents() {
        assert_eq!(normalize("Widget-Pro (v2)!"), "widgetpro v2");
        // アクセント付き文字は削除される
        assert_eq!(normalize("café"), "caf");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  red \t\n widget  "), "red widget");
    }

    #[test]
    fn test_normalize_removes_stopwords() {
        assert_eq!(normalize("the red and the blue"), "red blue");
        assert_eq!(normalize("the a an"), "");
    }

    #[test]
    fn test_normalize_stems() {
        assert_eq!(normalize("matching"), "match");
        assert_eq!(normalize("Widgets"), "widget");
        assert_eq!(normalize("connections connected"), "connect connect");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("!!! ???"), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        let samples = [
            "Model A100",
            "Agreed generously upon the abilities",
            "Connections, CONNECTING; connected!",
            "Red Widget (Large) - 2024 Edition",
            "Hopping happily through the meadows",
            "doing having being",
            "São Paulo Açaí",
            "",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "冪等でない: {:?}", sample);
        }
    }

    #[test]
    fn test_normalize_all_preserves_order() {
        let texts = vec!["Red Widgets", "", "Blue Gadgets"];
        assert_eq!(normalize_all(&texts), vec!["red widget", "", "blue gadget"]);
    }
}
