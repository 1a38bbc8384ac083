//! 旧リストのベクトル空間と最近傍検索

use super::tfidf::{cosine_similarity, SparseVector, TfidfModel};
use crate::error::Result;
use rayon::prelude::*;

/// 旧リスト（正規化済み）に対して学習したベクトル空間
///
/// 構築後は変更しない。検索は全件総当たり。
#[derive(Debug, Clone)]
pub struct VectorSpace {
    model: TfidfModel,
    documents: Vec<SparseVector>,
}

impl VectorSpace {
    /// 正規化済みテキストから構築する
    pub fn fit<S>(normalized_texts: &[S]) -> Result<Self>
    where
        S: AsRef<str> + Sync,
    {
        let model = TfidfModel::fit(normalized_texts)?;
        let documents = normalized_texts
            .par_iter()
            .map(|text| model.transform(text.as_ref()))
            .collect();

        log::debug!(
            "ベクトル空間を構築: {}文書, 語彙{}語",
            normalized_texts.len(),
            model.vocabulary_size()
        );

        Ok(Self { model, documents })
    }

    /// コサイン距離が最小の文書番号と距離を返す
    ///
    /// 同距離の場合は番号の小さい方。距離は0〜1。
    pub fn nearest(&self, normalized_query: &str) -> (usize, f64) {
        let query = self.model.transform(normalized_query);

        let mut best = (0, 1.0);
        for (index, document) in self.documents.iter().enumerate() {
            let distance = 1.0 - cosine_similarity(&query, document);
            if distance < best.1 {
                best = (index, distance);
            }
        }

        (best.0, best.1.clamp(0.0, 1.0))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
