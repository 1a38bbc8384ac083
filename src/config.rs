use crate::error::{LabelMatchError, Result};
use crate::matcher::{MatchOptions, ScoreWeights, Thresholds};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 結果列のデフォルト見出し
pub const DEFAULT_RESULT_COLUMN: &str = "Best Match";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// コサイン距離の上限（この値未満で第2段階へ）
    pub distance_threshold: f64,
    /// 複合スコアの下限（この値を超えたら採用）
    pub score_threshold: f64,
    pub cosine_weight: f64,
    pub ratio_weight: f64,
    /// 出力シートに追加する列名
    pub result_column: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    /// 読み込めなければ既定値を返す（壊れた設定ファイルを `config --reset` で直すため）
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(e) => {
                log::warn!("設定ファイルの場所を特定できません: {}", e);
                Self::default_config()
            }
        }
    }

    fn load_from_or_default(config_path: &Path) -> Self {
        Self::load_from(config_path).unwrap_or_else(|e| {
            log::warn!("設定ファイルを読み込めないため既定値を使います: {}", e);
            Self::default_config()
        })
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| LabelMatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("label-match").join("config.json"))
    }

    fn default_config() -> Self {
        let thresholds = Thresholds::default();
        let weights = ScoreWeights::default();
        Self {
            distance_threshold: thresholds.distance,
            score_threshold: thresholds.score,
            cosine_weight: weights.cosine,
            ratio_weight: weights.ratio,
            result_column: DEFAULT_RESULT_COLUMN.into(),
        }
    }

    /// 照合オプションを組み立てる（CLI指定があれば設定値より優先）
    pub fn match_options(
        &self,
        distance_threshold: Option<f64>,
        score_threshold: Option<f64>,
    ) -> MatchOptions {
        MatchOptions {
            thresholds: Thresholds {
                distance: distance_threshold.unwrap_or(self.distance_threshold),
                score: score_threshold.unwrap_or(self.score_threshold),
            },
            weights: ScoreWeights {
                cosine: self.cosine_weight,
                ratio: self.ratio_weight,
            },
        }
    }

    pub fn set_distance_threshold(&mut self, value: f64) -> Result<()> {
        self.distance_threshold = value;
        self.save()
    }

    pub fn set_score_threshold(&mut self, value: f64) -> Result<()> {
        self.score_threshold = value;
        self.save()
    }

    pub fn set_result_column(&mut self, name: String) -> Result<()> {
        if name.trim().is_empty() {
            return Err(LabelMatchError::Config("結果列名が空です".into()));
        }
        self.result_column = name;
        self.save()
    }

    pub fn reset(&mut self) -> Result<()> {
        *self = Self::default_config();
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.distance_threshold, 0.5);
        assert_eq!(config.score_threshold, 0.5);
        assert_eq!(config.cosine_weight, 0.7);
        assert_eq!(config.ratio_weight, 0.3);
        assert_eq!(config.result_column, "Best Match");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"score_threshold": 0.8}"#).unwrap();
        assert_eq!(config.score_threshold, 0.8);
        assert_eq!(config.distance_threshold, 0.5);
        assert_eq!(config.result_column, DEFAULT_RESULT_COLUMN);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_broken_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ broken").unwrap();

        assert!(matches!(Config::load_from(&path), Err(LabelMatchError::JsonParse(_))));
        assert_eq!(Config::load_from_or_default(&path), Config::default());
    }

    #[test]
    fn test_match_options_override() {
        let config = Config::default();
        let options = config.match_options(Some(0.2), None);
        assert_eq!(options.thresholds.distance, 0.2);
        assert_eq!(options.thresholds.score, 0.5);
        assert_eq!(options.weights.cosine, 0.7);
    }
}
