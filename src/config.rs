use crate::error::{NeutroError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// データセットのルート（MT_Free 等のフォルダを含む）
    pub dataset_root: PathBuf,
    /// 特徴量テーブル（CSV）
    pub features_csv: PathBuf,
    /// 表示用の元画像フォルダ
    pub image_dir: PathBuf,
    /// 表示用の加工画像キャッシュ
    pub processed_dir: PathBuf,
    /// レポート出力先
    pub report_dir: PathBuf,
    /// 特徴量抽出を並列実行するか
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_root: PathBuf::from("../Magnetic-Tile-Defect"),
            features_csv: PathBuf::from("image_features.csv"),
            image_dir: Path::new("static").join("images"),
            processed_dir: Path::new("static").join("processed"),
            report_dir: PathBuf::from("."),
            parallel: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// 指定パスから読み込み（無ければデフォルト）
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| NeutroError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("neutro-defect").join("config.json"))
    }
}
