//! 表示用画像キャッシュ
//!
//! 元画像をぼかし＋適応的二値化した表示専用画像を、画像名をキーに
//! `processed_dir` へ保存する。既にあれば再生成しない。
//! ここでの加工結果は特徴量抽出には一切使わない。

use crate::error::{NeutroError, Result};
use crate::extractor::to_gray;
use image::{GrayImage, Luma};
use imageproc::filter::gaussian_blur_f32;
use std::path::{Path, PathBuf};

/// 前処理ぼかしの σ（5×5 カーネル相当）
pub const BLUR_SIGMA: f32 = 1.1;
/// 適応的二値化の局所平均 σ（11×11 ブロック相当）
pub const THRESHOLD_SIGMA: f32 = 2.0;
/// 局所平均から差し引く定数
pub const THRESHOLD_OFFSET: f32 = 2.0;

/// ぼかし → ガウス重み付き適応的二値化（0/255）
pub fn render_display(gray: &GrayImage) -> GrayImage {
    let blurred = gaussian_blur_f32(gray, BLUR_SIGMA);
    let local_mean = gaussian_blur_f32(&blurred, THRESHOLD_SIGMA);

    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        let value = blurred.get_pixel(x, y)[0] as f32;
        let threshold = local_mean.get_pixel(x, y)[0] as f32 - THRESHOLD_OFFSET;
        if value > threshold {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// キャッシュの状態
#[derive(Debug, Clone, Default)]
pub struct CacheInfo {
    pub entries: usize,
    pub bytes: u64,
}

/// 画像名キーの表示用キャッシュ
#[derive(Debug, Clone)]
pub struct DisplayCache {
    source_dir: PathBuf,
    cache_dir: PathBuf,
}

impl DisplayCache {
    pub fn new(source_dir: impl Into<PathBuf>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            cache_dir: cache_dir.into(),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// 元画像のパス
    pub fn source_path(&self, name: &str) -> Result<PathBuf> {
        Ok(self.source_dir.join(validate_name(name)?))
    }

    /// 加工画像のパス
    pub fn cached_path(&self, name: &str) -> Result<PathBuf> {
        Ok(self.cache_dir.join(validate_name(name)?))
    }

    /// 加工画像を用意する（無ければ生成）
    ///
    /// 元画像が無い・読めない場合は Ok(None)。
    pub fn ensure(&self, name: &str) -> Result<Option<PathBuf>> {
        let cached = self.cached_path(name)?;
        if cached.exists() {
            return Ok(Some(cached));
        }

        let source = self.source_path(name)?;
        if !source.exists() {
            tracing::debug!("display source missing: {}", source.display());
            return Ok(None);
        }

        let gray = match image::open(&source) {
            Ok(img) => to_gray(&img),
            Err(e) => {
                tracing::debug!("display source unreadable: {}: {}", source.display(), e);
                return Ok(None);
            }
        };

        std::fs::create_dir_all(&self.cache_dir)?;
        render_display(&gray)
            .save(&cached)
            .map_err(|e| NeutroError::ImageSave(format!("{}: {}", cached.display(), e)))?;

        tracing::debug!("display image generated: {}", cached.display());
        Ok(Some(cached))
    }

    pub fn info(&self) -> Result<CacheInfo> {
        let mut info = CacheInfo::default();
        if !self.cache_dir.exists() {
            return Ok(info);
        }

        for entry in std::fs::read_dir(&self.cache_dir)? {
            let meta = entry?.metadata()?;
            if meta.is_file() {
                info.entries += 1;
                info.bytes += meta.len();
            }
        }
        Ok(info)
    }

    /// キャッシュフォルダを削除。存在しなければ false
    pub fn clear(&self) -> Result<bool> {
        if !self.cache_dir.exists() {
            return Ok(false);
        }
        std::fs::remove_dir_all(&self.cache_dir)?;
        Ok(true)
    }
}

/// 画像名はファイル名のみ許可（パス区切りや .. を拒否）
fn validate_name(name: &str) -> Result<&str> {
    let is_plain = !name.is_empty()
        && Path::new(name).file_name().and_then(|n| n.to_str()) == Some(name)
        && !name.contains(['/', '\\']);
    if is_plain {
        Ok(name)
    } else {
        Err(NeutroError::InvalidImageName(name.to_string()))
    }
}
