//! 特徴量抽出モジュール
//!
//! グレースケール画像を 128×128 に縮小し、画素の平均・標準偏差から
//! T/I/F を算出する。デコードできない画像は記録せず黙ってスキップする。
//!
//! 表示用の加工（ぼかし・二値化）とは独立しており、常に元画像から計算する。

use crate::error::{NeutroError, Result};
use crate::scanner::{self, MissingSource, SourceImage};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, ImageReader, Luma};
use indicatif::{ProgressBar, ProgressStyle};
use neutro_defect_common::{ImageRecord, Label, NeutrosophicScores};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// 正規化後のサンプル格子サイズ
pub const CANONICAL_SIZE: u32 = 128;

/// 1枚の画像から特徴量レコードを作る
///
/// 画素が1つも無い画像は None。
pub fn extract_features(image: &GrayImage, name: &str, label: Label) -> Option<ImageRecord> {
    if image.width() == 0 || image.height() == 0 {
        return None;
    }

    let resized = imageops::resize(image, CANONICAL_SIZE, CANONICAL_SIZE, FilterType::Triangle);
    NeutrosophicScores::from_samples(resized.as_raw()).map(|s| s.into_record(name, label))
}

/// BT.601 の重み（0.299 / 0.587 / 0.114）でグレースケール化
///
/// 元からグレースケールの画像はそのまま 8bit にする。アルファは捨てる。
pub fn to_gray(image: &DynamicImage) -> GrayImage {
    if !image.color().has_color() {
        return image.to_luma8();
    }

    let rgb = image.to_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
        Luma([luma.round().clamp(0.0, 255.0) as u8])
    })
}

/// ファイルをグレースケールで読み込む（形式は内容から判定）
pub fn load_grayscale(path: &Path) -> Result<GrayImage> {
    let reader = ImageReader::open(path)?
        .with_guessed_format()?;
    let image = reader
        .decode()
        .map_err(|e| NeutroError::ImageLoad(format!("{}: {}", path.display(), e)))?;
    Ok(to_gray(&image))
}

/// 1ファイル分の抽出。読み込めなければ None（エラーは上げない）
pub fn extract_file(source: &SourceImage) -> Option<ImageRecord> {
    match load_grayscale(&source.path) {
        Ok(gray) => extract_features(&gray, &source.file_name, source.label),
        Err(e) => {
            tracing::debug!("skip undecodable image: {}", e);
            None
        }
    }
}

/// バッチ抽出の結果
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// 抽出できたレコード（入力順）
    pub records: Vec<ImageRecord>,
    /// デコードに失敗したファイル
    pub skipped: Vec<PathBuf>,
    /// 見つからなかったフォルダ
    pub missing: Vec<MissingSource>,
}

/// バッチ抽出オプション
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    pub parallel: bool,
    pub show_progress: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            show_progress: false,
        }
    }
}

/// 画像リストを一括抽出
///
/// 並列実行でも結果は入力順に並ぶ。
pub fn extract_batch(sources: &[SourceImage], options: BatchOptions) -> BatchOutcome {
    let progress = if options.show_progress {
        let pb = ProgressBar::new(sources.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("  {bar:40} {pos}/{len} {msg}") {
            pb.set_style(style);
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let run = |source: &SourceImage| {
        let record = extract_file(source);
        progress.inc(1);
        record
    };

    let results: Vec<Option<ImageRecord>> = if options.parallel {
        sources.par_iter().map(run).collect()
    } else {
        sources.iter().map(run).collect()
    };
    progress.finish_and_clear();

    let mut outcome = BatchOutcome::default();
    for (source, result) in sources.iter().zip(results) {
        match result {
            Some(record) => outcome.records.push(record),
            None => outcome.skipped.push(source.path.clone()),
        }
    }

    tracing::info!(
        "extracted {} records, skipped {} files",
        outcome.records.len(),
        outcome.skipped.len()
    );
    outcome
}

/// データセットを走査して一括抽出
///
/// 欠落フォルダは `missing` に積むだけで中断しない。
pub fn extract_dataset(root: &Path, options: BatchOptions) -> BatchOutcome {
    let scan = scanner::scan_dataset(root);
    let mut outcome = extract_batch(&scan.images, options);
    outcome.missing = scan.missing;
    outcome
}
