//! データセット走査
//!
//! 固定のフォルダ→ラベル対応に従い `<root>/<folder>/Imgs/` 直下を列挙する。
//! 存在しないフォルダは警告してスキップし、走査全体は中断しない。

use neutro_defect_common::Label;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// フォルダ名 → 正解ラベル（この順で走査する）
pub const LABEL_MAP: &[(&str, Label)] = &[
    ("MT_Free", Label::Normal),
    ("MT_Blowhole", Label::Defect),
    ("MT_Break", Label::Defect),
    ("MT_Crack", Label::Defect),
    ("MT_Fray", Label::Defect),
];

/// 各カテゴリフォルダ内の画像サブフォルダ名
pub const IMAGE_SUBFOLDER: &str = "Imgs";

/// 抽出対象の1ファイル
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub path: PathBuf,
    pub file_name: String,
    pub label: Label,
}

/// 見つからなかった入力元
#[derive(Debug, Clone, PartialEq)]
pub enum MissingSource {
    /// カテゴリフォルダ自体が無い
    Folder(PathBuf),
    /// Imgs サブフォルダが無い
    ImageFolder(PathBuf),
}

impl std::fmt::Display for MissingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingSource::Folder(p) => write!(f, "Folder not found: {}", p.display()),
            MissingSource::ImageFolder(p) => write!(f, "Image folder not found: {}", p.display()),
        }
    }
}

/// 走査結果
#[derive(Debug, Clone, Default)]
pub struct DatasetScan {
    pub images: Vec<SourceImage>,
    pub missing: Vec<MissingSource>,
}

/// データセットを走査する
///
/// ルート自体が無くてもエラーにはせず、全カテゴリが欠落として返る。
pub fn scan_dataset(root: &Path) -> DatasetScan {
    if !root.is_dir() {
        tracing::warn!("Dataset root not found: {}", root.display());
    }

    let mut scan = DatasetScan::default();

    for &(folder_name, label) in LABEL_MAP {
        let folder_path = root.join(folder_name);
        if !folder_path.is_dir() {
            tracing::warn!("Folder not found: {}", folder_path.display());
            scan.missing.push(MissingSource::Folder(folder_path));
            continue;
        }

        let img_folder = folder_path.join(IMAGE_SUBFOLDER);
        if !img_folder.is_dir() {
            tracing::warn!("Image folder not found: {}", img_folder.display());
            scan.missing.push(MissingSource::ImageFolder(img_folder));
            continue;
        }

        let images = list_files(&img_folder, label);
        tracing::debug!("{}: {} files", folder_name, images.len());
        scan.images.extend(images);
    }

    scan
}

/// フォルダ直下の通常ファイルをファイル名順に列挙
///
/// 拡張子では絞り込まない。デコードできないものは抽出時にスキップされる。
fn list_files(folder: &Path, label: Label) -> Vec<SourceImage> {
    let mut images: Vec<SourceImage> = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| SourceImage {
            file_name: e.file_name().to_string_lossy().to_string(),
            path: e.into_path(),
            label,
        })
        .collect();

    // ファイル名でソート
    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    images
}
