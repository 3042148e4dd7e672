//! 表示用画像キャッシュのテスト
//!
//! 画像名キーでの生成・再利用・削除と、抽出処理との分離を検証

use image::{GrayImage, Luma};
use neutro_defect::display::DisplayCache;
use neutro_defect::extractor::{extract_features, load_grayscale};
use neutro_defect_common::Label;
use tempfile::tempdir;

fn setup() -> (tempfile::TempDir, DisplayCache) {
    let dir = tempdir().expect("Failed to create temp dir");
    let images = dir.path().join("images");
    std::fs::create_dir_all(&images).unwrap();
    GrayImage::from_fn(48, 48, |x, y| Luma([((x * 5) ^ (y * 3)) as u8]))
        .save(images.join("tile.png"))
        .unwrap();
    let cache = DisplayCache::new(&images, dir.path().join("processed"));
    (dir, cache)
}

/// 空のキャッシュ
#[test]
fn test_cache_empty() {
    let (_dir, cache) = setup();
    let info = cache.info().unwrap();
    assert_eq!(info.entries, 0);
    assert_eq!(info.bytes, 0);
}

/// 削除後は再生成される
#[test]
fn test_regenerate_after_clear() {
    let (_dir, cache) = setup();

    let path = cache.ensure("tile.png").unwrap().expect("生成されていない");
    assert!(cache.clear().unwrap());
    assert!(!path.exists());

    let again = cache.ensure("tile.png").unwrap().expect("再生成されていない");
    assert_eq!(path, again);
    assert!(again.exists());
    assert_eq!(cache.info().unwrap().entries, 1);
}

/// 加工画像は二値で、特徴量は元画像から計算される
#[test]
fn test_display_does_not_affect_scoring() {
    let (_dir, cache) = setup();
    let source = cache.source_path("tile.png").unwrap();

    let before = extract_features(&load_grayscale(&source).unwrap(), "tile.png", Label::Normal);
    let processed = cache.ensure("tile.png").unwrap().unwrap();
    let after = extract_features(&load_grayscale(&source).unwrap(), "tile.png", Label::Normal);
    assert_eq!(before, after);

    let rendered = load_grayscale(&processed).unwrap();
    assert!(rendered.pixels().all(|p| p[0] == 0 || p[0] == 255));
}
