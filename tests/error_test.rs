//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use neutro_defect::display::DisplayCache;
use neutro_defect::error::NeutroError;
use neutro_defect::scanner;
use neutro_defect::table::FeatureTable;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないデータセットは全カテゴリ欠落として報告（中断しない）
#[test]
fn test_scan_nonexistent_dataset() {
    let scan = scanner::scan_dataset(Path::new("/nonexistent/path/12345"));

    assert!(scan.images.is_empty());
    assert_eq!(scan.missing.len(), scanner::LABEL_MAP.len());
}

/// 空のデータセットはエラーではなく欠落として報告
#[test]
fn test_scan_empty_dataset() {
    let dir = tempdir().expect("Failed to create temp dir");
    let scan = scanner::scan_dataset(dir.path());

    assert!(scan.images.is_empty());
    assert_eq!(scan.missing.len(), scanner::LABEL_MAP.len());
}

/// テーブルに無い画像名は UnknownImage
#[test]
fn test_unknown_image_lookup() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("features.csv");
    std::fs::write(
        &path,
        "Image_Name,Label,Truth,Indeterminacy,Falsity\na.jpg,normal,1.0,2.0,3.0\n",
    )
    .unwrap();

    let table = FeatureTable::load(&path).expect("読み込み失敗");
    assert!(table.get("a.jpg").is_ok());

    let err = table.get("b.jpg").unwrap_err();
    assert!(matches!(err, NeutroError::UnknownImage(_)));
    assert!(err.to_string().contains("b.jpg"));
}

/// 列が欠けたCSVは不正テーブル
#[test]
fn test_malformed_table() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("features.csv");
    std::fs::write(&path, "Image_Name,Label\na.jpg,normal\n").unwrap();

    assert!(matches!(FeatureTable::load(&path), Err(NeutroError::InvalidTable(_))));
}

/// パスを含む画像名は拒否
#[test]
fn test_display_cache_rejects_path_names() {
    let dir = tempdir().expect("Failed to create temp dir");
    let cache = DisplayCache::new(dir.path(), dir.path().join("processed"));

    let err = cache.ensure("../outside.png").unwrap_err();
    assert!(matches!(err, NeutroError::InvalidImageName(_)));
}

/// NeutroErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        NeutroError::Config("テスト設定エラー".to_string()),
        NeutroError::FileNotFound("features.csv".to_string()),
        NeutroError::UnknownImage("x.jpg".to_string()),
        NeutroError::EmptyTable("no records".to_string()),
        NeutroError::PdfGeneration("PDF生成エラー".to_string()),
        NeutroError::InvalidTable("不正".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: NeutroError = io_err.into();

    assert!(matches!(err, NeutroError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = neutro_defect_common::Error::Excel("保存エラー".to_string());
    let err: NeutroError = common_err.into();

    assert!(matches!(err, NeutroError::Common(_)));
    assert!(format!("{}", err).contains("保存エラー"));
}
