//! PDF/Excel出力の統合テスト

use image::{GrayImage, Luma};
use neutro_defect::display::DisplayCache;
use neutro_defect::error::NeutroError;
use neutro_defect::export::{self, excel, pdf, report_file_name};
use neutro_defect::table::FeatureTable;
use neutro_defect_common::{ImageRecord, Label, ReportContent};
use tempfile::tempdir;

/// PDF内に画像XObjectが含まれるか
fn has_image_xobject(bytes: &[u8]) -> bool {
    [&b"/Subtype/Image"[..], &b"/Subtype /Image"[..]]
        .iter()
        .any(|pat| bytes.windows(pat.len()).any(|w| w == *pat))
}

fn create_test_record(index: usize) -> ImageRecord {
    ImageRecord {
        name: format!("exp{}_num_{}.png", index, index * 100),
        label: if index % 2 == 0 { Label::Normal } else { Label::Defect },
        truth: 20.0 * index as f64,
        indeterminacy: 5.5,
        falsity: 45.25,
    }
}

#[test]
fn test_pdf_generation_without_images() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("report.pdf");

    let content = ReportContent::build(&create_test_record(4), None, None, vec!["footer".into()]);
    let result = pdf::generate_pdf(&content, &output_path);

    assert!(result.is_ok(), "PDF生成に失敗: {:?}", result.err());
    let bytes = std::fs::read(&output_path).expect("PDF読み込み失敗");
    assert!(bytes.starts_with(b"%PDF"), "PDFヘッダがない");
    assert!(!has_image_xobject(&bytes));
}

#[test]
fn test_pdf_generation_embeds_images() {
    let dir = tempdir().expect("Failed to create temp dir");
    let image_path = dir.path().join("tile.png");
    GrayImage::from_fn(64, 64, |x, y| Luma([((x * 3 + y) % 256) as u8]))
        .save(&image_path)
        .unwrap();
    let output_path = dir.path().join("report.pdf");

    let content = ReportContent::build(
        &create_test_record(3),
        Some(image_path.display().to_string()),
        None,
        vec![],
    );
    pdf::generate_pdf(&content, &output_path).expect("PDF生成に失敗");

    let bytes = std::fs::read(&output_path).expect("PDF読み込み失敗");
    assert!(has_image_xobject(&bytes), "画像が埋め込まれていない");
}

#[test]
fn test_pdf_generation_unreadable_image_is_not_available() {
    let dir = tempdir().expect("Failed to create temp dir");
    let broken = dir.path().join("broken.png");
    std::fs::write(&broken, b"not an image").unwrap();
    let output_path = dir.path().join("report.pdf");

    let content = ReportContent::build(
        &create_test_record(3),
        Some(broken.display().to_string()),
        None,
        vec![],
    );
    pdf::generate_pdf(&content, &output_path).expect("PDF生成に失敗");

    let bytes = std::fs::read(&output_path).expect("PDF読み込み失敗");
    assert!(!has_image_xobject(&bytes));
}

#[test]
fn test_export_report_with_display_image() {
    let dir = tempdir().expect("Failed to create temp dir");
    let images = dir.path().join("images");
    std::fs::create_dir_all(&images).unwrap();

    let record = create_test_record(1);
    GrayImage::from_fn(32, 32, |x, y| Luma([((x + y) * 4) as u8]))
        .save(images.join(&record.name))
        .unwrap();

    let cache = DisplayCache::new(&images, dir.path().join("processed"));
    let reports = dir.path().join("reports");
    std::fs::create_dir_all(&reports).unwrap();

    let path = export::export_report(&record, &cache, &reports, export::default_footer())
        .expect("レポート出力失敗");

    assert_eq!(path, reports.join(report_file_name(&record.name)));
    assert!(path.exists());
    // レポート生成時に表示用画像も用意される
    assert!(dir.path().join("processed").join(&record.name).exists());

    let bytes = std::fs::read(&path).expect("PDF読み込み失敗");
    assert!(has_image_xobject(&bytes), "元画像・加工画像が埋め込まれていない");
}

#[test]
fn test_export_report_when_display_image_cannot_be_written() {
    let dir = tempdir().expect("Failed to create temp dir");
    let images = dir.path().join("images");
    std::fs::create_dir_all(&images).unwrap();

    let record = create_test_record(1);
    GrayImage::from_pixel(16, 16, Luma([90]))
        .save(images.join(&record.name))
        .unwrap();

    // キャッシュ先が通常ファイルなのでフォルダを作れない
    let processed = dir.path().join("processed");
    std::fs::write(&processed, b"").unwrap();
    let cache = DisplayCache::new(&images, &processed);
    assert!(cache.ensure(&record.name).is_err());

    let target = dir.path().join("report.pdf");
    let path = export::export_report(&record, &cache, &target, vec![])
        .expect("表示用画像が無くてもレポートは出力される");

    assert!(path.exists());
    let bytes = std::fs::read(&path).expect("PDF読み込み失敗");
    assert!(has_image_xobject(&bytes), "元画像は埋め込まれる");
}

#[test]
fn test_export_report_to_explicit_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let cache = DisplayCache::new(dir.path().join("none"), dir.path().join("processed"));
    let target = dir.path().join("out").join("custom.pdf");

    let path = export::export_report(&create_test_record(2), &cache, &target, vec![])
        .expect("レポート出力失敗");
    assert_eq!(path, target);
    assert!(target.exists());
}

#[test]
fn test_excel_generation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("features.xlsx");

    let records: Vec<ImageRecord> = (1..=5).map(create_test_record).collect();
    let result = excel::generate_excel(&records, &output_path, "Features");

    assert!(result.is_ok(), "Excel生成に失敗: {:?}", result.err());
    let metadata = std::fs::metadata(&output_path).expect("ファイルメタデータ取得失敗");
    assert!(metadata.len() > 0, "Excelファイルが空");
}

#[test]
fn test_excel_error_propagates_as_common() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("features.xlsx");

    let title = "x".repeat(40_000);
    let result = excel::generate_excel(&[], &output_path, &title);

    assert!(matches!(result, Err(NeutroError::Common(_))));
    assert!(!output_path.exists());
}

#[test]
fn test_excel_generation_empty_table() {
    let dir = tempdir().expect("Failed to create temp dir");
    let table = FeatureTable::default();

    let path = export::export_table(&table, dir.path(), "Empty").expect("Excel出力失敗");
    assert_eq!(path, dir.path().join("Empty.xlsx"));
    assert!(path.exists());
}
