pub mod pdf;
pub mod excel;

use crate::display::DisplayCache;
use crate::error::Result;
use crate::table::FeatureTable;
use neutro_defect_common::{ImageRecord, ReportContent};
use std::path::{Path, PathBuf};

/// 既定のレポートファイル名
pub fn report_file_name(image_name: &str) -> String {
    format!("Neutrosophic_Report_{}.pdf", image_name)
}

fn output_path_for(output: &Path, default_name: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(default_name)
    } else {
        output.to_path_buf()
    }
}

/// レポート末尾の署名行
pub fn default_footer() -> Vec<String> {
    vec![
        "Neutrosophic Surface Defect Analysis".to_string(),
        format!("Generated: {}", chrono::Local::now().format("%Y-%m-%d %H:%M")),
    ]
}

/// 1画像分のPDFレポートを出力し、出力パスを返す
///
/// 表示用画像はキャッシュに無ければここで生成する。生成できなければ
/// その欄だけ "Not Available" にする。
pub fn export_report(
    record: &ImageRecord,
    cache: &DisplayCache,
    output: &Path,
    footer: Vec<String>,
) -> Result<PathBuf> {
    let original = cache
        .source_path(&record.name)
        .ok()
        .filter(|p| p.exists())
        .map(|p| p.display().to_string());

    // 表示用画像が作れなくてもレポートは出す（"Not Available"）
    let processed = match cache.ensure(&record.name) {
        Ok(path) => path.map(|p| p.display().to_string()),
        Err(e) => {
            tracing::warn!("display image unavailable for {}: {}", record.name, e);
            None
        }
    };

    let content = ReportContent::build(record, original, processed, footer);

    let output_path = output_path_for(output, &report_file_name(&record.name));
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    println!("- PDFを生成中...");
    pdf::generate_pdf(&content, &output_path)?;
    println!("✔ PDF出力: {}", output_path.display());

    Ok(output_path)
}

/// テーブル全体をExcelに出力し、出力パスを返す
pub fn export_table(table: &FeatureTable, output: &Path, title: &str) -> Result<PathBuf> {
    let output_path = output_path_for(output, &format!("{}.xlsx", title));

    println!("- Excelを生成中...");
    excel::generate_excel(table.records(), &output_path, title)?;
    println!("✔ Excel出力: {}", output_path.display());

    Ok(output_path)
}
