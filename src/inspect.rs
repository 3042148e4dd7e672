//! 画像ごとの評価表示
//!
//! テーブルの1行を取り出し、判定・説明文・表示用画像をまとめる。
//! 判定は毎回計算し直す（保存しない）。

use crate::display::DisplayCache;
use crate::error::{NeutroError, Result};
use crate::table::FeatureTable;
use dialoguer::Select;
use neutro_defect_common::report::{explanation, format_value};
use neutro_defect_common::{classify_record, ClassificationResult, ImageRecord};
use serde::Serialize;
use std::path::PathBuf;

/// 1画像分の評価結果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    pub record: ImageRecord,
    pub classification: ClassificationResult,
    pub explanation: String,
    pub image_path: PathBuf,
    pub processed_path: Option<PathBuf>,
}

/// 名前を指定して評価。未指定なら先頭行
pub fn inspect(table: &FeatureTable, cache: &DisplayCache, name: Option<&str>) -> Result<Inspection> {
    let record = match name {
        Some(name) => table.get(name)?,
        None => table.first()?,
    };
    let classification = classify_record(record);

    // 表示用画像が作れなくても評価自体は返す
    let processed_path = match cache.ensure(&record.name) {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!("display image unavailable for {}: {}", record.name, e);
            None
        }
    };

    Ok(Inspection {
        record: record.clone(),
        classification,
        explanation: explanation(record, &classification),
        image_path: cache.source_path(&record.name)?,
        processed_path,
    })
}

/// 対話的に画像を選ぶ
pub fn pick_image(table: &FeatureTable) -> Result<String> {
    let names = table.names();
    if names.is_empty() {
        return Err(NeutroError::EmptyTable("選択できる画像がありません".to_string()));
    }

    let index = Select::new()
        .with_prompt("画像を選択")
        .items(&names)
        .default(0)
        .max_length(15)
        .interact()
        .map_err(|e| NeutroError::Prompt(e.to_string()))?;

    Ok(names[index].to_string())
}

/// 端末表示用に整形
pub fn render_text(inspection: &Inspection) -> String {
    let r = &inspection.record;
    let c = &inspection.classification;
    let processed = inspection
        .processed_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "Not Available".to_string());

    format!(
        "画像: {}\n  ラベル: {}\n  Truth: {}%\n  Indeterminacy: {}%\n  Falsity: {}%\n  \
         信頼度: {}\n  重大度: {}\n  元画像: {}\n  加工画像: {}\n\n{}",
        r.name,
        r.label.upper(),
        format_value(r.truth),
        format_value(r.indeterminacy),
        format_value(r.falsity),
        c.confidence,
        c.severity,
        inspection.image_path.display(),
        processed,
        inspection.explanation,
    )
}
