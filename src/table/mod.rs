//! 特徴量テーブル
//!
//! バッチ抽出の結果を CSV（Image_Name,Label,Truth,Indeterminacy,Falsity）で
//! 永続化し、起動時に一度だけ読み込んで各コマンドへ参照で渡す。
//! 読み込み後は変更しない。

use crate::error::{NeutroError, Result};
use neutro_defect_common::{DashboardStats, ImageRecord};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct FeatureTable {
    records: Vec<ImageRecord>,
    index: HashMap<String, usize>,
}

impl FeatureTable {
    /// レコード列から構築（同名は先勝ち）
    pub fn from_records(records: Vec<ImageRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.contains_key(&record.name) {
                tracing::warn!("duplicate image name in table, keeping first: {}", record.name);
                continue;
            }
            index.insert(record.name.clone(), i);
        }
        Self { records, index }
    }

    /// CSVから読み込み。ラベルは normal/defect 以外を拒否する
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(NeutroError::FileNotFound(path.display().to_string()));
        }

        let mut reader = csv::Reader::from_path(path)?;
        let records = reader
            .deserialize::<ImageRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| NeutroError::InvalidTable(format!("{}: {}", path.display(), e)))?;

        tracing::info!("loaded {} records from {}", records.len(), path.display());
        Ok(Self::from_records(records))
    }

    /// CSVへ保存
    pub fn save(&self, path: &Path) -> Result<()> {
        write_records(&self.records, path)
    }

    /// 名前で検索。存在しなければ UnknownImage
    pub fn get(&self, name: &str) -> Result<&ImageRecord> {
        self.lookup(name)
            .ok_or_else(|| NeutroError::UnknownImage(name.to_string()))
    }

    pub fn lookup(&self, name: &str) -> Option<&ImageRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    /// 先頭行（画像未指定時の既定選択）
    pub fn first(&self) -> Result<&ImageRecord> {
        self.records
            .first()
            .ok_or_else(|| NeutroError::EmptyTable("no records".to_string()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_records(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// レコード列をCSVへ書き出す（見出し行付き）
pub fn write_records(records: &[ImageRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    if records.is_empty() {
        writer.write_record(["Image_Name", "Label", "Truth", "Indeterminacy", "Falsity"])?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
