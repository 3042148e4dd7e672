//! ダッシュボード集計

use crate::scoring::round2;
use crate::types::{ImageRecord, Label};
use serde::Serialize;

/// テーブル全体の集計値
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    pub defect: usize,
    pub normal: usize,
    pub avg_truth: f64,
    pub avg_indeterminacy: f64,
    pub avg_falsity: f64,
}

impl DashboardStats {
    /// 件数とT/I/F平均（小数2桁）を集計。空なら全て0
    pub fn from_records(records: &[ImageRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let n = records.len() as f64;
        let avg = |f: fn(&ImageRecord) -> f64| round2(records.iter().map(f).sum::<f64>() / n);

        Self {
            total: records.len(),
            defect: records.iter().filter(|r| r.label == Label::Defect).count(),
            normal: records.iter().filter(|r| r.label == Label::Normal).count(),
            avg_truth: avg(|r| r.truth),
            avg_indeterminacy: avg(|r| r.indeterminacy),
            avg_falsity: avg(|r| r.falsity),
        }
    }
}
