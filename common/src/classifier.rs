//! 信頼度・重大度の判定
//!
//! (Truth, Indeterminacy) を固定閾値で離散ラベルに写像する。
//! 上から順に評価し、最初に一致した行を採用する。
//!
//! | 条件              | 信頼度 | 重大度   |
//! |-------------------|--------|----------|
//! | T ≥ 80 かつ I ≤ 10 | High   | Severe   |
//! | T ≥ 60 かつ I ≤ 20 | Medium | Moderate |
//! | それ以外          | Low    | Minor    |
//!
//! 範囲外やNaNの入力は検証せず、そのまま「それ以外」に落ちる。
//! 既存レポートとの互換のため閾値は整数のまま変更しないこと。

use crate::types::{ClassificationResult, Confidence, ImageRecord, Severity};

/// High/Severe 判定の Truth 下限
pub const HIGH_TRUTH_MIN: f64 = 80.0;
/// High/Severe 判定の Indeterminacy 上限
pub const HIGH_INDETERMINACY_MAX: f64 = 10.0;
/// Medium/Moderate 判定の Truth 下限
pub const MEDIUM_TRUTH_MIN: f64 = 60.0;
/// Medium/Moderate 判定の Indeterminacy 上限
pub const MEDIUM_INDETERMINACY_MAX: f64 = 20.0;

pub fn classify(truth: f64, indeterminacy: f64) -> ClassificationResult {
    let (confidence, severity) =
        if truth >= HIGH_TRUTH_MIN && indeterminacy <= HIGH_INDETERMINACY_MAX {
            (Confidence::High, Severity::Severe)
        } else if truth >= MEDIUM_TRUTH_MIN && indeterminacy <= MEDIUM_INDETERMINACY_MAX {
            (Confidence::Medium, Severity::Moderate)
        } else {
            (Confidence::Low, Severity::Minor)
        };

    ClassificationResult { confidence, severity }
}

/// テーブルの1行を判定
pub fn classify_record(record: &ImageRecord) -> ClassificationResult {
    classify(record.truth, record.indeterminacy)
}
