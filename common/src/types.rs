//! 評価結果の型定義
//!
//! CLIとレポート出力で共有される型:
//! - Label: 元フォルダから決まる正解ラベル
//! - ImageRecord: 特徴量テーブルの1行（T/I/F）
//! - ClassificationResult: 信頼度・重大度（都度計算、保存しない）

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 正解ラベル（normal / defect の2値のみ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Normal,
    Defect,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Normal => "normal",
            Label::Defect => "defect",
        }
    }

    /// レポート表示用（大文字）
    pub fn upper(&self) -> &'static str {
        match self {
            Label::Normal => "NORMAL",
            Label::Defect => "DEFECT",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Label::Normal),
            "defect" => Ok(Label::Defect),
            _ => Err(format!("Unknown label: {}. Use normal or defect", s)),
        }
    }
}

/// 特徴量テーブルの1行
///
/// T+I+Fは定数に正規化しない（各値は独立に導出される）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    #[serde(rename = "Image_Name")]
    pub name: String,

    #[serde(rename = "Label")]
    pub label: Label,

    #[serde(rename = "Truth")]
    pub truth: f64,

    #[serde(rename = "Indeterminacy")]
    pub indeterminacy: f64,

    #[serde(rename = "Falsity")]
    pub falsity: f64,
}

/// 信頼度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "High"),
            Confidence::Medium => write!(f, "Medium"),
            Confidence::Low => write!(f, "Low"),
        }
    }
}

/// 重大度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Severe,
    Moderate,
    Minor,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Severe => write!(f, "Severe"),
            Severity::Moderate => write!(f, "Moderate"),
            Severity::Minor => write!(f, "Minor"),
        }
    }
}

/// 分類結果（ImageRecordから都度導出）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub confidence: Confidence,
    pub severity: Severity,
}
