//! Neutro Defect Common Library
//!
//! 表面欠陥画像のニュートロソフィック評価で共有される型と純粋ロジック
//! （画像I/Oを持たない）

pub mod types;
pub mod scoring;
pub mod classifier;
pub mod stats;
pub mod report;
pub mod layout;
pub mod error;
pub mod export;

pub use types::{ClassificationResult, Confidence, ImageRecord, Label, Severity};
pub use scoring::{round2, NeutrosophicScores};
pub use classifier::{classify, classify_record};
pub use stats::DashboardStats;
pub use report::ReportContent;
pub use error::{Error, Result};
