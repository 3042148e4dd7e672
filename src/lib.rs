pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod extractor;
pub mod inspect;
pub mod scanner;
pub mod table;

pub use extractor::extract_features;
pub use neutro_defect_common::{classify, ClassificationResult, ImageRecord, Label};
