//! Excel生成（CLI版）
//!
//! common の excel_core でバッファを作り、ファイルへ書き出す

use crate::error::Result;
use neutro_defect_common::export::excel_core::generate_excel_buffer;
use neutro_defect_common::ImageRecord;
use std::path::Path;

pub fn generate_excel(records: &[ImageRecord], output_path: &Path, title: &str) -> Result<()> {
    let buffer = generate_excel_buffer(records, title)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, buffer)?;
    Ok(())
}
