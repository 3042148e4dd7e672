//! レイアウト設定モジュール
//!
//! レポートPDFとExcelの寸法定義（pt基準）

// ============================================
// PDF（pt基準）
// ============================================

/// A4サイズ（mm）
pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

/// mm → pt変換 (1mm = 72/25.4 pt ≈ 2.835pt)
pub const MM_TO_PT: f32 = 72.0 / 25.4;

/// ページサイズ（pt）
pub const PAGE_WIDTH_PT: f32 = A4_WIDTH_MM * MM_TO_PT;   // 595.3pt
pub const PAGE_HEIGHT_PT: f32 = A4_HEIGHT_MM * MM_TO_PT; // 841.9pt

/// 余白（pt、上下左右共通）
pub const MARGIN_PT: f32 = 40.0;

/// 表の列幅（pt）
pub const INFO_COL_WIDTHS: [f32; 2] = [150.0, 300.0];
pub const VALUE_COL_WIDTHS: [f32; 2] = [200.0, 250.0];
pub const IMAGE_COL_WIDTHS: [f32; 2] = [160.0, 300.0];

/// 画像欄の画像サイズ（pt、正方形）
pub const REPORT_IMAGE_PT: f32 = 180.0;

/// 表の行高さ（pt）
pub const TABLE_ROW_PT: f32 = 22.0;

/// セル内左右パディング（pt）
pub const CELL_PADDING_PT: f32 = 8.0;

/// フォントサイズ（pt）
pub const TITLE_FONT_PT: f32 = 18.0;
pub const HEADING_FONT_PT: f32 = 14.0;
pub const BODY_FONT_PT: f32 = 10.0;
pub const FOOTER_FONT_PT: f32 = 9.0;

/// セクション間・見出し下の間隔（pt）
pub const SECTION_GAP_PT: f32 = 25.0;
pub const HEADING_GAP_PT: f32 = 10.0;

/// 本文の行送り（フォントサイズ比）
pub const LINE_HEIGHT_RATIO: f32 = 1.4;

/// 本文1行あたりの概算文字数（Helvetica 10pt、本文幅基準）
pub const BODY_CHARS_PER_LINE: usize = 95;

// ============================================
// Excel
// ============================================

/// Recordsシートの列定義（見出し, 列幅）
pub const RECORD_COLUMNS: &[(&str, f64)] = &[
    ("Image_Name", 28.0),
    ("Label", 10.0),
    ("Truth", 10.0),
    ("Indeterminacy", 14.0),
    ("Falsity", 10.0),
    ("Confidence", 12.0),
    ("Severity", 12.0),
];

// ============================================
// ヘルパー関数
// ============================================

/// pt → mm 変換
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / MM_TO_PT
}

/// 本文幅（pt）
#[inline]
pub fn content_width_pt() -> f32 {
    PAGE_WIDTH_PT - MARGIN_PT * 2.0
}

/// 単語単位の折り返し
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        assert!((PAGE_WIDTH_PT - 595.28).abs() < 0.1);
        assert!((PAGE_HEIGHT_PT - 841.89).abs() < 0.1);
        assert!((content_width_pt() - 515.28).abs() < 0.1);
    }

    #[test]
    fn test_tables_fit_content_width() {
        for widths in [INFO_COL_WIDTHS, VALUE_COL_WIDTHS, IMAGE_COL_WIDTHS] {
            assert!(widths.iter().sum::<f32>() <= content_width_pt());
        }
    }

    #[test]
    fn test_conversion() {
        assert!((pt_to_mm(28.35) - 10.0).abs() < 0.01);
        assert!((pt_to_mm(MARGIN_PT) - 14.11).abs() < 0.01);
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("aaa bbb ccc ddd", 7);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
        assert!(wrap_text("", 10).is_empty());
        assert_eq!(wrap_text("single", 2), vec!["single"]);
    }
}
