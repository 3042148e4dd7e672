//! Excel生成（共通ライブラリ）
//!
//! Summaryシート（集計）とRecordsシート（全行＋判定）を持つブックを生成

use crate::classifier::classify_record;
use crate::layout::RECORD_COLUMNS;
use crate::stats::DashboardStats;
use crate::types::ImageRecord;
use crate::{Error, Result};
use rust_xlsxwriter::*;

fn xlsx_err(context: &str) -> impl Fn(XlsxError) -> Error + '_ {
    move |e| Error::Excel(format!("{}: {}", context, e))
}

/// Excelをバッファに生成
pub fn generate_excel_buffer(records: &[ImageRecord], title: &str) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xADD8E6))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0x808080));

    let label_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xD3D3D3))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0x808080));

    let number_format = Format::new()
        .set_num_format("0.00")
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xCCCCCC));

    let text_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xCCCCCC));

    // Summaryシート
    let stats = DashboardStats::from_records(records);
    let summary = workbook.add_worksheet();
    summary.set_name("Summary").map_err(xlsx_err("シート名設定エラー"))?;
    summary.set_column_width(0, 24.0).map_err(xlsx_err("列幅設定エラー"))?;
    summary.set_column_width(1, 14.0).map_err(xlsx_err("列幅設定エラー"))?;
    summary
        .write_string_with_format(0, 0, title, &Format::new().set_bold().set_font_size(14.0))
        .map_err(xlsx_err("タイトル書き込みエラー"))?;

    let counts: [(&str, usize); 3] = [
        ("Total Images", stats.total),
        ("Defect", stats.defect),
        ("Normal", stats.normal),
    ];
    let averages: [(&str, f64); 3] = [
        ("Average Truth", stats.avg_truth),
        ("Average Indeterminacy", stats.avg_indeterminacy),
        ("Average Falsity", stats.avg_falsity),
    ];

    let mut row: u32 = 2;
    for (label, count) in counts {
        summary
            .write_string_with_format(row, 0, label, &label_format)
            .map_err(xlsx_err("ラベル書き込みエラー"))?;
        summary
            .write_number_with_format(row, 1, count as f64, &text_format)
            .map_err(xlsx_err("値書き込みエラー"))?;
        row += 1;
    }
    for (label, value) in averages {
        summary
            .write_string_with_format(row, 0, label, &label_format)
            .map_err(xlsx_err("ラベル書き込みエラー"))?;
        summary
            .write_number_with_format(row, 1, value, &number_format)
            .map_err(xlsx_err("値書き込みエラー"))?;
        row += 1;
    }

    // Recordsシート
    let sheet = workbook.add_worksheet();
    sheet.set_name("Records").map_err(xlsx_err("シート名設定エラー"))?;

    for (col, (header, width)) in RECORD_COLUMNS.iter().enumerate() {
        let col = col as u16;
        sheet.set_column_width(col, *width).map_err(xlsx_err("列幅設定エラー"))?;
        sheet
            .write_string_with_format(0, col, *header, &header_format)
            .map_err(xlsx_err("見出し書き込みエラー"))?;
    }
    sheet.set_freeze_panes(1, 0).map_err(xlsx_err("ウィンドウ枠固定エラー"))?;

    for (idx, record) in records.iter().enumerate() {
        let row = idx as u32 + 1;
        let class = classify_record(record);

        sheet
            .write_string_with_format(row, 0, &record.name, &text_format)
            .map_err(xlsx_err("値書き込みエラー"))?;
        sheet
            .write_string_with_format(row, 1, record.label.as_str(), &text_format)
            .map_err(xlsx_err("値書き込みエラー"))?;
        for (col, value) in [(2, record.truth), (3, record.indeterminacy), (4, record.falsity)] {
            sheet
                .write_number_with_format(row, col, value, &number_format)
                .map_err(xlsx_err("値書き込みエラー"))?;
        }
        sheet
            .write_string_with_format(row, 5, class.confidence.to_string(), &text_format)
            .map_err(xlsx_err("値書き込みエラー"))?;
        sheet
            .write_string_with_format(row, 6, class.severity.to_string(), &text_format)
            .map_err(xlsx_err("値書き込みエラー"))?;
    }

    workbook.save_to_buffer().map_err(xlsx_err("Excel保存エラー"))
}
