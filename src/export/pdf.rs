//! PDFレポート生成（CLI版）
//!
//! 1画像分の評価結果を A4 に描画する（元画像・加工画像を埋め込む）。内容は common の
//! `ReportContent` で組み立て済みのものを使い、ここは配置のみ担当。

use crate::error::{NeutroError, Result};
use neutro_defect_common::layout::{
    content_width_pt, pt_to_mm, wrap_text, A4_HEIGHT_MM, A4_WIDTH_MM, BODY_CHARS_PER_LINE,
    BODY_FONT_PT, CELL_PADDING_PT, FOOTER_FONT_PT, HEADING_FONT_PT, HEADING_GAP_PT,
    IMAGE_COL_WIDTHS, INFO_COL_WIDTHS, LINE_HEIGHT_RATIO, MARGIN_PT,
    PAGE_HEIGHT_PT, REPORT_IMAGE_PT, SECTION_GAP_PT, TABLE_ROW_PT, TITLE_FONT_PT,
    VALUE_COL_WIDTHS,
};
use neutro_defect_common::report::{
    ReportContent, ReportImage, EXPLANATION_HEADING, IMAGES_HEADING, NOT_AVAILABLE,
    VALUES_HEADING,
};
use printpdf::image_crate::GenericImageView;
use printpdf::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// 画像配置時の基準解像度
const IMAGE_DPI: f32 = 300.0;

fn pt(value: f32) -> Mm {
    Mm(pt_to_mm(value))
}

/// 画像を読み込む。無い・読めない場合は None（表には "Not Available"）
fn load_report_image(image: &ReportImage) -> Option<printpdf::image_crate::DynamicImage> {
    let path = image.path.as_deref()?;
    match printpdf::image_crate::open(path) {
        Ok(img) => Some(img),
        Err(e) => {
            tracing::warn!("report image unreadable: {}: {}", path, e);
            None
        }
    }
}

/// ページ送りを管理する描画カーソル
struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    /// 現在位置（pt、ページ下端から）
    cursor_pt: f32,
}

impl PageWriter {
    fn new(title: &str) -> Result<Self> {
        let (doc, page1, layer1) =
            PdfDocument::new(title, Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "Layer 1");
        let layer = doc.get_page(page1).get_layer(layer1);

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| NeutroError::PdfGeneration(format!("フォント追加エラー: {:?}", e)))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| NeutroError::PdfGeneration(format!("フォント追加エラー: {:?}", e)))?;

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            cursor_pt: PAGE_HEIGHT_PT - MARGIN_PT,
        })
    }

    /// 残り高さが足りなければ改ページ
    fn ensure_space(&mut self, height_pt: f32) {
        if self.cursor_pt - height_pt >= MARGIN_PT {
            return;
        }
        let (page, layer) = self
            .doc
            .add_page(Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor_pt = PAGE_HEIGHT_PT - MARGIN_PT;
    }

    fn text(&self, text: &str, size: f32, x_pt: f32, y_pt: f32, bold: bool) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, size, pt(x_pt), pt(y_pt), font);
    }

    fn line(&self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let line = Line {
            points: vec![
                (Point::new(pt(x1), pt(y1)), false),
                (Point::new(pt(x2), pt(y2)), false),
            ],
            is_closed: false,
        };
        self.layer.add_line(line);
    }

    fn title(&mut self, text: &str) {
        let height = TITLE_FONT_PT * LINE_HEIGHT_RATIO;
        self.ensure_space(height);
        self.cursor_pt -= TITLE_FONT_PT;
        // 概算幅で中央寄せ（Helvetica の平均字幅 ≈ 0.55em）
        let approx_width = text.len() as f32 * TITLE_FONT_PT * 0.55;
        let x = MARGIN_PT + ((content_width_pt() - approx_width) / 2.0).max(0.0);
        self.text(text, TITLE_FONT_PT, x, self.cursor_pt, true);
        self.cursor_pt -= height - TITLE_FONT_PT;
    }

    fn heading(&mut self, text: &str, gap_after: f32) {
        self.ensure_space(HEADING_FONT_PT + gap_after + TABLE_ROW_PT);
        self.cursor_pt -= HEADING_FONT_PT;
        self.text(text, HEADING_FONT_PT, MARGIN_PT, self.cursor_pt, true);
        self.cursor_pt -= gap_after;
    }

    fn gap(&mut self, height: f32) {
        self.cursor_pt -= height;
    }

    /// 2列の表。`bold_first_col` で左列を太字、`header` で1行目を太字
    fn table(&mut self, rows: &[(String, String)], widths: [f32; 2], bold_first_col: bool, header: bool) {
        let total_width: f32 = widths.iter().sum();
        let x0 = MARGIN_PT;
        let x1 = x0 + widths[0];
        let x2 = x0 + total_width;

        for (idx, (left, right)) in rows.iter().enumerate() {
            self.ensure_space(TABLE_ROW_PT);
            let top = self.cursor_pt;
            let bottom = top - TABLE_ROW_PT;
            let baseline = bottom + (TABLE_ROW_PT - BODY_FONT_PT) / 2.0 + 2.0;
            let header_row = header && idx == 0;

            self.line(x0, top, x2, top);
            self.line(x0, bottom, x2, bottom);
            self.line(x0, top, x0, bottom);
            self.line(x1, top, x1, bottom);
            self.line(x2, top, x2, bottom);

            self.text(left, BODY_FONT_PT, x0 + CELL_PADDING_PT, baseline, bold_first_col || header_row);
            self.text(right, BODY_FONT_PT, x1 + CELL_PADDING_PT, baseline, header_row);

            self.cursor_pt = bottom;
        }
    }

    /// 画像欄の表。画像は REPORT_IMAGE_PT 四方に拡縮して右列中央に置く
    fn image_table(&mut self, images: &[ReportImage]) {
        let x0 = MARGIN_PT;
        let x1 = x0 + IMAGE_COL_WIDTHS[0];
        let x2 = x1 + IMAGE_COL_WIDTHS[1];

        for item in images {
            let loaded = load_report_image(item);
            let row_height = if loaded.is_some() {
                REPORT_IMAGE_PT + CELL_PADDING_PT * 2.0
            } else {
                TABLE_ROW_PT
            };

            self.ensure_space(row_height);
            let top = self.cursor_pt;
            let bottom = top - row_height;
            let middle = bottom + row_height / 2.0 - BODY_FONT_PT / 2.0 + 2.0;

            self.line(x0, top, x2, top);
            self.line(x0, bottom, x2, bottom);
            self.line(x0, top, x0, bottom);
            self.line(x1, top, x1, bottom);
            self.line(x2, top, x2, bottom);

            self.text(item.caption, BODY_FONT_PT, x0 + CELL_PADDING_PT, middle, true);

            match loaded {
                Some(img) => {
                    // 300dpi での自然サイズ（pt）から倍率を求める
                    let (width_px, height_px) = img.dimensions();
                    let natural_w = width_px.max(1) as f32 * 72.0 / IMAGE_DPI;
                    let natural_h = height_px.max(1) as f32 * 72.0 / IMAGE_DPI;
                    let left = x1 + (IMAGE_COL_WIDTHS[1] - REPORT_IMAGE_PT) / 2.0;

                    Image::from_dynamic_image(&img).add_to_layer(
                        self.layer.clone(),
                        ImageTransform {
                            translate_x: Some(pt(left)),
                            translate_y: Some(pt(bottom + CELL_PADDING_PT)),
                            scale_x: Some(REPORT_IMAGE_PT / natural_w),
                            scale_y: Some(REPORT_IMAGE_PT / natural_h),
                            dpi: Some(IMAGE_DPI),
                            ..Default::default()
                        },
                    );
                }
                None => {
                    self.text(NOT_AVAILABLE, BODY_FONT_PT, x1 + CELL_PADDING_PT, middle, false);
                }
            }

            self.cursor_pt = bottom;
        }
    }

    fn paragraph(&mut self, text: &str, size: f32) {
        let line_height = size * LINE_HEIGHT_RATIO;
        for line in wrap_text(text, BODY_CHARS_PER_LINE) {
            self.ensure_space(line_height);
            self.cursor_pt -= line_height;
            self.text(&line, size, MARGIN_PT, self.cursor_pt, false);
        }
    }

    fn save(self, output_path: &Path) -> Result<()> {
        let file = File::create(output_path)?;
        self.doc
            .save(&mut BufWriter::new(file))
            .map_err(|e| NeutroError::PdfGeneration(format!("PDF保存エラー: {:?}", e)))
    }
}

fn owned_rows(rows: &[(&'static str, String)]) -> Vec<(String, String)> {
    rows.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

pub fn generate_pdf(content: &ReportContent, output_path: &Path) -> Result<()> {
    let mut page = PageWriter::new(content.title)?;

    page.title(content.title);
    page.gap(SECTION_GAP_PT);

    // 基本情報
    page.table(&owned_rows(&content.info_rows), INFO_COL_WIDTHS, true, false);
    page.gap(SECTION_GAP_PT);

    // T/I/F
    page.heading(VALUES_HEADING, HEADING_GAP_PT);
    let mut value_rows = vec![("Measure".to_string(), "Value (%)".to_string())];
    value_rows.extend(owned_rows(&content.value_rows));
    page.table(&value_rows, VALUE_COL_WIDTHS, false, true);
    page.gap(SECTION_GAP_PT);

    // 画像
    page.heading(IMAGES_HEADING, HEADING_GAP_PT);
    page.image_table(&content.images);
    page.gap(SECTION_GAP_PT);

    // 説明
    page.heading(EXPLANATION_HEADING, HEADING_GAP_PT);
    for paragraph in &content.explanation {
        page.paragraph(paragraph, BODY_FONT_PT);
        page.gap(BODY_FONT_PT * 0.5);
    }
    page.gap(SECTION_GAP_PT);

    // フッター
    for line in &content.footer {
        page.paragraph(line, FOOTER_FONT_PT);
    }

    page.save(output_path)
}
