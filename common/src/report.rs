//! レポート内容の組み立て
//!
//! PDF描画やCLI表示から独立した、文章と表の内容だけを持つ。

use crate::classifier::classify_record;
use crate::types::{ClassificationResult, ImageRecord};

pub const REPORT_TITLE: &str = "Neutrosophic Surface Defect Analysis Report";
pub const VALUES_HEADING: &str = "Neutrosophic Membership Values";
pub const IMAGES_HEADING: &str = "Surface Image Visualization";
pub const EXPLANATION_HEADING: &str = "Interpretation & Explanation";
pub const NOT_AVAILABLE: &str = "Not Available";

/// 百分率の表示（整数値でも "50.0" のように小数点を残す）
pub fn format_value(value: f64) -> String {
    let s = value.to_string();
    if !value.is_finite() || s.contains('.') || s.contains('e') {
        s
    } else {
        format!("{}.0", s)
    }
}

/// 画面表示用の短い説明文
pub fn explanation(record: &ImageRecord, class: &ClassificationResult) -> String {
    format!(
        "The Truth value of {t}% indicates the degree of defect presence on the surface. \
         Indeterminacy of {i}% represents uncertainty caused by surface texture variation, \
         noise, or illumination effects. The Falsity value of {f}% corresponds to normal \
         surface characteristics. Based on neutrosophic evaluation, the surface is classified \
         as {label} with {confidence} confidence and {severity} severity.",
        t = format_value(record.truth),
        i = format_value(record.indeterminacy),
        f = format_value(record.falsity),
        label = record.label.upper(),
        confidence = class.confidence,
        severity = class.severity,
    )
}

/// レポート用の説明文（2段落）
pub fn report_explanation(record: &ImageRecord, class: &ClassificationResult) -> Vec<String> {
    vec![
        format!(
            "The analyzed surface image exhibits a Truth membership value of {}%, indicating \
             the presence of defect characteristics. The Indeterminacy value of {}% reflects \
             uncertainty due to surface texture variation or illumination noise. The Falsity \
             value of {}% represents normal surface behavior.",
            format_value(record.truth),
            format_value(record.indeterminacy),
            format_value(record.falsity),
        ),
        format!(
            "Based on neutrosophic evaluation, the surface is classified as {} with {} \
             confidence and {} severity.",
            record.label.upper(),
            class.confidence,
            class.severity,
        ),
    ]
}

/// 画像欄の1行（ファイルが無ければ path は None）
#[derive(Debug, Clone)]
pub struct ReportImage {
    pub caption: &'static str,
    pub path: Option<String>,
}

/// レポート1件分の内容
#[derive(Debug, Clone)]
pub struct ReportContent {
    pub title: &'static str,
    pub info_rows: Vec<(&'static str, String)>,
    pub value_rows: Vec<(&'static str, String)>,
    pub images: Vec<ReportImage>,
    pub explanation: Vec<String>,
    pub footer: Vec<String>,
}

impl ReportContent {
    pub fn build(
        record: &ImageRecord,
        original: Option<String>,
        processed: Option<String>,
        footer: Vec<String>,
    ) -> Self {
        let class = classify_record(record);

        Self {
            title: REPORT_TITLE,
            info_rows: vec![
                ("Image Name", record.name.clone()),
                ("Classification", record.label.upper().to_string()),
                ("Confidence Level", class.confidence.to_string()),
                ("Severity Level", class.severity.to_string()),
            ],
            value_rows: vec![
                ("Truth (T)", format!("{}%", format_value(record.truth))),
                ("Indeterminacy (I)", format!("{}%", format_value(record.indeterminacy))),
                ("Falsity (F)", format!("{}%", format_value(record.falsity))),
            ],
            images: vec![
                ReportImage { caption: "Original Image", path: original },
                ReportImage { caption: "Preprocessed Image", path: processed },
            ],
            explanation: report_explanation(record, &class),
            footer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Label;

    fn sample() -> ImageRecord {
        ImageRecord {
            name: "exp3_num_100.jpg".to_string(),
            label: Label::Defect,
            truth: 85.0,
            indeterminacy: 5.25,
            falsity: 79.75,
        }
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(50.2), "50.2");
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(85.0), "85.0");
        assert_eq!(format_value(12.34), "12.34");
    }

    #[test]
    fn test_explanation_text() {
        let record = sample();
        let class = classify_record(&record);
        let text = explanation(&record, &class);

        assert!(text.starts_with("The Truth value of 85.0%"));
        assert!(text.contains("Indeterminacy of 5.25%"));
        assert!(text.contains("classified as DEFECT with High confidence and Severe severity."));
    }

    #[test]
    fn test_report_content() {
        let content = ReportContent::build(&sample(), Some("a.jpg".into()), None, vec![]);

        assert_eq!(content.title, REPORT_TITLE);
        assert_eq!(content.info_rows[1], ("Classification", "DEFECT".to_string()));
        assert_eq!(content.info_rows[2].1, "High");
        assert_eq!(content.value_rows[1].1, "5.25%");
        assert!(content.images[0].path.is_some());
        assert!(content.images[1].path.is_none());
        assert_eq!(content.explanation.len(), 2);
    }
}
