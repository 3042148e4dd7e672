//! ニュートロソフィック値の算出
//!
//! 画素値の平均・標準偏差から T/I/F（百分率、小数2桁）を導出する。
//! 画像のデコード・リサイズは呼び出し側の責務で、ここは純粋な算術のみ。

use crate::types::{ImageRecord, Label};

/// 画素値の最大値（8bitグレースケール）
pub const MAX_INTENSITY: f64 = 255.0;

/// T/I/F の組
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeutrosophicScores {
    pub truth: f64,
    pub indeterminacy: f64,
    pub falsity: f64,
}

impl NeutrosophicScores {
    /// 画素列から算出。空の場合は None
    pub fn from_samples(samples: &[u8]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let n = samples.len() as f64;
        let mean = samples.iter().map(|&v| v as f64).sum::<f64>() / n;
        // 母標準偏差（分母 n）
        let variance = samples
            .iter()
            .map(|&v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        let mean_intensity = mean / MAX_INTENSITY;
        let texture_score = variance.sqrt() / MAX_INTENSITY;

        Some(Self {
            truth: round2(texture_score * 100.0),
            indeterminacy: round2((texture_score - mean_intensity).abs() * 100.0),
            falsity: round2(mean_intensity * 100.0),
        })
    }

    pub fn into_record(self, name: impl Into<String>, label: Label) -> ImageRecord {
        ImageRecord {
            name: name.into(),
            label,
            truth: self.truth,
            indeterminacy: self.indeterminacy,
            falsity: self.falsity,
        }
    }
}

/// 小数2桁に丸める
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_samples() {
        let samples = vec![128u8; 128 * 128];
        let scores = NeutrosophicScores::from_samples(&samples).unwrap();

        assert_eq!(scores.truth, 0.0);
        assert_eq!(scores.falsity, 50.2);
        assert_eq!(scores.indeterminacy, 50.2);
    }

    #[test]
    fn test_black_and_white_halves() {
        let mut samples = vec![0u8; 50];
        samples.extend(vec![255u8; 50]);
        let scores = NeutrosophicScores::from_samples(&samples).unwrap();

        // 平均 0.5、標準偏差 0.5 → I = 0
        assert_eq!(scores.truth, 50.0);
        assert_eq!(scores.falsity, 50.0);
        assert_eq!(scores.indeterminacy, 0.0);
    }

    #[test]
    fn test_all_black() {
        let scores = NeutrosophicScores::from_samples(&[0u8; 16]).unwrap();
        assert_eq!(scores.truth, 0.0);
        assert_eq!(scores.falsity, 0.0);
        assert_eq!(scores.indeterminacy, 0.0);
    }

    #[test]
    fn test_empty_samples() {
        assert!(NeutrosophicScores::from_samples(&[]).is_none());
    }

    #[test]
    fn test_indeterminacy_is_difference() {
        let samples: Vec<u8> = (0..=255u8).cycle().take(4096).map(|v| v / 3).collect();
        let s = NeutrosophicScores::from_samples(&samples).unwrap();
        assert!((s.indeterminacy - (s.truth - s.falsity).abs()).abs() <= 0.011);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(50.196078), 50.2);
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_into_record() {
        let record = NeutrosophicScores::from_samples(&[128u8; 4])
            .unwrap()
            .into_record("tile.png", Label::Normal);
        assert_eq!(record.name, "tile.png");
        assert_eq!(record.label, Label::Normal);
        assert_eq!(record.falsity, 50.2);
    }
}
