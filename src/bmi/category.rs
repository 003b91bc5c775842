//! BMI category
//!
//! The four classification bands and their fixed display data.

use serde::{Deserialize, Serialize};

/// BMI classification band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// All categories in ascending BMI order
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "underweight" => Some(BmiCategory::Underweight),
            "normal" | "healthy" => Some(BmiCategory::Normal),
            "overweight" => Some(BmiCategory::Overweight),
            "obese" | "obesity" => Some(BmiCategory::Obese),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "You are underweight. Consider consulting a healthcare provider about a balanced diet."
            }
            BmiCategory::Normal => {
                "You have a healthy weight. Keep maintaining your balanced lifestyle!"
            }
            BmiCategory::Overweight => {
                "You are slightly overweight. A balanced diet and regular exercise can help."
            }
            BmiCategory::Obese => {
                "You are in the obese range. Please consider consulting a healthcare provider."
            }
        }
    }

    /// Display color as 0xAARRGGBB
    pub fn color(&self) -> u32 {
        match self {
            BmiCategory::Underweight => 0xFF42A5F5,
            BmiCategory::Normal => 0xFF66BB6A,
            BmiCategory::Overweight => 0xFFFFA726,
            BmiCategory::Obese => 0xFFEF5350,
        }
    }

    /// Display color as `#RRGGBB`
    pub fn color_hex(&self) -> String {
        format!("#{:06X}", self.color() & 0x00FF_FFFF)
    }

    /// BMI interval `[lower, upper)` covered by this category
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        match self {
            BmiCategory::Underweight => (None, Some(super::engine::NORMAL_MIN)),
            BmiCategory::Normal => (
                Some(super::engine::NORMAL_MIN),
                Some(super::engine::OVERWEIGHT_MIN),
            ),
            BmiCategory::Overweight => (
                Some(super::engine::OVERWEIGHT_MIN),
                Some(super::engine::OBESE_MIN),
            ),
            BmiCategory::Obese => (Some(super::engine::OBESE_MIN), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_and_descriptions_are_distinct() {
        for (i, a) in BmiCategory::ALL.iter().enumerate() {
            for b in &BmiCategory::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
                assert_ne!(a.description(), b.description());
                assert_ne!(a.color(), b.color());
            }
        }
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(BmiCategory::Underweight.color_hex(), "#42A5F5");
        assert_eq!(BmiCategory::Normal.color_hex(), "#66BB6A");
        assert_eq!(BmiCategory::Overweight.color_hex(), "#FFA726");
        assert_eq!(BmiCategory::Obese.color_hex(), "#EF5350");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(BmiCategory::from_str("Normal"), Some(BmiCategory::Normal));
        assert_eq!(BmiCategory::from_str("obesity"), Some(BmiCategory::Obese));
        assert_eq!(BmiCategory::from_str("thin"), None);
        for category in BmiCategory::ALL {
            assert_eq!(BmiCategory::from_str(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_bounds_are_contiguous() {
        for pair in BmiCategory::ALL.windows(2) {
            assert_eq!(pair[0].bounds().1, pair[1].bounds().0);
        }
        assert_eq!(BmiCategory::Underweight.bounds().0, None);
        assert_eq!(BmiCategory::Obese.bounds().1, None);
    }
}
