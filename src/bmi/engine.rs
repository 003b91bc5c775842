//! BMI calculation
//!
//! Inputs are always metric: centimeters and kilograms.

use serde::Serialize;

use super::category::BmiCategory;

/// Lowest BMI classified as Normal
pub const NORMAL_MIN: f64 = 18.5;
/// Lowest BMI classified as Overweight
pub const OVERWEIGHT_MIN: f64 = 25.0;
/// Lowest BMI classified as Obese
pub const OBESE_MIN: f64 = 30.0;

/// `weight_kg / (height_cm / 100)^2`
///
/// Height must be positive. A zero height yields an infinite or NaN result;
/// callers clamp height to its valid range before getting here.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Map a BMI value to its category. Boundary values belong to the higher band.
pub fn categorize(bmi: f64) -> BmiCategory {
    if bmi < NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi < OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if bmi < OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// A computed BMI with its classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiResult {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: f64,
    /// BMI rounded to one decimal for display
    pub bmi_display: String,
    pub category: BmiCategory,
    pub label: &'static str,
    pub description: &'static str,
    pub color: String,
}

impl BmiResult {
    pub fn evaluate(height_cm: f64, weight_kg: f64) -> Self {
        let bmi = compute_bmi(height_cm, weight_kg);
        let category = categorize(bmi);
        Self {
            height_cm,
            weight_kg,
            bmi,
            bmi_display: format!("{:.1}", bmi),
            category,
            label: category.label(),
            description: category.description(),
            color: category.color_hex(),
        }
    }
}
