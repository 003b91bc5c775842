//! Calculator MCP Tools
//!
//! Unit conversion and one-shot BMI calculation.

use serde::Serialize;
use tracing::debug;

use crate::bmi::{categorize, BmiCategory, BmiResult};
use crate::measurement::{
    cm_to_feet, feet_to_cm, kg_to_lb, lb_to_kg, Height, HeightUnit, Weight, WeightUnit,
};

/// A height as presented to clients
#[derive(Debug, Clone, Serialize)]
pub struct HeightView {
    pub value: f64,
    pub unit: HeightUnit,
    pub unit_name: &'static str,
    /// Entry-field text, e.g. "5.5" or "170"
    pub text: String,
    /// Ruler label, e.g. `5' 6"` or "170"
    pub label: String,
    /// Normalized centimeters
    pub cm: f64,
}

impl From<Height> for HeightView {
    fn from(height: Height) -> Self {
        Self {
            value: height.value,
            unit: height.unit,
            unit_name: height.unit.display_name(),
            text: height.entry_text(),
            label: height.label(),
            cm: height.to_cm(),
        }
    }
}

/// A weight as presented to clients
#[derive(Debug, Clone, Serialize)]
pub struct WeightView {
    pub value: f64,
    pub unit: WeightUnit,
    pub unit_name: &'static str,
    pub text: String,
    /// Normalized kilograms
    pub kg: f64,
}

impl From<Weight> for WeightView {
    fn from(weight: Weight) -> Self {
        Self {
            value: weight.value,
            unit: weight.unit,
            unit_name: weight.unit.display_name(),
            text: weight.entry_text(),
            kg: weight.to_kg(),
        }
    }
}

/// Response for convert_height
#[derive(Debug, Serialize)]
pub struct ConvertHeightResponse {
    pub input: HeightView,
    pub output: HeightView,
    /// Whether the output was pulled back into the target unit's range
    pub clamped: bool,
}

/// Response for convert_weight
#[derive(Debug, Serialize)]
pub struct ConvertWeightResponse {
    pub input: WeightView,
    pub output: WeightView,
    pub clamped: bool,
}

/// Response for calculate_bmi
#[derive(Debug, Serialize)]
pub struct CalculateBmiResponse {
    pub height: HeightView,
    pub weight: WeightView,
    pub result: BmiResult,
}

/// Category details for categorize_bmi and list_bmi_categories
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub category: BmiCategory,
    pub label: &'static str,
    pub description: &'static str,
    pub color: String,
    /// Inclusive lower bound, absent for the lowest band
    pub min_bmi: Option<f64>,
    /// Exclusive upper bound, absent for the highest band
    pub max_bmi: Option<f64>,
}

impl From<BmiCategory> for CategoryInfo {
    fn from(category: BmiCategory) -> Self {
        let (min_bmi, max_bmi) = category.bounds();
        Self {
            category,
            label: category.label(),
            description: category.description(),
            color: category.color_hex(),
            min_bmi,
            max_bmi,
        }
    }
}

/// Response for categorize_bmi
#[derive(Debug, Serialize)]
pub struct CategorizeBmiResponse {
    pub bmi: f64,
    pub category: CategoryInfo,
}

pub fn parse_height_unit(s: &str) -> Result<HeightUnit, String> {
    HeightUnit::from_str(s).ok_or_else(|| format!("Unknown height unit '{}'. Use cm or ft.", s))
}

pub fn parse_weight_unit(s: &str) -> Result<WeightUnit, String> {
    WeightUnit::from_str(s).ok_or_else(|| format!("Unknown weight unit '{}'. Use kg or lb.", s))
}

/// Convert a height between units, clamped to the target unit's range
pub fn convert_height(value: f64, from: &str, to: &str) -> Result<ConvertHeightResponse, String> {
    let from = parse_height_unit(from)?;
    let to = parse_height_unit(to)?;

    let input = Height::new(value, from);
    let output = input.convert_to(to).clamped();

    let unclamped = match (from, to) {
        (HeightUnit::Centimeter, HeightUnit::Feet) => cm_to_feet(value),
        (HeightUnit::Feet, HeightUnit::Centimeter) => feet_to_cm(value),
        _ => value,
    };

    debug!("convert_height {} {} -> {} {}", value, from.as_str(), output.value, to.as_str());

    Ok(ConvertHeightResponse {
        input: input.into(),
        output: output.into(),
        clamped: output.value != unclamped,
    })
}

/// Convert a weight between units, clamped to the target unit's range
pub fn convert_weight(value: f64, from: &str, to: &str) -> Result<ConvertWeightResponse, String> {
    let from = parse_weight_unit(from)?;
    let to = parse_weight_unit(to)?;

    let input = Weight::new(value, from);
    let output = input.convert_to(to).clamped();

    let unclamped = match (from, to) {
        (WeightUnit::Kilogram, WeightUnit::Pound) => kg_to_lb(value),
        (WeightUnit::Pound, WeightUnit::Kilogram) => lb_to_kg(value),
        _ => value,
    };

    debug!("convert_weight {} {} -> {} {}", value, from.as_str(), output.value, to.as_str());

    Ok(ConvertWeightResponse {
        input: input.into(),
        output: output.into(),
        clamped: output.value != unclamped,
    })
}

/// Normalize both measurements to metric and compute the BMI
pub fn calculate_bmi(
    height_value: f64,
    height_unit: &str,
    weight_value: f64,
    weight_unit: &str,
) -> Result<CalculateBmiResponse, String> {
    let height = Height::new(height_value, parse_height_unit(height_unit)?).clamped();
    let weight = Weight::new(weight_value, parse_weight_unit(weight_unit)?).clamped();

    let result = BmiResult::evaluate(height.to_cm(), weight.to_kg());
    debug!("calculate_bmi {} cm, {} kg -> {}", result.height_cm, result.weight_kg, result.bmi_display);

    Ok(CalculateBmiResponse {
        height: height.into(),
        weight: weight.into(),
        result,
    })
}

pub fn categorize_bmi(bmi: f64) -> CategorizeBmiResponse {
    CategorizeBmiResponse {
        bmi,
        category: categorize(bmi).into(),
    }
}

pub fn list_categories() -> Vec<CategoryInfo> {
    BmiCategory::ALL.iter().copied().map(CategoryInfo::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_height() {
        let resp = convert_height(5.5, "ft", "cm").unwrap();
        assert!((resp.output.value - 167.64).abs() < 1e-9);
        assert_eq!(resp.output.text, "168");
        assert_eq!(resp.input.label, "5' 6\"");
        assert_eq!(resp.input.unit_name, "Feet");
        assert_eq!(resp.output.unit_name, "Centimeter");
        assert!(!resp.clamped);
    }

    #[test]
    fn test_convert_height_clamps_to_target() {
        let resp = convert_height(250.0, "cm", "feet").unwrap();
        assert_eq!(resp.output.value, 8.0);
        assert!(resp.clamped);
    }

    #[test]
    fn test_convert_same_unit_still_clamps() {
        let resp = convert_weight(500.0, "kg", "kg").unwrap();
        assert_eq!(resp.output.value, 200.0);
        assert!(resp.clamped);
    }

    #[test]
    fn test_convert_weight() {
        let resp = convert_weight(154.0, "lb", "kg").unwrap();
        assert!((resp.output.value - 69.853).abs() < 0.001);
        assert_eq!(resp.output.text, "70");
        assert_eq!(resp.input.unit_name, "Pound");
        assert_eq!(resp.output.unit_name, "Kilogram");
        assert!(!resp.clamped);
    }

    #[test]
    fn test_unknown_unit() {
        let err = convert_height(10.0, "cubit", "cm").unwrap_err();
        assert!(err.contains("cubit"));
        assert!(convert_weight(10.0, "kg", "stone").is_err());
    }

    #[test]
    fn test_calculate_bmi_imperial() {
        let resp = calculate_bmi(5.5, "ft", 154.0, "lb").unwrap();
        assert!((resp.result.bmi - 24.85).abs() < 0.01);
        assert_eq!(resp.result.category, BmiCategory::Normal);
        assert_eq!(resp.result.bmi_display, "24.9");
    }

    #[test]
    fn test_calculate_bmi_clamps_inputs() {
        let resp = calculate_bmi(50.0, "cm", 500.0, "kg").unwrap();
        assert_eq!(resp.height.value, 100.0);
        assert_eq!(resp.weight.value, 200.0);
        assert!((resp.result.bmi - 200.0).abs() < 1e-9);
        assert_eq!(resp.result.category, BmiCategory::Obese);
    }

    #[test]
    fn test_categorize_bmi() {
        let resp = categorize_bmi(27.78);
        assert_eq!(resp.category.category, BmiCategory::Overweight);
        assert_eq!(resp.category.min_bmi, Some(25.0));
        assert_eq!(resp.category.max_bmi, Some(30.0));
    }

    #[test]
    fn test_list_categories() {
        let categories = list_categories();
        assert_eq!(categories.len(), 4);
        assert_eq!(categories[0].label, "Underweight");
        assert_eq!(categories[3].color, "#EF5350");
    }
}
