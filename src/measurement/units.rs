//! Unit types and conversion constants
//!
//! Provides types for representing body measurements and the valid range of
//! each unit.

use serde::{Deserialize, Serialize};

// ============================================================================
// Conversion Constants
// ============================================================================

/// Centimeters per foot
pub const CM_PER_FOOT: f64 = 30.48;
/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.20462;
/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

// ============================================================================
// Valid Ranges
// ============================================================================

/// Closed interval of accepted values for a unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitRange {
    pub min: f64,
    pub max: f64,
}

impl UnitRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the range (inclusive). NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const CM_RANGE: UnitRange = UnitRange::new(100.0, 250.0);
pub const FEET_RANGE: UnitRange = UnitRange::new(1.0, 8.0);
pub const KG_RANGE: UnitRange = UnitRange::new(30.0, 200.0);
pub const LB_RANGE: UnitRange = UnitRange::new(66.0, 440.0);

// ============================================================================
// Units
// ============================================================================

/// Unit a height is entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    Centimeter,
    /// Decimal feet, displayed as feet and inches
    #[default]
    Feet,
}

impl HeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeightUnit::Centimeter => "centimeter",
            HeightUnit::Feet => "feet",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Some(HeightUnit::Centimeter)
            }
            "ft" | "foot" | "feet" | "feet_inches" | "feetinches" => Some(HeightUnit::Feet),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HeightUnit::Centimeter => "Centimeter",
            HeightUnit::Feet => "Feet",
        }
    }

    pub fn range(&self) -> UnitRange {
        match self {
            HeightUnit::Centimeter => CM_RANGE,
            HeightUnit::Feet => FEET_RANGE,
        }
    }
}

/// Unit a weight is entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kilogram,
    Pound,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "kilogram",
            WeightUnit::Pound => "pound",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Some(WeightUnit::Kilogram),
            "lb" | "lbs" | "pound" | "pounds" => Some(WeightUnit::Pound),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "Kilogram",
            WeightUnit::Pound => "Pound",
        }
    }

    pub fn range(&self) -> UnitRange {
        match self {
            WeightUnit::Kilogram => KG_RANGE,
            WeightUnit::Pound => LB_RANGE,
        }
    }
}

// ============================================================================
// Measurements
// ============================================================================

/// A height magnitude tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Height {
    pub value: f64,
    pub unit: HeightUnit,
}

/// A weight magnitude tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub value: f64,
    pub unit: WeightUnit,
}

impl Height {
    pub const fn new(value: f64, unit: HeightUnit) -> Self {
        Self { value, unit }
    }

    pub const fn cm(value: f64) -> Self {
        Self::new(value, HeightUnit::Centimeter)
    }

    pub const fn feet(value: f64) -> Self {
        Self::new(value, HeightUnit::Feet)
    }
}

impl Default for Height {
    /// Initial value of the height input (5.5 ft)
    fn default() -> Self {
        Self::feet(5.5)
    }
}

impl Weight {
    pub const fn new(value: f64, unit: WeightUnit) -> Self {
        Self { value, unit }
    }

    pub const fn kg(value: f64) -> Self {
        Self::new(value, WeightUnit::Kilogram)
    }

    pub const fn lb(value: f64) -> Self {
        Self::new(value, WeightUnit::Pound)
    }
}

impl Default for Weight {
    /// Initial value of the weight input (70 kg)
    fn default() -> Self {
        Self::kg(70.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_are_ordered() {
        for range in [CM_RANGE, FEET_RANGE, KG_RANGE, LB_RANGE] {
            assert!(range.min < range.max);
        }
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        assert!(CM_RANGE.contains(100.0));
        assert!(CM_RANGE.contains(250.0));
        assert!(!CM_RANGE.contains(99.99));
        assert!(!CM_RANGE.contains(f64::NAN));
    }

    #[test]
    fn test_height_unit_from_str() {
        assert_eq!(HeightUnit::from_str("cm"), Some(HeightUnit::Centimeter));
        assert_eq!(HeightUnit::from_str("Centimeter"), Some(HeightUnit::Centimeter));
        assert_eq!(HeightUnit::from_str("ft"), Some(HeightUnit::Feet));
        assert_eq!(HeightUnit::from_str(" FEET "), Some(HeightUnit::Feet));
        assert_eq!(HeightUnit::from_str("inch"), None);
    }

    #[test]
    fn test_weight_unit_from_str() {
        assert_eq!(WeightUnit::from_str("kg"), Some(WeightUnit::Kilogram));
        assert_eq!(WeightUnit::from_str("lbs"), Some(WeightUnit::Pound));
        assert_eq!(WeightUnit::from_str("Pound"), Some(WeightUnit::Pound));
        assert_eq!(WeightUnit::from_str("stone"), None);
    }

    #[test]
    fn test_unit_ranges() {
        assert_eq!(HeightUnit::Centimeter.range(), CM_RANGE);
        assert_eq!(HeightUnit::Feet.range(), FEET_RANGE);
        assert_eq!(WeightUnit::Kilogram.range(), KG_RANGE);
        assert_eq!(WeightUnit::Pound.range(), LB_RANGE);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(HeightUnit::default(), HeightUnit::Feet);
        assert_eq!(WeightUnit::default(), WeightUnit::Kilogram);
        assert_eq!(Height::default(), Height::feet(5.5));
        assert_eq!(Weight::default(), Weight::kg(70.0));
    }

    #[test]
    fn test_unit_serde_tags() {
        let json = serde_json::to_string(&HeightUnit::Centimeter).unwrap();
        assert_eq!(json, "\"centimeter\"");
        let unit: WeightUnit = serde_json::from_str("\"pound\"").unwrap();
        assert_eq!(unit, WeightUnit::Pound);
    }
}
