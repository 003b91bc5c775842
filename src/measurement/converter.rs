//! Unit conversion functions
//!
//! Linear conversions between metric and imperial units, clamping to the
//! valid range of the target unit, and the text handling that sits between a
//! raw numeric entry and a measurement.
//!
//! Out-of-range values are never rejected. Every conversion and every parsed
//! entry is clamped to the bounds of the unit it ends up in.

use super::units::{
    Height, HeightUnit, UnitRange, Weight, WeightUnit, CM_PER_FOOT, CM_RANGE, FEET_RANGE,
    INCHES_PER_FOOT, KG_RANGE, LB_PER_KG, LB_RANGE,
};

// ============================================================================
// Linear Conversions
// ============================================================================

pub fn cm_to_feet(cm: f64) -> f64 {
    cm / CM_PER_FOOT
}

pub fn feet_to_cm(feet: f64) -> f64 {
    feet * CM_PER_FOOT
}

pub fn kg_to_lb(kg: f64) -> f64 {
    kg * LB_PER_KG
}

pub fn lb_to_kg(lb: f64) -> f64 {
    lb / LB_PER_KG
}

/// Restrict `value` to `[min, max]` inclusive
///
/// Callers must pass `min < max`. Unlike `f64::clamp` this never panics; a NaN
/// value passes through unchanged.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamp against a [`UnitRange`]
pub fn clamp_to(value: f64, range: UnitRange) -> f64 {
    clamp(value, range.min, range.max)
}

// ============================================================================
// Measurement Normalization
// ============================================================================

impl Height {
    /// Normalize to centimeters, clamped to the centimeter range
    pub fn to_cm(&self) -> f64 {
        let cm = match self.unit {
            HeightUnit::Centimeter => self.value,
            HeightUnit::Feet => feet_to_cm(self.value),
        };
        clamp_to(cm, CM_RANGE)
    }

    /// Clamp the magnitude to the range of its own unit
    pub fn clamped(&self) -> Self {
        Self::new(clamp_to(self.value, self.unit.range()), self.unit)
    }

    /// Re-express this height in `unit`, clamped to the bounds of `unit`
    ///
    /// The conversion goes through centimeters without clamping the
    /// intermediate value, so only the target bounds apply.
    pub fn convert_to(&self, unit: HeightUnit) -> Self {
        if self.unit == unit {
            return *self;
        }

        let cm = match self.unit {
            HeightUnit::Centimeter => self.value,
            HeightUnit::Feet => feet_to_cm(self.value),
        };

        let value = match unit {
            HeightUnit::Centimeter => clamp_to(cm, CM_RANGE),
            HeightUnit::Feet => clamp_to(cm_to_feet(cm), FEET_RANGE),
        };

        Self::new(value, unit)
    }

    /// Parse a raw entry in `unit`, clamped to that unit's range
    ///
    /// Returns None when the entry has no parseable number, in which case the
    /// caller keeps its previous value.
    pub fn from_entry(text: &str, unit: HeightUnit) -> Option<Self> {
        parse_entry(text).map(|value| Self::new(value, unit).clamped())
    }

    /// Whether the normalized height is acceptable for the wizard
    pub fn is_valid(&self) -> bool {
        CM_RANGE.contains(self.to_cm())
    }

    /// Whole-centimeter value stored when the height step is left
    pub fn committed_cm(&self) -> u32 {
        self.to_cm().round() as u32
    }

    /// Text shown in the entry field
    pub fn entry_text(&self) -> String {
        match self.unit {
            HeightUnit::Centimeter => format_whole(self.value),
            HeightUnit::Feet => format!("{:.1}", self.value),
        }
    }

    /// Label shown on a ruler tick
    pub fn label(&self) -> String {
        match self.unit {
            HeightUnit::Centimeter => format_whole(self.value),
            HeightUnit::Feet => format_feet_inches(self.value),
        }
    }
}

impl Weight {
    /// Normalize to kilograms, clamped to the kilogram range
    pub fn to_kg(&self) -> f64 {
        let kg = match self.unit {
            WeightUnit::Kilogram => self.value,
            WeightUnit::Pound => lb_to_kg(self.value),
        };
        clamp_to(kg, KG_RANGE)
    }

    /// Clamp the magnitude to the range of its own unit
    pub fn clamped(&self) -> Self {
        Self::new(clamp_to(self.value, self.unit.range()), self.unit)
    }

    /// Re-express this weight in `unit`, clamped to the bounds of `unit`
    pub fn convert_to(&self, unit: WeightUnit) -> Self {
        if self.unit == unit {
            return *self;
        }

        let kg = match self.unit {
            WeightUnit::Kilogram => self.value,
            WeightUnit::Pound => lb_to_kg(self.value),
        };

        let value = match unit {
            WeightUnit::Kilogram => clamp_to(kg, KG_RANGE),
            WeightUnit::Pound => clamp_to(kg_to_lb(kg), LB_RANGE),
        };

        Self::new(value, unit)
    }

    /// Parse a raw entry in `unit`, clamped to that unit's range
    pub fn from_entry(text: &str, unit: WeightUnit) -> Option<Self> {
        parse_entry(text).map(|value| Self::new(value, unit).clamped())
    }

    /// Whether the normalized weight is acceptable for the wizard
    pub fn is_valid(&self) -> bool {
        KG_RANGE.contains(self.to_kg())
    }

    /// Whole-kilogram value stored when the weight step is left
    pub fn committed_kg(&self) -> u32 {
        self.to_kg().round() as u32
    }

    /// Text shown in the entry field (and on ruler ticks)
    pub fn entry_text(&self) -> String {
        format_whole(self.value)
    }
}

// ============================================================================
// Entry Text
// ============================================================================

/// Keep ASCII digits and the first decimal point, drop everything else
///
/// Examples:
/// - "5.5" -> "5.5"
/// - "1.2.3" -> "1.23"
/// - "70 kg" -> "70"
pub fn filter_numeric_entry(text: &str) -> String {
    let mut seen_dot = false;
    text.chars()
        .filter(|&c| {
            if c.is_ascii_digit() {
                true
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                true
            } else {
                false
            }
        })
        .collect()
}

/// Filter then parse a numeric entry
pub fn parse_entry(text: &str) -> Option<f64> {
    filter_numeric_entry(text).parse::<f64>().ok()
}

// ============================================================================
// Display Formatting
// ============================================================================

/// Format as a whole number, rounding half away from zero
pub fn format_whole(value: f64) -> String {
    format!("{}", value.round() as i64)
}

/// Format decimal feet as feet and inches, e.g. 5.5 -> `5' 6"`
pub fn format_feet_inches(feet: f64) -> String {
    let total_inches = (feet * INCHES_PER_FOOT).round() as i64;
    let whole_feet = total_inches / INCHES_PER_FOOT as i64;
    let inches = total_inches % INCHES_PER_FOOT as i64;
    format!("{}' {}\"", whole_feet, inches)
}
