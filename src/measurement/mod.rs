//! Measurement module
//!
//! Height and weight units, conversions and clamping.

pub mod converter;
pub mod units;

pub use converter::{
    clamp, clamp_to, cm_to_feet, feet_to_cm, filter_numeric_entry, format_feet_inches,
    format_whole, kg_to_lb, lb_to_kg, parse_entry,
};
pub use units::{
    Height, HeightUnit, UnitRange, Weight, WeightUnit, CM_PER_FOOT, CM_RANGE, FEET_RANGE,
    KG_RANGE, LB_PER_KG, LB_RANGE,
};
