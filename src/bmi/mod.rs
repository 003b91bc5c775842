//! BMI module
//!
//! Body mass index formula and classification.

pub mod category;
pub mod engine;

pub use category::BmiCategory;
pub use engine::{categorize, compute_bmi, BmiResult, NORMAL_MIN, OBESE_MIN, OVERWEIGHT_MIN};
