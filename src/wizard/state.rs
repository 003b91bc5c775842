//! Wizard state
//!
//! The four-step flow `Gender -> Height -> Weight -> Result` as an immutable
//! value. Every transition borrows the current state and returns a new one;
//! a rejected transition returns an error and the caller keeps its state.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bmi::BmiResult;
use crate::measurement::{Height, HeightUnit, Weight, WeightUnit};

/// Height used on the result step when none was committed
pub const FALLBACK_HEIGHT_CM: u32 = 170;
/// Weight used on the result step when none was committed
pub const FALLBACK_WEIGHT_KG: u32 = 70;

/// Wizard transition errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    #[error("Cannot {action} while on the {current} step")]
    WrongStep { action: &'static str, current: Step },

    #[error("A gender must be selected before continuing")]
    GenderNotSelected,

    #[error("Height of {cm} cm is outside the accepted range")]
    HeightOutOfRange { cm: f64 },

    #[error("Weight of {kg} kg is outside the accepted range")]
    WeightOutOfRange { kg: f64 },
}

/// Result type for wizard transitions
pub type WizardResult<T> = Result<T, WizardError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    /// Nothing selected yet
    #[default]
    None,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::None => "none",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            "none" | "" => Some(Gender::None),
            _ => None,
        }
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self, Gender::None)
    }
}

/// Wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    Gender,
    Height,
    Weight,
    Result,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Gender => "gender",
            Step::Height => "height",
            Step::Weight => "weight",
            Step::Result => "result",
        }
    }

    /// Previous step; Gender is its own predecessor
    pub fn previous(&self) -> Step {
        match self {
            Step::Gender | Step::Height => Step::Gender,
            Step::Weight => Step::Height,
            Step::Result => Step::Weight,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values collected by the wizard
///
/// Height and weight are committed as whole metric numbers; the units record
/// what the user entered them in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UserData {
    pub gender: Gender,
    pub height_cm: Option<u32>,
    pub height_unit: HeightUnit,
    pub weight_kg: Option<u32>,
    pub weight_unit: WeightUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WizardState {
    pub step: Step,
    pub data: UserData,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same state with different input units
    pub fn with_units(mut self, height_unit: HeightUnit, weight_unit: WeightUnit) -> Self {
        self.data.height_unit = height_unit;
        self.data.weight_unit = weight_unit;
        self
    }

    fn expect_step(&self, step: Step, action: &'static str) -> WizardResult<()> {
        if self.step == step {
            Ok(())
        } else {
            Err(WizardError::WrongStep {
                action,
                current: self.step,
            })
        }
    }

    pub fn select_gender(&self, gender: Gender) -> WizardResult<Self> {
        self.expect_step(Step::Gender, "select a gender")?;
        if !gender.is_selected() {
            return Err(WizardError::GenderNotSelected);
        }

        Ok(Self {
            step: Step::Height,
            data: UserData {
                gender,
                ..self.data
            },
        })
    }

    pub fn submit_height(&self, height: Height) -> WizardResult<Self> {
        self.expect_step(Step::Height, "submit a height")?;
        let height = height.clamped();
        if !height.is_valid() {
            return Err(WizardError::HeightOutOfRange { cm: height.to_cm() });
        }

        Ok(Self {
            step: Step::Weight,
            data: UserData {
                height_cm: Some(height.committed_cm()),
                height_unit: height.unit,
                ..self.data
            },
        })
    }

    pub fn submit_weight(&self, weight: Weight) -> WizardResult<Self> {
        self.expect_step(Step::Weight, "submit a weight")?;
        let weight = weight.clamped();
        if !weight.is_valid() {
            return Err(WizardError::WeightOutOfRange { kg: weight.to_kg() });
        }

        Ok(Self {
            step: Step::Result,
            data: UserData {
                weight_kg: Some(weight.committed_kg()),
                weight_unit: weight.unit,
                ..self.data
            },
        })
    }

    /// Previous step with every collected value kept
    pub fn back(&self) -> Self {
        Self {
            step: self.step.previous(),
            data: self.data,
        }
    }

    /// First step with every collected value cleared
    pub fn restart(&self) -> Self {
        Self::default()
    }

    /// Whether the current step can be left with the given pending input
    pub fn can_proceed(&self, gender: Gender, height: Height, weight: Weight) -> bool {
        match self.step {
            Step::Gender => gender.is_selected(),
            Step::Height => height.clamped().is_valid(),
            Step::Weight => weight.clamped().is_valid(),
            Step::Result => false,
        }
    }

    /// Height the height step starts from
    ///
    /// A committed height is shown again in its unit. Otherwise the input
    /// starts at 5.5 ft, expressed in the current unit.
    pub fn pending_height(&self) -> Height {
        match self.data.height_cm {
            Some(cm) => Height::cm(cm as f64).convert_to(self.data.height_unit),
            None => Height::default().convert_to(self.data.height_unit),
        }
    }

    /// Weight the weight step starts from (70 kg unless one was committed)
    pub fn pending_weight(&self) -> Weight {
        match self.data.weight_kg {
            Some(kg) => Weight::kg(kg as f64).convert_to(self.data.weight_unit),
            None => Weight::default().convert_to(self.data.weight_unit),
        }
    }

    /// BMI for the collected values, available on the result step
    pub fn result(&self) -> WizardResult<BmiResult> {
        self.expect_step(Step::Result, "show the result")?;
        let height_cm = self.data.height_cm.unwrap_or(FALLBACK_HEIGHT_CM);
        let weight_kg = self.data.weight_kg.unwrap_or(FALLBACK_WEIGHT_KG);
        Ok(BmiResult::evaluate(height_cm as f64, weight_kg as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::BmiCategory;

    fn at_result() -> WizardState {
        WizardState::new()
            .select_gender(Gender::Female)
            .unwrap()
            .submit_height(Height::feet(5.5))
            .unwrap()
            .submit_weight(Weight::lb(154.0))
            .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = WizardState::new();
        assert_eq!(state.step, Step::Gender);
        assert_eq!(state.data.gender, Gender::None);
        assert_eq!(state.data.height_cm, None);
        assert_eq!(state.data.height_unit, HeightUnit::Feet);
        assert_eq!(state.data.weight_unit, WeightUnit::Kilogram);
    }

    #[test]
    fn test_full_flow() {
        let state = at_result();
        assert_eq!(state.step, Step::Result);
        assert_eq!(state.data.gender, Gender::Female);
        assert_eq!(state.data.height_cm, Some(168));
        assert_eq!(state.data.weight_kg, Some(70));
        assert_eq!(state.data.weight_unit, WeightUnit::Pound);

        let result = state.result().unwrap();
        assert!((result.bmi - 24.80).abs() < 0.01);
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn test_transitions_do_not_mutate() {
        let start = WizardState::new();
        let next = start.select_gender(Gender::Male).unwrap();
        assert_eq!(start.step, Step::Gender);
        assert_eq!(start.data.gender, Gender::None);
        assert_eq!(next.step, Step::Height);
    }

    #[test]
    fn test_gender_required() {
        let err = WizardState::new().select_gender(Gender::None).unwrap_err();
        assert_eq!(err, WizardError::GenderNotSelected);
    }

    #[test]
    fn test_wrong_step() {
        let err = WizardState::new().submit_height(Height::cm(170.0)).unwrap_err();
        assert!(matches!(err, WizardError::WrongStep { current: Step::Gender, .. }));
        assert!(WizardState::new().result().is_err());
        assert_eq!(
            err.to_string(),
            "Cannot submit a height while on the gender step"
        );
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        let state = WizardState::new()
            .select_gender(Gender::Male)
            .unwrap()
            .submit_height(Height::cm(400.0))
            .unwrap();
        assert_eq!(state.data.height_cm, Some(250));

        let state = state.submit_weight(Weight::kg(5.0)).unwrap();
        assert_eq!(state.data.weight_kg, Some(30));
    }

    #[test]
    fn test_nan_input_is_rejected() {
        let state = WizardState::new().select_gender(Gender::Male).unwrap();
        let err = state.submit_height(Height::cm(f64::NAN)).unwrap_err();
        assert!(matches!(err, WizardError::HeightOutOfRange { .. }));
    }

    #[test]
    fn test_back_preserves_values() {
        let state = at_result();
        let weight_step = state.back();
        assert_eq!(weight_step.step, Step::Weight);
        assert_eq!(weight_step.data, state.data);
        assert_eq!(weight_step.pending_weight().unit, WeightUnit::Pound);
        assert!((weight_step.pending_weight().value - 154.32).abs() < 0.01);

        let gender_step = weight_step.back().back();
        assert_eq!(gender_step.step, Step::Gender);
        assert_eq!(gender_step.back().step, Step::Gender);
        assert_eq!(gender_step.data.gender, Gender::Female);
    }

    #[test]
    fn test_restart_clears() {
        let state = at_result().restart();
        assert_eq!(state, WizardState::default());
    }

    #[test]
    fn test_with_units() {
        let state = WizardState::new().with_units(HeightUnit::Centimeter, WeightUnit::Pound);
        assert!((state.pending_height().value - 167.64).abs() < 1e-9);
        assert_eq!(state.pending_height().unit, HeightUnit::Centimeter);
        assert!((state.pending_weight().value - 154.32).abs() < 0.01);
    }

    #[test]
    fn test_can_proceed() {
        let state = WizardState::new();
        assert!(!state.can_proceed(Gender::None, Height::default(), Weight::default()));
        assert!(state.can_proceed(Gender::Male, Height::default(), Weight::default()));
        assert!(!at_result().can_proceed(Gender::Male, Height::default(), Weight::default()));
    }

    #[test]
    fn test_result_falls_back_to_defaults() {
        let state = WizardState {
            step: Step::Result,
            data: UserData::default(),
        };
        let result = state.result().unwrap();
        assert_eq!(result.height_cm, 170.0);
        assert_eq!(result.weight_kg, 70.0);
    }

    #[test]
    fn test_gender_from_str() {
        assert_eq!(Gender::from_str("Female"), Some(Gender::Female));
        assert_eq!(Gender::from_str("m"), Some(Gender::Male));
        assert_eq!(Gender::from_str("other"), None);
    }
}
