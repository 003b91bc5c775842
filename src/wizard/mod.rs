//! Wizard module
//!
//! Step-by-step collection of gender, height and weight ending in a BMI result.

mod state;

pub use state::{
    Gender, Step, UserData, WizardError, WizardResult, WizardState, FALLBACK_HEIGHT_CM,
    FALLBACK_WEIGHT_KG,
};
