//! Server configuration
//!
//! Read once from the environment at startup.

use tracing::warn;

use crate::measurement::{HeightUnit, WeightUnit};
use crate::wizard::WizardState;

pub const HEIGHT_UNIT_VAR: &str = "BMI_DEFAULT_HEIGHT_UNIT";
pub const WEIGHT_UNIT_VAR: &str = "BMI_DEFAULT_WEIGHT_UNIT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServerConfig {
    /// Unit a new wizard session enters height in
    pub height_unit: HeightUnit,
    /// Unit a new wizard session enters weight in
    pub weight_unit: WeightUnit,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unrecognized values keep the default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(HEIGHT_UNIT_VAR) {
            match HeightUnit::from_str(&raw) {
                Some(unit) => config.height_unit = unit,
                None => warn!(
                    "Ignoring {}={:?}, using {}",
                    HEIGHT_UNIT_VAR,
                    raw,
                    config.height_unit.as_str()
                ),
            }
        }

        if let Some(raw) = lookup(WEIGHT_UNIT_VAR) {
            match WeightUnit::from_str(&raw) {
                Some(unit) => config.weight_unit = unit,
                None => warn!(
                    "Ignoring {}={:?}, using {}",
                    WEIGHT_UNIT_VAR,
                    raw,
                    config.weight_unit.as_str()
                ),
            }
        }

        config
    }

    /// Fresh wizard state in the configured units
    pub fn initial_state(&self) -> WizardState {
        WizardState::new().with_units(self.height_unit, self.weight_unit)
    }
}
