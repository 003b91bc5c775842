//! Wizard MCP Tools
//!
//! Each tool takes the session's current state and yields the state that
//! replaces it together with the response to send back.

use serde::Serialize;
use tracing::{debug, info};

use crate::bmi::BmiResult;
use crate::config::ServerConfig;
use crate::measurement::{Height, HeightUnit, Weight, WeightUnit};
use crate::tools::calculator::{parse_height_unit, parse_weight_unit, HeightView, WeightView};
use crate::wizard::{Gender, Step, WizardState};

/// Snapshot of a wizard session
#[derive(Debug, Serialize)]
pub struct WizardStateResponse {
    pub step: Step,
    pub gender: Gender,
    pub height_cm: Option<u32>,
    pub height_unit: HeightUnit,
    pub weight_kg: Option<u32>,
    pub weight_unit: WeightUnit,
    /// Value the height step starts from
    pub pending_height: HeightView,
    /// Value the weight step starts from
    pub pending_weight: WeightView,
    pub can_go_back: bool,
    /// Whether the current step can be left with the suggested input
    pub can_proceed: bool,
}

impl From<&WizardState> for WizardStateResponse {
    fn from(state: &WizardState) -> Self {
        Self {
            step: state.step,
            gender: state.data.gender,
            height_cm: state.data.height_cm,
            height_unit: state.data.height_unit,
            weight_kg: state.data.weight_kg,
            weight_unit: state.data.weight_unit,
            pending_height: state.pending_height().into(),
            pending_weight: state.pending_weight().into(),
            can_go_back: state.step != Step::Gender,
            can_proceed: state.can_proceed(
                state.data.gender,
                state.pending_height(),
                state.pending_weight(),
            ),
        }
    }
}

/// Response for every wizard transition
#[derive(Debug, Serialize)]
pub struct TransitionResponse {
    pub success: bool,
    pub message: String,
    pub state: WizardStateResponse,
}

/// Outcome of a wizard tool: the state to keep and what to report
#[derive(Debug)]
pub struct Transition {
    pub state: WizardState,
    pub response: TransitionResponse,
}

impl Transition {
    fn accepted(state: WizardState, message: impl Into<String>) -> Self {
        let response = TransitionResponse {
            success: true,
            message: message.into(),
            state: (&state).into(),
        };
        Self { state, response }
    }

    fn rejected(state: &WizardState, message: impl Into<String>) -> Self {
        let response = TransitionResponse {
            success: false,
            message: message.into(),
            state: state.into(),
        };
        Self {
            state: *state,
            response,
        }
    }
}

pub fn get_state(state: &WizardState) -> WizardStateResponse {
    state.into()
}

pub fn select_gender(state: &WizardState, gender: &str) -> Transition {
    let Some(gender) = Gender::from_str(gender) else {
        return Transition::rejected(state, format!("Unknown gender '{}'. Use male or female.", gender));
    };

    match state.select_gender(gender) {
        Ok(next) => {
            info!("Wizard: gender {} selected", gender.as_str());
            Transition::accepted(next, "Gender selected. Next: submit a height.")
        }
        Err(e) => Transition::rejected(state, e.to_string()),
    }
}

/// Submit the height step
///
/// `entry` is raw entry text. With no unit the session's height unit is used.
/// An entry with no parseable number submits the step's current value.
pub fn submit_height(state: &WizardState, entry: &str, unit: Option<&str>) -> Transition {
    let unit = match unit.map(parse_height_unit).transpose() {
        Ok(unit) => unit.unwrap_or(state.data.height_unit),
        Err(e) => return Transition::rejected(state, e),
    };

    let height = Height::from_entry(entry, unit).unwrap_or_else(|| {
        debug!("Height entry {:?} has no number, keeping current value", entry);
        state.pending_height().convert_to(unit)
    });

    match state.submit_height(height) {
        Ok(next) => {
            info!("Wizard: height committed as {:?} cm", next.data.height_cm);
            Transition::accepted(next, "Height recorded. Next: submit a weight.")
        }
        Err(e) => Transition::rejected(state, e.to_string()),
    }
}

/// Submit the weight step, same entry rules as [`submit_height`]
pub fn submit_weight(state: &WizardState, entry: &str, unit: Option<&str>) -> Transition {
    let unit = match unit.map(parse_weight_unit).transpose() {
        Ok(unit) => unit.unwrap_or(state.data.weight_unit),
        Err(e) => return Transition::rejected(state, e),
    };

    let weight = Weight::from_entry(entry, unit).unwrap_or_else(|| {
        debug!("Weight entry {:?} has no number, keeping current value", entry);
        state.pending_weight().convert_to(unit)
    });

    match state.submit_weight(weight) {
        Ok(next) => {
            info!("Wizard: weight committed as {:?} kg", next.data.weight_kg);
            Transition::accepted(next, "Weight recorded. Call wizard_result for the BMI.")
        }
        Err(e) => Transition::rejected(state, e.to_string()),
    }
}

pub fn back(state: &WizardState) -> Transition {
    let previous = state.back();
    Transition::accepted(previous, format!("Moved to the {} step.", previous.step))
}

/// Clear the session and start again in the configured units
pub fn restart(state: &WizardState, config: &ServerConfig) -> Transition {
    let fresh = state
        .restart()
        .with_units(config.height_unit, config.weight_unit);
    info!("Wizard: restarted");
    Transition::accepted(fresh, "Wizard restarted. Select a gender.")
}

pub fn result(state: &WizardState) -> Result<BmiResult, String> {
    state.result().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::BmiCategory;

    fn config() -> ServerConfig {
        ServerConfig::default()
    }

    #[test]
    fn test_full_session() {
        let state = config().initial_state();

        let t = select_gender(&state, "male");
        assert!(t.response.success);
        assert_eq!(t.state.step, Step::Height);

        let t = submit_height(&t.state, "5.5", None);
        assert!(t.response.success);
        assert_eq!(t.state.data.height_cm, Some(168));

        let t = submit_weight(&t.state, "154", Some("lb"));
        assert!(t.response.success);
        assert_eq!(t.state.step, Step::Result);

        let bmi = result(&t.state).unwrap();
        assert_eq!(bmi.category, BmiCategory::Normal);
    }

    #[test]
    fn test_rejected_transition_keeps_state() {
        let state = config().initial_state();
        let t = select_gender(&state, "none");
        assert!(!t.response.success);
        assert_eq!(t.state, state);

        let t = select_gender(&state, "robot");
        assert!(!t.response.success);
        assert!(t.response.message.contains("robot"));

        let t = submit_height(&state, "170", Some("cm"));
        assert!(!t.response.success);
        assert_eq!(t.state.step, Step::Gender);
    }

    #[test]
    fn test_unparseable_entry_uses_current_value() {
        let state = select_gender(&config().initial_state(), "female").state;
        let t = submit_height(&state, "abc", None);
        assert!(t.response.success);
        // 5.5 ft default
        assert_eq!(t.state.data.height_cm, Some(168));

        let t = submit_weight(&t.state, "", None);
        assert_eq!(t.state.data.weight_kg, Some(70));
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let state = select_gender(&config().initial_state(), "female").state;
        let t = submit_height(&state, "170", Some("hands"));
        assert!(!t.response.success);
        assert_eq!(t.state, state);
    }

    #[test]
    fn test_back_and_restart() {
        let state = select_gender(&config().initial_state(), "female").state;
        let state = submit_height(&state, "180", Some("cm")).state;

        let t = back(&state);
        assert_eq!(t.state.step, Step::Height);
        assert_eq!(t.state.data.height_cm, Some(180));
        assert_eq!(t.response.state.pending_height.text, "180");

        let t = restart(&t.state, &config());
        assert_eq!(t.state, config().initial_state());
        assert!(!t.response.state.can_go_back);
    }

    #[test]
    fn test_state_reports_can_proceed() {
        let state = config().initial_state();
        let json = serde_json::to_value(get_state(&state)).unwrap();
        assert_eq!(json["can_proceed"], serde_json::json!(false));

        let t = select_gender(&state, "male");
        assert!(t.response.state.can_proceed);
        assert_eq!(t.response.state.step, Step::Height);

        let t = submit_weight(&submit_height(&t.state, "170", Some("cm")).state, "70", None);
        assert_eq!(t.state.step, Step::Result);
        assert!(!t.response.state.can_proceed);
    }

    #[test]
    fn test_result_before_last_step() {
        let err = result(&config().initial_state()).unwrap_err();
        assert!(err.contains("result"));
    }
}
