//! BMI MCP Server Implementation
//!
//! Implements the MCP server with all calculator and wizard tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::ServerConfig;
use crate::tools::calculator;
use crate::tools::status::StatusTracker;
use crate::tools::wizard;
use crate::wizard::WizardState;

/// BMI MCP Service
///
/// Owns the single authoritative wizard state for the session. Wizard tools
/// replace it wholesale with the state their transition returns.
#[derive(Clone)]
pub struct BmiService {
    config: ServerConfig,
    status_tracker: Arc<Mutex<StatusTracker>>,
    wizard_state: Arc<Mutex<WizardState>>,
    tool_router: ToolRouter<BmiService>,
}

impl BmiService {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config))),
            wizard_state: Arc::new(Mutex::new(config.initial_state())),
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value).map_err(|e| McpError::internal_error(e.to_string(), None))
}

fn error_json(message: &str) -> String {
    serde_json::json!({"success": false, "error": message}).to_string()
}

// ============================================================================
// Calculator Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertHeightParams {
    /// Height magnitude in the `from` unit
    pub value: f64,
    /// Source unit: cm or ft
    pub from: String,
    /// Target unit: cm or ft
    pub to: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertWeightParams {
    /// Weight magnitude in the `from` unit
    pub value: f64,
    /// Source unit: kg or lb
    pub from: String,
    /// Target unit: kg or lb
    pub to: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateBmiParams {
    /// Height magnitude
    pub height: f64,
    /// Height unit: cm or ft (default cm)
    #[serde(default = "default_height_unit")]
    pub height_unit: String,
    /// Weight magnitude
    pub weight: f64,
    /// Weight unit: kg or lb (default kg)
    #[serde(default = "default_weight_unit")]
    pub weight_unit: String,
}

fn default_height_unit() -> String { "cm".to_string() }
fn default_weight_unit() -> String { "kg".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CategorizeBmiParams {
    /// BMI value to classify
    pub bmi: f64,
}

// ============================================================================
// Wizard Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SelectGenderParams {
    /// male or female
    pub gender: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SubmitHeightParams {
    /// Entry text, e.g. "5.5" or "170". Non-numeric characters are dropped.
    pub entry: String,
    /// Unit of the entry: cm or ft (default: the session's current height unit)
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SubmitWeightParams {
    /// Entry text, e.g. "70" or "154". Non-numeric characters are dropped.
    pub entry: String,
    /// Unit of the entry: kg or lb (default: the session's current weight unit)
    pub unit: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl BmiService {
    // --- Status ---

    #[tool(description = "Get the current status of the BMI service including build info and process information")]
    async fn bmi_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = to_json(&status)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for calculating BMI and using the step-by-step wizard. Call this when unsure how to use the BMI tools.")]
    fn bmi_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::BMI_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(BMI_INSTRUCTIONS)]))
    }

    // --- Calculator ---

    #[tool(description = "Convert a height between centimeters (cm) and decimal feet (ft). The result is clamped to the target unit's range (100-250 cm, 1.0-8.0 ft).")]
    fn convert_height(&self, Parameters(p): Parameters<ConvertHeightParams>) -> Result<CallToolResult, McpError> {
        let json = match calculator::convert_height(p.value, &p.from, &p.to) {
            Ok(resp) => to_json(&resp)?,
            Err(e) => error_json(&e),
        };
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Convert a weight between kilograms (kg) and pounds (lb). The result is clamped to the target unit's range (30-200 kg, 66-440 lb).")]
    fn convert_weight(&self, Parameters(p): Parameters<ConvertWeightParams>) -> Result<CallToolResult, McpError> {
        let json = match calculator::convert_weight(p.value, &p.from, &p.to) {
            Ok(resp) => to_json(&resp)?,
            Err(e) => error_json(&e),
        };
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Calculate BMI from a height and weight in any supported units. Inputs are clamped to their valid ranges and normalized to cm and kg.")]
    fn calculate_bmi(&self, Parameters(p): Parameters<CalculateBmiParams>) -> Result<CallToolResult, McpError> {
        let json = match calculator::calculate_bmi(p.height, &p.height_unit, p.weight, &p.weight_unit) {
            Ok(resp) => to_json(&resp)?,
            Err(e) => error_json(&e),
        };
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Classify a BMI value as underweight, normal, overweight or obese")]
    fn categorize_bmi(&self, Parameters(p): Parameters<CategorizeBmiParams>) -> Result<CallToolResult, McpError> {
        let json = to_json(&calculator::categorize_bmi(p.bmi))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List the BMI categories with their ranges, labels, descriptions and colors")]
    fn list_bmi_categories(&self) -> Result<CallToolResult, McpError> {
        let json = to_json(&calculator::list_categories())?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Wizard ---

    #[tool(description = "Get the wizard's current step, collected values and suggested input for the next step")]
    async fn wizard_get_state(&self) -> Result<CallToolResult, McpError> {
        let state = self.wizard_state.lock().await;
        let json = to_json(&wizard::get_state(&state))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Wizard step 1: select a gender (male or female)")]
    async fn wizard_select_gender(&self, Parameters(p): Parameters<SelectGenderParams>) -> Result<CallToolResult, McpError> {
        let mut state = self.wizard_state.lock().await;
        let transition = wizard::select_gender(&state, &p.gender);
        *state = transition.state;
        let json = to_json(&transition.response)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Wizard step 2: submit a height entry in cm or ft. Out-of-range values are clamped.")]
    async fn wizard_submit_height(&self, Parameters(p): Parameters<SubmitHeightParams>) -> Result<CallToolResult, McpError> {
        let mut state = self.wizard_state.lock().await;
        let transition = wizard::submit_height(&state, &p.entry, p.unit.as_deref());
        *state = transition.state;
        let json = to_json(&transition.response)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Wizard step 3: submit a weight entry in kg or lb. Out-of-range values are clamped.")]
    async fn wizard_submit_weight(&self, Parameters(p): Parameters<SubmitWeightParams>) -> Result<CallToolResult, McpError> {
        let mut state = self.wizard_state.lock().await;
        let transition = wizard::submit_weight(&state, &p.entry, p.unit.as_deref());
        *state = transition.state;
        let json = to_json(&transition.response)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Go back one wizard step. Values already entered are kept.")]
    async fn wizard_back(&self) -> Result<CallToolResult, McpError> {
        let mut state = self.wizard_state.lock().await;
        let transition = wizard::back(&state);
        *state = transition.state;
        let json = to_json(&transition.response)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Restart the wizard at the gender step with all values cleared")]
    async fn wizard_restart(&self) -> Result<CallToolResult, McpError> {
        let mut state = self.wizard_state.lock().await;
        let transition = wizard::restart(&state, &self.config);
        *state = transition.state;
        let json = to_json(&transition.response)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Wizard step 4: get the BMI, category, description and color for the collected values")]
    async fn wizard_result(&self) -> Result<CallToolResult, McpError> {
        let state = self.wizard_state.lock().await;
        let json = match wizard::result(&state) {
            Ok(result) => to_json(&result)?,
            Err(e) => error_json(&e),
        };
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for BmiService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "bmi".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("BMI Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "BMI Calculator - unit conversion and body mass index. \
                 Call bmi_instructions for a usage guide. \
                 Calculator: convert_height, convert_weight, calculate_bmi, categorize_bmi, list_bmi_categories. \
                 Wizard: wizard_get_state, wizard_select_gender, wizard_submit_height, wizard_submit_weight, \
                 wizard_result, wizard_back, wizard_restart. \
                 Status: bmi_status."
                    .into(),
            ),
        }
    }
}
