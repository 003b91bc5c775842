//! Status Tool
//!
//! Runtime status of the BMI service and the usage guide served to clients.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::ServerConfig;

/// Usage instructions for AI assistants
pub const BMI_INSTRUCTIONS: &str = r#"
# BMI Calculator Instructions

## One-shot calculation

Call `calculate_bmi` with a height and a weight in any supported unit:
- Height units: `cm` (100 - 250) or `ft` (decimal feet, 1.0 - 8.0)
- Weight units: `kg` (30 - 200) or `lb` (66 - 440)

Values outside a unit's range are clamped to the nearest bound, never rejected.
Everything is normalized to centimeters and kilograms before the BMI is computed.

## Categories

| BMI | Category |
|---|---|
| below 18.5 | Underweight |
| 18.5 to below 25.0 | Normal |
| 25.0 to below 30.0 | Overweight |
| 30.0 and above | Obese |

A value exactly on a boundary belongs to the higher category.

## Guided wizard

The wizard walks through four steps: gender, height, weight, result.

1. `wizard_get_state` - see the current step and the suggested input
2. `wizard_select_gender` - `male` or `female`
3. `wizard_submit_height` - entry text such as `5.5` plus an optional unit
4. `wizard_submit_weight` - entry text such as `154` plus an optional unit
5. `wizard_result` - BMI, category, description and color

`wizard_back` returns to the previous step and keeps what was entered.
`wizard_restart` clears everything and starts again at the gender step.

Entry text keeps only digits and the first decimal point. If nothing numeric
remains, the step's current value is used.
"#;

/// Runtime status of the service
#[derive(Debug, Clone, Serialize)]
pub struct BmiStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    pub default_height_unit: &'static str,
    pub default_weight_unit: &'static str,

    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    config: ServerConfig,
}

impl StatusTracker {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            start_time: Instant::now(),
            config,
        }
    }

    pub fn get_status(&self) -> BmiStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        BmiStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            default_height_unit: self.config.height_unit.as_str(),
            default_weight_unit: self.config.weight_unit.as_str(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
