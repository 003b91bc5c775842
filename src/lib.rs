//! BMI Calculator Library
//!
//! Height and weight unit conversion, body mass index classification and the
//! step-by-step wizard that collects the inputs.

pub mod bmi;
pub mod build_info;
pub mod config;
pub mod mcp;
pub mod measurement;
pub mod tools;
pub mod wizard;
