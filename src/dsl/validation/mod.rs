//! Structured validation output for node parameters.
//!
//! Codes:
//! - `E001` configuration could not be parsed
//! - `E002` configuration could not be loaded into parameters
//! - `E300` parameter is invalid (generic)
//! - `E301` single selector holds more than one selection
//! - `E302` selection references a column missing from the input schema
//! - `E303` selection references a column index past the input schema
//! - `E310` numeric value outside its range
//! - `E311` string value does not match its pattern
//! - `W301` excluding selector with no selections selects every column

mod types;

use crate::dsl::parser::{parse_node_config, ConfigFormat};
use crate::graph::KnowledgeSource;
use crate::parameters::ParameterList;

pub use types::{Diagnostic, DiagnosticLevel, ValidationReport};

/// Parse, load and validate a node configuration in one step.
pub fn validate_node_config(
    content: &str,
    format: ConfigFormat,
    node: &dyn KnowledgeSource,
) -> ValidationReport {
    let config = match parse_node_config(content, format) {
        Ok(config) => config,
        Err(err) => return ValidationReport::from_diagnostics(vec![error("E001", err.to_string(), None, None)]),
    };
    match ParameterList::load(&config, node) {
        Ok(list) => list.validation_report(),
        Err(err) => ValidationReport::from_diagnostics(vec![error("E002", err.to_string(), None, None)]),
    }
}

pub(crate) fn error(
    code: &str,
    message: String,
    parameter: Option<String>,
    field_path: Option<String>,
) -> Diagnostic {
    Diagnostic {
        level: DiagnosticLevel::Error,
        code: code.to_string(),
        message,
        parameter,
        field_path,
    }
}

pub(crate) fn warn(
    code: &str,
    message: String,
    parameter: Option<String>,
    field_path: Option<String>,
) -> Diagnostic {
    Diagnostic {
        level: DiagnosticLevel::Warning,
        code: code.to_string(),
        message,
        parameter,
        field_path,
    }
}
