//! Validation diagnostic types.

use serde::{Deserialize, Serialize};

/// Severity level of a validation diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Error,
    Warning,
}

/// A single validation finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub code: String,
    pub message: String,
    /// Name of the parameter the finding belongs to.
    pub parameter: Option<String>,
    /// Location inside the parameter value, e.g. `selections[1]`.
    pub field_path: Option<String>,
}

/// Aggregated result of parameter validation.
///
/// Warnings never make a report invalid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        let is_valid = !diagnostics
            .iter()
            .any(|d| d.level == DiagnosticLevel::Error);
        Self {
            is_valid,
            diagnostics,
        }
    }

    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.at_level(DiagnosticLevel::Error)
    }

    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.at_level(DiagnosticLevel::Warning)
    }

    /// Findings reported against parameter `name`.
    pub fn for_parameter<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.parameter.as_deref() == Some(name))
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.diagnostics.iter().any(|d| d.code == code)
    }

    fn at_level(&self, level: DiagnosticLevel) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.level == level).collect()
    }
}
