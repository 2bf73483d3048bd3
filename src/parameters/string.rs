use regex::Regex;
use serde_json::Value;

use super::GenericParameter;
use crate::dsl::schema::{StringSchema, StringValidator};
use crate::dsl::validation::{error, Diagnostic};
use crate::error::{ParameterError, ParameterResult};
use crate::graph::KnowledgeSource;

#[derive(Debug, Clone)]
pub struct StringParameter {
    name: String,
    value: Option<String>,
    default: Option<String>,
    /// Anchored form of the configured pattern.
    pattern: Option<Regex>,
}

impl StringParameter {
    pub fn new(name: impl Into<String>, schema: &StringSchema, value: Option<&Value>) -> ParameterResult<Self> {
        let name = name.into();
        let pattern = match &schema.validator {
            Some(StringValidator::Regex(config)) => Some(
                Regex::new(&format!("^(?:{})$", config.regex)).map_err(|e| {
                    ParameterError::InvalidValidator {
                        name: name.clone(),
                        reason: e.to_string(),
                    }
                })?,
            ),
            None => None,
        };
        let value = match value {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(ParameterError::InvalidValue {
                    name,
                    reason: format!("expected string, got {}", other),
                })
            }
        };
        Ok(Self {
            name,
            value,
            default: schema.default.clone(),
            pattern,
        })
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn effective_value(&self) -> Option<&str> {
        self.value.as_deref().or(self.default.as_deref())
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }
}

impl GenericParameter for StringParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn serialize(&self) -> Value {
        self.value.clone().map(Value::String).unwrap_or(Value::Null)
    }

    fn validate(&self) -> bool {
        match (&self.value, &self.pattern) {
            (Some(v), Some(re)) => re.is_match(v),
            _ => true,
        }
    }

    fn refresh(&mut self, _node: &dyn KnowledgeSource) {}

    fn diagnostics(&self) -> Vec<Diagnostic> {
        if self.validate() {
            return Vec::new();
        }
        vec![error(
            "E311",
            format!("Value '{}' does not match the required pattern", self.value.as_deref().unwrap_or_default()),
            Some(self.name.clone()),
            None,
        )]
    }
}
