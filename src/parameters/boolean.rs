use serde_json::Value;

use super::GenericParameter;
use crate::dsl::schema::BooleanSchema;
use crate::error::{ParameterError, ParameterResult};
use crate::graph::KnowledgeSource;

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanParameter {
    name: String,
    value: Option<bool>,
    default: Option<bool>,
}

impl BooleanParameter {
    pub fn new(name: impl Into<String>, schema: &BooleanSchema, value: Option<&Value>) -> ParameterResult<Self> {
        let name = name.into();
        let value = match value {
            None | Some(Value::Null) => None,
            Some(Value::Bool(b)) => Some(*b),
            Some(other) => {
                return Err(ParameterError::InvalidValue {
                    name,
                    reason: format!("expected boolean, got {}", other),
                })
            }
        };
        Ok(Self {
            name,
            value,
            default: schema.default,
        })
    }

    pub fn value(&self) -> Option<bool> {
        self.value
    }

    /// Explicit value, falling back to the schema default.
    pub fn effective_value(&self) -> Option<bool> {
        self.value.or(self.default)
    }

    pub fn set_value(&mut self, value: Option<bool>) {
        self.value = value;
    }
}

impl GenericParameter for BooleanParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn serialize(&self) -> Value {
        self.value.map(Value::Bool).unwrap_or(Value::Null)
    }

    fn validate(&self) -> bool {
        true
    }

    fn refresh(&mut self, _node: &dyn KnowledgeSource) {}
}
