use serde_json::{Number, Value};

use super::GenericParameter;
use crate::dsl::schema::{NumericSchema, NumericValidator, RangeConfig};
use crate::dsl::validation::{error, Diagnostic};
use crate::error::{ParameterError, ParameterResult};
use crate::graph::KnowledgeSource;

#[derive(Debug, Clone, PartialEq)]
pub struct NumericParameter {
    name: String,
    /// Kept as the JSON number it was loaded as, so integers stay integers.
    value: Option<Number>,
    default: Option<f64>,
    range: Option<RangeConfig>,
}

impl NumericParameter {
    pub fn new(name: impl Into<String>, schema: &NumericSchema, value: Option<&Value>) -> ParameterResult<Self> {
        let name = name.into();
        let value = match value {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => Some(n.clone()),
            Some(other) => {
                return Err(ParameterError::InvalidValue {
                    name,
                    reason: format!("expected number, got {}", other),
                })
            }
        };
        let range = schema.validator.as_ref().map(|v| match v {
            NumericValidator::Range(range) => range.clone(),
        });
        Ok(Self {
            name,
            value,
            default: schema.default,
            range,
        })
    }

    pub fn value(&self) -> Option<f64> {
        self.value.as_ref().and_then(Number::as_f64)
    }

    pub fn effective_value(&self) -> Option<f64> {
        self.value().or(self.default)
    }

    /// Non-finite values cannot be represented on the wire and unset the parameter.
    pub fn set_value(&mut self, value: Option<f64>) {
        self.value = value.and_then(Number::from_f64);
    }
}

impl GenericParameter for NumericParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn serialize(&self) -> Value {
        self.value.clone().map(Value::Number).unwrap_or(Value::Null)
    }

    fn validate(&self) -> bool {
        match (self.value(), &self.range) {
            (Some(v), Some(range)) => range.contains(v),
            _ => true,
        }
    }

    fn refresh(&mut self, _node: &dyn KnowledgeSource) {}

    fn diagnostics(&self) -> Vec<Diagnostic> {
        if self.validate() {
            return Vec::new();
        }
        vec![error(
            "E310",
            format!("Value {} is outside the allowed range", self.value().unwrap_or_default()),
            Some(self.name.clone()),
            None,
        )]
    }
}
