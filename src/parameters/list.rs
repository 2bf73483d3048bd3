use std::collections::HashSet;

use serde_json::{Map, Value};

use super::{
    BooleanParameter, GenericParameter, NumericParameter, Parameter, SelectorParameter,
    StringParameter,
};
use crate::dsl::schema::{NodeConfig, ParameterKindSchema, ParameterSchema};
use crate::dsl::validation::ValidationReport;
use crate::error::{ParameterError, ParameterResult};
use crate::graph::KnowledgeSource;

/// The parameters of one node, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ParameterList {
    parameters: Vec<Parameter>,
}

impl ParameterList {
    /// Build every declared parameter from its saved value.
    ///
    /// Selector values never fail to load; unrecognized selections are
    /// dropped. Scalar values of the wrong JSON type are rejected.
    pub fn load(config: &NodeConfig, node: &dyn KnowledgeSource) -> ParameterResult<Self> {
        let mut seen = HashSet::new();
        let mut parameters = Vec::with_capacity(config.parameters.len());

        for schema in &config.parameters {
            if !seen.insert(schema.name.as_str()) {
                return Err(ParameterError::DuplicateParameter(schema.name.clone()));
            }
            let value = config.values.get(&schema.name);
            parameters.push(build_parameter(schema, value, node)?);
        }

        for name in config.values.keys() {
            if !seen.contains(name.as_str()) {
                tracing::warn!(parameter = %name, "ignoring value for undeclared parameter");
            }
        }

        tracing::debug!(count = parameters.len(), "node parameters loaded");
        Ok(Self { parameters })
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        self.parameters.iter_mut().find(|p| p.name() == name)
    }

    pub fn selector(&self, name: &str) -> Option<&SelectorParameter> {
        self.get(name).and_then(Parameter::as_selector)
    }

    pub fn selector_mut(&mut self, name: &str) -> Option<&mut SelectorParameter> {
        self.get_mut(name).and_then(Parameter::as_selector_mut)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Wire values keyed by parameter name. Unset parameters are omitted.
    pub fn serialize(&self) -> Map<String, Value> {
        self.parameters
            .iter()
            .filter_map(|p| {
                let value = p.serialize();
                (!value.is_null()).then(|| (p.name().to_string(), value))
            })
            .collect()
    }

    pub fn validate(&self) -> bool {
        self.parameters.iter().all(|p| p.validate())
    }

    /// Re-derive knowledge-dependent state after upstream inference changed.
    pub fn refresh(&mut self, node: &dyn KnowledgeSource) {
        for param in &mut self.parameters {
            param.refresh(node);
        }
    }

    pub fn validation_report(&self) -> ValidationReport {
        ValidationReport::from_diagnostics(
            self.parameters
                .iter()
                .flat_map(|p| p.diagnostics())
                .collect(),
        )
    }
}

fn build_parameter(
    schema: &ParameterSchema,
    value: Option<&Value>,
    node: &dyn KnowledgeSource,
) -> ParameterResult<Parameter> {
    let name = schema.name.as_str();
    let param: Parameter = match &schema.kind {
        ParameterKindSchema::Selector(s) => {
            SelectorParameter::from_wire(name, s.clone(), value, node).into()
        }
        ParameterKindSchema::Boolean(s) => BooleanParameter::new(name, s, value)?.into(),
        ParameterKindSchema::Numeric(s) => NumericParameter::new(name, s, value)?.into(),
        ParameterKindSchema::String(s) => StringParameter::new(name, s, value)?.into(),
    };
    Ok(param)
}
