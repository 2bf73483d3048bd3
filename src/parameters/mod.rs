//! Node parameters.
//!
//! Every parameter kind implements [`GenericParameter`]; [`Parameter`] is the
//! tagged union a [`ParameterList`] stores.

mod boolean;
mod list;
mod numeric;
pub mod selector;
mod string;

use serde_json::Value;

use crate::dsl::validation::{error, Diagnostic};
use crate::graph::KnowledgeSource;

pub use boolean::BooleanParameter;
pub use list::ParameterList;
pub use numeric::NumericParameter;
pub use selector::{
    create_item, IndexBounds, SelectionMode, SelectorItem, SelectorOptions, SelectorParameter,
};
pub use string::StringParameter;

/// Capabilities shared by every parameter kind.
pub trait GenericParameter {
    fn name(&self) -> &str;

    /// Wire value sent to the execution backend. `Value::Null` means unset.
    fn serialize(&self) -> Value;

    fn validate(&self) -> bool;

    /// Re-read anything derived from the owning node's inferred knowledge.
    /// User-entered state is left alone.
    fn refresh(&mut self, node: &dyn KnowledgeSource);

    /// Structured findings; no error-level entry iff [`validate`](Self::validate) holds.
    fn diagnostics(&self) -> Vec<Diagnostic> {
        if self.validate() {
            Vec::new()
        } else {
            vec![error(
                "E300",
                format!("Parameter '{}' is invalid", self.name()),
                Some(self.name().to_string()),
                None,
            )]
        }
    }
}

#[derive(Debug, Clone)]
pub enum Parameter {
    Selector(SelectorParameter),
    Boolean(BooleanParameter),
    Numeric(NumericParameter),
    String(StringParameter),
}

impl Parameter {
    pub fn type_name(&self) -> &'static str {
        match self {
            Parameter::Selector(_) => "selector",
            Parameter::Boolean(_) => "boolean",
            Parameter::Numeric(_) => "numeric",
            Parameter::String(_) => "string",
        }
    }

    pub fn as_selector(&self) -> Option<&SelectorParameter> {
        match self {
            Parameter::Selector(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_selector_mut(&mut self) -> Option<&mut SelectorParameter> {
        match self {
            Parameter::Selector(p) => Some(p),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn GenericParameter {
        match self {
            Parameter::Selector(p) => p,
            Parameter::Boolean(p) => p,
            Parameter::Numeric(p) => p,
            Parameter::String(p) => p,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn GenericParameter {
        match self {
            Parameter::Selector(p) => p,
            Parameter::Boolean(p) => p,
            Parameter::Numeric(p) => p,
            Parameter::String(p) => p,
        }
    }
}

impl GenericParameter for Parameter {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn serialize(&self) -> Value {
        self.inner().serialize()
    }

    fn validate(&self) -> bool {
        self.inner().validate()
    }

    fn refresh(&mut self, node: &dyn KnowledgeSource) {
        self.inner_mut().refresh(node)
    }

    fn diagnostics(&self) -> Vec<Diagnostic> {
        self.inner().diagnostics()
    }
}

impl From<SelectorParameter> for Parameter {
    fn from(p: SelectorParameter) -> Self {
        Parameter::Selector(p)
    }
}

impl From<BooleanParameter> for Parameter {
    fn from(p: BooleanParameter) -> Self {
        Parameter::Boolean(p)
    }
}

impl From<NumericParameter> for Parameter {
    fn from(p: NumericParameter) -> Self {
        Parameter::Numeric(p)
    }
}

impl From<StringParameter> for Parameter {
    fn from(p: StringParameter) -> Self {
        Parameter::String(p)
    }
}
