use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ================================
// Node Configuration Document
// ================================

/// Parameter declarations of one node plus the values saved for them.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct NodeConfig {
    #[serde(default)]
    pub parameters: Vec<ParameterSchema>,
    /// Saved wire values keyed by parameter name.
    #[serde(default)]
    pub values: Map<String, Value>,
}

/// Declaration of a single parameter. The `type` field selects the kind.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ParameterSchema {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub kind: ParameterKindSchema,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParameterKindSchema {
    Selector(SelectorSchema),
    Boolean(BooleanSchema),
    Numeric(NumericSchema),
    String(StringSchema),
}

impl ParameterKindSchema {
    pub fn type_name(&self) -> &'static str {
        match self {
            ParameterKindSchema::Selector(_) => "selector",
            ParameterKindSchema::Boolean(_) => "boolean",
            ParameterKindSchema::Numeric(_) => "numeric",
            ParameterKindSchema::String(_) => "string",
        }
    }
}

// ================================
// Selector
// ================================

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SelectorSchema {
    /// Single selection instead of a (possibly excluding) list.
    #[serde(default)]
    pub is_single: bool,
    /// Input port whose inferred data frame backs the selector.
    #[serde(default)]
    pub port_index: usize,
    /// Single mode: one item shape. Multi mode: `{excluding?, selections}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl SelectorSchema {
    pub fn single(port_index: usize) -> Self {
        Self {
            is_single: true,
            port_index,
            default: None,
        }
    }

    pub fn multi(port_index: usize) -> Self {
        Self {
            is_single: false,
            port_index,
            default: None,
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

// ================================
// Scalars
// ================================

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct BooleanSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct NumericSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validator: Option<NumericValidator>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "configuration", rename_all = "lowercase")]
pub enum NumericValidator {
    Range(RangeConfig),
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RangeConfig {
    #[serde(default)]
    pub begin: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
    #[serde(default = "default_included")]
    pub begin_included: bool,
    #[serde(default = "default_included")]
    pub end_included: bool,
}

fn default_included() -> bool { true }

impl RangeConfig {
    pub fn contains(&self, value: f64) -> bool {
        let above = match self.begin {
            Some(begin) if self.begin_included => value >= begin,
            Some(begin) => value > begin,
            None => true,
        };
        let below = match self.end {
            Some(end) if self.end_included => value <= end,
            Some(end) => value < end,
            None => true,
        };
        above && below
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct StringSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validator: Option<StringValidator>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "configuration", rename_all = "lowercase")]
pub enum StringValidator {
    Regex(RegexConfig),
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RegexConfig {
    pub regex: String,
}
