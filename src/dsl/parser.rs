//! Node configuration parser: converts raw YAML/JSON/TOML text into [`NodeConfig`].

use super::schema::NodeConfig;
use crate::error::ParameterError;

/// Supported node configuration formats.
#[derive(Debug, Clone, Copy)]
pub enum ConfigFormat {
    /// YAML format (`.yaml` / `.yml`).
    Yaml,
    /// JSON format (`.json`).
    Json,
    /// TOML format (`.toml`).
    Toml,
}

impl ConfigFormat {
    /// Guess the format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "json" => Some(ConfigFormat::Json),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }
}

/// Parse node configuration content into NodeConfig
pub fn parse_node_config(content: &str, format: ConfigFormat) -> Result<NodeConfig, ParameterError> {
    match format {
        ConfigFormat::Yaml => serde_saphyr::from_str(content)
            .map_err(|e| ParameterError::ConfigParseError(e.to_string())),
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| ParameterError::ConfigParseError(e.to_string())),
        ConfigFormat::Toml => {
            // Saved values are free-form JSON, so go through serde_json::Value
            // instead of deserializing NodeConfig from TOML directly.
            let toml_val: toml::Value = toml::from_str(content)
                .map_err(|e| ParameterError::ConfigParseError(e.to_string()))?;
            serde_json::from_value(toml_value_to_json(toml_val))
                .map_err(|e| ParameterError::ConfigParseError(e.to_string()))
        }
    }
}

/// Convert a [`toml::Value`] into a [`serde_json::Value`].
///
/// TOML has no null and no datetime in JSON, so datetimes are stringified.
fn toml_value_to_json(val: toml::Value) -> serde_json::Value {
    match val {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_value_to_json).collect())
        }
        toml::Value::Table(tbl) => serde_json::Value::Object(
            tbl.into_iter()
                .map(|(k, v)| (k, toml_value_to_json(v)))
                .collect(),
        ),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
    }
}
