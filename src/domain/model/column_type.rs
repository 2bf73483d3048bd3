use serde::{Deserialize, Serialize};

/// Column type marker as reported by upstream type inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Numeric,
    Boolean,
    String,
    Timestamp,
    Array,
    Vector,
    Other,
}

impl ColumnType {
    /// Exact wire name, matching the serde representation. Anything else is unknown.
    pub fn from_wire(t: &str) -> Option<Self> {
        match t {
            "numeric" => Some(ColumnType::Numeric),
            "boolean" => Some(ColumnType::Boolean),
            "string" => Some(ColumnType::String),
            "timestamp" => Some(ColumnType::Timestamp),
            "array" => Some(ColumnType::Array),
            "vector" => Some(ColumnType::Vector),
            "other" => Some(ColumnType::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Numeric => "numeric",
            ColumnType::Boolean => "boolean",
            ColumnType::String => "string",
            ColumnType::Timestamp => "timestamp",
            ColumnType::Array => "array",
            ColumnType::Vector => "vector",
            ColumnType::Other => "other",
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
