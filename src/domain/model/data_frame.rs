use serde::{Deserialize, Serialize};

use super::ColumnType;

/// One column of an inferred data frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnField {
    pub name: String,
    pub data_type: ColumnType,
}

impl ColumnField {
    pub fn new(name: impl Into<String>, data_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Column layout of the tabular data flowing into an input port.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataFrameSchema {
    #[serde(default)]
    pub fields: Vec<ColumnField>,
}

impl DataFrameSchema {
    pub fn new(fields: Vec<ColumnField>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&ColumnField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
