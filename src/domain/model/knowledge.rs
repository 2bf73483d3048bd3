use serde::{Deserialize, Serialize};

use super::DataFrameSchema;

/// Type inference output attached to one port of a node.
///
/// Produced by an external inference engine; this crate only reads it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Knowledge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<InferredResult>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InferredResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<DataFrameSchema>,
}

impl Knowledge {
    /// Knowledge whose inferred result carries `schema`.
    pub fn with_schema(schema: DataFrameSchema) -> Self {
        Self {
            result: Some(InferredResult {
                schema: Some(schema),
            }),
        }
    }

    /// The inferred data frame schema, if inference got that far.
    pub fn data_frame_schema(&self) -> Option<&DataFrameSchema> {
        self.result.as_ref().and_then(|r| r.schema.as_ref())
    }
}
