//! Protocol-stable model types shared across layers.

mod column_type;
mod data_frame;
mod knowledge;

pub use column_type::ColumnType;
pub use data_frame::{ColumnField, DataFrameSchema};
pub use knowledge::{InferredResult, Knowledge};
