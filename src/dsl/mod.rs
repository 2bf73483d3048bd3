pub mod parser;
pub mod schema;
pub mod validation;

pub use parser::{parse_node_config, ConfigFormat};
pub use schema::*;
pub use validation::{validate_node_config, Diagnostic, DiagnosticLevel, ValidationReport};
