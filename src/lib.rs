//! # workflow-params — Node Parameter Model for Workflow Editors
//!
//! `workflow_params` holds the configuration state of pipeline nodes in a
//! graph-based workflow editor and turns it into the wire values consumed by
//! the execution backend. It covers:
//!
//! - **Column selectors**: single or multi selection of columns from the data
//!   frame flowing into a node's input port, with inclusion/exclusion modes,
//!   defaults and reset.
//! - **Lenient decoding**: saved selections that are malformed or come from a
//!   newer format are dropped instead of failing the whole node.
//! - **Schema binding**: selectors validate against the upstream schema
//!   inferred for their port and re-bind on [`GenericParameter::refresh`].
//! - **Scalar parameters**: boolean, numeric (range-checked) and string
//!   (pattern-checked) parameters behind the same [`GenericParameter`] trait.
//! - **Node configuration documents**: YAML/JSON/TOML declarations plus saved
//!   values, loaded into a [`ParameterList`] with structured diagnostics.
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use workflow_params::{GenericParameter, GraphNode, SelectorOptions, SelectorParameter, SelectorSchema};
//!
//! let node = GraphNode::new("n1", "select-columns");
//! let selector = SelectorParameter::new(
//!     SelectorOptions {
//!         name: "columns".into(),
//!         value: Some(json!([{"type": "column", "value": "price"}])),
//!         schema: SelectorSchema::multi(0),
//!         excluding: None,
//!     },
//!     &node,
//! );
//! assert_eq!(
//!     selector.serialize(),
//!     json!({"excluding": false, "selections": [{"type": "column", "value": "price"}]})
//! );
//! ```

pub mod domain;
pub mod dsl;
pub mod error;
pub mod graph;
pub mod parameters;

pub use crate::domain::model::{ColumnField, ColumnType, DataFrameSchema, InferredResult, Knowledge};
pub use crate::dsl::{
    parse_node_config, validate_node_config, ConfigFormat, Diagnostic, DiagnosticLevel, NodeConfig,
    ParameterKindSchema, ParameterSchema, SelectorSchema, ValidationReport,
};
pub use crate::error::{ParameterError, ParameterResult};
pub use crate::graph::{GraphNode, KnowledgeSource};
pub use crate::parameters::{
    create_item, BooleanParameter, GenericParameter, IndexBounds, NumericParameter, Parameter,
    ParameterList, SelectionMode, SelectorItem, SelectorOptions, SelectorParameter, StringParameter,
};
