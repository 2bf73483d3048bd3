//! Domain layer — pure data types shared by the parameter model.
//!
//! Submodules:
//! - [`model`] — Column types, data frame schemas and the inferred knowledge
//!   attached to a node's ports.

pub mod model;
