//! Graph-side collaborators of the parameter model.
//!
//! Parameters never own the node they configure. They read the node's
//! inferred port knowledge through [`KnowledgeSource`] whenever they are
//! constructed or refreshed.

pub mod node;

pub use node::*;
