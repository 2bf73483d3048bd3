//! Error types for the parameter model.
//!
//! - [`ParameterError`] — Errors raised while loading node configurations.
//!
//! Selector parameters themselves never fail: unrecognized selections are
//! dropped at construction and problems surface through validation instead.

pub mod parameter_error;

pub use parameter_error::ParameterError;

/// Convenience alias for parameter-level results.
pub type ParameterResult<T> = Result<T, ParameterError>;
