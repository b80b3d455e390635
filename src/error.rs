//! Error types for the form engine.
//!
//! The engine core has no fatal error category: validation failures are
//! reported through the per-element error map, and unknown names or
//! unresolved renderers degrade to empty output. The only fallible surface
//! is loading a schema from configuration.

use thiserror::Error;

/// Errors raised while loading a form schema from configuration.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema document could not be parsed.
    #[error("invalid form schema: {0}")]
    Parse(#[from] serde_json::Error),
}
