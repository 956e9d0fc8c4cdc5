//! Error types for schema parsing.

use thiserror::Error;

/// Ways an incoming schema can fail to have the expected shape.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The root has no `Source` node.
    #[error("schema has no `Source` node")]
    MissingSource,

    /// The `Source` node has no `children` mapping.
    #[error("schema `Source` node has no `children`")]
    MissingChildren,

    /// A top-level child has no `field` descriptor.
    #[error("schema child `{node}` has no `field` descriptor")]
    MissingField { node: String },

    /// Something is present but not of the expected JSON type.
    #[error("invalid schema shape: {0}")]
    InvalidShape(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;
