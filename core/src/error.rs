//! Common error types for graph storage.

use crate::{EdgeId, VertexId};
use thiserror::Error;

/// Errors that can occur during graph storage operations.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Vertex not found.
    #[error("Vertex not found: {0}")]
    VertexNotFound(VertexId),

    /// Edge not found.
    #[error("Edge not found: {0}")]
    EdgeNotFound(EdgeId),

    /// Unique-id constraint violation: a vertex with this uuid already exists.
    #[error("Duplicate unique id {uuid:?} for label {label:?}")]
    DuplicateUniqueId { label: String, uuid: String },
}

impl GraphError {
    pub fn duplicate_unique_id(label: impl Into<String>, uuid: impl Into<String>) -> Self {
        Self::DuplicateUniqueId {
            label: label.into(),
            uuid: uuid.into(),
        }
    }
}

/// Result type for graph storage operations.
pub type GraphResult<T> = Result<T, GraphError>;
