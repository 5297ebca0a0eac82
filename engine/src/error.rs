//! Execution error types.

use quiver_core::GraphError;
use thiserror::Error;

/// Result type for traversal execution.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors detected while executing a composed traversal.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A step that requires a vertex position was applied to a
    /// non-vertex traverser. A composition defect in the fragment.
    #[error("Step {step} requires a vertex traverser")]
    ExpectedVertex { step: &'static str },

    /// An upsert located a vertex owning the uuid under a different
    /// label than the one being written.
    #[error("Upsert for uuid {uuid:?}: expected label {expected:?}, found {actual:?}")]
    UpsertLabelMismatch {
        uuid: String,
        expected: String,
        actual: String,
    },

    /// The storage engine rejected a create because the unique id is
    /// already taken — two writers raced to create the same logical
    /// entity. The enclosing transaction must be rolled back and
    /// retried by the caller.
    #[error("Concurrent creation conflict on unique id {uuid:?}")]
    ConcurrentCreationConflict { uuid: String },

    /// Any other storage failure, propagated unchanged.
    #[error("Graph error: {0}")]
    Graph(GraphError),
}

impl EngineError {
    pub fn expected_vertex(step: &'static str) -> Self {
        Self::ExpectedVertex { step }
    }

    pub fn upsert_label_mismatch(
        uuid: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::UpsertLabelMismatch {
            uuid: uuid.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl From<GraphError> for EngineError {
    fn from(error: GraphError) -> Self {
        match error {
            GraphError::DuplicateUniqueId { uuid, .. } => {
                Self::ConcurrentCreationConflict { uuid }
            }
            other => Self::Graph(other),
        }
    }
}
