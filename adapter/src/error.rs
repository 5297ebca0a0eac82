//! Adapter error types.

use quiver_traversal::RecordError;
use thiserror::Error;

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Errors raised while composing write fragments or mapping projection
/// results back into entities.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// A required natural-key field is missing on the input entity.
    /// Raised before any fragment is built, so a partially-keyed vertex
    /// can never be produced.
    #[error("Incomplete {entity}: {field} is required")]
    IncompleteEntity {
        entity: &'static str,
        field: &'static str,
    },

    /// An identifier field does not match the accepted format.
    #[error("Malformed {field} on {entity}: {value:?}")]
    MalformedIdentifier {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// A projection record could not be mapped back into an entity.
    #[error(transparent)]
    Record(#[from] RecordError),
}

impl AdapterError {
    pub fn incomplete_entity(entity: &'static str, field: &'static str) -> Self {
        Self::IncompleteEntity { entity, field }
    }

    pub fn malformed_identifier(
        entity: &'static str,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::MalformedIdentifier {
            entity,
            field,
            value: value.into(),
        }
    }
}
