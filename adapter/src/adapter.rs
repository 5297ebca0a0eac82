//! The vertex adapter contract.
//!
//! Every mapped entity kind exposes the same three-operation contract —
//! fold (read), unfold (write), cascade (delete planning) — plus the
//! vertex labels it owns and the typed mapping from projection records
//! back to entities. Adapters compose with each other purely through
//! this contract; sibling adapters arrive as constructor parameters.

use crate::error::AdapterResult;
use quiver_domain::GraphEntity;
use quiver_traversal::{Record, Traversal};
use uuid::Uuid;

/// The label of the shared deletion-set checkpoint used by every
/// cascade fragment. Nested cascades aggregate into the same set.
pub(crate) const DELETE_SET: &str = "delete-set";

/// Generate a per-call scratch checkpoint key.
///
/// Scratch keys carry a fresh uuid so that fragments composed in separate
/// unfold calls can never collide on checkpoint names, even when batched
/// into one executed traversal.
pub(crate) fn scratch_key(label: &str) -> String {
    format!("{}:{}", label, Uuid::new_v4())
}

/// Per-entity-kind mapping between domain entities and graph vertices.
pub trait VertexAdapter {
    /// The entity kind this adapter maps.
    type Entity: GraphEntity;

    /// The vertex labels owned by this adapter.
    fn labels(&self) -> &'static [&'static str];

    /// Build the read fragment projecting a vertex of this kind into a
    /// typed record. Read-only; building and executing it never mutates
    /// the graph.
    fn fold(&self) -> Traversal;

    /// Rebuild an entity from a projection record produced by `fold`.
    fn map_record(&self, record: &Record) -> AdapterResult<Self::Entity>;

    /// Build the write fragment upserting this entity and its not-yet-
    /// persisted dependents. Validates the entity before composing;
    /// building performs no mutation — only executing the result does.
    fn unfold<'e>(&self, entity: &'e Self::Entity)
        -> AdapterResult<UnfoldTraversal<'e, Self::Entity>>;

    /// Build the fragment collecting the closed set of vertices to delete
    /// together with a vertex of this kind. Read-only and idempotent.
    fn cascade(&self) -> Traversal;
}

/// Handle returned by the write path: the entity being written, the
/// vertex label it maps to, and the composed fragment. The caller
/// executes it (root upsert by uuid, then fragment application) or
/// composes it further, e.g. batching several unfolds into one
/// transaction.
#[derive(Debug, Clone)]
pub struct UnfoldTraversal<'e, E> {
    entity: &'e E,
    label: &'static str,
    traversal: Traversal,
}

impl<'e, E: GraphEntity> UnfoldTraversal<'e, E> {
    pub fn new(entity: &'e E, label: &'static str, traversal: Traversal) -> Self {
        Self {
            entity,
            label,
            traversal,
        }
    }

    /// The entity this write was composed from.
    pub fn entity(&self) -> &'e E {
        self.entity
    }

    /// The vertex label the root upsert uses.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// The root entity's external unique id.
    pub fn uuid(&self) -> &str {
        self.entity.uuid()
    }

    /// Borrow the composed fragment.
    pub fn traversal(&self) -> &Traversal {
        &self.traversal
    }

    /// Take the composed fragment, discarding the handle.
    pub fn into_traversal(self) -> Traversal {
        self.traversal
    }
}
