//! The persisted/transient discriminator shared by all mapped entities.

use quiver_core::VertexId;

/// Behavior common to every entity mapped onto a vertex.
///
/// The presence of the internal vertex id is the sole discriminator
/// between "already exists in the graph" and "must be created". The
/// external uuid is assigned once at construction and never changes.
pub trait GraphEntity {
    /// The internal graph identifier, if this entity has been persisted.
    fn vertex_id(&self) -> Option<VertexId>;

    /// Record the internal identifier assigned by storage.
    fn set_vertex_id(&mut self, id: VertexId);

    /// The stable external unique identifier.
    fn uuid(&self) -> &str;

    /// True if this entity already exists in the graph.
    fn is_persisted(&self) -> bool {
        self.vertex_id().is_some()
    }
}
