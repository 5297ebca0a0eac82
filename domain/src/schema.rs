//! Graph schema constants.
//!
//! Vertex and edge labels are fixed strings shared by the adapters and
//! any code seeding or inspecting the graph directly.

/// Vertex labels.
pub mod vertices {
    /// An artifact-id group aggregate root.
    pub const ARTIFACT_ID_GROUP: &str = "ArtifactIdGroup";
    /// An artifact.
    pub const ARTIFACT: &str = "Artifact";
    /// An artifact tag.
    pub const ARTIFACT_TAG: &str = "ArtifactTag";
}

/// Edge labels.
pub mod edges {
    /// Group owns artifact (one-to-many).
    pub const GROUP_HAS_ARTIFACTS: &str = "GroupHasArtifacts";
    /// Artifact carries tag (many-to-many).
    pub const ARTIFACT_HAS_TAG: &str = "ArtifactHasTag";
    /// Remote/mirrored artifact derives from its canonical origin
    /// (zero-or-one, directed remote -> origin).
    pub const ARTIFACT_INHERITS_ORIGIN: &str = "ArtifactInheritsOrigin";
}
