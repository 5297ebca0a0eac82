//! The artifact-id group aggregate root.

use crate::{Artifact, GraphEntity};
use quiver_core::VertexId;
use uuid::Uuid;

/// An aggregate grouping all artifacts sharing one artifact id within a
/// repository.
///
/// Identified by the composite natural key (storage id, repository id,
/// name). The natural key is write-once: no update path exists after the
/// group has been persisted. Child artifacts form a set keyed by uuid.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactIdGroup {
    vertex_id: Option<VertexId>,
    uuid: String,
    storage_id: String,
    repository_id: String,
    name: String,
    artifacts: Vec<Artifact>,
}

impl ArtifactIdGroup {
    /// Create a transient group with a freshly generated uuid.
    pub fn new(
        storage_id: impl Into<String>,
        repository_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            vertex_id: None,
            uuid: Uuid::new_v4().to_string(),
            storage_id: storage_id.into(),
            repository_id: repository_id.into(),
            name: name.into(),
            artifacts: Vec::new(),
        }
    }

    /// Rebuild a persisted group from stored state.
    pub fn restored(
        vertex_id: VertexId,
        uuid: impl Into<String>,
        storage_id: impl Into<String>,
        repository_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            vertex_id: Some(vertex_id),
            uuid: uuid.into(),
            storage_id: storage_id.into(),
            repository_id: repository_id.into(),
            name: name.into(),
            artifacts: Vec::new(),
        }
    }

    pub fn storage_id(&self) -> &str {
        &self.storage_id
    }

    pub fn repository_id(&self) -> &str {
        &self.repository_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a child artifact. Children form a set keyed by uuid; a
    /// duplicate uuid is ignored. All child attachment goes through here
    /// so the set invariant holds no matter where children come from.
    pub fn add_artifact(&mut self, artifact: Artifact) {
        if !self.artifacts.iter().any(|a| a.uuid() == artifact.uuid()) {
            self.artifacts.push(artifact);
        }
    }

    /// Append a child artifact, builder style.
    pub fn with_artifact(mut self, artifact: Artifact) -> Self {
        self.add_artifact(artifact);
        self
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }
}

impl GraphEntity for ArtifactIdGroup {
    fn vertex_id(&self) -> Option<VertexId> {
        self.vertex_id
    }

    fn set_vertex_id(&mut self, id: VertexId) {
        self.vertex_id = Some(id);
    }

    fn uuid(&self) -> &str {
        &self.uuid
    }
}
