//! Artifact child entities.

use crate::{ArtifactTag, GraphEntity};
use quiver_core::VertexId;
use uuid::Uuid;

/// An artifact stored in a repository.
///
/// A remote/mirrored artifact carries a reference to the canonical origin
/// artifact it derives from; origin artifacts carry none.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    vertex_id: Option<VertexId>,
    uuid: String,
    storage_id: String,
    repository_id: String,
    path: String,
    origin: Option<Box<Artifact>>,
    tags: Vec<ArtifactTag>,
}

impl Artifact {
    /// Create a transient artifact with a freshly generated uuid.
    pub fn new(
        storage_id: impl Into<String>,
        repository_id: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            vertex_id: None,
            uuid: Uuid::new_v4().to_string(),
            storage_id: storage_id.into(),
            repository_id: repository_id.into(),
            path: path.into(),
            origin: None,
            tags: Vec::new(),
        }
    }

    /// Rebuild a persisted artifact from stored state.
    pub fn restored(
        vertex_id: VertexId,
        uuid: impl Into<String>,
        storage_id: impl Into<String>,
        repository_id: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            vertex_id: Some(vertex_id),
            uuid: uuid.into(),
            storage_id: storage_id.into(),
            repository_id: repository_id.into(),
            path: path.into(),
            origin: None,
            tags: Vec::new(),
        }
    }

    /// Mark this artifact as derived from the given origin artifact.
    pub fn derived_from(mut self, origin: Artifact) -> Self {
        self.origin = Some(Box::new(origin));
        self
    }

    /// Attach a tag. Tags are a set keyed by name; duplicates are ignored.
    pub fn add_tag(&mut self, tag: ArtifactTag) {
        if !self.tags.iter().any(|t| t.name() == tag.name()) {
            self.tags.push(tag);
        }
    }

    /// Attach a tag, builder style.
    pub fn tagged(mut self, tag: ArtifactTag) -> Self {
        self.add_tag(tag);
        self
    }

    pub fn storage_id(&self) -> &str {
        &self.storage_id
    }

    pub fn repository_id(&self) -> &str {
        &self.repository_id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The canonical origin this artifact derives from, if it is a
    /// remote/mirrored copy.
    pub fn origin(&self) -> Option<&Artifact> {
        self.origin.as_deref()
    }

    pub fn tags(&self) -> &[ArtifactTag] {
        &self.tags
    }
}

impl GraphEntity for Artifact {
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
