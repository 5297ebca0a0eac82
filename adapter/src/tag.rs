//! Adapter for artifact tags.

use crate::adapter::{UnfoldTraversal, VertexAdapter, DELETE_SET};
use crate::error::AdapterResult;
use crate::validation;
use quiver_domain::schema::vertices;
use quiver_domain::ArtifactTag;
use quiver_traversal::{Record, Traversal};

const LABELS: &[&str] = &[vertices::ARTIFACT_TAG];

/// Maps `ArtifactTag` entities onto tag vertices.
///
/// A tag vertex carries nothing but its uuid (the tag name), so the
/// write fragment is identity — the upsert itself materializes it.
#[derive(Debug, Clone, Default)]
pub struct TagAdapter;

impl TagAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl VertexAdapter for TagAdapter {
    type Entity = ArtifactTag;

    fn labels(&self) -> &'static [&'static str] {
        LABELS
    }

    fn fold(&self) -> Traversal {
        Traversal::start().project(vec![
            ("id", Traversal::start().id()),
            ("uuid", Traversal::start().value("uuid")),
        ])
    }

    fn map_record(&self, record: &Record) -> AdapterResult<ArtifactTag> {
        Ok(ArtifactTag::restored(
            record.require_id("id")?,
            record.require_str("uuid")?,
        ))
    }

    fn unfold<'e>(
        &self,
        entity: &'e ArtifactTag,
    ) -> AdapterResult<UnfoldTraversal<'e, ArtifactTag>> {
        validation::require_identifier("ArtifactTag", "name", entity.name())?;
        Ok(UnfoldTraversal::new(
            entity,
            vertices::ARTIFACT_TAG,
            Traversal::start(),
        ))
    }

    fn cascade(&self) -> Traversal {
        Traversal::start()
            .aggregate(DELETE_SET)
            .select(DELETE_SET)
            .flatten()
            .dedup()
    }
}
