//! Adapter for artifacts.

use crate::adapter::{scratch_key, UnfoldTraversal, VertexAdapter, DELETE_SET};
use crate::error::AdapterResult;
use crate::tag::TagAdapter;
use crate::validation;
use quiver_domain::schema::{edges, vertices};
use quiver_domain::{Artifact, GraphEntity};
use quiver_traversal::{Record, Traversal};

const LABELS: &[&str] = &[vertices::ARTIFACT];

/// Maps `Artifact` entities onto artifact vertices, including their tag
/// associations and, for remote/mirrored artifacts, the edge to the
/// canonical origin artifact they derive from.
#[derive(Debug, Clone)]
pub struct ArtifactAdapter {
    tag_adapter: TagAdapter,
}

impl ArtifactAdapter {
    pub fn new(tag_adapter: TagAdapter) -> Self {
        Self { tag_adapter }
    }

    /// Fragment writing the artifact coordinate properties. Coordinates
    /// are rewritten on every save; only the group's natural key is
    /// write-once.
    fn coordinates_fragment(artifact: &Artifact) -> Traversal {
        Traversal::start()
            .set_property("storage_id", artifact.storage_id())
            .set_property("repository_id", artifact.repository_id())
            .set_property("path", artifact.path())
    }

    fn validate(artifact: &Artifact) -> AdapterResult<()> {
        validation::require_identifier("Artifact", "storage_id", artifact.storage_id())?;
        validation::require_identifier("Artifact", "repository_id", artifact.repository_id())?;
        validation::require_path("Artifact", "path", artifact.path())?;
        Ok(())
    }
}

impl Default for ArtifactAdapter {
    fn default() -> Self {
        Self::new(TagAdapter::new())
    }
}

impl VertexAdapter for ArtifactAdapter {
    type Entity = Artifact;

    fn labels(&self) -> &'static [&'static str] {
        LABELS
    }

    fn fold(&self) -> Traversal {
        Traversal::start().project(vec![
            ("id", Traversal::start().id()),
            ("uuid", Traversal::start().value("uuid")),
            ("storage_id", Traversal::start().value("storage_id")),
            ("repository_id", Traversal::start().value("repository_id")),
            ("path", Traversal::start().value("path")),
            (
                "tags",
                Traversal::start()
                    .outgoing(edges::ARTIFACT_HAS_TAG)
                    .map(self.tag_adapter.fold())
                    .collect_list(),
            ),
        ])
    }

    fn map_record(&self, record: &Record) -> AdapterResult<Artifact> {
        let mut artifact = Artifact::restored(
            record.require_id("id")?,
            record.require_str("uuid")?,
            record.require_str("storage_id")?,
            record.require_str("repository_id")?,
            record.require_str("path")?,
        );
        for tag_record in record.require_records("tags")? {
            artifact.add_tag(self.tag_adapter.map_record(tag_record)?);
        }
        Ok(artifact)
    }

    fn unfold<'e>(&self, entity: &'e Artifact) -> AdapterResult<UnfoldTraversal<'e, Artifact>> {
        Self::validate(entity)?;
        if let Some(origin) = entity.origin() {
            Self::validate(origin)?;
        }

        let stored_artifact = scratch_key(vertices::ARTIFACT);
        let mut traversal = Self::coordinates_fragment(entity).aggregate(&stored_artifact);

        if !entity.tags().is_empty() {
            let stored_tags = scratch_key(vertices::ARTIFACT_TAG);
            let mut save_tags = Traversal::start();
            for tag in entity.tags() {
                let unfolded = self.tag_adapter.unfold(tag)?;
                let (label, uuid) = (unfolded.label(), unfolded.uuid().to_string());
                save_tags = save_tags
                    .upsert(label, uuid, unfolded.into_traversal())
                    .aggregate(&stored_tags);
            }
            traversal = traversal.side_effect(
                save_tags.select(&stored_tags).flatten().add_edge_from(
                    edges::ARTIFACT_HAS_TAG,
                    Traversal::start().select(&stored_artifact).flatten(),
                ),
            );
        }

        if let Some(origin) = entity.origin() {
            traversal = traversal.side_effect(
                Traversal::start()
                    .upsert(
                        vertices::ARTIFACT,
                        origin.uuid(),
                        Self::coordinates_fragment(origin),
                    )
                    .add_edge_from(
                        edges::ARTIFACT_INHERITS_ORIGIN,
                        Traversal::start().select(&stored_artifact).flatten(),
                    ),
            );
        }

        Ok(UnfoldTraversal::new(entity, vertices::ARTIFACT, traversal))
    }

    /// Collect the artifact itself plus any remote artifacts fronting it
    /// (vertices reaching it over the inherits edge). Tags are shared
    /// entities and are left alone.
    fn cascade(&self) -> Traversal {
        Traversal::start()
            .aggregate(DELETE_SET)
            .optional(
                Traversal::start()
                    .incoming(edges::ARTIFACT_INHERITS_ORIGIN)
                    .aggregate(DELETE_SET),
            )
            .select(DELETE_SET)
            .flatten()
            .dedup()
    }
}
