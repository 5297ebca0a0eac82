//! Adapter for the artifact-id group aggregate.
//!
//! The aggregate owns its artifacts, so all three operations compose the
//! artifact adapter's fragments rather than reaching into artifact
//! internals: fold nests the artifact projection, unfold cascades
//! creation of not-yet-persisted children only, cascade flat-maps every
//! child through the artifact adapter's own deletion policy.

use crate::adapter::{scratch_key, UnfoldTraversal, VertexAdapter, DELETE_SET};
use crate::artifact::ArtifactAdapter;
use crate::error::AdapterResult;
use crate::validation;
use quiver_domain::schema::{edges, vertices};
use quiver_domain::{ArtifactIdGroup, ArtifactTag, GraphEntity};
use quiver_traversal::{Record, Traversal};

const LABELS: &[&str] = &[vertices::ARTIFACT_ID_GROUP];

/// Maps `ArtifactIdGroup` aggregates onto group vertices and their
/// owned artifact sub-graph.
#[derive(Debug, Clone)]
pub struct ArtifactIdGroupAdapter {
    artifact_adapter: ArtifactAdapter,
}

impl ArtifactIdGroupAdapter {
    pub fn new(artifact_adapter: ArtifactAdapter) -> Self {
        Self { artifact_adapter }
    }

    /// Build the read fragment, optionally restricted to artifacts
    /// carrying the given tag.
    ///
    /// Without a filter, each reached artifact is resolved to its
    /// canonical origin over the inherits edge when one exists, so
    /// remote/mirrored copies fold as their origin representation. With
    /// a tag filter, no inheritance resolution is applied: tag views
    /// never show derived copies.
    pub fn fold_filtered(&self, tag: Option<&ArtifactTag>) -> Traversal {
        let mut artifacts = Traversal::start().outgoing(edges::GROUP_HAS_ARTIFACTS);
        artifacts = match tag {
            Some(tag) => artifacts.filter(
                Traversal::start()
                    .outgoing(edges::ARTIFACT_HAS_TAG)
                    .has("uuid", tag.name()),
            ),
            None => artifacts.optional(
                Traversal::start().outgoing(edges::ARTIFACT_INHERITS_ORIGIN),
            ),
        };

        Traversal::start().project(vec![
            ("id", Traversal::start().id()),
            ("uuid", Traversal::start().value("uuid")),
            ("storage_id", Traversal::start().value("storage_id")),
            ("repository_id", Traversal::start().value("repository_id")),
            ("name", Traversal::start().value("name")),
            (
                "artifacts",
                artifacts.map(self.artifact_adapter.fold()).collect_list(),
            ),
        ])
    }

    /// Fragment writing the natural-key properties. Identity for a
    /// persisted group: the natural key is write-once, so re-unfolding
    /// an existing aggregate emits no property writes at all.
    fn natural_key_fragment(group: &ArtifactIdGroup) -> Traversal {
        if group.is_persisted() {
            return Traversal::start();
        }
        Traversal::start()
            .set_property("storage_id", group.storage_id())
            .set_property("repository_id", group.repository_id())
            .set_property("name", group.name())
    }
}

impl Default for ArtifactIdGroupAdapter {
    fn default() -> Self {
        Self::new(ArtifactAdapter::default())
    }
}

impl VertexAdapter for ArtifactIdGroupAdapter {
    type Entity = ArtifactIdGroup;

    fn labels(&self) -> &'static [&'static str] {
        LABELS
    }

    fn fold(&self) -> Traversal {
        self.fold_filtered(None)
    }

    fn map_record(&self, record: &Record) -> AdapterResult<ArtifactIdGroup> {
        let mut group = ArtifactIdGroup::restored(
            record.require_id("id")?,
            record.require_str("uuid")?,
            record.require_str("storage_id")?,
            record.require_str("repository_id")?,
            record.require_str("name")?,
        );
        for artifact_record in record.require_records("artifacts")? {
            group.add_artifact(self.artifact_adapter.map_record(artifact_record)?);
        }
        Ok(group)
    }

    fn unfold<'e>(
        &self,
        entity: &'e ArtifactIdGroup,
    ) -> AdapterResult<UnfoldTraversal<'e, ArtifactIdGroup>> {
        validation::require_identifier("ArtifactIdGroup", "storage_id", entity.storage_id())?;
        validation::require_identifier(
            "ArtifactIdGroup",
            "repository_id",
            entity.repository_id(),
        )?;
        validation::require_identifier("ArtifactIdGroup", "name", entity.name())?;

        // Cascading create for not-yet-persisted children only. Each new
        // artifact is upserted by its uuid and stashed for edge wiring.
        // The ownership edge lands on the artifact itself, never on its
        // inherits target: ownership and reference must stay
        // distinguishable for the deletion planner.
        let stored_artifacts = scratch_key(vertices::ARTIFACT);
        let mut save_artifacts = Traversal::start();
        for artifact in entity.artifacts() {
            if artifact.is_persisted() {
                continue;
            }
            let unfolded = self.artifact_adapter.unfold(artifact)?;
            let (label, uuid) = (unfolded.label(), unfolded.uuid().to_string());
            save_artifacts = save_artifacts
                .upsert(label, uuid, unfolded.into_traversal())
                .aggregate(&stored_artifacts);
        }

        // Child creation is sequenced before edge wiring by data
        // dependency: the side effect recalls the stash the save chain
        // filled.
        let stored_group = scratch_key(vertices::ARTIFACT_ID_GROUP);
        let traversal = Traversal::start()
            .map(Self::natural_key_fragment(entity))
            .aggregate(&stored_group)
            .side_effect(
                save_artifacts
                    .select(&stored_artifacts)
                    .flatten()
                    .add_edge_from(
                        edges::GROUP_HAS_ARTIFACTS,
                        Traversal::start().select(&stored_group).flatten(),
                    ),
            );

        Ok(UnfoldTraversal::new(
            entity,
            vertices::ARTIFACT_ID_GROUP,
            traversal,
        ))
    }

    /// Collect the group vertex and every owned artifact, each swept
    /// through the artifact adapter's own deletion policy. The group
    /// carries no edge-type knowledge beyond its ownership edge.
    fn cascade(&self) -> Traversal {
        Traversal::start()
            .aggregate(DELETE_SET)
            .optional(
                Traversal::start()
                    .outgoing(edges::GROUP_HAS_ARTIFACTS)
                    .flat_map(self.artifact_adapter.cascade()),
            )
            .select(DELETE_SET)
            .flatten()
            .dedup()
    }
}
