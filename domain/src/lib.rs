//! Quiver Domain Entities
//!
//! The representative aggregate mapped by the adapters:
//! - ArtifactIdGroup: the aggregate root, keyed by storage/repository/name
//! - Artifact: child entity, optionally derived from a canonical origin
//! - ArtifactTag: shared tag association
//! - GraphEntity: the persisted/transient discriminator trait
//! - schema: the vertex and edge label constants

mod artifact;
mod entity;
mod group;
pub mod schema;
mod tag;

pub use artifact::Artifact;
pub use entity::GraphEntity;
pub use group::ArtifactIdGroup;
pub use tag::ArtifactTag;
