//! Quiver Entity Adapters
//!
//! The entity-adapter pattern: per-entity-kind components translating
//! typed domain entities into traversal fragments and back.
//!
//! - `VertexAdapter`: the three-operation contract (fold / unfold /
//!   cascade) plus owned labels and typed record mapping
//! - `ArtifactIdGroupAdapter`, `ArtifactAdapter`, `TagAdapter`: the
//!   concrete instantiations for the artifact aggregate
//! - `UnfoldTraversal`: the write-path handle (entity, label, fragment)
//!
//! Sibling adapters are wired by constructor injection, so the
//! composition graph is explicit and substitutable in tests.

#[allow(clippy::module_inception)]
mod adapter;
mod artifact;
mod error;
mod group;
mod tag;
mod validation;

pub use adapter::{UnfoldTraversal, VertexAdapter};
pub use artifact::ArtifactAdapter;
pub use error::{AdapterError, AdapterResult};
pub use group::ArtifactIdGroupAdapter;
pub use tag::TagAdapter;
