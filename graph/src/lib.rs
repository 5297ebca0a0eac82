//! Quiver Graph Storage
//!
//! In-memory property-graph storage: vertices with typed labels and
//! properties, directed labeled edges, and the indexes backing label
//! lookup, adjacency traversal, and the unique external-id constraint.
//!
//! This crate is the reference implementation of the storage-engine
//! interface the mapping layer composes traversals against. It knows
//! nothing about traversals or domain entities.

mod graph;
mod index;

pub use graph::{Graph, UNIQUE_ID_KEY};
pub use index::{AdjacencyIndex, LabelIndex, UniqueIdIndex};
