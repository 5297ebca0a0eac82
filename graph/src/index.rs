//! Indexes for efficient graph lookups.

use quiver_core::{EdgeId, VertexId};
use std::collections::{HashMap, HashSet};

/// Label index: label -> Set<VertexId>
#[derive(Debug, Default)]
pub struct LabelIndex {
    index: HashMap<String, HashSet<VertexId>>,
}

impl LabelIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: &str, vertex_id: VertexId) {
        self.index
            .entry(label.to_string())
            .or_default()
            .insert(vertex_id);
    }

    pub fn remove(&mut self, label: &str, vertex_id: VertexId) {
        if let Some(set) = self.index.get_mut(label) {
            set.remove(&vertex_id);
            if set.is_empty() {
                self.index.remove(label);
            }
        }
    }

    pub fn get(&self, label: &str) -> impl Iterator<Item = VertexId> + '_ {
        self.index
            .get(label)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }
}

/// Adjacency index: VertexId -> incident edge ids, split by direction.
#[derive(Debug, Default)]
pub struct AdjacencyIndex {
    outgoing: HashMap<VertexId, HashSet<EdgeId>>,
    incoming: HashMap<VertexId, HashSet<EdgeId>>,
}

impl AdjacencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, from: VertexId, to: VertexId, edge_id: EdgeId) {
        self.outgoing.entry(from).or_default().insert(edge_id);
        self.incoming.entry(to).or_default().insert(edge_id);
    }

    pub fn remove(&mut self, from: VertexId, to: VertexId, edge_id: EdgeId) {
        if let Some(set) = self.outgoing.get_mut(&from) {
            set.remove(&edge_id);
            if set.is_empty() {
                self.outgoing.remove(&from);
            }
        }
        if let Some(set) = self.incoming.get_mut(&to) {
            set.remove(&edge_id);
            if set.is_empty() {
                self.incoming.remove(&to);
            }
        }
    }

    pub fn edges_out(&self, vertex_id: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.outgoing
            .get(&vertex_id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    pub fn edges_in(&self, vertex_id: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.incoming
            .get(&vertex_id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    pub fn edges_touching(&self, vertex_id: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges_out(vertex_id).chain(self.edges_in(vertex_id))
    }
}

/// Unique-id index: "uuid" property value -> VertexId.
///
/// Backs the uniqueness constraint on external entity identifiers. One uuid
/// maps to at most one vertex across all labels.
#[derive(Debug, Default)]
pub struct UniqueIdIndex {
    index: HashMap<String, VertexId>,
}

impl UniqueIdIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a uuid mapping. Returns false if the uuid is already taken
    /// by a different vertex.
    pub fn insert(&mut self, uuid: &str, vertex_id: VertexId) -> bool {
        match self.index.get(uuid) {
            Some(existing) if *existing != vertex_id => false,
            _ => {
                self.index.insert(uuid.to_string(), vertex_id);
                true
            }
        }
    }

    pub fn remove(&mut self, uuid: &str) {
        self.index.remove(uuid);
    }

    pub fn get(&self, uuid: &str) -> Option<VertexId> {
        self.index.get(uuid).copied()
    }
}
