//! In-memory property-graph storage.

use crate::index::{AdjacencyIndex, LabelIndex, UniqueIdIndex};
use quiver_core::{
    Edge, EdgeId, GraphError, GraphResult, Properties, Value, Vertex, VertexId,
};
use std::collections::HashMap;

/// The property key carrying an entity's stable external unique id.
/// Values under this key are covered by a graph-wide uniqueness constraint.
pub const UNIQUE_ID_KEY: &str = "uuid";

/// ID allocator for vertices and edges.
#[derive(Debug)]
struct IdAllocator {
    next_vertex_id: u64,
    next_edge_id: u64,
}

impl IdAllocator {
    fn new() -> Self {
        Self {
            next_vertex_id: 1,
            next_edge_id: 1,
        }
    }

    fn alloc_vertex_id(&mut self) -> VertexId {
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;
        id
    }

    fn alloc_edge_id(&mut self) -> EdgeId {
        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;
        id
    }
}

/// The in-memory graph storage.
#[derive(Debug)]
pub struct Graph {
    /// Vertex storage
    vertices: HashMap<VertexId, Vertex>,
    /// Edge storage
    edges: HashMap<EdgeId, Edge>,
    /// ID allocator
    id_alloc: IdAllocator,
    /// Label index
    label_index: LabelIndex,
    /// Adjacency index
    adj_index: AdjacencyIndex,
    /// Unique external-id index
    uuid_index: UniqueIdIndex,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
            edges: HashMap::new(),
            id_alloc: IdAllocator::new(),
            label_index: LabelIndex::new(),
            adj_index: AdjacencyIndex::new(),
            uuid_index: UniqueIdIndex::new(),
        }
    }

    // ==================== Vertex Operations ====================

    /// Create a new vertex with the given label and properties.
    ///
    /// If the properties carry a `uuid` entry, the graph-wide uniqueness
    /// constraint is enforced; a taken uuid is a constraint violation.
    pub fn create_vertex(
        &mut self,
        label: &str,
        properties: Properties,
    ) -> GraphResult<VertexId> {
        if let Some(Value::String(uuid)) = properties.get(UNIQUE_ID_KEY) {
            if self.uuid_index.get(uuid).is_some() {
                return Err(GraphError::duplicate_unique_id(label, uuid.clone()));
            }
        }

        let id = self.id_alloc.alloc_vertex_id();
        let vertex = Vertex::new(id, label, properties);

        self.label_index.insert(label, id);
        if let Some(Value::String(uuid)) = vertex.property(UNIQUE_ID_KEY) {
            self.uuid_index.insert(uuid, id);
        }

        self.vertices.insert(id, vertex);
        Ok(id)
    }

    /// Get a vertex by ID.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Delete a vertex and all edges touching it.
    pub fn delete_vertex(&mut self, id: VertexId) -> GraphResult<()> {
        if !self.vertices.contains_key(&id) {
            return Err(GraphError::VertexNotFound(id));
        }

        let edges_to_delete: Vec<EdgeId> = self.adj_index.edges_touching(id).collect();
        for edge_id in edges_to_delete {
            // A self-loop is listed in both direction sets; ignore the
            // second removal.
            let _ = self.delete_edge(edge_id);
        }

        let vertex = self.vertices.remove(&id).unwrap();
        self.label_index.remove(&vertex.label, id);
        if let Some(Value::String(uuid)) = vertex.property(UNIQUE_ID_KEY) {
            self.uuid_index.remove(uuid);
        }

        Ok(())
    }

    /// Set a property on a vertex.
    ///
    /// Writing the `uuid` key re-checks the uniqueness constraint.
    pub fn set_vertex_property(
        &mut self,
        id: VertexId,
        key: &str,
        value: Value,
    ) -> GraphResult<()> {
        if key == UNIQUE_ID_KEY {
            if let Value::String(uuid) = &value {
                if let Some(owner) = self.uuid_index.get(uuid) {
                    if owner != id {
                        let label = self
                            .vertices
                            .get(&id)
                            .map(|v| v.label.clone())
                            .unwrap_or_default();
                        return Err(GraphError::duplicate_unique_id(label, uuid.clone()));
                    }
                }
            }
        }

        let vertex = self
            .vertices
            .get_mut(&id)
            .ok_or(GraphError::VertexNotFound(id))?;

        if key == UNIQUE_ID_KEY {
            if let Some(Value::String(old)) = vertex.property(UNIQUE_ID_KEY) {
                let old = old.clone();
                self.uuid_index.remove(&old);
            }
            if let Value::String(uuid) = &value {
                self.uuid_index.insert(uuid, id);
            }
        }

        let vertex = self.vertices.get_mut(&id).unwrap();
        vertex.set_property(key.to_string(), value);
        Ok(())
    }

    /// Iterate vertices carrying the given label.
    pub fn vertices_with_label(&self, label: &str) -> impl Iterator<Item = VertexId> + '_ {
        self.label_index.get(label)
    }

    /// Find the single vertex owning the given external unique id.
    pub fn find_by_uuid(&self, uuid: &str) -> Option<VertexId> {
        self.uuid_index.get(uuid)
    }

    /// Number of vertices stored.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ==================== Edge Operations ====================

    /// Create a directed labeled edge between two existing vertices.
    pub fn create_edge(
        &mut self,
        label: &str,
        from: VertexId,
        to: VertexId,
    ) -> GraphResult<EdgeId> {
        if !self.vertices.contains_key(&from) {
            return Err(GraphError::VertexNotFound(from));
        }
        if !self.vertices.contains_key(&to) {
            return Err(GraphError::VertexNotFound(to));
        }

        let id = self.id_alloc.alloc_edge_id();
        let edge = Edge::new(id, label, from, to);

        self.adj_index.insert(from, to, id);
        self.edges.insert(id, edge);
        Ok(id)
    }

    /// Get an edge by ID.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Delete an edge.
    pub fn delete_edge(&mut self, id: EdgeId) -> GraphResult<()> {
        let edge = self.edges.remove(&id).ok_or(GraphError::EdgeNotFound(id))?;
        self.adj_index.remove(edge.from, edge.to, id);
        Ok(())
    }

    /// Iterate edges leaving a vertex, optionally restricted to a label.
    pub fn edges_from<'g>(
        &'g self,
        vertex_id: VertexId,
        label: Option<&'g str>,
    ) -> impl Iterator<Item = EdgeId> + 'g {
        self.adj_index.edges_out(vertex_id).filter(move |edge_id| {
            label.is_none_or(|l| self.edges.get(edge_id).map(|e| e.label == l).unwrap_or(false))
        })
    }

    /// Iterate edges arriving at a vertex, optionally restricted to a label.
    pub fn edges_to<'g>(
        &'g self,
        vertex_id: VertexId,
        label: Option<&'g str>,
    ) -> impl Iterator<Item = EdgeId> + 'g {
        self.adj_index.edges_in(vertex_id).filter(move |edge_id| {
            label.is_none_or(|l| self.edges.get(edge_id).map(|e| e.label == l).unwrap_or(false))
        })
    }

    /// Check whether an edge with the given label and endpoints exists.
    pub fn has_edge(&self, label: &str, from: VertexId, to: VertexId) -> bool {
        self.edges_from(from, Some(label))
            .any(|edge_id| self.edges.get(&edge_id).map(|e| e.to == to).unwrap_or(false))
    }

    /// Number of edges stored.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
