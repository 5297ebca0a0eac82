//! Graph element structures.
//!
//! Vertices and directed labeled edges are the two element kinds stored by
//! the graph. A vertex carries a label and a property map; an edge carries
//! a label and its two endpoints.

use crate::{EdgeId, Properties, Value, VertexId};

/// A vertex in the property graph.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// Unique identifier for this vertex.
    pub id: VertexId,
    /// Label naming the kind of entity this vertex stores.
    pub label: String,
    /// Property values.
    pub properties: Properties,
}

impl Vertex {
    /// Create a new vertex with the given label and properties.
    pub fn new(id: VertexId, label: impl Into<String>, properties: Properties) -> Self {
        Self {
            id,
            label: label.into(),
            properties,
        }
    }

    /// Get a property value by key.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Set a property value.
    pub fn set_property(&mut self, key: String, value: Value) {
        self.properties.insert(key, value);
    }
}

/// A directed labeled edge between two vertices.
#[derive(Debug, Clone)]
pub struct Edge {
    /// Unique identifier for this edge.
    pub id: EdgeId,
    /// Label naming the relationship.
    pub label: String,
    /// Source vertex.
    pub from: VertexId,
    /// Target vertex.
    pub to: VertexId,
}

impl Edge {
    /// Create a new edge with the given label and endpoints.
    pub fn new(id: EdgeId, label: impl Into<String>, from: VertexId, to: VertexId) -> Self {
        Self {
            id,
            label: label.into(),
            from,
            to,
        }
    }

    /// Check if this edge touches the given vertex at either endpoint.
    pub fn touches(&self, vertex_id: VertexId) -> bool {
        self.from == vertex_id || self.to == vertex_id
    }

    /// Get the endpoint opposite to the given vertex, if it is an endpoint.
    pub fn other(&self, vertex_id: VertexId) -> Option<VertexId> {
        if self.from == vertex_id {
            Some(self.to)
        } else if self.to == vertex_id {
            Some(self.from)
        } else {
            None
        }
    }
}
