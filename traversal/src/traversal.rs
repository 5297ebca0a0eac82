//! The immutable traversal fragment builder.
//!
//! A `Traversal` is a value: every combinator consumes the receiver and
//! returns a new fragment, so base fragments can be cloned and extended
//! in different directions without interference. Building a fragment
//! performs no graph access.

use crate::Step;
use quiver_core::Value;

/// A composed traversal fragment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Traversal {
    steps: Vec<Step>,
}

impl Traversal {
    /// The empty (identity) fragment.
    pub fn start() -> Self {
        Self::default()
    }

    /// The steps of this fragment, in application order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns true if this fragment contains no steps.
    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns true if no step in this fragment, at any nesting depth,
    /// mutates the graph.
    pub fn is_read_only(&self) -> bool {
        self.steps.iter().all(|step| !step.is_mutating())
    }

    fn push(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    // ==================== Movement & filtering ====================

    /// Follow outgoing edges with the given label to the opposite endpoint.
    pub fn outgoing(self, label: impl Into<String>) -> Self {
        self.push(Step::Outgoing(label.into()))
    }

    /// Follow incoming edges with the given label to the opposite endpoint.
    pub fn incoming(self, label: impl Into<String>) -> Self {
        self.push(Step::Incoming(label.into()))
    }

    /// Keep only vertices carrying the given label.
    pub fn has_label(self, label: impl Into<String>) -> Self {
        self.push(Step::HasLabel(label.into()))
    }

    /// Keep only vertices whose property equals the given value.
    pub fn has(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(Step::Has {
            key: key.into(),
            value: value.into(),
        })
    }

    /// Keep a traverser iff the sub-fragment yields at least one result.
    pub fn filter(self, sub: Traversal) -> Self {
        self.push(Step::Filter(sub))
    }

    /// Conditional single hop: sub-fragment results if any, else pass
    /// through unchanged.
    pub fn optional(self, sub: Traversal) -> Self {
        self.push(Step::Optional(sub))
    }

    // ==================== Transformation ====================

    /// Replace each traverser with the first result of the sub-fragment.
    pub fn map(self, sub: Traversal) -> Self {
        self.push(Step::Map(sub))
    }

    /// Replace each traverser with all results of the sub-fragment.
    pub fn flat_map(self, sub: Traversal) -> Self {
        self.push(Step::FlatMap(sub))
    }

    /// Project each vertex into a named record.
    pub fn project(self, fields: Vec<(&str, Traversal)>) -> Self {
        self.push(Step::Project(
            fields
                .into_iter()
                .map(|(name, sub)| (name.to_string(), sub))
                .collect(),
        ))
    }

    /// Yield the current vertex's identifier.
    pub fn id(self) -> Self {
        self.push(Step::Id)
    }

    /// Yield the value of the given property (null if absent).
    pub fn value(self, key: impl Into<String>) -> Self {
        self.push(Step::PropertyValue(key.into()))
    }

    /// Fold the whole current result set into a single list token.
    pub fn collect_list(self) -> Self {
        self.push(Step::CollectList)
    }

    // ==================== Checkpoints ====================

    /// Stash the current traversers under a named checkpoint and pass
    /// them through. Checkpoint sets have set semantics.
    pub fn aggregate(self, key: impl Into<String>) -> Self {
        self.push(Step::Aggregate(key.into()))
    }

    /// Recall a named checkpoint set, replacing the current traversers.
    pub fn select(self, key: impl Into<String>) -> Self {
        self.push(Step::Select(key.into()))
    }

    /// Spread a recalled set or list into individual traversers.
    pub fn flatten(self) -> Self {
        self.push(Step::Flatten)
    }

    /// Drop duplicate traversers, preserving first-seen order.
    pub fn dedup(self) -> Self {
        self.push(Step::Dedup)
    }

    /// Run the sub-fragment for its effects; traversers pass through.
    pub fn side_effect(self, sub: Traversal) -> Self {
        self.push(Step::SideEffect(sub))
    }

    // ==================== Mutation ====================

    /// Write a property on the current vertex.
    pub fn set_property(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(Step::SetProperty {
            key: key.into(),
            value: value.into(),
        })
    }

    /// Locate the vertex owning `uuid` or create it under `label`, then
    /// apply `then` to it.
    pub fn upsert(
        self,
        label: impl Into<String>,
        uuid: impl Into<String>,
        then: Traversal,
    ) -> Self {
        self.push(Step::Upsert {
            label: label.into(),
            uuid: uuid.into(),
            then,
        })
    }

    /// Draw an edge from each result of the `from`-fragment to the current
    /// vertex, skipping edges that already exist.
    pub fn add_edge_from(self, label: impl Into<String>, from: Traversal) -> Self {
        self.push(Step::AddEdgeFrom {
            label: label.into(),
            from,
        })
    }
}
