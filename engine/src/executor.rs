//! Traversal execution against graph storage.
//!
//! The executor interprets traversal fragments step by step over a set of
//! traversers. Side-effect checkpoints are shared across the whole
//! execution, including nested sub-fragments, so checkpoint names filled
//! deep inside a composed write are visible to the steps that recall them.

use crate::error::{EngineError, EngineResult};
use quiver_core::{props, Value, VertexId};
use quiver_graph::{Graph, UNIQUE_ID_KEY};
use quiver_traversal::{Record, Step, Token, Traversal};
use std::collections::HashMap;

/// A position in an executing traversal.
#[derive(Debug, Clone, PartialEq)]
enum Traverser {
    /// At a vertex.
    Vertex(VertexId),
    /// Carrying a projected value.
    Token(Token),
    /// Carrying a recalled checkpoint set, awaiting `flatten`.
    Set(Vec<Traverser>),
}

impl Traverser {
    fn into_token(self) -> Token {
        match self {
            Traverser::Vertex(id) => Token::Id(id),
            Traverser::Token(token) => token,
            Traverser::Set(items) => {
                Token::List(items.into_iter().map(Traverser::into_token).collect())
            }
        }
    }

    fn vertex(&self, step: &'static str) -> EngineResult<VertexId> {
        match self {
            Traverser::Vertex(id) => Ok(*id),
            _ => Err(EngineError::expected_vertex(step)),
        }
    }
}

/// Named checkpoint sets, shared across one execution.
type Checkpoints = HashMap<String, Vec<Traverser>>;

/// Execute a traversal from the given start vertices, returning the
/// final result tokens.
pub fn execute(
    graph: &mut Graph,
    start: &[VertexId],
    traversal: &Traversal,
) -> EngineResult<Vec<Token>> {
    tracing::debug!(
        starts = start.len(),
        steps = traversal.steps().len(),
        read_only = traversal.is_read_only(),
        "executing traversal"
    );
    let mut checkpoints = Checkpoints::new();
    let input = start.iter().copied().map(Traverser::Vertex).collect();
    let output = run(graph, input, traversal, &mut checkpoints)?;
    Ok(output.into_iter().map(Traverser::into_token).collect())
}

/// Execute a write handle's fragment: upsert the root vertex by its
/// unique id under the given label, then apply the fragment to it.
/// Returns the root vertex id.
pub fn execute_unfold(
    graph: &mut Graph,
    label: &str,
    uuid: &str,
    traversal: &Traversal,
) -> EngineResult<VertexId> {
    let root = upsert_vertex(graph, label, uuid)?;
    let mut checkpoints = Checkpoints::new();
    run(
        graph,
        vec![Traverser::Vertex(root)],
        traversal,
        &mut checkpoints,
    )?;
    Ok(root)
}

/// Locate the vertex owning `uuid` or create it under `label` with the
/// uuid as its only property.
fn upsert_vertex(graph: &mut Graph, label: &str, uuid: &str) -> EngineResult<VertexId> {
    match graph.find_by_uuid(uuid) {
        Some(id) => {
            let actual = graph
                .vertex(id)
                .map(|v| v.label.clone())
                .unwrap_or_default();
            if actual != label {
                return Err(EngineError::upsert_label_mismatch(uuid, label, actual));
            }
            tracing::debug!(%uuid, label, vertex = %id, "upsert located existing vertex");
            Ok(id)
        }
        None => {
            let id = graph.create_vertex(label, props! { UNIQUE_ID_KEY => uuid })?;
            tracing::debug!(%uuid, label, vertex = %id, "upsert created vertex");
            Ok(id)
        }
    }
}

fn run(
    graph: &mut Graph,
    input: Vec<Traverser>,
    traversal: &Traversal,
    checkpoints: &mut Checkpoints,
) -> EngineResult<Vec<Traverser>> {
    let mut current = input;
    for step in traversal.steps() {
        current = apply(graph, current, step, checkpoints)?;
    }
    Ok(current)
}

fn apply(
    graph: &mut Graph,
    current: Vec<Traverser>,
    step: &Step,
    checkpoints: &mut Checkpoints,
) -> EngineResult<Vec<Traverser>> {
    let mut next = Vec::new();

    match step {
        Step::Outgoing(label) => {
            for traverser in current {
                let vertex = traverser.vertex("outgoing")?;
                let targets: Vec<VertexId> = graph
                    .edges_from(vertex, Some(label))
                    .filter_map(|edge_id| graph.edge(edge_id).map(|e| e.to))
                    .collect();
                next.extend(targets.into_iter().map(Traverser::Vertex));
            }
        }

        Step::Incoming(label) => {
            for traverser in current {
                let vertex = traverser.vertex("incoming")?;
                let sources: Vec<VertexId> = graph
                    .edges_to(vertex, Some(label))
                    .filter_map(|edge_id| graph.edge(edge_id).map(|e| e.from))
                    .collect();
                next.extend(sources.into_iter().map(Traverser::Vertex));
            }
        }

        Step::HasLabel(label) => {
            for traverser in current {
                let vertex = traverser.vertex("has_label")?;
                if graph.vertex(vertex).map(|v| v.label == *label).unwrap_or(false) {
                    next.push(traverser);
                }
            }
        }

        Step::Has { key, value } => {
            for traverser in current {
                let vertex = traverser.vertex("has")?;
                let matches = graph
                    .vertex(vertex)
                    .and_then(|v| v.property(key))
                    .map(|stored| stored == value)
                    .unwrap_or(false);
                if matches {
                    next.push(traverser);
                }
            }
        }

        Step::Filter(sub) => {
            for traverser in current {
                let result = run(graph, vec![traverser.clone()], sub, checkpoints)?;
                if !result.is_empty() {
                    next.push(traverser);
                }
            }
        }

        Step::Optional(sub) => {
            for traverser in current {
                let result = run(graph, vec![traverser.clone()], sub, checkpoints)?;
                if result.is_empty() {
                    next.push(traverser);
                } else {
                    next.extend(result);
                }
            }
        }

        Step::Map(sub) => {
            for traverser in current {
                let result = run(graph, vec![traverser], sub, checkpoints)?;
                if let Some(first) = result.into_iter().next() {
                    next.push(first);
                }
            }
        }

        Step::FlatMap(sub) => {
            for traverser in current {
                next.extend(run(graph, vec![traverser], sub, checkpoints)?);
            }
        }

        Step::Project(fields) => {
            for traverser in current {
                let mut record = Record::new();
                for (name, sub) in fields {
                    let result = run(graph, vec![traverser.clone()], sub, checkpoints)?;
                    let token = result
                        .into_iter()
                        .next()
                        .map(Traverser::into_token)
                        .unwrap_or(Token::Scalar(Value::Null));
                    record.insert(name.clone(), token);
                }
                next.push(Traverser::Token(Token::Record(record)));
            }
        }

        Step::Id => {
            for traverser in current {
                let vertex = traverser.vertex("id")?;
                next.push(Traverser::Token(Token::Id(vertex)));
            }
        }

        Step::PropertyValue(key) => {
            for traverser in current {
                let vertex = traverser.vertex("value")?;
                let value = graph
                    .vertex(vertex)
                    .and_then(|v| v.property(key))
                    .cloned()
                    .unwrap_or(Value::Null);
                next.push(Traverser::Token(Token::Scalar(value)));
            }
        }

        Step::CollectList => {
            let items = current.into_iter().map(Traverser::into_token).collect();
            next.push(Traverser::Token(Token::List(items)));
        }

        Step::Aggregate(key) => {
            let set = checkpoints.entry(key.clone()).or_default();
            for traverser in &current {
                if !set.contains(traverser) {
                    set.push(traverser.clone());
                }
            }
            next = current;
        }

        Step::Select(key) => {
            let set = checkpoints.get(key).cloned().unwrap_or_default();
            next.push(Traverser::Set(set));
        }

        Step::Flatten => {
            for traverser in current {
                match traverser {
                    Traverser::Set(items) => next.extend(items),
                    Traverser::Token(Token::List(items)) => {
                        next.extend(items.into_iter().map(Traverser::Token));
                    }
                    other => next.push(other),
                }
            }
        }

        Step::Dedup => {
            for traverser in current {
                if !next.contains(&traverser) {
                    next.push(traverser);
                }
            }
        }

        Step::SideEffect(sub) => {
            for traverser in &current {
                run(graph, vec![traverser.clone()], sub, checkpoints)?;
            }
            next = current;
        }

        Step::SetProperty { key, value } => {
            for traverser in current {
                let vertex = traverser.vertex("set_property")?;
                graph.set_vertex_property(vertex, key, value.clone())?;
                next.push(traverser);
            }
        }

        Step::Upsert { label, uuid, then } => {
            for _ in current {
                let vertex = upsert_vertex(graph, label, uuid)?;
                run(
                    graph,
                    vec![Traverser::Vertex(vertex)],
                    then,
                    checkpoints,
                )?;
                next.push(Traverser::Vertex(vertex));
            }
        }

        Step::AddEdgeFrom { label, from } => {
            for traverser in current {
                let to = traverser.vertex("add_edge_from")?;
                let sources = run(graph, vec![traverser.clone()], from, checkpoints)?;
                for source in sources {
                    let from_vertex = source.vertex("add_edge_from")?;
                    // Idempotent wiring: an existing identical edge is
                    // left untouched.
                    if !graph.has_edge(label, from_vertex, to) {
                        graph.create_edge(label, from_vertex, to)?;
                    }
                }
                next.push(traverser);
            }
        }
    }

    Ok(next)
}
