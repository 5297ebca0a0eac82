//! Quiver Traversal Fragments
//!
//! The traversal fragment builder: small, reusable graph-query fragments
//! (filters, projections, optional hops, named checkpoints, write steps)
//! composed into larger ones. Fragments are immutable values — every
//! combinator returns a new fragment — and building one performs no I/O;
//! execution belongs to the engine.
//!
//! Also home to the typed projection model: `Record` and `Token`, the
//! strongly typed result rows produced by executing a `project` step.

mod record;
mod step;
#[allow(clippy::module_inception)]
mod traversal;

pub use record::{Record, RecordError, Token};
pub use step::Step;
pub use traversal::Traversal;
