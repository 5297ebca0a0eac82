//! Quiver Traversal Engine
//!
//! The reference executor for composed traversal fragments: interprets
//! fragments against `quiver-graph` storage, owns the upsert-by-uuid
//! root operation of the write path, and maps storage constraint
//! violations onto the caller-facing error taxonomy.
//!
//! Execution, locking and transactional semantics live here (or in
//! whatever engine replaces this one) — never in the fragment builders,
//! which are pure values.

mod error;
mod executor;

pub use error::{EngineError, EngineResult};
pub use executor::{execute, execute_unfold};
