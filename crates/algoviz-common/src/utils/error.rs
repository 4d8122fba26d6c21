//! Error types for Algoviz.
//!
//! Every failure in the engine is local and recoverable: the caller is told
//! why an operation was refused and the structure is left unmodified.

use crate::types::{NodeId, ValueType};
use thiserror::Error;

/// Result type alias using the Algoviz error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by containers and algorithms.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A position outside the container was addressed.
    #[error("invalid index {index} for length {len}")]
    InvalidIndex {
        /// The requested position.
        index: usize,
        /// The container length at the time of the request.
        len: usize,
    },

    /// A value of the wrong kind was offered to a typed container.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Kind held by the container.
        expected: ValueType,
        /// Kind of the offered value.
        found: ValueType,
    },

    /// A node looked up by id or rendered value does not exist.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// Dijkstra was asked to run on a graph with a negative edge weight.
    #[error("negative edge weight {weight} on {from} -> {to}: Dijkstra requires non-negative weights")]
    NegativeWeight {
        /// Source of the offending edge.
        from: NodeId,
        /// Target of the offending edge.
        to: NodeId,
        /// The negative weight.
        weight: f64,
    },

    /// A tree edit does not fit the tree's shape (occupied child slot, full
    /// N-ary node, second root).
    #[error("tree shape violation: {0}")]
    ShapeViolation(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Checks that `found` matches the container kind `expected`.
    ///
    /// # Errors
    ///
    /// Returns `Error::TypeMismatch` if the kinds differ.
    pub fn check_type(expected: ValueType, found: ValueType) -> Result<()> {
        if expected == found {
            Ok(())
        } else {
            Err(Error::TypeMismatch { expected, found })
        }
    }
}
