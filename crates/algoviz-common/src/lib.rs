//! # algoviz-common
//!
//! Foundation layer for Algoviz: value kinds, identifiers, random value
//! generation and the shared error type.
//!
//! This crate provides the building blocks used by all other Algoviz crates.
//! It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (ValueType, Value, NodeId, arena handles)
//! - [`random`] - Seedable random value generation per structure profile
//! - [`utils`] - Utility functions and helpers (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod random;
pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use random::{RandomProfile, ValueGenerator};
pub use types::{ListNodeId, NodeId, TreeNodeId, Value, ValueType};
pub use utils::error::{Error, Result};
