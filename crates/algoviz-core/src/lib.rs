//! # algoviz-core
//!
//! Core layer for Algoviz: typed containers, the sorting engine and the
//! step-observer contract.
//!
//! This crate provides the data structures every algorithm operates on. It
//! depends only on `algoviz-common`.
//!
//! ## Modules
//!
//! - [`containers`] - Array, linked list, tree arena and graph
//! - [`sorting`] - Bubble, insertion, shell and quick sort over any buffer
//! - [`observer`] - Instrumentation callbacks used for animation
//! - [`render`] - Text rendering with accent hints

pub mod containers;
pub mod observer;
pub mod render;
pub mod sorting;

// Re-export commonly used types
pub use containers::{Array, Children, Edge, Graph, GraphNode, LinkedList, Side, Tree, TreeShape};
pub use observer::{NoopObserver, Observer, SortObserver};
pub use render::{RenderedText, Segment};
pub use sorting::{SortAlgorithm, SortEvent, SortOutcome, SortStats, SortStep};
