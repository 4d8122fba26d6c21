//! # algoviz-algorithms
//!
//! Tree and graph algorithms over the containers in `algoviz-core`.
//!
//! Every algorithm is a free function taking the container and an
//! [`Observer`](algoviz_core::Observer) for its event type. Pass
//! [`NoopObserver`](algoviz_core::NoopObserver) when nothing is watching.
//!
//! ## Modules
//!
//! - [`tree`] - BST and N-ary insertion, search, deletion, rebalancing,
//!   traversals, shape conversion
//! - [`graph`] - Dijkstra, Bellman-Ford, Floyd-Warshall, all simple paths

pub mod graph;
pub mod tree;

pub use graph::{GraphEvent, PathAlgorithm, PathReport, PathResult, SimplePath};
pub use tree::{Traversal, TreeEvent, TreeStats};
