//! Typed containers.
//!
//! | Container | Storage |
//! |-----------|---------|
//! | [`Array`] | boxed slice built once at a known size |
//! | [`LinkedList`] | slot arena with a free list, singly or doubly linked |
//! | [`Tree`] | slot arena, binary or N-ary children, parent back-links |
//! | [`Graph`] | insertion-ordered node table with per-node edge lists |
//!
//! Every container is tagged with a [`ValueType`](algoviz_common::ValueType)
//! and rejects values of another kind.

mod array;
mod graph;
mod list;
mod tree;

pub use array::{ARRAY_STYLED_LIMIT, Array};
pub use graph::{Edge, Graph, GraphNode};
pub use list::{Iter as ListIter, LIST_STYLED_LIMIT, LinkedList};
pub use tree::{Children, DEFAULT_NARY_DEGREE, Side, Tree, TreeShape};
