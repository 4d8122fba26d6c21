//! Weighted graph.
//!
//! Nodes are kept in an [`IndexMap`] keyed by [`NodeId`], which preserves
//! insertion order for rendering while giving O(1) lookup by id. Ids start at
//! 1 and are never reused, so `max_id() + 1` bounds any id-indexed side table.
//!
//! In an undirected graph every edge insertion also records the mirror edge on
//! the target, so each node's edge list is its full neighborhood.

use algoviz_common::{Error, NodeId, Result, Value, ValueType};
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::fmt::Write;

/// An outgoing edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// The node this edge points to.
    pub target: NodeId,
    /// Edge weight; may be negative.
    pub weight: f64,
}

/// A graph node with its outgoing edges.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    id: NodeId,
    value: Value,
    edges: SmallVec<[Edge; 4]>,
}

impl GraphNode {
    /// Returns the node id.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the node's value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the outgoing edges in insertion order.
    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// A directed or undirected weighted graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    value_type: ValueType,
    directed: bool,
    nodes: IndexMap<NodeId, GraphNode>,
    next_id: u32,
    edge_count: usize,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new(value_type: ValueType, directed: bool) -> Self {
        Self {
            value_type,
            directed,
            nodes: IndexMap::new(),
            next_id: 1,
            edge_count: 0,
        }
    }

    /// Returns the element kind.
    #[inline]
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Returns `true` if edges are one-way.
    #[inline]
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    /// Changes directedness. Only edges inserted afterwards are affected.
    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    /// Returns the number of nodes.
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of inserted edges. A mirrored undirected edge
    /// counts once.
    #[inline]
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the largest id assigned so far, or 0 for a fresh graph.
    #[inline]
    #[must_use]
    pub const fn max_id(&self) -> u32 {
        self.next_id - 1
    }

    // === Node Operations ===

    /// Adds a node and returns its freshly assigned id.
    ///
    /// # Errors
    ///
    /// Returns `Error::TypeMismatch` if `value` is of another kind.
    pub fn add_node(&mut self, value: Value) -> Result<NodeId> {
        Error::check_type(self.value_type, value.value_type())?;
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            GraphNode {
                id,
                value,
                edges: SmallVec::new(),
            },
        );
        tracing::debug!(%id, "graph node added");
        Ok(id)
    }

    /// Returns the node with `id`.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(&id)
    }

    /// Returns `true` if `id` names a node.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Iterates nodes in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &GraphNode> {
        self.nodes.values()
    }

    /// Returns the node ids in insertion order.
    #[must_use]
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    /// Returns the first node whose rendered value equals `text`.
    #[must_use]
    pub fn find_by_value(&self, text: &str) -> Option<NodeId> {
        self.nodes
            .values()
            .find(|n| n.value.render() == text)
            .map(|n| n.id)
    }

    /// Returns the rendered label of `id`, or its id if unknown.
    #[must_use]
    pub fn label(&self, id: NodeId) -> String {
        self.node(id)
            .map_or_else(|| id.to_string(), |n| n.value.render())
    }

    // === Edge Operations ===

    /// Adds an edge; in an undirected graph the mirror edge is added too.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeNotFound` if either endpoint does not exist.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> Result<()> {
        for id in [from, to] {
            if !self.contains(id) {
                return Err(Error::NodeNotFound(id.to_string()));
            }
        }
        self.push_edge(from, to, weight);
        if !self.directed && from != to {
            self.push_edge(to, from, weight);
        }
        self.edge_count += 1;
        tracing::debug!(%from, %to, weight, "graph edge added");
        Ok(())
    }

    /// Returns the outgoing edges of `id`, empty for an unknown id.
    #[must_use]
    pub fn edges(&self, id: NodeId) -> &[Edge] {
        self.node(id).map(GraphNode::edges).unwrap_or_default()
    }

    /// Returns the weight of the first edge from `from` to `to`.
    #[must_use]
    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.edges(from)
            .iter()
            .find(|e| e.target == to)
            .map(|e| e.weight)
    }

    /// Returns the first edge with a negative weight, as `(from, to, weight)`.
    #[must_use]
    pub fn first_negative_edge(&self) -> Option<(NodeId, NodeId, f64)> {
        self.nodes.values().find_map(|n| {
            n.edges
                .iter()
                .find(|e| e.weight < 0.0)
                .map(|e| (n.id, e.target, e.weight))
        })
    }

    /// Returns `true` if any edge weight is negative.
    #[must_use]
    pub fn has_negative_weight(&self) -> bool {
        self.first_negative_edge().is_some()
    }

    /// Removes every node and edge. Id assignment continues where it was.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edge_count = 0;
    }

    // === Rendering ===

    /// Renders the adjacency matrix with node labels as headers; missing
    /// edges show as `-`.
    #[must_use]
    pub fn adjacency_matrix_text(&self) -> String {
        let labels: Vec<String> = self.nodes.values().map(|n| n.value.render()).collect();
        let width = labels
            .iter()
            .map(String::len)
            .max()
            .unwrap_or(1)
            .max(4);

        let mut out = String::new();
        let _ = write!(out, "{:width$}", "");
        for label in &labels {
            let _ = write!(out, " {label:>width$}");
        }
        out.push('\n');
        for (row, node) in self.nodes.values().enumerate() {
            let _ = write!(out, "{:width$}", labels[row]);
            for col in self.nodes.keys() {
                let cell = self
                    .weight(node.id, *col)
                    .map_or_else(|| "-".to_string(), |w| w.to_string());
                let _ = write!(out, " {cell:>width$}");
            }
            out.push('\n');
        }
        out
    }

    /// Renders one line per node: `label: target(weight), ...`.
    #[must_use]
    pub fn adjacency_list_text(&self) -> String {
        let mut out = String::new();
        for node in self.nodes.values() {
            let _ = write!(out, "{}:", node.value.render());
            for (i, edge) in node.edges.iter().enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                let _ = write!(out, "{sep}{}({})", self.label(edge.target), edge.weight);
            }
            out.push('\n');
        }
        out
    }

    fn push_edge(&mut self, from: NodeId, to: NodeId, weight: f64) {
        if let Some(node) = self.nodes.get_mut(&from) {
            node.edges.push(Edge { target: to, weight });
        }
    }
}
