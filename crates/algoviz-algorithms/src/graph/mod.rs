//! Graph algorithms.
//!
//! Three single-pair shortest path algorithms share the [`PathResult`] shape:
//!
//! | Algorithm | Negative weights | Cost |
//! |-----------|------------------|------|
//! | Dijkstra | refused | O(V²), linear scan for the next node |
//! | Bellman-Ford | allowed, cycles reported | O(V·E) |
//! | Floyd-Warshall | allowed | O(V³), answers all pairs |
//!
//! [`all_simple_paths`] enumerates every cycle-free route between two nodes,
//! capped at [`DEFAULT_PATH_LIMIT`] paths.

mod bellman_ford;
mod dijkstra;
mod floyd_warshall;
mod paths;
mod state;

pub use bellman_ford::bellman_ford;
pub use dijkstra::dijkstra;
pub use floyd_warshall::{FloydWarshall, floyd_warshall, floyd_warshall_path};
pub use paths::{DEFAULT_PATH_LIMIT, SimplePath, all_simple_paths};

use algoviz_common::{Error, NodeId, Result};
use algoviz_core::{Graph, Observer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Instrumentation points of the graph algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GraphEvent {
    /// Dijkstra settled a node at its final distance.
    Settle {
        /// The settled node.
        node: NodeId,
        /// Its final distance.
        distance: f64,
    },
    /// An edge relaxation lowered a tentative distance.
    Relax {
        /// Edge source.
        from: NodeId,
        /// Edge target.
        to: NodeId,
        /// New tentative distance of `to`.
        distance: f64,
    },
    /// A Bellman-Ford round finished.
    Round {
        /// One-based round number.
        round: usize,
        /// Whether the round lowered any distance.
        changed: bool,
    },
    /// Floyd-Warshall found a shorter `from -> to` route through `via`.
    Improve {
        /// Intermediate node.
        via: NodeId,
        /// Route start.
        from: NodeId,
        /// Route end.
        to: NodeId,
        /// New distance.
        distance: f64,
    },
    /// The path enumeration completed a path.
    PathFound {
        /// One-based index of the path.
        index: usize,
    },
}

/// The shortest path algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathAlgorithm {
    /// Greedy settling with a linear scan; non-negative weights only.
    Dijkstra,
    /// Repeated full-edge relaxation.
    BellmanFord,
    /// All-pairs dynamic programming with next-hop reconstruction.
    FloydWarshall,
}

impl PathAlgorithm {
    /// All algorithms, in menu order.
    pub const ALL: [PathAlgorithm; 3] = [
        PathAlgorithm::Dijkstra,
        PathAlgorithm::BellmanFord,
        PathAlgorithm::FloydWarshall,
    ];

    /// Returns the display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dijkstra => "Dijkstra",
            Self::BellmanFord => "Bellman-Ford",
            Self::FloydWarshall => "Floyd-Warshall",
        }
    }

    /// Returns the pseudo-code listing.
    #[must_use]
    pub const fn pseudo_code(self) -> &'static [&'static str] {
        match self {
            Self::Dijkstra => dijkstra::PSEUDO_CODE,
            Self::BellmanFord => bellman_ford::PSEUDO_CODE,
            Self::FloydWarshall => floyd_warshall::PSEUDO_CODE,
        }
    }

    /// Parses a name such as `"dijkstra"`, `"bellman-ford"` or `"floyd"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Some(Self::Dijkstra),
            "bellman" | "bellman-ford" | "bellman_ford" => Some(Self::BellmanFord),
            "floyd" | "floyd-warshall" | "floyd_warshall" => Some(Self::FloydWarshall),
            _ => None,
        }
    }
}

impl fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a single-pair shortest path query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// Algorithm that produced the result.
    pub algorithm: PathAlgorithm,
    /// Start node.
    pub source: NodeId,
    /// End node.
    pub destination: NodeId,
    /// Total weight; infinite when the destination is unreachable.
    pub distance: f64,
    /// Nodes from source to destination; empty when unreachable.
    pub path: Vec<NodeId>,
    /// Set when a negative cycle was detected. Distances are then only the
    /// best found within the bounded work.
    pub negative_cycle: bool,
}

impl PathResult {
    /// Returns `true` if a path was found.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }

    /// Renders the path with node labels, e.g. `A -> C -> B`, or
    /// `no path found`.
    #[must_use]
    pub fn path_text(&self, graph: &Graph) -> String {
        if !self.is_reachable() {
            return "no path found".to_string();
        }
        render_path(graph, &self.path)
    }
}

/// All simple paths plus the shortest path between the same pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathReport {
    /// Every simple path found, up to the limit.
    pub all_paths: Vec<SimplePath>,
    /// The shortest path.
    pub shortest: PathResult,
}

/// Runs `algorithm` from `source` to `destination`.
///
/// # Errors
///
/// Returns `Error::NodeNotFound` if either endpoint is missing, and
/// `Error::NegativeWeight` if Dijkstra is asked to run on a graph with a
/// negative edge.
pub fn shortest_path<O>(
    graph: &Graph,
    algorithm: PathAlgorithm,
    source: NodeId,
    destination: NodeId,
    observer: &mut O,
) -> Result<PathResult>
where
    O: Observer<GraphEvent> + ?Sized,
{
    let result = match algorithm {
        PathAlgorithm::Dijkstra => dijkstra(graph, source, destination, observer)?,
        PathAlgorithm::BellmanFord => bellman_ford(graph, source, destination, observer)?,
        PathAlgorithm::FloydWarshall => floyd_warshall_path(graph, source, destination, observer)?,
    };
    if !result.is_reachable() {
        tracing::warn!(%source, %destination, algorithm = algorithm.name(), "no path found");
    }
    Ok(result)
}

/// Enumerates simple paths (up to `limit`) and runs `algorithm` on the same
/// pair.
///
/// # Errors
///
/// Same as [`shortest_path`]. A Dijkstra refusal is reported before any
/// enumeration runs.
pub fn find_paths<O>(
    graph: &Graph,
    algorithm: PathAlgorithm,
    source: NodeId,
    destination: NodeId,
    limit: usize,
    observer: &mut O,
) -> Result<PathReport>
where
    O: Observer<GraphEvent> + ?Sized,
{
    if algorithm == PathAlgorithm::Dijkstra {
        check_non_negative(graph)?;
    }
    let all_paths = all_simple_paths(graph, source, destination, limit, observer)?;
    let shortest = shortest_path(graph, algorithm, source, destination, observer)?;
    Ok(PathReport { all_paths, shortest })
}

/// Renders node labels joined by ` -> `.
#[must_use]
pub fn render_path(graph: &Graph, path: &[NodeId]) -> String {
    path.iter()
        .map(|&id| graph.label(id))
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub(crate) fn check_endpoints(graph: &Graph, source: NodeId, destination: NodeId) -> Result<()> {
    for id in [source, destination] {
        if !graph.contains(id) {
            return Err(Error::NodeNotFound(id.to_string()));
        }
    }
    Ok(())
}

pub(crate) fn check_non_negative(graph: &Graph) -> Result<()> {
    match graph.first_negative_edge() {
        Some((from, to, weight)) => {
            tracing::warn!(%from, %to, weight, "dijkstra refused: negative edge weight");
            Err(Error::NegativeWeight { from, to, weight })
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_common::{Value, ValueType};
    use algoviz_core::NoopObserver;

    /// A->B(4), A->C(1), C->B(1)
    fn triangle() -> (Graph, NodeId, NodeId, NodeId) {
        let mut g = Graph::new(ValueType::Character, true);
        let a = g.add_node(Value::from('A')).unwrap();
        let b = g.add_node(Value::from('B')).unwrap();
        let c = g.add_node(Value::from('C')).unwrap();
        g.add_edge(a, b, 4.0).unwrap();
        g.add_edge(a, c, 1.0).unwrap();
        g.add_edge(c, b, 1.0).unwrap();
        (g, a, b, c)
    }

    #[test]
    fn test_all_algorithms_agree_on_triangle() {
        let (g, a, b, c) = triangle();
        for algo in PathAlgorithm::ALL {
            let r = shortest_path(&g, algo, a, b, &mut NoopObserver).unwrap();
            assert_eq!(r.distance, 2.0, "{algo}");
            assert_eq!(r.path, vec![a, c, b], "{algo}");
            assert_eq!(r.path_text(&g), "A -> C -> B");
        }
    }

    #[test]
    fn test_unreachable_is_not_an_error() {
        let (g, a, b, _) = triangle();
        for algo in PathAlgorithm::ALL {
            let r = shortest_path(&g, algo, b, a, &mut NoopObserver).unwrap();
            assert!(!r.is_reachable());
            assert!(r.path.is_empty());
            assert_eq!(r.path_text(&g), "no path found");
        }
    }

    #[test]
    fn test_missing_endpoint() {
        let (g, a, _, _) = triangle();
        for algo in PathAlgorithm::ALL {
            let err = shortest_path(&g, algo, a, NodeId::new(42), &mut NoopObserver);
            assert!(matches!(err, Err(Error::NodeNotFound(_))));
        }
    }

    #[test]
    fn test_find_paths_report() {
        let (g, a, b, c) = triangle();
        let report = find_paths(&g, PathAlgorithm::Dijkstra, a, b, DEFAULT_PATH_LIMIT, &mut NoopObserver).unwrap();
        assert_eq!(report.all_paths.len(), 2);
        assert_eq!(report.all_paths[0].nodes, vec![a, b]);
        assert_eq!(report.all_paths[0].cost, 4.0);
        assert_eq!(report.all_paths[1].nodes, vec![a, c, b]);
        assert_eq!(report.shortest.distance, 2.0);
    }

    #[test]
    fn test_find_paths_refuses_negative_dijkstra() {
        let (mut g, a, b, c) = triangle();
        g.add_edge(b, c, -5.0).unwrap();
        let mut events = 0;
        let result = find_paths(&g, PathAlgorithm::Dijkstra, a, b, 50, &mut |_: GraphEvent| events += 1);
        assert!(matches!(result, Err(Error::NegativeWeight { .. })));
        assert_eq!(events, 0);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(PathAlgorithm::from_name("Bellman-Ford"), Some(PathAlgorithm::BellmanFord));
        assert_eq!(PathAlgorithm::from_name("floyd"), Some(PathAlgorithm::FloydWarshall));
        assert_eq!(PathAlgorithm::from_name("astar"), None);
    }
}
