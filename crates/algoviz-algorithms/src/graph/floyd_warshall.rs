//! Floyd-Warshall all-pairs shortest paths with a next-hop matrix.

use super::{GraphEvent, PathAlgorithm, PathResult, check_endpoints};
use algoviz_common::utils::hash::{FastHashMap, map_with_capacity};
use algoviz_common::{NodeId, Result};
use algoviz_core::{Graph, Observer};

pub(super) const PSEUDO_CODE: &[&str] = &[
    "FLOYD_WARSHALL(G):",
    "  dist = weight matrix (u, v)",
    "  for k from 1 to N:",
    "    for i from 1 to N:",
    "      for j from 1 to N:",
    "        if dist[i][j] > dist[i][k] + dist[k][j]:",
    "          dist[i][j] = dist[i][k] + dist[k][j]",
    "          next[i][j] = next[i][k]",
];

/// Dense all-pairs distances and next hops.
///
/// Rows and columns follow the graph's node insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct FloydWarshall {
    order: Vec<NodeId>,
    index: FastHashMap<NodeId, usize>,
    dist: Vec<f64>,
    next: Vec<Option<usize>>,
}

impl FloydWarshall {
    /// Returns the node order of the matrix rows.
    #[must_use]
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    /// Returns the shortest distance from `from` to `to`, infinite when
    /// unreachable or unknown.
    #[must_use]
    pub fn distance(&self, from: NodeId, to: NodeId) -> f64 {
        match (self.index.get(&from), self.index.get(&to)) {
            (Some(&i), Some(&j)) => self.dist[i * self.order.len() + j],
            _ => f64::INFINITY,
        }
    }

    /// Walks next-hop links from `from` to `to`. Empty when unreachable.
    #[must_use]
    pub fn path(&self, from: NodeId, to: NodeId) -> Vec<NodeId> {
        let n = self.order.len();
        let (Some(&start), Some(&end)) = (self.index.get(&from), self.index.get(&to)) else {
            return Vec::new();
        };
        if self.dist[start * n + end].is_infinite() {
            return Vec::new();
        }
        let mut path = vec![from];
        let mut current = start;
        while current != end && path.len() <= n {
            let Some(hop) = self.next[current * n + end] else {
                break;
            };
            path.push(self.order[hop]);
            current = hop;
        }
        path
    }

    /// Returns `true` if some node reaches itself with negative total weight.
    #[must_use]
    pub fn has_negative_cycle(&self) -> bool {
        let n = self.order.len();
        (0..n).any(|i| self.dist[i * n + i] < 0.0)
    }
}

/// Computes all-pairs shortest distances.
pub fn floyd_warshall<O>(graph: &Graph, observer: &mut O) -> FloydWarshall
where
    O: Observer<GraphEvent> + ?Sized,
{
    let order = graph.node_ids();
    let n = order.len();
    let mut index = map_with_capacity(n);
    for (i, &id) in order.iter().enumerate() {
        index.insert(id, i);
    }

    let mut dist = vec![f64::INFINITY; n * n];
    let mut next = vec![None; n * n];
    for i in 0..n {
        dist[i * n + i] = 0.0;
    }
    for (i, node) in graph.nodes().enumerate() {
        for edge in node.edges() {
            if let Some(&j) = index.get(&edge.target) {
                if edge.weight < dist[i * n + j] {
                    dist[i * n + j] = edge.weight;
                    next[i * n + j] = Some(j);
                }
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let dik = dist[i * n + k];
            if dik.is_infinite() {
                continue;
            }
            for j in 0..n {
                let dkj = dist[k * n + j];
                if dkj.is_infinite() {
                    continue;
                }
                let candidate = dik + dkj;
                if candidate < dist[i * n + j] {
                    dist[i * n + j] = candidate;
                    next[i * n + j] = next[i * n + k];
                    observer.on_event(GraphEvent::Improve {
                        via: order[k],
                        from: order[i],
                        to: order[j],
                        distance: candidate,
                    });
                }
            }
        }
    }

    FloydWarshall {
        order,
        index,
        dist,
        next,
    }
}

/// Answers a single pair by computing the full matrix.
///
/// # Errors
///
/// Returns `Error::NodeNotFound` for a missing endpoint.
pub fn floyd_warshall_path<O>(
    graph: &Graph,
    source: NodeId,
    destination: NodeId,
    observer: &mut O,
) -> Result<PathResult>
where
    O: Observer<GraphEvent> + ?Sized,
{
    check_endpoints(graph, source, destination)?;
    let matrix = floyd_warshall(graph, observer);
    let distance = matrix.distance(source, destination);
    tracing::debug!(%source, %destination, distance, "floyd-warshall finished");
    Ok(PathResult {
        algorithm: PathAlgorithm::FloydWarshall,
        source,
        destination,
        distance,
        path: matrix.path(source, destination),
        negative_cycle: matrix.has_negative_cycle(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_common::{Value, ValueType};
    use algoviz_core::NoopObserver;

    #[test]
    fn test_all_pairs() {
        let mut g = Graph::new(ValueType::Integer, false);
        let ids: Vec<NodeId> = (0..4).map(|i| g.add_node(Value::Integer(i)).unwrap()).collect();
        g.add_edge(ids[0], ids[1], 1.0).unwrap();
        g.add_edge(ids[1], ids[2], 2.0).unwrap();
        g.add_edge(ids[2], ids[3], 3.0).unwrap();
        g.add_edge(ids[0], ids[3], 10.0).unwrap();

        let m = floyd_warshall(&g, &mut NoopObserver);
        assert_eq!(m.distance(ids[0], ids[3]), 6.0);
        assert_eq!(m.distance(ids[3], ids[0]), 6.0);
        assert_eq!(m.path(ids[3], ids[0]), vec![ids[3], ids[2], ids[1], ids[0]]);
        assert_eq!(m.distance(ids[2], ids[2]), 0.0);
        assert!(!m.has_negative_cycle());
    }

    #[test]
    fn test_parallel_edges_keep_cheapest() {
        let mut g = Graph::new(ValueType::Integer, true);
        let a = g.add_node(Value::Integer(1)).unwrap();
        let b = g.add_node(Value::Integer(2)).unwrap();
        g.add_edge(a, b, 7.0).unwrap();
        g.add_edge(a, b, 2.0).unwrap();
        let r = floyd_warshall_path(&g, a, b, &mut NoopObserver).unwrap();
        assert_eq!(r.distance, 2.0);
        assert_eq!(r.path, vec![a, b]);
    }

    #[test]
    fn test_unreachable() {
        let mut g = Graph::new(ValueType::Integer, true);
        let a = g.add_node(Value::Integer(1)).unwrap();
        let b = g.add_node(Value::Integer(2)).unwrap();
        let m = floyd_warshall(&g, &mut NoopObserver);
        assert!(m.distance(a, b).is_infinite());
        assert!(m.path(a, b).is_empty());
        assert_eq!(m.path(a, a), vec![a]);
    }

    #[test]
    fn test_negative_cycle_flag() {
        let mut g = Graph::new(ValueType::Integer, true);
        let a = g.add_node(Value::Integer(1)).unwrap();
        let b = g.add_node(Value::Integer(2)).unwrap();
        g.add_edge(a, b, 1.0).unwrap();
        g.add_edge(b, a, -3.0).unwrap();
        let r = floyd_warshall_path(&g, a, b, &mut NoopObserver).unwrap();
        assert!(r.negative_cycle);
    }
}
