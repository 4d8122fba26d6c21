//! All simple paths by depth-first search.

use super::{GraphEvent, check_endpoints};
use algoviz_common::{NodeId, Result};
use algoviz_core::{Graph, Observer};
use serde::{Deserialize, Serialize};

/// Maximum number of paths reported by default.
pub const DEFAULT_PATH_LIMIT: usize = 50;

/// A cycle-free path and its total weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplePath {
    /// Nodes from source to destination.
    pub nodes: Vec<NodeId>,
    /// Sum of the edge weights along the path. Between two nodes joined by
    /// several edges, the first inserted edge counts.
    pub cost: f64,
}

/// Enumerates simple paths from `source` to `destination`, stopping after
/// `limit` paths. Paths are reported in DFS order, following edges in
/// insertion order. A node is marked only while it is on the current path.
///
/// # Errors
///
/// Returns `Error::NodeNotFound` for a missing endpoint.
pub fn all_simple_paths<O>(
    graph: &Graph,
    source: NodeId,
    destination: NodeId,
    limit: usize,
    observer: &mut O,
) -> Result<Vec<SimplePath>>
where
    O: Observer<GraphEvent> + ?Sized,
{
    check_endpoints(graph, source, destination)?;
    let mut search = PathSearch {
        graph,
        destination,
        limit,
        on_path: vec![false; graph.max_id() as usize + 1],
        current: Vec::new(),
        found: Vec::new(),
        observer,
    };
    search.visit(source);
    tracing::debug!(%source, %destination, paths = search.found.len(), "simple paths enumerated");
    Ok(search.found)
}

struct PathSearch<'a, O: ?Sized> {
    graph: &'a Graph,
    destination: NodeId,
    limit: usize,
    on_path: Vec<bool>,
    current: Vec<NodeId>,
    found: Vec<SimplePath>,
    observer: &'a mut O,
}

impl<O> PathSearch<'_, O>
where
    O: Observer<GraphEvent> + ?Sized,
{
    fn visit(&mut self, node: NodeId) {
        if self.found.len() >= self.limit {
            return;
        }
        self.on_path[node.index()] = true;
        self.current.push(node);

        if node == self.destination {
            let cost = self
                .current
                .windows(2)
                .map(|pair| self.graph.weight(pair[0], pair[1]).unwrap_or(0.0))
                .sum();
            self.found.push(SimplePath {
                nodes: self.current.clone(),
                cost,
            });
            self.observer.on_event(GraphEvent::PathFound {
                index: self.found.len(),
            });
        } else {
            let graph = self.graph;
            for edge in graph.edges(node) {
                if !self.on_path[edge.target.index()] {
                    self.visit(edge.target);
                }
            }
        }

        self.current.pop();
        self.on_path[node.index()] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_common::{Value, ValueType};
    use algoviz_core::NoopObserver;

    fn complete(n: i32) -> (Graph, Vec<NodeId>) {
        let mut g = Graph::new(ValueType::Integer, false);
        let ids: Vec<NodeId> = (0..n).map(|i| g.add_node(Value::Integer(i)).unwrap()).collect();
        for i in 0..ids.len() {
            for j in i + 1..ids.len() {
                g.add_edge(ids[i], ids[j], 1.0).unwrap();
            }
        }
        (g, ids)
    }

    #[test]
    fn test_complete_graph_small() {
        // K4 between two fixed nodes: 1 + 2 + 2 = 5 simple paths
        let (g, ids) = complete(4);
        let paths = all_simple_paths(&g, ids[0], ids[3], DEFAULT_PATH_LIMIT, &mut NoopObserver).unwrap();
        assert_eq!(paths.len(), 5);
        assert_eq!(paths[0].nodes, vec![ids[0], ids[1], ids[2], ids[3]]);
        assert_eq!(paths[0].cost, 3.0);
    }

    #[test]
    fn test_limit_caps_output() {
        let (g, ids) = complete(8);
        let paths = all_simple_paths(&g, ids[0], ids[7], DEFAULT_PATH_LIMIT, &mut NoopObserver).unwrap();
        assert_eq!(paths.len(), DEFAULT_PATH_LIMIT);
        for p in &paths {
            let mut seen = p.nodes.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), p.nodes.len());
        }
    }

    #[test]
    fn test_source_is_destination() {
        let (g, ids) = complete(3);
        let paths = all_simple_paths(&g, ids[1], ids[1], 50, &mut NoopObserver).unwrap();
        assert_eq!(paths, vec![SimplePath { nodes: vec![ids[1]], cost: 0.0 }]);
    }

    #[test]
    fn test_no_path() {
        let mut g = Graph::new(ValueType::Integer, true);
        let a = g.add_node(Value::Integer(1)).unwrap();
        let b = g.add_node(Value::Integer(2)).unwrap();
        g.add_edge(b, a, 1.0).unwrap();
        assert!(all_simple_paths(&g, a, b, 50, &mut NoopObserver).unwrap().is_empty());
    }
}
