//! Dijkstra's algorithm with a linear minimum scan.

use super::state::SearchState;
use super::{GraphEvent, PathAlgorithm, PathResult, check_endpoints, check_non_negative};
use algoviz_common::{NodeId, Result};
use algoviz_core::{Graph, Observer};

pub(super) const PSEUDO_CODE: &[&str] = &[
    "DIJKSTRA(G, source):",
    "  for each vertex v in G:",
    "    dist[v] = INFINITY, prev[v] = NULL",
    "  dist[source] = 0",
    "  Q = all vertices of G",
    "  while Q is not empty:",
    "    u = vertex in Q with minimum dist",
    "    remove u from Q",
    "    for each neighbor v of u:",
    "      alt = dist[u] + weight(u, v)",
    "      if alt < dist[v]:",
    "        dist[v] = alt, prev[v] = u",
];

/// Shortest path from `source` to `destination`.
///
/// Stops as soon as the destination is settled or no reachable unsettled
/// node remains. Ties between equal tentative distances go to the node
/// inserted first.
///
/// # Errors
///
/// Returns `Error::NegativeWeight` if any edge in the graph is negative; this
/// is checked before any work is done. Returns `Error::NodeNotFound` for a
/// missing endpoint.
pub fn dijkstra<O>(
    graph: &Graph,
    source: NodeId,
    destination: NodeId,
    observer: &mut O,
) -> Result<PathResult>
where
    O: Observer<GraphEvent> + ?Sized,
{
    check_non_negative(graph)?;
    check_endpoints(graph, source, destination)?;

    let mut state = SearchState::new(graph, source);
    for _ in 0..graph.node_count() {
        let mut next: Option<(NodeId, f64)> = None;
        for node in graph.nodes() {
            let id = node.id();
            let d = state.dist(id);
            if !state.visited[id.index()] && d.is_finite() && next.is_none_or(|(_, best)| d < best) {
                next = Some((id, d));
            }
        }
        let Some((u, du)) = next else { break };

        state.visited[u.index()] = true;
        observer.on_event(GraphEvent::Settle { node: u, distance: du });
        if u == destination {
            break;
        }

        for edge in graph.edges(u) {
            let v = edge.target;
            let candidate = du + edge.weight;
            if !state.visited[v.index()] && candidate < state.dist(v) {
                state.dist[v.index()] = candidate;
                state.prev[v.index()] = Some(u);
                observer.on_event(GraphEvent::Relax {
                    from: u,
                    to: v,
                    distance: candidate,
                });
            }
        }
    }

    let result = state.into_result(PathAlgorithm::Dijkstra, source, destination, graph.node_count());
    tracing::debug!(%source, %destination, distance = result.distance, "dijkstra finished");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_common::{Error, Value, ValueType};
    use algoviz_core::NoopObserver;

    #[test]
    fn test_prefers_cheaper_detour() {
        let mut g = Graph::new(ValueType::Character, true);
        let a = g.add_node(Value::from('A')).unwrap();
        let b = g.add_node(Value::from('B')).unwrap();
        let c = g.add_node(Value::from('C')).unwrap();
        g.add_edge(a, b, 4.0).unwrap();
        g.add_edge(a, c, 1.0).unwrap();
        g.add_edge(c, b, 1.0).unwrap();

        let r = dijkstra(&g, a, b, &mut NoopObserver).unwrap();
        assert_eq!(r.distance, 2.0);
        assert_eq!(r.path, vec![a, c, b]);
    }

    #[test]
    fn test_refuses_negative_weight_without_relaxing() {
        let mut g = Graph::new(ValueType::Integer, true);
        let a = g.add_node(Value::Integer(1)).unwrap();
        let b = g.add_node(Value::Integer(2)).unwrap();
        g.add_edge(a, b, -5.0).unwrap();

        let mut events = Vec::new();
        let err = dijkstra(&g, a, b, &mut |e: GraphEvent| events.push(e)).unwrap_err();
        assert_eq!(
            err,
            Error::NegativeWeight {
                from: a,
                to: b,
                weight: -5.0
            }
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_stops_at_destination() {
        // a -> b (1), b -> c (1); asking for b settles a and b only
        let mut g = Graph::new(ValueType::Integer, true);
        let a = g.add_node(Value::Integer(1)).unwrap();
        let b = g.add_node(Value::Integer(2)).unwrap();
        let c = g.add_node(Value::Integer(3)).unwrap();
        g.add_edge(a, b, 1.0).unwrap();
        g.add_edge(b, c, 1.0).unwrap();

        let mut settled = Vec::new();
        dijkstra(&g, a, b, &mut |e: GraphEvent| {
            if let GraphEvent::Settle { node, .. } = e {
                settled.push(node);
            }
        })
        .unwrap();
        assert_eq!(settled, vec![a, b]);
    }

    #[test]
    fn test_undirected_and_self_source() {
        let mut g = Graph::new(ValueType::Integer, false);
        let a = g.add_node(Value::Integer(1)).unwrap();
        let b = g.add_node(Value::Integer(2)).unwrap();
        g.add_edge(a, b, 3.0).unwrap();

        let back = dijkstra(&g, b, a, &mut NoopObserver).unwrap();
        assert_eq!(back.distance, 3.0);
        assert_eq!(back.path, vec![b, a]);

        let same = dijkstra(&g, a, a, &mut NoopObserver).unwrap();
        assert_eq!(same.distance, 0.0);
        assert_eq!(same.path, vec![a]);
    }
}
