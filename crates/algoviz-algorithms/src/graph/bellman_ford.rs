//! Bellman-Ford with early exit and negative-cycle reporting.

use super::state::SearchState;
use super::{GraphEvent, PathAlgorithm, PathResult, check_endpoints};
use algoviz_common::{NodeId, Result};
use algoviz_core::{Graph, Observer};

pub(super) const PSEUDO_CODE: &[&str] = &[
    "BELLMAN_FORD(G, source):",
    "  for each vertex v in G:",
    "    dist[v] = INFINITY, prev[v] = NULL",
    "  dist[source] = 0",
    "  repeat N - 1 times:",
    "    for each edge (u, v) with weight w:",
    "      if dist[u] + w < dist[v]:",
    "        dist[v] = dist[u] + w, prev[v] = u",
    "  for each edge (u, v) with weight w:",
    "    if dist[u] + w < dist[v]: report negative cycle",
];

/// Shortest path from `source` to `destination`, allowing negative weights.
///
/// Runs at most `V - 1` relaxation rounds over every edge, stopping early
/// after a round that changes nothing. A final read-only pass sets
/// [`PathResult::negative_cycle`] if some edge could still be relaxed; the
/// reported distance and path are those of the bounded rounds.
///
/// # Errors
///
/// Returns `Error::NodeNotFound` for a missing endpoint.
pub fn bellman_ford<O>(
    graph: &Graph,
    source: NodeId,
    destination: NodeId,
    observer: &mut O,
) -> Result<PathResult>
where
    O: Observer<GraphEvent> + ?Sized,
{
    check_endpoints(graph, source, destination)?;

    let mut state = SearchState::new(graph, source);
    let rounds = graph.node_count().saturating_sub(1);
    for round in 1..=rounds {
        let mut changed = false;
        for node in graph.nodes() {
            let u = node.id();
            let du = state.dist(u);
            if du.is_infinite() {
                continue;
            }
            for edge in node.edges() {
                let v = edge.target;
                let candidate = du + edge.weight;
                if candidate < state.dist(v) {
                    state.dist[v.index()] = candidate;
                    state.prev[v.index()] = Some(u);
                    changed = true;
                    observer.on_event(GraphEvent::Relax {
                        from: u,
                        to: v,
                        distance: candidate,
                    });
                }
            }
        }
        observer.on_event(GraphEvent::Round { round, changed });
        if !changed {
            break;
        }
    }

    let negative_cycle = graph.nodes().any(|node| {
        let du = state.dist(node.id());
        du.is_finite() && node.edges().iter().any(|e| du + e.weight < state.dist(e.target))
    });
    if negative_cycle {
        tracing::warn!(%source, "bellman-ford detected a negative cycle");
    }

    let mut result = state.into_result(PathAlgorithm::BellmanFord, source, destination, graph.node_count());
    result.negative_cycle = negative_cycle;
    tracing::debug!(%source, %destination, distance = result.distance, "bellman-ford finished");
    Ok(result)
}
