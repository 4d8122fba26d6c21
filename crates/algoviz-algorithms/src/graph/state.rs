//! Per-run search state.
//!
//! Distances, predecessors and settled flags live in a side table indexed by
//! node id and rebuilt for every run, so the graph itself is never mutated by
//! an algorithm.

use super::{PathAlgorithm, PathResult};
use algoviz_common::NodeId;
use algoviz_core::Graph;

#[derive(Debug, Clone)]
pub(crate) struct SearchState {
    pub(crate) dist: Vec<f64>,
    pub(crate) prev: Vec<Option<NodeId>>,
    pub(crate) visited: Vec<bool>,
}

impl SearchState {
    /// Fresh state: every distance infinite except the source at 0.
    pub(crate) fn new(graph: &Graph, source: NodeId) -> Self {
        let slots = graph.max_id() as usize + 1;
        let mut dist = vec![f64::INFINITY; slots];
        dist[source.index()] = 0.0;
        Self {
            dist,
            prev: vec![None; slots],
            visited: vec![false; slots],
        }
    }

    #[inline]
    pub(crate) fn dist(&self, id: NodeId) -> f64 {
        self.dist[id.index()]
    }

    /// Walks predecessor links back from `destination`. At most
    /// `node_count + 1` steps are taken, so a predecessor cycle cannot hang
    /// the walk.
    pub(crate) fn path_to(&self, source: NodeId, destination: NodeId, node_count: usize) -> Vec<NodeId> {
        if self.dist(destination).is_infinite() {
            return Vec::new();
        }
        let mut path = Vec::new();
        let mut cursor = Some(destination);
        let mut steps = 0;
        while let Some(id) = cursor {
            if steps > node_count {
                break;
            }
            steps += 1;
            path.push(id);
            if id == source {
                break;
            }
            cursor = self.prev[id.index()];
        }
        path.reverse();
        path
    }

    pub(crate) fn into_result(
        self,
        algorithm: PathAlgorithm,
        source: NodeId,
        destination: NodeId,
        node_count: usize,
    ) -> PathResult {
        let path = self.path_to(source, destination, node_count);
        PathResult {
            algorithm,
            source,
            destination,
            distance: self.dist(destination),
            path,
            negative_cycle: false,
        }
    }
}
