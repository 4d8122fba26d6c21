//! Random graph generation.

use algoviz_common::{NodeId, RandomProfile, Result, ValueGenerator, ValueType};
use algoviz_core::Graph;

/// Fewest nodes a generated graph has.
pub const MIN_GRAPH_NODES: usize = 5;

/// Most nodes a generated graph has.
pub const MAX_GRAPH_NODES: usize = 8;

/// Percent chance that a node gets one extra edge.
const EXTRA_EDGE_PERCENT: u32 = 35;

/// Builds a small connected graph for demonstrations.
///
/// The graph has 5 to 8 nodes labeled from the graph profile. Each node links
/// to the next one in insertion order, closing a cycle through every node
/// with weights in `[5, 20)`. Each node then has a 35% chance of one more
/// edge, weighted in `[10, 20)`, to a node that is not its cycle neighbor.
///
/// # Errors
///
/// Propagates container errors; none occur for a freshly created graph.
pub fn random_graph(value_type: ValueType, directed: bool, generator: &mut ValueGenerator) -> Result<Graph> {
    let mut graph = Graph::new(value_type, directed);
    let count = generator.int_in(MIN_GRAPH_NODES as i64, MAX_GRAPH_NODES as i64 + 1) as usize;

    let mut ids: Vec<NodeId> = Vec::with_capacity(count);
    for _ in 0..count {
        let label = generator.value(value_type, RandomProfile::GraphLabel);
        ids.push(graph.add_node(label)?);
    }

    for i in 0..count {
        let weight = generator.int_in(5, 20) as f64;
        graph.add_edge(ids[i], ids[(i + 1) % count], weight)?;

        if generator.chance(EXTRA_EDGE_PERCENT) {
            let offset = generator.int_in(0, (count - 3) as i64) as usize;
            let target = (i + 2 + offset) % count;
            if target != i {
                let weight = generator.int_in(10, 20) as f64;
                graph.add_edge(ids[i], ids[target], weight)?;
            }
        }
    }

    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        directed,
        "random graph generated"
    );
    Ok(graph)
}
