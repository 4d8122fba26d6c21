//! Graph command.

use anyhow::{Context, Result, bail};
use algoviz_algorithms::graph::{PathAlgorithm, PathResult, SimplePath, render_path};
use algoviz_common::ValueType;
use algoviz_core::NoopObserver;
use comfy_table::Cell;
use serde::Serialize;

use crate::OutputFormat;
use crate::output::{self, Format};

/// Parsed arguments of the graph command.
pub struct GraphArgs {
    pub algorithm: PathAlgorithm,
    pub value_type: ValueType,
    pub nodes: Option<String>,
    pub edges: Vec<String>,
    pub directed: bool,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Path query output.
#[derive(Serialize)]
struct GraphOutput {
    adjacency: String,
    shortest: PathResult,
    shortest_text: String,
    all_paths: Vec<SimplePath>,
    elapsed_ns: u64,
}

/// Splits `FROM:TO:WEIGHT`.
fn parse_edge(text: &str) -> Result<(&str, &str, f64)> {
    let parts: Vec<&str> = text.split(':').collect();
    let [from, to, weight] = parts.as_slice() else {
        bail!("edge '{text}' is not FROM:TO:WEIGHT");
    };
    let weight: f64 = weight
        .parse()
        .with_context(|| format!("edge '{text}' has an invalid weight"))?;
    Ok((*from, *to, weight))
}

/// Run the graph command.
pub fn run(args: &GraphArgs, seed: Option<u64>, format: OutputFormat, quiet: bool) -> Result<()> {
    let mut session = super::session(seed)?;

    match &args.nodes {
        Some(nodes) => {
            session.create_graph(args.value_type, args.directed);
            for label in nodes.split_whitespace() {
                session.add_graph_node(label)?;
            }
            for spec in &args.edges {
                let (from, to, weight) = parse_edge(spec)?;
                session.add_graph_edge(from, to, weight)?;
            }
        }
        None => {
            session.generate_graph(args.value_type, args.directed)?;
        }
    }

    let graph = session.graph();
    let ids = graph.node_ids();
    let (Some(&first), Some(&last)) = (ids.first(), ids.last()) else {
        bail!("the graph has no nodes");
    };
    let from = args.from.clone().unwrap_or_else(|| graph.label(first));
    let to = args.to.clone().unwrap_or_else(|| graph.label(last));

    let query = session.find_paths(args.algorithm, &from, &to, &mut NoopObserver)?;
    let graph = session.graph();
    let output = GraphOutput {
        adjacency: graph.adjacency_list_text(),
        shortest_text: query.report.shortest.path_text(graph),
        shortest: query.report.shortest,
        all_paths: query.report.all_paths,
        elapsed_ns: query.elapsed_ns,
    };

    match Format::from(format) {
        Format::Json => output::print_json(&output, quiet)?,
        Format::Table => {
            output::status(output.adjacency.trim_end(), quiet);

            let mut table = output::create_table();
            output::add_header(&mut table, &["#", "Path", "Cost"]);
            for (i, path) in output.all_paths.iter().enumerate() {
                table.add_row(vec![
                    Cell::new(i + 1),
                    Cell::new(render_path(graph, &path.nodes)),
                    Cell::new(path.cost),
                ]);
            }
            output::print_table(&table, quiet);

            let distance = if output.shortest.is_reachable() {
                output.shortest.distance.to_string()
            } else {
                "infinity".to_string()
            };
            let mut items = vec![
                ("Algorithm", args.algorithm.name().to_string()),
                ("From", from),
                ("To", to),
                ("Shortest Path", output.shortest_text.clone()),
                ("Distance", distance),
                ("Simple Paths", output.all_paths.len().to_string()),
                ("Time", output::format_nanos(output.elapsed_ns)),
            ];
            if output.shortest.negative_cycle {
                items.push(("Negative Cycle", "detected".to_string()));
            }
            output::print_key_value_table(&items, quiet);
        }
    }

    Ok(())
}
