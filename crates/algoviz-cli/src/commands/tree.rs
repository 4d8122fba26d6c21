//! Tree command.

use anyhow::Result;
use algoviz_algorithms::tree::{Traversal, TreeStats};
use algoviz_common::ValueType;
use algoviz_core::{NoopObserver, TreeShape};
use serde::Serialize;

use crate::OutputFormat;
use crate::output::{self, Format};

/// Parsed arguments of the tree command.
pub struct TreeArgs {
    pub value_type: ValueType,
    pub values: Option<String>,
    pub count: usize,
    pub nary: Option<usize>,
    pub order: Traversal,
    pub rebalance: bool,
    pub convert: bool,
    pub delete: Option<String>,
}

/// Tree walk output.
#[derive(Serialize)]
struct TreeOutput {
    order: Traversal,
    traversal: String,
    binary: bool,
    stats: TreeStats,
    removed: Option<usize>,
    elapsed_ns: u64,
}

/// Run the tree command.
pub fn run(args: &TreeArgs, seed: Option<u64>, format: OutputFormat, quiet: bool) -> Result<()> {
    let mut session = super::session(seed)?;
    let shape = args
        .nary
        .map_or(TreeShape::Binary, |degree| TreeShape::Nary { degree });

    match &args.values {
        Some(values) => {
            session.create_tree(args.value_type, shape)?;
            for token in values.split_whitespace() {
                session.tree_insert(token, &mut NoopObserver)?;
            }
        }
        None => {
            session.generate_tree(args.value_type, shape, args.count)?;
        }
    }

    let removed = match &args.delete {
        Some(text) => Some(session.tree_delete(text, &mut NoopObserver)?),
        None => None,
    };
    if args.convert {
        session.convert_tree()?;
        output::status("Converted to left-child/right-sibling binary form", quiet);
    }
    if args.rebalance {
        session.rebalance_tree()?;
        output::status("Rebalanced into a height-balanced BST", quiet);
    }

    let report = session.traverse(args.order, &mut NoopObserver);
    let output = TreeOutput {
        order: args.order,
        traversal: report.text,
        binary: session.tree().shape().is_binary(),
        stats: session.tree_stats(),
        removed,
        elapsed_ns: report.elapsed_ns,
    };

    match Format::from(format) {
        Format::Json => output::print_json(&output, quiet)?,
        Format::Table => {
            let mut items = vec![
                ("Order", args.order.name().to_string()),
                ("Traversal", output.traversal.clone()),
                ("Shape", if output.binary { "binary" } else { "N-ary" }.to_string()),
                ("Nodes", output.stats.count.to_string()),
                ("Depth", output.stats.depth.to_string()),
                ("Time", output::format_nanos(output.elapsed_ns)),
            ];
            if let Some(removed) = output.removed {
                items.push(("Removed", removed.to_string()));
            }
            output::print_key_value_table(&items, quiet);
        }
    }

    Ok(())
}
