//! Sort command.

use anyhow::Result;
use algoviz_common::{Value, ValueType};
use algoviz_core::{SortAlgorithm, SortEvent, SortOutcome, SortStep};
use serde::Serialize;

use crate::OutputFormat;
use crate::output::{self, Format};

/// Parsed arguments of the sort command.
pub struct SortArgs {
    pub algorithm: SortAlgorithm,
    pub value_type: ValueType,
    pub values: Option<String>,
    pub size: usize,
    pub list: bool,
    pub doubly: bool,
    pub steps: bool,
}

/// Sort result output.
#[derive(Serialize)]
struct SortOutput {
    algorithm: SortAlgorithm,
    container: &'static str,
    before: String,
    after: String,
    outcome: SortOutcome,
}

fn describe(event: SortEvent) -> String {
    match event {
        SortEvent::Compare { left, right } => format!("compare [{left}] [{right}]"),
        SortEvent::Swap { left, right } => format!("swap [{left}] [{right}]"),
        SortEvent::Shift { from, to } => format!("shift [{from}] -> [{to}]"),
        SortEvent::PassEnd { pass, swapped } => format!("pass {pass} done, swapped: {swapped}"),
        SortEvent::PivotPlaced { index } => format!("pivot placed at [{index}]"),
    }
}

/// Run the sort command.
pub fn run(args: &SortArgs, seed: Option<u64>, format: OutputFormat, quiet: bool) -> Result<()> {
    let mut session = super::session(seed)?;
    let algorithm = args.algorithm;
    let pseudo = algorithm.pseudo_code();

    let mut step_count = 0u64;
    let show_steps = args.steps && !quiet && matches!(Format::from(format), Format::Table);
    let mut observer = |step: SortStep, data: &[Value]| {
        step_count += 1;
        if show_steps {
            let line = pseudo.get(usize::from(step.line)).copied().unwrap_or("");
            let snapshot: Vec<String> = data.iter().map(Value::render).collect();
            println!(
                "{:>5}  {:<28} | {:<36} | {}",
                step_count,
                describe(step.event),
                line.trim(),
                snapshot.join(" ")
            );
        }
    };

    let output = if args.list {
        match &args.values {
            Some(values) => session.load_list(args.value_type, args.doubly, values),
            None => session.generate_list(args.value_type, args.doubly, args.size),
        };
        let before = session.list_text(false).to_string();
        let outcome = session.sort_list(algorithm, &mut observer);
        SortOutput {
            algorithm,
            container: "list",
            before,
            after: session.list_text(false).to_string(),
            outcome,
        }
    } else {
        match &args.values {
            Some(values) => session.load_array(args.value_type, values),
            None => session.generate_array(args.value_type, args.size),
        };
        let outcome = session.sort_array(algorithm, &mut observer);
        SortOutput {
            algorithm,
            container: "array",
            before: session.array_text(false).to_string(),
            after: session
                .sorted_array_text(false)
                .map(|t| t.to_string())
                .unwrap_or_default(),
            outcome,
        }
    };

    match Format::from(format) {
        Format::Json => output::print_json(&output, quiet)?,
        Format::Table => {
            let stats = output.outcome.stats;
            let items = vec![
                ("Algorithm", algorithm.name().to_string()),
                ("Container", output.container.to_string()),
                ("Before", output.before),
                ("After", output.after),
                ("Time", output::format_nanos(output.outcome.elapsed_ns)),
                ("Comparisons", stats.comparisons.to_string()),
                ("Swaps", stats.swaps.to_string()),
                ("Shifts", stats.shifts.to_string()),
                ("Passes", stats.passes.to_string()),
            ];
            output::print_key_value_table(&items, quiet);
        }
    }

    Ok(())
}
