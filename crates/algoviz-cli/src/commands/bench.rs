//! Benchmark command.

use anyhow::Result;
use algoviz_common::ValueType;
use algoviz_engine::{ComparisonCurve, StructureMode};
use comfy_table::Cell;
use indicatif::{ProgressBar, ProgressStyle};

use crate::OutputFormat;
use crate::output::{self, Format};

/// Run the bench command.
pub fn run(
    max_size: usize,
    value_type: ValueType,
    list: bool,
    seed: Option<u64>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let mut session = super::session(seed)?;
    let mode = if list { StructureMode::List } else { StructureMode::Array };

    output::status(
        &format!("Benchmarking {} sorts up to {max_size} elements...", mode.name()),
        quiet,
    );

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} samples ({elapsed})")?
                .progress_chars("=> "),
        );
        bar
    };
    let curves = session.benchmark_with_progress(max_size, mode, value_type, |done, total| {
        progress.set_length(total as u64);
        progress.set_position(done as u64);
    })?;
    progress.finish_and_clear();

    match Format::from(format) {
        Format::Json => output::print_json(&curves, quiet)?,
        Format::Table => {
            output::print_table(&curve_table(&curves), quiet);
            output::success("Benchmark completed", quiet);
        }
    }

    Ok(())
}

/// One row per algorithm, one column per sample size.
fn curve_table(curves: &[ComparisonCurve]) -> comfy_table::Table {
    let mut table = output::create_table();
    let sizes: Vec<String> = curves
        .first()
        .map(|c| c.points.iter().map(|p| format!("n = {}", p.size)).collect())
        .unwrap_or_default();
    let mut headers = vec!["Algorithm"];
    headers.extend(sizes.iter().map(String::as_str));
    output::add_header(&mut table, &headers);

    for curve in curves {
        let mut row = vec![Cell::new(curve.algorithm.name())];
        row.extend(curve.points.iter().map(|p| {
            if p.skipped {
                Cell::new("skipped")
            } else {
                Cell::new(output::format_nanos(p.elapsed_ns))
            }
        }));
        table.add_row(row);
    }
    table
}
