//! Result rendering module

use anyhow::Result;
use itertools::Itertools;
use serde_json::{json, to_string_pretty};
use std::io::Write;
use crate::coverage::PlacementResult;
use crate::graph::NodeId;

/// Output format for a placement report
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Write a report for `result` in the requested format
pub fn write_report<W: Write>(result: &PlacementResult, format: Format, out: &mut W) -> Result<()> {
    match format {
        Format::Text => write_text(result, out),
        Format::Json => write_json(result, out),
    }
}

/// Percentage rounded to one decimal place for display
pub fn display_percent(percent: f64) -> f64 {
    (percent * 10.0).round() / 10.0
}

fn id_list(ids: &[NodeId]) -> String {
    format!("[{}]", ids.iter().join(", "))
}

/// Human-readable coverage summary
pub fn write_text<W: Write>(result: &PlacementResult, out: &mut W) -> Result<()> {
    writeln!(out, "Coverage Summary (radius {})", result.radius)?;
    writeln!(out, "  Total Locations:    {}", result.node_count)?;
    writeln!(out, "  Centers Placed:     {}", result.center_count())?;
    writeln!(out, "  Population Covered: {:.1}%", result.coverage_percent)?;
    writeln!(out)?;
    writeln!(out, "Centers placed at: {}", id_list(&result.centers))?;

    if !result.coverage.is_empty() {
        writeln!(out)?;
        writeln!(out, "Node Coverage by Each Center")?;
        for entry in &result.coverage {
            writeln!(out, "  Center {} covers nodes: {}", entry.center, id_list(&entry.covered))?;
        }
    }

    if !result.uncovered.is_empty() {
        writeln!(out)?;
        writeln!(out, "Uncovered nodes: {}", id_list(&result.uncovered))?;
    }

    Ok(())
}

/// Pretty JSON with a display summary and the full result
pub fn write_json<W: Write>(result: &PlacementResult, out: &mut W) -> Result<()> {
    let report = json!({
        "summary": {
            "total_locations": result.node_count,
            "centers_placed": result.center_count(),
            "population_covered_percent": display_percent(result.coverage_percent),
        },
        "result": result,
    });

    writeln!(out, "{}", to_string_pretty(&report)?)?;

    Ok(())
}
