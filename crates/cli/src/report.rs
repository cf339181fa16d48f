//! Plain-text result tables.

use std::io::{self, Write};

use palletizer_core::{LoadSummary, MultiTypeResult, SingleBoxResult};
use palletizer_layer::{MultiTypeInput, SingleBoxInput};

/// Formats a millimeter figure rounded to a whole number.
pub fn format_int(value: f64) -> String {
    format!("{:.0}", value.round())
}

fn write_errors(out: &mut impl Write, errors: &[String]) -> io::Result<()> {
    if errors.is_empty() {
        return Ok(());
    }
    writeln!(out, "{:-<60}", "")?;
    writeln!(out, "Errors:")?;
    for error in errors {
        writeln!(out, "  - {}", error)?;
    }
    Ok(())
}

/// Writes the single-box result table.
pub fn write_single_report(
    out: &mut impl Write,
    input: &SingleBoxInput,
    result: &SingleBoxResult,
) -> io::Result<()> {
    let selected = &result.selected;

    writeln!(out, "{:=<60}", "")?;
    writeln!(out, "SINGLE BOX LOAD")?;
    writeln!(out, "{:=<60}", "")?;
    writeln!(out, "{:<32} {}", "Pallet (mm)", input.pallet)?;
    writeln!(out, "{:<32} {}", "Box (mm)", input.box_dims)?;
    writeln!(out, "{:-<60}", "")?;

    let rows = [
        ("Selected orientation", selected.orientation.to_string()),
        ("nx", selected.nx.to_string()),
        ("ny", selected.ny.to_string()),
        ("Boxes per layer", selected.per_layer.to_string()),
        ("Layers", result.layers.to_string()),
        ("Total boxes", result.total_boxes.to_string()),
        ("Total height (mm)", format_int(result.total_height)),
        ("Area utilization", result.utilization_percent()),
        ("Volume utilization", result.volume_utilization_percent()),
        ("Pallet area (mm2)", format_int(result.pallet_area)),
        ("Used area per layer (mm2)", format_int(result.used_area)),
        ("Free area per layer (mm2)", format_int(result.free_area)),
        ("Available height (mm)", format_int(result.available_height)),
        ("Free height (mm)", format_int(result.free_height)),
        ("Total box volume (mm3)", format_int(result.total_box_volume)),
    ];
    for (label, value) in rows {
        writeln!(out, "{:<32} {:>16}", label, value)?;
    }

    write_errors(out, &result.errors)?;
    writeln!(out, "{:=<60}", "")
}

/// Writes the multi-type per-type table and height totals.
pub fn write_multi_report(
    out: &mut impl Write,
    input: &MultiTypeInput,
    result: &MultiTypeResult,
) -> io::Result<()> {
    writeln!(out, "{:=<96}", "")?;
    writeln!(out, "MULTI-TYPE LOAD")?;
    writeln!(out, "{:=<96}", "")?;
    writeln!(
        out,
        "Pallet {} mm, max height {} mm",
        input.pallet,
        format_int(input.max_total_height)
    )?;
    writeln!(out, "{:-<96}", "")?;
    writeln!(
        out,
        "{:<8} {:<6} {:<14} {:<8} {:>10} {:>8} {:>10} {:>8} {:<9}",
        "Type", "Orient", "Footprint", "nx/ny", "Requested", "Placed", "Overflow", "Layers", "Color"
    )?;

    for s in &result.by_type {
        writeln!(
            out,
            "{:<8} {:<6} {:<14} {:<8} {:>10} {:>8} {:>10} {:>8} {:<9}",
            s.type_id,
            s.orientation.as_str(),
            format!(
                "{}x{}",
                format_int(s.box_footprint_l),
                format_int(s.box_footprint_w)
            ),
            format!("{}/{}", s.nx, s.ny),
            s.requested,
            s.placed,
            s.overflow,
            s.layers_used,
            s.color
        )?;
    }

    let summary = LoadSummary::from(result);
    writeln!(out, "{:-<96}", "")?;
    writeln!(
        out,
        "Placed {} of {} unit(s), overflow {}",
        summary.total_placed, summary.total_requested, summary.total_overflow
    )?;
    writeln!(
        out,
        "Height available {} mm, used {} mm, free {} mm",
        format_int(result.available_height),
        format_int(summary.height_used),
        format_int(summary.height_free)
    )?;

    write_errors(out, &result.errors)?;
    writeln!(out, "{:=<96}", "")
}

/// Prints the single-box table to stdout.
pub fn print_single_report(input: &SingleBoxInput, result: &SingleBoxResult) -> io::Result<()> {
    write_single_report(&mut io::stdout().lock(), input, result)
}

/// Prints the multi-type table to stdout.
pub fn print_multi_report(input: &MultiTypeInput, result: &MultiTypeResult) -> io::Result<()> {
    write_multi_report(&mut io::stdout().lock(), input, result)
}
