//! Rendering generated slices as text or JSON.

use std::io::{self, Write};

use serde::Serialize;

use crate::generate::GenerationReport;
use crate::slice::{PlacedSlice, SLOT_COUNT};

/// JSON view of one placed slice.
#[derive(Debug, Serialize)]
pub struct SliceSummary {
    /// Tile id per slot, `null` for empty slots.
    pub positions: [Option<u32>; SLOT_COUNT],
    pub absolute_value: f64,
    pub resources: f64,
    pub influence: f64,
    pub technology: String,
    pub wormholes: String,
    /// Slot pairs holding touching anomaly tiles.
    pub adjacent_anomalies: Vec<(usize, usize)>,
}

impl From<&PlacedSlice> for SliceSummary {
    fn from(slice: &PlacedSlice) -> Self {
        let mut positions = [None; SLOT_COUNT];
        for (slot, tile) in slice.tiles() {
            positions[slot] = Some(tile.id());
        }
        SliceSummary {
            positions,
            absolute_value: slice.absolute_value(),
            resources: slice.resources(),
            influence: slice.influence(),
            technology: slice.technology().to_string(),
            wormholes: slice.wormholes().to_string(),
            adjacent_anomalies: slice.adjacent_anomalies(),
        }
    }
}

/// JSON view of a whole run.
#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub excluded_tile: u32,
    pub attempts: usize,
    pub passes: usize,
    pub slices: Vec<SliceSummary>,
}

impl From<&GenerationReport> for ReportSummary {
    fn from(report: &GenerationReport) -> Self {
        ReportSummary {
            excluded_tile: report.excluded.id(),
            attempts: report.attempts,
            passes: report.passes,
            slices: report.slices.iter().map(SliceSummary::from).collect(),
        }
    }
}

/// Writes a human-readable listing of the slices.
pub fn print_slices<W: Write>(slices: &[PlacedSlice], out: &mut W) -> io::Result<()> {
    for (idx, slice) in slices.iter().enumerate() {
        let ids: Vec<String> = slice.tiles().map(|(_, t)| t.id().to_string()).collect();
        writeln!(out, "Slice {}", idx + 1)?;
        writeln!(out, "=======")?;
        writeln!(out, "Tiles: {}", ids.join(", "))?;
        writeln!(out, "Absolute value : {}", slice.absolute_value())?;
        writeln!(out, "Total resources: {}", slice.resources())?;
        writeln!(out, "Total influence: {}", slice.influence())?;
        writeln!(out, "Tech skips: {}", slice.technology())?;
        writeln!(out, "Wormholes: {}", slice.wormholes())?;
    }
    out.flush()
}

/// Writes the run as a pretty-printed JSON object followed by a newline.
pub fn write_json<W: Write>(report: &GenerationReport, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &ReportSummary::from(report))?;
    writeln!(out)?;
    out.flush()
}
