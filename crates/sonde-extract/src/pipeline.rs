//! End-to-end extraction run.

use std::io::Write;

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use crate::grid::GridPlan;
use crate::sampler::sample_fields;
use crate::writer::write_rows;
use sonde_core::Geometry;
use sonde_fields::reference_registry;
use sonde_snapshot::restore_path;

/// What a completed run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Sample columns.
    pub nx: u32,
    /// Sample rows.
    pub ny: u32,
    /// Output rows written (`nx * ny`).
    pub rows: usize,
    /// Derived field names, in output column order.
    pub fields: Vec<String>,
}

/// Run the whole pipeline: plan, restore, compute, sample, write.
///
/// Grid planning runs before the snapshot is touched so bad bounds
/// fail without any file I/O. The derived fields are the standard
/// pair (`D2c`, `vel`) under the given geometry.
pub fn run(
    cfg: &ExtractionConfig,
    geometry: Geometry,
    out: &mut dyn Write,
) -> Result<ExtractSummary, ExtractError> {
    let plan = GridPlan::from_config(cfg)?;

    let mut snapshot = restore_path(&cfg.filename)?;
    let registry = reference_registry(geometry)?;
    let ids = registry.run(&mut snapshot)?;

    let buffer = sample_fields(&plan, &snapshot, &ids);
    write_rows(&plan, &buffer, out)?;

    let fields = ids
        .iter()
        .filter_map(|&id| snapshot.field_name(id))
        .map(str::to_string)
        .collect();
    Ok(ExtractSummary {
        nx: plan.nx,
        ny: plan.ny,
        rows: plan.point_count(),
        fields,
    })
}
