//! Sonde: snapshot field extraction onto regular grids for CFD
//! post-processing.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the sonde sub-crates. For most users, adding `sonde` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sonde::prelude::*;
//!
//! // A 16x32 all-liquid snapshot with a uniform velocity.
//! let mesh = UniformMesh::new(16, 32, 0.0, 0.0, 0.125).unwrap();
//! let mut snapshot = Snapshot::new(mesh);
//! let n = snapshot.mesh().cell_count();
//! snapshot.insert_scalar("f", vec![1.0; n]).unwrap();
//! snapshot.insert_scalar("u.x", vec![0.3; n]).unwrap();
//! snapshot.insert_scalar("u.y", vec![0.4; n]).unwrap();
//!
//! // Compute the standard derived fields and sample a window.
//! let registry = reference_registry(Geometry::Axisymmetric).unwrap();
//! let ids = registry.run(&mut snapshot).unwrap();
//!
//! let cfg = ExtractionConfig::new("unused", 0.0, 0.0, 2.0, 1.0, 10).unwrap();
//! let plan = GridPlan::from_config(&cfg).unwrap();
//! let buffer = sample_fields(&plan, &snapshot, &ids);
//!
//! // vel = sqrt(0.3^2 + 0.4^2) everywhere.
//! assert!((buffer.get(0, 0, 1) - 0.5).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sonde-core` | Field IDs, geometry mode, compute errors |
//! | [`snapshot`] | `sonde-snapshot` | Mesh, snapshot storage, restore/dump codec |
//! | [`fields`] | `sonde-fields` | Derived-field computers and registry |
//! | [`extract`] | `sonde-extract` | Config, grid planning, sampling, row output |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`sonde-core`).
pub use sonde_core as types;

/// Snapshot storage, interpolation, and the file codec (`sonde-snapshot`).
///
/// [`snapshot::restore`] and [`snapshot::dump`] speak the binary
/// snapshot format; [`snapshot::Snapshot::interpolate`] is the
/// bilinear point sampler.
pub use sonde_snapshot as snapshot;

/// Derived-field computers (`sonde-fields`).
///
/// The [`fields::FieldCompute`] trait is the extension point for new
/// derived quantities; [`fields::reference_registry`] wires up the
/// standard `D2c` and `vel` pair.
pub use sonde_fields as fields;

/// The extraction pipeline (`sonde-extract`).
///
/// [`extract::run`] is the whole batch flow; the pieces (config, grid
/// planner, sampler, writer) are usable on their own.
pub use sonde_extract as extract;

/// Common imports for typical sonde usage.
///
/// ```rust
/// use sonde::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use sonde_core::{ComputeError, FieldId, Geometry};

    // Snapshot
    pub use sonde_snapshot::{
        dump, dump_path, restore, restore_path, Snapshot, SnapshotError, UniformMesh,
    };

    // Fields
    pub use sonde_fields::{
        reference_registry, FieldCompute, FieldRegistry, StrainRateInvariant, VelocityMagnitude,
    };

    // Extraction
    pub use sonde_extract::{
        run, sample_fields, write_rows, ExtractError, ExtractSummary, ExtractionConfig,
        GridPlan, SampleBuffer,
    };
}
