//! Benchmark profiles for the sonde extraction pipeline.
//!
//! Pre-built snapshot/window pairs at two scales:
//!
//! - [`reference_profile`]: 256x256 mesh (~65K cells), 512-row window
//! - [`stress_profile`]: 1024x1024 mesh (~1M cells), 2048-row window

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sonde_extract::ExtractionConfig;
use sonde_snapshot::Snapshot;
use sonde_test_utils::random_snapshot;

/// A snapshot plus the window to sample it with.
pub struct BenchProfile {
    /// Snapshot under extraction.
    pub snapshot: Snapshot,
    /// Sampling window covering most of the mesh.
    pub config: ExtractionConfig,
}

/// Reference profile: 256x256 mesh, window sampled at 512 rows.
pub fn reference_profile(seed: u64) -> BenchProfile {
    profile(256, 512, seed)
}

/// Stress profile: 1024x1024 mesh, window sampled at 2048 rows.
pub fn stress_profile(seed: u64) -> BenchProfile {
    profile(1024, 2048, seed)
}

fn profile(cells: u32, ny: i64, seed: u64) -> BenchProfile {
    let delta = 1.0 / f64::from(cells);
    let snapshot = random_snapshot(cells, cells, delta, seed);
    let config = ExtractionConfig::new("unused", 0.0, 0.0, 1.0, 1.0, ny)
        .unwrap_or_else(|e| panic!("bad profile window: {e}"));
    BenchProfile { snapshot, config }
}
