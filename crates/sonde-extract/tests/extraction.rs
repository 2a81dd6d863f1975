//! End-to-end extraction tests.
//!
//! Each test: build an analytic snapshot fixture → dump it to a temp
//! file → run the full pipeline → parse the emitted rows back and
//! check them against closed-form expectations.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use sonde_core::Geometry;
use sonde_extract::{run, ExtractError, ExtractionConfig};
use sonde_fields::strain_rate::LOG_FLOOR;
use sonde_snapshot::{dump_path, Snapshot};
use sonde_test_utils::{shear_flow, uniform_flow};

// ── Helpers ─────────────────────────────────────────────────────

static NEXT_FIXTURE: AtomicU64 = AtomicU64::new(0);

/// Dump a snapshot to a unique temp path and keep it alive until drop.
struct FixtureFile {
    path: PathBuf,
}

impl FixtureFile {
    fn new(snapshot: &Snapshot) -> Self {
        let n = NEXT_FIXTURE.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "sonde-extract-{}-{n}.snap",
            std::process::id()
        ));
        dump_path(snapshot, &path).unwrap();
        Self { path }
    }
}

impl Drop for FixtureFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

fn parse_rows(out: &[u8]) -> Vec<Vec<f64>> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(|line| {
            line.split_whitespace()
                .map(|tok| tok.parse().unwrap())
                .collect()
        })
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────

#[test]
fn row_grid_and_column_layout() {
    let snap = uniform_flow(16, 32, 0.125, 0.0, 0.0);
    let file = FixtureFile::new(&snap);
    let cfg = ExtractionConfig::new(&file.path, 0.0, 0.0, 2.0, 1.0, 10).unwrap();

    let mut out = Vec::new();
    let summary = run(&cfg, Geometry::Axisymmetric, &mut out).unwrap();
    assert_eq!(summary.nx, 20);
    assert_eq!(summary.ny, 10);
    assert_eq!(summary.rows, 200);
    assert_eq!(summary.fields, ["D2c", "vel"]);

    let rows = parse_rows(&out);
    assert_eq!(rows.len(), 200);
    for row in &rows {
        assert_eq!(row.len(), 4);
    }

    // x outer, y inner: the first ny rows share x(0).
    let x0 = 0.1 * 0.5;
    for (j, row) in rows[..10].iter().enumerate() {
        assert!((row[0] - x0).abs() < 1e-12);
        assert!((row[1] - (0.1 * (j as f64 + 0.5))).abs() < 1e-12);
    }
    assert!(rows[10][0] > rows[0][0]);
}

#[test]
fn quiescent_snapshot_floors_d2c_and_zeroes_vel() {
    let snap = uniform_flow(16, 32, 0.125, 0.0, 0.0);
    let file = FixtureFile::new(&snap);
    let cfg = ExtractionConfig::new(&file.path, 0.0, 0.0, 2.0, 1.0, 5).unwrap();

    let mut out = Vec::new();
    run(&cfg, Geometry::Axisymmetric, &mut out).unwrap();
    for row in parse_rows(&out) {
        assert_eq!(row[2], LOG_FLOOR);
        assert_eq!(row[3], 0.0);
    }
}

#[test]
fn shear_snapshot_matches_closed_form_away_from_edges() {
    // u.x = 2y on a 4x4 domain; sample a window well inside it.
    let rate = 2.0;
    let snap = shear_flow(32, 32, 0.125, rate);
    let file = FixtureFile::new(&snap);
    let cfg = ExtractionConfig::new(&file.path, 1.0, 1.0, 3.0, 3.0, 8).unwrap();

    let mut out = Vec::new();
    run(&cfg, Geometry::Planar, &mut out).unwrap();

    let want_d2c = (rate * rate / 2.0).log10();
    for row in parse_rows(&out) {
        let (y, d2c, vel) = (row[1], row[2], row[3]);
        assert!(
            (d2c - want_d2c).abs() < 1e-9,
            "D2c at y={y}: want {want_d2c}, got {d2c}"
        );
        // vel = |u.x| = rate * y, linear so interpolation is exact.
        assert!(
            (vel - rate * y).abs() < 1e-9,
            "vel at y={y}: want {}, got {vel}",
            rate * y
        );
    }
}

#[test]
fn window_outside_mesh_clamps_to_boundary_values() {
    let snap = shear_flow(8, 8, 0.25, 1.0);
    let file = FixtureFile::new(&snap);
    // Window entirely above the 2x2 mesh: every sample clamps to the
    // top row, where u.x = 1.875 (the last cell-center value).
    let cfg = ExtractionConfig::new(&file.path, 0.5, 5.0, 1.5, 6.0, 4).unwrap();

    let mut out = Vec::new();
    run(&cfg, Geometry::Planar, &mut out).unwrap();
    for row in parse_rows(&out) {
        assert!((row[3] - 1.875).abs() < 1e-12, "vel: {}", row[3]);
    }
}

#[test]
fn truncated_snapshot_file_fails_cleanly() {
    let snap = uniform_flow(8, 8, 0.25, 0.0, 0.0);
    let file = FixtureFile::new(&snap);
    let bytes = std::fs::read(&file.path).unwrap();
    std::fs::write(&file.path, &bytes[..bytes.len() / 2]).unwrap();

    let cfg = ExtractionConfig::new(&file.path, 0.0, 0.0, 2.0, 1.0, 4).unwrap();
    let mut out = Vec::new();
    let result = run(&cfg, Geometry::Axisymmetric, &mut out);
    assert!(matches!(result, Err(ExtractError::Snapshot(_))));
    assert!(out.is_empty());
}
