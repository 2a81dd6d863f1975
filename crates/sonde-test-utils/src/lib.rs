//! Snapshot fixtures for sonde development.
//!
//! Builders for small, analytically known snapshots so pipeline and
//! CLI tests do not have to hand-write field buffers. All fixtures
//! carry the three raw fields (`f`, `u.x`, `u.y`) the reference
//! computers read.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use sonde_snapshot::names::{PHASE, VEL_X, VEL_Y};
use sonde_snapshot::{Snapshot, UniformMesh};

/// Build a snapshot by evaluating `(f, u.x, u.y)` at every cell center.
pub fn snapshot_from_fn(
    rows: u32,
    cols: u32,
    x0: f64,
    y0: f64,
    delta: f64,
    fill: impl Fn(f64, f64) -> (f64, f64, f64),
) -> Snapshot {
    let mesh = UniformMesh::new(rows, cols, x0, y0, delta)
        .unwrap_or_else(|e| panic!("bad fixture mesh: {e}"));
    let mut f = Vec::with_capacity(mesh.cell_count());
    let mut ux = Vec::with_capacity(mesh.cell_count());
    let mut uy = Vec::with_capacity(mesh.cell_count());
    for r in 0..rows {
        for c in 0..cols {
            let (fv, uxv, uyv) = fill(mesh.cell_x(c), mesh.cell_y(r));
            f.push(fv);
            ux.push(uxv);
            uy.push(uyv);
        }
    }
    let mut snap = Snapshot::new(mesh);
    insert(&mut snap, PHASE, f);
    insert(&mut snap, VEL_X, ux);
    insert(&mut snap, VEL_Y, uy);
    snap
}

/// All-liquid snapshot with a constant velocity everywhere.
///
/// The strain-rate invariant is identically zero, so `D2c` hits its
/// floor at every cell.
pub fn uniform_flow(rows: u32, cols: u32, delta: f64, ux: f64, uy: f64) -> Snapshot {
    snapshot_from_fn(rows, cols, 0.0, 0.0, delta, |_, _| (1.0, ux, uy))
}

/// All-liquid planar shear: `u.x = rate * y`, `u.y = 0`.
///
/// Away from the mesh boundary the strain-rate invariant is exactly
/// `rate^2 / 2`.
pub fn shear_flow(rows: u32, cols: u32, delta: f64, rate: f64) -> Snapshot {
    snapshot_from_fn(rows, cols, 0.0, 0.0, delta, |_, y| (1.0, rate * y, 0.0))
}

/// Deterministic pseudo-random snapshot for robustness tests.
///
/// Phase fraction in `[0, 1]`, velocity components in `[-1, 1]`,
/// reproducible from the seed.
pub fn random_snapshot(rows: u32, cols: u32, delta: f64, seed: u64) -> Snapshot {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mesh = UniformMesh::new(rows, cols, 0.0, 0.0, delta)
        .unwrap_or_else(|e| panic!("bad fixture mesh: {e}"));
    let n = mesh.cell_count();
    let f = (0..n).map(|_| rng.random::<f64>()).collect();
    let ux = (0..n).map(|_| rng.random::<f64>() * 2.0 - 1.0).collect();
    let uy = (0..n).map(|_| rng.random::<f64>() * 2.0 - 1.0).collect();
    let mut snap = Snapshot::new(mesh);
    insert(&mut snap, PHASE, f);
    insert(&mut snap, VEL_X, ux);
    insert(&mut snap, VEL_Y, uy);
    snap
}

fn insert(snap: &mut Snapshot, name: &str, values: Vec<f64>) {
    snap.insert_scalar(name, values)
        .unwrap_or_else(|e| panic!("fixture field {name}: {e}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_carry_the_raw_fields() {
        let snap = uniform_flow(4, 4, 0.5, 1.0, -1.0);
        assert_eq!(snap.field_count(), 3);
        assert!(snap.field(PHASE).is_some());
        assert_eq!(snap.field(VEL_X).unwrap()[0], 1.0);
        assert_eq!(snap.field(VEL_Y).unwrap()[0], -1.0);
    }

    #[test]
    fn random_snapshot_is_reproducible() {
        let a = random_snapshot(4, 4, 0.5, 7);
        let b = random_snapshot(4, 4, 0.5, 7);
        assert_eq!(a.field(VEL_X), b.field(VEL_X));
        let c = random_snapshot(4, 4, 0.5, 8);
        assert_ne!(a.field(VEL_X), c.field(VEL_X));
    }
}
