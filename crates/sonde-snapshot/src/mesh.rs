//! Uniform square-cell mesh with cell-centered values.
//!
//! The mesh is the structured stand-in for the solver's native grid:
//! `rows * cols` square cells of side [`delta`](UniformMesh::delta),
//! anchored at an origin, with values stored at cell centers in
//! row-major order. Stencil offsets that step outside the mesh clamp to
//! the nearest in-range cell, which degrades central differences to
//! one-sided differences at the boundary.

use crate::error::SnapshotError;
use smallvec::SmallVec;

/// Bilinear interpolation support: up to four `(flat index, weight)`
/// pairs whose weights sum to 1.
pub type Support = SmallVec<[(usize, f64); 4]>;

/// A two-dimensional uniform mesh of square cells.
///
/// Coordinates follow the simulation convention: `x` runs along
/// columns, `y` along rows. Cell `(r, c)` is centered at
/// `(x0 + delta*(c + 0.5), y0 + delta*(r + 0.5))`.
///
/// # Examples
///
/// ```
/// use sonde_snapshot::UniformMesh;
///
/// let mesh = UniformMesh::new(4, 8, 0.0, 0.0, 0.5).unwrap();
/// assert_eq!(mesh.cell_count(), 32);
/// assert_eq!(mesh.cell_x(0), 0.25);
/// assert_eq!(mesh.cell_y(3), 1.75);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UniformMesh {
    rows: u32,
    cols: u32,
    x0: f64,
    y0: f64,
    delta: f64,
}

impl UniformMesh {
    /// Create a mesh with `rows * cols` cells of side `delta`.
    ///
    /// Returns `Err(SnapshotError::EmptyMesh)` if either dimension is 0,
    /// or `Err(SnapshotError::InvalidDelta)` if the spacing is not
    /// finite and positive.
    pub fn new(rows: u32, cols: u32, x0: f64, y0: f64, delta: f64) -> Result<Self, SnapshotError> {
        if rows == 0 || cols == 0 {
            return Err(SnapshotError::EmptyMesh);
        }
        if !delta.is_finite() || delta <= 0.0 {
            return Err(SnapshotError::InvalidDelta { value: delta });
        }
        Ok(Self {
            rows,
            cols,
            x0,
            y0,
            delta,
        })
    }

    /// Number of rows (y direction).
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns (x direction).
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Cell side length.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Lower-left corner of the mesh.
    pub fn origin(&self) -> (f64, f64) {
        (self.x0, self.y0)
    }

    /// Total cell count.
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Row-major flat index of cell `(r, c)`.
    pub fn index(&self, r: u32, c: u32) -> usize {
        r as usize * self.cols as usize + c as usize
    }

    /// x coordinate of the center of column `c`.
    pub fn cell_x(&self, c: u32) -> f64 {
        self.x0 + self.delta * (c as f64 + 0.5)
    }

    /// y coordinate of the center of row `r`.
    pub fn cell_y(&self, r: u32) -> f64 {
        self.y0 + self.delta * (r as f64 + 0.5)
    }

    /// Flat index of the cell at offset `(dr, dc)` from `(r, c)`,
    /// clamping each axis to the mesh bounds.
    pub fn offset(&self, r: u32, c: u32, dr: i32, dc: i32) -> usize {
        let nr = clamp_axis(r as i64 + dr as i64, self.rows);
        let nc = clamp_axis(c as i64 + dc as i64, self.cols);
        self.index(nr, nc)
    }

    /// Bilinear support of the point `(x, y)`: the surrounding cell
    /// centers with their interpolation weights.
    ///
    /// Points outside the mesh clamp to the boundary, so the support is
    /// always non-empty and its weights always sum to 1.
    pub fn bilinear_support(&self, x: f64, y: f64) -> Support {
        let max_c = (self.cols - 1) as f64;
        let max_r = (self.rows - 1) as f64;

        // Fractional cell coordinates: cell centers sit at integers.
        let fx = ((x - self.x0) / self.delta - 0.5).clamp(0.0, max_c);
        let fy = ((y - self.y0) / self.delta - 0.5).clamp(0.0, max_r);

        let c0 = fx.floor() as u32;
        let r0 = fy.floor() as u32;
        let c1 = (c0 + 1).min(self.cols - 1);
        let r1 = (r0 + 1).min(self.rows - 1);
        let tx = fx - c0 as f64;
        let ty = fy - r0 as f64;

        let mut support = Support::new();
        support.push((self.index(r0, c0), (1.0 - tx) * (1.0 - ty)));
        support.push((self.index(r0, c1), tx * (1.0 - ty)));
        support.push((self.index(r1, c0), (1.0 - tx) * ty));
        support.push((self.index(r1, c1), tx * ty));
        support
    }
}

/// Clamp an axis value into `[0, len)`.
fn clamp_axis(val: i64, len: u32) -> u32 {
    val.clamp(0, len as i64 - 1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_empty_mesh() {
        assert!(matches!(
            UniformMesh::new(0, 4, 0.0, 0.0, 1.0),
            Err(SnapshotError::EmptyMesh)
        ));
        assert!(matches!(
            UniformMesh::new(4, 0, 0.0, 0.0, 1.0),
            Err(SnapshotError::EmptyMesh)
        ));
    }

    #[test]
    fn rejects_bad_delta() {
        for delta in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    UniformMesh::new(4, 4, 0.0, 0.0, delta),
                    Err(SnapshotError::InvalidDelta { .. })
                ),
                "delta {delta} should be rejected"
            );
        }
    }

    #[test]
    fn cell_centers() {
        let mesh = UniformMesh::new(3, 5, -1.0, 2.0, 0.5).unwrap();
        assert_eq!(mesh.cell_x(0), -0.75);
        assert_eq!(mesh.cell_x(4), 1.25);
        assert_eq!(mesh.cell_y(0), 2.25);
        assert_eq!(mesh.cell_y(2), 3.25);
    }

    #[test]
    fn flat_index_row_major() {
        let mesh = UniformMesh::new(3, 4, 0.0, 0.0, 1.0).unwrap();
        assert_eq!(mesh.index(0, 0), 0);
        assert_eq!(mesh.index(0, 3), 3);
        assert_eq!(mesh.index(1, 0), 4);
        assert_eq!(mesh.index(2, 3), 11);
    }

    #[test]
    fn offset_clamps_at_edges() {
        let mesh = UniformMesh::new(3, 3, 0.0, 0.0, 1.0).unwrap();
        // Interior: real neighbours.
        assert_eq!(mesh.offset(1, 1, -1, 0), mesh.index(0, 1));
        assert_eq!(mesh.offset(1, 1, 0, 1), mesh.index(1, 2));
        // Corner: out-of-range offsets fall back to the cell itself.
        assert_eq!(mesh.offset(0, 0, -1, 0), mesh.index(0, 0));
        assert_eq!(mesh.offset(0, 0, 0, -1), mesh.index(0, 0));
        assert_eq!(mesh.offset(2, 2, 1, 1), mesh.index(2, 2));
    }

    #[test]
    fn support_at_cell_center_is_exact() {
        let mesh = UniformMesh::new(4, 4, 0.0, 0.0, 1.0).unwrap();
        let support = mesh.bilinear_support(mesh.cell_x(2), mesh.cell_y(1));
        let total: f64 = support
            .iter()
            .filter(|(i, _)| *i == mesh.index(1, 2))
            .map(|(_, w)| w)
            .sum();
        assert!((total - 1.0).abs() < 1e-12, "weight at center: {total}");
    }

    #[test]
    fn support_midpoint_splits_evenly() {
        let mesh = UniformMesh::new(2, 2, 0.0, 0.0, 1.0).unwrap();
        // Mesh center: equidistant from all four cell centers.
        let support = mesh.bilinear_support(1.0, 1.0);
        assert_eq!(support.len(), 4);
        for (_, w) in &support {
            assert!((w - 0.25).abs() < 1e-12, "weight should be 0.25, got {w}");
        }
    }

    #[test]
    fn support_clamps_outside_mesh() {
        let mesh = UniformMesh::new(3, 3, 0.0, 0.0, 1.0).unwrap();
        // Far below-left of the mesh: all weight lands on cell (0, 0).
        let support = mesh.bilinear_support(-100.0, -100.0);
        let w00: f64 = support
            .iter()
            .filter(|(i, _)| *i == 0)
            .map(|(_, w)| w)
            .sum();
        assert!((w00 - 1.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn support_weights_sum_to_one(
            rows in 1u32..20,
            cols in 1u32..20,
            x in -50.0f64..50.0,
            y in -50.0f64..50.0,
        ) {
            let mesh = UniformMesh::new(rows, cols, -2.0, -2.0, 0.25).unwrap();
            let support = mesh.bilinear_support(x, y);
            let total: f64 = support.iter().map(|(_, w)| w).sum();
            prop_assert!((total - 1.0).abs() < 1e-9, "weights sum to {total}");
            for (i, w) in &support {
                prop_assert!(*i < mesh.cell_count());
                prop_assert!(*w >= -1e-12 && *w <= 1.0 + 1e-12);
            }
        }

        #[test]
        fn offset_stays_in_bounds(
            r in 0u32..10,
            c in 0u32..10,
            dr in -3i32..=3,
            dc in -3i32..=3,
        ) {
            let mesh = UniformMesh::new(10, 10, 0.0, 0.0, 1.0).unwrap();
            prop_assert!(mesh.offset(r, c, dr, dc) < mesh.cell_count());
        }
    }
}
