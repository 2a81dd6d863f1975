//! Flat storage for sampled field values.

use crate::grid::GridPlan;

/// Dense buffer holding every sampled value for a run.
///
/// Layout is column-major over the grid walk order: index
/// `(i * ny + j) * field_count + k` for column `i`, row `j`, field `k`.
/// That matches the output order, so the writer walks the buffer
/// sequentially.
#[derive(Clone, Debug)]
pub struct SampleBuffer {
    values: Vec<f64>,
    ny: usize,
    field_count: usize,
}

impl SampleBuffer {
    /// Allocate a zeroed buffer for the given plan and field count.
    pub fn new(plan: &GridPlan, field_count: usize) -> Self {
        Self {
            values: vec![0.0; plan.point_count() * field_count],
            ny: plan.ny as usize,
            field_count,
        }
    }

    /// Number of fields per sample point.
    pub fn field_count(&self) -> usize {
        self.field_count
    }

    fn index(&self, i: u32, j: u32, k: usize) -> usize {
        (i as usize * self.ny + j as usize) * self.field_count + k
    }

    /// Store the value for field `k` at grid point `(i, j)`.
    pub fn set(&mut self, i: u32, j: u32, k: usize, value: f64) {
        let idx = self.index(i, j, k);
        self.values[idx] = value;
    }

    /// Fetch the value for field `k` at grid point `(i, j)`.
    pub fn get(&self, i: u32, j: u32, k: usize) -> f64 {
        self.values[self.index(i, j, k)]
    }

    /// All field values at grid point `(i, j)`, in field order.
    pub fn point(&self, i: u32, j: u32) -> &[f64] {
        let start = self.index(i, j, 0);
        &self.values[start..start + self.field_count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionConfig;

    fn plan() -> GridPlan {
        let cfg = ExtractionConfig::new("dump", 0.0, 0.0, 2.0, 1.0, 4).unwrap();
        GridPlan::from_config(&cfg).unwrap()
    }

    #[test]
    fn set_get_roundtrip() {
        let plan = plan();
        let mut buf = SampleBuffer::new(&plan, 2);
        buf.set(3, 1, 0, 1.5);
        buf.set(3, 1, 1, -2.5);
        assert_eq!(buf.get(3, 1, 0), 1.5);
        assert_eq!(buf.get(3, 1, 1), -2.5);
        assert_eq!(buf.point(3, 1), &[1.5, -2.5]);
        // Neighbours untouched.
        assert_eq!(buf.point(3, 0), &[0.0, 0.0]);
        assert_eq!(buf.point(2, 1), &[0.0, 0.0]);
    }

    #[test]
    fn points_are_contiguous_in_walk_order() {
        let plan = plan();
        let mut buf = SampleBuffer::new(&plan, 2);
        let mut n = 0.0;
        for i in 0..plan.nx {
            for j in 0..plan.ny {
                for k in 0..2 {
                    buf.set(i, j, k, n);
                    n += 1.0;
                }
            }
        }
        assert_eq!(buf.values, (0..buf.values.len()).map(|v| v as f64).collect::<Vec<_>>());
    }
}
