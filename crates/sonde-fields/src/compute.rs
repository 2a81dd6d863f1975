//! The derived-field computer trait.

use sonde_core::ComputeError;
use sonde_snapshot::Snapshot;

/// Computes one derived per-cell scalar from raw snapshot fields.
///
/// A computer never mutates the snapshot itself. It reads its declared
/// inputs and returns a fresh buffer of `cell_count` values; the
/// [`FieldRegistry`](crate::FieldRegistry) owns registration and
/// insertion, so a failed compute leaves the snapshot untouched.
pub trait FieldCompute {
    /// Name under which the output field is registered.
    fn name(&self) -> &str;

    /// Raw field names this computer reads.
    ///
    /// The registry checks these against the snapshot before calling
    /// [`compute`](FieldCompute::compute).
    fn inputs(&self) -> &[&str];

    /// Compute the derived values, one per mesh cell, in row-major order.
    fn compute(&self, snapshot: &Snapshot) -> Result<Vec<f64>, ComputeError>;
}
