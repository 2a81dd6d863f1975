//! Grid-point sampling of snapshot fields.

use crate::buffer::SampleBuffer;
use crate::grid::GridPlan;
use sonde_core::FieldId;
use sonde_snapshot::Snapshot;

/// Interpolate every listed field at every grid point.
///
/// Fields land in the buffer in the order given, which is the output
/// column order. Interpolation clamps to the mesh boundary, so grid
/// points outside the snapshot domain take the nearest boundary value.
pub fn sample_fields(
    plan: &GridPlan,
    snapshot: &Snapshot,
    fields: &[FieldId],
) -> SampleBuffer {
    let mut buffer = SampleBuffer::new(plan, fields.len());
    for i in 0..plan.nx {
        let x = plan.x(i);
        for j in 0..plan.ny {
            let y = plan.y(j);
            for (k, &field) in fields.iter().enumerate() {
                buffer.set(i, j, k, snapshot.interpolate(field, x, y));
            }
        }
    }
    buffer
}
