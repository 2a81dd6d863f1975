//! Row output for sampled grids.

use std::io::{self, Write};

use crate::buffer::SampleBuffer;
use crate::grid::GridPlan;

/// Stream `x y v0 v1 ...` rows for every grid point.
///
/// Columns (x) form the outer loop, rows (y) the inner loop, so
/// consumers see the grid one x-column at a time. Values use the
/// shortest round-trippable decimal form. The sink is flushed once
/// after the last row.
pub fn write_rows(
    plan: &GridPlan,
    buffer: &SampleBuffer,
    w: &mut dyn Write,
) -> io::Result<()> {
    for i in 0..plan.nx {
        let x = plan.x(i);
        for j in 0..plan.ny {
            let y = plan.y(j);
            write!(w, "{x} {y}")?;
            for &v in buffer.point(i, j) {
                write!(w, " {v}")?;
            }
            writeln!(w)?;
        }
    }
    w.flush()
}
