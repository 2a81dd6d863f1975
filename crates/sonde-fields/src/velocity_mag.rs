//! Velocity magnitude field.

use crate::compute::FieldCompute;
use sonde_core::ComputeError;
use sonde_snapshot::names::{VEL_X, VEL_Y};
use sonde_snapshot::Snapshot;

/// Computes `sqrt(u.x^2 + u.y^2)` per cell, registered as `"vel"`.
///
/// Geometry-independent: the component names keep their simulation
/// meaning (radial/axial in axisymmetric runs) but the magnitude is
/// the same formula either way.
#[derive(Debug, Default)]
pub struct VelocityMagnitude;

impl VelocityMagnitude {
    /// Create the computer.
    pub fn new() -> Self {
        Self
    }
}

impl FieldCompute for VelocityMagnitude {
    fn name(&self) -> &str {
        "vel"
    }

    fn inputs(&self) -> &[&str] {
        &[VEL_X, VEL_Y]
    }

    fn compute(&self, snapshot: &Snapshot) -> Result<Vec<f64>, ComputeError> {
        let ux = snapshot
            .field(VEL_X)
            .ok_or_else(|| ComputeError::MissingField {
                name: VEL_X.to_string(),
            })?;
        let uy = snapshot
            .field(VEL_Y)
            .ok_or_else(|| ComputeError::MissingField {
                name: VEL_Y.to_string(),
            })?;

        Ok(ux
            .iter()
            .zip(uy)
            .map(|(&x, &y)| (x * x + y * y).sqrt())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonde_snapshot::UniformMesh;

    #[test]
    fn magnitude_of_three_four_is_five() {
        let mesh = UniformMesh::new(2, 2, 0.0, 0.0, 1.0).unwrap();
        let mut snap = Snapshot::new(mesh);
        snap.insert_scalar(VEL_X, vec![3.0, 0.0, -3.0, 0.0]).unwrap();
        snap.insert_scalar(VEL_Y, vec![4.0, 0.0, 4.0, -2.0]).unwrap();

        let vel = VelocityMagnitude::new();
        let out = vel.compute(&snap).unwrap();
        assert_eq!(out, vec![5.0, 0.0, 5.0, 2.0]);
    }

    #[test]
    fn missing_component_is_reported() {
        let mesh = UniformMesh::new(2, 2, 0.0, 0.0, 1.0).unwrap();
        let mut snap = Snapshot::new(mesh);
        snap.insert_scalar(VEL_X, vec![0.0; 4]).unwrap();

        let vel = VelocityMagnitude::new();
        assert_eq!(
            vel.compute(&snap),
            Err(ComputeError::MissingField {
                name: VEL_Y.into()
            })
        );
    }
}
