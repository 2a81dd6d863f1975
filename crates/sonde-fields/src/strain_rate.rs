//! Log-scaled second invariant of the strain-rate tensor.
//!
//! Central differences on the snapshot mesh, with the azimuthal term
//! included for axisymmetric geometry. Constructed via the builder
//! pattern: [`StrainRateInvariant::builder`].

use crate::compute::FieldCompute;
use sonde_core::{ComputeError, Geometry};
use sonde_snapshot::names::{PHASE, VEL_X, VEL_Y};
use sonde_snapshot::Snapshot;

/// Output value assigned where the weighted invariant is not positive.
pub const LOG_FLOOR: f64 = -10.0;

/// Cells whose center sits closer to the axis than this skip the
/// azimuthal term.
pub const AXIS_EPSILON: f64 = 1e-10;

/// Default dynamic viscosity ratio of the gas phase to the liquid phase.
pub const GAS_VISCOSITY_RATIO: f64 = 2e-2;

/// Computes `log10(mu_r * D2)` per cell, registered as `"D2c"`.
///
/// `D2` is the second invariant of the strain-rate tensor, from central
/// differences of the velocity components. In axisymmetric geometry
/// (`y` is the distance from the symmetry axis):
///
/// ```text
/// D11 = d(u.y)/dy
/// D22 = u.y / y        (azimuthal; 0 within AXIS_EPSILON of the axis)
/// D33 = d(u.x)/dx
/// D13 = (d(u.y)/dx + d(u.x)/dy) / 2
/// D2  = D11^2 + D22^2 + D33^2 + 2*D13^2
/// ```
///
/// Planar geometry drops the `D22` term. The weight `mu_r` is the
/// phase-averaged viscosity ratio `f + (1 - f) * gas_viscosity_ratio`,
/// 1 in liquid and the gas ratio in pure gas. Non-positive weighted
/// invariants (including NaN) map to [`LOG_FLOOR`] instead of the
/// logarithm.
///
/// Stencil offsets that fall outside the mesh clamp to the boundary,
/// so edge cells see one-sided differences over the same `2 * delta`
/// denominator.
///
/// # Construction
///
/// ```
/// use sonde_core::Geometry;
/// use sonde_fields::StrainRateInvariant;
///
/// let d2c = StrainRateInvariant::builder()
///     .geometry(Geometry::Axisymmetric)
///     .build();
/// ```
#[derive(Debug)]
pub struct StrainRateInvariant {
    geometry: Geometry,
    gas_viscosity_ratio: f64,
}

/// Builder for [`StrainRateInvariant`].
///
/// Both knobs have defaults: axisymmetric geometry and a gas viscosity
/// ratio of [`GAS_VISCOSITY_RATIO`].
#[derive(Debug)]
pub struct StrainRateInvariantBuilder {
    geometry: Geometry,
    gas_viscosity_ratio: f64,
}

impl StrainRateInvariant {
    /// Create a new builder for configuring a `StrainRateInvariant`.
    pub fn builder() -> StrainRateInvariantBuilder {
        StrainRateInvariantBuilder {
            geometry: Geometry::default(),
            gas_viscosity_ratio: GAS_VISCOSITY_RATIO,
        }
    }

    /// Geometry the invariant is computed under.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Viscosity ratio applied in the gas phase.
    pub fn gas_viscosity_ratio(&self) -> f64 {
        self.gas_viscosity_ratio
    }
}

impl StrainRateInvariantBuilder {
    /// Set the geometry (default axisymmetric).
    pub fn geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the gas-phase viscosity ratio (default [`GAS_VISCOSITY_RATIO`]).
    pub fn gas_viscosity_ratio(mut self, ratio: f64) -> Self {
        self.gas_viscosity_ratio = ratio;
        self
    }

    /// Finish the builder.
    pub fn build(self) -> StrainRateInvariant {
        StrainRateInvariant {
            geometry: self.geometry,
            gas_viscosity_ratio: self.gas_viscosity_ratio,
        }
    }
}

impl FieldCompute for StrainRateInvariant {
    fn name(&self) -> &str {
        "D2c"
    }

    fn inputs(&self) -> &[&str] {
        &[PHASE, VEL_X, VEL_Y]
    }

    fn compute(&self, snapshot: &Snapshot) -> Result<Vec<f64>, ComputeError> {
        let mesh = snapshot.mesh();
        let phase = require(snapshot, PHASE)?;
        let ux = require(snapshot, VEL_X)?;
        let uy = require(snapshot, VEL_Y)?;

        let two_delta = 2.0 * mesh.delta();
        let mut out = Vec::with_capacity(mesh.cell_count());

        for r in 0..mesh.rows() {
            let y = mesh.cell_y(r);
            for c in 0..mesh.cols() {
                let i = mesh.index(r, c);

                let d11 = (uy[mesh.offset(r, c, 1, 0)] - uy[mesh.offset(r, c, -1, 0)])
                    / two_delta;
                let d33 = (ux[mesh.offset(r, c, 0, 1)] - ux[mesh.offset(r, c, 0, -1)])
                    / two_delta;
                let d13 = 0.5
                    * ((uy[mesh.offset(r, c, 0, 1)] - uy[mesh.offset(r, c, 0, -1)]
                        + ux[mesh.offset(r, c, 1, 0)]
                        - ux[mesh.offset(r, c, -1, 0)])
                        / two_delta);

                let mut d2 = d11 * d11 + d33 * d33 + 2.0 * d13 * d13;
                if self.geometry.is_axisymmetric() {
                    let d22 = if y > AXIS_EPSILON { uy[i] / y } else { 0.0 };
                    d2 += d22 * d22;
                }

                let mu_r = phase[i] + (1.0 - phase[i]) * self.gas_viscosity_ratio;
                let weighted = mu_r * d2;
                out.push(if weighted > 0.0 {
                    weighted.log10()
                } else {
                    LOG_FLOOR
                });
            }
        }

        Ok(out)
    }
}

fn require<'a>(snapshot: &'a Snapshot, name: &str) -> Result<&'a [f64], ComputeError> {
    snapshot
        .field(name)
        .ok_or_else(|| ComputeError::MissingField {
            name: name.to_string(),
        })
}
