//! Derived-field computers for sonde.
//!
//! A [`FieldCompute`] turns raw snapshot fields (phase fraction,
//! velocity components) into one derived per-cell scalar. The
//! [`FieldRegistry`] holds an ordered list of computers and runs them
//! against a snapshot, registering each output field as it goes.
//! Registration order fixes the output column order downstream.
//!
//! Two computers ship with the crate:
//! [`StrainRateInvariant`] (log-scaled second invariant of the
//! strain-rate tensor, viscosity-weighted) and [`VelocityMagnitude`].
//! [`reference_registry`] wires them up in the standard order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compute;
pub mod registry;
pub mod strain_rate;
pub mod velocity_mag;

pub use compute::FieldCompute;
pub use registry::FieldRegistry;
pub use strain_rate::StrainRateInvariant;
pub use velocity_mag::VelocityMagnitude;

use sonde_core::{ComputeError, Geometry};

/// Build the standard registry: strain-rate invariant first, velocity
/// magnitude second.
pub fn reference_registry(geometry: Geometry) -> Result<FieldRegistry, ComputeError> {
    let mut registry = FieldRegistry::new();
    registry.register(Box::new(
        StrainRateInvariant::builder().geometry(geometry).build(),
    ))?;
    registry.register(Box::new(VelocityMagnitude::new()))?;
    Ok(registry)
}
