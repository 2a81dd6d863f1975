//! Raw field names shared with the solver side.
//!
//! Snapshot files produced by the simulation carry these three fields;
//! the reference field computers read them by name. Derived fields are
//! registered on top under their own names (`"D2c"`, `"vel"`).

/// Phase (volume) fraction: 1 in the liquid, 0 in the gas.
pub const PHASE: &str = "f";

/// Velocity x-component (along the symmetry axis in axisymmetric mode).
pub const VEL_X: &str = "u.x";

/// Velocity y-component (radial in axisymmetric mode).
pub const VEL_Y: &str = "u.y";
