//! Geometry mode for derived-field computation.

use std::fmt;

/// Coordinate interpretation of the simulation mesh.
///
/// Fixed per build in the `getdata` binary (there is no CLI flag); a
/// run-time parameter at the library level. The mode gates the azimuthal
/// strain term in the strain-rate invariant — velocity magnitude is
/// geometry-agnostic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Geometry {
    /// x is the axial coordinate, y the radial distance from the
    /// symmetry axis. Adds the azimuthal `u_y / y` strain component.
    #[default]
    Axisymmetric,
    /// Plain 2D Cartesian coordinates.
    Planar,
}

impl Geometry {
    /// Whether the azimuthal strain term applies.
    pub fn is_axisymmetric(self) -> bool {
        matches!(self, Self::Axisymmetric)
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Axisymmetric => write!(f, "axisymmetric"),
            Self::Planar => write!(f, "planar"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_axisymmetric() {
        assert_eq!(Geometry::default(), Geometry::Axisymmetric);
        assert!(Geometry::default().is_axisymmetric());
        assert!(!Geometry::Planar.is_axisymmetric());
    }

    #[test]
    fn display_names() {
        assert_eq!(Geometry::Axisymmetric.to_string(), "axisymmetric");
        assert_eq!(Geometry::Planar.to_string(), "planar");
    }
}
