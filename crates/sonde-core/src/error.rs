//! Error types shared by field computers.

use std::error::Error;
use std::fmt;

/// Errors surfaced by a derived-field computation.
///
/// Returned by `FieldCompute::compute()` and wrapped by the extraction
/// pipeline. All variants are fatal to the run — the pipeline never
/// retries or emits partial columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComputeError {
    /// A raw input field the computer reads is not present in the snapshot.
    MissingField {
        /// Name of the absent field.
        name: String,
    },
    /// The computer's output name collides with an existing field.
    DuplicateOutput {
        /// Name of the colliding field.
        name: String,
    },
    /// A field buffer does not match the mesh cell count.
    ShapeMismatch {
        /// Name of the offending field.
        name: String,
        /// Cell count implied by the mesh.
        expected: usize,
        /// Length of the field buffer actually found.
        found: usize,
    },
    /// The computation itself failed.
    Failed {
        /// Human-readable failure description.
        reason: String,
    },
}

impl fmt::Display for ComputeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { name } => {
                write!(f, "field '{name}' not present in snapshot")
            }
            Self::DuplicateOutput { name } => {
                write!(f, "output field '{name}' already registered")
            }
            Self::ShapeMismatch {
                name,
                expected,
                found,
            } => {
                write!(
                    f,
                    "field '{name}' has {found} values, mesh has {expected} cells"
                )
            }
            Self::Failed { reason } => write!(f, "field computation failed: {reason}"),
        }
    }
}

impl Error for ComputeError {}
