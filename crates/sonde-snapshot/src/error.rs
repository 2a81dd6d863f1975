//! Error types for snapshot storage and the restore/dump codec.

use std::fmt;
use std::io;

/// Errors from snapshot construction, field registration, or the codec.
#[derive(Debug)]
pub enum SnapshotError {
    /// An I/O error occurred during restore or dump.
    Io(io::Error),
    /// The file does not start with the expected `b"SOND"` magic bytes.
    InvalidMagic,
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the file.
        found: u8,
    },
    /// The snapshot body could not be decoded (truncated or corrupt data).
    MalformedSnapshot {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// A mesh dimension is zero.
    EmptyMesh,
    /// The mesh cell spacing is not finite and positive.
    InvalidDelta {
        /// The offending spacing value.
        value: f64,
    },
    /// A field with this name is already registered.
    DuplicateField {
        /// The name that collided.
        name: String,
    },
    /// A field buffer length does not match the mesh cell count.
    FieldLengthMismatch {
        /// Name of the offending field.
        name: String,
        /// Cell count implied by the mesh.
        expected: usize,
        /// Length of the supplied buffer.
        found: usize,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"SOND\")"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported snapshot format version {found}")
            }
            Self::MalformedSnapshot { detail } => {
                write!(f, "malformed snapshot: {detail}")
            }
            Self::EmptyMesh => write!(f, "mesh has zero cells"),
            Self::InvalidDelta { value } => {
                write!(f, "mesh spacing must be finite and positive, got {value}")
            }
            Self::DuplicateField { name } => {
                write!(f, "field '{name}' is already registered")
            }
            Self::FieldLengthMismatch {
                name,
                expected,
                found,
            } => {
                write!(
                    f,
                    "field '{name}' has {found} values, mesh has {expected} cells"
                )
            }
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SnapshotError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
