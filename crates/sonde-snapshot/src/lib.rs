//! Snapshot storage and point interpolation for sonde.
//!
//! A [`Snapshot`] is a [`UniformMesh`] plus an insertion-ordered table of
//! named per-cell scalar fields. The extraction pipeline touches a
//! snapshot through exactly three operations: [`restore`] (deserialize
//! from a file), field registration for derived quantities, and
//! [`Snapshot::interpolate`] (bilinear point sampling).
//!
//! The on-disk format is a deliberately simple little-endian layout —
//! no compression, no alignment padding, no self-describing schema.
//! See the [`codec`] module for the exact byte layout.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod mesh;
pub mod names;
pub mod reader;
pub mod snapshot;
pub mod writer;

pub use error::SnapshotError;
pub use mesh::UniformMesh;
pub use reader::{restore, restore_path};
pub use snapshot::Snapshot;
pub use writer::{dump, dump_path};

/// Magic bytes at the start of every snapshot file.
pub const MAGIC: [u8; 4] = *b"SOND";

/// Current snapshot format version.
pub const FORMAT_VERSION: u8 = 1;
