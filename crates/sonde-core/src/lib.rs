//! Core types for the sonde snapshot extraction toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions shared across the sonde workspace:
//! field identifiers, the geometry mode, and the compute error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod id;

pub use error::ComputeError;
pub use geometry::Geometry;
pub use id::FieldId;
