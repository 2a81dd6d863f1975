//! The sonde extraction pipeline.
//!
//! Wires the other crates into the single-pass batch flow: parse an
//! [`ExtractionConfig`], derive a [`GridPlan`], restore the snapshot,
//! run the derived-field registry, sample every grid point into a
//! [`SampleBuffer`], and stream `x y D2c vel` rows to the output sink.
//!
//! [`run`] is the whole program minus argument collection and exit
//! codes; the `getdata` binary is a thin wrapper around it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod error;
pub mod grid;
pub mod pipeline;
pub mod sampler;
pub mod writer;

pub use buffer::SampleBuffer;
pub use config::{ConfigError, ExtractionConfig};
pub use error::ExtractError;
pub use grid::{GridError, GridPlan};
pub use pipeline::{run, ExtractSummary};
pub use sampler::sample_fields;
pub use writer::write_rows;
