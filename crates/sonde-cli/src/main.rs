//! `getdata`: sample derived snapshot fields onto a regular grid.
//!
//! Usage: `getdata <filename> <xmin> <ymin> <xmax> <ymax> <ny>`
//!
//! Restores the snapshot, computes the strain-rate invariant (`D2c`)
//! and velocity magnitude (`vel`) on the native mesh, and streams
//! `x y D2c vel` rows for every grid point to the diagnostic stream.
//! Downstream tooling reads the rows from stderr, so stdout stays
//! clean. Exits 1 on any failure.

#![forbid(unsafe_code)]

use std::env;
use std::io;
use std::process;

use sonde_core::Geometry;
use sonde_extract::{run, ExtractError, ExtractionConfig};

/// Coordinate interpretation, fixed per build like the solver's.
const GEOMETRY: Geometry = Geometry::Axisymmetric;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (program, rest) = match args.split_first() {
        Some((p, rest)) => (p.as_str(), rest),
        None => ("getdata", &[][..]),
    };

    let cfg = match ExtractionConfig::from_args(rest) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} <filename> <xmin> <ymin> <xmax> <ymax> <ny>");
            process::exit(1);
        }
    };

    let stderr = io::stderr();
    let mut out = stderr.lock();
    if let Err(e) = run(&cfg, GEOMETRY, &mut out) {
        drop(out);
        report(&e);
        process::exit(1);
    }
}

fn report(e: &ExtractError) {
    eprintln!("Error: {e}");
    match e {
        ExtractError::Grid(_) => {
            eprintln!("Check the provided bounds.");
        }
        ExtractError::Snapshot(_) => {
            eprintln!("Check that the snapshot file exists and is readable.");
        }
        _ => {}
    }
}
