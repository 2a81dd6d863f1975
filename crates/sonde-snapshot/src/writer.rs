//! Snapshot dump.
//!
//! [`dump`] streams a full snapshot to any `Write` sink in the binary
//! format [`restore`](crate::restore) reads back. Mostly used by tests
//! and upstream tooling that prepares extraction inputs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::codec::{encode_header, write_f64_le, write_length_prefixed_str, SnapshotHeader};
use crate::error::SnapshotError;
use crate::snapshot::Snapshot;

/// Dump a snapshot to a byte stream.
///
/// Fields are written in registration order so a restore reproduces
/// the same field IDs.
pub fn dump(snapshot: &Snapshot, w: &mut dyn Write) -> Result<(), SnapshotError> {
    let mesh = snapshot.mesh();
    let (x0, y0) = mesh.origin();
    let header = SnapshotHeader {
        rows: mesh.rows(),
        cols: mesh.cols(),
        x0,
        y0,
        delta: mesh.delta(),
        field_count: snapshot.field_count() as u32,
    };
    encode_header(w, &header)?;

    for name in snapshot.field_names() {
        write_length_prefixed_str(w, name)?;
        // field_names and field draw from the same table, so the
        // lookup cannot miss.
        let values = snapshot.field(name).unwrap_or(&[]);
        for &v in values {
            write_f64_le(w, v)?;
        }
    }

    Ok(())
}

/// Dump a snapshot to a file on disk.
pub fn dump_path(snapshot: &Snapshot, path: &Path) -> Result<(), SnapshotError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    dump(snapshot, &mut writer)?;
    writer.flush()?;
    Ok(())
}
