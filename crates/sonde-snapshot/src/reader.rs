//! Snapshot restore.
//!
//! [`restore`] reads a full snapshot from any `Read` source, validating
//! the header before touching any field payload. Restore is all-or-nothing:
//! a malformed file yields an error, never a partial snapshot.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::codec::{decode_header, read_f64_le, read_length_prefixed_str};
use crate::error::SnapshotError;
use crate::mesh::UniformMesh;
use crate::snapshot::Snapshot;

/// Largest cell count `restore` will allocate a field buffer for.
///
/// Header dimensions are untrusted until the payload has been read, so
/// the buffer size they imply is capped before allocation. 2^28 cells
/// is a 2 GiB field, far beyond any simulation dump this tool reads.
const MAX_RESTORE_CELLS: usize = 1 << 28;

/// Restore a snapshot from a byte stream.
///
/// Validates magic and format version, rebuilds the mesh, then reads
/// each field record (length-prefixed name plus `rows * cols` f64
/// values) in file order. Field order in the file becomes registration
/// order in the snapshot.
pub fn restore(r: &mut dyn Read) -> Result<Snapshot, SnapshotError> {
    let header = decode_header(r)?;
    let mesh = UniformMesh::new(header.rows, header.cols, header.x0, header.y0, header.delta)?;
    let cell_count = mesh.cell_count();
    if cell_count > MAX_RESTORE_CELLS {
        return Err(SnapshotError::MalformedSnapshot {
            detail: format!(
                "header claims {} x {} cells, over the {MAX_RESTORE_CELLS} restore limit",
                header.rows, header.cols
            ),
        });
    }
    let mut snapshot = Snapshot::new(mesh);

    for _ in 0..header.field_count {
        let name = read_length_prefixed_str(r)?;
        let mut values = Vec::with_capacity(cell_count);
        for _ in 0..cell_count {
            values.push(read_f64_le(r)?);
        }
        snapshot.insert_scalar(&name, values)?;
    }

    Ok(snapshot)
}

/// Restore a snapshot from a file on disk.
pub fn restore_path(path: &Path) -> Result<Snapshot, SnapshotError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    restore(&mut reader)
}
