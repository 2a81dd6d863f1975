//! Binary encode/decode for the snapshot format.
//!
//! All integers are little-endian. Field names are length-prefixed with
//! a `u32` length. The format is intentionally simple — no compression,
//! no alignment padding, no self-describing schema.

use std::io::{Read, Write};

use crate::error::SnapshotError;
use crate::{FORMAT_VERSION, MAGIC};

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), SnapshotError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), SnapshotError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian f64.
pub fn write_f64_le(w: &mut dyn Write, v: f64) -> Result<(), SnapshotError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a length-prefixed UTF-8 string (u32 length + bytes).
pub fn write_length_prefixed_str(w: &mut dyn Write, s: &str) -> Result<(), SnapshotError> {
    write_u32_le(w, s.len() as u32)?;
    w.write_all(s.as_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, SnapshotError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, SnapshotError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a little-endian f64.
pub fn read_f64_le(r: &mut dyn Read) -> Result<f64, SnapshotError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}

/// Read a length-prefixed UTF-8 string.
pub fn read_length_prefixed_str(r: &mut dyn Read) -> Result<String, SnapshotError> {
    let len = read_u32_le(r)? as usize;
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    String::from_utf8(buf).map_err(|e| SnapshotError::MalformedSnapshot {
        detail: format!("invalid UTF-8 field name: {e}"),
    })
}

// ── Header encode/decode ────────────────────────────────────────

/// Decoded snapshot file header: mesh descriptor plus field count.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapshotHeader {
    /// Mesh rows (y cells).
    pub rows: u32,
    /// Mesh columns (x cells).
    pub cols: u32,
    /// Domain origin, x.
    pub x0: f64,
    /// Domain origin, y.
    pub y0: f64,
    /// Cell size (square cells).
    pub delta: f64,
    /// Number of field records that follow.
    pub field_count: u32,
}

/// Encode the snapshot file header (magic, version, mesh descriptor).
pub fn encode_header(w: &mut dyn Write, header: &SnapshotHeader) -> Result<(), SnapshotError> {
    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;

    write_u32_le(w, header.rows)?;
    write_u32_le(w, header.cols)?;
    write_f64_le(w, header.x0)?;
    write_f64_le(w, header.y0)?;
    write_f64_le(w, header.delta)?;
    write_u32_le(w, header.field_count)?;

    Ok(())
}

/// Decode and validate the snapshot file header.
pub fn decode_header(r: &mut dyn Read) -> Result<SnapshotHeader, SnapshotError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(SnapshotError::InvalidMagic);
    }

    let version = read_u8(r)?;
    if version != FORMAT_VERSION {
        return Err(SnapshotError::UnsupportedVersion { found: version });
    }

    Ok(SnapshotHeader {
        rows: read_u32_le(r)?,
        cols: read_u32_le(r)?,
        x0: read_f64_le(r)?,
        y0: read_f64_le(r)?,
        delta: read_f64_le(r)?,
        field_count: read_u32_le(r)?,
    })
}
