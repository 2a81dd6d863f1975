//! In-memory snapshot state: a mesh plus named scalar fields.

use crate::error::SnapshotError;
use crate::mesh::UniformMesh;
use indexmap::IndexMap;
use sonde_core::FieldId;

/// A restored simulation snapshot.
///
/// Holds a [`UniformMesh`] and an insertion-ordered table of named
/// per-cell scalar fields. Registration order determines [`FieldId`]
/// assignment and is preserved across dump/restore — derived-field
/// output columns depend on it.
///
/// The extraction pipeline mutates a snapshot only during the compute
/// phase (registering and filling derived fields); sampling reads it
/// through [`interpolate`](Snapshot::interpolate) alone.
///
/// # Examples
///
/// ```
/// use sonde_snapshot::{Snapshot, UniformMesh};
///
/// let mesh = UniformMesh::new(2, 2, 0.0, 0.0, 1.0).unwrap();
/// let mut snap = Snapshot::new(mesh);
/// let id = snap.register_scalar("f").unwrap();
/// snap.values_mut(id).unwrap().fill(1.0);
/// assert_eq!(snap.interpolate(id, 1.0, 1.0), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct Snapshot {
    mesh: UniformMesh,
    fields: IndexMap<String, Vec<f64>>,
}

impl Snapshot {
    /// Create an empty snapshot over the given mesh.
    pub fn new(mesh: UniformMesh) -> Self {
        Self {
            mesh,
            fields: IndexMap::new(),
        }
    }

    /// The snapshot's mesh.
    pub fn mesh(&self) -> &UniformMesh {
        &self.mesh
    }

    /// Number of registered fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Register a new zero-initialized scalar field.
    ///
    /// Returns `Err(SnapshotError::DuplicateField)` if the name is taken.
    pub fn register_scalar(&mut self, name: &str) -> Result<FieldId, SnapshotError> {
        if self.fields.contains_key(name) {
            return Err(SnapshotError::DuplicateField { name: name.into() });
        }
        let id = FieldId(self.fields.len() as u32);
        self.fields
            .insert(name.to_string(), vec![0.0; self.mesh.cell_count()]);
        Ok(id)
    }

    /// Register a scalar field with the given per-cell values.
    ///
    /// Rejects duplicate names and buffers whose length does not match
    /// the mesh cell count.
    pub fn insert_scalar(&mut self, name: &str, values: Vec<f64>) -> Result<FieldId, SnapshotError> {
        if values.len() != self.mesh.cell_count() {
            return Err(SnapshotError::FieldLengthMismatch {
                name: name.into(),
                expected: self.mesh.cell_count(),
                found: values.len(),
            });
        }
        let id = self.register_scalar(name)?;
        self.fields[id.index()] = values;
        Ok(id)
    }

    /// Look up a field's ID by name.
    pub fn field_id(&self, name: &str) -> Option<FieldId> {
        self.fields.get_index_of(name).map(|i| FieldId(i as u32))
    }

    /// Name of the field with the given ID.
    pub fn field_name(&self, field: FieldId) -> Option<&str> {
        self.fields.get_index(field.index()).map(|(k, _)| k.as_str())
    }

    /// Iterate over field names in registration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    /// Per-cell values of a field.
    pub fn values(&self, field: FieldId) -> Option<&[f64]> {
        self.fields.get_index(field.index()).map(|(_, v)| v.as_slice())
    }

    /// Mutable per-cell values of a field.
    pub fn values_mut(&mut self, field: FieldId) -> Option<&mut [f64]> {
        self.fields
            .get_index_mut(field.index())
            .map(|(_, v)| v.as_mut_slice())
    }

    /// Per-cell values of a field, by name.
    pub fn field(&self, name: &str) -> Option<&[f64]> {
        self.fields.get(name).map(|v| v.as_slice())
    }

    /// Bilinearly interpolate a field at the point `(x, y)`.
    ///
    /// Points outside the mesh clamp to the boundary. An unknown field
    /// ID yields NaN — the sampler stores whatever comes back and never
    /// special-cases, matching the single-shot batch contract.
    pub fn interpolate(&self, field: FieldId, x: f64, y: f64) -> f64 {
        let Some(values) = self.values(field) else {
            return f64::NAN;
        };
        self.mesh
            .bilinear_support(x, y)
            .iter()
            .map(|&(i, w)| values[i] * w)
            .sum()
    }
}
