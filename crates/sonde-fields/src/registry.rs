//! Ordered registry of derived-field computers.

use crate::compute::FieldCompute;
use sonde_core::{ComputeError, FieldId};
use sonde_snapshot::{Snapshot, SnapshotError};

/// An ordered list of [`FieldCompute`] implementations.
///
/// Registration order is output column order: [`run`](FieldRegistry::run)
/// registers and fills each output field in the order the computers
/// were added.
#[derive(Default)]
pub struct FieldRegistry {
    computers: Vec<Box<dyn FieldCompute>>,
}

impl FieldRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a computer at the end of the run order.
    ///
    /// Rejects a computer whose output name is already claimed by an
    /// earlier registration.
    pub fn register(&mut self, computer: Box<dyn FieldCompute>) -> Result<(), ComputeError> {
        if self.computers.iter().any(|c| c.name() == computer.name()) {
            return Err(ComputeError::DuplicateOutput {
                name: computer.name().to_string(),
            });
        }
        self.computers.push(computer);
        Ok(())
    }

    /// Output field names in run order.
    pub fn names(&self) -> Vec<&str> {
        self.computers.iter().map(|c| c.name()).collect()
    }

    /// Number of registered computers.
    pub fn len(&self) -> usize {
        self.computers.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.computers.is_empty()
    }

    /// Run every computer against the snapshot.
    ///
    /// For each computer in order: verify its inputs are present,
    /// compute the derived buffer, then insert it as a new snapshot
    /// field. Returns the new field IDs in run order. The first failure
    /// aborts the run; earlier outputs stay inserted.
    pub fn run(&self, snapshot: &mut Snapshot) -> Result<Vec<FieldId>, ComputeError> {
        let mut ids = Vec::with_capacity(self.computers.len());
        for computer in &self.computers {
            for &input in computer.inputs() {
                if snapshot.field(input).is_none() {
                    return Err(ComputeError::MissingField {
                        name: input.to_string(),
                    });
                }
            }
            let values = computer.compute(snapshot)?;
            let id = snapshot
                .insert_scalar(computer.name(), values)
                .map_err(|e| match e {
                    SnapshotError::DuplicateField { name } => {
                        ComputeError::DuplicateOutput { name }
                    }
                    SnapshotError::FieldLengthMismatch {
                        name,
                        expected,
                        found,
                    } => ComputeError::ShapeMismatch {
                        name,
                        expected,
                        found,
                    },
                    other => ComputeError::Failed {
                        reason: other.to_string(),
                    },
                })?;
            ids.push(id);
        }
        Ok(ids)
    }
}
