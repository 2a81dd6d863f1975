//! Strongly-typed field identifiers.

use std::fmt;

/// Identifies a scalar field within a snapshot.
///
/// Fields are registered in order and assigned sequential IDs.
/// `FieldId(n)` corresponds to the n-th registered field, so the ID
/// doubles as the output column index during sampling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u32);

impl FieldId {
    /// The ID as a buffer/column index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FieldId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
