//! Machine — a physical device plugged into a numbered power outlet.

use serde::{Deserialize, Serialize};

use crate::id::MachineId;

/// A device attached to a power outlet.
///
/// `outlet_number` and `status` are free-form: no range or label set is
/// enforced here or anywhere else in the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub id: MachineId,
    pub name: String,
    pub outlet_number: i64,
    pub status: String,
}

/// The mutable part of a [`Machine`], as accepted by an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineChanges {
    pub name: String,
    pub outlet_number: i64,
    pub status: String,
}

impl Machine {
    /// Create a builder for constructing a [`Machine`].
    #[must_use]
    pub fn builder(id: impl Into<MachineId>) -> MachineBuilder {
        MachineBuilder::new(id.into())
    }

    /// Combine an identifier with a set of changes.
    #[must_use]
    pub fn from_changes(id: MachineId, changes: MachineChanges) -> Self {
        Self {
            id,
            name: changes.name,
            outlet_number: changes.outlet_number,
            status: changes.status,
        }
    }
}

/// Step-by-step builder for [`Machine`].
#[derive(Debug)]
pub struct MachineBuilder {
    id: MachineId,
    name: String,
    outlet_number: i64,
    status: String,
}

impl MachineBuilder {
    fn new(id: MachineId) -> Self {
        Self {
            id,
            name: String::new(),
            outlet_number: 0,
            status: String::new(),
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn outlet_number(mut self, outlet_number: i64) -> Self {
        self.outlet_number = outlet_number;
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Consume the builder and return a [`Machine`].
    #[must_use]
    pub fn build(self) -> Machine {
        Machine {
            id: self.id,
            name: self.name,
            outlet_number: self.outlet_number,
            status: self.status,
        }
    }
}
