//! Storage port — repository trait for machine persistence.

use std::future::Future;

use machinehub_domain::error::MachineHubError;
use machinehub_domain::id::MachineId;
use machinehub_domain::machine::Machine;

/// Repository for persisting and querying [`Machine`]s.
///
/// Every method maps to a single statement against the backing table.
pub trait MachineRepository {
    /// Insert a new machine.
    ///
    /// Implementations report an already-used id as
    /// [`MachineHubError::Conflict`].
    fn create(&self, machine: Machine)
    -> impl Future<Output = Result<Machine, MachineHubError>> + Send;

    /// Get a machine by its identifier.
    fn get_by_id(
        &self,
        id: &MachineId,
    ) -> impl Future<Output = Result<Option<Machine>, MachineHubError>> + Send;

    /// Get all machines.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Machine>, MachineHubError>> + Send;

    /// Overwrite name, outlet and status of the machine with the same id.
    ///
    /// Updating a missing id is not an error and changes nothing.
    fn update(&self, machine: Machine)
    -> impl Future<Output = Result<Machine, MachineHubError>> + Send;

    /// Delete a machine by its identifier.
    fn delete(&self, id: &MachineId) -> impl Future<Output = Result<(), MachineHubError>> + Send;
}
