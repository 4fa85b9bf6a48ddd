//! Machine service — use-cases for managing machines.

use machinehub_domain::error::{MachineHubError, NotFoundError};
use machinehub_domain::id::MachineId;
use machinehub_domain::machine::Machine;

use crate::ports::MachineRepository;

/// Application service for machine CRUD operations.
pub struct MachineService<R> {
    repo: R,
}

impl<R: MachineRepository> MachineService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all machines.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_machines(&self) -> Result<Vec<Machine>, MachineHubError> {
        let machines = self.repo.get_all().await?;
        tracing::debug!(count = machines.len(), "listed machines");
        Ok(machines)
    }

    /// Look up a machine by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`MachineHubError::NotFound`] when no machine with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, id), fields(machine_id = %id))]
    pub async fn get_machine(&self, id: &MachineId) -> Result<Machine, MachineHubError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Register a new machine.
    ///
    /// # Errors
    ///
    /// Returns [`MachineHubError::Conflict`] when the id is already taken, or
    /// a storage error propagated from the repository.
    #[tracing::instrument(skip(self, machine), fields(machine_id = %machine.id))]
    pub async fn create_machine(&self, machine: Machine) -> Result<Machine, MachineHubError> {
        self.repo.create(machine).await
    }

    /// Overwrite the mutable fields of a machine and echo the input back.
    ///
    /// Does not check that the machine exists; updating an unknown id leaves
    /// the table untouched.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, machine), fields(machine_id = %machine.id))]
    pub async fn update_machine(&self, machine: Machine) -> Result<Machine, MachineHubError> {
        self.repo.update(machine).await
    }

    /// Delete a machine by id after checking that it exists.
    ///
    /// # Errors
    ///
    /// Returns [`MachineHubError::NotFound`] when no machine with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, id), fields(machine_id = %id))]
    pub async fn delete_machine(&self, id: &MachineId) -> Result<(), MachineHubError> {
        if self.repo.get_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }
        self.repo.delete(id).await
    }
}

fn not_found(id: &MachineId) -> MachineHubError {
    NotFoundError {
        entity: "Machine",
        id: id.to_string(),
    }
    .into()
}
