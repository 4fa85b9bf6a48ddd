//! Shared application state for axum handlers.

use std::sync::Arc;

use machinehub_app::ports::MachineRepository;
use machinehub_app::services::machine_service::MachineService;

/// Application state shared across all axum handlers.
///
/// Generic over the machine repository to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<MR> {
    /// Machine CRUD service.
    pub machine_service: Arc<MachineService<MR>>,
}

impl<MR> Clone for AppState<MR> {
    fn clone(&self) -> Self {
        Self {
            machine_service: Arc::clone(&self.machine_service),
        }
    }
}

impl<MR> AppState<MR>
where
    MR: MachineRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(machine_service: MachineService<MR>) -> Self {
        Self {
            machine_service: Arc::new(machine_service),
        }
    }
}
