//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod machines;

use axum::Router;
use axum::routing::get;

use machinehub_app::ports::MachineRepository;

use crate::state::AppState;

/// Build the machine sub-router.
///
/// Machines are served under `/users` to stay compatible with existing clients.
pub fn routes<MR>() -> Router<AppState<MR>>
where
    MR: MachineRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/users",
            get(machines::list::<MR>).post(machines::create::<MR>),
        )
        .route(
            "/users/{id}",
            get(machines::get::<MR>)
                .put(machines::update::<MR>)
                .delete(machines::delete::<MR>),
        )
}
