//! JSON REST handlers for machines.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use machinehub_app::ports::MachineRepository;
use machinehub_domain::id::MachineId;
use machinehub_domain::machine::{Machine, MachineChanges};

use crate::error::ApiError;
use crate::state::AppState;

/// Confirmation body sent after a successful delete.
pub const DELETED_MESSAGE: &str = "Machine deleted";

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Machine>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Machine>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Machine>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Machine>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => Json(DELETED_MESSAGE).into_response(),
        }
    }
}

/// `GET /users`
pub async fn list<MR>(State(state): State<AppState<MR>>) -> Result<ListResponse, ApiError>
where
    MR: MachineRepository + Send + Sync + 'static,
{
    let machines = state.machine_service.list_machines().await?;
    Ok(ListResponse::Ok(Json(machines)))
}

/// `GET /users/{id}`
pub async fn get<MR>(
    State(state): State<AppState<MR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    MR: MachineRepository + Send + Sync + 'static,
{
    let machine = state
        .machine_service
        .get_machine(&MachineId::from(id))
        .await?;
    Ok(GetResponse::Ok(Json(machine)))
}

/// `POST /users`
pub async fn create<MR>(
    State(state): State<AppState<MR>>,
    body: Result<Json<Machine>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    MR: MachineRepository + Send + Sync + 'static,
{
    let Json(machine) = body?;
    let created = state.machine_service.create_machine(machine).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /users/{id}`
///
/// The path id always wins over any `id` in the body.
pub async fn update<MR>(
    State(state): State<AppState<MR>>,
    Path(id): Path<String>,
    body: Result<Json<MachineChanges>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    MR: MachineRepository + Send + Sync + 'static,
{
    let Json(changes) = body?;
    let machine = Machine::from_changes(MachineId::from(id), changes);
    let updated = state.machine_service.update_machine(machine).await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /users/{id}`
pub async fn delete<MR>(
    State(state): State<AppState<MR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    MR: MachineRepository + Send + Sync + 'static,
{
    state
        .machine_service
        .delete_machine(&MachineId::from(id))
        .await?;
    Ok(DeleteResponse::Deleted)
}
