//! End-to-end tests for the full machinehubd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use machinehub_adapter_http_axum::router;
use machinehub_adapter_http_axum::state::AppState;
use machinehub_adapter_storage_sqlite_sqlx::{Config, SqliteMachineRepository};
use machinehub_app::services::machine_service::MachineService;
use machinehub_domain::machine::Machine;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
        create_schema: true,
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let repo = SqliteMachineRepository::new(db.pool().clone());
    router::build(AppState::new(MachineService::new(repo)))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn with_json(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn fridge() -> Value {
    json!({"id": "m1", "name": "Fridge", "outlet_number": 3, "status": "on"})
}

async fn list(app: &Router) -> Vec<Machine> {
    let (status, body) = send(app, get("/users")).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_value(body).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let app = app().await;
    let resp = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Machines
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_machine_crud_cycle() {
    let app = app().await;

    let (status, body) = send(&app, with_json("POST", "/users", &fridge())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, fridge());

    let (status, body) = send(&app, get("/users/m1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, fridge());

    let (status, body) = send(&app, delete("/users/m1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Machine deleted"));

    let (status, _) = send(&app, get("/users/m1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_empty_array_when_no_machines() {
    let app = app().await;
    let (status, body) = send(&app, get("/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn should_list_exactly_the_inserted_machines() {
    let app = app().await;
    let inserted = [
        json!({"id": "a", "name": "Fridge", "outlet_number": 1, "status": "on"}),
        json!({"id": "b", "name": "Lamp", "outlet_number": 2, "status": "off"}),
        json!({"id": "c", "name": "Router", "outlet_number": 3, "status": "rebooting"}),
    ];
    for machine in &inserted {
        let (status, _) = send(&app, with_json("POST", "/users", machine)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let mut listed = list(&app).await;
    listed.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));

    let expected: Vec<Machine> = inserted
        .iter()
        .map(|v| serde_json::from_value(v.clone()).unwrap())
        .collect();
    assert_eq!(listed, expected);
}

#[tokio::test]
async fn should_overwrite_fields_but_keep_id_when_updating() {
    let app = app().await;
    send(&app, with_json("POST", "/users", &fridge())).await;

    let changes = json!({"id": "m2", "name": "Freezer", "outlet_number": 8, "status": "off"});
    let (status, body) = send(&app, with_json("PUT", "/users/m1", &changes)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": "m1", "name": "Freezer", "outlet_number": 8, "status": "off"})
    );

    let (status, body) = send(&app, get("/users/m1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Freezer");
    assert_eq!(body["outlet_number"], 8);
    assert_eq!(body["status"], "off");

    let (status, _) = send(&app, get("/users/m2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_echo_input_without_mutation_when_updating_missing_machine() {
    let app = app().await;
    send(&app, with_json("POST", "/users", &fridge())).await;

    let changes = json!({"name": "Ghost", "outlet_number": 0, "status": "none"});
    let (status, body) = send(&app, with_json("PUT", "/users/ghost", &changes)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "ghost");
    assert_eq!(body["name"], "Ghost");

    let listed = list(&app).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Fridge");
}

#[tokio::test]
async fn should_return_404_and_keep_table_when_deleting_missing_machine() {
    let app = app().await;
    send(&app, with_json("POST", "/users", &fridge())).await;

    let (status, _) = send(&app, delete("/users/ghost")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(list(&app).await.len(), 1);
}

#[tokio::test]
async fn should_return_409_and_keep_original_when_id_reused() {
    let app = app().await;
    send(&app, with_json("POST", "/users", &fridge())).await;

    let impostor = json!({"id": "m1", "name": "Impostor", "outlet_number": 9, "status": "??"});
    let (status, body) = send(&app, with_json("POST", "/users", &impostor)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());

    let (_, body) = send(&app, get("/users/m1")).await;
    assert_eq!(body, fridge());
}

#[tokio::test]
async fn should_reject_malformed_body_without_inserting() {
    let app = app().await;

    let missing_outlet = json!({"id": "m1", "name": "Fridge", "status": "on"});
    let (status, _) = send(&app, with_json("POST", "/users", &missing_outlet)).await;
    assert!(status.is_client_error());

    let wrong_type = json!({"id": "m1", "name": "Fridge", "outlet_number": "three", "status": "on"});
    let (status, _) = send(&app, with_json("POST", "/users", &wrong_type)).await;
    assert!(status.is_client_error());

    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn should_reject_malformed_update_without_mutation() {
    let app = app().await;
    send(&app, with_json("POST", "/users", &fridge())).await;

    let request = Request::builder()
        .method("PUT")
        .uri("/users/m1")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (_, body) = send(&app, get("/users/m1")).await;
    assert_eq!(body, fridge());
}

#[tokio::test]
async fn should_store_outlet_numbers_when_beyond_32_bit_range() {
    let app = app().await;
    let heater = json!({"id": "m7", "name": "Heater", "outlet_number": 3_000_000_000_i64, "status": "on"});
    let (status, _) = send(&app, with_json("POST", "/users", &heater)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, get("/users/m7")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, heater);

    let changes = json!({"name": "Heater", "outlet_number": 4_294_967_299_i64, "status": "off"});
    let (status, _) = send(&app, with_json("PUT", "/users/m7", &changes)).await;
    assert_eq!(status, StatusCode::OK);

    let listed = list(&app).await;
    assert_eq!(listed[0].outlet_number, 4_294_967_299);
}

#[tokio::test]
async fn should_treat_ids_verbatim() {
    let app = app().await;
    let machine = json!({"id": "rack-2.slot_7", "name": "NAS", "outlet_number": -1, "status": ""});
    let (status, _) = send(&app, with_json("POST", "/users", &machine)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, get("/users/rack-2.slot_7")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, machine);
}
