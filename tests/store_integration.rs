//! Integration tests for the state stores against a mock backend.
//!
//! Covers the reconciliation contract (create/update/delete change the
//! list length by +1/0/-1 and keep it id-unique), the error-slot
//! degradation path, and the user store's minimum refetch interval.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use incubator_client::domain::resource::{NewResource, ResourcePatch};
use incubator_client::store::{ResourceStore, UserStore};
use incubator_client::{ApiClient, Error};

// =============================================================================
// Mock backend
// =============================================================================

#[derive(Clone, Default)]
struct MockState {
    inner: Arc<Mutex<MockBackend>>,
}

#[derive(Default)]
struct MockBackend {
    resources: Vec<Value>,
    next_id: i64,
    user_list_hits: usize,
    /// When set, the resource list endpoint fails with a 503.
    fail_list: bool,
}

async fn list_resources(
    State(state): State<MockState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let backend = state.inner.lock().unwrap();
    if backend.fail_list {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "detail": "inventory service down" })),
        ));
    }
    Ok(Json(Value::Array(backend.resources.clone())))
}

async fn create_resource(
    State(state): State<MockState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    // A reserved name lets tests force a backend-side failure.
    if body["name"] == json!("explode") {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "inventory write failed" })),
        ));
    }
    let mut backend = state.inner.lock().unwrap();
    backend.next_id += 1;
    let mut resource = body;
    resource["id"] = json!(backend.next_id);
    resource["created_at"] = json!("2026-02-01T08:00:00Z");
    backend.resources.push(resource.clone());
    Ok(Json(resource))
}

async fn update_resource(
    Path(id): Path<i64>,
    State(state): State<MockState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut backend = state.inner.lock().unwrap();
    let resource = backend
        .resources
        .iter_mut()
        .find(|r| r["id"] == json!(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(fields) = body.as_object() {
        for (key, value) in fields {
            resource[key] = value.clone();
        }
    }
    Ok(Json(resource.clone()))
}

async fn delete_resource(
    Path(id): Path<i64>,
    State(state): State<MockState>,
) -> StatusCode {
    let mut backend = state.inner.lock().unwrap();
    backend.resources.retain(|r| r["id"] != json!(id));
    StatusCode::NO_CONTENT
}

async fn list_users(State(state): State<MockState>) -> Json<Value> {
    let mut backend = state.inner.lock().unwrap();
    backend.user_list_hits += 1;
    Json(json!([
        { "id": 1, "full_name": "Amina Z", "email": "amina@ensia.edu.dz", "role": 2 }
    ]))
}

async fn start_mock(state: MockState) -> SocketAddr {
    let app = Router::new()
        .route("/resources/", get(list_resources).post(create_resource))
        .route(
            "/resources/{id}/",
            axum::routing::put(update_resource).delete(delete_resource),
        )
        .route("/users/", get(list_users))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn printer() -> NewResource {
    NewResource {
        kind: "lab".to_string(),
        name: "3D Printer".to_string(),
        description: "FDM printer, 0.4mm nozzle".to_string(),
        quantity_available: 2,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_create_resource_end_to_end() {
    let addr = start_mock(MockState::default()).await;
    let client = ApiClient::new(format!("http://{addr}")).unwrap();
    let store = ResourceStore::new(client);

    store.refresh().await.unwrap();
    assert!(store.resources().is_empty());

    store.create(&printer()).await.unwrap();

    let resources = store.resources();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].quantity_available, 2);
    assert_eq!(resources[0].kind, "lab");
    assert!(store.error().is_none());
}

#[tokio::test]
async fn test_mutators_reconcile_by_id() {
    let addr = start_mock(MockState::default()).await;
    let client = ApiClient::new(format!("http://{addr}")).unwrap();
    let store = ResourceStore::new(client);

    let first = store.create(&printer()).await.unwrap();
    let second = store
        .create(&NewResource {
            name: "Laser Cutter".to_string(),
            ..printer()
        })
        .await
        .unwrap();
    assert_eq!(store.resources().len(), 2);

    // Update: length unchanged, entry replaced in place.
    let patch = ResourcePatch {
        quantity_available: Some(5),
        ..ResourcePatch::default()
    };
    store.update(first.id, &patch).await.unwrap();
    let resources = store.resources();
    assert_eq!(resources.len(), 2);
    assert_eq!(
        resources.iter().find(|r| r.id == first.id).unwrap().quantity_available,
        5
    );

    // Delete: length drops by one, id gone.
    store.delete(first.id).await.unwrap();
    let resources = store.resources();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].id, second.id);

    // Ids stay unique throughout.
    let mut ids: Vec<i64> = resources.iter().map(|r| r.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), resources.len());
}

#[tokio::test]
async fn test_failed_mutation_lands_in_error_slot() {
    let addr = start_mock(MockState::default()).await;
    let client = ApiClient::new(format!("http://{addr}")).unwrap();
    let store = ResourceStore::new(client);

    store.create(&printer()).await.unwrap();

    let err = store
        .create(&NewResource {
            name: "explode".to_string(),
            ..printer()
        })
        .await
        .unwrap_err();

    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "inventory write failed");
        }
        other => panic!("expected Api error, got {other:?}"),
    }

    // The failure degraded the store, not the data already held.
    assert_eq!(store.resources().len(), 1);
    assert_eq!(store.error().unwrap(), "Request failed (500): inventory write failed");

    // A later success clears the slot.
    store.create(&printer()).await.unwrap();
    assert!(store.error().is_none());
}

#[tokio::test]
async fn test_refresh_failure_keeps_prior_items() {
    let state = MockState::default();
    let addr = start_mock(state.clone()).await;
    let client = ApiClient::new(format!("http://{addr}")).unwrap();
    let store = ResourceStore::new(client);

    store.create(&printer()).await.unwrap();
    assert_eq!(store.resources().len(), 1);

    // The backend goes down: refresh fails, the error slot degrades the
    // widget, and the data already held stays put.
    state.inner.lock().unwrap().fail_list = true;
    let err = store.refresh().await.unwrap_err();
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "inventory service down");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(store.resources().len(), 1);
    assert!(store.error().is_some());

    // A dead socket surfaces as a transport error instead.
    let dead = ApiClient::new("http://127.0.0.1:9").unwrap();
    let dead_store = ResourceStore::new(dead);
    let err = dead_store.refresh().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

#[tokio::test]
async fn test_user_store_skips_rapid_refresh() {
    let state = MockState::default();
    let addr = start_mock(state.clone()).await;
    let client = ApiClient::new(format!("http://{addr}")).unwrap();
    let store = UserStore::new(client);

    assert!(store.refresh(None).await.unwrap());
    // Within the minimum interval: skipped, no request issued.
    assert!(!store.refresh(None).await.unwrap());

    assert_eq!(state.inner.lock().unwrap().user_list_hits, 1);
    assert_eq!(store.users().len(), 1);
}
