//! Integration tests for the create-startup-with-team workflow.
//!
//! These tests verify the full multi-request sequence against an
//! in-process mock backend:
//! - happy path: one leader membership plus one per deduplicated member
//! - unresolvable leader fails before any membership exists
//! - one unresolvable member rejects the whole concurrent batch
//! - both user-list response envelopes resolve

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use incubator_client::domain::startup::{StartupStatus, TEAM_LEADER_ROLE, TEAM_MEMBER_ROLE, TeamPlan};
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
    users: Vec<Value>,
    /// Serve `/users/` as a paginated envelope instead of a bare array.
    paginated_users: bool,
    startups: Vec<Value>,
    members: Vec<Value>,
    next_id: i64,
}

impl MockState {
    fn with_users(names: &[&str]) -> Self {
        let state = Self::default();
        {
            let mut backend = state.inner.lock().unwrap();
            for (index, name) in names.iter().enumerate() {
                let id = i64::try_from(index).unwrap() + 1;
                backend.users.push(json!({
                    "id": id,
                    "full_name": name,
                    "email": format!("user{id}@ensia.edu.dz"),
                    "role": 2,
                }));
            }
            backend.next_id = 100;
        }
        state
    }

    fn member_count(&self) -> usize {
        self.inner.lock().unwrap().members.len()
    }

    fn startup_count(&self) -> usize {
        self.inner.lock().unwrap().startups.len()
    }
}

async fn list_users(State(state): State<MockState>) -> Json<Value> {
    let backend = state.inner.lock().unwrap();
    if backend.paginated_users {
        Json(json!({ "count": backend.users.len(), "results": backend.users }))
    } else {
        Json(Value::Array(backend.users.clone()))
    }
}

async fn create_startup(State(state): State<MockState>, Json(body): Json<Value>) -> Json<Value> {
    let mut backend = state.inner.lock().unwrap();
    backend.next_id += 1;
    let mut startup = body;
    startup["id"] = json!(backend.next_id);
    startup["created_at"] = json!("2026-01-10T09:00:00Z");
    startup["updated_at"] = json!("2026-01-10T09:00:00Z");
    backend.startups.push(startup.clone());
    Json(startup)
}

async fn get_startup(
    Path(id): Path<i64>,
    State(state): State<MockState>,
) -> Result<Json<Value>, StatusCode> {
    let backend = state.inner.lock().unwrap();
    let mut startup = backend
        .startups
        .iter()
        .find(|s| s["id"] == json!(id))
        .cloned()
        .ok_or(StatusCode::NOT_FOUND)?;
    let roster: Vec<Value> = backend
        .members
        .iter()
        .filter(|m| m["startup"] == json!(id))
        .cloned()
        .collect();
    startup["team_members"] = Value::Array(roster);
    Ok(Json(startup))
}

async fn add_member(
    Path(id): Path<i64>,
    State(state): State<MockState>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut backend = state.inner.lock().unwrap();
    backend.next_id += 1;
    let mut member = body;
    member["id"] = json!(backend.next_id);
    member["startup"] = json!(id);
    backend.members.push(member.clone());
    Json(member)
}

async fn start_mock(state: MockState) -> SocketAddr {
    let app = Router::new()
        .route("/startups/", post(create_startup))
        .route("/startups/{id}/", get(get_startup))
        .route("/startups/{id}/team/", post(add_member))
        .route("/users/", get(list_users))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn plan(leader: &str, members: &[&str]) -> TeamPlan {
    TeamPlan {
        name: "AgriSense".to_string(),
        description: "Soil monitoring for smallholder farms".to_string(),
        industry: "agritech".to_string(),
        stage: "prototype".to_string(),
        initial_status: StartupStatus::Pending,
        team_leader: leader.to_string(),
        team_members: members.iter().map(ToString::to_string).collect(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_create_with_team_happy_path() {
    let state = MockState::with_users(&["Amina Z", "Karim L", "Sara M"]);
    let addr = start_mock(state.clone()).await;
    let client = ApiClient::new(format!("http://{addr}")).unwrap();

    // Member list repeats the leader and one member; both repeats must be
    // dropped before any membership is created.
    let plan = plan("Amina Z", &["Karim L", "Sara M", "Amina Z", "Karim L"]);
    let startup = client.startups().create_with_team(&plan).await.unwrap();

    assert_eq!(startup.name, "AgriSense");
    assert_eq!(startup.status, StartupStatus::Pending);

    let roster = startup.team_members.unwrap();
    let leaders: Vec<_> = roster
        .iter()
        .filter(|m| m.role_in_team == TEAM_LEADER_ROLE)
        .collect();
    let members: Vec<_> = roster
        .iter()
        .filter(|m| m.role_in_team == TEAM_MEMBER_ROLE)
        .collect();

    assert_eq!(leaders.len(), 1);
    assert_eq!(members.len(), 2);
    assert_eq!(roster.len(), 3);

    // Roster is id-unique on the user axis too.
    let mut user_ids: Vec<i64> = roster.iter().map(|m| m.user).collect();
    user_ids.sort_unstable();
    user_ids.dedup();
    assert_eq!(user_ids.len(), 3);
}

#[tokio::test]
async fn test_initial_status_is_caller_supplied() {
    let state = MockState::with_users(&["Amina Z"]);
    let addr = start_mock(state).await;
    let client = ApiClient::new(format!("http://{addr}")).unwrap();

    let mut plan = plan("Amina Z", &[]);
    plan.initial_status = StartupStatus::Approved;
    let startup = client.startups().create_with_team(&plan).await.unwrap();

    assert_eq!(startup.status, StartupStatus::Approved);
}

#[tokio::test]
async fn test_unknown_leader_fails_before_any_membership() {
    let state = MockState::with_users(&["Amina Z", "Karim L"]);
    let addr = start_mock(state.clone()).await;
    let client = ApiClient::new(format!("http://{addr}")).unwrap();

    let err = client
        .startups()
        .create_with_team(&plan("Nobody", &["Karim L"]))
        .await
        .unwrap_err();

    match err {
        Error::UserNotFound { name } => assert_eq!(name, "Nobody"),
        other => panic!("expected UserNotFound, got {other:?}"),
    }

    // No membership was created. The startup record itself remains: the
    // workflow has no rollback and this is the documented partial state.
    assert_eq!(state.member_count(), 0);
    assert_eq!(state.startup_count(), 1);
}

#[tokio::test]
async fn test_unknown_member_rejects_the_whole_batch() {
    let state = MockState::with_users(&["Amina Z", "Karim L"]);
    let addr = start_mock(state.clone()).await;
    let client = ApiClient::new(format!("http://{addr}")).unwrap();

    let err = client
        .startups()
        .create_with_team(&plan("Amina Z", &["Ghost", "Karim L"]))
        .await
        .unwrap_err();

    match err {
        Error::UserNotFound { name } => assert_eq!(name, "Ghost"),
        other => panic!("expected UserNotFound, got {other:?}"),
    }

    // The leader membership from the earlier step is still there.
    assert!(state.member_count() >= 1);
}

#[tokio::test]
async fn test_paginated_user_envelope_resolves() {
    let state = MockState::with_users(&["Amina Z", "Karim L"]);
    state.inner.lock().unwrap().paginated_users = true;
    let addr = start_mock(state).await;
    let client = ApiClient::new(format!("http://{addr}")).unwrap();

    let startup = client
        .startups()
        .create_with_team(&plan("Amina Z", &["Karim L"]))
        .await
        .unwrap();

    assert_eq!(startup.team_members.unwrap().len(), 2);
}

#[tokio::test]
async fn test_empty_directory_fails_with_no_users() {
    let state = MockState::with_users(&[]);
    let addr = start_mock(state.clone()).await;
    let client = ApiClient::new(format!("http://{addr}")).unwrap();

    let err = client
        .startups()
        .create_with_team(&plan("Amina Z", &[]))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NoUsers));
    assert_eq!(state.member_count(), 0);
}
