//! In-process stub of the backend REST API. Integration tests drive the real
//! `RemoteClient` against it over HTTP.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

pub const TOKEN: &str = "stub-token";
pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "secret123";

#[derive(Default)]
pub struct StubState {
    pub instances: Vec<Value>,
    pub workflows: HashMap<String, Vec<Value>>,
    pub events: HashMap<String, Vec<Value>>,
    pub patterns: HashMap<(String, String), Vec<Value>>,
    pub license: Value,
    pub alert_settings: Value,
    pub backup_settings: Value,
    pub last_backups: Vec<Value>,
    pub instance_backups: HashMap<String, Value>,
    pub valid_reset_tokens: HashSet<String>,

    // Request recordings asserted by tests.
    pub export_requests: Vec<(String, Option<String>)>,
    pub imports: Vec<(String, Value)>,
    pub updates: Vec<(String, Value)>,
    pub resets: Vec<(String, String)>,
}

type Shared = Arc<Mutex<StubState>>;

pub struct StubBackend {
    pub base_url: String,
    pub state: Shared,
}

pub fn spawn_backend(state: StubState) -> StubBackend {
    let shared: Shared = Arc::new(Mutex::new(state));
    let app = router(shared.clone());

    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build runtime");
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind stub listener");
            tx.send(listener.local_addr().expect("stub local addr"))
                .expect("send stub addr");
            axum::serve(listener, app).await.expect("serve stub");
        });
    });

    let addr = rx.recv().expect("recv stub addr");
    StubBackend {
        base_url: format!("http://{}", addr),
        state: shared,
    }
}

/// A small fleet with a premium license, one locked instance, and data for
/// every tab.
pub fn seeded_state() -> StubState {
    let mut state = StubState {
        license: json!({
            "edition": "Hosted Ops",
            "maxInstances": 3,
            "features": {
                "alert.workflow_error": true,
                "alert.invalid_api_key": false
            }
        }),
        alert_settings: json!({
            "events": { "instanceOffline": true, "workflowError": false, "invalidApiKey": false },
            "channels": { "email": { "address": "ops@example.com" } }
        }),
        backup_settings: json!({
            "enabled": true,
            "googleDriveFolderId": "folder-1",
            "intervalHours": 24,
            "lastBackupAt": "2026-02-01T03:00:00Z"
        }),
        ..StubState::default()
    };

    state.instances = vec![
        json!({
            "id": "i1",
            "name": "production",
            "baseUrl": "https://flows.example.com",
            "status": "active",
            "version": "1.63.2",
            "latestVersion": "1.64.0",
            "lastSeenAt": "2026-02-01T11:58:00Z",
            "createdAt": "2025-11-02T09:00:00Z"
        }),
        json!({
            "id": "i2",
            "name": "staging",
            "baseUrl": "https://staging.example.com",
            "status": "locked",
            "version": "unknown",
            "latestVersion": "",
            "lastSeenAt": null,
            "createdAt": "2025-12-14T10:00:00Z"
        }),
    ];

    state.workflows.insert(
        "i1".to_string(),
        vec![
            json!({"id": "w1", "name": "apple sync", "active": true,
                   "lastRunAt": "2026-02-01T11:00:00Z", "lastErrorAt": null}),
            json!({"id": "w2", "name": "Billing export", "active": false,
                   "lastRunAt": null, "lastErrorAt": "2026-01-20T08:00:00Z"}),
            json!({"id": "w3", "name": "3lephant feed", "active": true,
                   "lastRunAt": "2026-02-01T10:00:00Z", "lastErrorAt": null}),
        ],
    );

    state.events.insert(
        "i1".to_string(),
        vec![json!({
            "id": "e1",
            "severity": "error",
            "occurredAt": "2026-02-01T10:30:00Z",
            "payload": {
                "workflowId": "w1",
                "workflowName": "apple sync",
                "errorMessage": "connection timeout",
                "node": "HTTP Request"
            }
        })],
    );

    state.patterns.insert(
        ("i1".to_string(), "14d".to_string()),
        vec![json!({
            "errorMessage": "connection timeout",
            "count": 7,
            "lastOccurred": "2026-02-01T10:30:00Z",
            "affectedWorkflows": ["apple sync", "3lephant feed"]
        })],
    );
    state
        .patterns
        .insert(("i1".to_string(), "1d".to_string()), vec![]);

    state.last_backups = vec![
        json!({"instanceId": "i1", "instanceName": "production",
               "lastBackupAt": "2026-02-01T03:00:00Z"}),
        json!({"instanceId": "i2", "instanceName": "staging", "lastBackupAt": null}),
    ];
    state
        .instance_backups
        .insert("i1".to_string(), json!({"lastBackupAt": "2026-02-01T03:00:00Z"}));

    state.valid_reset_tokens.insert("good-token".to_string());

    state
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/request-password-reset", post(request_reset))
        .route("/auth/validate-reset-token", get(validate_reset_token))
        .route("/auth/reset-password", post(reset_password))
        .route("/instances", get(list_instances).post(create_instance))
        .route("/instances/:id", get(get_instance).put(update_instance))
        .route("/instances/:id/workflows", get(list_workflows))
        .route("/instances/:id/workflows/import", post(import_workflow))
        .route("/instances/:id/workflows/export", get(export_workflows))
        .route("/instances/:id/events", get(list_events))
        .route("/instances/:id/error-patterns", get(error_patterns))
        .route("/instances/:id/last-backup", get(last_backup))
        .route("/license", get(license))
        .route("/version", get(version))
        .route(
            "/settings/alerts",
            get(alert_settings).put(update_alert_settings),
        )
        .route(
            "/settings/backups",
            get(backup_settings).put(update_backup_settings),
        )
        .route("/backups/last-all", get(backups_last_all))
        .with_state(state)
}

fn authed(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", TOKEN))
        .unwrap_or(false)
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, "unauthorized").into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    let username = body["username"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    if username == USERNAME && password == PASSWORD {
        Json(json!({"token": TOKEN, "username": USERNAME})).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, "invalid credentials").into_response()
    }
}

async fn request_reset(Json(_body): Json<Value>) -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn validate_reset_token(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> StatusCode {
    let token = params.get("token").cloned().unwrap_or_default();
    if state.lock().unwrap().valid_reset_tokens.contains(&token) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::BAD_REQUEST
    }
}

async fn reset_password(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let token = body["token"].as_str().unwrap_or_default().to_string();
    let password = body["newPassword"].as_str().unwrap_or_default().to_string();

    let mut st = state.lock().unwrap();
    if !st.valid_reset_tokens.contains(&token) {
        return (StatusCode::BAD_REQUEST, "invalid or expired token").into_response();
    }
    st.resets.push((token, password));
    StatusCode::NO_CONTENT.into_response()
}

async fn list_instances(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }
    Json(state.lock().unwrap().instances.clone()).into_response()
}

async fn get_instance(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }
    let st = state.lock().unwrap();
    match st.instances.iter().find(|i| i["id"] == id.as_str()) {
        Some(inst) => Json(inst.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "instance not found").into_response(),
    }
}

async fn create_instance(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }

    let mut st = state.lock().unwrap();
    let max = st.license["maxInstances"].as_i64().unwrap_or(3);
    if max != -1 && st.instances.len() as i64 >= max {
        return (StatusCode::CONFLICT, "instance limit reached").into_response();
    }

    let id = format!("i{}", st.instances.len() + 1);
    let inst = json!({
        "id": id,
        "name": body["name"],
        "baseUrl": body["baseUrl"],
        "status": "active",
        "version": "unknown",
        "latestVersion": "",
        "lastSeenAt": null,
        "createdAt": "2026-02-01T12:00:00Z"
    });
    st.instances.push(inst.clone());
    (StatusCode::CREATED, Json(inst)).into_response()
}

async fn update_instance(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }

    let mut st = state.lock().unwrap();
    st.updates.push((id.clone(), body.clone()));
    let Some(inst) = st.instances.iter_mut().find(|i| i["id"] == id.as_str()) else {
        return (StatusCode::NOT_FOUND, "instance not found").into_response();
    };
    if let Some(name) = body.get("name") {
        inst["name"] = name.clone();
    }
    if let Some(url) = body.get("baseUrl") {
        inst["baseUrl"] = url.clone();
    }
    Json(inst.clone()).into_response()
}

async fn list_workflows(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }
    let st = state.lock().unwrap();
    Json(st.workflows.get(&id).cloned().unwrap_or_default()).into_response()
}

async fn import_workflow(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }
    state.lock().unwrap().imports.push((id, body));
    StatusCode::CREATED.into_response()
}

async fn export_workflows(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }
    state
        .lock()
        .unwrap()
        .export_requests
        .push((id, params.get("ids").cloned()));
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/zip")],
        b"PK\x03\x04stub-archive".to_vec(),
    )
        .into_response()
}

async fn list_events(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }
    if params.get("type").map(|s| s.as_str()) != Some("WORKFLOW_ERROR") {
        return (StatusCode::BAD_REQUEST, "unsupported event type").into_response();
    }
    let limit: usize = params
        .get("limit")
        .and_then(|s| s.parse().ok())
        .unwrap_or(50);

    let st = state.lock().unwrap();
    let mut events = st.events.get(&id).cloned().unwrap_or_default();
    events.truncate(limit);
    Json(events).into_response()
}

async fn error_patterns(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }
    let range = params.get("range").cloned().unwrap_or_default();
    if !["1d", "14d", "1m", "6m", "12m"].contains(&range.as_str()) {
        return (StatusCode::BAD_REQUEST, "invalid range").into_response();
    }
    let st = state.lock().unwrap();
    Json(st.patterns.get(&(id, range)).cloned().unwrap_or_default()).into_response()
}

async fn last_backup(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }
    let st = state.lock().unwrap();
    Json(
        st.instance_backups
            .get(&id)
            .cloned()
            .unwrap_or_else(|| json!({"lastBackupAt": null})),
    )
    .into_response()
}

async fn license(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }
    Json(state.lock().unwrap().license.clone()).into_response()
}

async fn version() -> Json<Value> {
    Json(json!({"version": "1.4.2"}))
}

async fn alert_settings(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }
    Json(state.lock().unwrap().alert_settings.clone()).into_response()
}

async fn update_alert_settings(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }
    let mut st = state.lock().unwrap();
    st.alert_settings = body.clone();
    Json(body).into_response()
}

async fn backup_settings(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }
    Json(state.lock().unwrap().backup_settings.clone()).into_response()
}

async fn update_backup_settings(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }
    let mut st = state.lock().unwrap();
    st.backup_settings = body.clone();
    Json(body).into_response()
}

async fn backups_last_all(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }
    Json(state.lock().unwrap().last_backups.clone()).into_response()
}
