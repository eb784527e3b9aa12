#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use opsdash::config::EdgeConfig;
use opsdash::edge::EdgeClient;

pub const ANON_KEY: &str = "test-anon-key";

/// A request the mock Edge Function received.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub function: String,
    pub body: Value,
    pub authorization: Option<String>,
    pub apikey: Option<String>,
}

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// In-process stand-in for the Edge Function host.
pub struct MockEdge {
    pub base_url: String,
    state: MockState,
}

impl MockEdge {
    pub async fn start() -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind mock edge server")?;

        let state = MockState::default();
        let app = Router::new()
            .route("/functions/v1/:function", post(handle))
            .with_state(state.clone());

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://127.0.0.1:{}", port),
            state,
        })
    }

    pub fn config(&self) -> EdgeConfig {
        EdgeConfig {
            base_url: self.base_url.clone(),
            anon_key: ANON_KEY.to_string(),
            access_token: None,
            timeout_secs: 5,
            log_requests: true,
        }
    }

    pub fn client(&self) -> EdgeClient {
        EdgeClient::new(&self.config()).expect("mock edge client")
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("no request recorded")
    }
}

pub fn sample_job(id: &str, enabled: bool) -> Value {
    json!({
        "id": id,
        "name": "nightly backup",
        "schedule": "0 3 * * *",
        "command": "pg_dump app",
        "enabled": enabled,
        "last_run_at": "2024-05-01T03:00:00Z",
        "last_status": "success"
    })
}

async fn handle(
    State(state): State<MockState>,
    Path(function): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string);
    state.requests.lock().unwrap().push(Recorded {
        function: function.clone(),
        body: body.clone(),
        authorization: header("authorization"),
        apikey: header("apikey"),
    });

    let action = body.get("action").and_then(Value::as_str).unwrap_or_default();
    let id = body.get("id").and_then(Value::as_str).unwrap_or_default();

    match (function.as_str(), action) {
        ("echo", _) => Json(json!({ "data": body })).into_response(),
        ("broken", _) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        ("cronjobs", "list") => {
            Json(json!({ "data": [sample_job("job-1", true), sample_job("job-2", false)] })).into_response()
        }
        ("cronjobs", "get") | ("cronjobs", "update") if id == "missing" => {
            (StatusCode::NOT_FOUND, Json(json!({ "error": "Cronjob not found" }))).into_response()
        }
        ("cronjobs", "get") => Json(json!({ "data": sample_job(id, true) })).into_response(),
        ("cronjobs", "update") => {
            let mut job = sample_job(id, true);
            if let (Some(Value::Object(updates)), Some(obj)) = (body.get("updates"), job.as_object_mut()) {
                obj.extend(updates.clone());
            }
            Json(json!({ "data": job })).into_response()
        }
        ("cronjobs", "create") => {
            let mut job = body.clone();
            job["id"] = json!("job-new");
            Json(json!({ "data": job })).into_response()
        }
        ("cronjobs", "toggle") => {
            let enabled = body.get("enabled").and_then(Value::as_bool).unwrap_or(false);
            Json(json!({ "data": sample_job(id, enabled) })).into_response()
        }
        ("cronjobs", "delete") => Json(json!({ "data": { "success": true } })).into_response(),
        ("search-engine", "search") => Json(json!({
            "data": {
                "results": [
                    { "id": "job-1", "type": "cronjob", "title": "nightly backup", "score": 0.92, "url": "/dashboard/cronjobs/job-1" }
                ],
                "total": 1
            }
        }))
        .into_response(),
        ("search-engine", "suggest") => Json(json!({ "data": ["backup", "backfill"] })).into_response(),
        _ => (StatusCode::BAD_REQUEST, Json(json!({ "error": format!("Unknown action: {}", action) }))).into_response(),
    }
}
