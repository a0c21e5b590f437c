//! Request handlers for the queue API.
//!
//! Every handler locks the shared store, performs one synchronous store
//! operation, and releases the lock before building the response. The
//! lock is never held across an await point.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use turnstile_core::Entry;

use crate::api::{EnqueueRequest, ServerStatus, ServiceInfo};
use crate::server::AppState;

// === Error Response ===

/// JSON error envelope returned by failing endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>, error_type: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
                error_type: error_type.into(),
            },
        }
    }
}

fn error_response(status: StatusCode, message: &str, error_type: &str) -> Response {
    let body = Json(ErrorResponse::new(message, error_type));
    (status, body).into_response()
}

// === Status Endpoints ===

/// `GET /` - static service status payload.
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}

/// `GET /health` - liveness probe.
pub async fn health() -> &'static str {
    "OK"
}

/// `GET /api/status` - uptime and queue counters.
pub async fn server_status(State(state): State<Arc<AppState>>) -> Json<ServerStatus> {
    let queue = state.queue.lock();
    let waiting = queue.unserved_len();
    let served = queue.len() - waiting;

    Json(ServerStatus {
        status: "running".to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        waiting,
        served,
    })
}

// === Queue Endpoints ===

/// `GET /queue` - ordered list of unserved entries.
pub async fn list_queue(State(state): State<Arc<AppState>>) -> Json<Vec<Entry>> {
    let mut queue = state.queue.lock();
    queue.recompute();
    let entries = queue.unserved();

    tracing::debug!(waiting = entries.len(), "Queue listed");
    Json(entries)
}

/// `GET /queue/{id}` - one unserved entry looked up by position.
pub async fn get_queue_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Response {
    let mut queue = state.queue.lock();
    queue.recompute();

    match queue.find_by_position(id) {
        Some(entry) => {
            tracing::debug!(position = id, name = %entry.name, "Queue lookup");
            Json(entry.clone()).into_response()
        }
        None => error_response(
            StatusCode::NOT_FOUND,
            &format!("No client at position {id}."),
            "not_found",
        ),
    }
}

/// `POST /queue` - register a new client.
pub async fn enqueue(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EnqueueRequest>,
) -> Response {
    let request_id = format!("enq-{}", uuid::Uuid::new_v4());

    let name = match req.validate() {
        Ok(name) => name,
        Err(message) => {
            tracing::debug!(request_id = %request_id, %message, "Enqueue rejected");
            return error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                &message,
                "validation_error",
            );
        }
    };

    let entry = state.queue.lock().enqueue(name, req.service_type);

    tracing::info!(
        request_id = %request_id,
        name = %entry.name,
        service_type = %entry.service_type,
        position = entry.position,
        "Client enqueued"
    );

    (StatusCode::CREATED, Json(entry)).into_response()
}

/// `PUT /queue` - serve the client at the head of the queue.
pub async fn advance(State(state): State<Arc<AppState>>) -> Json<Vec<Entry>> {
    let remaining = state.queue.lock().advance();

    tracing::info!(waiting = remaining.len(), "Queue advanced");
    Json(remaining)
}

/// `DELETE /queue/{id}` - permanently remove a client by position.
pub async fn remove_queue_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Response {
    match state.queue.lock().remove_by_position(id) {
        Ok(()) => {
            tracing::info!(position = id, "Client removed");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => error_response(StatusCode::NOT_FOUND, &e.to_string(), "not_found"),
    }
}
