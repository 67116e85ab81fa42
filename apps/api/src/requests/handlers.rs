//! Axum route handlers for guest/service requests.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::models::request::{RequestStatus, ServiceRequest};
use crate::notifications::inbox;
use crate::notifications::{notify_department, notify_staff_by_id, Notification};
use crate::requests::service::{
    add_comment, assign_request, create_request, list_requests, update_status, NewRequest,
    RequestFilter, RequestPage,
};
use crate::state::AppState;
use crate::store::Store;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RequestResponse {
    pub request: ServiceRequest,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: RequestStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignBody {
    pub staff_id: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentBody {
    pub comment: String,
    pub staff_id: u64,
}

/// Files delivered notifications against `request_id`.
///
/// Runs after the request itself is committed, so a failed write here is
/// logged and swallowed rather than reported to the client.
async fn record_notifications(store: &Store, notifications: Vec<Notification>, request_id: u64) {
    if notifications.is_empty() {
        return;
    }
    let count = notifications.len();
    let result = store
        .update(|data| {
            inbox::record_notifications(data, notifications, Some(request_id));
            Ok(())
        })
        .await;
    if let Err(e) = result {
        warn!("Request {request_id}: failed to record {count} notifications: {e}");
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/requests
pub async fn handle_list_requests(
    State(state): State<AppState>,
    Query(filter): Query<RequestFilter>,
) -> Result<Json<RequestPage>, AppError> {
    let data = state.store.read().await;
    Ok(Json(list_requests(&data.requests, &filter)?))
}

/// GET /api/requests/:id
pub async fn handle_get_request(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<RequestResponse>, AppError> {
    let data = state.store.read().await;
    let request = data
        .request(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Request {id} not found")))?;
    Ok(Json(RequestResponse { request }))
}

/// POST /api/requests
///
/// Creates the request, then pushes a notification to every member of the
/// routed department.
pub async fn handle_create_request(
    State(state): State<AppState>,
    Json(body): Json<NewRequest>,
) -> Result<(StatusCode, Json<RequestResponse>), AppError> {
    let request = state
        .store
        .update(|data| create_request(data, body, Utc::now()))
        .await?;

    let staff = state.store.read().await.staff.clone();
    let message = match &request.room_number {
        Some(room) => format!("New request: {} for room {room}", request.title),
        None => format!("New request: {}", request.title),
    };
    let notifications =
        notify_department(state.notifier.as_ref(), &request.department, &staff, &message).await;
    record_notifications(&state.store, notifications, request.id).await;

    Ok((StatusCode::CREATED, Json(RequestResponse { request })))
}

/// PUT /api/requests/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<StatusUpdate>,
) -> Result<Json<RequestResponse>, AppError> {
    let request = state
        .store
        .update(|data| update_status(data, id, body.status, Utc::now()))
        .await?;
    Ok(Json(RequestResponse { request }))
}

/// PUT /api/requests/:id/assign
///
/// 404 when either the request or the staff member does not exist.
pub async fn handle_assign_request(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<AssignBody>,
) -> Result<Json<RequestResponse>, AppError> {
    let (request, member) = state
        .store
        .update(|data| assign_request(data, id, body.staff_id, Utc::now()))
        .await?;

    let message = match &request.room_number {
        Some(room) => format!(
            "You have been assigned request: {} for room {room}",
            request.title
        ),
        None => format!("You have been assigned request: {}", request.title),
    };
    let notification = notify_staff_by_id(
        state.notifier.as_ref(),
        member.id,
        std::slice::from_ref(&member),
        &message,
    )
    .await;
    record_notifications(&state.store, notification.into_iter().collect(), request.id).await;

    Ok(Json(RequestResponse { request }))
}

/// POST /api/requests/:id/comments
pub async fn handle_add_comment(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<CommentBody>,
) -> Result<Json<RequestResponse>, AppError> {
    let request = state
        .store
        .update(|data| add_comment(data, id, body.staff_id, &body.comment, Utc::now()))
        .await?;
    Ok(Json(RequestResponse { request }))
}
