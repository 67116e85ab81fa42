use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::notification::StaffNotification;
use crate::notifications::inbox::{list_notifications, mark_all_read, mark_read, InboxFilter};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxResponse {
    pub notifications: Vec<StaffNotification>,
    pub unread_count: usize,
}

#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub notification: StaffNotification,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadAllBody {
    pub staff_id: u64,
}

#[derive(Debug, Serialize)]
pub struct ReadAllResponse {
    pub updated: usize,
}

/// GET /api/notifications?staffId=&unreadOnly=
pub async fn handle_list_notifications(
    State(state): State<AppState>,
    Query(filter): Query<InboxFilter>,
) -> Result<Json<InboxResponse>, AppError> {
    let data = state.store.read().await;
    let notifications = list_notifications(&data, &filter)?;
    let unread_count = notifications.iter().filter(|n| !n.is_read).count();
    Ok(Json(InboxResponse {
        notifications,
        unread_count,
    }))
}

/// PUT /api/notifications/:id/read
pub async fn handle_mark_read(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<NotificationResponse>, AppError> {
    let notification = state.store.update(|data| mark_read(data, id)).await?;
    Ok(Json(NotificationResponse { notification }))
}

/// PUT /api/notifications/read-all
pub async fn handle_mark_all_read(
    State(state): State<AppState>,
    Json(body): Json<ReadAllBody>,
) -> Result<Json<ReadAllResponse>, AppError> {
    let updated = state
        .store
        .update(|data| mark_all_read(data, body.staff_id))
        .await?;
    Ok(Json(ReadAllResponse { updated }))
}
