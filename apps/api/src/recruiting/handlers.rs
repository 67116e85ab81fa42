//! Axum route handlers for the recruiting API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::recruiting::{Application, ApplicationStatus, Position, PositionStatus};
use crate::models::staff::{Recruiter, StaffStatus};
use crate::recruiting::service::{
    create_application, create_position, update_application_status, update_position_status,
    update_recruiter_status, NewApplication, NewPosition,
};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PositionResponse {
    pub position: Position,
}

#[derive(Debug, Serialize)]
pub struct PositionListResponse {
    pub positions: Vec<Position>,
}

#[derive(Debug, Serialize)]
pub struct ApplicationResponse {
    pub application: Application,
}

#[derive(Debug, Serialize)]
pub struct ApplicationListResponse {
    pub applications: Vec<Application>,
}

#[derive(Debug, Serialize)]
pub struct RecruiterResponse {
    pub recruiter: Recruiter,
}

#[derive(Debug, Serialize)]
pub struct RecruiterListResponse {
    pub recruiters: Vec<Recruiter>,
}

#[derive(Debug, Deserialize)]
pub struct StatusBody<S> {
    pub status: S,
}

/// GET /api/positions
pub async fn handle_list_positions(State(state): State<AppState>) -> Json<PositionListResponse> {
    let positions = state.store.read().await.positions.clone();
    Json(PositionListResponse { positions })
}

/// GET /api/positions/:id
pub async fn handle_get_position(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<PositionResponse>, AppError> {
    let position = state
        .store
        .read()
        .await
        .position(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Position {id} not found")))?;
    Ok(Json(PositionResponse { position }))
}

/// POST /api/positions
pub async fn handle_create_position(
    State(state): State<AppState>,
    Json(body): Json<NewPosition>,
) -> Result<(StatusCode, Json<PositionResponse>), AppError> {
    let position = state
        .store
        .update(|data| create_position(data, body, Utc::now()))
        .await?;
    Ok((StatusCode::CREATED, Json(PositionResponse { position })))
}

/// PUT /api/positions/:id/status
pub async fn handle_update_position_status(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<StatusBody<PositionStatus>>,
) -> Result<Json<PositionResponse>, AppError> {
    let position = state
        .store
        .update(|data| update_position_status(data, id, body.status, Utc::now()))
        .await?;
    Ok(Json(PositionResponse { position }))
}

/// GET /api/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
) -> Json<ApplicationListResponse> {
    let applications = state.store.read().await.applications.clone();
    Json(ApplicationListResponse { applications })
}

/// GET /api/applications/:id
pub async fn handle_get_application(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ApplicationResponse>, AppError> {
    let data = state.store.read().await;
    let application = data
        .applications
        .iter()
        .find(|a| a.id == id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;
    Ok(Json(ApplicationResponse { application }))
}

/// POST /api/applications
pub async fn handle_create_application(
    State(state): State<AppState>,
    Json(body): Json<NewApplication>,
) -> Result<(StatusCode, Json<ApplicationResponse>), AppError> {
    let application = state
        .store
        .update(|data| create_application(data, body, Utc::now()))
        .await?;
    Ok((StatusCode::CREATED, Json(ApplicationResponse { application })))
}

/// PUT /api/applications/:id/status
pub async fn handle_update_application_status(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<StatusBody<ApplicationStatus>>,
) -> Result<Json<ApplicationResponse>, AppError> {
    let application = state
        .store
        .update(|data| update_application_status(data, id, body.status, Utc::now()))
        .await?;
    Ok(Json(ApplicationResponse { application }))
}

/// GET /api/recruiters
pub async fn handle_list_recruiters(State(state): State<AppState>) -> Json<RecruiterListResponse> {
    let recruiters = state.store.read().await.recruiters.clone();
    Json(RecruiterListResponse { recruiters })
}

/// PUT /api/recruiters/:id/status
pub async fn handle_update_recruiter_status(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<StatusBody<StaffStatus>>,
) -> Result<Json<RecruiterResponse>, AppError> {
    let recruiter = state
        .store
        .update(|data| update_recruiter_status(data, id, body.status))
        .await?;
    Ok(Json(RecruiterResponse { recruiter }))
}
