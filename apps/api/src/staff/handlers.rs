use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::activity::{ActivityKind, NewActivity};
use crate::models::common::Department;
use crate::models::staff::{Staff, StaffStatus};
use crate::staff::departments::{department_summaries, DepartmentSummary};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StaffQuery {
    pub department: Option<Department>,
}

#[derive(Debug, Serialize)]
pub struct StaffListResponse {
    pub staff: Vec<Staff>,
}

#[derive(Debug, Serialize)]
pub struct StaffResponse {
    pub staff: Staff,
}

#[derive(Debug, Serialize)]
pub struct DepartmentListResponse {
    pub departments: Vec<DepartmentSummary>,
}

#[derive(Debug, Deserialize)]
pub struct StaffStatusBody {
    pub status: StaffStatus,
}

/// GET /api/staff
pub async fn handle_list_staff(
    State(state): State<AppState>,
    Query(query): Query<StaffQuery>,
) -> Json<StaffListResponse> {
    let data = state.store.read().await;
    let staff = data
        .staff
        .iter()
        .filter(|s| query.department.as_ref().map_or(true, |d| &s.department == d))
        .cloned()
        .collect();
    Json(StaffListResponse { staff })
}

/// PUT /api/staff/:id/status
pub async fn handle_update_staff_status(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<StaffStatusBody>,
) -> Result<Json<StaffResponse>, AppError> {
    let staff = state
        .store
        .update(|data| {
            let member = data
                .staff
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or_else(|| AppError::NotFound(format!("Staff member {id} not found")))?;
            member.status = body.status;
            let updated = member.clone();
            data.log_activity(NewActivity::now(
                ActivityKind::Staff,
                "Staff status updated",
                format!("{} is now {}", updated.name, updated.status.as_str()),
                updated.status.as_str(),
            ));
            Ok(updated)
        })
        .await?;

    info!("Staff {id} status set to {}", staff.status.as_str());
    Ok(Json(StaffResponse { staff }))
}

/// GET /api/departments
pub async fn handle_list_departments(
    State(state): State<AppState>,
) -> Json<DepartmentListResponse> {
    let data = state.store.read().await;
    Json(DepartmentListResponse {
        departments: department_summaries(&data.staff),
    })
}
