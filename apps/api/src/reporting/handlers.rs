use axum::{extract::State, http::header, response::IntoResponse, Json};
use chrono::Utc;

use crate::reporting::export::metrics_csv;
use crate::reporting::metrics::{
    request_metrics, staff_performance, RequestMetrics, StaffPerformance,
};
use crate::state::AppState;

/// GET /api/reports/request-metrics
pub async fn handle_request_metrics(State(state): State<AppState>) -> Json<RequestMetrics> {
    let data = state.store.read().await;
    Json(request_metrics(&data.requests))
}

/// GET /api/reports/staff-performance
pub async fn handle_staff_performance(
    State(state): State<AppState>,
) -> Json<Vec<StaffPerformance>> {
    let data = state.store.read().await;
    Json(staff_performance(&data.staff, &data.requests))
}

/// GET /api/reports/export
///
/// Request metrics as a CSV attachment.
pub async fn handle_export_metrics(State(state): State<AppState>) -> impl IntoResponse {
    let metrics = request_metrics(&state.store.read().await.requests);
    let csv = metrics_csv(&metrics, Utc::now());
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"request-metrics.csv\"",
            ),
        ],
        csv,
    )
}
