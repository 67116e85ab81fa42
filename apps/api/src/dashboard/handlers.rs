use axum::{extract::State, Json};

use crate::dashboard::stats::{
    dashboard_stats, recent_activity, DashboardStats, RECENT_ACTIVITY_LIMIT,
};
use crate::models::activity::ActivityEntry;
use crate::state::AppState;

/// GET /api/dashboard/stats
pub async fn handle_dashboard_stats(State(state): State<AppState>) -> Json<DashboardStats> {
    let data = state.store.read().await;
    Json(dashboard_stats(&data))
}

/// GET /api/dashboard/activity
pub async fn handle_dashboard_activity(State(state): State<AppState>) -> Json<Vec<ActivityEntry>> {
    let data = state.store.read().await;
    Json(recent_activity(&data.activity, RECENT_ACTIVITY_LIMIT))
}
