use serde::{Deserialize, Serialize};

use crate::models::activity::ActivityEntry;
use crate::models::common::Department;
use crate::models::recruiting::{ApplicationStatus, PositionStatus};
use crate::models::request::RequestStatus;
use crate::models::staff::StaffStatus;
use crate::reporting::metrics::average_response_time;
use crate::store::Dataset;

pub const RECENT_ACTIVITY_LIMIT: usize = 10;

/// Headline counts for the operations dashboard. Every figure is derived
/// from the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub pending_requests: usize,
    pub in_progress_requests: usize,
    pub maintenance_requests: usize,
    pub avg_response_time: i64,
    pub active_staff: usize,
    pub open_positions: usize,
    pub pending_applications: usize,
    pub interviews_scheduled: usize,
    pub active_recruiters: usize,
}

pub fn dashboard_stats(data: &Dataset) -> DashboardStats {
    let requests_with =
        |status: RequestStatus| data.requests.iter().filter(|r| r.status == status).count();
    let applications_with = |status: ApplicationStatus| {
        data.applications
            .iter()
            .filter(|a| a.status == status)
            .count()
    };

    DashboardStats {
        pending_requests: requests_with(RequestStatus::Pending),
        in_progress_requests: requests_with(RequestStatus::InProgress),
        maintenance_requests: data
            .requests
            .iter()
            .filter(|r| r.department == Department::Maintenance)
            .count(),
        avg_response_time: average_response_time(&data.requests),
        active_staff: data
            .staff
            .iter()
            .filter(|s| s.status == StaffStatus::Active)
            .count(),
        open_positions: data
            .positions
            .iter()
            .filter(|p| p.status == PositionStatus::Open)
            .count(),
        pending_applications: applications_with(ApplicationStatus::Pending),
        interviews_scheduled: applications_with(ApplicationStatus::InterviewScheduled),
        active_recruiters: data
            .recruiters
            .iter()
            .filter(|r| r.status == StaffStatus::Active)
            .count(),
    }
}

/// The latest activity entries, newest first.
pub fn recent_activity(activity: &[ActivityEntry], limit: usize) -> Vec<ActivityEntry> {
    activity.iter().rev().take(limit).cloned().collect()
}
