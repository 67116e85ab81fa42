//! Aggregate metrics over request and staff lists. Every function is a
//! single pass over its input and never touches the store.

use std::collections::BTreeMap;

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::models::request::{RequestStatus, ServiceRequest};
use crate::models::staff::Staff;

const PEAK_HOUR_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffPerformance {
    pub id: u64,
    pub name: String,
    pub department: String,
    pub requests_assigned: usize,
    pub requests_completed: usize,
    /// Rounded percentage.
    pub completion_rate: u32,
    /// Rounded minutes.
    pub avg_completion_time: i64,
    pub performance_score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourCount {
    pub hour: u32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMetrics {
    pub total_requests: usize,
    pub avg_response_time: i64,
    pub requests_by_department: BTreeMap<String, usize>,
    pub requests_by_status: BTreeMap<RequestStatus, usize>,
    pub peak_request_times: Vec<HourCount>,
}

/// Minutes between creation and completion, if the request has completed.
fn completion_minutes(request: &ServiceRequest) -> Option<f64> {
    request
        .completed_at
        .map(|done| (done - request.created_at).num_milliseconds() as f64 / 60_000.0)
}

fn rounded_mean(values: &[f64]) -> i64 {
    if values.is_empty() {
        return 0;
    }
    (values.iter().sum::<f64>() / values.len() as f64).round() as i64
}

/// Mean minutes-to-complete across completed, timestamped requests. 0 when none.
pub fn average_response_time(requests: &[ServiceRequest]) -> i64 {
    let durations: Vec<f64> = requests
        .iter()
        .filter(|r| r.status == RequestStatus::Completed)
        .filter_map(completion_minutes)
        .collect();
    rounded_mean(&durations)
}

pub fn volume_by_department(requests: &[ServiceRequest]) -> BTreeMap<String, usize> {
    let mut volume = BTreeMap::new();
    for request in requests {
        *volume.entry(request.department.to_string()).or_insert(0) += 1;
    }
    volume
}

/// Tally by status. All four statuses are always present.
pub fn volume_by_status(requests: &[ServiceRequest]) -> BTreeMap<RequestStatus, usize> {
    let mut volume: BTreeMap<RequestStatus, usize> =
        RequestStatus::ALL.iter().map(|s| (*s, 0)).collect();
    for request in requests {
        *volume.entry(request.status).or_insert(0) += 1;
    }
    volume
}

pub fn staff_performance(staff: &[Staff], requests: &[ServiceRequest]) -> Vec<StaffPerformance> {
    staff
        .iter()
        .map(|member| {
            let assigned: Vec<&ServiceRequest> = requests
                .iter()
                .filter(|r| r.assigned_to == Some(member.id))
                .collect();
            let completed: Vec<&ServiceRequest> = assigned
                .iter()
                .copied()
                .filter(|r| r.status == RequestStatus::Completed)
                .collect();

            let completion_rate = if assigned.is_empty() {
                0
            } else {
                ((completed.len() as f64 / assigned.len() as f64) * 100.0).round() as u32
            };

            let durations: Vec<f64> = completed
                .iter()
                .filter_map(|r| completion_minutes(r))
                .collect();

            StaffPerformance {
                id: member.id,
                name: member.name.clone(),
                department: member.department.to_string(),
                requests_assigned: assigned.len(),
                requests_completed: completed.len(),
                completion_rate,
                avg_completion_time: rounded_mean(&durations),
                performance_score: member.performance,
            }
        })
        .collect()
}

/// Busiest hours of day (UTC) by request creation time. Ties go to the
/// earlier hour.
pub fn peak_hours(requests: &[ServiceRequest]) -> Vec<HourCount> {
    let mut hourly = [0usize; 24];
    for request in requests {
        hourly[request.created_at.hour() as usize] += 1;
    }

    let mut counts: Vec<HourCount> = hourly
        .iter()
        .enumerate()
        .map(|(hour, count)| HourCount {
            hour: hour as u32,
            count: *count,
        })
        .collect();
    // stable: equal counts keep ascending hour order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(PEAK_HOUR_COUNT);
    counts
}

pub fn request_metrics(requests: &[ServiceRequest]) -> RequestMetrics {
    RequestMetrics {
        total_requests: requests.len(),
        avg_response_time: average_response_time(requests),
        requests_by_department: volume_by_department(requests),
        requests_by_status: volume_by_status(requests),
        peak_request_times: peak_hours(requests),
    }
}
