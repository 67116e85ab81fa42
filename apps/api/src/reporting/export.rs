use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::request::RequestStatus;
use crate::reporting::metrics::RequestMetrics;

pub const CSV_HEADER: &str = "Generated At,Total Requests,Average Response Time,\
Pending,In Progress,Completed,Cancelled,Peak Hour";

/// Flattens request metrics into a two-line CSV document.
pub fn metrics_csv(metrics: &RequestMetrics, generated_at: DateTime<Utc>) -> String {
    let status_count = |status: RequestStatus| {
        metrics
            .requests_by_status
            .get(&status)
            .copied()
            .unwrap_or(0)
    };
    let peak_hour = metrics
        .peak_request_times
        .first()
        .filter(|h| h.count > 0)
        .map(|h| h.hour.to_string())
        .unwrap_or_default();

    format!(
        "{CSV_HEADER}\n{},{},{},{},{},{},{},{}\n",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        metrics.total_requests,
        metrics.avg_response_time,
        status_count(RequestStatus::Pending),
        status_count(RequestStatus::InProgress),
        status_count(RequestStatus::Completed),
        status_count(RequestStatus::Cancelled),
        peak_hour,
    )
}
