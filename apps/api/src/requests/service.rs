//! Service-request lifecycle over the dataset: create, status changes,
//! assignment, comments, and filtered listing. Missing records are always
//! `NotFound`; nothing here invents a record on a missed lookup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::activity::{ActivityKind, NewActivity};
use crate::models::common::{Department, Priority};
use crate::models::request::{RequestComment, RequestStatus, ServiceRequest};
use crate::models::staff::Staff;
use crate::routing::{estimated_response_time, get_priority, route_request};
use crate::store::Dataset;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRequest {
    pub guest_name: String,
    #[serde(default)]
    pub room_number: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Overrides the classifier when present.
    #[serde(default)]
    pub department: Option<Department>,
    /// Overrides the classifier when present.
    #[serde(default)]
    pub priority: Option<Priority>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestFilter {
    pub department: Option<Department>,
    pub status: Option<RequestStatus>,
    pub priority: Option<Priority>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_requests: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestPage {
    pub requests: Vec<ServiceRequest>,
    pub pagination: Pagination,
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn status_label(status: RequestStatus) -> String {
    status.as_str().to_lowercase().replace('_', " ")
}

/// Creates a PENDING request, classifying department and priority when the
/// caller did not supply them.
pub fn create_request(
    data: &mut Dataset,
    input: NewRequest,
    now: DateTime<Utc>,
) -> Result<ServiceRequest, AppError> {
    require_text("guestName", &input.guest_name)?;
    require_text("title", &input.title)?;

    let department = input
        .department
        .unwrap_or_else(|| route_request(&input.title, &input.description));
    let priority = input
        .priority
        .unwrap_or_else(|| get_priority(&input.title, &input.description));
    let estimate = estimated_response_time(priority, &department);

    let request = ServiceRequest {
        id: data.next_request_id(),
        guest_name: input.guest_name.trim().to_string(),
        room_number: input.room_number.filter(|r| !r.trim().is_empty()),
        title: input.title.trim().to_string(),
        description: input.description,
        department,
        priority,
        status: RequestStatus::Pending,
        created_at: now,
        completed_at: None,
        assigned_to: None,
        assigned_at: None,
        estimated_response_time: Some(estimate),
        comments: vec![],
    };

    data.requests.push(request.clone());
    data.log_activity(NewActivity {
        kind: ActivityKind::Request,
        title: "New guest request".to_string(),
        description: format!(
            "{} - {} ({})",
            request.guest_name, request.title, request.department
        ),
        timestamp: now,
        status: RequestStatus::Pending.as_str().to_string(),
    });

    info!(
        "Created request {} for {} ({}, ~{estimate} min)",
        request.id, request.department, request.priority
    );
    Ok(request)
}

pub fn update_status(
    data: &mut Dataset,
    id: u64,
    status: RequestStatus,
    now: DateTime<Utc>,
) -> Result<ServiceRequest, AppError> {
    let request = data.request_mut(id)?;
    if request.status == status {
        return Ok(request.clone());
    }
    if !request.status.can_transition_to(status) {
        return Err(AppError::UnprocessableEntity(format!(
            "Request {id} is {} and cannot move to {}",
            request.status, status
        )));
    }

    request.status = status;
    if status == RequestStatus::Completed {
        request.completed_at = Some(now);
    }
    let updated = request.clone();

    data.log_activity(NewActivity {
        kind: ActivityKind::Request,
        title: format!("Request {}", status_label(status)),
        description: format!(
            "{} - {} ({})",
            updated.guest_name, updated.title, updated.department
        ),
        timestamp: now,
        status: status.as_str().to_string(),
    });

    info!("Request {id} status updated to {status}");
    Ok(updated)
}

/// Assigns a request to a staff member; a PENDING request moves to IN_PROGRESS.
pub fn assign_request(
    data: &mut Dataset,
    id: u64,
    staff_id: u64,
    now: DateTime<Utc>,
) -> Result<(ServiceRequest, Staff), AppError> {
    let member = data
        .staff_member(staff_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Staff member {staff_id} not found")))?;

    let request = data.request_mut(id)?;
    if request.status.is_terminal() {
        return Err(AppError::UnprocessableEntity(format!(
            "Request {id} is {} and cannot be reassigned",
            request.status
        )));
    }

    request.assigned_to = Some(member.id);
    request.assigned_at = Some(now);
    if request.status == RequestStatus::Pending {
        request.status = RequestStatus::InProgress;
    }
    let updated = request.clone();

    data.log_activity(NewActivity {
        kind: ActivityKind::Request,
        title: "Request assigned".to_string(),
        description: format!(
            "{} - {} assigned to {}",
            updated.guest_name, updated.title, member.name
        ),
        timestamp: now,
        status: updated.status.as_str().to_string(),
    });

    info!("Request {id} assigned to staff {staff_id}");
    Ok((updated, member))
}

pub fn add_comment(
    data: &mut Dataset,
    id: u64,
    staff_id: u64,
    comment: &str,
    now: DateTime<Utc>,
) -> Result<ServiceRequest, AppError> {
    require_text("comment", comment)?;
    if data.staff_member(staff_id).is_none() {
        return Err(AppError::NotFound(format!("Staff member {staff_id} not found")));
    }

    let request = data.request_mut(id)?;
    request.comments.push(RequestComment {
        staff_id,
        comment: comment.trim().to_string(),
        timestamp: now,
    });
    Ok(request.clone())
}

/// Filters then paginates. Pages are 1-based.
pub fn list_requests(
    requests: &[ServiceRequest],
    filter: &RequestFilter,
) -> Result<RequestPage, AppError> {
    let page = filter.page.unwrap_or(1);
    let limit = filter.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    if page == 0 {
        return Err(AppError::Validation("page starts at 1".to_string()));
    }
    if limit == 0 || limit > MAX_PAGE_SIZE {
        return Err(AppError::Validation(format!(
            "limit must be between 1 and {MAX_PAGE_SIZE}"
        )));
    }

    let matching: Vec<&ServiceRequest> = requests
        .iter()
        .filter(|r| filter.department.as_ref().map_or(true, |d| &r.department == d))
        .filter(|r| filter.status.map_or(true, |s| r.status == s))
        .filter(|r| filter.priority.map_or(true, |p| r.priority == p))
        .collect();

    let total = matching.len();
    let start = (page - 1).saturating_mul(limit);
    let end = start.saturating_add(limit);

    Ok(RequestPage {
        requests: matching
            .into_iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect(),
        pagination: Pagination {
            current_page: page,
            total_pages: total.div_ceil(limit),
            total_requests: total,
            has_next: end < total,
            has_prev: start > 0,
        },
    })
}
