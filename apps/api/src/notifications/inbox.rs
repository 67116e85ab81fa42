//! Per-staff notification inbox with read tracking.

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::notification::StaffNotification;
use crate::notifications::Notification;
use crate::store::Dataset;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxFilter {
    pub staff_id: Option<u64>,
    #[serde(default)]
    pub unread_only: bool,
}

/// Files each delivery in its recipient's inbox and the activity feed.
pub fn record_notifications(
    data: &mut Dataset,
    notifications: Vec<Notification>,
    request_id: Option<u64>,
) -> Vec<u64> {
    let mut ids = Vec::with_capacity(notifications.len());
    for notification in notifications {
        let id = data.next_notification_id();
        data.notifications.push(StaffNotification {
            id,
            staff_id: notification.staff_id,
            message: notification.message.clone(),
            request_id,
            status: notification.status,
            is_read: false,
            created_at: notification.timestamp,
        });
        data.log_activity(notification.into());
        ids.push(id);
    }
    ids
}

fn require_staff(data: &Dataset, staff_id: u64) -> Result<(), AppError> {
    data.staff_member(staff_id)
        .map(|_| ())
        .ok_or_else(|| AppError::NotFound(format!("Staff member {staff_id} not found")))
}

/// Newest first.
pub fn list_notifications(
    data: &Dataset,
    filter: &InboxFilter,
) -> Result<Vec<StaffNotification>, AppError> {
    if let Some(staff_id) = filter.staff_id {
        require_staff(data, staff_id)?;
    }
    let mut items: Vec<StaffNotification> = data
        .notifications
        .iter()
        .filter(|n| filter.staff_id.map_or(true, |id| n.staff_id == id))
        .filter(|n| !filter.unread_only || !n.is_read)
        .cloned()
        .collect();
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    Ok(items)
}

pub fn mark_read(data: &mut Dataset, id: u64) -> Result<StaffNotification, AppError> {
    let notification = data
        .notifications
        .iter_mut()
        .find(|n| n.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Notification {id} not found")))?;
    notification.is_read = true;
    Ok(notification.clone())
}

/// Returns how many notifications flipped from unread to read.
pub fn mark_all_read(data: &mut Dataset, staff_id: u64) -> Result<usize, AppError> {
    require_staff(data, staff_id)?;
    let mut updated = 0;
    for notification in data
        .notifications
        .iter_mut()
        .filter(|n| n.staff_id == staff_id && !n.is_read)
    {
        notification.is_read = true;
        updated += 1;
    }
    Ok(updated)
}
