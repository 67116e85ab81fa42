//! Staff push notifications.
//!
//! Delivery goes through the `Notifier` trait, held in `AppState` as
//! `Arc<dyn Notifier>`. The default `LogNotifier` writes the message to the
//! `push` tracing target; there is no retry and no delivery receipt beyond
//! the returned `Notification` record. Callers file those records in the
//! recipient's inbox (see `inbox`).

pub mod handlers;
pub mod inbox;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, warn};

use crate::models::activity::{ActivityKind, NewActivity};
use crate::models::common::Department;
use crate::models::notification::DeliveryStatus;
use crate::models::staff::Staff;

#[derive(Debug, Error)]
pub enum NotifyError {
    // Only test notifiers fail today.
    #[cfg_attr(not(test), allow(dead_code))]
    #[error("delivery to staff {staff_id} failed: {reason}")]
    Delivery { staff_id: u64, reason: String },
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn deliver(&self, staff: &Staff, message: &str) -> Result<(), NotifyError>;
}

/// Logs each notification instead of delivering it.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn deliver(&self, staff: &Staff, message: &str) -> Result<(), NotifyError> {
        info!(
            target: "push",
            "[PUSH NOTIFICATION] To: {} ({}) - Message: {}",
            staff.name,
            staff.department,
            message
        );
        Ok(())
    }
}

/// Outcome of one delivery attempt, not yet filed anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub staff_id: u64,
    pub message: String,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub status: DeliveryStatus,
}

impl From<Notification> for NewActivity {
    fn from(n: Notification) -> Self {
        NewActivity {
            kind: ActivityKind::Notification,
            title: n.title,
            description: n.description,
            timestamp: n.timestamp,
            status: n.status.as_str().to_string(),
        }
    }
}

pub async fn send_push_notification(
    notifier: &dyn Notifier,
    staff: &Staff,
    message: &str,
) -> Notification {
    let status = match notifier.deliver(staff, message).await {
        Ok(()) => DeliveryStatus::Sent,
        Err(e) => {
            warn!("{e}");
            DeliveryStatus::Failed
        }
    };

    Notification {
        staff_id: staff.id,
        message: message.to_string(),
        title: "Staff Notification Sent".to_string(),
        description: format!("Notification sent to {}: {}", staff.name, message),
        timestamp: Utc::now(),
        status,
    }
}

/// Notifies every staff member of `department`, in list order.
pub async fn notify_department(
    notifier: &dyn Notifier,
    department: &Department,
    staff: &[Staff],
    message: &str,
) -> Vec<Notification> {
    let mut notifications = Vec::new();
    for member in staff.iter().filter(|s| &s.department == department) {
        notifications.push(send_push_notification(notifier, member, message).await);
    }
    notifications
}

/// Notifies one staff member. `None` when the id is unknown.
pub async fn notify_staff_by_id(
    notifier: &dyn Notifier,
    staff_id: u64,
    staff: &[Staff],
    message: &str,
) -> Option<Notification> {
    match staff.iter().find(|s| s.id == staff_id) {
        Some(member) => Some(send_push_notification(notifier, member, message).await),
        None => None,
    }
}
