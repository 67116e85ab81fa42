use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "SENT",
            DeliveryStatus::Failed => "FAILED",
        }
    }
}

/// A push notification kept in the recipient's inbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffNotification {
    pub id: u64,
    pub staff_id: u64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<u64>,
    pub status: DeliveryStatus,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inbox_entry_wire_format() {
        let entry: StaffNotification = serde_json::from_value(json!({
            "id": 3,
            "staffId": 7,
            "message": "Fix sink",
            "status": "FAILED",
            "createdAt": "2024-05-01T10:00:00Z"
        }))
        .unwrap();
        assert!(!entry.is_read);
        assert_eq!(entry.request_id, None);
        assert_eq!(entry.status, DeliveryStatus::Failed);

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["isRead"], false);
        assert!(value.get("requestId").is_none());
    }
}
