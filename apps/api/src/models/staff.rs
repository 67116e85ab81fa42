use serde::{Deserialize, Serialize};

use crate::models::common::Department;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffStatus {
    #[serde(alias = "Active")]
    Active,
    #[serde(alias = "Break")]
    OnBreak,
    #[serde(alias = "Offline")]
    Offline,
}

impl StaffStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffStatus::Active => "ACTIVE",
            StaffStatus::OnBreak => "ON_BREAK",
            StaffStatus::Offline => "OFFLINE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: u64,
    pub name: String,
    pub department: Department,
    #[serde(default)]
    pub position: String,
    pub status: StaffStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 0-100 rating; absent in older records.
    #[serde(default)]
    pub performance: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recruiter {
    pub id: u64,
    pub name: String,
    pub role: String,
    pub status: StaffStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_legacy_status_spellings_accepted() {
        let s: StaffStatus = serde_json::from_value(json!("Break")).unwrap();
        assert_eq!(s, StaffStatus::OnBreak);
        let s: StaffStatus = serde_json::from_value(json!("ON_BREAK")).unwrap();
        assert_eq!(s, StaffStatus::OnBreak);
        assert_eq!(serde_json::to_value(StaffStatus::Active).unwrap(), json!("ACTIVE"));
    }

    #[test]
    fn test_missing_performance_defaults_to_zero() {
        let staff: Staff = serde_json::from_value(json!({
            "id": 3,
            "name": "Carol Davis",
            "department": "Housekeeping",
            "status": "Offline"
        }))
        .unwrap();
        assert_eq!(staff.performance, 0);
        assert_eq!(staff.department, Department::Housekeeping);
    }
}
