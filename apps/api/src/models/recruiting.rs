use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::{Department, Priority};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionStatus {
    Open,
    InReview,
    Filled,
    Closed,
}

impl PositionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionStatus::Open => "OPEN",
            PositionStatus::InReview => "IN_REVIEW",
            PositionStatus::Filled => "FILLED",
            PositionStatus::Closed => "CLOSED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: u64,
    pub title: String,
    pub department: Department,
    pub status: PositionStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    #[serde(rename = "INTERVIEW_SCH")]
    InterviewScheduled,
    Offered,
    Hired,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "PENDING",
            ApplicationStatus::Reviewed => "REVIEWED",
            ApplicationStatus::InterviewScheduled => "INTERVIEW_SCH",
            ApplicationStatus::Offered => "OFFERED",
            ApplicationStatus::Hired => "HIRED",
            ApplicationStatus::Rejected => "REJECTED",
        }
    }
}

/// A candidate's application against an open position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: u64,
    pub candidate_name: String,
    pub candidate_email: String,
    pub position_id: u64,
    pub position_title: String,
    pub department: Department,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub priority: Priority,
    pub applied_date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    #[serde(default)]
    pub cover_letter: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_interview_status_uses_short_wire_name() {
        let value = serde_json::to_value(ApplicationStatus::InterviewScheduled).unwrap();
        assert_eq!(value, json!("INTERVIEW_SCH"));
        assert_eq!(ApplicationStatus::InterviewScheduled.as_str(), "INTERVIEW_SCH");
    }

    #[test]
    fn test_position_status_parses() {
        let s: PositionStatus = serde_json::from_value(json!("IN_REVIEW")).unwrap();
        assert_eq!(s, PositionStatus::InReview);
    }
}
