use std::fmt;

use serde::{Deserialize, Serialize};

/// Operational department. The four named variants are the ones the request
/// classifier can route to; anything else round-trips through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Department {
    Housekeeping,
    Maintenance,
    FoodAndBeverage,
    FrontDesk,
    Other(String),
}

impl Department {
    /// Routing departments in classifier precedence order.
    pub const ROUTED: [Department; 4] = [
        Department::Housekeeping,
        Department::Maintenance,
        Department::FoodAndBeverage,
        Department::FrontDesk,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Department::Housekeeping => "Housekeeping",
            Department::Maintenance => "Maintenance",
            Department::FoodAndBeverage => "Food & Beverage",
            Department::FrontDesk => "Front Desk",
            Department::Other(name) => name,
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Department {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        Department::ROUTED
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| Department::Other(trimmed.to_string()))
    }
}

impl From<String> for Department {
    fn from(value: String) -> Self {
        Department::from(value.as_str())
    }
}

impl From<Department> for String {
    fn from(value: Department) -> Self {
        match value {
            Department::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// Ordinal urgency tag, most urgent first.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Urgent,
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "URGENT",
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_department_parses_case_insensitively() {
        assert_eq!(Department::from("food & beverage"), Department::FoodAndBeverage);
        assert_eq!(Department::from(" Front Desk "), Department::FrontDesk);
    }

    #[test]
    fn test_unknown_department_round_trips_as_other() {
        let dept: Department = serde_json::from_value(json!("Technology")).unwrap();
        assert_eq!(dept, Department::Other("Technology".to_string()));
        assert_eq!(serde_json::to_value(&dept).unwrap(), json!("Technology"));
    }

    #[test]
    fn test_department_serializes_display_name() {
        let value = serde_json::to_value(Department::FoodAndBeverage).unwrap();
        assert_eq!(value, json!("Food & Beverage"));
    }

    #[test]
    fn test_priority_wire_format() {
        assert_eq!(serde_json::to_value(Priority::Urgent).unwrap(), json!("URGENT"));
        let p: Priority = serde_json::from_value(json!("LOW")).unwrap();
        assert_eq!(p, Priority::Low);
        assert!(serde_json::from_value::<Priority>(json!("SOMEDAY")).is_err());
    }
}
