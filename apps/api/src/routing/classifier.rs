//! Keyword classifier for incoming service requests.
//!
//! Department routing picks the keyword that appears earliest in the
//! combined title/description; two keywords matching at the same offset
//! (e.g. "room service") are settled by department precedence:
//! Housekeeping, Maintenance, Food & Beverage, Front Desk. Nothing is
//! weighted or scored; one substring hit is enough.

use serde::{Deserialize, Serialize};

use crate::models::common::{Department, Priority};
use crate::routing::keywords::{department_keywords, PRIORITY_KEYWORDS};

/// Estimate used for any (priority, department) pair outside the table.
pub const DEFAULT_RESPONSE_MINUTES: u32 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub department: Department,
    pub priority: Priority,
    pub estimated_response_time: u32,
}

fn normalized_text(title: &str, description: &str) -> String {
    format!("{title} {description}").to_lowercase()
}

/// Routes a request to a department. Falls back to Front Desk.
pub fn route_request(title: &str, description: &str) -> Department {
    let text = normalized_text(title, description);

    let mut best: Option<(usize, Department)> = None;
    for (department, keywords) in department_keywords() {
        let earliest = keywords.iter().filter_map(|kw| text.find(kw)).min();
        if let Some(pos) = earliest {
            // strict `<` keeps the earlier department on a tie
            if best.as_ref().map_or(true, |(best_pos, _)| pos < *best_pos) {
                best = Some((pos, department));
            }
        }
    }

    best.map(|(_, department)| department)
        .unwrap_or(Department::FrontDesk)
}

/// Derives priority from urgency keywords. Falls back to MEDIUM.
pub fn get_priority(title: &str, description: &str) -> Priority {
    let text = normalized_text(title, description);

    PRIORITY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw)))
        .map(|(priority, _)| *priority)
        .unwrap_or(Priority::Medium)
}

/// Expected response time in minutes for a priority/department pair.
pub fn estimated_response_time(priority: Priority, department: &Department) -> u32 {
    let minutes = match (priority, department) {
        (Priority::Urgent, Department::Maintenance) => Some(15),
        (Priority::Urgent, Department::Housekeeping) => Some(30),
        (Priority::Urgent, Department::FoodAndBeverage) => Some(20),
        (Priority::Urgent, Department::FrontDesk) => Some(10),
        (Priority::High, Department::Maintenance) => Some(60),
        (Priority::High, Department::Housekeeping) => Some(45),
        (Priority::High, Department::FoodAndBeverage) => Some(30),
        (Priority::High, Department::FrontDesk) => Some(20),
        (Priority::Medium, Department::Maintenance) => Some(120),
        (Priority::Medium, Department::Housekeeping) => Some(90),
        (Priority::Medium, Department::FoodAndBeverage) => Some(45),
        (Priority::Medium, Department::FrontDesk) => Some(30),
        (Priority::Low, Department::Maintenance) => Some(240),
        (Priority::Low, Department::Housekeeping) => Some(120),
        (Priority::Low, Department::FoodAndBeverage) => Some(60),
        (Priority::Low, Department::FrontDesk) => Some(45),
        (_, Department::Other(_)) => None,
    };
    minutes.unwrap_or(DEFAULT_RESPONSE_MINUTES)
}

/// Runs routing, priority detection and the estimate in one pass.
pub fn classify(title: &str, description: &str) -> Classification {
    let department = route_request(title, description);
    let priority = get_priority(title, description);
    let estimated_response_time = estimated_response_time(priority, &department);
    Classification {
        department,
        priority,
        estimated_response_time,
    }
}
