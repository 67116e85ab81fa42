use serde::{Deserialize, Serialize};

use crate::models::common::Department;
use crate::models::staff::{Staff, StaffStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    pub name: Department,
    pub staff_count: usize,
    pub active_staff: usize,
    /// Rounded mean of member performance; 0 for an empty department.
    pub average_performance: u32,
}

/// Summaries for the four routing departments (always present, in routing
/// order) followed by any other department that appears on the roster.
pub fn department_summaries(staff: &[Staff]) -> Vec<DepartmentSummary> {
    let mut departments: Vec<Department> = Department::ROUTED.to_vec();
    for member in staff {
        if !departments.contains(&member.department) {
            departments.push(member.department.clone());
        }
    }

    departments
        .into_iter()
        .map(|department| {
            let members: Vec<&Staff> =
                staff.iter().filter(|s| s.department == department).collect();
            let average_performance = if members.is_empty() {
                0
            } else {
                let total: u32 = members.iter().map(|s| s.performance).sum();
                (total as f64 / members.len() as f64).round() as u32
            };
            DepartmentSummary {
                staff_count: members.len(),
                active_staff: members
                    .iter()
                    .filter(|s| s.status == StaffStatus::Active)
                    .count(),
                average_performance,
                name: department,
            }
        })
        .collect()
}
