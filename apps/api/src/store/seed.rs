//! Starter dataset written on first boot when `SEED_DEMO_DATA` is on.

use chrono::{DateTime, Duration, Utc};

use crate::models::common::{Department, Priority};
use crate::models::recruiting::{Application, ApplicationStatus, Position, PositionStatus};
use crate::models::request::{RequestStatus, ServiceRequest};
use crate::models::staff::{Recruiter, Staff, StaffStatus};
use crate::store::Dataset;

fn staff(
    id: u64,
    name: &str,
    department: Department,
    position: &str,
    status: StaffStatus,
    performance: u32,
) -> Staff {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    Staff {
        id,
        name: name.to_string(),
        department,
        position: position.to_string(),
        status,
        email: Some(email),
        performance,
    }
}

#[allow(clippy::too_many_arguments)]
fn request(
    id: u64,
    guest_name: &str,
    room: &str,
    title: &str,
    department: Department,
    priority: Priority,
    status: RequestStatus,
    created_at: DateTime<Utc>,
) -> ServiceRequest {
    ServiceRequest {
        id,
        guest_name: guest_name.to_string(),
        room_number: Some(room.to_string()),
        title: title.to_string(),
        description: String::new(),
        department,
        priority,
        status,
        created_at,
        completed_at: None,
        assigned_to: None,
        assigned_at: None,
        estimated_response_time: None,
        comments: vec![],
    }
}

pub fn demo_dataset(now: DateTime<Utc>) -> Dataset {
    let hours_ago = |h: i64| now - Duration::hours(h);

    let staff = vec![
        staff(1, "Alice Johnson", Department::Housekeeping, "Supervisor", StaffStatus::Active, 92),
        staff(2, "Bob Smith", Department::Housekeeping, "Staff", StaffStatus::Active, 87),
        staff(3, "Carol Davis", Department::Housekeeping, "Staff", StaffStatus::Offline, 95),
        staff(4, "David Wilson", Department::Maintenance, "Supervisor", StaffStatus::Active, 88),
        staff(5, "Eva Brown", Department::Maintenance, "Staff", StaffStatus::OnBreak, 91),
        staff(6, "Frank Miller", Department::FoodAndBeverage, "Manager", StaffStatus::Active, 96),
        staff(7, "Grace Lee", Department::FoodAndBeverage, "Staff", StaffStatus::Active, 89),
        staff(8, "Jack Roberts", Department::FrontDesk, "Receptionist", StaffStatus::Active, 94),
        staff(9, "Kate Williams", Department::FrontDesk, "Manager", StaffStatus::Active, 97),
    ];

    let mut late_checkout = request(
        4,
        "Emily Wilson",
        "302",
        "Late checkout",
        Department::FrontDesk,
        Priority::Low,
        RequestStatus::Completed,
        hours_ago(4),
    );
    late_checkout.assigned_to = Some(8);
    late_checkout.assigned_at = Some(hours_ago(4) + Duration::minutes(5));
    late_checkout.completed_at = Some(hours_ago(4) + Duration::minutes(35));

    let mut breakfast = request(
        2,
        "Jane Smith",
        "108",
        "Breakfast order",
        Department::FoodAndBeverage,
        Priority::High,
        RequestStatus::InProgress,
        hours_ago(2),
    );
    breakfast.assigned_to = Some(7);
    breakfast.assigned_at = Some(hours_ago(2) + Duration::minutes(10));

    let requests = vec![
        request(
            1,
            "John Doe",
            "205",
            "Extra towels",
            Department::Housekeeping,
            Priority::Medium,
            RequestStatus::Pending,
            hours_ago(1),
        ),
        breakfast,
        request(
            3,
            "Robert Johnson",
            "210",
            "Leaky faucet",
            Department::Maintenance,
            Priority::Urgent,
            RequestStatus::Pending,
            hours_ago(3),
        ),
        late_checkout,
    ];

    let positions = vec![
        Position {
            id: 1,
            title: "Software Engineer".to_string(),
            department: Department::from("Technology"),
            status: PositionStatus::Open,
            description: "Experienced engineer for the guest platform".to_string(),
            requirements: vec![
                "Rust".to_string(),
                "SQL".to_string(),
                "5+ years experience".to_string(),
            ],
            updated_at: now,
        },
        Position {
            id: 2,
            title: "Front Desk Agent".to_string(),
            department: Department::FrontDesk,
            status: PositionStatus::Open,
            description: "Guest-facing reception role, rotating shifts".to_string(),
            requirements: vec!["Customer service".to_string(), "PMS experience".to_string()],
            updated_at: now,
        },
        Position {
            id: 3,
            title: "HR Director".to_string(),
            department: Department::from("Human Resources"),
            status: PositionStatus::InReview,
            description: "Senior role leading talent acquisition".to_string(),
            requirements: vec!["HR Management".to_string(), "Talent Acquisition".to_string()],
            updated_at: now,
        },
    ];

    let applications = vec![
        Application {
            id: 1,
            candidate_name: "John Doe".to_string(),
            candidate_email: "john.doe@example.com".to_string(),
            position_id: 1,
            position_title: "Software Engineer".to_string(),
            department: Department::from("Technology"),
            status: ApplicationStatus::Reviewed,
            priority: Priority::Medium,
            applied_date: hours_ago(26),
            updated_at: hours_ago(2),
            description: "Backend engineer, eight years of systems work".to_string(),
            resume: Some("resume_john_doe.pdf".to_string()),
            cover_letter: String::new(),
        },
        Application {
            id: 2,
            candidate_name: "Jane Smith".to_string(),
            candidate_email: "jane.smith@example.com".to_string(),
            position_id: 2,
            position_title: "Front Desk Agent".to_string(),
            department: Department::FrontDesk,
            status: ApplicationStatus::Pending,
            priority: Priority::High,
            applied_date: hours_ago(1),
            updated_at: hours_ago(1),
            description: "Five years in hotel reception".to_string(),
            resume: Some("resume_jane_smith.pdf".to_string()),
            cover_letter: String::new(),
        },
    ];

    let recruiters = vec![
        Recruiter {
            id: 1,
            name: "John Smith".to_string(),
            role: "Manager".to_string(),
            status: StaffStatus::Active,
        },
        Recruiter {
            id: 2,
            name: "Jane Doe".to_string(),
            role: "Recruiter".to_string(),
            status: StaffStatus::Active,
        },
        Recruiter {
            id: 3,
            name: "Robert Johnson".to_string(),
            role: "Coordinator".to_string(),
            status: StaffStatus::OnBreak,
        },
    ];

    Dataset {
        requests,
        staff,
        recruiters,
        positions,
        applications,
        activity: vec![],
        notifications: vec![],
    }
}
