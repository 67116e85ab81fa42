use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::activity::{ActivityKind, NewActivity};
use crate::models::common::{Department, Priority};
use crate::models::recruiting::{Application, ApplicationStatus, Position, PositionStatus};
use crate::models::staff::{Recruiter, StaffStatus};
use crate::store::Dataset;

#[derive(Debug, Clone, Deserialize)]
pub struct NewPosition {
    pub title: String,
    pub department: Department,
    #[serde(default)]
    pub status: Option<PositionStatus>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub candidate_name: String,
    pub candidate_email: String,
    pub position_id: u64,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default)]
    pub cover_letter: String,
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

pub fn create_position(
    data: &mut Dataset,
    input: NewPosition,
    now: DateTime<Utc>,
) -> Result<Position, AppError> {
    require_text("title", &input.title)?;
    require_text("department", input.department.as_str())?;

    let position = Position {
        id: data.next_position_id(),
        title: input.title.trim().to_string(),
        department: input.department,
        status: input.status.unwrap_or(PositionStatus::Open),
        description: input.description,
        requirements: input
            .requirements
            .into_iter()
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .collect(),
        updated_at: now,
    };
    data.positions.push(position.clone());
    data.log_activity(NewActivity {
        kind: ActivityKind::Position,
        title: "Position opened".to_string(),
        description: format!("{} ({})", position.title, position.department),
        timestamp: now,
        status: position.status.as_str().to_string(),
    });

    info!("Created position {} '{}'", position.id, position.title);
    Ok(position)
}

pub fn update_position_status(
    data: &mut Dataset,
    id: u64,
    status: PositionStatus,
    now: DateTime<Utc>,
) -> Result<Position, AppError> {
    let position = data
        .positions
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Position {id} not found")))?;
    position.status = status;
    position.updated_at = now;
    let updated = position.clone();

    data.log_activity(NewActivity {
        kind: ActivityKind::Position,
        title: "Position status updated".to_string(),
        description: format!("{} marked as {}", updated.title, status.as_str()),
        timestamp: now,
        status: status.as_str().to_string(),
    });
    Ok(updated)
}

/// Files an application against an existing position.
pub fn create_application(
    data: &mut Dataset,
    input: NewApplication,
    now: DateTime<Utc>,
) -> Result<Application, AppError> {
    require_text("candidateName", &input.candidate_name)?;
    if !input.candidate_email.contains('@') {
        return Err(AppError::Validation(
            "candidateEmail must be an email address".to_string(),
        ));
    }

    let position = data
        .position(input.position_id)
        .ok_or_else(|| AppError::NotFound(format!("Position {} not found", input.position_id)))?;
    if matches!(position.status, PositionStatus::Filled | PositionStatus::Closed) {
        return Err(AppError::UnprocessableEntity(format!(
            "Position {} is {} and not accepting applications",
            position.id,
            position.status.as_str()
        )));
    }

    let application = Application {
        id: data.next_application_id(),
        candidate_name: input.candidate_name.trim().to_string(),
        candidate_email: input.candidate_email.trim().to_string(),
        position_id: position.id,
        position_title: position.title.clone(),
        department: position.department.clone(),
        status: ApplicationStatus::Pending,
        priority: input.priority.unwrap_or_default(),
        applied_date: now,
        updated_at: now,
        description: input.description,
        resume: input.resume,
        cover_letter: input.cover_letter,
    };
    data.applications.push(application.clone());
    data.log_activity(NewActivity {
        kind: ActivityKind::Application,
        title: "New application received".to_string(),
        description: format!(
            "{} - {}",
            application.candidate_name, application.position_title
        ),
        timestamp: now,
        status: application.status.as_str().to_string(),
    });

    info!(
        "Application {} filed for position {}",
        application.id, application.position_id
    );
    Ok(application)
}

pub fn update_application_status(
    data: &mut Dataset,
    id: u64,
    status: ApplicationStatus,
    now: DateTime<Utc>,
) -> Result<Application, AppError> {
    let application = data
        .applications
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;
    application.status = status;
    application.updated_at = now;
    let updated = application.clone();

    data.log_activity(NewActivity {
        kind: ActivityKind::Application,
        title: format!("Application {}", status.as_str().to_lowercase()),
        description: format!("{} - {}", updated.candidate_name, updated.position_title),
        timestamp: now,
        status: status.as_str().to_string(),
    });
    Ok(updated)
}

pub fn update_recruiter_status(
    data: &mut Dataset,
    id: u64,
    status: StaffStatus,
) -> Result<Recruiter, AppError> {
    let recruiter = data
        .recruiters
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Recruiter {id} not found")))?;
    recruiter.status = status;
    Ok(recruiter.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::demo_dataset;

    fn application_for(position_id: u64) -> NewApplication {
        NewApplication {
            candidate_name: "Priya Nair".to_string(),
            candidate_email: "priya@example.com".to_string(),
            position_id,
            priority: None,
            description: String::new(),
            resume: None,
            cover_letter: String::new(),
        }
    }

    #[test]
    fn test_create_position_defaults_to_open() {
        let mut data = Dataset::default();
        let position = create_position(
            &mut data,
            NewPosition {
                title: "Night Auditor".to_string(),
                department: Department::FrontDesk,
                status: None,
                description: String::new(),
                requirements: vec!["Excel".to_string(), " ".to_string()],
            },
            Utc::now(),
        )
        .unwrap();
        assert_eq!(position.id, 1);
        assert_eq!(position.status, PositionStatus::Open);
        assert_eq!(position.requirements, vec!["Excel".to_string()]);
        assert_eq!(data.activity.len(), 1);
    }

    #[test]
    fn test_update_missing_position_is_not_found() {
        let mut data = demo_dataset(Utc::now());
        let count = data.positions.len();
        let err =
            update_position_status(&mut data, 77, PositionStatus::Filled, Utc::now()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(data.positions.len(), count);
    }

    #[test]
    fn test_application_copies_position_details() {
        let mut data = demo_dataset(Utc::now());
        let app = create_application(&mut data, application_for(2), Utc::now()).unwrap();
        assert_eq!(app.position_title, "Front Desk Agent");
        assert_eq!(app.department, Department::FrontDesk);
        assert_eq!(app.status, ApplicationStatus::Pending);
        assert_eq!(app.priority, Priority::Medium);
    }

    #[test]
    fn test_application_unknown_position_is_not_found() {
        let mut data = demo_dataset(Utc::now());
        let err = create_application(&mut data, application_for(42), Utc::now()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_application_to_filled_position_rejected() {
        let mut data = demo_dataset(Utc::now());
        update_position_status(&mut data, 1, PositionStatus::Filled, Utc::now()).unwrap();
        let err = create_application(&mut data, application_for(1), Utc::now()).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn test_application_requires_email() {
        let mut data = demo_dataset(Utc::now());
        let mut input = application_for(1);
        input.candidate_email = "not-an-email".to_string();
        assert!(matches!(
            create_application(&mut data, input, Utc::now()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_application_status_update_logs_activity() {
        let mut data = demo_dataset(Utc::now());
        let updated = update_application_status(
            &mut data,
            2,
            ApplicationStatus::InterviewScheduled,
            Utc::now(),
        )
        .unwrap();
        assert_eq!(updated.status, ApplicationStatus::InterviewScheduled);
        assert_eq!(data.activity.last().unwrap().status, "INTERVIEW_SCH");
    }

    #[test]
    fn test_recruiter_status() {
        let mut data = demo_dataset(Utc::now());
        let r = update_recruiter_status(&mut data, 3, StaffStatus::Active).unwrap();
        assert_eq!(r.status, StaffStatus::Active);
        assert!(update_recruiter_status(&mut data, 9, StaffStatus::Active).is_err());
    }
}
