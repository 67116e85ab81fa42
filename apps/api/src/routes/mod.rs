pub mod auth;
pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::dashboard::handlers as dashboard;
use crate::notifications::handlers as notifications;
use crate::recruiting::handlers as recruiting;
use crate::reporting::handlers as reporting;
use crate::requests::handlers as requests;
use crate::routing::handlers as classify;
use crate::staff::handlers as staff;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/auth/login", post(auth::handle_login))
        // Classifier preview
        .route("/api/classify", post(classify::handle_classify))
        // Service requests
        .route(
            "/api/requests",
            get(requests::handle_list_requests).post(requests::handle_create_request),
        )
        .route("/api/requests/:id", get(requests::handle_get_request))
        .route(
            "/api/requests/:id/status",
            put(requests::handle_update_status),
        )
        .route(
            "/api/requests/:id/assign",
            put(requests::handle_assign_request),
        )
        .route(
            "/api/requests/:id/comments",
            post(requests::handle_add_comment),
        )
        // Staff & departments
        .route("/api/staff", get(staff::handle_list_staff))
        .route(
            "/api/staff/:id/status",
            put(staff::handle_update_staff_status),
        )
        .route("/api/departments", get(staff::handle_list_departments))
        // Recruiting
        .route(
            "/api/positions",
            get(recruiting::handle_list_positions).post(recruiting::handle_create_position),
        )
        .route("/api/positions/:id", get(recruiting::handle_get_position))
        .route(
            "/api/positions/:id/status",
            put(recruiting::handle_update_position_status),
        )
        .route(
            "/api/applications",
            get(recruiting::handle_list_applications).post(recruiting::handle_create_application),
        )
        .route(
            "/api/applications/:id",
            get(recruiting::handle_get_application),
        )
        .route(
            "/api/applications/:id/status",
            put(recruiting::handle_update_application_status),
        )
        .route("/api/recruiters", get(recruiting::handle_list_recruiters))
        .route(
            "/api/recruiters/:id/status",
            put(recruiting::handle_update_recruiter_status),
        )
        // Notification inbox
        .route(
            "/api/notifications",
            get(notifications::handle_list_notifications),
        )
        .route(
            "/api/notifications/read-all",
            put(notifications::handle_mark_all_read),
        )
        .route(
            "/api/notifications/:id/read",
            put(notifications::handle_mark_read),
        )
        // Reports
        .route(
            "/api/reports/request-metrics",
            get(reporting::handle_request_metrics),
        )
        .route(
            "/api/reports/staff-performance",
            get(reporting::handle_staff_performance),
        )
        .route("/api/reports/export", get(reporting::handle_export_metrics))
        // Dashboard
        .route(
            "/api/dashboard/stats",
            get(dashboard::handle_dashboard_stats),
        )
        .route(
            "/api/dashboard/activity",
            get(dashboard::handle_dashboard_activity),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;
    use crate::models::staff::Staff;
    use crate::notifications::tests::RecordingNotifier;
    use crate::notifications::{Notifier, NotifyError};
    use crate::store::Store;

    struct TestApp {
        router: Router,
        store: Arc<Store>,
        notifier: Arc<RecordingNotifier>,
        _dir: TempDir,
    }

    async fn test_app() -> TestApp {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(Store::open(dir.path().join("data.json"), true).await.unwrap());
        let notifier = Arc::new(RecordingNotifier::default());
        let state = AppState {
            store: store.clone(),
            notifier: notifier.clone(),
        };
        TestApp {
            router: build_router(state),
            store,
            notifier,
            _dir: dir,
        }
    }

    async fn send(
        app: &TestApp,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app().await;
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_create_request_classifies_and_notifies_department() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/requests",
            Some(json!({
                "guestName": "Ana Lima",
                "roomNumber": "412",
                "title": "Leak in bathroom",
                "description": "water on the floor"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["request"]["department"], "Maintenance");
        assert_eq!(body["request"]["priority"], "URGENT");
        assert_eq!(body["request"]["status"], "PENDING");
        assert_eq!(body["request"]["estimatedResponseTime"], 15);

        // seed has two Maintenance staff: David Wilson (4) and Eva Brown (5)
        let sent = app.notifier.sent.lock().unwrap().clone();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].0, 4);
        assert_eq!(sent[0].1, "New request: Leak in bathroom for room 412");

        let data = app.store.read().await;
        let notifications = data
            .activity
            .iter()
            .filter(|a| a.status == "SENT")
            .count();
        assert_eq!(notifications, 2);
    }

    /// Deletes the data directory on delivery so the next store write fails.
    struct DirRemovingNotifier {
        dir: PathBuf,
    }

    #[async_trait]
    impl Notifier for DirRemovingNotifier {
        async fn deliver(&self, _staff: &Staff, _message: &str) -> Result<(), NotifyError> {
            let _ = std::fs::remove_dir_all(&self.dir);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_create_request_succeeds_when_notification_record_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(Store::open(dir.path().join("data.json"), true).await.unwrap());
        let before = store.read().await.requests.len();
        let router = build_router(AppState {
            store: store.clone(),
            notifier: Arc::new(DirRemovingNotifier {
                dir: dir.path().to_path_buf(),
            }),
        });
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/requests")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "guestName": "A", "title": "need towels" }).to_string(),
            ))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let data = store.read().await;
        assert_eq!(data.requests.len(), before + 1);
        assert!(data.notifications.is_empty());
    }

    #[tokio::test]
    async fn test_notification_inbox_flow() {
        let app = test_app().await;
        send(
            &app,
            Method::POST,
            "/api/requests",
            Some(json!({
                "guestName": "Ana Lima",
                "roomNumber": "412",
                "title": "Leak in bathroom"
            })),
        )
        .await;
        send(
            &app,
            Method::PUT,
            "/api/requests/3/assign",
            Some(json!({ "staffId": 4 })),
        )
        .await;

        let (status, body) = send(&app, Method::GET, "/api/notifications?staffId=4", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["unreadCount"], 2);
        let items = body["notifications"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["requestId"], 3);
        assert_eq!(items[0]["isRead"], false);
        let first_id = items[0]["id"].as_u64().unwrap();

        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/api/notifications/{first_id}/read"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["notification"]["isRead"], true);

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/notifications/read-all",
            Some(json!({ "staffId": 4 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["updated"], 1);

        // Eva Brown (5) got the department broadcast and has not read it
        let (_, body) = send(
            &app,
            Method::GET,
            "/api/notifications?staffId=5&unreadOnly=true",
            None,
        )
        .await;
        assert_eq!(body["unreadCount"], 1);
    }

    #[tokio::test]
    async fn test_notification_inbox_unknown_ids_are_404() {
        let app = test_app().await;
        let (status, _) = send(&app, Method::PUT, "/api/notifications/99/read", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/notifications/read-all",
            Some(json!({ "staffId": 404 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::GET, "/api/notifications?staffId=404", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_request_missing_title_is_rejected() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/requests",
            Some(json!({ "guestName": "Ana Lima", "title": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_status_update_on_missing_request_is_404_and_creates_nothing() {
        let app = test_app().await;
        let before = app.store.read().await.requests.len();
        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/requests/999/status",
            Some(json!({ "status": "COMPLETED" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(app.store.read().await.requests.len(), before);
    }

    #[tokio::test]
    async fn test_status_update_rejects_unknown_status() {
        let app = test_app().await;
        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/requests/1/status",
            Some(json!({ "status": "DONE-ISH" })),
        )
        .await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_complete_request_then_metrics() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/requests/1/status",
            Some(json!({ "status": "COMPLETED" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["request"]["completedAt"].is_string());

        let (status, metrics) = send(&app, Method::GET, "/api/reports/request-metrics", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(metrics["totalRequests"], 4);
        assert_eq!(metrics["requestsByStatus"]["COMPLETED"], 2);
        assert_eq!(metrics["requestsByStatus"]["CANCELLED"], 0);
        assert_eq!(metrics["peakRequestTimes"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_assign_notifies_staff_member() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/requests/3/assign",
            Some(json!({ "staffId": 4 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["request"]["assignedTo"], 4);
        assert_eq!(body["request"]["status"], "IN_PROGRESS");

        let sent = app.notifier.sent.lock().unwrap().clone();
        assert_eq!(
            sent,
            vec![(4, "You have been assigned request: Leaky faucet for room 210".to_string())]
        );
    }

    #[tokio::test]
    async fn test_assign_to_unknown_staff_is_404() {
        let app = test_app().await;
        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/requests/1/assign",
            Some(json!({ "staffId": 404 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(app.notifier.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_requests_filters_by_status() {
        let app = test_app().await;
        let (status, body) =
            send(&app, Method::GET, "/api/requests?status=PENDING&limit=1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["requests"].as_array().unwrap().len(), 1);
        assert_eq!(body["pagination"]["totalRequests"], 2);
        assert_eq!(body["pagination"]["hasNext"], true);
    }

    #[tokio::test]
    async fn test_get_request_404() {
        let app = test_app().await;
        let (status, _) = send(&app, Method::GET, "/api/requests/77", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_classify_preview() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/classify",
            Some(json!({ "title": "need towels" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["department"], "Housekeeping");
        assert_eq!(body["priority"], "MEDIUM");
        assert_eq!(body["estimatedResponseTime"], 90);
    }

    #[tokio::test]
    async fn test_staff_status_missing_is_404() {
        let app = test_app().await;
        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/staff/500/status",
            Some(json!({ "status": "ACTIVE" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_staff_filter_by_department() {
        let app = test_app().await;
        let (status, body) =
            send(&app, Method::GET, "/api/staff?department=Front%20Desk", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["staff"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_position_and_application_flow() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/positions",
            Some(json!({ "title": "Sous Chef", "department": "Food & Beverage" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let position_id = body["position"]["id"].as_u64().unwrap();
        assert_eq!(body["position"]["status"], "OPEN");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/applications",
            Some(json!({
                "candidateName": "Marco Rossi",
                "candidateEmail": "marco@example.com",
                "positionId": position_id
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["application"]["positionTitle"], "Sous Chef");
        assert_eq!(body["application"]["department"], "Food & Beverage");

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/positions/999/status",
            Some(json!({ "status": "FILLED" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_export_is_csv() {
        let app = test_app().await;
        let response = app
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/reports/export")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.starts_with("Generated At,Total Requests"));
        assert_eq!(text.lines().count(), 2);
    }

    #[tokio::test]
    async fn test_dashboard_and_departments() {
        let app = test_app().await;
        let (status, stats) = send(&app, Method::GET, "/api/dashboard/stats", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(stats["pendingRequests"], 2);

        let (status, body) = send(&app, Method::GET, "/api/departments", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["departments"].as_array().unwrap().len(), 4);
        assert_eq!(body["departments"][2]["name"], "Food & Beverage");
    }

    #[tokio::test]
    async fn test_mock_login() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/auth/login",
            Some(json!({ "email": "ops@example.com", "password": "x" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["name"], "ops");
        assert!(body["token"].is_string());

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/auth/login",
            Some(json!({ "email": "nobody" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
