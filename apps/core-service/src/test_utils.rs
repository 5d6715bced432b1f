//! # テストユーティリティ
//!
//! インメモリリポジトリで組み立てたルーターと、リクエスト送信のヘルパー。
//! ハンドラの単体テストと `tests/` の API テストで共有する。
//!
//! ```ignore
//! let app = TestApp::new();
//! app.departments.add(department);
//! let (status, body) = send(app.router(), get("/api/v1/departments?limit=2")).await;
//! ```

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use chrono::{DateTime, Duration, Utc};
use gakuen_domain::clock::{Clock, SteppingClock};
use gakuen_infra::mock::{
    MockAssignmentRepository,
    MockAttendanceRepository,
    MockClassRepository,
    MockCourseRepository,
    MockDepartmentRepository,
    MockNotificationRepository,
    MockStudentRepository,
};
use tower::ServiceExt;

use crate::app_builder::{Repositories, build_app};

/// テスト用時刻の起点（2023-11-14T22:13:20Z）
pub fn base_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

/// インメモリリポジトリで構成したアプリケーション
///
/// 各リポジトリはクローンしても同じデータを共有するため、ルーター構築後も
/// フィールド経由でデータの投入・確認ができる。
/// Clock は [`base_time`] から 1 秒ずつ進む。
pub struct TestApp {
    pub departments:   MockDepartmentRepository,
    pub courses:       MockCourseRepository,
    pub classes:       MockClassRepository,
    pub students:      MockStudentRepository,
    pub assignments:   MockAssignmentRepository,
    pub attendance:    MockAttendanceRepository,
    pub notifications: MockNotificationRepository,
    clock:             Arc<dyn Clock>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SteppingClock::new(base_time(), Duration::seconds(1))))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            departments: MockDepartmentRepository::new(),
            courses: MockCourseRepository::new(),
            classes: MockClassRepository::new(),
            students: MockStudentRepository::new(),
            assignments: MockAssignmentRepository::new(),
            attendance: MockAttendanceRepository::new(),
            notifications: MockNotificationRepository::new(),
            clock,
        }
    }

    pub fn repositories(&self) -> Repositories {
        Repositories {
            department:   Arc::new(self.departments.clone()),
            course:       Arc::new(self.courses.clone()),
            class:        Arc::new(self.classes.clone()),
            student:      Arc::new(self.students.clone()),
            assignment:   Arc::new(self.assignments.clone()),
            attendance:   Arc::new(self.attendance.clone()),
            notification: Arc::new(self.notifications.clone()),
        }
    }

    pub fn router(&self) -> Router {
        build_app(self.repositories(), self.clock.clone())
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// リクエストを送信し、ステータスと JSON ボディを返す
///
/// ボディが空または JSON でない場合は `Value::Null`。
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or_default();
    (status, body)
}
