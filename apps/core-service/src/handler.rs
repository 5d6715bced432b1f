//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ビジネスロジックはユースケース層に委譲
//! - 一覧系は共通の [`ListQuery`] を受け取り、[`PaginatedResponse`](gakuen_shared::PaginatedResponse) を返す

pub mod assignment;
pub mod attendance;
pub mod class;
pub mod course;
pub mod department;
pub mod health;
pub mod notification;
pub mod student;

pub use assignment::{AssignmentState, create_assignment, list_class_assignments};
pub use attendance::{AttendanceState, list_class_attendance, list_student_attendance};
pub use class::{ClassState, list_student_classes, list_teacher_classes};
pub use course::{CourseState, create_course, list_courses, list_department_courses};
pub use department::{DepartmentState, create_department, list_departments};
use gakuen_domain::pagination::PageLimit;
pub use health::{ReadinessState, health_check, readiness_check};
pub use notification::{NotificationState, list_recipient_notifications};
use serde::Deserialize;
pub use student::{StudentState, list_students};

use crate::error::CoreError;

/// 一覧 API 共通のクエリパラメータ
///
/// `?cursor=<token>&limit=<1..=100>`。どちらも省略可能で、省略時は先頭ページを 20 件取得する。
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub cursor: Option<String>,
    pub limit:  Option<i64>,
}

impl ListQuery {
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// 範囲外の limit は 400（validation-error）
    pub fn page_limit(&self) -> Result<PageLimit, CoreError> {
        Ok(PageLimit::from_query(self.limit)?)
    }
}
