//! # リポジトリ実装
//!
//! 一覧系メソッドはすべて [`KeysetQuery`](gakuen_domain::pagination::KeysetQuery)
//! を受け取り、境界条件・`created_at DESC, id DESC`・`limit + 1` 件の取得を
//! SQL に押し下げる（[`crate::keyset`]）。ページの組み立てはユースケース側の
//! [`paginate`](gakuen_domain::pagination::paginate) が行う。

pub mod assignment_repository;
pub mod attendance_repository;
pub mod class_repository;
pub mod course_repository;
pub mod department_repository;
pub mod notification_repository;
pub mod student_repository;

pub use assignment_repository::{AssignmentRepository, PostgresAssignmentRepository};
pub use attendance_repository::{AttendanceRepository, PostgresAttendanceRepository};
pub use class_repository::{ClassRepository, PostgresClassRepository};
pub use course_repository::{CourseRepository, PostgresCourseRepository};
pub use department_repository::{DepartmentRepository, PostgresDepartmentRepository};
pub use notification_repository::{NotificationRepository, PostgresNotificationRepository};
pub use student_repository::{PostgresStudentRepository, StudentRepository};
