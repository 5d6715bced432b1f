//! # ユースケース層
//!
//! Core Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリと [`Clock`](gakuen_domain::clock::Clock) を `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、ロジックはユースケースに集約
//! - **一覧は共通の手順**: すべての一覧は [`paginate`](gakuen_domain::pagination::paginate) を通す。
//!   親リソースの存在確認も取得処理の中で行うため、カーソルが不正なら DB には問い合わせない

pub mod assignment;
pub mod attendance;
pub mod class;
pub mod course;
pub mod department;
pub mod notification;
pub mod student;

pub use assignment::{AssignmentUseCaseImpl, CreateAssignmentInput};
pub use attendance::AttendanceUseCaseImpl;
pub use class::ClassUseCaseImpl;
pub use course::{CourseUseCaseImpl, CreateCourseInput};
pub use department::{CreateDepartmentInput, DepartmentUseCaseImpl};
pub use notification::NotificationUseCaseImpl;
pub use student::StudentUseCaseImpl;
