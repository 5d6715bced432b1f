//! # アプリケーション構築
//!
//! リポジトリと Clock を受け取り、ユースケース → State → Router の順に組み立てる。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。
//!
//! テストでは同じ関数にインメモリリポジトリを渡す（`test_utils::TestApp`）。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use gakuen_domain::clock::Clock;
use gakuen_infra::repository::{
    AssignmentRepository,
    AttendanceRepository,
    ClassRepository,
    CourseRepository,
    DepartmentRepository,
    NotificationRepository,
    PostgresAssignmentRepository,
    PostgresAttendanceRepository,
    PostgresClassRepository,
    PostgresCourseRepository,
    PostgresDepartmentRepository,
    PostgresNotificationRepository,
    PostgresStudentRepository,
    StudentRepository,
};
use sqlx::PgPool;

use crate::{
    handler::{
        AssignmentState,
        AttendanceState,
        ClassState,
        CourseState,
        DepartmentState,
        NotificationState,
        StudentState,
        create_assignment,
        create_course,
        create_department,
        health_check,
        list_class_assignments,
        list_class_attendance,
        list_courses,
        list_department_courses,
        list_departments,
        list_recipient_notifications,
        list_student_attendance,
        list_student_classes,
        list_students,
        list_teacher_classes,
    },
    usecase::{
        AssignmentUseCaseImpl,
        AttendanceUseCaseImpl,
        ClassUseCaseImpl,
        CourseUseCaseImpl,
        DepartmentUseCaseImpl,
        NotificationUseCaseImpl,
        StudentUseCaseImpl,
    },
};

/// ユースケースに注入するリポジトリ一式
#[derive(Clone)]
pub struct Repositories {
    pub department:   Arc<dyn DepartmentRepository>,
    pub course:       Arc<dyn CourseRepository>,
    pub class:        Arc<dyn ClassRepository>,
    pub student:      Arc<dyn StudentRepository>,
    pub assignment:   Arc<dyn AssignmentRepository>,
    pub attendance:   Arc<dyn AttendanceRepository>,
    pub notification: Arc<dyn NotificationRepository>,
}

impl Repositories {
    /// PostgreSQL 実装で組み立てる
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            department:   Arc::new(PostgresDepartmentRepository::new(pool.clone())),
            course:       Arc::new(PostgresCourseRepository::new(pool.clone())),
            class:        Arc::new(PostgresClassRepository::new(pool.clone())),
            student:      Arc::new(PostgresStudentRepository::new(pool.clone())),
            assignment:   Arc::new(PostgresAssignmentRepository::new(pool.clone())),
            attendance:   Arc::new(PostgresAttendanceRepository::new(pool.clone())),
            notification: Arc::new(PostgresNotificationRepository::new(pool)),
        }
    }
}

/// API ルーターを構築する
///
/// `/health/ready` は DB プールに依存するため含めない（`main.rs` で merge する）。
pub fn build_app(repositories: Repositories, clock: Arc<dyn Clock>) -> Router {
    let Repositories {
        department,
        course,
        class,
        student,
        assignment,
        attendance,
        notification,
    } = repositories;

    let department_state = Arc::new(DepartmentState {
        usecase: DepartmentUseCaseImpl::new(department.clone(), clock.clone()),
    });
    let course_state = Arc::new(CourseState {
        usecase: CourseUseCaseImpl::new(course, department, clock.clone()),
    });
    let class_state = Arc::new(ClassState {
        usecase: ClassUseCaseImpl::new(class.clone(), student.clone()),
    });
    let student_state = Arc::new(StudentState {
        usecase: StudentUseCaseImpl::new(student.clone()),
    });
    let assignment_state = Arc::new(AssignmentState {
        usecase: AssignmentUseCaseImpl::new(assignment, class.clone(), clock),
    });
    let attendance_state = Arc::new(AttendanceState {
        usecase: AttendanceUseCaseImpl::new(attendance, class, student),
    });
    let notification_state = Arc::new(NotificationState {
        usecase: NotificationUseCaseImpl::new(notification),
    });

    Router::new()
        .route("/health", get(health_check))
        // 学科
        .route(
            "/api/v1/departments",
            get(list_departments).post(create_department),
        )
        .with_state(department_state)
        // 科目
        .route("/api/v1/courses", get(list_courses).post(create_course))
        .route(
            "/api/v1/departments/{department_id}/courses",
            get(list_department_courses),
        )
        .with_state(course_state)
        // クラス
        .route(
            "/api/v1/teachers/{teacher_id}/classes",
            get(list_teacher_classes),
        )
        .route(
            "/api/v1/students/{student_id}/classes",
            get(list_student_classes),
        )
        .with_state(class_state)
        // 学生
        .route("/api/v1/students", get(list_students))
        .with_state(student_state)
        // 課題
        .route(
            "/api/v1/classes/{class_id}/assignments",
            get(list_class_assignments).post(create_assignment),
        )
        .with_state(assignment_state)
        // 出欠
        .route(
            "/api/v1/students/{student_id}/attendance",
            get(list_student_attendance),
        )
        .route(
            "/api/v1/classes/{class_id}/attendance",
            get(list_class_attendance),
        )
        .with_state(attendance_state)
        // 通知
        .route(
            "/api/v1/recipients/{recipient_id}/notifications",
            get(list_recipient_notifications),
        )
        .with_state(notification_state)
}
