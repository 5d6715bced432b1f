//! 出欠一覧ユースケース
//!
//! 学生の出欠履歴と、クラスの出欠記録を新しい順に返す。

use std::sync::Arc;

use gakuen_domain::{
    DomainError,
    attendance::AttendanceRecord,
    class::ClassId,
    pagination::{Page, PageLimit, paginate},
    student::StudentId,
};
use gakuen_infra::repository::{AttendanceRepository, ClassRepository, StudentRepository};

use crate::error::CoreError;

pub struct AttendanceUseCaseImpl {
    attendance_repository: Arc<dyn AttendanceRepository>,
    class_repository:      Arc<dyn ClassRepository>,
    student_repository:    Arc<dyn StudentRepository>,
}

impl AttendanceUseCaseImpl {
    pub fn new(
        attendance_repository: Arc<dyn AttendanceRepository>,
        class_repository: Arc<dyn ClassRepository>,
        student_repository: Arc<dyn StudentRepository>,
    ) -> Self {
        Self {
            attendance_repository,
            class_repository,
            student_repository,
        }
    }

    /// 学生の出欠履歴
    pub async fn list_by_student(
        &self,
        student_id: &StudentId,
        cursor: Option<&str>,
        limit: PageLimit,
    ) -> Result<Page<AttendanceRecord>, CoreError> {
        let page = paginate(cursor, limit, |query| async move {
            if !self.student_repository.exists(student_id).await? {
                return Err(not_found("Student", student_id));
            }
            let records = self
                .attendance_repository
                .find_page_by_student(student_id, &query)
                .await?;
            Ok::<_, CoreError>(records)
        })
        .await?;
        Ok(page)
    }

    /// クラスの出欠記録
    pub async fn list_by_class(
        &self,
        class_id: &ClassId,
        cursor: Option<&str>,
        limit: PageLimit,
    ) -> Result<Page<AttendanceRecord>, CoreError> {
        let page = paginate(cursor, limit, |query| async move {
            if !self.class_repository.exists(class_id).await? {
                return Err(not_found("Class", class_id));
            }
            let records = self
                .attendance_repository
                .find_page_by_class(class_id, &query)
                .await?;
            Ok::<_, CoreError>(records)
        })
        .await?;
        Ok(page)
    }
}

fn not_found(entity_type: &'static str, id: &impl ToString) -> CoreError {
    DomainError::NotFound {
        entity_type,
        id: id.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};
    use gakuen_domain::{
        attendance::{AttendanceRecordId, AttendanceStatus},
        class::{ClassName, SchoolClass, TeacherId},
        course::CourseId,
        student::{Student, StudentName, StudentNumber},
    };
    use gakuen_infra::mock::{
        MockAttendanceRepository,
        MockClassRepository,
        MockStudentRepository,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    struct Fixture {
        class_id:   ClassId,
        student_id: StudentId,
        sut:        AttendanceUseCaseImpl,
    }

    /// 1 クラス・1 学生に 3 回分の出欠（出席 → 遅刻 → 欠席）
    fn fixture() -> Fixture {
        let t0 = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        let class = SchoolClass::new(
            ClassId::new(),
            CourseId::new(),
            TeacherId::new(),
            ClassName::new("月1").unwrap(),
            t0,
        );
        let student = Student::new(
            StudentId::new(),
            StudentNumber::new("S2026001").unwrap(),
            StudentName::new("山田花子").unwrap(),
            t0,
        );
        let attendance = MockAttendanceRepository::new();
        let statuses = [
            AttendanceStatus::Present,
            AttendanceStatus::Late,
            AttendanceStatus::Absent,
        ];
        for (week, status) in (0_i64..).zip(statuses) {
            attendance.add(AttendanceRecord::new(
                AttendanceRecordId::new(),
                *class.id(),
                *student.id(),
                status,
                t0 + Duration::weeks(week),
            ));
        }
        let classes = MockClassRepository::new();
        let students = MockStudentRepository::new();
        let fixture = Fixture {
            class_id:   *class.id(),
            student_id: *student.id(),
            sut:        AttendanceUseCaseImpl::new(
                Arc::new(attendance),
                Arc::new(classes.clone()),
                Arc::new(students.clone()),
            ),
        };
        classes.add(class);
        students.add(student);
        fixture
    }

    fn statuses(page: &Page<AttendanceRecord>) -> Vec<AttendanceStatus> {
        page.items().iter().map(AttendanceRecord::status).collect()
    }

    #[tokio::test]
    async fn test_学生の出欠履歴は新しい順() {
        let f = fixture();

        let page = f
            .sut
            .list_by_student(&f.student_id, None, PageLimit::default())
            .await
            .unwrap();

        assert_eq!(
            statuses(&page),
            vec![
                AttendanceStatus::Absent,
                AttendanceStatus::Late,
                AttendanceStatus::Present
            ]
        );
    }

    #[tokio::test]
    async fn test_クラスの出欠記録をページ送りできる() {
        let f = fixture();

        let first = f
            .sut
            .list_by_class(&f.class_id, None, PageLimit::new(2).unwrap())
            .await
            .unwrap();
        let second = f
            .sut
            .list_by_class(&f.class_id, first.next_cursor(), PageLimit::new(2).unwrap())
            .await
            .unwrap();

        assert!(first.has_more());
        assert_eq!(statuses(&second), vec![AttendanceStatus::Present]);
        assert!(!second.has_more());
    }

    #[tokio::test]
    async fn test_存在しない学生やクラスはnot_found() {
        let f = fixture();

        let by_student = f
            .sut
            .list_by_student(&StudentId::new(), None, PageLimit::default())
            .await;
        let by_class = f
            .sut
            .list_by_class(&ClassId::new(), None, PageLimit::default())
            .await;

        assert!(matches!(by_student, Err(CoreError::NotFound(_))));
        assert!(matches!(by_class, Err(CoreError::NotFound(_))));
    }
}
