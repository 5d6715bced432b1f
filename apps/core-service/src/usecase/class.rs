//! クラス一覧ユースケース
//!
//! 教員から見た担当クラスと、学生から見た履修クラスの 2 通りの一覧を提供する。
//! どちらもクラス自身の `(created_at, id)` で並べる。

use std::sync::Arc;

use gakuen_domain::{
    DomainError,
    class::{SchoolClass, TeacherId},
    pagination::{Page, PageLimit, paginate},
    student::StudentId,
};
use gakuen_infra::repository::{ClassRepository, StudentRepository};

use crate::error::CoreError;

pub struct ClassUseCaseImpl {
    class_repository:   Arc<dyn ClassRepository>,
    student_repository: Arc<dyn StudentRepository>,
}

impl ClassUseCaseImpl {
    pub fn new(
        class_repository: Arc<dyn ClassRepository>,
        student_repository: Arc<dyn StudentRepository>,
    ) -> Self {
        Self {
            class_repository,
            student_repository,
        }
    }

    /// 教員の担当クラス一覧
    ///
    /// 教員は別システムで管理されるため存在確認は行わない。未知の教員は空の一覧になる。
    pub async fn list_classes_by_teacher(
        &self,
        teacher_id: &TeacherId,
        cursor: Option<&str>,
        limit: PageLimit,
    ) -> Result<Page<SchoolClass>, CoreError> {
        let page = paginate(cursor, limit, |query| async move {
            self.class_repository
                .find_page_by_teacher(teacher_id, &query)
                .await
        })
        .await?;
        Ok(page)
    }

    /// 学生の履修クラス一覧
    ///
    /// 学生が存在しない場合は `NotFound`。
    pub async fn list_classes_by_student(
        &self,
        student_id: &StudentId,
        cursor: Option<&str>,
        limit: PageLimit,
    ) -> Result<Page<SchoolClass>, CoreError> {
        let page = paginate(cursor, limit, |query| async move {
            if !self.student_repository.exists(student_id).await? {
                return Err(CoreError::from(DomainError::NotFound {
                    entity_type: "Student",
                    id:          student_id.to_string(),
                }));
            }
            let classes = self
                .class_repository
                .find_page_by_student(student_id, &query)
                .await?;
            Ok::<_, CoreError>(classes)
        })
        .await?;
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};
    use gakuen_domain::{
        class::{ClassId, ClassName, Enrollment},
        course::CourseId,
        student::{Student, StudentName, StudentNumber},
    };
    use gakuen_infra::mock::{MockClassRepository, MockStudentRepository};
    use pretty_assertions::assert_eq;

    use super::*;

    fn t(i: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap() + Duration::seconds(i)
    }

    fn class(teacher_id: TeacherId, name: &str, i: i64) -> SchoolClass {
        SchoolClass::new(
            ClassId::new(),
            CourseId::new(),
            teacher_id,
            ClassName::new(name).unwrap(),
            t(i),
        )
    }

    fn student() -> Student {
        Student::new(
            StudentId::new(),
            StudentNumber::new("S2026001").unwrap(),
            StudentName::new("山田花子").unwrap(),
            t(0),
        )
    }

    fn names(page: &Page<SchoolClass>) -> Vec<&str> {
        page.items().iter().map(|c| c.name().as_str()).collect()
    }

    #[tokio::test]
    async fn test_担当クラスは担当教員のものだけ新しい順() {
        let classes = MockClassRepository::new();
        let teacher = TeacherId::new();
        classes.add(class(teacher, "月1", 1));
        classes.add(class(TeacherId::new(), "月2", 2));
        classes.add(class(teacher, "火1", 3));
        let sut = ClassUseCaseImpl::new(Arc::new(classes), Arc::new(MockStudentRepository::new()));

        let page = sut
            .list_classes_by_teacher(&teacher, None, PageLimit::default())
            .await
            .unwrap();

        assert_eq!(names(&page), vec!["火1", "月1"]);
    }

    #[tokio::test]
    async fn test_履修クラスは履修登録の時刻ではなくクラスの並び順キーで並ぶ() {
        // Given: 古いクラスほど後から履修登録した
        let classes = MockClassRepository::new();
        let students = MockStudentRepository::new();
        let s = student();
        students.add(s.clone());
        let teacher = TeacherId::new();
        let older = class(teacher, "月1", 1);
        let newer = class(teacher, "火1", 2);
        classes.add(older.clone());
        classes.add(newer.clone());
        classes.enroll(Enrollment::new(*newer.id(), *s.id(), t(10)));
        classes.enroll(Enrollment::new(*older.id(), *s.id(), t(20)));
        let sut = ClassUseCaseImpl::new(Arc::new(classes), Arc::new(students));

        // When
        let first = sut
            .list_classes_by_student(s.id(), None, PageLimit::new(1).unwrap())
            .await
            .unwrap();
        let second = sut
            .list_classes_by_student(s.id(), first.next_cursor(), PageLimit::new(1).unwrap())
            .await
            .unwrap();

        // Then
        assert_eq!(names(&first), vec!["火1"]);
        assert_eq!(names(&second), vec!["月1"]);
        assert!(!second.has_more());
    }

    #[tokio::test]
    async fn test_存在しない学生の履修クラスはnot_found() {
        let sut = ClassUseCaseImpl::new(
            Arc::new(MockClassRepository::new()),
            Arc::new(MockStudentRepository::new()),
        );

        let result = sut
            .list_classes_by_student(&StudentId::new(), None, PageLimit::default())
            .await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }
}
