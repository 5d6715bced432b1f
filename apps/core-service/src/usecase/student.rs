//! 学生一覧ユースケース

use std::sync::Arc;

use gakuen_domain::{
    pagination::{Page, PageLimit, paginate},
    student::Student,
};
use gakuen_infra::repository::StudentRepository;

use crate::error::CoreError;

pub struct StudentUseCaseImpl {
    student_repository: Arc<dyn StudentRepository>,
}

impl StudentUseCaseImpl {
    pub fn new(student_repository: Arc<dyn StudentRepository>) -> Self {
        Self { student_repository }
    }

    pub async fn list_students(
        &self,
        cursor: Option<&str>,
        limit: PageLimit,
    ) -> Result<Page<Student>, CoreError> {
        let page = paginate(cursor, limit, |query| async move {
            self.student_repository.find_page(&query).await
        })
        .await?;
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use gakuen_domain::student::{StudentId, StudentName, StudentNumber};
    use gakuen_infra::mock::MockStudentRepository;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_同時刻に登録された学生はidの降順で並ぶ() {
        // 一括登録で created_at が揃うケース
        let now = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        let students = MockStudentRepository::new();
        let ids: Vec<StudentId> = (1..=3)
            .map(|i| StudentId::from_uuid(uuid::Uuid::from_u128(i)))
            .collect();
        for (i, id) in ids.iter().enumerate() {
            students.add(Student::new(
                *id,
                StudentNumber::new(format!("S{i:04}")).unwrap(),
                StudentName::new("学生").unwrap(),
                now,
            ));
        }
        let sut = StudentUseCaseImpl::new(Arc::new(students));

        let first = sut
            .list_students(None, PageLimit::new(2).unwrap())
            .await
            .unwrap();
        let second = sut
            .list_students(first.next_cursor(), PageLimit::new(2).unwrap())
            .await
            .unwrap();

        let listed: Vec<StudentId> = first
            .items()
            .iter()
            .chain(second.items())
            .map(|s| *s.id())
            .collect();
        assert_eq!(listed, vec![ids[2], ids[1], ids[0]]);
    }
}
