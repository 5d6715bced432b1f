//! 科目ユースケース

use std::sync::Arc;

use gakuen_domain::{
    DomainError,
    clock::Clock,
    course::{Course, CourseCode, CourseId, CourseTitle, Credits},
    department::DepartmentId,
    pagination::{Page, PageLimit, paginate},
};
use gakuen_infra::repository::{CourseRepository, DepartmentRepository};
use gakuen_shared::{event_log::event, log_business_event};

use crate::error::CoreError;

/// 科目作成の入力
pub struct CreateCourseInput {
    pub department_id: DepartmentId,
    pub code:          String,
    pub title:         String,
    pub credits:       i16,
}

/// 科目ユースケース
pub struct CourseUseCaseImpl {
    course_repository:     Arc<dyn CourseRepository>,
    department_repository: Arc<dyn DepartmentRepository>,
    clock:                 Arc<dyn Clock>,
}

impl CourseUseCaseImpl {
    pub fn new(
        course_repository: Arc<dyn CourseRepository>,
        department_repository: Arc<dyn DepartmentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            course_repository,
            department_repository,
            clock,
        }
    }

    /// 全学科の科目一覧
    pub async fn list_courses(
        &self,
        cursor: Option<&str>,
        limit: PageLimit,
    ) -> Result<Page<Course>, CoreError> {
        let page = paginate(cursor, limit, |query| async move {
            self.course_repository.find_page(None, &query).await
        })
        .await?;
        Ok(page)
    }

    /// 学科に属する科目一覧
    ///
    /// 学科が存在しない場合は `NotFound`。
    pub async fn list_courses_by_department(
        &self,
        department_id: &DepartmentId,
        cursor: Option<&str>,
        limit: PageLimit,
    ) -> Result<Page<Course>, CoreError> {
        let page = paginate(cursor, limit, |query| async move {
            self.ensure_department_exists(department_id).await?;
            let courses = self
                .course_repository
                .find_page(Some(department_id), &query)
                .await?;
            Ok::<_, CoreError>(courses)
        })
        .await?;
        Ok(page)
    }

    /// 科目を作成する
    ///
    /// 1. 値オブジェクトのバリデーション
    /// 2. 所属学科の存在確認
    /// 3. Course エンティティ生成・挿入
    pub async fn create_course(&self, input: CreateCourseInput) -> Result<Course, CoreError> {
        let code = CourseCode::new(input.code)?;
        let title = CourseTitle::new(input.title)?;
        let credits = Credits::new(input.credits)?;

        self.ensure_department_exists(&input.department_id).await?;

        let course = Course::new(
            CourseId::new(),
            input.department_id,
            code,
            title,
            credits,
            self.clock.now(),
        );
        self.course_repository.insert(&course).await?;

        log_business_event!(
            event.category = event::category::ORGANIZATION,
            event.action = event::action::COURSE_CREATED,
            event.entity_type = event::entity_type::COURSE,
            event.entity_id = %course.id(),
            department_id = %course.department_id(),
            event.result = event::result::SUCCESS,
            "科目を作成"
        );

        Ok(course)
    }

    async fn ensure_department_exists(&self, id: &DepartmentId) -> Result<(), CoreError> {
        if self.department_repository.exists(id).await? {
            Ok(())
        } else {
            Err(DomainError::NotFound {
                entity_type: "Department",
                id:          id.to_string(),
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};
    use gakuen_domain::{
        clock::{FixedClock, SteppingClock},
        department::{Department, DepartmentName},
    };
    use gakuen_infra::mock::{MockCourseRepository, MockDepartmentRepository};
    use pretty_assertions::assert_eq;

    use super::*;

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    struct Fixture {
        courses:     MockCourseRepository,
        departments: MockDepartmentRepository,
        sut:         CourseUseCaseImpl,
    }

    fn fixture() -> Fixture {
        let courses = MockCourseRepository::new();
        let departments = MockDepartmentRepository::new();
        let sut = CourseUseCaseImpl::new(
            Arc::new(courses.clone()),
            Arc::new(departments.clone()),
            Arc::new(SteppingClock::new(t0(), Duration::seconds(1))),
        );
        Fixture {
            courses,
            departments,
            sut,
        }
    }

    fn department(name: &str) -> Department {
        Department::new(
            DepartmentId::new(),
            DepartmentName::new(name).unwrap(),
            None,
            t0(),
        )
    }

    fn input(department_id: DepartmentId, code: &str) -> CreateCourseInput {
        CreateCourseInput {
            department_id,
            code: code.to_string(),
            title: format!("{code} の講義"),
            credits: 2,
        }
    }

    #[tokio::test]
    async fn test_学科ごとの科目一覧は他学科の科目を含まない() {
        // Given
        let f = fixture();
        let science = department("理学部");
        let letters = department("文学部");
        f.departments.add(science.clone());
        f.departments.add(letters.clone());
        for code in ["MATH101", "PHYS101", "CHEM101"] {
            f.sut.create_course(input(*science.id(), code)).await.unwrap();
        }
        f.sut.create_course(input(*letters.id(), "LIT101")).await.unwrap();

        // When
        let page = f
            .sut
            .list_courses_by_department(science.id(), None, PageLimit::new(2).unwrap())
            .await
            .unwrap();
        let rest = f
            .sut
            .list_courses_by_department(science.id(), page.next_cursor(), PageLimit::new(2).unwrap())
            .await
            .unwrap();

        // Then
        let codes: Vec<&str> = page
            .items()
            .iter()
            .chain(rest.items())
            .map(|c| c.code().as_str())
            .collect();
        assert_eq!(codes, vec!["CHEM101", "PHYS101", "MATH101"]);
        assert!(!rest.has_more());
    }

    #[tokio::test]
    async fn test_全科目一覧は学科をまたいで新しい順() {
        let f = fixture();
        let science = department("理学部");
        f.departments.add(science.clone());
        f.sut.create_course(input(*science.id(), "MATH101")).await.unwrap();
        f.sut.create_course(input(*science.id(), "MATH102")).await.unwrap();

        let page = f
            .sut
            .list_courses(None, PageLimit::default())
            .await
            .unwrap();

        let codes: Vec<&str> = page.items().iter().map(|c| c.code().as_str()).collect();
        assert_eq!(codes, vec!["MATH102", "MATH101"]);
    }

    #[tokio::test]
    async fn test_存在しない学科の科目一覧はnot_found() {
        let f = fixture();

        let result = f
            .sut
            .list_courses_by_department(&DepartmentId::new(), None, PageLimit::default())
            .await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_存在しない学科には科目を作成できない() {
        let f = fixture();

        let result = f.sut.create_course(input(DepartmentId::new(), "MATH101")).await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
        assert!(f.courses.all().is_empty());
    }

    #[tokio::test]
    async fn test_単位数が範囲外ならバリデーションエラー() {
        let f = fixture();
        let science = department("理学部");
        f.departments.add(science.clone());

        let result = f
            .sut
            .create_course(CreateCourseInput {
                credits: 21,
                ..input(*science.id(), "MATH101")
            })
            .await;

        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_作成時刻はclockから取る() {
        let courses = MockCourseRepository::new();
        let departments = MockDepartmentRepository::new();
        let science = department("理学部");
        departments.add(science.clone());
        let sut = CourseUseCaseImpl::new(
            Arc::new(courses.clone()),
            Arc::new(departments),
            Arc::new(FixedClock::new(t0())),
        );

        let course = sut.create_course(input(*science.id(), "MATH101")).await.unwrap();

        assert_eq!(course.created_at(), t0());
        assert_eq!(courses.all(), vec![course]);
    }
}
