//! 課題ユースケース

use std::sync::Arc;

use chrono::{DateTime, Utc};
use gakuen_domain::{
    DomainError,
    assignment::{Assignment, AssignmentId, AssignmentTitle},
    class::ClassId,
    clock::Clock,
    pagination::{Page, PageLimit, paginate},
};
use gakuen_infra::repository::{AssignmentRepository, ClassRepository};
use gakuen_shared::{event_log::event, log_business_event};

use crate::error::CoreError;

/// 課題作成の入力
pub struct CreateAssignmentInput {
    pub class_id: ClassId,
    pub title:    String,
    pub due_at:   Option<DateTime<Utc>>,
}

/// 課題ユースケース
pub struct AssignmentUseCaseImpl {
    assignment_repository: Arc<dyn AssignmentRepository>,
    class_repository:      Arc<dyn ClassRepository>,
    clock:                 Arc<dyn Clock>,
}

impl AssignmentUseCaseImpl {
    pub fn new(
        assignment_repository: Arc<dyn AssignmentRepository>,
        class_repository: Arc<dyn ClassRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            assignment_repository,
            class_repository,
            clock,
        }
    }

    /// クラスの課題一覧（出題の新しい順）
    pub async fn list_assignments(
        &self,
        class_id: &ClassId,
        cursor: Option<&str>,
        limit: PageLimit,
    ) -> Result<Page<Assignment>, CoreError> {
        let page = paginate(cursor, limit, |query| async move {
            self.ensure_class_exists(class_id).await?;
            let assignments = self
                .assignment_repository
                .find_page_by_class(class_id, &query)
                .await?;
            Ok::<_, CoreError>(assignments)
        })
        .await?;
        Ok(page)
    }

    /// 課題を作成する
    ///
    /// 締切は作成時刻より後でなければならない。
    pub async fn create_assignment(
        &self,
        input: CreateAssignmentInput,
    ) -> Result<Assignment, CoreError> {
        let title = AssignmentTitle::new(input.title)?;
        self.ensure_class_exists(&input.class_id).await?;

        let assignment = Assignment::new(
            AssignmentId::new(),
            input.class_id,
            title,
            input.due_at,
            self.clock.now(),
        )?;
        self.assignment_repository.insert(&assignment).await?;

        log_business_event!(
            event.category = event::category::CLASSROOM,
            event.action = event::action::ASSIGNMENT_CREATED,
            event.entity_type = event::entity_type::ASSIGNMENT,
            event.entity_id = %assignment.id(),
            class_id = %assignment.class_id(),
            event.result = event::result::SUCCESS,
            "課題を作成"
        );

        Ok(assignment)
    }

    async fn ensure_class_exists(&self, id: &ClassId) -> Result<(), CoreError> {
        if self.class_repository.exists(id).await? {
            return Ok(());
        }
        Err(DomainError::NotFound {
            entity_type: "Class",
            id:          id.to_string(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use gakuen_domain::{
        class::{ClassName, SchoolClass, TeacherId},
        clock::FixedClock,
        course::CourseId,
    };
    use gakuen_infra::mock::{MockAssignmentRepository, MockClassRepository};
    use pretty_assertions::assert_eq;

    use super::*;

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn setup() -> (MockAssignmentRepository, ClassId, AssignmentUseCaseImpl) {
        let assignments = MockAssignmentRepository::new();
        let classes = MockClassRepository::new();
        let class = SchoolClass::new(
            ClassId::new(),
            CourseId::new(),
            TeacherId::new(),
            ClassName::new("月1").unwrap(),
            t0(),
        );
        let class_id = *class.id();
        classes.add(class);
        let sut = AssignmentUseCaseImpl::new(
            Arc::new(assignments.clone()),
            Arc::new(classes),
            Arc::new(FixedClock::new(t0())),
        );
        (assignments, class_id, sut)
    }

    #[tokio::test]
    async fn test_課題を作成すると一覧に現れる() {
        let (assignments, class_id, sut) = setup();

        let created = sut
            .create_assignment(CreateAssignmentInput {
                class_id,
                title: "レポート 1".to_string(),
                due_at: Some(t0() + Duration::days(7)),
            })
            .await
            .unwrap();
        let page = sut
            .list_assignments(&class_id, None, PageLimit::default())
            .await
            .unwrap();

        assert_eq!(page.items(), &[created.clone()]);
        assert_eq!(assignments.all(), vec![created]);
    }

    #[tokio::test]
    async fn test_締切が過去の課題は作成できない() {
        let (assignments, class_id, sut) = setup();

        let result = sut
            .create_assignment(CreateAssignmentInput {
                class_id,
                title: "レポート 1".to_string(),
                due_at: Some(t0() - Duration::hours(1)),
            })
            .await;

        assert!(matches!(result, Err(CoreError::Validation(_))));
        assert!(assignments.all().is_empty());
    }

    #[tokio::test]
    async fn test_存在しないクラスの課題一覧はnot_found() {
        let (_, _, sut) = setup();

        let result = sut
            .list_assignments(&ClassId::new(), None, PageLimit::default())
            .await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_存在しないクラスには課題を作成できない() {
        let (_, _, sut) = setup();

        let result = sut
            .create_assignment(CreateAssignmentInput {
                class_id: ClassId::new(),
                title:    "レポート 1".to_string(),
                due_at:   None,
            })
            .await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }
}
