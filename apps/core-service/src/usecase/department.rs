//! 学科ユースケース

use std::sync::Arc;

use gakuen_domain::{
    clock::Clock,
    department::{Department, DepartmentDescription, DepartmentId, DepartmentName},
    pagination::{Page, PageLimit, paginate},
};
use gakuen_infra::repository::DepartmentRepository;
use gakuen_shared::{event_log::event, log_business_event};

use crate::error::CoreError;

/// 学科作成の入力
pub struct CreateDepartmentInput {
    pub name:        String,
    pub description: Option<String>,
}

/// 学科ユースケース
pub struct DepartmentUseCaseImpl {
    department_repository: Arc<dyn DepartmentRepository>,
    clock: Arc<dyn Clock>,
}

impl DepartmentUseCaseImpl {
    pub fn new(department_repository: Arc<dyn DepartmentRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            department_repository,
            clock,
        }
    }

    /// 学科一覧を新しい順に 1 ページ取得する
    pub async fn list_departments(
        &self,
        cursor: Option<&str>,
        limit: PageLimit,
    ) -> Result<Page<Department>, CoreError> {
        let page = paginate(cursor, limit, |query| async move {
            self.department_repository.find_page(&query).await
        })
        .await?;
        Ok(page)
    }

    /// 学科を作成する
    ///
    /// 説明が空白のみの場合は「説明なし」として扱う。
    pub async fn create_department(
        &self,
        input: CreateDepartmentInput,
    ) -> Result<Department, CoreError> {
        let name = DepartmentName::new(input.name)?;
        let description = input
            .description
            .filter(|d| !d.trim().is_empty())
            .map(DepartmentDescription::new)
            .transpose()?;

        let department = Department::new(DepartmentId::new(), name, description, self.clock.now());
        self.department_repository.insert(&department).await?;

        log_business_event!(
            event.category = event::category::ORGANIZATION,
            event.action = event::action::DEPARTMENT_CREATED,
            event.entity_type = event::entity_type::DEPARTMENT,
            event.entity_id = %department.id(),
            event.result = event::result::SUCCESS,
            "学科を作成"
        );

        Ok(department)
    }
}
