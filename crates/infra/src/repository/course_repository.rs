//! # CourseRepository
//!
//! 科目の永続化を担当するリポジトリ。学科で絞り込んだ一覧と全件一覧の
//! 両方を同じ並び順で返す。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gakuen_domain::{
    course::{Course, CourseCode, CourseId, CourseTitle, Credits},
    department::DepartmentId,
    pagination::KeysetQuery,
};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{error::InfraError, keyset::push_page_clause};

#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// 科目一覧の 1 ページ分を取得する
    ///
    /// `department_id` を指定するとその学科の科目だけに絞り込む。
    async fn find_page(
        &self,
        department_id: Option<&DepartmentId>,
        query: &KeysetQuery,
    ) -> Result<Vec<Course>, InfraError>;

    async fn insert(&self, course: &Course) -> Result<(), InfraError>;
}

#[derive(Debug, sqlx::FromRow)]
struct CourseRow {
    id:            Uuid,
    department_id: Uuid,
    code:          String,
    title:         String,
    credits:       i16,
    created_at:    DateTime<Utc>,
}

impl TryFrom<CourseRow> for Course {
    type Error = InfraError;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        let corrupt = |e| InfraError::corrupt_row("courses", e);
        Ok(Course::from_db(
            CourseId::from_uuid(row.id),
            DepartmentId::from_uuid(row.department_id),
            CourseCode::new(row.code).map_err(corrupt)?,
            CourseTitle::new(row.title).map_err(corrupt)?,
            Credits::new(row.credits).map_err(corrupt)?,
            row.created_at,
        ))
    }
}

#[derive(Debug, Clone)]
pub struct PostgresCourseRepository {
    pool: PgPool,
}

impl PostgresCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PostgresCourseRepository {
    #[tracing::instrument(
        skip_all,
        level = "debug",
        fields(department_id = ?department_id.map(|id| id.to_string()), limit = query.limit().get())
    )]
    async fn find_page(
        &self,
        department_id: Option<&DepartmentId>,
        query: &KeysetQuery,
    ) -> Result<Vec<Course>, InfraError> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT id, department_id, code, title, credits, created_at FROM courses WHERE TRUE",
        );
        if let Some(department_id) = department_id {
            builder
                .push(" AND department_id = ")
                .push_bind(*department_id.as_uuid());
        }
        push_page_clause(&mut builder, "", query);

        builder
            .build_query_as::<CourseRow>()
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Course::try_from)
            .collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %course.id()))]
    async fn insert(&self, course: &Course) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            INSERT INTO courses (id, department_id, code, title, credits, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(course.id().as_uuid())
        .bind(course.department_id().as_uuid())
        .bind(course.code().as_str())
        .bind(course.title().as_str())
        .bind(course.credits().get())
        .bind(course.created_at())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
