//! # AssignmentRepository
//!
//! 課題の永続化を担当するリポジトリ。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gakuen_domain::{
    assignment::{Assignment, AssignmentId, AssignmentTitle},
    class::ClassId,
    pagination::KeysetQuery,
};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{error::InfraError, keyset::push_page_clause};

#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// クラスの課題の 1 ページ分を取得する
    async fn find_page_by_class(
        &self,
        class_id: &ClassId,
        query: &KeysetQuery,
    ) -> Result<Vec<Assignment>, InfraError>;

    async fn insert(&self, assignment: &Assignment) -> Result<(), InfraError>;
}

#[derive(Debug, sqlx::FromRow)]
struct AssignmentRow {
    id:         Uuid,
    class_id:   Uuid,
    title:      String,
    due_at:     Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<AssignmentRow> for Assignment {
    type Error = InfraError;

    fn try_from(row: AssignmentRow) -> Result<Self, Self::Error> {
        Ok(Assignment::from_db(
            AssignmentId::from_uuid(row.id),
            ClassId::from_uuid(row.class_id),
            AssignmentTitle::new(row.title)
                .map_err(|e| InfraError::corrupt_row("assignments", e))?,
            row.due_at,
            row.created_at,
        ))
    }
}

#[derive(Debug, Clone)]
pub struct PostgresAssignmentRepository {
    pool: PgPool,
}

impl PostgresAssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentRepository for PostgresAssignmentRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(%class_id))]
    async fn find_page_by_class(
        &self,
        class_id: &ClassId,
        query: &KeysetQuery,
    ) -> Result<Vec<Assignment>, InfraError> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT id, class_id, title, due_at, created_at FROM assignments WHERE class_id = ",
        );
        builder.push_bind(*class_id.as_uuid());
        push_page_clause(&mut builder, "", query);

        builder
            .build_query_as::<AssignmentRow>()
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Assignment::try_from)
            .collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %assignment.id()))]
    async fn insert(&self, assignment: &Assignment) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            INSERT INTO assignments (id, class_id, title, due_at, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(assignment.id().as_uuid())
        .bind(assignment.class_id().as_uuid())
        .bind(assignment.title().as_str())
        .bind(assignment.due_at())
        .bind(assignment.created_at())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
