//! # DepartmentRepository
//!
//! 学科の永続化を担当するリポジトリ。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gakuen_domain::{
    department::{Department, DepartmentDescription, DepartmentId, DepartmentName},
    pagination::KeysetQuery,
};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{error::InfraError, keyset::push_page_clause};

/// 学科リポジトリトレイト
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// 学科一覧の 1 ページ分（最大 `limit + 1` 件）を並び順で取得する
    async fn find_page(&self, query: &KeysetQuery) -> Result<Vec<Department>, InfraError>;

    async fn exists(&self, id: &DepartmentId) -> Result<bool, InfraError>;

    async fn insert(&self, department: &Department) -> Result<(), InfraError>;
}

/// `departments` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct DepartmentRow {
    id:          Uuid,
    name:        String,
    description: Option<String>,
    created_at:  DateTime<Utc>,
}

impl TryFrom<DepartmentRow> for Department {
    type Error = InfraError;

    fn try_from(row: DepartmentRow) -> Result<Self, Self::Error> {
        let corrupt = |e| InfraError::corrupt_row("departments", e);
        Ok(Department::from_db(
            DepartmentId::from_uuid(row.id),
            DepartmentName::new(row.name).map_err(corrupt)?,
            row.description
                .map(DepartmentDescription::new)
                .transpose()
                .map_err(corrupt)?,
            row.created_at,
        ))
    }
}

/// PostgreSQL 実装の DepartmentRepository
#[derive(Debug, Clone)]
pub struct PostgresDepartmentRepository {
    pool: PgPool,
}

impl PostgresDepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentRepository for PostgresDepartmentRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(limit = query.limit().get()))]
    async fn find_page(&self, query: &KeysetQuery) -> Result<Vec<Department>, InfraError> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT id, name, description, created_at FROM departments WHERE TRUE",
        );
        push_page_clause(&mut builder, "", query);

        builder
            .build_query_as::<DepartmentRow>()
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Department::try_from)
            .collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn exists(&self, id: &DepartmentId) -> Result<bool, InfraError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM departments WHERE id = $1)")
                .bind(id.as_uuid())
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %department.id()))]
    async fn insert(&self, department: &Department) -> Result<(), InfraError> {
        sqlx::query(
            "INSERT INTO departments (id, name, description, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(department.id().as_uuid())
        .bind(department.name().as_str())
        .bind(department.description().map(|d| d.as_str()))
        .bind(department.created_at())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
