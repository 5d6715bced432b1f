//! # StudentRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gakuen_domain::{
    pagination::KeysetQuery,
    student::{Student, StudentId, StudentName, StudentNumber},
};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{error::InfraError, keyset::push_page_clause};

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_page(&self, query: &KeysetQuery) -> Result<Vec<Student>, InfraError>;

    async fn exists(&self, id: &StudentId) -> Result<bool, InfraError>;
}

#[derive(sqlx::FromRow)]
struct StudentRow {
    id:             Uuid,
    student_number: String,
    name:           String,
    created_at:     DateTime<Utc>,
}

impl TryFrom<StudentRow> for Student {
    type Error = InfraError;

    fn try_from(row: StudentRow) -> Result<Self, Self::Error> {
        let corrupt = |e| InfraError::corrupt_row("students", e);
        Ok(Student::from_db(
            StudentId::from_uuid(row.id),
            StudentNumber::new(row.student_number).map_err(corrupt)?,
            StudentName::new(row.name).map_err(corrupt)?,
            row.created_at,
        ))
    }
}

#[derive(Debug, Clone)]
pub struct PostgresStudentRepository {
    pool: PgPool,
}

impl PostgresStudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PostgresStudentRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(limit = query.limit().get()))]
    async fn find_page(&self, query: &KeysetQuery) -> Result<Vec<Student>, InfraError> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT id, student_number, name, created_at FROM students WHERE TRUE",
        );
        push_page_clause(&mut builder, "", query);

        builder
            .build_query_as::<StudentRow>()
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Student::try_from)
            .collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn exists(&self, id: &StudentId) -> Result<bool, InfraError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM students WHERE id = $1)")
                .bind(id.as_uuid())
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}
