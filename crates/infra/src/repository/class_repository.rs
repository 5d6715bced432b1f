//! # ClassRepository
//!
//! クラスの読み取りを担当するリポジトリ。
//!
//! 学生から見たクラス一覧は `class_enrollments` を結合して取得する。
//! 並び順キーは履修登録ではなくクラス自身の `(created_at, id)`。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gakuen_domain::{
    class::{ClassId, ClassName, SchoolClass, TeacherId},
    course::CourseId,
    pagination::KeysetQuery,
    student::StudentId,
};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{error::InfraError, keyset::push_page_clause};

#[async_trait]
pub trait ClassRepository: Send + Sync {
    /// 教員が担当するクラスの 1 ページ分を取得する
    async fn find_page_by_teacher(
        &self,
        teacher_id: &TeacherId,
        query: &KeysetQuery,
    ) -> Result<Vec<SchoolClass>, InfraError>;

    /// 学生が履修しているクラスの 1 ページ分を取得する
    async fn find_page_by_student(
        &self,
        student_id: &StudentId,
        query: &KeysetQuery,
    ) -> Result<Vec<SchoolClass>, InfraError>;

    async fn exists(&self, id: &ClassId) -> Result<bool, InfraError>;
}

#[derive(Debug, sqlx::FromRow)]
struct ClassRow {
    id:         Uuid,
    course_id:  Uuid,
    teacher_id: Uuid,
    name:       String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ClassRow> for SchoolClass {
    type Error = InfraError;

    fn try_from(row: ClassRow) -> Result<Self, Self::Error> {
        Ok(SchoolClass::from_db(
            ClassId::from_uuid(row.id),
            CourseId::from_uuid(row.course_id),
            TeacherId::from_uuid(row.teacher_id),
            ClassName::new(row.name).map_err(|e| InfraError::corrupt_row("classes", e))?,
            row.created_at,
        ))
    }
}

#[derive(Debug, Clone)]
pub struct PostgresClassRepository {
    pool: PgPool,
}

impl PostgresClassRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, mut builder: QueryBuilder<'_, Postgres>) -> Result<Vec<SchoolClass>, InfraError> {
        builder
            .build_query_as::<ClassRow>()
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(SchoolClass::try_from)
            .collect()
    }
}

#[async_trait]
impl ClassRepository for PostgresClassRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(%teacher_id))]
    async fn find_page_by_teacher(
        &self,
        teacher_id: &TeacherId,
        query: &KeysetQuery,
    ) -> Result<Vec<SchoolClass>, InfraError> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT id, course_id, teacher_id, name, created_at FROM classes WHERE teacher_id = ",
        );
        builder.push_bind(*teacher_id.as_uuid());
        push_page_clause(&mut builder, "", query);

        self.fetch(builder).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%student_id))]
    async fn find_page_by_student(
        &self,
        student_id: &StudentId,
        query: &KeysetQuery,
    ) -> Result<Vec<SchoolClass>, InfraError> {
        let mut builder = QueryBuilder::<Postgres>::new(
            r#"
            SELECT c.id, c.course_id, c.teacher_id, c.name, c.created_at
            FROM classes c
            INNER JOIN class_enrollments e ON e.class_id = c.id
            WHERE e.student_id = "#,
        );
        builder.push_bind(*student_id.as_uuid());
        push_page_clause(&mut builder, "c", query);

        self.fetch(builder).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn exists(&self, id: &ClassId) -> Result<bool, InfraError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM classes WHERE id = $1)")
            .bind(id.as_uuid())
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }
}
