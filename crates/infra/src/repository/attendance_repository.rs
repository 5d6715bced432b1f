//! # AttendanceRepository
//!
//! 出欠記録の読み取り。学生の出欠履歴とクラスの出欠一覧は、絞り込み列が
//! 違うだけで同じ並び順・同じカーソル形式を使う。

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gakuen_domain::{
    DomainError,
    attendance::{AttendanceRecord, AttendanceRecordId, AttendanceStatus},
    class::ClassId,
    pagination::KeysetQuery,
    student::StudentId,
};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{error::InfraError, keyset::push_page_clause};

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    async fn find_page_by_student(
        &self,
        student_id: &StudentId,
        query: &KeysetQuery,
    ) -> Result<Vec<AttendanceRecord>, InfraError>;

    async fn find_page_by_class(
        &self,
        class_id: &ClassId,
        query: &KeysetQuery,
    ) -> Result<Vec<AttendanceRecord>, InfraError>;
}

#[derive(Debug, sqlx::FromRow)]
struct AttendanceRow {
    id:         Uuid,
    class_id:   Uuid,
    student_id: Uuid,
    status:     String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AttendanceRow> for AttendanceRecord {
    type Error = InfraError;

    fn try_from(row: AttendanceRow) -> Result<Self, Self::Error> {
        let status = AttendanceStatus::from_str(&row.status).map_err(|_| {
            InfraError::corrupt_row(
                "attendance_records",
                DomainError::Validation(format!("不明な出欠状況: {}", row.status)),
            )
        })?;
        Ok(AttendanceRecord::from_db(
            AttendanceRecordId::from_uuid(row.id),
            ClassId::from_uuid(row.class_id),
            StudentId::from_uuid(row.student_id),
            status,
            row.created_at,
        ))
    }
}

/// 絞り込み列
#[derive(Debug, Clone, Copy)]
enum Scope {
    Student(Uuid),
    Class(Uuid),
}

#[derive(Debug, Clone)]
pub struct PostgresAttendanceRepository {
    pool: PgPool,
}

impl PostgresAttendanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_page(
        &self,
        scope: Scope,
        query: &KeysetQuery,
    ) -> Result<Vec<AttendanceRecord>, InfraError> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT id, class_id, student_id, status, created_at FROM attendance_records WHERE ",
        );
        match scope {
            Scope::Student(id) => builder.push("student_id = ").push_bind(id),
            Scope::Class(id) => builder.push("class_id = ").push_bind(id),
        };
        push_page_clause(&mut builder, "", query);

        builder
            .build_query_as::<AttendanceRow>()
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(AttendanceRecord::try_from)
            .collect()
    }
}

#[async_trait]
impl AttendanceRepository for PostgresAttendanceRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(%student_id))]
    async fn find_page_by_student(
        &self,
        student_id: &StudentId,
        query: &KeysetQuery,
    ) -> Result<Vec<AttendanceRecord>, InfraError> {
        self.find_page(Scope::Student(*student_id.as_uuid()), query)
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%class_id))]
    async fn find_page_by_class(
        &self,
        class_id: &ClassId,
        query: &KeysetQuery,
    ) -> Result<Vec<AttendanceRecord>, InfraError> {
        self.find_page(Scope::Class(*class_id.as_uuid()), query).await
    }
}
