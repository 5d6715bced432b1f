//! # 出欠ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/v1/students/{student_id}/attendance` - 学生の出欠履歴
//! - `GET /api/v1/classes/{class_id}/attendance` - クラスの出欠記録

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use gakuen_domain::{
    attendance::{AttendanceRecord, AttendanceStatus},
    class::ClassId,
    student::StudentId,
};
use gakuen_shared::PaginatedResponse;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ListQuery;
use crate::{error::CoreError, usecase::AttendanceUseCaseImpl};

pub struct AttendanceState {
    pub usecase: AttendanceUseCaseImpl,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AttendanceRecordDto {
    pub id:         Uuid,
    pub class_id:   Uuid,
    pub student_id: Uuid,
    pub status:     AttendanceStatus,
    pub created_at: String,
}

impl From<AttendanceRecord> for AttendanceRecordDto {
    fn from(record: AttendanceRecord) -> Self {
        Self {
            id:         *record.id().as_uuid(),
            class_id:   *record.class_id().as_uuid(),
            student_id: *record.student_id().as_uuid(),
            status:     record.status(),
            created_at: record.created_at().to_rfc3339(),
        }
    }
}

/// GET /api/v1/students/{student_id}/attendance
#[tracing::instrument(skip_all, fields(%student_id))]
pub async fn list_student_attendance(
    State(state): State<Arc<AttendanceState>>,
    Path(student_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, CoreError> {
    let limit = query.page_limit()?;
    let student_id = StudentId::from_uuid(student_id);

    let page = state
        .usecase
        .list_by_student(&student_id, query.cursor(), limit)
        .await?;

    let (items, cursor) = page.map(AttendanceRecordDto::from).into_parts();
    Ok((StatusCode::OK, Json(PaginatedResponse::new(items, cursor))))
}

/// GET /api/v1/classes/{class_id}/attendance
#[tracing::instrument(skip_all, fields(%class_id))]
pub async fn list_class_attendance(
    State(state): State<Arc<AttendanceState>>,
    Path(class_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, CoreError> {
    let limit = query.page_limit()?;
    let class_id = ClassId::from_uuid(class_id);

    let page = state
        .usecase
        .list_by_class(&class_id, query.cursor(), limit)
        .await?;

    let (items, cursor) = page.map(AttendanceRecordDto::from).into_parts();
    Ok((StatusCode::OK, Json(PaginatedResponse::new(items, cursor))))
}
