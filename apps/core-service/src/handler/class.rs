//! # クラスハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/v1/teachers/{teacher_id}/classes` - 教員の担当クラス一覧
//! - `GET /api/v1/students/{student_id}/classes` - 学生の履修クラス一覧

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use gakuen_domain::{
    class::{SchoolClass, TeacherId},
    student::StudentId,
};
use gakuen_shared::PaginatedResponse;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ListQuery;
use crate::{error::CoreError, usecase::ClassUseCaseImpl};

pub struct ClassState {
    pub usecase: ClassUseCaseImpl,
}

/// クラス DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ClassDto {
    pub id:         Uuid,
    pub course_id:  Uuid,
    pub teacher_id: Uuid,
    pub name:       String,
    pub created_at: String,
}

impl From<SchoolClass> for ClassDto {
    fn from(class: SchoolClass) -> Self {
        Self {
            id:         *class.id().as_uuid(),
            course_id:  *class.course_id().as_uuid(),
            teacher_id: *class.teacher_id().as_uuid(),
            name:       class.name().as_str().to_string(),
            created_at: class.created_at().to_rfc3339(),
        }
    }
}

/// GET /api/v1/teachers/{teacher_id}/classes
#[tracing::instrument(skip_all, fields(%teacher_id))]
pub async fn list_teacher_classes(
    State(state): State<Arc<ClassState>>,
    Path(teacher_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, CoreError> {
    let limit = query.page_limit()?;
    let teacher_id = TeacherId::from_uuid(teacher_id);

    let page = state
        .usecase
        .list_classes_by_teacher(&teacher_id, query.cursor(), limit)
        .await?;

    let (items, cursor) = page.map(ClassDto::from).into_parts();
    Ok((StatusCode::OK, Json(PaginatedResponse::new(items, cursor))))
}

/// GET /api/v1/students/{student_id}/classes
///
/// 履修登録したクラスを、クラスの作成順（新しい順）で返す。
/// 学生が存在しない場合は 404。
#[tracing::instrument(skip_all, fields(%student_id))]
pub async fn list_student_classes(
    State(state): State<Arc<ClassState>>,
    Path(student_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, CoreError> {
    let limit = query.page_limit()?;
    let student_id = StudentId::from_uuid(student_id);

    let page = state
        .usecase
        .list_classes_by_student(&student_id, query.cursor(), limit)
        .await?;

    let (items, cursor) = page.map(ClassDto::from).into_parts();
    Ok((StatusCode::OK, Json(PaginatedResponse::new(items, cursor))))
}
