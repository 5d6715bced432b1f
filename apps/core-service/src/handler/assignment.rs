//! # 課題ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/v1/classes/{class_id}/assignments` - クラスの課題一覧
//! - `POST /api/v1/classes/{class_id}/assignments` - 課題作成

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use gakuen_domain::{assignment::Assignment, class::ClassId};
use gakuen_shared::{ApiResponse, PaginatedResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ListQuery;
use crate::{
    error::CoreError,
    usecase::{AssignmentUseCaseImpl, CreateAssignmentInput},
};

pub struct AssignmentState {
    pub usecase: AssignmentUseCaseImpl,
}

/// 課題作成リクエスト
///
/// `due_at` は RFC 3339 形式。省略時は締切なし。
#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub title:  String,
    pub due_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AssignmentDto {
    pub id:         Uuid,
    pub class_id:   Uuid,
    pub title:      String,
    pub due_at:     Option<String>,
    pub created_at: String,
}

impl From<Assignment> for AssignmentDto {
    fn from(assignment: Assignment) -> Self {
        Self {
            id:         *assignment.id().as_uuid(),
            class_id:   *assignment.class_id().as_uuid(),
            title:      assignment.title().as_str().to_string(),
            due_at:     assignment.due_at().map(|d| d.to_rfc3339()),
            created_at: assignment.created_at().to_rfc3339(),
        }
    }
}

/// GET /api/v1/classes/{class_id}/assignments
#[tracing::instrument(skip_all, fields(%class_id))]
pub async fn list_class_assignments(
    State(state): State<Arc<AssignmentState>>,
    Path(class_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, CoreError> {
    let limit = query.page_limit()?;
    let class_id = ClassId::from_uuid(class_id);

    let page = state
        .usecase
        .list_assignments(&class_id, query.cursor(), limit)
        .await?;

    let (items, cursor) = page.map(AssignmentDto::from).into_parts();
    Ok((StatusCode::OK, Json(PaginatedResponse::new(items, cursor))))
}

/// POST /api/v1/classes/{class_id}/assignments
///
/// ## レスポンス
///
/// - `201 Created`: 作成された課題
/// - `400 Bad Request`: バリデーションエラー、締切が過去
/// - `404 Not Found`: クラスが存在しない
#[tracing::instrument(skip_all, fields(%class_id))]
pub async fn create_assignment(
    State(state): State<Arc<AssignmentState>>,
    Path(class_id): Path<Uuid>,
    Json(req): Json<CreateAssignmentRequest>,
) -> Result<impl IntoResponse, CoreError> {
    let input = CreateAssignmentInput {
        class_id: ClassId::from_uuid(class_id),
        title:    req.title,
        due_at:   req.due_at,
    };

    let assignment = state.usecase.create_assignment(input).await?;

    let response = ApiResponse::new(AssignmentDto::from(assignment));
    Ok((StatusCode::CREATED, Json(response)))
}
