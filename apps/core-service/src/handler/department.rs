//! # 学科ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/v1/departments` - 学科一覧（新しい順、キーセットページネーション）
//! - `POST /api/v1/departments` - 学科作成

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use gakuen_domain::department::Department;
use gakuen_shared::{ApiResponse, PaginatedResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ListQuery;
use crate::{
    error::CoreError,
    usecase::{CreateDepartmentInput, DepartmentUseCaseImpl},
};

/// 学科 API の共有状態
pub struct DepartmentState {
    pub usecase: DepartmentUseCaseImpl,
}

/// 学科作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateDepartmentRequest {
    pub name:        String,
    pub description: Option<String>,
}

/// 学科 DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DepartmentDto {
    pub id:          Uuid,
    pub name:        String,
    pub description: Option<String>,
    pub created_at:  String,
}

impl From<Department> for DepartmentDto {
    fn from(department: Department) -> Self {
        Self {
            id:          *department.id().as_uuid(),
            name:        department.name().as_str().to_string(),
            description: department.description().map(|d| d.as_str().to_string()),
            created_at:  department.created_at().to_rfc3339(),
        }
    }
}

/// GET /api/v1/departments
#[tracing::instrument(skip_all, fields(limit = ?query.limit))]
pub async fn list_departments(
    State(state): State<Arc<DepartmentState>>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, CoreError> {
    let limit = query.page_limit()?;

    let page = state.usecase.list_departments(query.cursor(), limit).await?;

    let (items, cursor) = page.map(DepartmentDto::from).into_parts();
    Ok((StatusCode::OK, Json(PaginatedResponse::new(items, cursor))))
}

/// POST /api/v1/departments
///
/// ## レスポンス
///
/// - `201 Created`: 作成された学科
/// - `400 Bad Request`: バリデーションエラー
#[tracing::instrument(skip_all)]
pub async fn create_department(
    State(state): State<Arc<DepartmentState>>,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<impl IntoResponse, CoreError> {
    let department = state
        .usecase
        .create_department(CreateDepartmentInput {
            name:        req.name,
            description: req.description,
        })
        .await?;

    let response = ApiResponse::new(DepartmentDto::from(department));
    Ok((StatusCode::CREATED, Json(response)))
}
