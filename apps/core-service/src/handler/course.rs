//! # 科目ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/v1/courses` - 全科目一覧
//! - `GET /api/v1/departments/{department_id}/courses` - 学科の科目一覧
//! - `POST /api/v1/courses` - 科目作成

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use gakuen_domain::{course::Course, department::DepartmentId};
use gakuen_shared::{ApiResponse, PaginatedResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ListQuery;
use crate::{
    error::CoreError,
    usecase::{CourseUseCaseImpl, CreateCourseInput},
};

pub struct CourseState {
    pub usecase: CourseUseCaseImpl,
}

/// 科目作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub department_id: Uuid,
    pub code:          String,
    pub title:         String,
    pub credits:       i16,
}

/// 科目 DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CourseDto {
    pub id:            Uuid,
    pub department_id: Uuid,
    pub code:          String,
    pub title:         String,
    pub credits:       i16,
    pub created_at:    String,
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        Self {
            id:            *course.id().as_uuid(),
            department_id: *course.department_id().as_uuid(),
            code:          course.code().as_str().to_string(),
            title:         course.title().as_str().to_string(),
            credits:       course.credits().get(),
            created_at:    course.created_at().to_rfc3339(),
        }
    }
}

/// GET /api/v1/courses
#[tracing::instrument(skip_all)]
pub async fn list_courses(
    State(state): State<Arc<CourseState>>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, CoreError> {
    let limit = query.page_limit()?;
    let page = state.usecase.list_courses(query.cursor(), limit).await?;

    let (items, cursor) = page.map(CourseDto::from).into_parts();
    Ok((StatusCode::OK, Json(PaginatedResponse::new(items, cursor))))
}

/// GET /api/v1/departments/{department_id}/courses
///
/// ## レスポンス
///
/// - `200 OK`: 科目一覧
/// - `400 Bad Request`: limit が範囲外、カーソルが不正
/// - `404 Not Found`: 学科が存在しない
#[tracing::instrument(skip_all, fields(%department_id))]
pub async fn list_department_courses(
    State(state): State<Arc<CourseState>>,
    Path(department_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, CoreError> {
    let limit = query.page_limit()?;
    let department_id = DepartmentId::from_uuid(department_id);

    let page = state
        .usecase
        .list_courses_by_department(&department_id, query.cursor(), limit)
        .await?;

    let (items, cursor) = page.map(CourseDto::from).into_parts();
    Ok((StatusCode::OK, Json(PaginatedResponse::new(items, cursor))))
}

/// POST /api/v1/courses
///
/// ## レスポンス
///
/// - `201 Created`: 作成された科目
/// - `400 Bad Request`: バリデーションエラー
/// - `404 Not Found`: 学科が存在しない
#[tracing::instrument(skip_all, fields(department_id = %req.department_id))]
pub async fn create_course(
    State(state): State<Arc<CourseState>>,
    Json(req): Json<CreateCourseRequest>,
) -> Result<impl IntoResponse, CoreError> {
    let input = CreateCourseInput {
        department_id: DepartmentId::from_uuid(req.department_id),
        code:          req.code,
        title:         req.title,
        credits:       req.credits,
    };

    let course = state.usecase.create_course(input).await?;

    let response = ApiResponse::new(CourseDto::from(course));
    Ok((StatusCode::CREATED, Json(response)))
}
