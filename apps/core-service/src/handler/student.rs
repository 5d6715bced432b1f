//! # 学生ハンドラ
//!
//! - `GET /api/v1/students` - 学生一覧（登録の新しい順）

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use gakuen_domain::student::Student;
use gakuen_shared::PaginatedResponse;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ListQuery;
use crate::{error::CoreError, usecase::StudentUseCaseImpl};

pub struct StudentState {
    pub usecase: StudentUseCaseImpl,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StudentDto {
    pub id:             Uuid,
    pub student_number: String,
    pub name:           String,
    pub created_at:     String,
}

impl From<Student> for StudentDto {
    fn from(student: Student) -> Self {
        Self {
            id:             *student.id().as_uuid(),
            student_number: student.student_number().as_str().to_string(),
            name:           student.name().as_str().to_string(),
            created_at:     student.created_at().to_rfc3339(),
        }
    }
}

/// GET /api/v1/students
#[tracing::instrument(skip_all)]
pub async fn list_students(
    State(state): State<Arc<StudentState>>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, CoreError> {
    let limit = query.page_limit()?;
    let page = state.usecase.list_students(query.cursor(), limit).await?;

    let (items, cursor) = page.map(StudentDto::from).into_parts();
    Ok((StatusCode::OK, Json(PaginatedResponse::new(items, cursor))))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{Router, http::StatusCode, routing::get as get_route};
    use gakuen_infra::mock::UnavailableRepository;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_utils::{get, send};

    #[tokio::test]
    async fn test_ストア障害時は500で内部情報を返さない() {
        // Given
        let state = Arc::new(StudentState {
            usecase: StudentUseCaseImpl::new(Arc::new(UnavailableRepository)),
        });
        let sut = Router::new()
            .route("/api/v1/students", get_route(list_students))
            .with_state(state);

        // When
        let (status, body) = send(sut, get("/api/v1/students")).await;

        // Then
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "内部エラーが発生しました");
    }
}
