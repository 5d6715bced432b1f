//! # Core Service エラー定義
//!
//! Core Service 固有のエラーと、HTTP レスポンス（RFC 9457 Problem Details）への変換を定義する。
//!
//! | バリアント | ステータス | `type` |
//! |------------|-----------|--------|
//! | `NotFound` | 404 | `not-found` |
//! | `Validation` | 400 | `validation-error` |
//! | `InvalidCursor` | 400 | `invalid-cursor`（`title` は `InvalidCursor` 固定） |
//! | `Database` | 500 | `internal-error` |

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use gakuen_domain::{
   DomainError,
   pagination::{InvalidCursor, PaginateError},
};
use gakuen_infra::InfraError;
use gakuen_shared::{ErrorResponse, event_log::error as log_error};
use thiserror::Error;

/// Core Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
   /// リソースが見つからない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// 入力値が不正（limit の範囲外、文字数超過など）
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// ページネーションカーソルを復号できない
   #[error("カーソルが不正です: {0}")]
   InvalidCursor(#[from] InvalidCursor),

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),
}

impl From<DomainError> for CoreError {
   fn from(error: DomainError) -> Self {
      match error {
         DomainError::Validation(msg) => CoreError::Validation(msg),
         not_found @ DomainError::NotFound { .. } => CoreError::NotFound(not_found.to_string()),
      }
   }
}

impl<E> From<PaginateError<E>> for CoreError
where
   E: Into<CoreError>,
{
   fn from(error: PaginateError<E>) -> Self {
      match error {
         PaginateError::InvalidCursor(e) => CoreError::InvalidCursor(e),
         PaginateError::Store(e) => e.into(),
      }
   }
}

impl IntoResponse for CoreError {
   fn into_response(self) -> Response {
      let (status, body) = match self {
         CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
         CoreError::Validation(msg) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::validation_error(msg),
         ),
         CoreError::InvalidCursor(reason) => {
            // トークンの中身は出さない
            tracing::debug!(
               error.category = log_error::category::CLIENT_INPUT,
               error.kind = log_error::kind::INVALID_CURSOR,
               reason = %reason,
               "カーソルを復号できません"
            );
            (
               StatusCode::BAD_REQUEST,
               ErrorResponse::invalid_cursor(reason.code()),
            )
         }
         CoreError::Database(e) => {
            tracing::error!(
               error.category = log_error::category::INFRASTRUCTURE,
               error.kind = log_error::kind::DATABASE,
               span_trace = %e.span_trace(),
               "データベースエラー: {}",
               e
            );
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse::internal_error(),
            )
         }
      };

      (status, Json(body)).into_response()
   }
}
