//! # 通知ハンドラ
//!
//! - `GET /api/v1/recipients/{recipient_id}/notifications` - 受信者の通知一覧

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use gakuen_domain::notification::{Notification, RecipientId};
use gakuen_shared::PaginatedResponse;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ListQuery;
use crate::{error::CoreError, usecase::NotificationUseCaseImpl};

pub struct NotificationState {
    pub usecase: NotificationUseCaseImpl,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct NotificationDto {
    pub id:         Uuid,
    pub title:      String,
    pub body:       String,
    pub is_read:    bool,
    pub read_at:    Option<String>,
    pub created_at: String,
}

impl From<Notification> for NotificationDto {
    fn from(notification: Notification) -> Self {
        Self {
            id:         *notification.id().as_uuid(),
            title:      notification.title().as_str().to_string(),
            body:       notification.body().to_string(),
            is_read:    notification.is_read(),
            read_at:    notification.read_at().map(|d| d.to_rfc3339()),
            created_at: notification.created_at().to_rfc3339(),
        }
    }
}

/// GET /api/v1/recipients/{recipient_id}/notifications
///
/// 受信者の存在確認は行わない（通知がなければ空の一覧）。
#[tracing::instrument(skip_all, fields(%recipient_id))]
pub async fn list_recipient_notifications(
    State(state): State<Arc<NotificationState>>,
    Path(recipient_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, CoreError> {
    let limit = query.page_limit()?;
    let recipient_id = RecipientId::from_uuid(recipient_id);

    let page = state
        .usecase
        .list_notifications(&recipient_id, query.cursor(), limit)
        .await?;

    let (items, cursor) = page.map(NotificationDto::from).into_parts();
    Ok((StatusCode::OK, Json(PaginatedResponse::new(items, cursor))))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use gakuen_domain::notification::{Notification, NotificationId, NotificationTitle, RecipientId};
    use pretty_assertions::assert_eq;

    use crate::test_utils::{TestApp, base_time, get, send};

    #[tokio::test]
    async fn test_通知一覧は未読既読を含めて返す() {
        let app = TestApp::new();
        let recipient = RecipientId::new();
        app.notifications.add(Notification::from_db(
            NotificationId::new(),
            recipient,
            NotificationTitle::new("成績公開").unwrap(),
            "前期の成績が公開されました".to_string(),
            Some(base_time()),
            base_time(),
        ));

        let (status, body) = send(
            app.router(),
            get(&format!("/api/v1/recipients/{recipient}/notifications")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"][0]["title"], "成績公開");
        assert_eq!(body["items"][0]["is_read"], true);
    }
}
