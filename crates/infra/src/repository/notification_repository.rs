//! # NotificationRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gakuen_domain::{
    notification::{Notification, NotificationId, NotificationTitle, RecipientId},
    pagination::KeysetQuery,
};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{error::InfraError, keyset::push_page_clause};

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// 受信者宛ての通知の 1 ページ分を取得する（既読・未読を問わない）
    async fn find_page_by_recipient(
        &self,
        recipient_id: &RecipientId,
        query: &KeysetQuery,
    ) -> Result<Vec<Notification>, InfraError>;
}

#[derive(Debug, sqlx::FromRow)]
struct NotificationRow {
    id:           Uuid,
    recipient_id: Uuid,
    title:        String,
    body:         String,
    read_at:      Option<DateTime<Utc>>,
    created_at:   DateTime<Utc>,
}

impl TryFrom<NotificationRow> for Notification {
    type Error = InfraError;

    fn try_from(row: NotificationRow) -> Result<Self, Self::Error> {
        Ok(Notification::from_db(
            NotificationId::from_uuid(row.id),
            RecipientId::from_uuid(row.recipient_id),
            NotificationTitle::new(row.title)
                .map_err(|e| InfraError::corrupt_row("notifications", e))?,
            row.body,
            row.read_at,
            row.created_at,
        ))
    }
}

#[derive(Debug, Clone)]
pub struct PostgresNotificationRepository {
    pool: PgPool,
}

impl PostgresNotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PostgresNotificationRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(%recipient_id))]
    async fn find_page_by_recipient(
        &self,
        recipient_id: &RecipientId,
        query: &KeysetQuery,
    ) -> Result<Vec<Notification>, InfraError> {
        let mut builder = QueryBuilder::<Postgres>::new(
            r#"
            SELECT id, recipient_id, title, body, read_at, created_at
            FROM notifications
            WHERE recipient_id = "#,
        );
        builder.push_bind(*recipient_id.as_uuid());
        push_page_clause(&mut builder, "", query);

        builder
            .build_query_as::<NotificationRow>()
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Notification::try_from)
            .collect()
    }
}
