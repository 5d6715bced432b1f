//! 通知一覧ユースケース

use std::sync::Arc;

use gakuen_domain::{
    notification::{Notification, RecipientId},
    pagination::{Page, PageLimit, paginate},
};
use gakuen_infra::repository::NotificationRepository;

use crate::error::CoreError;

pub struct NotificationUseCaseImpl {
    notification_repository: Arc<dyn NotificationRepository>,
}

impl NotificationUseCaseImpl {
    pub fn new(notification_repository: Arc<dyn NotificationRepository>) -> Self {
        Self {
            notification_repository,
        }
    }

    /// 受信者宛ての通知を新しい順に取得する
    ///
    /// 既読・未読を問わずすべて返す。
    pub async fn list_notifications(
        &self,
        recipient_id: &RecipientId,
        cursor: Option<&str>,
        limit: PageLimit,
    ) -> Result<Page<Notification>, CoreError> {
        let page = paginate(cursor, limit, |query| async move {
            self.notification_repository
                .find_page_by_recipient(recipient_id, &query)
                .await
        })
        .await?;
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};
    use gakuen_domain::notification::{NotificationId, NotificationTitle};
    use gakuen_infra::mock::MockNotificationRepository;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_ページ取得の間に届いた通知は次ページに混ざらない() {
        // Given
        let t0 = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        let recipient = RecipientId::new();
        let repo = MockNotificationRepository::new();
        let notify = |title: &str, i: i64| {
            Notification::new(
                NotificationId::new(),
                recipient,
                NotificationTitle::new(title).unwrap(),
                String::new(),
                t0 + Duration::seconds(i),
            )
        };
        for i in 0..3 {
            repo.add(notify(&format!("通知{i}"), i));
        }
        let sut = NotificationUseCaseImpl::new(Arc::new(repo.clone()));
        let first = sut
            .list_notifications(&recipient, None, PageLimit::new(2).unwrap())
            .await
            .unwrap();

        // When: 1 ページ目を読んだ後に新着が届く
        repo.add(notify("新着", 10));
        let second = sut
            .list_notifications(&recipient, first.next_cursor(), PageLimit::new(2).unwrap())
            .await
            .unwrap();

        // Then
        let titles: Vec<&str> = second.items().iter().map(|n| n.title().as_str()).collect();
        assert_eq!(titles, vec!["通知0"]);
        assert!(!second.has_more());
    }

    #[tokio::test]
    async fn test_他の受信者の通知は含まない() {
        let repo = MockNotificationRepository::new();
        repo.add(Notification::new(
            NotificationId::new(),
            RecipientId::new(),
            NotificationTitle::new("他人宛て").unwrap(),
            String::new(),
            Utc::now(),
        ));
        let sut = NotificationUseCaseImpl::new(Arc::new(repo));

        let page = sut
            .list_notifications(&RecipientId::new(), None, PageLimit::default())
            .await
            .unwrap();

        assert!(page.items().is_empty());
        assert!(!page.has_more());
    }
}
