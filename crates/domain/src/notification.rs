//! # 通知
//!
//! 学生・教員に届くお知らせ。受信者ごとに新しい順で一覧する。
//!
//! 受信者は学生・教員のどちらにもなりうるため、専用の [`RecipientId`] で表す。

use chrono::{DateTime, Utc};

define_uuid_id! {
    /// 通知の一意識別子
    pub struct NotificationId;
}

define_uuid_id! {
    /// 通知の受信者
    pub struct RecipientId;
}

define_validated_string! {
    /// 通知の件名
    pub struct NotificationTitle {
        label: "件名",
        max_length: 200,
    }
}

/// 通知エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id:           NotificationId,
    recipient_id: RecipientId,
    title:        NotificationTitle,
    body:         String,
    read_at:      Option<DateTime<Utc>>,
    created_at:   DateTime<Utc>,
}

impl Notification {
    /// 未読の通知を作成する
    pub fn new(
        id: NotificationId,
        recipient_id: RecipientId,
        title: NotificationTitle,
        body: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            recipient_id,
            title,
            body,
            read_at: None,
            created_at: now,
        }
    }

    pub fn from_db(
        id: NotificationId,
        recipient_id: RecipientId,
        title: NotificationTitle,
        body: String,
        read_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            recipient_id,
            title,
            body,
            read_at,
            created_at,
        }
    }

    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    pub fn recipient_id(&self) -> &RecipientId {
        &self.recipient_id
    }

    pub fn title(&self) -> &NotificationTitle {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn read_at(&self) -> Option<DateTime<Utc>> {
        self.read_at
    }

    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl_keyset_item!(Notification);
