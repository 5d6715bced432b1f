//! # 課題
//!
//! クラスごとに出される課題。締切は任意。

use chrono::{DateTime, Utc};

use crate::{DomainError, class::ClassId};

define_uuid_id! {
    /// 課題の一意識別子
    pub struct AssignmentId;
}

define_validated_string! {
    /// 課題名
    pub struct AssignmentTitle {
        label: "課題名",
        max_length: 200,
    }
}

/// 課題エンティティ
///
/// # 不変条件
///
/// - 締切がある場合、作成日時より後
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    id:         AssignmentId,
    class_id:   ClassId,
    title:      AssignmentTitle,
    due_at:     Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl Assignment {
    /// 新しい課題を作成する
    ///
    /// 締切が作成時刻以前の場合はバリデーションエラー。
    pub fn new(
        id: AssignmentId,
        class_id: ClassId,
        title: AssignmentTitle,
        due_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if due_at.is_some_and(|due| due <= now) {
            return Err(DomainError::Validation(
                "締切は現在時刻より後である必要があります".to_string(),
            ));
        }

        Ok(Self {
            id,
            class_id,
            title,
            due_at,
            created_at: now,
        })
    }

    /// データベースから課題を復元する
    ///
    /// 保存済みのデータは締切の検証を行わない。
    pub fn from_db(
        id: AssignmentId,
        class_id: ClassId,
        title: AssignmentTitle,
        due_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            class_id,
            title,
            due_at,
            created_at,
        }
    }

    pub fn id(&self) -> &AssignmentId {
        &self.id
    }

    pub fn class_id(&self) -> &ClassId {
        &self.class_id
    }

    pub fn title(&self) -> &AssignmentTitle {
        &self.title
    }

    pub fn due_at(&self) -> Option<DateTime<Utc>> {
        self.due_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl_keyset_item!(Assignment);
