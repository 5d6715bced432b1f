//! 並び順キー

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 一覧の並び順を決めるキー `(created_at, id)`
///
/// 導出した `Ord` は `created_at` → `id` の辞書順（昇順）。
/// 一覧はこの逆順（`created_at DESC, id DESC`）で返す。
/// 作成日時が同じ行は ID で順序が決まるため、全順序になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderingKey {
    created_at: DateTime<Utc>,
    id:         Uuid,
}

impl OrderingKey {
    pub fn new(created_at: DateTime<Utc>, id: Uuid) -> Self {
        Self { created_at, id }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

/// キーセットページネーションの対象になれるエンティティ
pub trait KeysetItem {
    fn ordering_key(&self) -> OrderingKey;
}

impl KeysetItem for OrderingKey {
    fn ordering_key(&self) -> OrderingKey {
        *self
    }
}

/// 一覧の並び順（`created_at DESC, id DESC`）で比較する
fn listing_order(a: &OrderingKey, b: &OrderingKey) -> Ordering {
    b.cmp(a)
}

/// 一覧の並び順（`created_at DESC, id DESC`）にソートする
pub fn sort_for_listing<T: KeysetItem>(items: &mut [T]) {
    items.sort_by(|a, b| listing_order(&a.ordering_key(), &b.ordering_key()));
}
