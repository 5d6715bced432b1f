//! # キーセット境界
//!
//! 復号済みカーソルから、ストアに渡す境界条件と取得件数を組み立てる。
//!
//! ## 境界条件
//!
//! ```text
//! created_at < cursor.t OR (created_at = cursor.t AND id < cursor.i)
//! ```
//!
//! カーソルは前ページで最後に返した行を指すため、ID の比較は厳密な `<` にする。
//! これで境界の行自身は次ページから除外され、同じ作成日時で ID が小さい行は
//! 次ページに含まれる。
//!
//! ソート順は境界の有無に関わらず常に `created_at DESC, id DESC`。

use super::{Cursor, KeysetItem, OrderingKey, PageLimit, sort_for_listing};

/// カーソル位置より後ろ（並び順で後）の行だけを通す境界条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeysetBoundary {
    after: OrderingKey,
}

impl KeysetBoundary {
    pub fn new(cursor: Cursor) -> Self {
        Self {
            after: cursor.ordering_key(),
        }
    }

    /// 境界となる行のキー
    pub fn after(&self) -> OrderingKey {
        self.after
    }

    /// キーが境界を越えているか（次ページに含めてよいか）
    ///
    /// 降順の一覧で「後ろ」とは `(created_at, id)` が辞書順で小さいこと。
    pub fn admits(&self, key: &OrderingKey) -> bool {
        *key < self.after
    }
}

/// ストアに渡す 1 ページ分の問い合わせ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeysetQuery {
    boundary: Option<KeysetBoundary>,
    limit:    PageLimit,
}

impl KeysetQuery {
    pub fn new(cursor: Option<Cursor>, limit: PageLimit) -> Self {
        Self {
            boundary: cursor.map(KeysetBoundary::new),
            limit,
        }
    }

    pub fn first_page(limit: PageLimit) -> Self {
        Self::new(None, limit)
    }

    pub fn boundary(&self) -> Option<&KeysetBoundary> {
        self.boundary.as_ref()
    }

    pub fn limit(&self) -> PageLimit {
        self.limit
    }

    /// ストアから取得する件数（次ページ判定用に 1 件多い）
    pub fn fetch_limit(&self) -> i64 {
        i64::from(self.limit.get()) + 1
    }

    pub fn admits(&self, key: &OrderingKey) -> bool {
        self.boundary.is_none_or(|b| b.admits(key))
    }

    /// メモリ上の行集合に境界・ソート順・取得件数を適用する
    ///
    /// SQL を持たないストア（テスト用のインメモリ実装など）向け。
    pub fn apply<T: KeysetItem>(&self, rows: impl IntoIterator<Item = T>) -> Vec<T> {
        let mut rows: Vec<T> = rows
            .into_iter()
            .filter(|row| self.admits(&row.ordering_key()))
            .collect();
        sort_for_listing(&mut rows);
        // fetch_limit は 2〜101 の範囲
        rows.truncate(self.fetch_limit() as usize);
        rows
    }
}
