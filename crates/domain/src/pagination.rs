//! # キーセットページネーション
//!
//! すべての一覧 API が共有する、opaque カーソルによるキーセットページネーション。
//!
//! ## 処理の流れ
//!
//! ```text
//! cursor トークン ─ Cursor::decode ─→ KeysetQuery::new ─→ [ストアで取得] ─→ Page::assemble
//!                   (cursor)          (boundary)          limit + 1 件      (page)
//! ```
//!
//! 1. [`Cursor::decode`] がトークンを「カーソルなし / 有効 / 不正」の 3 状態に分ける
//! 2. [`KeysetQuery`] が境界条件とソート順（`created_at DESC, id DESC`）を決める
//! 3. 呼び出し側が `limit + 1` 件をストアから取得する
//! 4. [`Page::assemble`] が余分な 1 件で次ページの有無を判定し、次カーソルを作る
//!
//! [`paginate`] はこの 4 段階をまとめた汎用関数で、各一覧ユースケースは
//! 取得処理だけをクロージャで渡す。
//!
//! ## オフセットではなくキーセットを使う理由
//!
//! カーソルが「最後に返した行の `(created_at, id)`」を指すため、前方で行の
//! 追加・削除があっても取りこぼしや重複が起きない。カーソルはサーバー側に
//! 状態を持たない。
//!
//! ## 使用例
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use gakuen_domain::pagination::{KeysetItem, OrderingKey, PageLimit, paginate};
//! use uuid::Uuid;
//!
//! #[derive(Debug, Clone)]
//! struct Row(OrderingKey);
//!
//! impl KeysetItem for Row {
//!     fn ordering_key(&self) -> OrderingKey {
//!         self.0
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let t = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
//! let rows: Vec<Row> = (0..3u128)
//!     .map(|i| Row(OrderingKey::new(t, Uuid::from_u128(i + 1))))
//!     .collect();
//! let limit = PageLimit::new(2).unwrap();
//!
//! let page = paginate(None, limit, |query| async move {
//!     Ok::<_, std::convert::Infallible>(query.apply(rows))
//! })
//! .await
//! .unwrap();
//!
//! assert_eq!(page.items().len(), 2);
//! assert!(page.has_more());
//! # });
//! ```

mod boundary;
mod cursor;
mod key;
mod limit;
mod page;

use std::future::Future;

pub use boundary::{KeysetBoundary, KeysetQuery};
pub use cursor::{Cursor, INVALID_CURSOR_CODE, InvalidCursor};
pub use key::{KeysetItem, OrderingKey, sort_for_listing};
pub use limit::PageLimit;
pub use page::Page;
use thiserror::Error;

/// 一覧取得の失敗
///
/// カーソル不正とストア側の失敗を区別する。カーソル不正の場合、
/// ストアへの問い合わせは行われない。
#[derive(Debug, Error)]
pub enum PaginateError<E> {
    /// カーソルトークンを復号できない
    #[error(transparent)]
    InvalidCursor(#[from] InvalidCursor),

    /// ストアでの取得失敗（そのまま伝播する）
    #[error(transparent)]
    Store(E),
}

/// カーソルトークンから 1 ページ分を取得する
///
/// `fetch` にはストアへの問い合わせを渡す。`fetch` は受け取った
/// [`KeysetQuery`] の境界条件・ソート順・取得件数（`limit + 1`）に従う必要がある。
///
/// トークンが不正な場合は `fetch` を呼ばずに [`PaginateError::InvalidCursor`] を返す。
pub async fn paginate<T, E, F, Fut>(
    cursor: Option<&str>,
    limit: PageLimit,
    fetch: F,
) -> Result<Page<T>, PaginateError<E>>
where
    T: KeysetItem,
    F: FnOnce(KeysetQuery) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    let cursor = Cursor::decode(cursor)?;
    let query = KeysetQuery::new(cursor, limit);
    let rows = fetch(query).await.map_err(PaginateError::Store)?;
    Ok(Page::assemble(rows, limit))
}
