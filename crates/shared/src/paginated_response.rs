//! # ページネーション付きレスポンス
//!
//! すべての一覧 API が返すキーセットページネーションのレスポンス型。
//!
//! ## JSON 形式
//!
//! ```json
//! {
//!   "items": [...],
//!   "cursor": "eyJ0IjoiMjAyNi0wNC0wMVQwOTozMDowMFoiLCJpIjoiLi4uIn0",
//!   "hasMore": true
//! }
//! ```
//!
//! 最終ページでは `cursor` が `null`、`hasMore` が `false` になる。
//! `cursor` は opaque なトークンで、クライアントは次のリクエストの
//! `?cursor=` にそのまま渡す。

use serde::{Deserialize, Serialize};

/// ページネーション付きレスポンス
///
/// # 不変条件
///
/// - `has_more == cursor.is_some()`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
   pub items:    Vec<T>,
   pub cursor:   Option<String>,
   pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
   /// 要素と次カーソルから組み立てる
   ///
   /// `has_more` は次カーソルの有無から決まる。
   pub fn new(items: Vec<T>, cursor: Option<String>) -> Self {
      let has_more = cursor.is_some();
      Self {
         items,
         cursor,
         has_more,
      }
   }
}
