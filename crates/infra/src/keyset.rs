//! # キーセット条件の SQL 化
//!
//! [`KeysetQuery`] を `QueryBuilder` の末尾に追加し、境界条件・ソート順・
//! 取得件数を DB に押し下げる。
//!
//! 呼び出し側は `WHERE` 句（絞り込み条件がなければ `WHERE TRUE`）までを
//! 組み立ててから [`push_page_clause`] を呼ぶ。
//!
//! ```text
//! SELECT ... FROM courses c WHERE c.department_id = $1
//!   AND (c.created_at, c.id) < ($2, $3)
//!   ORDER BY c.created_at DESC, c.id DESC
//!   LIMIT $4
//! ```
//!
//! 行値比較 `(created_at, id) < (t, i)` は
//! `created_at < t OR (created_at = t AND id < i)` と同値で、
//! `(created_at DESC, id DESC)` の複合インデックスをそのまま使える。

use gakuen_domain::pagination::KeysetQuery;
use sqlx::{Postgres, QueryBuilder};

/// 境界条件・ソート順・`LIMIT` を追加する
///
/// `alias` はテーブル別名（`"c"` など）。結合しないクエリでは空文字を渡す。
pub fn push_page_clause(builder: &mut QueryBuilder<'_, Postgres>, alias: &str, query: &KeysetQuery) {
    let column = |name: &str| {
        if alias.is_empty() {
            name.to_string()
        } else {
            format!("{alias}.{name}")
        }
    };
    let created_at = column("created_at");
    let id = column("id");

    if let Some(boundary) = query.boundary() {
        let after = boundary.after();
        builder
            .push(format!(" AND ({created_at}, {id}) < ("))
            .push_bind(after.created_at())
            .push(", ")
            .push_bind(after.id())
            .push(")");
    }

    builder
        .push(format!(" ORDER BY {created_at} DESC, {id} DESC LIMIT "))
        .push_bind(query.fetch_limit());
}
