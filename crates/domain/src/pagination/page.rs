//! # ページ組み立て
//!
//! `limit + 1` 件取得済みの行から、返却するページと次カーソルを作る。
//!
//! 1. `has_more = rows.len() > limit`
//! 2. 先頭 `limit` 件だけを返す（余分な 1 件は判定専用で捨てる）
//! 3. `has_more` なら、返却する最後の行のキーを次カーソルにする
//!
//! 次カーソルは捨てた行ではなく返却した最後の行から作る。
//! 次ページの境界条件（`id < cursor.i`）と組み合わせて、境界の行を二度返さない。

use super::{Cursor, KeysetItem, PageLimit};

/// 1 ページ分の一覧
///
/// # 不変条件
///
/// - `next_cursor` があるのは `has_more` のときだけ
/// - `items.len() <= limit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    items:       Vec<T>,
    next_cursor: Option<String>,
}

impl<T: KeysetItem> Page<T> {
    /// 並び順どおりに `limit + 1` 件まで取得した行からページを作る
    pub fn assemble(mut rows: Vec<T>, limit: PageLimit) -> Self {
        let limit = limit.as_usize();
        let has_more = rows.len() > limit;
        rows.truncate(limit);

        let next_cursor = if has_more {
            rows.last()
                .map(|last| Cursor::from(last.ordering_key()).encode())
        } else {
            None
        };

        Self {
            items: rows,
            next_cursor,
        }
    }
}

impl<T> Page<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }

    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }

    pub fn into_parts(self) -> (Vec<T>, Option<String>) {
        (self.items, self.next_cursor)
    }

    /// 要素を変換する（レスポンス DTO への詰め替えなど）
    ///
    /// カーソルは変換前の行から作られたものを引き継ぐ。
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items:       self.items.into_iter().map(f).collect(),
            next_cursor: self.next_cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use uuid::Uuid;

    use super::*;
    use crate::pagination::OrderingKey;

    /// 新しい順に並んだ n 件
    fn fetched(n: usize) -> Vec<OrderingKey> {
        let t0 = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        (0..n)
            .rev()
            .map(|i| OrderingKey::new(t0 + Duration::seconds(i as i64), Uuid::from_u128(i as u128)))
            .collect()
    }

    #[rstest]
    #[case(0, 1)]
    #[case(0, 10)]
    #[case(3, 10)]
    #[case(10, 10)]
    #[case(11, 10)]
    #[case(2, 1)]
    fn test_件数はlimitを超えない(#[case] fetched_len: usize, #[case] limit: i64) {
        let limit = PageLimit::new(limit).unwrap();

        let page = Page::assemble(fetched(fetched_len), limit);

        assert!(page.items().len() <= limit.as_usize());
        assert_eq!(page.has_more(), page.next_cursor().is_some());
    }

    #[test]
    fn test_limit_plus_1件ならhas_moreで次カーソルは返却した最後の行() {
        let rows = fetched(3);
        let limit = PageLimit::new(2).unwrap();

        let page = Page::assemble(rows.clone(), limit);

        assert_eq!(page.items(), &rows[..2]);
        assert!(page.has_more());
        assert_eq!(
            page.next_cursor().map(str::to_string),
            Some(Cursor::from(rows[1]).encode())
        );
    }

    #[test]
    fn test_limit件ちょうどなら次ページなし() {
        let rows = fetched(2);
        let limit = PageLimit::new(2).unwrap();

        let page = Page::assemble(rows.clone(), limit);

        assert_eq!(page.items(), rows.as_slice());
        assert!(!page.has_more());
        assert_eq!(page.next_cursor(), None);
    }

    #[test]
    fn test_空の結果は空ページ() {
        let page = Page::assemble(Vec::<OrderingKey>::new(), PageLimit::default());

        assert!(page.items().is_empty());
        assert!(!page.has_more());
    }

    #[test]
    fn test_mapは次カーソルを引き継ぐ() {
        let page = Page::assemble(fetched(3), PageLimit::new(1).unwrap());
        let cursor = page.next_cursor().map(str::to_string);

        let mapped = page.map(|key| key.id());

        assert_eq!(mapped.items(), &[Uuid::from_u128(2)]);
        assert_eq!(mapped.next_cursor().map(str::to_string), cursor);
    }
}
