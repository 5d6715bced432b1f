//! # 単一リソースのレスポンスエンベロープ
//!
//! 作成系 API の統一レスポンス形式 `{ "data": T }`。
//! 一覧系は [`PaginatedResponse`](crate::PaginatedResponse) を使う。

use serde::{Deserialize, Serialize};

/// `{ "data": T }` 形式のレスポンス
///
/// ```
/// use gakuen_shared::ApiResponse;
///
/// let response = ApiResponse::new("情報工学科");
/// assert_eq!(response.data, "情報工学科");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_dataキーで包んでシリアライズする() {
        let response = ApiResponse::new(serde_json::json!({ "name": "法学科" }));

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "data": { "name": "法学科" } }));
    }

    #[test]
    fn test_クライアント側でデシリアライズできる() {
        let response: ApiResponse<Vec<u8>> = serde_json::from_str(r#"{"data": [1, 2]}"#).unwrap();

        assert_eq!(response.data, vec![1, 2]);
    }
}
