//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//! | `NotFound` | 404 Not Found | 参照先エンティティが存在しない |
//!
//! カーソルの不正は [`InvalidCursor`](crate::pagination::InvalidCursor) で別に表現する。
//! 入力検証とは別の固定コードをクライアントに返すため。
//!
//! ## 使用例
//!
//! ```rust
//! use gakuen_domain::DomainError;
//!
//! fn find_course(id: &str) -> Result<(), DomainError> {
//!     Err(DomainError::NotFound {
//!         entity_type: "Course",
//!         id:          id.to_string(),
//!     })
//! }
//!
//! assert!(find_course("c-1").is_err());
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// - 必須フィールドが未入力
    /// - 文字数・数値範囲の超過
    /// - ページサイズが範囲外
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// エンティティが見つからない
    ///
    /// 外部キーで参照したエンティティが存在しない場合に使用する。
    #[error("{entity_type} が見つかりません: {id}")]
    NotFound {
        /// エンティティの種類（"Department", "Course" など）
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_not_foundのメッセージにエンティティ種別とidを含む() {
        let error = DomainError::NotFound {
            entity_type: "Department",
            id:          "d-1".to_string(),
        };

        assert_eq!(error.to_string(), "Department が見つかりません: d-1");
    }

    #[test]
    fn test_validationのメッセージに詳細を含む() {
        let error = DomainError::Validation("学科名は必須です".to_string());

        assert_eq!(error.to_string(), "バリデーションエラー: 学科名は必須です");
    }
}
