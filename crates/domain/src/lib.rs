//! # Gakuen ドメイン層
//!
//! 学務管理（学科・科目・クラス・課題・出欠・通知）のドメインモデルと、
//! すべての一覧 API が共有するキーセットページネーションを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の ID と作成日時を持つ不変スナップショット
//! - **値オブジェクト**: 生成時にバリデーションを行う Newtype
//! - **ページネーション**: カーソルの符号化、境界条件、ページ組み立てを
//!   エンティティ非依存の汎用コンポーネントとして提供
//!
//! ## 依存関係の方向
//!
//! ```text
//! core-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）に依存しない。
//!
//! ## モジュール構成
//!
//! - [`pagination`] - カーソルコーデック、キーセット境界、ページ組み立て
//! - [`department`] / [`course`] / [`class`] / [`student`] - 組織と履修
//! - [`assignment`] / [`attendance`] / [`notification`] - クラス運営
//! - [`clock`] - 現在時刻の抽象化
//! - [`error`] - ドメインエラー
//!
//! ## 使用例
//!
//! ```rust
//! use gakuen_domain::{DomainError, department::DepartmentName};
//!
//! let name = DepartmentName::new("情報工学科").unwrap();
//! assert_eq!(name.as_str(), "情報工学科");
//!
//! let error = DepartmentName::new("").unwrap_err();
//! assert!(matches!(error, DomainError::Validation(_)));
//! ```

#[macro_use]
mod macros;

pub mod assignment;
pub mod attendance;
pub mod class;
pub mod clock;
pub mod course;
pub mod department;
pub mod error;
pub mod notification;
pub mod pagination;
pub mod student;

pub use error::DomainError;
