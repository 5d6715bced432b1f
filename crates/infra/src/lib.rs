//! # Gakuen インフラ層
//!
//! PostgreSQL への接続とリポジトリ実装。
//!
//! ## 依存関係
//!
//! ```text
//! core-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - 接続プール、マイグレーション、疎通確認
//! - [`keyset`] - キーセット条件の SQL 化
//! - [`repository`] - リポジトリトレイトと PostgreSQL 実装
//! - [`error`] - インフラ層エラー定義
//! - `mock` - インメモリ実装（`test-utils` feature）

pub mod db;
pub mod error;
pub mod keyset;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
