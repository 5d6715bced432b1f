//! # PostgreSQL データベース接続管理
//!
//! 接続プールの作成、マイグレーション、疎通確認。
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use gakuen_infra::db;
//!
//! let pool = db::create_pool("postgres://localhost/gakuen", 10).await?;
//! db::run_migrations(&pool).await?;
//! ```

use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::error::InfraError;

/// 接続取得のタイムアウト
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// PostgreSQL 接続プールを作成する
///
/// アプリケーション起動時に一度だけ呼び出し、プールを全リポジトリで共有する。
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, InfraError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// 埋め込みマイグレーションを適用する
///
/// 適用済みのものはスキップされる。sqlx が advisory lock を取るため、
/// 複数プロセスから同時に呼んでも安全。
pub async fn run_migrations(pool: &PgPool) -> Result<(), InfraError> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}

/// DB に疎通できるか確認する（readiness 用）
#[tracing::instrument(skip_all, level = "debug")]
pub async fn ping(pool: &PgPool) -> Result<(), InfraError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
