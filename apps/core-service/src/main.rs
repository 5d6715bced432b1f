//! # Core Service サーバー
//!
//! 学務データ（学科・科目・クラス・課題・出欠・通知）の一覧と登録を提供する。
//!
//! ## 起動方法
//!
//! ```bash
//! CORE_PORT=13001 DATABASE_URL=postgres://... cargo run -p gakuen-core-service
//! ```
//!
//! 環境変数は [`gakuen_core_service::config`] を参照。

use std::sync::Arc;

use anyhow::Context as _;
use axum::{Router, routing::get};
use gakuen_core_service::{
   app_builder::{Repositories, build_app},
   config::CoreConfig,
   handler::{ReadinessState, readiness_check},
};
use gakuen_domain::clock::SystemClock;
use gakuen_infra::db;
use gakuen_shared::{
   canonical_log::CanonicalLogLineLayer,
   observability::{TracingConfig, init_tracing},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在しなくてもエラーにしない）
   dotenvy::dotenv().ok();

   let config = CoreConfig::from_env().context("設定の読み込みに失敗しました")?;

   init_tracing(&TracingConfig::new("core-service", config.log_format));

   tracing::info!(
      "Core Service サーバーを起動します: {}",
      config.bind_address()
   );

   let pool = db::create_pool(&config.database_url, config.db_max_connections)
      .await
      .context("データベース接続に失敗しました")?;
   db::run_migrations(&pool)
      .await
      .context("マイグレーションの適用に失敗しました")?;
   tracing::info!("データベースに接続しました");

   let readiness_state = Arc::new(ReadinessState { pool: pool.clone() });

   let app = build_app(Repositories::postgres(pool), Arc::new(SystemClock))
      .merge(
         Router::new()
            .route("/health/ready", get(readiness_check))
            .with_state(readiness_state),
      )
      .layer(CanonicalLogLineLayer)
      .layer(TraceLayer::new_for_http());

   let listener = TcpListener::bind(config.bind_address())
      .await
      .with_context(|| format!("{} にバインドできません", config.bind_address()))?;
   tracing::info!("Core Service サーバーが起動しました: {}", config.bind_address());

   axum::serve(listener, app).await?;

   Ok(())
}
