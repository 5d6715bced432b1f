//! # Core Service 設定
//!
//! 環境変数から Core Service サーバーの設定を読み込む。
//!
//! | 変数 | 必須 | 既定値 |
//! |------|------|--------|
//! | `CORE_HOST` | - | `0.0.0.0` |
//! | `CORE_PORT` | ✓ | - |
//! | `DATABASE_URL` | ✓ | - |
//! | `DB_MAX_CONNECTIONS` | - | `10` |
//! | `LOG_FORMAT` | - | `pretty` |

use std::env;

use gakuen_shared::observability::LogFormat;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// 設定の読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} が設定されていません（.env を確認してください）")]
    Missing(&'static str),

    #[error("{var} の値が不正です: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Core Service サーバーの設定
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// データベース接続 URL
    pub database_url: String,
    /// コネクションプールの最大接続数
    pub db_max_connections: u32,
    pub log_format: LogFormat,
}

impl CoreConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |var: &'static str| lookup(var).ok_or(ConfigError::Missing(var));

        let port = parse("CORE_PORT", require("CORE_PORT")?)?;
        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(value) => parse("DB_MAX_CONNECTIONS", value)?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        Ok(Self {
            host: lookup("CORE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: require("DATABASE_URL")?,
            db_max_connections,
            log_format: lookup("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
        })
    }

    /// `host:port` 形式のバインドアドレス
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}
