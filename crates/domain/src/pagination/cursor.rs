//! # カーソルコーデック
//!
//! ページ位置 `(created_at, id)` と opaque なトークン文字列を相互変換する。
//!
//! トークンは `{"t": "<RFC 3339>", "i": "<UUID>"}` の JSON を
//! パディングなし URL-safe base64 でエンコードしたもの。
//! クエリパラメータにそのまま埋め込める。

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use super::OrderingKey;

/// カーソル不正時にクライアントへ返す固定コード
pub const INVALID_CURSOR_CODE: &str = "InvalidCursor";

/// カーソルトークンを復号できない理由
///
/// どの理由でもクライアントには [`INVALID_CURSOR_CODE`] として返す。
/// 理由の区別はログ用。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCursor {
    #[error("カーソルが base64url として不正です")]
    Encoding,

    #[error("カーソルのペイロードが不正です")]
    Payload,

    #[error("カーソルに {0} フィールドがありません")]
    MissingField(&'static str),
}

impl InvalidCursor {
    pub fn code(&self) -> &'static str {
        INVALID_CURSOR_CODE
    }
}

/// 前ページで最後に返した行の位置
///
/// リクエストごとに生成・破棄され、永続化されない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    position_timestamp: DateTime<Utc>,
    position_id:        Uuid,
}

/// 復号時のペイロード
///
/// 両フィールドを `Option` で受け、構造の不正と欠落を区別する。
#[derive(Deserialize)]
struct CursorPayload {
    #[serde(rename = "t", default)]
    position_timestamp: Option<DateTime<Utc>>,
    #[serde(rename = "i", default)]
    position_id:        Option<Uuid>,
}

impl Cursor {
    pub fn new(position_timestamp: DateTime<Utc>, position_id: Uuid) -> Self {
        Self {
            position_timestamp,
            position_id,
        }
    }

    pub fn ordering_key(&self) -> OrderingKey {
        OrderingKey::new(self.position_timestamp, self.position_id)
    }

    /// opaque トークンにエンコードする
    pub fn encode(&self) -> String {
        let payload = serde_json::json!({
            "t": self
                .position_timestamp
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
            "i": self.position_id.to_string(),
        });
        URL_SAFE_NO_PAD.encode(payload.to_string())
    }

    /// opaque トークンを復号する
    ///
    /// - `None` / 空文字 / 空白のみ → `Ok(None)`（先頭ページから）
    /// - 復号できる → `Ok(Some(cursor))`
    /// - base64url 不正、JSON 不正、フィールド欠落 → `Err(InvalidCursor)`
    pub fn decode(token: Option<&str>) -> Result<Option<Self>, InvalidCursor> {
        let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
            return Ok(None);
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|_| InvalidCursor::Encoding)?;
        let payload: CursorPayload =
            serde_json::from_slice(&bytes).map_err(|_| InvalidCursor::Payload)?;

        let position_timestamp = payload
            .position_timestamp
            .ok_or(InvalidCursor::MissingField("t"))?;
        let position_id = payload.position_id.ok_or(InvalidCursor::MissingField("i"))?;

        Ok(Some(Self::new(position_timestamp, position_id)))
    }
}

impl From<OrderingKey> for Cursor {
    fn from(key: OrderingKey) -> Self {
        Self::new(key.created_at(), key.id())
    }
}
