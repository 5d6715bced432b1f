//! ページサイズ

use crate::DomainError;

/// 1 ページあたりの件数（1〜100）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageLimit(u32);

impl PageLimit {
    /// 上限
    pub const MAX: u32 = 100;
    /// `limit` 未指定時の件数
    pub const DEFAULT: u32 = 20;

    pub fn new(value: i64) -> Result<Self, DomainError> {
        if !(1..=i64::from(Self::MAX)).contains(&value) {
            return Err(DomainError::Validation(format!(
                "limit は 1 以上 {} 以下である必要があります",
                Self::MAX
            )));
        }
        // 範囲チェック済みのため u32 に収まる
        Ok(Self(value as u32))
    }

    /// 未指定なら [`DEFAULT`](Self::DEFAULT) を使う
    pub fn from_query(value: Option<i64>) -> Result<Self, DomainError> {
        Self::new(value.unwrap_or(i64::from(Self::DEFAULT)))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl Default for PageLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
