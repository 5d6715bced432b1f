//! # Clock（時刻プロバイダ）
//!
//! エンティティの `created_at` はユースケースが Clock から取得する。
//! テストでは固定時刻や単調増加する時刻を注入し、一覧の並び順を決定的にする。

#[cfg(any(test, feature = "test-support"))]
use std::sync::Mutex;

use chrono::{DateTime, SubsecRound, Utc};

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
   fn now(&self) -> DateTime<Utc>;
}

/// 実際のシステム時刻を返す実装
///
/// PostgreSQL の `TIMESTAMPTZ` に合わせてマイクロ秒に切り捨てる。
/// 保存前後で `created_at` が変わると、作成直後の値から作ったカーソルが
/// DB 上の行と一致しなくなる。
pub struct SystemClock;

impl Clock for SystemClock {
   fn now(&self) -> DateTime<Utc> {
      Utc::now().trunc_subsecs(6)
   }
}

/// 固定時刻を返すテスト用実装
#[cfg(any(test, feature = "test-support"))]
pub struct FixedClock {
   now: DateTime<Utc>,
}

#[cfg(any(test, feature = "test-support"))]
impl FixedClock {
   pub fn new(now: DateTime<Utc>) -> Self {
      Self { now }
   }
}

#[cfg(any(test, feature = "test-support"))]
impl Clock for FixedClock {
   fn now(&self) -> DateTime<Utc> {
      self.now
   }
}

/// 呼び出すたびに一定間隔で進む時刻を返すテスト用実装
///
/// 「順番に作成した N 件」を表現するために使う。
#[cfg(any(test, feature = "test-support"))]
pub struct SteppingClock {
   next: Mutex<DateTime<Utc>>,
   step: chrono::Duration,
}

#[cfg(any(test, feature = "test-support"))]
impl SteppingClock {
   pub fn new(start: DateTime<Utc>, step: chrono::Duration) -> Self {
      Self {
         next: Mutex::new(start),
         step,
      }
   }
}

#[cfg(any(test, feature = "test-support"))]
impl Clock for SteppingClock {
   fn now(&self) -> DateTime<Utc> {
      let mut next = self.next.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
      let now = *next;
      *next = now + self.step;
      now
   }
}
