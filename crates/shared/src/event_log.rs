//! # ビジネスイベントログ
//!
//! [`log_business_event!`] マクロとフィールド値の定数。
//!
//! `event.kind = "business_event"` マーカーが自動付与されるため、JSON ログを
//! `jq 'select(.["event.kind"] == "business_event")'` で抽出できる。
//!
//! フィールド名はドット記法（`event.category`、`error.kind`）。

/// ビジネスイベントを `info` レベルの構造化ログとして出力する
///
/// ## 慣例フィールド
///
/// - `event.category`: [`event::category`]
/// - `event.action`: [`event::action`]
/// - `event.entity_type`: [`event::entity_type`]
/// - `event.entity_id`: エンティティ ID
/// - `event.result`: [`event::result`]
///
/// ```
/// use gakuen_shared::{event_log::event, log_business_event};
///
/// log_business_event!(
///     event.category = event::category::ORGANIZATION,
///     event.action = event::action::DEPARTMENT_CREATED,
///     event.entity_type = event::entity_type::DEPARTMENT,
///     event.entity_id = "0190a5b2-7c4e-7d10-8a3b-5f6e7d8c9b0a",
///     event.result = event::result::SUCCESS,
///     "学科を作成"
/// );
/// ```
#[macro_export]
macro_rules! log_business_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "business_event",
            $($args)*
        )
    };
}

/// イベントフィールドの定数
pub mod event {
    pub mod category {
        /// 学科・科目
        pub const ORGANIZATION: &str = "organization";
        /// クラス運営（課題・出欠）
        pub const CLASSROOM: &str = "classroom";
    }

    pub mod action {
        pub const DEPARTMENT_CREATED: &str = "department.created";
        pub const COURSE_CREATED: &str = "course.created";
        pub const ASSIGNMENT_CREATED: &str = "assignment.created";
    }

    pub mod entity_type {
        pub const DEPARTMENT: &str = "department";
        pub const COURSE: &str = "course";
        pub const ASSIGNMENT: &str = "assignment";
    }

    pub mod result {
        pub const SUCCESS: &str = "success";
        pub const FAILURE: &str = "failure";
    }
}

/// エラーコンテキストフィールドの定数
///
/// `tracing::error!` に `error.category` と `error.kind` を付けて使う。
pub mod error {
    pub mod category {
        pub const INFRASTRUCTURE: &str = "infrastructure";
        /// クライアント入力（カーソル・limit など）
        pub const CLIENT_INPUT: &str = "client_input";
    }

    pub mod kind {
        pub const DATABASE: &str = "database";
        pub const INVALID_CURSOR: &str = "invalid_cursor";
    }
}
