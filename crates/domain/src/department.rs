//! # 学科
//!
//! 科目（[`Course`](crate::course::Course)）をまとめる組織単位。
//! 一覧は作成日時の新しい順に返す。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use gakuen_domain::department::{
//!     Department,
//!     DepartmentDescription,
//!     DepartmentId,
//!     DepartmentName,
//! };
//!
//! let department = Department::new(
//!     DepartmentId::new(),
//!     DepartmentName::new("情報工学科")?,
//!     Some(DepartmentDescription::new("ソフトウェアとハードウェアの基礎を学ぶ")?),
//!     chrono::Utc::now(),
//! );
//!
//! assert_eq!(department.name().as_str(), "情報工学科");
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};

define_uuid_id! {
    /// 学科の一意識別子
    pub struct DepartmentId;
}

define_validated_string! {
    /// 学科名（1〜100 文字）
    pub struct DepartmentName {
        label: "学科名",
        max_length: 100,
    }
}

define_validated_string! {
    /// 学科の説明（1〜500 文字）
    pub struct DepartmentDescription {
        label: "学科の説明",
        max_length: 500,
    }
}

/// 学科エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    id:          DepartmentId,
    name:        DepartmentName,
    description: Option<DepartmentDescription>,
    created_at:  DateTime<Utc>,
}

impl Department {
    /// 新しい学科を作成する
    pub fn new(
        id: DepartmentId,
        name: DepartmentName,
        description: Option<DepartmentDescription>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            created_at: now,
        }
    }

    /// データベースから学科を復元する
    pub fn from_db(
        id: DepartmentId,
        name: DepartmentName,
        description: Option<DepartmentDescription>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            created_at,
        }
    }

    pub fn id(&self) -> &DepartmentId {
        &self.id
    }

    pub fn name(&self) -> &DepartmentName {
        &self.name
    }

    pub fn description(&self) -> Option<&DepartmentDescription> {
        self.description.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl_keyset_item!(Department);
