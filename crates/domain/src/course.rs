//! # 科目
//!
//! 学科に属する授業科目。クラス（[`SchoolClass`](crate::class::SchoolClass)）は
//! 科目ごとに開講される。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DomainError, department::DepartmentId};

define_uuid_id! {
    /// 科目の一意識別子
    pub struct CourseId;
}

define_validated_string! {
    /// 科目コード（例: `CS101`）
    pub struct CourseCode {
        label: "科目コード",
        max_length: 20,
    }
}

define_validated_string! {
    /// 科目名
    pub struct CourseTitle {
        label: "科目名",
        max_length: 200,
    }
}

/// 単位数（0〜20）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub struct Credits(i16);

impl Credits {
    pub const MAX: i16 = 20;

    pub fn new(value: i16) -> Result<Self, DomainError> {
        if !(0..=Self::MAX).contains(&value) {
            return Err(DomainError::Validation(format!(
                "単位数は 0 以上 {} 以下である必要があります",
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> i16 {
        self.0
    }
}

/// 科目エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id:            CourseId,
    department_id: DepartmentId,
    code:          CourseCode,
    title:         CourseTitle,
    credits:       Credits,
    created_at:    DateTime<Utc>,
}

impl Course {
    pub fn new(
        id: CourseId,
        department_id: DepartmentId,
        code: CourseCode,
        title: CourseTitle,
        credits: Credits,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            department_id,
            code,
            title,
            credits,
            created_at: now,
        }
    }

    /// データベースから科目を復元する
    pub fn from_db(
        id: CourseId,
        department_id: DepartmentId,
        code: CourseCode,
        title: CourseTitle,
        credits: Credits,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self::new(id, department_id, code, title, credits, created_at)
    }

    pub fn id(&self) -> &CourseId {
        &self.id
    }

    pub fn department_id(&self) -> &DepartmentId {
        &self.department_id
    }

    pub fn code(&self) -> &CourseCode {
        &self.code
    }

    pub fn title(&self) -> &CourseTitle {
        &self.title
    }

    pub fn credits(&self) -> Credits {
        self.credits
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl_keyset_item!(Course);
