//! # 出欠
//!
//! 授業ごとの出欠記録。学生側（出欠履歴）とクラス側（出欠一覧）の
//! 両方から一覧される。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::{class::ClassId, student::StudentId};

define_uuid_id! {
    /// 出欠記録の一意識別子
    pub struct AttendanceRecordId;
}

/// 出欠状況
///
/// `attendance_records.status` カラムに snake_case で格納される。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AttendanceStatus {
    /// 出席
    Present,
    /// 欠席
    Absent,
    /// 遅刻
    Late,
    /// 公欠
    Excused,
}

/// 出欠記録エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    id:         AttendanceRecordId,
    class_id:   ClassId,
    student_id: StudentId,
    status:     AttendanceStatus,
    created_at: DateTime<Utc>,
}

impl AttendanceRecord {
    pub fn new(
        id: AttendanceRecordId,
        class_id: ClassId,
        student_id: StudentId,
        status: AttendanceStatus,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            class_id,
            student_id,
            status,
            created_at: now,
        }
    }

    pub fn from_db(
        id: AttendanceRecordId,
        class_id: ClassId,
        student_id: StudentId,
        status: AttendanceStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self::new(id, class_id, student_id, status, created_at)
    }

    pub fn id(&self) -> &AttendanceRecordId {
        &self.id
    }

    pub fn class_id(&self) -> &ClassId {
        &self.class_id
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn status(&self) -> AttendanceStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl_keyset_item!(AttendanceRecord);
