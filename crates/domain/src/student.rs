//! # 学生
//!
//! 氏名は個人情報のため `Debug` 出力でマスクする。

use chrono::{DateTime, Utc};

define_uuid_id! {
    /// 学生の一意識別子
    pub struct StudentId;
}

define_validated_string! {
    /// 学籍番号
    pub struct StudentNumber {
        label: "学籍番号",
        max_length: 20,
    }
}

define_validated_string! {
    /// 学生の氏名（PII）
    pub struct StudentName {
        label: "氏名",
        max_length: 100,
        pii: true,
    }
}

/// 学生エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id:             StudentId,
    student_number: StudentNumber,
    name:           StudentName,
    created_at:     DateTime<Utc>,
}

impl Student {
    pub fn new(
        id: StudentId,
        student_number: StudentNumber,
        name: StudentName,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            student_number,
            name,
            created_at: now,
        }
    }

    pub fn from_db(
        id: StudentId,
        student_number: StudentNumber,
        name: StudentName,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self::new(id, student_number, name, created_at)
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn student_number(&self) -> &StudentNumber {
        &self.student_number
    }

    pub fn name(&self) -> &StudentName {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl_keyset_item!(Student);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_学生のdebug出力は氏名をマスクする() {
        let student = Student::new(
            StudentId::new(),
            StudentNumber::new("S2026001").unwrap(),
            StudentName::new("山田花子").unwrap(),
            Utc::now(),
        );

        let debug = format!("{student:?}");

        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("山田花子"));
        assert!(debug.contains("S2026001"));
    }
}
