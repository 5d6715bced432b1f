//! # クラス
//!
//! 科目ごとに開講される授業クラスと、学生の履修登録。
//!
//! 教員は職員ユーザーとして別システムで管理されるため、ここでは
//! [`TeacherId`] として ID だけを保持する。

use chrono::{DateTime, Utc};

use crate::{course::CourseId, student::StudentId};

define_uuid_id! {
    /// クラスの一意識別子
    pub struct ClassId;
}

define_uuid_id! {
    /// 担当教員の識別子
    pub struct TeacherId;
}

define_validated_string! {
    /// クラス名（例: `2026 前期 月曜 1 限`）
    pub struct ClassName {
        label: "クラス名",
        max_length: 100,
    }
}

/// クラスエンティティ
///
/// `Class` は予約語と紛らわしいため `SchoolClass` とする。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolClass {
    id:         ClassId,
    course_id:  CourseId,
    teacher_id: TeacherId,
    name:       ClassName,
    created_at: DateTime<Utc>,
}

impl SchoolClass {
    pub fn new(
        id: ClassId,
        course_id: CourseId,
        teacher_id: TeacherId,
        name: ClassName,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            course_id,
            teacher_id,
            name,
            created_at: now,
        }
    }

    /// データベースからクラスを復元する
    pub fn from_db(
        id: ClassId,
        course_id: CourseId,
        teacher_id: TeacherId,
        name: ClassName,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self::new(id, course_id, teacher_id, name, created_at)
    }

    pub fn id(&self) -> &ClassId {
        &self.id
    }

    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    pub fn teacher_id(&self) -> &TeacherId {
        &self.teacher_id
    }

    pub fn name(&self) -> &ClassName {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl_keyset_item!(SchoolClass);

/// 履修登録（学生 × クラス）
///
/// 学生から見たクラス一覧の取得元。一覧はクラス側の並び順キーで返すため、
/// この型自体はページネーション対象ではない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    class_id:   ClassId,
    student_id: StudentId,
    created_at: DateTime<Utc>,
}

impl Enrollment {
    pub fn new(class_id: ClassId, student_id: StudentId, now: DateTime<Utc>) -> Self {
        Self {
            class_id,
            student_id,
            created_at: now,
        }
    }

    pub fn class_id(&self) -> &ClassId {
        &self.class_id
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::pagination::{KeysetItem, OrderingKey};

    #[test]
    fn test_クラスの並び順キーはクラス自身の作成日時とid() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let class = SchoolClass::new(
            ClassId::new(),
            CourseId::new(),
            TeacherId::new(),
            ClassName::new("月曜 1 限").unwrap(),
            now,
        );

        assert_eq!(
            class.ordering_key(),
            OrderingKey::new(now, *class.id().as_uuid())
        );
    }

    #[test]
    fn test_履修登録はクラスと学生を結びつける() {
        let class_id = ClassId::new();
        let student_id = StudentId::new();

        let enrollment = Enrollment::new(class_id, student_id, Utc::now());

        assert_eq!(enrollment.class_id(), &class_id);
        assert_eq!(enrollment.student_id(), &student_id);
    }
}
