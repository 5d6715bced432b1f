//! # テスト用インメモリリポジトリ
//!
//! ユースケース・ハンドラのテストで使う。`test-utils` feature で他クレートに公開する。
//!
//! ```toml
//! [dev-dependencies]
//! gakuen-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! 一覧系は [`KeysetQuery::apply`] で境界条件・並び順・取得件数を適用するため、
//! PostgreSQL 実装と同じ結果を返す。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gakuen_domain::{
   assignment::Assignment,
   attendance::AttendanceRecord,
   class::{ClassId, Enrollment, SchoolClass, TeacherId},
   course::Course,
   department::{Department, DepartmentId},
   notification::{Notification, RecipientId},
   pagination::KeysetQuery,
   student::{Student, StudentId},
};

use crate::{
   error::InfraError,
   repository::{
      AssignmentRepository,
      AttendanceRepository,
      ClassRepository,
      CourseRepository,
      DepartmentRepository,
      NotificationRepository,
      StudentRepository,
   },
};

// ===== MockDepartmentRepository =====

#[derive(Clone, Default)]
pub struct MockDepartmentRepository {
   departments: Arc<Mutex<Vec<Department>>>,
}

impl MockDepartmentRepository {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn add(&self, department: Department) {
      self.departments.lock().unwrap().push(department);
   }

   pub fn all(&self) -> Vec<Department> {
      self.departments.lock().unwrap().clone()
   }
}

#[async_trait]
impl DepartmentRepository for MockDepartmentRepository {
   async fn find_page(&self, query: &KeysetQuery) -> Result<Vec<Department>, InfraError> {
      Ok(query.apply(self.all()))
   }

   async fn exists(&self, id: &DepartmentId) -> Result<bool, InfraError> {
      Ok(self.departments.lock().unwrap().iter().any(|d| d.id() == id))
   }

   async fn insert(&self, department: &Department) -> Result<(), InfraError> {
      self.add(department.clone());
      Ok(())
   }
}

// ===== MockCourseRepository =====

#[derive(Clone, Default)]
pub struct MockCourseRepository {
   courses: Arc<Mutex<Vec<Course>>>,
}

impl MockCourseRepository {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn add(&self, course: Course) {
      self.courses.lock().unwrap().push(course);
   }

   pub fn all(&self) -> Vec<Course> {
      self.courses.lock().unwrap().clone()
   }
}

#[async_trait]
impl CourseRepository for MockCourseRepository {
   async fn find_page(
      &self,
      department_id: Option<&DepartmentId>,
      query: &KeysetQuery,
   ) -> Result<Vec<Course>, InfraError> {
      let courses = self
         .all()
         .into_iter()
         .filter(|c| department_id.is_none_or(|id| c.department_id() == id));
      Ok(query.apply(courses))
   }

   async fn insert(&self, course: &Course) -> Result<(), InfraError> {
      self.add(course.clone());
      Ok(())
   }
}

// ===== MockClassRepository =====

#[derive(Clone, Default)]
pub struct MockClassRepository {
   classes:     Arc<Mutex<Vec<SchoolClass>>>,
   enrollments: Arc<Mutex<Vec<Enrollment>>>,
}

impl MockClassRepository {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn add(&self, class: SchoolClass) {
      self.classes.lock().unwrap().push(class);
   }

   pub fn enroll(&self, enrollment: Enrollment) {
      self.enrollments.lock().unwrap().push(enrollment);
   }
}

#[async_trait]
impl ClassRepository for MockClassRepository {
   async fn find_page_by_teacher(
      &self,
      teacher_id: &TeacherId,
      query: &KeysetQuery,
   ) -> Result<Vec<SchoolClass>, InfraError> {
      let classes = self.classes.lock().unwrap().clone();
      Ok(query.apply(classes.into_iter().filter(|c| c.teacher_id() == teacher_id)))
   }

   async fn find_page_by_student(
      &self,
      student_id: &StudentId,
      query: &KeysetQuery,
   ) -> Result<Vec<SchoolClass>, InfraError> {
      let enrolled: Vec<ClassId> = self
         .enrollments
         .lock()
         .unwrap()
         .iter()
         .filter(|e| e.student_id() == student_id)
         .map(|e| *e.class_id())
         .collect();
      let classes = self.classes.lock().unwrap().clone();
      Ok(query.apply(classes.into_iter().filter(|c| enrolled.contains(c.id()))))
   }

   async fn exists(&self, id: &ClassId) -> Result<bool, InfraError> {
      Ok(self.classes.lock().unwrap().iter().any(|c| c.id() == id))
   }
}

// ===== MockStudentRepository =====

#[derive(Clone, Default)]
pub struct MockStudentRepository {
   students: Arc<Mutex<Vec<Student>>>,
}

impl MockStudentRepository {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn add(&self, student: Student) {
      self.students.lock().unwrap().push(student);
   }
}

#[async_trait]
impl StudentRepository for MockStudentRepository {
   async fn find_page(&self, query: &KeysetQuery) -> Result<Vec<Student>, InfraError> {
      Ok(query.apply(self.students.lock().unwrap().clone()))
   }

   async fn exists(&self, id: &StudentId) -> Result<bool, InfraError> {
      Ok(self.students.lock().unwrap().iter().any(|s| s.id() == id))
   }
}

// ===== MockAssignmentRepository =====

#[derive(Clone, Default)]
pub struct MockAssignmentRepository {
   assignments: Arc<Mutex<Vec<Assignment>>>,
}

impl MockAssignmentRepository {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn add(&self, assignment: Assignment) {
      self.assignments.lock().unwrap().push(assignment);
   }

   pub fn all(&self) -> Vec<Assignment> {
      self.assignments.lock().unwrap().clone()
   }
}

#[async_trait]
impl AssignmentRepository for MockAssignmentRepository {
   async fn find_page_by_class(
      &self,
      class_id: &ClassId,
      query: &KeysetQuery,
   ) -> Result<Vec<Assignment>, InfraError> {
      Ok(query.apply(self.all().into_iter().filter(|a| a.class_id() == class_id)))
   }

   async fn insert(&self, assignment: &Assignment) -> Result<(), InfraError> {
      self.add(assignment.clone());
      Ok(())
   }
}

// ===== MockAttendanceRepository =====

#[derive(Clone, Default)]
pub struct MockAttendanceRepository {
   records: Arc<Mutex<Vec<AttendanceRecord>>>,
}

impl MockAttendanceRepository {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn add(&self, record: AttendanceRecord) {
      self.records.lock().unwrap().push(record);
   }
}

#[async_trait]
impl AttendanceRepository for MockAttendanceRepository {
   async fn find_page_by_student(
      &self,
      student_id: &StudentId,
      query: &KeysetQuery,
   ) -> Result<Vec<AttendanceRecord>, InfraError> {
      let records = self.records.lock().unwrap().clone();
      Ok(query.apply(records.into_iter().filter(|r| r.student_id() == student_id)))
   }

   async fn find_page_by_class(
      &self,
      class_id: &ClassId,
      query: &KeysetQuery,
   ) -> Result<Vec<AttendanceRecord>, InfraError> {
      let records = self.records.lock().unwrap().clone();
      Ok(query.apply(records.into_iter().filter(|r| r.class_id() == class_id)))
   }
}

// ===== MockNotificationRepository =====

#[derive(Clone, Default)]
pub struct MockNotificationRepository {
   notifications: Arc<Mutex<Vec<Notification>>>,
}

impl MockNotificationRepository {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn add(&self, notification: Notification) {
      self.notifications.lock().unwrap().push(notification);
   }
}

#[async_trait]
impl NotificationRepository for MockNotificationRepository {
   async fn find_page_by_recipient(
      &self,
      recipient_id: &RecipientId,
      query: &KeysetQuery,
   ) -> Result<Vec<Notification>, InfraError> {
      let notifications = self.notifications.lock().unwrap().clone();
      Ok(query.apply(
         notifications
            .into_iter()
            .filter(|n| n.recipient_id() == recipient_id),
      ))
   }
}

// ===== UnavailableRepository =====

/// すべての操作が DB エラー相当で失敗するリポジトリ
///
/// ストア障害時に 500 を返すことの確認に使う。
#[derive(Clone, Copy, Default)]
pub struct UnavailableRepository;

fn unavailable<T>() -> Result<T, InfraError> {
   Err(InfraError::unexpected("データベースに接続できません"))
}

#[async_trait]
impl DepartmentRepository for UnavailableRepository {
   async fn find_page(&self, _query: &KeysetQuery) -> Result<Vec<Department>, InfraError> {
      unavailable()
   }

   async fn exists(&self, _id: &DepartmentId) -> Result<bool, InfraError> {
      unavailable()
   }

   async fn insert(&self, _department: &Department) -> Result<(), InfraError> {
      unavailable()
   }
}

#[async_trait]
impl StudentRepository for UnavailableRepository {
   async fn find_page(&self, _query: &KeysetQuery) -> Result<Vec<Student>, InfraError> {
      unavailable()
   }

   async fn exists(&self, _id: &StudentId) -> Result<bool, InfraError> {
      unavailable()
   }
}
