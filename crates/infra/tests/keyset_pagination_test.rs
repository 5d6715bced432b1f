//! PostgreSQL 上でのキーセットページネーション統合テスト
//!
//! `DATABASE_URL` が必要なため `#[ignore]` にしている。
//!
//! 実行方法:
//! ```bash
//! DATABASE_URL=postgres://localhost/gakuen_test \
//!   cargo test -p gakuen-infra --test keyset_pagination_test -- --ignored
//! ```

use chrono::{DateTime, Duration, Utc};
use gakuen_domain::{
    class::{ClassId, ClassName, SchoolClass, TeacherId},
    course::{Course, CourseCode, CourseId, CourseTitle, Credits},
    department::{Department, DepartmentId, DepartmentName},
    pagination::{KeysetItem, PageLimit, paginate},
    student::StudentId,
};
use gakuen_infra::repository::{
    ClassRepository,
    CourseRepository,
    DepartmentRepository,
    PostgresClassRepository,
    PostgresCourseRepository,
    PostgresDepartmentRepository,
};
use pretty_assertions::assert_eq;
use sqlx::PgPool;
use uuid::Uuid;

fn t0() -> DateTime<Utc> {
    DateTime::from_timestamp(1_767_225_600, 0).unwrap()
}

fn department(name: &str, created_at: DateTime<Utc>) -> Department {
    Department::new(
        DepartmentId::new(),
        DepartmentName::new(name).unwrap(),
        None,
        created_at,
    )
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_5件の学科をlimit2で3ページに分けて取得できる(pool: PgPool) {
    let repo = PostgresDepartmentRepository::new(pool);
    let mut inserted = Vec::new();
    for i in 0..5 {
        let d = department(&format!("学科{i}"), t0() + Duration::seconds(i));
        repo.insert(&d).await.unwrap();
        inserted.push(d);
    }
    let limit = PageLimit::new(2).unwrap();

    let mut sizes = Vec::new();
    let mut seen = Vec::new();
    let mut token: Option<String> = None;
    loop {
        let page = paginate(token.as_deref(), limit, |q| {
            let repo = &repo;
            async move { repo.find_page(&q).await }
        })
        .await
        .unwrap();
        sizes.push(page.items().len());
        let (items, next) = page.into_parts();
        seen.extend(items);
        match next {
            Some(next) => token = Some(next),
            None => break,
        }
    }

    assert_eq!(sizes, vec![2, 2, 1]);
    inserted.reverse();
    assert_eq!(seen, inserted);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_同一作成日時の行はid降順でページ境界をまたいでも重複しない(pool: PgPool) {
    let repo = PostgresDepartmentRepository::new(pool);
    let mut inserted = Vec::new();
    for i in 1..=3u128 {
        let d = Department::new(
            DepartmentId::from_uuid(Uuid::from_u128(i)),
            DepartmentName::new(format!("同時刻{i}")).unwrap(),
            None,
            t0(),
        );
        repo.insert(&d).await.unwrap();
        inserted.push(d);
    }
    let limit = PageLimit::new(1).unwrap();
    let repo = &repo;

    let first = paginate(None, limit, |q| async move { repo.find_page(&q).await })
        .await
        .unwrap();
    let second = paginate(first.next_cursor(), limit, |q| async move {
        repo.find_page(&q).await
    })
    .await
    .unwrap();

    assert_eq!(first.items()[0].id().as_uuid(), &Uuid::from_u128(3));
    assert_eq!(second.items()[0].id().as_uuid(), &Uuid::from_u128(2));
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_学科で絞り込んだ科目一覧(pool: PgPool) {
    let departments = PostgresDepartmentRepository::new(pool.clone());
    let courses = PostgresCourseRepository::new(pool);
    let math = department("数学科", t0());
    let law = department("法学科", t0());
    departments.insert(&math).await.unwrap();
    departments.insert(&law).await.unwrap();
    let course = |dept: &Department, code: &str, offset: i64| {
        Course::new(
            CourseId::new(),
            *dept.id(),
            CourseCode::new(code).unwrap(),
            CourseTitle::new(code).unwrap(),
            Credits::new(2).unwrap(),
            t0() + Duration::seconds(offset),
        )
    };
    courses.insert(&course(&math, "MA101", 1)).await.unwrap();
    courses.insert(&course(&law, "LA101", 2)).await.unwrap();
    courses.insert(&course(&math, "MA102", 3)).await.unwrap();

    let query = gakuen_domain::pagination::KeysetQuery::first_page(PageLimit::default());
    let rows = courses.find_page(Some(math.id()), &query).await.unwrap();

    let codes: Vec<_> = rows.iter().map(|c| c.code().as_str()).collect();
    assert_eq!(codes, vec!["MA102", "MA101"]);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_学生の履修クラスはクラスの並び順キーで返る(pool: PgPool) {
    let dept = department("情報工学科", t0());
    PostgresDepartmentRepository::new(pool.clone())
        .insert(&dept)
        .await
        .unwrap();
    let course = Course::new(
        CourseId::new(),
        *dept.id(),
        CourseCode::new("CS101").unwrap(),
        CourseTitle::new("プログラミング入門").unwrap(),
        Credits::new(2).unwrap(),
        t0(),
    );
    PostgresCourseRepository::new(pool.clone())
        .insert(&course)
        .await
        .unwrap();

    let student_id = StudentId::new();
    sqlx::query("INSERT INTO students (id, student_number, name, created_at) VALUES ($1, 'S001', '山田花子', $2)")
        .bind(student_id.as_uuid())
        .bind(t0())
        .execute(&pool)
        .await
        .unwrap();

    let mut classes = Vec::new();
    for i in 0..3 {
        let class = SchoolClass::new(
            ClassId::new(),
            *course.id(),
            TeacherId::new(),
            ClassName::new(format!("クラス{i}")).unwrap(),
            t0() + Duration::seconds(i),
        );
        sqlx::query("INSERT INTO classes (id, course_id, teacher_id, name, created_at) VALUES ($1, $2, $3, $4, $5)")
            .bind(class.id().as_uuid())
            .bind(class.course_id().as_uuid())
            .bind(class.teacher_id().as_uuid())
            .bind(class.name().as_str())
            .bind(class.created_at())
            .execute(&pool)
            .await
            .unwrap();
        classes.push(class);
    }
    // 履修登録はクラス作成と逆順に行う
    for (i, class) in classes.iter().enumerate() {
        if i == 1 {
            continue;
        }
        sqlx::query("INSERT INTO class_enrollments (class_id, student_id, created_at) VALUES ($1, $2, $3)")
            .bind(class.id().as_uuid())
            .bind(student_id.as_uuid())
            .bind(t0() + Duration::hours(1) - Duration::seconds(i as i64))
            .execute(&pool)
            .await
            .unwrap();
    }

    let repo = PostgresClassRepository::new(pool);
    let query = gakuen_domain::pagination::KeysetQuery::first_page(PageLimit::default());
    let rows = repo.find_page_by_student(&student_id, &query).await.unwrap();

    let keys: Vec<_> = rows.iter().map(|c| c.ordering_key()).collect();
    assert_eq!(
        keys,
        vec![classes[2].ordering_key(), classes[0].ordering_key()]
    );
}
