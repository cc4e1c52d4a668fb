//! 存储层生命周期测试，使用共享的内存 SQLite。

use super::SeaOrmStorage;
use crate::errors::AssignHubError;
use crate::models::{
    assignments::requests::{CreateAssignmentRequest, UpdateAssignmentRequest},
    submissions::{
        entities::{FileMeta, SubmissionStatus, is_late},
        requests::CreateSubmissionRequest,
    },
    users::{entities::UserRole, requests::CreateUserRequest},
};
use chrono::{Duration, Utc};

// 内存数据库要求连接池恰好一个连接，否则每个连接各有一份空库
async fn memory_storage() -> SeaOrmStorage {
    SeaOrmStorage::new_with_url(":memory:", 1, 5)
        .await
        .expect("内存数据库初始化失败")
}

async fn seed_user(storage: &SeaOrmStorage, name: &str, email: &str, role: UserRole) -> i64 {
    storage
        .create_user_impl(CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: "hashed-password".to_string(),
            role,
        })
        .await
        .expect("创建用户失败")
        .id
}

async fn seed_assignment(storage: &SeaOrmStorage, teacher_id: i64, max_marks: i32) -> i64 {
    storage
        .create_assignment_impl(
            teacher_id,
            CreateAssignmentRequest {
                title: "数据结构第一次作业".to_string(),
                description: "实现平衡二叉树".to_string(),
                subject: "数据结构".to_string(),
                deadline: Utc::now() + Duration::days(7),
                max_marks,
                allowed_file_types: vec!["pdf".to_string(), "zip".to_string()],
                max_file_size: 10,
                attachments: None,
            },
        )
        .await
        .expect("创建作业失败")
        .id
}

fn sample_files() -> Vec<FileMeta> {
    vec![FileMeta {
        filename: "a1b2c3.pdf".to_string(),
        original_name: "report.pdf".to_string(),
        path: "uploads/a1b2c3.pdf".to_string(),
        size: 2048,
        mimetype: "application/pdf".to_string(),
    }]
}

fn submission_request(assignment_id: i64) -> CreateSubmissionRequest {
    CreateSubmissionRequest {
        assignment_id,
        files: sample_files(),
        comments: "第一版".to_string(),
    }
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let storage = memory_storage().await;
    seed_user(&storage, "张三", "zhangsan@example.com", UserRole::Student).await;

    let result = storage
        .create_user_impl(CreateUserRequest {
            name: "李四".to_string(),
            email: "zhangsan@example.com".to_string(),
            password: "hashed-password".to_string(),
            role: UserRole::Student,
        })
        .await;

    assert!(matches!(result, Err(AssignHubError::AlreadyExists(_))));
}

#[tokio::test]
async fn test_duplicate_submission_rejected_and_original_unchanged() {
    let storage = memory_storage().await;
    let teacher = seed_user(&storage, "王老师", "teacher@example.com", UserRole::Teacher).await;
    let student = seed_user(&storage, "张三", "student@example.com", UserRole::Student).await;
    let assignment = seed_assignment(&storage, teacher, 100).await;

    let first = storage
        .create_submission_impl(
            student,
            submission_request(assignment),
            SubmissionStatus::Submitted,
            Utc::now(),
        )
        .await
        .unwrap();

    let mut second_req = submission_request(assignment);
    second_req.comments = "第二版".to_string();
    let second = storage
        .create_submission_impl(
            student,
            second_req,
            SubmissionStatus::Submitted,
            Utc::now(),
        )
        .await;

    assert!(matches!(second, Err(AssignHubError::AlreadyExists(_))));

    // 原提交保持不变
    let stored = storage
        .get_submission_by_assignment_and_student_impl(assignment, student)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.id, first.id);
    assert_eq!(stored.comments, "第一版");

    // 被拒绝的提交不留任何记录
    let all = storage.list_submissions_by_assignment_impl(assignment).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_late_status_persisted_as_given() {
    let storage = memory_storage().await;
    let teacher = seed_user(&storage, "王老师", "teacher@example.com", UserRole::Teacher).await;
    let student = seed_user(&storage, "张三", "student@example.com", UserRole::Student).await;
    let assignment = seed_assignment(&storage, teacher, 100).await;

    let deadline = storage
        .get_assignment_by_id_impl(assignment)
        .await
        .unwrap()
        .unwrap()
        .deadline;
    let submitted_at = deadline + Duration::hours(1);
    let status = if is_late(submitted_at, deadline) {
        SubmissionStatus::Late
    } else {
        SubmissionStatus::Submitted
    };

    let created = storage
        .create_submission_impl(student, submission_request(assignment), status, submitted_at)
        .await
        .unwrap();

    assert_eq!(created.status, SubmissionStatus::Late);
    assert_eq!(created.submitted_at.timestamp(), submitted_at.timestamp());
}

#[tokio::test]
async fn test_deadline_edit_does_not_reclassify() {
    let storage = memory_storage().await;
    let teacher = seed_user(&storage, "王老师", "teacher@example.com", UserRole::Teacher).await;
    let student = seed_user(&storage, "张三", "student@example.com", UserRole::Student).await;
    let assignment = seed_assignment(&storage, teacher, 100).await;

    // 按时提交
    let submitted_at = Utc::now();
    storage
        .create_submission_impl(
            student,
            submission_request(assignment),
            SubmissionStatus::Submitted,
            submitted_at,
        )
        .await
        .unwrap();

    // 截止时间改到提交之前
    storage
        .update_assignment_impl(
            assignment,
            UpdateAssignmentRequest {
                deadline: Some(submitted_at - Duration::days(1)),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    // 已有提交的迟交状态不变
    let stored = storage
        .get_submission_by_assignment_and_student_impl(assignment, student)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, SubmissionStatus::Submitted);
}

#[tokio::test]
async fn test_regrade_overwrites_previous_result() {
    let storage = memory_storage().await;
    let teacher = seed_user(&storage, "王老师", "teacher@example.com", UserRole::Teacher).await;
    let student = seed_user(&storage, "张三", "student@example.com", UserRole::Student).await;
    let assignment = seed_assignment(&storage, teacher, 100).await;

    let submission = storage
        .create_submission_impl(
            student,
            submission_request(assignment),
            SubmissionStatus::Submitted,
            Utc::now(),
        )
        .await
        .unwrap();

    storage
        .grade_submission_impl(submission.id, 60, "还需改进".to_string(), teacher, Utc::now())
        .await
        .unwrap()
        .unwrap();

    let regraded = storage
        .grade_submission_impl(submission.id, 85, "复核后上调".to_string(), teacher, Utc::now())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(regraded.status, SubmissionStatus::Graded);
    assert_eq!(regraded.marks, Some(85));
    assert_eq!(regraded.feedback, "复核后上调");
}

#[tokio::test]
async fn test_return_keeps_marks_and_grader() {
    let storage = memory_storage().await;
    let teacher = seed_user(&storage, "王老师", "teacher@example.com", UserRole::Teacher).await;
    let student = seed_user(&storage, "张三", "student@example.com", UserRole::Student).await;
    let assignment = seed_assignment(&storage, teacher, 100).await;

    let submission = storage
        .create_submission_impl(
            student,
            submission_request(assignment),
            SubmissionStatus::Submitted,
            Utc::now(),
        )
        .await
        .unwrap();

    storage
        .grade_submission_impl(submission.id, 40, "不及格".to_string(), teacher, Utc::now())
        .await
        .unwrap()
        .unwrap();

    let returned = storage
        .return_submission_impl(submission.id, "请补充实验数据后重做".to_string())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(returned.status, SubmissionStatus::Returned);
    assert_eq!(returned.feedback, "请补充实验数据后重做");
    // 分数与批改记录保留
    assert_eq!(returned.marks, Some(40));
    assert_eq!(returned.graded_by, Some(teacher));
    assert!(returned.graded_at.is_some());
}

#[tokio::test]
async fn test_grade_missing_submission_returns_none() {
    let storage = memory_storage().await;
    let teacher = seed_user(&storage, "王老师", "teacher@example.com", UserRole::Teacher).await;

    let result = storage
        .grade_submission_impl(9999, 50, String::new(), teacher, Utc::now())
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_deactivated_assignment_excluded_from_listing() {
    let storage = memory_storage().await;
    let teacher = seed_user(&storage, "王老师", "teacher@example.com", UserRole::Teacher).await;
    let assignment = seed_assignment(&storage, teacher, 100).await;

    assert!(storage.deactivate_assignment_impl(assignment).await.unwrap());

    let listed = storage
        .list_assignments_impl(None, Default::default())
        .await
        .unwrap();
    assert!(listed.is_empty());

    // 直接查询仍可访问（已有提交不受影响）
    let fetched = storage.get_assignment_by_id_impl(assignment).await.unwrap();
    assert!(fetched.is_some_and(|a| !a.is_active));
}

#[tokio::test]
async fn test_average_marks() {
    let storage = memory_storage().await;
    let teacher = seed_user(&storage, "王老师", "teacher@example.com", UserRole::Teacher).await;
    let s1 = seed_user(&storage, "张三", "s1@example.com", UserRole::Student).await;
    let s2 = seed_user(&storage, "李四", "s2@example.com", UserRole::Student).await;
    let assignment = seed_assignment(&storage, teacher, 100).await;

    assert_eq!(storage.average_marks_impl().await.unwrap(), None);

    let sub1 = storage
        .create_submission_impl(
            s1,
            submission_request(assignment),
            SubmissionStatus::Submitted,
            Utc::now(),
        )
        .await
        .unwrap();
    let sub2 = storage
        .create_submission_impl(
            s2,
            submission_request(assignment),
            SubmissionStatus::Late,
            Utc::now(),
        )
        .await
        .unwrap();

    storage
        .grade_submission_impl(sub1.id, 80, String::new(), teacher, Utc::now())
        .await
        .unwrap();
    storage
        .grade_submission_impl(sub2.id, 90, String::new(), teacher, Utc::now())
        .await
        .unwrap();

    assert_eq!(storage.average_marks_impl().await.unwrap(), Some(85.0));
    assert_eq!(
        storage
            .count_submissions_by_status_impl(SubmissionStatus::Graded)
            .await
            .unwrap(),
        2
    );
}

#[tokio::test]
async fn test_toggle_user_active() {
    let storage = memory_storage().await;
    let student = seed_user(&storage, "张三", "student@example.com", UserRole::Student).await;

    let disabled = storage.toggle_user_active_impl(student).await.unwrap().unwrap();
    assert!(!disabled.is_active);

    let enabled = storage.toggle_user_active_impl(student).await.unwrap().unwrap();
    assert!(enabled.is_active);
}
