//! 提交服务层测试，通过注入内存存储与请求扩展中的用户模拟完整请求。

use actix_web::{HttpMessage, HttpRequest, test::TestRequest};
use chrono::{Duration, Utc};
use std::sync::Arc;

use super::SubmissionService;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::submissions::entities::{FileMeta, SubmissionStatus};
use crate::models::submissions::requests::{CreateSubmissionRequest, ReturnSubmissionRequest};
use crate::models::users::entities::{User, UserRole};
use crate::models::users::requests::CreateUserRequest;
use crate::storage::{Storage, sea_orm_storage::SeaOrmStorage};

async fn memory_storage() -> Arc<dyn Storage> {
    Arc::new(
        SeaOrmStorage::new_with_url(":memory:", 1, 5)
            .await
            .expect("内存数据库初始化失败"),
    )
}

async fn seed_user(storage: &Arc<dyn Storage>, name: &str, email: &str, role: UserRole) -> User {
    storage
        .create_user(CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: "hashed-password".to_string(),
            role,
        })
        .await
        .expect("创建用户失败")
}

async fn seed_assignment(storage: &Arc<dyn Storage>, teacher_id: i64) -> i64 {
    storage
        .create_assignment(
            teacher_id,
            CreateAssignmentRequest {
                title: "操作系统第二次作业".to_string(),
                description: "实现一个简单的调度器".to_string(),
                subject: "操作系统".to_string(),
                deadline: Utc::now() + Duration::days(7),
                max_marks: 100,
                allowed_file_types: vec!["pdf".to_string()],
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
        filename: "d4e5f6.pdf".to_string(),
        original_name: "scheduler.pdf".to_string(),
        path: "uploads/d4e5f6.pdf".to_string(),
        size: 4096,
        mimetype: "application/pdf".to_string(),
    }]
}

// 构造携带已认证用户的请求，等价于经过 RequireJWT 之后的状态
fn request_as(user: &User) -> HttpRequest {
    let req = TestRequest::default().to_http_request();
    req.extensions_mut().insert(user.clone());
    req
}

#[tokio::test]
async fn test_intake_empty_files_rejected_without_record() {
    let storage = memory_storage().await;
    let teacher = seed_user(&storage, "王老师", "teacher@example.com", UserRole::Teacher).await;
    let student = seed_user(&storage, "张三", "student@example.com", UserRole::Student).await;
    let assignment = seed_assignment(&storage, teacher.id).await;

    let service = SubmissionService::new_with_storage(storage.clone());
    let req = request_as(&student);

    let resp = service
        .create_submission(
            &req,
            CreateSubmissionRequest {
                assignment_id: assignment,
                files: vec![],
                comments: String::new(),
            },
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

    // 被拒绝的提交不留任何记录
    let existing = storage
        .get_submission_by_assignment_and_student(assignment, student.id)
        .await
        .unwrap();
    assert!(existing.is_none());
}

#[tokio::test]
async fn test_intake_missing_assignment_not_found() {
    let storage = memory_storage().await;
    let student = seed_user(&storage, "张三", "student@example.com", UserRole::Student).await;

    let service = SubmissionService::new_with_storage(storage.clone());
    let req = request_as(&student);

    let resp = service
        .create_submission(
            &req,
            CreateSubmissionRequest {
                assignment_id: 9999,
                files: sample_files(),
                comments: String::new(),
            },
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

    let submissions = storage.list_submissions_by_student(student.id).await.unwrap();
    assert!(submissions.is_empty());
}

#[tokio::test]
async fn test_intake_inactive_assignment_not_found() {
    let storage = memory_storage().await;
    let teacher = seed_user(&storage, "王老师", "teacher@example.com", UserRole::Teacher).await;
    let student = seed_user(&storage, "张三", "student@example.com", UserRole::Student).await;
    let assignment = seed_assignment(&storage, teacher.id).await;
    storage.deactivate_assignment(assignment).await.unwrap();

    let service = SubmissionService::new_with_storage(storage.clone());
    let req = request_as(&student);

    let resp = service
        .create_submission(
            &req,
            CreateSubmissionRequest {
                assignment_id: assignment,
                files: sample_files(),
                comments: String::new(),
            },
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

    let existing = storage
        .get_submission_by_assignment_and_student(assignment, student.id)
        .await
        .unwrap();
    assert!(existing.is_none());
}

#[tokio::test]
async fn test_return_accepts_empty_feedback() {
    let storage = memory_storage().await;
    let teacher = seed_user(&storage, "王老师", "teacher@example.com", UserRole::Teacher).await;
    let student = seed_user(&storage, "张三", "student@example.com", UserRole::Student).await;
    let assignment = seed_assignment(&storage, teacher.id).await;

    let submission = storage
        .create_submission(
            student.id,
            CreateSubmissionRequest {
                assignment_id: assignment,
                files: sample_files(),
                comments: String::new(),
            },
            SubmissionStatus::Submitted,
            Utc::now(),
        )
        .await
        .unwrap();

    storage
        .grade_submission(submission.id, 60, "先批一版".to_string(), teacher.id, Utc::now())
        .await
        .unwrap();

    let service = SubmissionService::new_with_storage(storage.clone());
    let req = request_as(&teacher);

    // 反馈允许为空
    let resp = service
        .return_submission(
            &req,
            submission.id,
            ReturnSubmissionRequest {
                feedback: String::new(),
            },
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

    let returned = storage
        .get_submission_by_id(submission.id)
        .await
        .unwrap()
        .expect("提交应仍然存在");
    assert_eq!(returned.status, SubmissionStatus::Returned);
    assert_eq!(returned.feedback, "");
    // 已有分数与批改记录保留
    assert_eq!(returned.marks, Some(60));
    assert_eq!(returned.graded_by, Some(teacher.id));
}
