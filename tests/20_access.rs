mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;
use sqlx::PgPool;

use common::TestApp;
use gradebook_api::database::models::Role;

#[sqlx::test]
async fn non_admin_is_forbidden_on_admin_routes(pool: PgPool) -> Result<()> {
    let app = TestApp::spawn(pool).await?;
    let teacher = app.seed_user("teacher@school.edu", Role::Teacher, false).await?;
    let token = app.token_for(teacher.id)?;

    let res = app.get("/api/admin/students", Some(&token)).await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "You do not have permission to make this request");
    Ok(())
}

#[sqlx::test]
async fn student_is_forbidden_on_teacher_routes(pool: PgPool) -> Result<()> {
    let app = TestApp::spawn(pool).await?;
    let student = app.seed_user("student@school.edu", Role::Student, false).await?;
    let token = app.token_for(student.id)?;

    let res = app.get(&format!("/api/teacher/students/{}", student.id), Some(&token)).await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[sqlx::test]
async fn admin_student_is_not_a_teacher(pool: PgPool) -> Result<()> {
    let app = TestApp::spawn(pool).await?;
    let admin = app.seed_user("office@school.edu", Role::Student, true).await?;
    let token = app.token_for(admin.id)?;

    let res = app.get("/api/admin/teachers", Some(&token)).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.get(&format!("/api/teacher/students/{}", admin.id), Some(&token)).await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[sqlx::test]
async fn teacher_admin_passes_both_policies(pool: PgPool) -> Result<()> {
    let app = TestApp::spawn(pool).await?;
    let head = app.seed_user("head@school.edu", Role::Teacher, true).await?;
    let token = app.token_for(head.id)?;

    let res = app.get("/api/admin/teachers", Some(&token)).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["teachers"].as_array().map(Vec::len), Some(1));

    let res = app.get(&format!("/api/teacher/students/{}", head.id), Some(&token)).await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[sqlx::test]
async fn token_of_deleted_user_is_rejected_on_role_routes(pool: PgPool) -> Result<()> {
    let app = TestApp::spawn(pool).await?;
    let token = app.token_for(uuid::Uuid::new_v4())?;

    let res = app.get("/api/admin/students", Some(&token)).await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[sqlx::test]
async fn invalid_path_id_is_a_bad_request(pool: PgPool) -> Result<()> {
    let app = TestApp::spawn(pool).await?;
    let student = app.seed_user("student@school.edu", Role::Student, false).await?;
    let token = app.token_for(student.id)?;

    let res = app.get("/api/subjects/not-a-uuid", Some(&token)).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert!(body["message"].is_string());
    Ok(())
}

#[sqlx::test]
async fn role_routes_require_a_token(pool: PgPool) -> Result<()> {
    let app = TestApp::spawn(pool).await?;
    let student = uuid::Uuid::new_v4();

    let res = app.get(&format!("/api/teacher/students/{}", student), None).await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "No authentication token provided");

    let res = app.get("/api/admin/students", None).await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "No authentication token provided");
    Ok(())
}

#[sqlx::test]
async fn expired_token_is_rejected_on_every_tier(pool: PgPool) -> Result<()> {
    let app = TestApp::spawn(pool).await?;
    let head = app.seed_user("head@school.edu", Role::Teacher, true).await?;
    let expired = app
        .tokens
        .issue_at(head.id, chrono::Utc::now() - chrono::Duration::days(31))?;

    for path in [
        "/api/auth/user".to_string(),
        format!("/api/teacher/students/{}", head.id),
        "/api/admin/teachers".to_string(),
    ] {
        let res = app.get(&path, Some(&expired)).await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{path}");
        let body: Value = res.json().await?;
        assert_eq!(body["message"], "Failed to authenticate token");
    }

    // Same user, fresh token
    let token = app.token_for(head.id)?;
    let res = app.get("/api/admin/teachers", Some(&token)).await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}
