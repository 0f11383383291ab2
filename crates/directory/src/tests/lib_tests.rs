use std::time::Duration;

use axum::{extract::Path, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use super::*;
use shared::domain::PostId;

async fn stub_user(Path(id): Path<i64>) -> impl IntoResponse {
    match id {
        1 => Json(json!({
            "id": 1, "name": "Ada", "username": "ada", "email": "ada@example.com"
        }))
        .into_response(),
        9 => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn stub_posts(Path(id): Path<i64>) -> impl IntoResponse {
    match id {
        1 => Json(json!([
            {"id": 1, "userId": 1, "title": "T1", "body": "b1"},
            {"id": 2, "userId": 1, "title": "T2", "body": "b2"},
        ]))
        .into_response(),
        2 => Json(json!({"id": 3, "userId": 2, "title": "only", "body": "b"})).into_response(),
        3 => Json(json!([])).into_response(),
        4 => Json(json!(null)).into_response(),
        _ => StatusCode::BAD_GATEWAY.into_response(),
    }
}

async fn stub_users() -> impl IntoResponse {
    Json(json!([
        {"id": 1, "name": "Ada", "username": "ada", "email": "ada@example.com"},
        {"id": 2, "name": "Grace", "username": "grace", "email": "grace@example.com"},
    ]))
}

async fn spawn_stub_upstream() -> String {
    let app = Router::new()
        .route("/users", get(stub_users))
        .route("/users/:id", get(stub_user))
        .route("/users/:id/posts", get(stub_posts));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

fn directory(base: &str) -> HttpDirectory {
    HttpDirectory::new(base, Duration::from_secs(2)).expect("client")
}

#[tokio::test]
async fn get_user_decodes_profile() {
    let base = spawn_stub_upstream().await;
    let user = directory(&base).get_user(UserId(1)).await.expect("user");
    assert_eq!(user.id, UserId(1));
    assert_eq!(user.name, "Ada");
}

#[tokio::test]
async fn missing_user_maps_to_not_found() {
    let base = spawn_stub_upstream().await;
    let err = directory(&base)
        .get_user(UserId(404))
        .await
        .expect_err("should fail");
    assert!(matches!(err, LookupError::NotFound { .. }));
}

#[tokio::test]
async fn server_error_maps_to_upstream() {
    let base = spawn_stub_upstream().await;
    let err = directory(&base)
        .get_user(UserId(9))
        .await
        .expect_err("should fail");
    assert!(matches!(err, LookupError::Upstream { .. }));
}

#[tokio::test]
async fn posts_list_keeps_retrieval_order() {
    let base = spawn_stub_upstream().await;
    let posts = directory(&base)
        .get_user_posts(UserId(1))
        .await
        .expect("posts")
        .into_vec();
    let ids: Vec<_> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, [PostId(1), PostId(2)]);
}

#[tokio::test]
async fn single_post_body_normalizes_to_one_element() {
    let base = spawn_stub_upstream().await;
    let posts = directory(&base)
        .get_user_posts(UserId(2))
        .await
        .expect("posts")
        .into_vec();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "only");
}

#[tokio::test]
async fn null_posts_body_normalizes_to_empty() {
    let base = spawn_stub_upstream().await;
    let empty = directory(&base)
        .get_user_posts(UserId(3))
        .await
        .expect("posts");
    assert!(empty.into_vec().is_empty());
    let null_body = directory(&base)
        .get_user_posts(UserId(4))
        .await
        .expect("posts");
    assert!(null_body.into_vec().is_empty());
}

#[tokio::test]
async fn unreachable_upstream_maps_to_upstream_error() {
    // Reserved port with nothing listening.
    let err = directory("http://127.0.0.1:1")
        .get_all_users()
        .await
        .expect_err("should fail");
    assert!(matches!(err, LookupError::Upstream { .. }));
}

#[tokio::test]
async fn fixture_directory_round_trips_seed_data() {
    let fixture = FixtureDirectory::seeded();
    let users = fixture.get_all_users().await.expect("users");
    assert!(!users.is_empty());

    let first = users.first().expect("seeded user").clone();
    let fetched = fixture.get_user(first.id).await.expect("user");
    assert_eq!(fetched, first);

    let err = fixture
        .get_user(UserId(9999))
        .await
        .expect_err("should fail");
    assert!(matches!(err, LookupError::NotFound { .. }));

    // Unknown ids still answer an empty list, like the real upstream.
    let posts = fixture.get_user_posts(UserId(9999)).await.expect("posts");
    assert!(posts.into_vec().is_empty());
}
