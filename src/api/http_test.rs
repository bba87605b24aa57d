use super::*;
use crate::api::UserType;
use crate::config::Timeouts;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Form, Json, Router};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Seen = Arc<Mutex<Vec<(String, HashMap<String, String>)>>>;

async fn spawn_backend(router: Router) -> HttpBackend {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    let config = ClientConfig::new(&format!("http://{addr}/"), None, Timeouts { request_secs: 5, connect_secs: 5 });
    HttpBackend::new(config).unwrap()
}

fn recording_router(seen: Seen) -> Router {
    async fn add_user(State(seen): State<Seen>, Form(body): Form<HashMap<String, String>>) -> StatusCode {
        seen.lock().unwrap().push(("/add_user".into(), body));
        StatusCode::OK
    }

    async fn login(State(seen): State<Seen>, Form(body): Form<HashMap<String, String>>) -> Json<serde_json::Value> {
        let ok = body.get("pass").map(String::as_str) == Some("secret");
        seen.lock().unwrap().push(("/login".into(), body));
        if ok {
            Json(json!({ "result": true, "to": "/gamelist?key=k1" }))
        } else {
            Json(json!({ "result": false, "message": "wrong mail or password" }))
        }
    }

    async fn add_game(State(seen): State<Seen>, Form(body): Form<HashMap<String, String>>) -> StatusCode {
        seen.lock().unwrap().push(("/add_game".into(), body));
        StatusCode::OK
    }

    Router::new()
        .route("/add_user", post(add_user))
        .route("/login", post(login))
        .route("/add_game", post(add_game))
        .with_state(seen)
}

// =============================================================================
// pure parsing
// =============================================================================

#[test]
fn parse_ack_treats_blank_body_as_null() {
    assert_eq!(parse_ack("").unwrap(), Value::Null);
    assert_eq!(parse_ack("  \n").unwrap(), Value::Null);
    assert_eq!(parse_ack(r#"{"id":"g1"}"#).unwrap(), json!({ "id": "g1" }));
}

#[test]
fn parse_ack_rejects_non_json() {
    assert!(matches!(parse_ack("<html>"), Err(ApiError::Parse(_))));
}

#[test]
fn parse_login_response_requires_result() {
    assert!(matches!(parse_login_response(r#"{"to":"/x"}"#), Err(ApiError::Parse(_))));
    let parsed = parse_login_response(r#"{"result":false, "message":"no"}"#).unwrap();
    assert_eq!(parsed.message.as_deref(), Some("no"));
}

// =============================================================================
// against a local server
// =============================================================================

#[tokio::test]
async fn add_user_posts_form_fields() {
    let seen = Seen::default();
    let backend = spawn_backend(recording_router(seen.clone())).await;
    let form = AddUserForm {
        user_type: UserType::Normal,
        user_name: "alice".into(),
        user_pass: "pw".into(),
        user_mail: "alice@example.com".into(),
        user_oauth_id: String::new(),
    };

    backend.add_user(&form).await.unwrap();

    let seen = seen.lock().unwrap();
    let (path, body) = &seen[0];
    assert_eq!(path, "/add_user");
    assert_eq!(body["user_type"], "normal");
    assert_eq!(body["user_name"], "alice");
    assert_eq!(body["user_pass"], "pw");
    assert_eq!(body["user_mail"], "alice@example.com");
    assert_eq!(body["user_oauth_id"], "");
}

#[tokio::test]
async fn login_decodes_both_outcomes() {
    let seen = Seen::default();
    let backend = spawn_backend(recording_router(seen.clone())).await;

    let ok = backend
        .login(&LoginForm { mail: "a@b.c".into(), pass: "secret".into() })
        .await
        .unwrap();
    assert_eq!(ok, LoginResponse { result: true, message: None, to: Some("/gamelist?key=k1".into()) });

    let failed = backend
        .login(&LoginForm { mail: "a@b.c".into(), pass: "nope".into() })
        .await
        .unwrap();
    assert!(!failed.result);
    assert_eq!(failed.message.as_deref(), Some("wrong mail or password"));

    assert_eq!(seen.lock().unwrap()[0].1["mail"], "a@b.c");
}

#[tokio::test]
async fn add_game_accepts_empty_acknowledgement() {
    let seen = Seen::default();
    let backend = spawn_backend(recording_router(seen.clone())).await;
    let form = AddGameForm { user_key: "k1".into(), game_name: "Lab".into(), game_description: "Escape".into() };

    let ack = backend.add_game(&form).await.unwrap();
    assert_eq!(ack, Value::Null);

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].0, "/add_game");
    assert_eq!(seen[0].1["user_key"], "k1");
    assert_eq!(seen[0].1["game_name"], "Lab");
    assert_eq!(seen[0].1["game_description"], "Escape");
}

#[tokio::test]
async fn non_success_status_is_reported_with_body() {
    async fn fail() -> (StatusCode, &'static str) {
        (StatusCode::INTERNAL_SERVER_ERROR, "boom")
    }
    let backend = spawn_backend(Router::new().route("/login", post(fail))).await;

    let err = backend
        .login(&LoginForm { mail: "a".into(), pass: "b".into() })
        .await
        .unwrap_err();
    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_backend_is_a_request_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let config = ClientConfig::new(&format!("http://{addr}"), None, Timeouts { request_secs: 2, connect_secs: 2 });
    let backend = HttpBackend::new(config).unwrap();

    let err = backend.add_game(&AddGameForm {
        user_key: "k".into(),
        game_name: "n".into(),
        game_description: "d".into(),
    })
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::Request(_)));
}
