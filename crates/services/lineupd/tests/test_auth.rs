use common::{TestContext, bearer, message};
use reqwest::{StatusCode, header};
use serde_json::{Value, json};

mod common;

#[tokio::test]
async fn test_register_then_login() {
    let ctx = TestContext::spawn().await;
    let user = ctx.register("a@x.com", "Secret123").await;
    assert_eq!(user["email"], "a@x.com");
    assert!(user.get("hash").is_none());
    assert!(user.get("password").is_none());

    let response = ctx
        .api
        .post(
            "login",
            &json!({ "email": "a@x.com", "password": "Secret123" }),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let header = response
        .headers()
        .get(header::AUTHORIZATION)
        .expect("Login without Authorization header")
        .to_str()
        .unwrap()
        .to_string();
    let body: Value = response.json().await.unwrap();

    let token = body["token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert_eq!(body["auth"], true);
    assert_eq!(body["user"]["id"], user["id"]);
    assert!(body["user"].get("hash").is_none());
    assert_eq!(header, bearer(token));
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let ctx = TestContext::spawn().await;
    ctx.register("a@x.com", "Secret123").await;

    let response = ctx
        .api
        .post("login", &json!({ "email": "a@x.com", "password": "wrong" }), None)
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_failures_look_the_same() {
    let ctx = TestContext::spawn().await;
    ctx.register("a@x.com", "Secret123").await;

    let wrong_password = ctx
        .api
        .post("login", &json!({ "email": "a@x.com", "password": "wrong" }), None)
        .await;
    let unknown_user = ctx
        .api
        .post(
            "login",
            &json!({ "email": "nouser@x.com", "password": "whatever" }),
            None,
        )
        .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), wrong_password.status());

    let wrong_password: Value = wrong_password.json().await.unwrap();
    let unknown_user: Value = unknown_user.json().await.unwrap();
    assert_eq!(wrong_password, unknown_user);
    assert!(wrong_password["message"].is_string());
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let ctx = TestContext::spawn().await;
    ctx.register("a@x.com", "Secret123").await;

    let response = ctx
        .api
        .post(
            "user",
            &json!({ "username": "again", "email": "a@x.com", "password": "Other123" }),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_invalid_registration_is_bad_request() {
    let ctx = TestContext::spawn().await;

    let response = ctx
        .api
        .post(
            "user",
            &json!({ "username": "bob", "email": "not-an-email", "password": "Secret123" }),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!message(response).await.is_empty());
}

#[tokio::test]
async fn test_cookie_session_and_logout() {
    let ctx = TestContext::spawn().await;
    ctx.register("a@x.com", "Secret123").await;
    let browser = ctx.cookie_client();

    let response = browser
        .post(
            "login",
            &json!({ "email": "a@x.com", "password": "Secret123" }),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = browser.get("user", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = browser.post_no_body("logout").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!message(response).await.is_empty());

    let response = browser.get("user", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(message(response).await, "Missing token");
}

#[tokio::test]
async fn test_logout_keeps_tokens_valid() {
    let ctx = TestContext::spawn().await;
    let token = ctx.token("a@x.com").await;

    let response = ctx.api.post_no_body("logout").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = ctx.api.get("user", Some(&bearer(&token))).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_empty_password_is_unauthorized() {
    let ctx = TestContext::spawn().await;
    ctx.register("a@x.com", "Secret123").await;

    let wrong_password = ctx
        .api
        .post("login", &json!({ "email": "a@x.com", "password": "wrong" }), None)
        .await;
    let expected: Value = wrong_password.json().await.unwrap();

    for body in [
        json!({ "email": "a@x.com", "password": "" }),
        json!({ "email": "nouser@x.com", "password": "" }),
        json!({ "email": "a@x.com" }),
    ] {
        let response = ctx.api.post("login", &body, None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, expected);
    }
}

#[tokio::test]
async fn test_bad_header_keeps_a_good_cookie() {
    let ctx = TestContext::spawn().await;
    ctx.register("a@x.com", "Secret123").await;
    let browser = ctx.cookie_client();

    let response = browser
        .post(
            "login",
            &json!({ "email": "a@x.com", "password": "Secret123" }),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = browser.get("user", Some("Bearer broken")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(message(response).await, "Invalid token");

    let response = browser.get("user", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}
