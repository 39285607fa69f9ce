use common::{TEST_SECRET, TestContext, bearer, message};
use lineup_auth::{
    jwt::JwtKeys,
    token::{Principal, issue},
};
use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

mod common;

#[tokio::test]
async fn test_no_header_is_missing_token() {
    let ctx = TestContext::spawn().await;

    let response = ctx.api.get("user", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(message(response).await, "Missing token");
}

#[tokio::test]
async fn test_empty_bearer_is_invalid_not_missing() {
    let ctx = TestContext::spawn().await;

    let response = ctx.api.get("user", Some("Bearer ")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(message(response).await, "Invalid token");

    let response = ctx.api.get("user", Some("")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(message(response).await, "Invalid token");
}

#[tokio::test]
async fn test_malformed_and_forged_tokens_share_a_message() {
    let ctx = TestContext::spawn().await;
    let foreign = JwtKeys::new("not-the-server-secret").unwrap();
    let forged = issue(&foreign, &Principal::new(Uuid::new_v4())).unwrap();

    for header in [
        String::from("Basic dXNlcjpwYXNz"),
        String::from("Bearer not.a.token"),
        bearer(&forged),
    ] {
        let response = ctx.api.get("user", Some(&header)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(message(response).await, "Invalid token");
    }
}

#[tokio::test]
async fn test_token_signed_with_server_secret_is_admitted() {
    let ctx = TestContext::spawn().await;
    let keys = JwtKeys::new(TEST_SECRET).unwrap();
    let token = issue(&keys, &Principal::new(Uuid::new_v4())).unwrap();

    let response = ctx.api.get("user", Some(&bearer(&token))).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_gated_update_with_token() {
    let ctx = TestContext::spawn().await;
    let token = ctx.token("a@x.com").await;
    let auth = bearer(&token);

    let body = ctx.lineup_body("ShockDart1").await;
    let response = ctx.api.post("lineup", &body, Some(&auth)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let lineup: Value = response.json().await.unwrap();

    let response = ctx
        .api
        .put(
            &format!("lineup/{}", lineup["id"].as_str().unwrap()),
            &json!({ "name": "Renamed1" }),
            Some(&auth),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["name"], "Renamed1");
    assert_eq!(updated["id"], lineup["id"]);
}

#[tokio::test]
async fn test_rejected_request_never_reaches_store() {
    let ctx = TestContext::spawn().await;
    let token = ctx.token("a@x.com").await;

    let body = ctx.lineup_body("ShockDart1").await;
    let response = ctx.api.post("lineup", &body, Some(&bearer(&token))).await;
    let lineup: Value = response.json().await.unwrap();
    let path = format!("lineup/{}", lineup["id"].as_str().unwrap());

    let before = ctx.store.operations();
    let response = ctx
        .api
        .put(&path, &json!({ "name": "Hijacked1" }), None)
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(message(response).await, "Missing token");

    let response = ctx.api.delete(&path, Some("Bearer forged")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = ctx.api.post("lineup", &body, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ctx.store.operations(), before);

    let response = ctx.api.get(&path, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let stored: Value = response.json().await.unwrap();
    assert_eq!(stored["name"], "ShockDart1");
}

#[tokio::test]
async fn test_public_routes_need_no_token() {
    let ctx = TestContext::spawn().await;

    for endpoint in ["lineup", "side", "site"] {
        let response = ctx.api.get(endpoint, None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_public_deletes_leave_lineups_alone() {
    let ctx = TestContext::spawn().await;
    let token = ctx.token("a@x.com").await;

    let body = ctx.lineup_body("ShockDart1").await;
    let response = ctx.api.post("lineup", &body, Some(&bearer(&token))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let lineup: Value = response.json().await.unwrap();

    for path in [
        format!("side/{}", body["sideId"].as_str().unwrap()),
        format!("site/{}", body["siteId"].as_str().unwrap()),
    ] {
        let response = ctx.api.delete(&path, None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let response = ctx
        .api
        .get(&format!("lineup/{}", lineup["id"].as_str().unwrap()), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_api_docs_are_public() {
    let ctx = TestContext::spawn().await;

    let response = ctx.api.get("api-docs/openapi.json", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let doc: Value = response.json().await.unwrap();
    assert_eq!(
        doc["components"]["securitySchemes"]["bearerAuth"]["scheme"],
        "bearer"
    );
    assert!(doc["paths"]["/login"]["post"].is_object());
    assert!(doc["paths"]["/lineup/{id}"]["delete"]["security"].is_array());
    assert!(doc["paths"]["/side/{id}"]["delete"]["security"].is_null());
}
