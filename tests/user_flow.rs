mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};

#[tokio::test]
async fn test_register_flow_success() {
    println!("\n\n[+] Running test: test_register_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let user_data = test_data::sample_user();
    println!("[>] Sending request to register user: {}", user_data.username);

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(&user_data)
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["username"], "alice");
    let user_id = body["id"].as_i64().unwrap() as i32;

    // Verify user was created in database
    let user = ctx.db.find_user_by_username("alice").await.unwrap();
    assert!(user.is_some());
    assert_eq!(user.unwrap().id, user_id);
    println!("[/] Test passed: register flow successful.");
}

#[tokio::test]
async fn test_register_seeds_first_document() {
    println!("\n\n[+] Running test: test_register_seeds_first_document");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(test_data::sample_user())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let user_id = body["id"].as_i64().unwrap() as i32;

    let docs = ctx.db.list_documents(user_id).await.unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].title, "My First Document");
    assert_eq!(docs[0].content, "");
    println!("[/] Test passed: new user owns exactly one seeded document.");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    println!("\n\n[+] Running test: test_register_duplicate_username");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let user_data = test_data::sample_user();

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(&user_data)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    println!("[>] Registering the same username a second time.");
    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(&user_data)
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Username already registered");
    println!("[/] Test passed: duplicate username rejected.");
}

#[tokio::test]
async fn test_login_flow_success() {
    println!("\n\n[+] Running test: test_login_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let user_data = test_data::sample_user();
    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(&user_data)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    println!("[>] Logging in as {}", user_data.username);
    let req = test::TestRequest::post()
        .uri("/login")
        .set_form(&user_data)
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "bearer");

    // The token's subject claim is the username it was issued for.
    let token = body["access_token"].as_str().unwrap();
    let claims = client.issuer.verify(token).unwrap();
    assert_eq!(claims.sub, "alice");
    println!("[/] Test passed: login issued a verifiable bearer token.");
}

#[tokio::test]
async fn test_login_wrong_password() {
    println!("\n\n[+] Running test: test_login_wrong_password");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user("alice", "wonderland").await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form(sharedoc::types::user::RLogin {
            username: "alice".to_string(),
            password: "not-wonderland".to_string(),
        })
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Incorrect username or password");
    println!("[/] Test passed: wrong password rejected.");
}

#[tokio::test]
async fn test_login_unknown_user_same_error() {
    println!("\n\n[+] Running test: test_login_unknown_user_same_error");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    // No such account: the error body must not reveal whether the
    // username exists.
    let req = test::TestRequest::post()
        .uri("/login")
        .set_form(test_data::sample_user_with_name("nobody"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Incorrect username or password");
    println!("[/] Test passed: unknown username yields the same error text.");
}

#[tokio::test]
async fn test_documents_require_auth() {
    println!("\n\n[+] Running test: test_documents_require_auth");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/documents").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/documents")
        .insert_header(("Authorization", "Bearer not-a-real-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    println!("[/] Test passed: missing and invalid tokens both rejected.");
}

#[tokio::test]
async fn test_token_for_deleted_user_rejected() {
    println!("\n\n[+] Running test: test_token_for_deleted_user_rejected");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (user_id, token) = client.create_test_user("ghost", "boo").await;
    assert!(ctx.db.delete_user(user_id).await.unwrap());

    // Valid signature, but the subject no longer exists.
    let req = test::TestRequest::get()
        .uri("/documents")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    println!("[/] Test passed: token for a deleted user is unauthorized.");
}
