use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use hhub_server::Server;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn request(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, bytes.to_vec())
}

#[tokio::test]
async fn built_server_serves_health_roster_and_docs() {
    let server = Server::builder().database_url("sqlite::memory:").build().await.expect("server");
    assert_eq!(server.state().slice_count(), 1);
    let app = server.app();

    let (status, body) = request(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(health["status"], "up");

    let (status, body) = request(
        &app,
        Method::POST,
        "/heroes",
        Some(json!({ "name": "Doreen Green", "super_name": "Squirrel Girl" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let hero: Value = serde_json::from_slice(&body).expect("json");

    let (status, body) = request(&app, Method::GET, "/heroes", None).await;
    assert_eq!(status, StatusCode::OK);
    let heroes: Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(heroes, json!([hero]));

    let (status, _) = request(&app, Method::GET, "/api", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn build_fails_for_an_empty_database_url() {
    let err = Server::builder().database_url("  ").build().await.unwrap_err();
    assert!(err.to_string().contains("database"), "{err}");
}
