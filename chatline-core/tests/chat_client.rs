//! Integration tests for the backend client against a mocked server.

use chatline_core::client::{
    ChatClient, CONNECTION_ERROR_FALLBACK, PROCESSING_ERROR_FALLBACK,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn send_message_resolves_the_response_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({"message": "Hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "Hi there!",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ChatClient::new(&server.uri()).expect("client");
    let reply = client.send_message("Hello").await;
    assert_eq!(reply.as_deref(), Some("Hi there!"));
}

#[tokio::test]
async fn extra_reply_fields_are_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "Hi there!",
            "timestamp": "2024-01-01T00:00:00",
            "user_message": "Hello",
            "status": "success",
        })))
        .mount(&server)
        .await;

    let client = ChatClient::new(&server.uri()).expect("client");
    let reply = client.send_message("Hello").await;
    assert_eq!(reply.as_deref(), Some("Hi there!"));
}

#[tokio::test]
async fn backend_error_maps_to_the_processing_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": "No message provided",
        })))
        .mount(&server)
        .await;

    let client = ChatClient::new(&server.uri()).expect("client");
    let reply = client.send_message("Hello").await;
    assert_eq!(reply.as_deref(), Some(PROCESSING_ERROR_FALLBACK));
}

#[tokio::test]
async fn error_status_with_a_json_body_is_a_backend_error_not_transport() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": "internal failure",
        })))
        .mount(&server)
        .await;

    let client = ChatClient::new(&server.uri()).expect("client");
    let reply = client.send_message("Hello").await;
    assert_eq!(reply.as_deref(), Some(PROCESSING_ERROR_FALLBACK));
}

#[tokio::test]
async fn non_json_body_maps_to_the_connection_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = ChatClient::new(&server.uri()).expect("client");
    let reply = client.send_message("Hello").await;
    assert_eq!(reply.as_deref(), Some(CONNECTION_ERROR_FALLBACK));
}

#[tokio::test]
async fn transport_failure_maps_to_the_connection_fallback() {
    // Take a port, then free it again so the connection is refused.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = ChatClient::new(&uri).expect("client");
    let reply = client.send_message("Hello").await;
    assert_eq!(reply.as_deref(), Some(CONNECTION_ERROR_FALLBACK));
}

#[tokio::test]
async fn reply_with_neither_field_yields_no_bot_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
        })))
        .mount(&server)
        .await;

    let client = ChatClient::new(&server.uri()).expect("client");
    let reply = client.send_message("Hello").await;
    assert_eq!(reply, None);
}

#[tokio::test]
async fn response_field_wins_when_both_are_present() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "Hi there!",
            "error": "ignored",
        })))
        .mount(&server)
        .await;

    let client = ChatClient::new(&server.uri()).expect("client");
    let reply = client.send_message("Hello").await;
    assert_eq!(reply.as_deref(), Some("Hi there!"));
}

#[tokio::test]
async fn check_health_returns_the_parsed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "healthy",
            "version": "1.0.0",
        })))
        .mount(&server)
        .await;

    let client = ChatClient::new(&server.uri()).expect("client");
    let body = client.check_health().await.expect("health");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn check_health_surfaces_transport_failures_to_the_caller() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = ChatClient::new(&uri).expect("client");
    assert!(client.check_health().await.is_err());
}

#[test]
fn invalid_base_url_is_rejected_up_front() {
    assert!(ChatClient::new("not a url").is_err());
}
