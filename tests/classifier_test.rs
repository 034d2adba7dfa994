// Integration tests for the OpenAI classifier against a mocked endpoint

use std::sync::Arc;

use tudonum::catalog::RouteCatalog;
use tudonum::classifier::{ClassifyError, IntentClassifier, OpenAiClassifier};

fn classifier_for(server: &mockito::ServerGuard) -> OpenAiClassifier {
    OpenAiClassifier::new(
        "test-key".to_string(),
        server.url(),
        "gpt-4-turbo".to_string(),
        Arc::new(RouteCatalog::builtin()),
    )
    .expect("classifier creation")
}

fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

#[tokio::test]
async fn test_classify_parses_completion_json() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(
            r#"{"role": "service_provider", "module": "food partner"}"#,
        ))
        .create_async()
        .await;

    let classifier = classifier_for(&server);
    let classification = classifier
        .classify("I want to register my hotel")
        .await
        .unwrap();

    assert_eq!(classification.role, "service_provider");
    assert_eq!(classification.module, "food partner");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_classify_handles_fenced_completion() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(
            "```json\n{\"role\": \"general_user\", \"module\": \"taxi booking\"}\n```",
        ))
        .create_async()
        .await;

    let classifier = classifier_for(&server);
    let classification = classifier.classify("book me a ride").await.unwrap();

    assert_eq!(classification.module, "taxi booking");
}

#[tokio::test]
async fn test_classify_request_embeds_query() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(mockito::Matcher::AllOf(vec![
            mockito::Matcher::PartialJson(serde_json::json!({"model": "gpt-4-turbo"})),
            mockito::Matcher::Regex("I want to register my hotel".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(
            r#"{"role": "service_provider", "module": "food partner"}"#,
        ))
        .create_async()
        .await;

    let classifier = classifier_for(&server);
    classifier
        .classify("I want to register my hotel")
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_classify_maps_error_status_to_upstream() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(429)
        .with_body(r#"{"error": {"message": "rate limited"}}"#)
        .create_async()
        .await;

    let classifier = classifier_for(&server);
    let err = classifier.classify("anything").await.unwrap_err();

    assert!(matches!(err, ClassifyError::Upstream(_)));
    assert!(err.to_string().contains("429"));
}

#[tokio::test]
async fn test_classify_maps_empty_choices_to_upstream() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "chatcmpl-test", "object": "chat.completion", "choices": []}"#)
        .create_async()
        .await;

    let classifier = classifier_for(&server);
    let err = classifier.classify("anything").await.unwrap_err();

    assert!(matches!(err, ClassifyError::Upstream(_)));
}

#[tokio::test]
async fn test_classify_maps_prose_completion_to_malformed() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("I am not sure which module you meant."))
        .create_async()
        .await;

    let classifier = classifier_for(&server);
    let err = classifier.classify("anything").await.unwrap_err();

    assert!(matches!(err, ClassifyError::Malformed(_)));
}

#[tokio::test]
async fn test_classify_maps_unreachable_server_to_upstream() {
    // Port 9 on localhost is expected to refuse connections
    let classifier = OpenAiClassifier::new(
        "test-key".to_string(),
        "http://127.0.0.1:9".to_string(),
        "gpt-4-turbo".to_string(),
        Arc::new(RouteCatalog::builtin()),
    )
    .expect("classifier creation");

    let err = classifier.classify("anything").await.unwrap_err();
    assert!(matches!(err, ClassifyError::Upstream(_)));
}
